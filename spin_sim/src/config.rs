use std::path::{Path, PathBuf};
use serde::{Deserialize, Serialize};
use toml;
use crate::error::{Result, SimError};
use crate::export::ExportFormat;
use crate::sequence::{EchoTrainParams, PulseSequence};
use crate::spin::{SpinEnsemble, Validation};

#[derive(Clone,Debug,PartialEq,Serialize,Deserialize)]
pub struct RelaxationSettings {
    pub t1:f64,
    pub t2:f64,
    #[serde(default)]
    pub validation:Validation,
}

impl Config for RelaxationSettings {
    fn default() -> Self {
        Self {
            t1: 20.0,
            t2: 60.0,
            validation: Validation::Strict,
        }
    }
}

#[derive(Clone,Debug,PartialEq,Serialize,Deserialize)]
#[serde(tag = "source", rename_all = "snake_case")]
pub enum SequenceSource {
    EchoTrain(EchoTrainParams),
    Custom(PulseSequence),
}

impl SequenceSource {
    pub fn build(&self) -> PulseSequence {
        match &self {
            SequenceSource::EchoTrain(params) => PulseSequence::echo_train(params),
            SequenceSource::Custom(seq) => seq.clone(),
        }
    }
}

impl Config for SequenceSource {
    fn default() -> Self {
        SequenceSource::EchoTrain(EchoTrainParams::default())
    }
}

#[derive(Clone,Debug,PartialEq,Serialize,Deserialize)]
pub struct OutputSettings {
    pub path:PathBuf,
    pub format:ExportFormat,
}

impl Config for OutputSettings {
    fn default() -> Self {
        Self {
            path: PathBuf::from("trajectory"),
            format: ExportFormat::Json,
        }
    }
}

#[derive(Clone,Debug,PartialEq,Serialize,Deserialize)]
pub struct SimulationConfig {
    pub relaxation:RelaxationSettings,
    pub output:OutputSettings,
    pub sequence:SequenceSource,
}

impl Config for SimulationConfig {
    fn default() -> Self {
        Self {
            relaxation: RelaxationSettings::default(),
            output: OutputSettings::default(),
            sequence: SequenceSource::default(),
        }
    }
}

impl ConfigFile for SimulationConfig {

    fn to_file(&self, filename: &Path) -> Result<PathBuf> {
        let t = toml::to_string_pretty(&self)?;
        Ok(utils::write_to_file(filename,&Self::file_ext(),&t)?)
    }

    fn from_file(filename: &Path) -> Result<Self> {
        let t = utils::read_to_string(filename,&Self::file_ext())?;
        Ok(toml::from_str(&t)?)
    }

    fn file_ext() -> String {
        String::from("sim_config")
    }

}

impl SimulationConfig {
    pub fn ensemble(&self) -> Result<SpinEnsemble> {
        SpinEnsemble::with_validation(self.relaxation.t1,self.relaxation.t2,self.relaxation.validation)
    }

    /** Builds the ensemble and runs the configured sequence on it */
    pub fn simulate(&self) -> Result<SpinEnsemble> {
        let mut ens = self.ensemble()?;
        self.sequence.build().run(&mut ens);
        Ok(ens)
    }

    /** All config files directly inside dir, sorted by name */
    pub fn find_all(dir:&Path) -> Result<Vec<PathBuf>> {
        let pattern = format!("*.{}",Self::file_ext());
        utils::get_all_matches(dir,&pattern).ok_or_else(|| SimError::NoConfigs(dir.to_owned()))
    }
}


pub trait Config {
    fn default() -> Self;
}

pub trait ConfigFile: Sized {
    fn to_file(&self, filename:&Path) -> Result<PathBuf>;
    fn from_file(filename:&Path) -> Result<Self>;
    fn file_ext() -> String;
}
