use std::path::{Path, PathBuf};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::info;
use crate::error::Result;
use crate::spin::SpinEnsemble;

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    Json,
    Csv,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Csv => "csv",
        }
    }
}

/// What a plotting tool needs: the two parallel histories plus the constants that produced them.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrajectoryExport {
    pub t1:f64,
    pub t2:f64,
    pub mz_eq:f64,
    pub time:Vec<f64>,
    pub z_history:Vec<f64>,
    pub xy_history:Vec<f64>,
}

impl TrajectoryExport {
    pub fn from_ensemble(ens:&SpinEnsemble) -> Self {
        let trajectory = ens.trajectory();
        Self {
            t1: ens.relaxation().t1(),
            t2: ens.relaxation().t2(),
            mz_eq: ens.mz_eq(),
            time: trajectory.time_history(),
            z_history: trajectory.z_history(),
            xy_history: trajectory.xy_history(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self)?)
    }

    pub fn from_json(s:&str) -> Result<Self> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn to_csv(&self) -> String {
        let mut s = String::from("index,time,mz,mxy\n");
        for (i,((t,z),xy)) in self.time.iter().zip(&self.z_history).zip(&self.xy_history).enumerate() {
            s.push_str(&utils::vec_to_string(&[i.to_string(),t.to_string(),z.to_string(),xy.to_string()],","));
            s.push('\n');
        }
        s
    }
}

/// Writes the ensemble's trajectory next to `path` using the format's extension.
pub fn write_trajectory(ens:&SpinEnsemble,path:&Path,format:ExportFormat) -> Result<PathBuf> {
    let export = TrajectoryExport::from_ensemble(ens);
    let body = match format {
        ExportFormat::Json => export.to_json()?,
        ExportFormat::Csv => export.to_csv(),
    };
    let written = utils::write_to_file(path,format.extension(),&body)?;
    info!(path = %written.display(),samples = export.z_history.len(),"wrote trajectory");
    Ok(written)
}
