/*
 A pulse sequence is plain data: an ordered list of steps handed to an ensemble.
 Sequences can be written by hand in a config file or generated (echo trains),
 and `run` is the only place that turns them into calls on a SpinEnsemble.
 */

use std::f64::consts::PI;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};
use crate::spin::{SpinEnsemble, DEFAULT_RELAX_STEP};

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Step {
    /// instantaneous rotation by theta radians
    Rotate { theta:f64 },
    /// n relaxation intervals of length `time`, optionally recording after each
    RelaxSteps { n:usize, time:f64, record:bool },
    Record,
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PulseSequence {
    pub steps:Vec<Step>,
}

impl PulseSequence {
    pub fn new() -> Self {
        Self { steps: vec![] }
    }

    pub fn rotate(mut self,theta:f64) -> Self {
        self.steps.push(Step::Rotate { theta });
        self
    }

    pub fn relax_steps(mut self,n:usize,time:f64,record:bool) -> Self {
        self.steps.push(Step::RelaxSteps { n, time, record });
        self
    }

    pub fn record(mut self) -> Self {
        self.steps.push(Step::Record);
        self
    }

    /// appends `body` to this sequence `times` times
    pub fn repeat(mut self,times:usize,body:&PulseSequence) -> Self {
        for _ in 0..times {
            self.steps.extend_from_slice(&body.steps);
        }
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    pub fn total_relax_time(&self) -> f64 {
        self.steps.iter().map(|step| match step {
            Step::RelaxSteps { n, time, .. } => *n as f64 * time,
            _ => 0.0,
        }).sum()
    }

    /// number of trajectory samples a run of this sequence appends
    pub fn expected_samples(&self) -> usize {
        self.steps.iter().map(|step| match step {
            Step::Record => 1,
            Step::RelaxSteps { n, record: true, .. } => *n,
            _ => 0,
        }).sum()
    }

    pub fn run(&self,ensemble:&mut SpinEnsemble) {
        debug!(steps = self.len(),samples = self.expected_samples(),"running pulse sequence");
        for (i,step) in self.steps.iter().enumerate() {
            trace!(i,?step,"step");
            match *step {
                Step::Rotate { theta } => ensemble.pulse(theta),
                Step::RelaxSteps { n, time, record } => ensemble.multi_relax(n,time,record),
                Step::Record => ensemble.record(),
            }
        }
    }

    /// Excitation followed by a train of refocusing pulses with the free precession
    /// sampled in between:
    /// record, flip, record, n_initial relax steps, refocus, record,
    /// then per echo: steps_per_echo relax steps, refocus, record.
    pub fn echo_train(params:&EchoTrainParams) -> Self {
        let echo = PulseSequence::new()
            .relax_steps(params.steps_per_echo,params.step,true)
            .rotate(params.refocus)
            .record();
        PulseSequence::new()
            .record()
            .rotate(params.flip)
            .record()
            .relax_steps(params.n_initial,params.step,true)
            .rotate(params.refocus)
            .record()
            .repeat(params.n_echoes,&echo)
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EchoTrainParams {
    pub flip:f64,
    pub refocus:f64,
    pub n_initial:usize,
    pub n_echoes:usize,
    pub steps_per_echo:usize,
    pub step:f64,
}

impl Default for EchoTrainParams {
    /// refocusing pulse is 10% over a true 180 so the imperfect refocusing shows up in the trajectory
    fn default() -> Self {
        let refocus = PI*1.1;
        Self {
            flip:refocus/2.0,
            refocus,
            n_initial:8,
            n_echoes:10,
            steps_per_echo:16,
            step:DEFAULT_RELAX_STEP,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn run_matches_direct_calls() {
        let seq = PulseSequence::new()
            .record()
            .rotate(FRAC_PI_2)
            .relax_steps(4,0.5,true)
            .relax_steps(3,2.0,false)
            .rotate(-0.3)
            .record();

        let mut a = SpinEnsemble::new(20.0,60.0).unwrap();
        seq.run(&mut a);

        let mut b = SpinEnsemble::new(20.0,60.0).unwrap();
        b.record();
        b.pulse(FRAC_PI_2);
        b.multi_relax(4,0.5,true);
        b.multi_relax(3,2.0,false);
        b.pulse(-0.3);
        b.record();

        assert_eq!(a.state(),b.state());
        assert_eq!(a.z_history(),b.z_history());
        assert_eq!(a.xy_history(),b.xy_history());
        assert_eq!(a.trajectory().len(),seq.expected_samples());
        assert_eq!(seq.total_relax_time(),8.0);
    }

    #[test]
    fn empty_sequence_leaves_ensemble_untouched() {
        let seq = PulseSequence::new();
        assert!(seq.is_empty());
        let mut e = SpinEnsemble::new(1.0,1.0).unwrap();
        seq.run(&mut e);
        assert_eq!(e.mz(),1.0);
        assert!(e.trajectory().is_empty());
    }

    #[test]
    fn echo_train_layout() {
        let params = EchoTrainParams::default();
        let seq = PulseSequence::echo_train(&params);
        // 6 leading steps, then 3 per echo
        assert_eq!(seq.len(),6 + 3*params.n_echoes);
        match seq.steps[1] {
            Step::Rotate { theta } => assert!((theta - PI*0.55).abs() < 1e-12,"flip = {}",theta),
            other => panic!("expected the flip pulse, got {:?}",other),
        }
        assert_eq!(seq.expected_samples(),2 + 8 + 1 + 10*17);
        assert_eq!(seq.total_relax_time(),(8 + 10*16) as f64);
    }

    #[test]
    fn repeat_zero_times_adds_nothing() {
        let body = PulseSequence::new().rotate(1.0).record();
        let seq = PulseSequence::new().record().repeat(0,&body);
        assert_eq!(seq.steps,vec![Step::Record]);
    }

    #[test]
    fn steps_serialize_with_kind_tag() {
        let seq = PulseSequence::new().rotate(0.5).relax_steps(2,1.0,false).record();
        let s = serde_json::to_string(&seq).unwrap();
        assert!(s.contains(r#""kind":"rotate""#),"{}",s);
        assert!(s.contains(r#""kind":"relax_steps""#),"{}",s);
        let back:PulseSequence = serde_json::from_str(&s).unwrap();
        assert_eq!(back,seq);
    }
}
