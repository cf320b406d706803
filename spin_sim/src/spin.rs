use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::{debug, trace, warn};
use crate::error::{Result, SimError};
use crate::matmath::Magnetization;
use crate::spin_operators;
use crate::trajectory::Trajectory;

/// Equilibrium longitudinal magnetization. Every ensemble relaxes towards this.
pub const MZ_EQ:f64 = 1.0;

/// Relaxation step used by `multi_relax_default`.
pub const DEFAULT_RELAX_STEP:f64 = 1.0;

/// How the relaxation constants are checked when an ensemble is built.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Validation {
    /// t1 and t2 must be strictly positive
    #[default]
    Strict,
    /// anything goes; non-physical constants surface later as NaN/inf in the state
    Permissive,
}

/// Longitudinal (t1) and transverse (t2) time constants, in the same units as relaxation times.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Relaxation {
    t1:f64,
    t2:f64,
}

impl Relaxation {
    pub fn new(t1:f64,t2:f64) -> Self {
        Self { t1, t2 }
    }

    pub fn validated(t1:f64,t2:f64,validation:Validation) -> Result<Self> {
        for (name,value) in [("t1",t1),("t2",t2)] {
            let physical = value > 0.0;
            match (validation,physical) {
                (_,true) => {}
                (Validation::Strict,false) => return Err(SimError::InvalidParameter { name, value }),
                (Validation::Permissive,false) => {
                    warn!("accepting non-physical {} = {} under permissive validation",name,value)
                }
            }
        }
        Ok(Self::new(t1,t2))
    }

    pub fn t1(&self) -> f64 {
        self.t1
    }

    pub fn t2(&self) -> f64 {
        self.t2
    }
}

/// Ideal spin ensemble with no diffusion or inhomogeneity. Tracks one bulk
/// magnetization vector under instantaneous pulses and t1/t2 relaxation.
#[derive(Clone, Debug)]
pub struct SpinEnsemble {
    m:Magnetization,
    m0:f64,
    relaxation:Relaxation,
    elapsed:f64,
    trajectory:Trajectory,
}

impl SpinEnsemble {
    /// Builds an ensemble at thermal equilibrium. Fails if either constant is not strictly positive.
    pub fn new(t1:f64,t2:f64) -> Result<SpinEnsemble> {
        Self::with_validation(t1,t2,Validation::Strict)
    }

    pub fn with_validation(t1:f64,t2:f64,validation:Validation) -> Result<SpinEnsemble> {
        let relaxation = Relaxation::validated(t1,t2,validation)?;
        debug!(t1,t2,?validation,"new spin ensemble");
        Ok(SpinEnsemble {
            m:Magnetization::equilibrium(MZ_EQ),
            m0:MZ_EQ,
            relaxation,
            elapsed:0.0,
            trajectory:Trajectory::new(),
        })
    }

    pub fn mz(&self) -> f64 {
        self.m.z
    }

    pub fn mxy(&self) -> f64 {
        self.m.xy
    }

    pub fn mz_eq(&self) -> f64 {
        self.m0
    }

    pub fn state(&self) -> Magnetization {
        self.m
    }

    pub fn relaxation(&self) -> &Relaxation {
        &self.relaxation
    }

    /// total relaxation time applied so far
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn z_history(&self) -> Vec<f64> {
        self.trajectory.z_history()
    }

    pub fn xy_history(&self) -> Vec<f64> {
        self.trajectory.xy_history()
    }

    /// Appends the current state to the trajectory.
    pub fn record(&mut self) {
        self.trajectory.push(self.m,self.elapsed);
    }

    /// Rotates the magnetization counter-clockwise by theta radians.
    pub fn pulse(&mut self,theta:f64) {
        self.m = spin_operators::rot_op(theta)*self.m;
        trace!(theta,z = self.m.z,xy = self.m.xy,"pulse");
    }

    /// Relaxes the magnetization for `time`. Negative times are accepted and run the decay backwards.
    pub fn relax(&mut self,time:f64) {
        self.m = spin_operators::rel_op(self.m,&self.relaxation,time,self.m0);
        self.elapsed += time;
        trace!(time,z = self.m.z,xy = self.m.xy,"relax");
    }

    /// `relax(time)` n times, recording after each step when `record` is set.
    pub fn multi_relax(&mut self,n:usize,time:f64,record:bool) {
        for _ in 0..n {
            self.relax(time);
            if record {
                self.record();
            }
        }
    }

    pub fn multi_relax_default(&mut self,n:usize) {
        self.multi_relax(n,DEFAULT_RELAX_STEP,true);
    }
}

impl fmt::Display for SpinEnsemble {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "mz:{}\nmxy:{}\nt1:{}\nt2:{}\nmz_eq:{}\nelapsed:{}\nsamples:{}",
        self.m.z,self.m.xy,self.relaxation.t1,self.relaxation.t2,self.m0,self.elapsed,self.trajectory.len())
    }
}
