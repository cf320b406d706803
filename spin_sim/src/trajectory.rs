use serde::{Deserialize, Serialize};
use crate::matmath::Magnetization;

/// State of the ensemble at the moment it was recorded. `time` is the total
/// relaxation time elapsed since the ensemble was created.
#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub z:f64,
    pub xy:f64,
    pub time:f64,
}

impl Snapshot {
    pub fn magnetization(&self) -> Magnetization {
        Magnetization::new(self.z,self.xy)
    }
}

/// Append-only record of snapshots. The parallel z/xy views consumed by plotting
/// tools are built on request so they can never drift out of step.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Trajectory {
    snapshots:Vec<Snapshot>,
}

impl Trajectory {
    pub fn new() -> Self {
        Self { snapshots: Vec::new() }
    }

    pub fn push(&mut self,m:Magnetization,time:f64) {
        self.snapshots.push(Snapshot { z: m.z, xy: m.xy, time });
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn last(&self) -> Option<&Snapshot> {
        self.snapshots.last()
    }

    pub fn z_history(&self) -> Vec<f64> {
        self.snapshots.iter().map(|s| s.z).collect()
    }

    pub fn xy_history(&self) -> Vec<f64> {
        self.snapshots.iter().map(|s| s.xy).collect()
    }

    pub fn time_history(&self) -> Vec<f64> {
        self.snapshots.iter().map(|s| s.time).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn views_stay_in_lock_step() {
        let mut t = Trajectory::new();
        assert!(t.is_empty());
        t.push(Magnetization::new(1.0,0.0),0.0);
        t.push(Magnetization::new(0.2,0.9),1.0);
        t.push(Magnetization::new(0.3,-0.8),2.0);
        assert_eq!(t.len(),3);
        assert_eq!(t.z_history(),vec![1.0,0.2,0.3]);
        assert_eq!(t.xy_history(),vec![0.0,0.9,-0.8]);
        assert_eq!(t.time_history(),vec![0.0,1.0,2.0]);
        assert_eq!(t.last().unwrap().magnetization(),Magnetization::new(0.3,-0.8));
    }
}
