pub mod matmath;
pub mod spin_operators;
pub mod spin;
pub mod trajectory;
pub mod sequence;
pub mod config;
pub mod export;
pub mod error;
pub mod logging;

pub use error::{Result, SimError};
pub use spin::{SpinEnsemble, Validation};
pub use sequence::{PulseSequence, Step};
