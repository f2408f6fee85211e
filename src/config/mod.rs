// src/config/mod.rs

pub mod coefficients;
pub mod scenario;
pub mod error;

pub use coefficients::{CoefficientTable, CompleteCoefficients, ReducedCoefficients};
pub use error::CoefficientError;
pub use scenario::{CrashObservation, Scenario};
