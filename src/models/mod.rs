// src/models/mod.rs

pub mod impact_zone;
pub mod injury;

pub use impact_zone::{classify_complete, classify_reduced, ImpactZone, ReducedZone};
pub use injury::{
    complete_injury_probability, complete_probability, reduced_injury_probability,
    reduced_probability, InjuryModel,
};
