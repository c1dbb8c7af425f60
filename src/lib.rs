//! parcel-dispatch core
//!
//! Prices a batch of parcels and plans their delivery on a limited fleet.

pub mod traits;
pub mod model;
pub mod error;
pub mod offers;
pub mod cost;
pub mod partition;
pub mod schedule;
pub mod problem;
pub mod input;
pub mod report;
