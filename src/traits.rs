//! Core domain traits for the dispatch planner.
//!
//! These are intentionally minimal. The partitioner, scheduler and cost
//! calculator only see parcels and offers through them, so callers can plan
//! their own record types and swap in alternate offer tables.

use crate::offers::Offer;

/// A parcel that can be priced and loaded onto a vehicle.
pub trait Consignment {
    fn id(&self) -> &str;

    /// Weight in whole units.
    fn weight(&self) -> u32;

    /// One-way distance to the destination in whole units.
    fn distance(&self) -> u32;

    /// Position in the original input, used to restore report order.
    fn index(&self) -> usize;

    /// Offer codes attached to the parcel. Unknown codes are allowed.
    fn offer_codes(&self) -> &[String];
}

/// Looks up discount offers by code.
pub trait OfferProvider {
    fn offer(&self, code: &str) -> Option<&Offer>;
}

