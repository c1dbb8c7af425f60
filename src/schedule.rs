//! Fleet scheduler.
//!
//! Simulates the fleet's round trips: each shipment group leaves on whichever
//! vehicle is free first, every parcel in it arrives `distance / speed` after
//! departure, and the vehicle is free again after twice the group's longest
//! leg.

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use tracing::{debug, info};

use crate::cost::estimate_cost;
use crate::error::PlanError;
use crate::model::{DeliveryResult, Fleet, Hours};
use crate::partition::{partition, ShipmentGroup};
use crate::traits::{Consignment, OfferProvider};

/// Availability of every vehicle, earliest first.
///
/// Ties go to the lowest vehicle index.
#[derive(Debug, Clone)]
struct VehiclePool {
    free_at: BinaryHeap<Reverse<(Hours, usize)>>,
    trips: Vec<usize>,
}

impl VehiclePool {
    fn new(vehicles: usize) -> Self {
        Self {
            free_at: (0..vehicles).map(|vehicle| Reverse((Hours::ZERO, vehicle))).collect(),
            trips: vec![0; vehicles],
        }
    }

    /// Takes the earliest available vehicle out of the pool.
    fn take_earliest(&mut self) -> Option<(Hours, usize)> {
        self.free_at.pop().map(|Reverse(entry)| entry)
    }

    fn release(&mut self, vehicle: usize, free_at: Hours) {
        self.trips[vehicle] += 1;
        self.free_at.push(Reverse((free_at, vehicle)));
    }
}

/// Assign shipment groups to vehicles and compute every parcel's result.
///
/// Results are ordered by each parcel's original input index, whatever order
/// the groups ship in.
pub fn schedule<C, O>(
    groups: &[ShipmentGroup<'_, C>],
    fleet: &Fleet,
    base_fee: u64,
    offers: &O,
) -> Result<Vec<DeliveryResult>, PlanError>
where
    C: Consignment,
    O: OfferProvider,
{
    fleet.validate()?;

    let parcel_count: usize = groups.iter().map(|g| g.len()).sum();
    let mut results: Vec<(usize, DeliveryResult)> = Vec::with_capacity(parcel_count);
    let mut pool = VehiclePool::new(fleet.vehicles);

    for group in groups {
        let (departure, vehicle) = pool.take_earliest().ok_or(PlanError::NoVehicles)?;
        let trip = pool.trips[vehicle];

        for parcel in group.parcels() {
            let estimate = estimate_cost(base_fee, *parcel, offers)?;
            let delivery_time = departure + Hours::truncated(parcel.distance(), fleet.max_speed);

            let result = DeliveryResult {
                id: parcel.id().to_string(),
                discount: estimate.discount,
                total_cost: estimate.total_cost,
                delivery_time,
                vehicle,
                trip,
            };

            results.push((parcel.index(), result));
        }

        let round_trip = Hours::truncated(group.max_distance(), fleet.max_speed) * 2;
        debug!(
            "vehicle {} trip {} departs at {} with {} parcels, back at {}",
            vehicle,
            trip,
            departure,
            group.len(),
            departure + round_trip
        );
        pool.release(vehicle, departure + round_trip);
    }

    results.sort_by_key(|(index, _)| *index);
    Ok(results.into_iter().map(|(_, result)| result).collect())
}

/// Partition a batch and schedule it on the fleet.
pub fn plan_deliveries<C, O>(
    base_fee: u64,
    parcels: &[C],
    fleet: &Fleet,
    offers: &O,
) -> Result<Vec<DeliveryResult>, PlanError>
where
    C: Consignment,
    O: OfferProvider,
{
    let groups = partition(parcels, fleet.capacity)?;
    let results = schedule(&groups, fleet, base_fee, offers)?;

    info!(
        "planned {} parcels in {} trips on {} vehicles",
        results.len(),
        groups.len(),
        fleet.vehicles
    );

    Ok(results)
}
