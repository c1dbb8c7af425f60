//! Reference batches with known answers.

use parcel_dispatch::model::{Fleet, Parcel};

pub const BASE_COST: u64 = 100;

/// Three parcels priced without a fleet.
pub fn cost_batch() -> Vec<Parcel> {
    vec![
        Parcel::new("PKG1", 5, 5, 0).with_offer("OFR001"),
        Parcel::new("PKG2", 15, 5, 1).with_offer("OFR002"),
        Parcel::new("PKG3", 10, 100, 2).with_offer("OFR003"),
    ]
}

pub const COST_BATCH_EXPECTED: &[&str] = &["PKG1 0 175", "PKG2 0 275", "PKG3 35 665"];

/// Five parcels on two vehicles at speed 70 with capacity 200.
pub fn delivery_batch() -> Vec<Parcel> {
    vec![
        Parcel::new("PKG1", 50, 30, 0).with_offer("OFR001"),
        Parcel::new("PKG2", 75, 125, 1).with_offer("OFR008"),
        Parcel::new("PKG3", 175, 100, 2).with_offer("OFR003"),
        Parcel::new("PKG4", 110, 60, 3).with_offer("OFR002"),
        Parcel::new("PKG5", 155, 95, 4).with_offer("NA"),
    ]
}

pub const DELIVERY_FLEET: Fleet = Fleet {
    vehicles: 2,
    max_speed: 70,
    capacity: 200,
};

pub const DELIVERY_BATCH_EXPECTED: &[&str] = &[
    "PKG1 0 750 3.98",
    "PKG2 0 1475 1.78",
    "PKG3 0 2350 1.42",
    "PKG4 105 1395 0.85",
    "PKG5 0 2125 4.19",
];

pub const COST_BATCH_INPUT: &str = "\
100 3
PKG1 5 5 OFR001
PKG2 15 5 OFR002
PKG3 10 100 OFR003
";

pub const DELIVERY_BATCH_INPUT: &str = "\
100 5
PKG1 50 30 OFR001
PKG2 75 125 OFR008
PKG3 175 100 OFR003
PKG4 110 60 OFR002
PKG5 155 95 NA
2 70 200
";

/// Deterministic pseudo-random parcels (weights 1..=max_weight, distances 1..=300).
pub fn generated_batch(count: usize, max_weight: u32, seed: u64) -> Vec<Parcel> {
    let mut state = seed;
    let mut next = move |bound: u32| {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        ((state >> 33) % u64::from(bound)) as u32 + 1
    };

    (0..count)
        .map(|index| {
            let weight = next(max_weight);
            let distance = next(300);
            Parcel::new(format!("P{index}"), weight, distance, index)
        })
        .collect()
}
