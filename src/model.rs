//! Plain data records shared by the planner, the reader and the report.

use std::fmt;

use serde::Serialize;

use crate::error::PlanError;
use crate::traits::Consignment;

/// A parcel as read from the input batch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parcel {
    pub id: String,
    pub weight: u32,
    pub distance: u32,
    pub index: usize,
    pub offer_codes: Vec<String>,
}

impl Parcel {
    pub fn new(id: impl Into<String>, weight: u32, distance: u32, index: usize) -> Self {
        Self {
            id: id.into(),
            weight,
            distance,
            index,
            offer_codes: Vec::new(),
        }
    }

    pub fn with_offer(mut self, code: impl Into<String>) -> Self {
        self.offer_codes.push(code.into());
        self
    }
}

impl Consignment for Parcel {
    fn id(&self) -> &str {
        &self.id
    }

    fn weight(&self) -> u32 {
        self.weight
    }

    fn distance(&self) -> u32 {
        self.distance
    }

    fn index(&self) -> usize {
        self.index
    }

    fn offer_codes(&self) -> &[String] {
        &self.offer_codes
    }
}

/// First input line: base delivery cost and the number of parcels to follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BatchHeader {
    pub base_cost: u64,
    pub parcel_count: usize,
}

/// Fleet parameters shared by every vehicle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fleet {
    pub vehicles: usize,
    pub max_speed: u32,
    pub capacity: u32,
}

impl Fleet {
    pub fn new(vehicles: usize, max_speed: u32, capacity: u32) -> Self {
        Self {
            vehicles,
            max_speed,
            capacity,
        }
    }

    pub fn validate(&self) -> Result<(), PlanError> {
        if self.vehicles == 0 {
            return Err(PlanError::NoVehicles);
        }
        if self.max_speed == 0 {
            return Err(PlanError::ZeroSpeed);
        }
        Ok(())
    }
}

/// Everything read for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Batch {
    pub base_cost: u64,
    pub parcels: Vec<Parcel>,
    pub fleet: Option<Fleet>,
}

/// Travel time in hundredths of an hour.
///
/// Every division by speed is truncated to two decimals, so storing the
/// hundredths keeps sums exact.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Hours(u64);

impl Hours {
    pub const ZERO: Hours = Hours(0);

    pub fn from_hundredths(hundredths: u64) -> Self {
        Self(hundredths)
    }

    /// `distance / speed` truncated toward zero at two decimal places.
    pub fn truncated(distance: u32, speed: u32) -> Self {
        debug_assert!(speed > 0);
        Self(u64::from(distance) * 100 / u64::from(speed))
    }

    pub fn hundredths(self) -> u64 {
        self.0
    }

    pub fn as_f64(self) -> f64 {
        self.0 as f64 / 100.0
    }
}

impl std::ops::Add for Hours {
    type Output = Hours;

    fn add(self, rhs: Hours) -> Hours {
        Hours(self.0 + rhs.0)
    }
}

impl std::ops::AddAssign for Hours {
    fn add_assign(&mut self, rhs: Hours) {
        self.0 += rhs.0;
    }
}

impl std::ops::Mul<u64> for Hours {
    type Output = Hours;

    fn mul(self, rhs: u64) -> Hours {
        Hours(self.0 * rhs)
    }
}

impl fmt::Display for Hours {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl Serialize for Hours {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(self.as_f64())
    }
}

/// Price of a single parcel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CostEstimate {
    pub discount: u64,
    pub total_cost: u64,
}

/// Cost-only result for one parcel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CostLine {
    pub id: String,
    pub discount: u64,
    pub total_cost: u64,
}

/// Cost and completion time for one parcel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryResult {
    pub id: String,
    pub discount: u64,
    pub total_cost: u64,
    pub delivery_time: Hours,
    /// Vehicle (0-based) that carried the parcel.
    pub vehicle: usize,
    /// Trip number (0-based) of that vehicle.
    pub trip: usize,
}
