//! The computations a run can perform.

use crate::cost::estimate_costs;
use crate::error::{InputError, PlanError};
use crate::model::Batch;
use crate::report::Report;
use crate::schedule::plan_deliveries;
use crate::traits::OfferProvider;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Problem {
    /// Cost and discount per parcel.
    CostEstimation,
    /// Cost, discount and delivery time per parcel on a limited fleet.
    DeliveryTime,
}

impl Problem {
    pub const ALL: [Problem; 2] = [Problem::CostEstimation, Problem::DeliveryTime];

    /// Menu key.
    pub fn key(&self) -> &'static str {
        match self {
            Problem::CostEstimation => "1",
            Problem::DeliveryTime => "2",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Problem::CostEstimation => "Delivery Cost Estimation with Offers",
            Problem::DeliveryTime => "Delivery Time Estimation",
        }
    }

    /// Whether the batch ends with a fleet parameter line.
    pub fn needs_fleet(&self) -> bool {
        matches!(self, Problem::DeliveryTime)
    }

    pub fn from_key(key: &str) -> Result<Problem, InputError> {
        let key = key.trim();
        Problem::ALL
            .into_iter()
            .find(|problem| problem.key() == key)
            .ok_or_else(|| InputError::UnknownProblem(key.to_string()))
    }

    pub fn solve<O: OfferProvider>(&self, batch: &Batch, offers: &O) -> Result<Report, PlanError> {
        match self {
            Problem::CostEstimation => Ok(Report::Costs(estimate_costs(batch.base_cost, &batch.parcels, offers)?)),
            Problem::DeliveryTime => {
                let fleet = batch.fleet.as_ref().ok_or(PlanError::MissingFleet)?;
                let results = plan_deliveries(batch.base_cost, &batch.parcels, fleet, offers)?;
                Ok(Report::Deliveries(results))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Parcel;
    use crate::offers::OfferTable;

    #[test]
    fn test_from_key() {
        assert_eq!(Problem::from_key("1").unwrap(), Problem::CostEstimation);
        assert_eq!(Problem::from_key(" 2\n").unwrap(), Problem::DeliveryTime);

        let err = Problem::from_key("3").unwrap_err();
        assert!(matches!(err, InputError::UnknownProblem(ref key) if key == "3"));
        assert_eq!(err.to_string(), "read problem error: '3' is not a known problem number");
    }

    #[test]
    fn test_delivery_time_without_fleet() {
        let batch = Batch {
            base_cost: 100,
            parcels: vec![Parcel::new("PKG1", 5, 5, 0)],
            fleet: None,
        };
        let err = Problem::DeliveryTime.solve(&batch, &OfferTable::default()).unwrap_err();
        assert_eq!(err, PlanError::MissingFleet);
    }

    #[test]
    fn test_cost_estimation_ignores_fleet() {
        let batch = Batch {
            base_cost: 100,
            parcels: vec![Parcel::new("PKG1", 5, 5, 0)],
            fleet: None,
        };
        let report = Problem::CostEstimation.solve(&batch, &OfferTable::default()).unwrap();
        assert_eq!(report.lines(), vec!["PKG1 0 175".to_string()]);
    }
}
