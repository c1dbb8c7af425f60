//! Output rendering.

use serde::Serialize;

use crate::model::{CostLine, DeliveryResult};

/// Result of one run, in original input order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Report {
    Costs(Vec<CostLine>),
    Deliveries(Vec<DeliveryResult>),
}

impl Report {
    /// Plain text lines: `id discount total` or `id discount total time`.
    pub fn lines(&self) -> Vec<String> {
        match self {
            Report::Costs(lines) => lines.iter().map(format_cost_line).collect(),
            Report::Deliveries(results) => results.iter().map(format_delivery_line).collect(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn len(&self) -> usize {
        match self {
            Report::Costs(lines) => lines.len(),
            Report::Deliveries(results) => results.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn format_cost_line(line: &CostLine) -> String {
    format!("{} {} {}", line.id, line.discount, line.total_cost)
}

pub fn format_delivery_line(result: &DeliveryResult) -> String {
    format!(
        "{} {} {} {}",
        result.id, result.discount, result.total_cost, result.delivery_time
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Hours;

    fn delivery(id: &str, hundredths: u64) -> DeliveryResult {
        DeliveryResult {
            id: id.to_string(),
            discount: 105,
            total_cost: 1395,
            delivery_time: Hours::from_hundredths(hundredths),
            vehicle: 0,
            trip: 0,
        }
    }

    #[test]
    fn test_delivery_line_has_two_fraction_digits() {
        assert_eq!(format_delivery_line(&delivery("PKG4", 85)), "PKG4 105 1395 0.85");
        assert_eq!(format_delivery_line(&delivery("PKG4", 300)), "PKG4 105 1395 3.00");
    }

    #[test]
    fn test_cost_line() {
        let line = CostLine {
            id: "PKG3".to_string(),
            discount: 35,
            total_cost: 665,
        };
        assert_eq!(format_cost_line(&line), "PKG3 35 665");
    }

    #[test]
    fn test_json_report() {
        let report = Report::Deliveries(vec![delivery("PKG4", 85)]);
        let value: serde_json::Value = serde_json::from_str(&report.to_json().unwrap()).unwrap();

        assert_eq!(value[0]["id"], "PKG4");
        assert_eq!(value[0]["discount"], 105);
        assert_eq!(value[0]["delivery_time"], 0.85);
        assert_eq!(report.len(), 1);
    }
}
