//! Discount offer table.
//!
//! Offers are plain configuration: a code, an inclusive weight range, an
//! inclusive distance range and a discount percentage. The table is built once
//! (the built-in default or a JSON file) and never mutated afterwards.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::OfferError;
use crate::traits::OfferProvider;

/// Inclusive range where either bound may be absent.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<u32>,
}

impl Range {
    pub fn new(min: Option<u32>, max: Option<u32>) -> Self {
        Self { min, max }
    }

    pub fn between(min: u32, max: u32) -> Self {
        Self::new(Some(min), Some(max))
    }

    pub fn at_most(max: u32) -> Self {
        Self::new(None, Some(max))
    }

    pub fn contains(&self, value: u32) -> bool {
        self.min.is_none_or(|min| value >= min) && self.max.is_none_or(|max| value <= max)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Offer {
    pub code: String,
    #[serde(default)]
    pub weight: Range,
    #[serde(default)]
    pub distance: Range,
    pub percent: u32,
}

impl Offer {
    /// Whether a parcel with the given weight and distance qualifies.
    pub fn applies(&self, weight: u32, distance: u32) -> bool {
        self.weight.contains(weight) && self.distance.contains(distance)
    }
}

/// Immutable lookup table of offers keyed by code.
#[derive(Debug, Clone)]
pub struct OfferTable {
    offers: Vec<Offer>,
    by_code: HashMap<String, usize>,
}

impl OfferTable {
    pub fn new(offers: Vec<Offer>) -> Result<Self, OfferError> {
        let mut by_code = HashMap::with_capacity(offers.len());
        for (idx, offer) in offers.iter().enumerate() {
            if offer.percent > 100 {
                return Err(OfferError::PercentOutOfRange {
                    code: offer.code.clone(),
                    percent: offer.percent,
                });
            }
            if by_code.insert(offer.code.clone(), idx).is_some() {
                return Err(OfferError::DuplicateCode(offer.code.clone()));
            }
        }

        Ok(Self { offers, by_code })
    }

    /// Parses a JSON array of offers.
    pub fn from_json_str(json: &str) -> Result<Self, OfferError> {
        let offers: Vec<Offer> = serde_json::from_str(json)?;
        Self::new(offers)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, OfferError> {
        let content = fs::read_to_string(path)?;
        Self::from_json_str(&content)
    }

    pub fn offers(&self) -> &[Offer] {
        &self.offers
    }
}

impl Default for OfferTable {
    fn default() -> Self {
        let offers = vec![
            Offer {
                code: "OFR001".to_string(),
                weight: Range::between(70, 200),
                distance: Range::at_most(199),
                percent: 10,
            },
            Offer {
                code: "OFR002".to_string(),
                weight: Range::between(100, 250),
                distance: Range::between(50, 150),
                percent: 7,
            },
            Offer {
                code: "OFR003".to_string(),
                weight: Range::between(10, 150),
                distance: Range::between(50, 250),
                percent: 5,
            },
        ];

        let by_code = offers
            .iter()
            .enumerate()
            .map(|(idx, offer)| (offer.code.clone(), idx))
            .collect();

        Self { offers, by_code }
    }
}

impl OfferProvider for OfferTable {
    fn offer(&self, code: &str) -> Option<&Offer> {
        self.by_code.get(code).map(|&idx| &self.offers[idx])
    }
}
