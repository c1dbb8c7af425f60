//! Delivery cost and discount calculation.

use crate::error::PlanError;
use crate::model::{CostEstimate, CostLine};
use crate::traits::{Consignment, OfferProvider};

/// Charge per unit of weight.
pub const WEIGHT_RATE: u64 = 10;

/// Charge per unit of distance.
pub const DISTANCE_RATE: u64 = 5;

/// Price a parcel: base fee plus weight and distance charges, less discounts.
///
/// Every attached code that names a known offer whose ranges cover the parcel
/// contributes `raw * percent / 100` (truncated), and those discounts stack.
/// Unknown or non-qualifying codes contribute nothing. A cost that does not
/// fit in a `u64` is an error.
pub fn estimate_cost<C, O>(base_fee: u64, parcel: &C, offers: &O) -> Result<CostEstimate, PlanError>
where
    C: Consignment,
    O: OfferProvider,
{
    let overflow = || PlanError::CostOverflow(parcel.id().to_string());

    // weight and distance are u32, so the per-unit charges cannot overflow
    let raw = base_fee
        .checked_add(u64::from(parcel.weight()) * WEIGHT_RATE + u64::from(parcel.distance()) * DISTANCE_RATE)
        .ok_or_else(overflow)?;

    let mut discount = 0u64;
    for offer in parcel
        .offer_codes()
        .iter()
        .filter_map(|code| offers.offer(code))
        .filter(|offer| offer.applies(parcel.weight(), parcel.distance()))
    {
        let amount = raw.checked_mul(u64::from(offer.percent)).ok_or_else(overflow)? / 100;
        discount = discount.checked_add(amount).ok_or_else(overflow)?;
    }

    Ok(CostEstimate {
        discount,
        total_cost: raw.saturating_sub(discount),
    })
}

/// Price every parcel of a batch, in input order.
pub fn estimate_costs<C, O>(base_fee: u64, parcels: &[C], offers: &O) -> Result<Vec<CostLine>, PlanError>
where
    C: Consignment,
    O: OfferProvider,
{
    parcels
        .iter()
        .map(|parcel| {
            let estimate = estimate_cost(base_fee, parcel, offers)?;
            Ok(CostLine {
                id: parcel.id().to_string(),
                discount: estimate.discount,
                total_cost: estimate.total_cost,
            })
        })
        .collect()
}
