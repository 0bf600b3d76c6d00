use fareflow_core::{CoreError, CoreResult};
use serde::{Deserialize, Serialize};

/// Prices are quoted at this granularity (whole yen).
pub const PRICE_STEP_YEN: i64 = 100;

/// Scarcity multiplier for the current stock state.
///
/// Below half stock the markup climbs linearly to 1.5 at zero remaining;
/// at half stock and above the price discounts linearly to 0.7 at full
/// stock. The two branches meet at 1.0.
pub fn scarcity_multiplier(remaining_stock: i64, total_stock: i64) -> CoreResult<f64> {
    if total_stock < 1 {
        return Err(CoreError::InvalidInput(format!(
            "total_stock must be >= 1, got {total_stock}"
        )));
    }
    if remaining_stock < 0 || remaining_stock > total_stock {
        // Out-of-range stock means an upstream invariant was violated;
        // fail fast instead of clamping.
        return Err(CoreError::InvalidInput(format!(
            "remaining_stock must be within 0..={total_stock}, got {remaining_stock}"
        )));
    }

    let ratio = remaining_stock as f64 / total_stock as f64;
    let multiplier = if ratio < 0.5 {
        1.0 + (0.5 - ratio)
    } else {
        1.0 - (ratio - 0.5) * 0.6
    };
    Ok(multiplier)
}

/// Dynamic price for an item: cost basis scaled by the scarcity multiplier,
/// rounded to the nearest 100 yen.
///
/// Rounding is half-up: a raw price of 150 yen quotes as 200. Pure and
/// side-effect free; safe to call concurrently.
pub fn compute_dynamic_price(
    base_price: i64,
    remaining_stock: i64,
    total_stock: i64,
) -> CoreResult<i64> {
    if base_price < 0 {
        return Err(CoreError::InvalidInput(format!(
            "base_price must be >= 0, got {base_price}"
        )));
    }
    let multiplier = scarcity_multiplier(remaining_stock, total_stock)?;
    let raw_price = base_price as f64 * multiplier;
    Ok(round_to_step(raw_price))
}

fn round_to_step(raw_price: f64) -> i64 {
    ((raw_price / PRICE_STEP_YEN as f64) + 0.5).floor() as i64 * PRICE_STEP_YEN
}

/// Stock availability label, for badge display in listings.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Availability {
    SoldOut,
    LastFew,
    Limited,
    Available,
}

impl Availability {
    /// "Last few" at 10% remaining or less, "limited" at 30% or less.
    pub fn for_stock(remaining_stock: i64, total_stock: i64) -> Self {
        if remaining_stock <= 0 || total_stock < 1 {
            return Self::SoldOut;
        }
        let ratio = remaining_stock as f64 / total_stock as f64;
        if ratio <= 0.1 {
            Self::LastFew
        } else if ratio <= 0.3 {
            Self::Limited
        } else {
            Self::Available
        }
    }
}
