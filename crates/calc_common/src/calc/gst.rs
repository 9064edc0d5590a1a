//! GST on top of a base amount

use super::round2;
use crate::api::GstResult;
use crate::error::CalcError;

/// Indian GST slabs offered by the GST page, in percent
pub const GST_SLABS: [u32; 4] = [5, 12, 18, 28];

/// Slab preselected on the GST page
pub const DEFAULT_GST_SLAB: u32 = 18;

pub fn calculate_gst(amount: f64, rate: f64) -> Result<GstResult, CalcError> {
    if amount < 0.0 {
        return Err(CalcError::NegativeAmount);
    }
    if !(0.0..=100.0).contains(&rate) {
        return Err(CalcError::GstRateOutOfRange);
    }

    let gst_amount = amount * (rate / 100.0);
    let total = amount + gst_amount;
    if !total.is_finite() {
        return Err(CalcError::OutOfRange);
    }

    Ok(GstResult {
        original: round2(amount),
        gst_amount: round2(gst_amount),
        gst_rate: rate,
        total: round2(total),
    })
}
