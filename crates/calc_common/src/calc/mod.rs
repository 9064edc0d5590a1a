//! Calculation formulas behind the `/api/*` endpoints.
//!
//! Every function here is pure: inputs in, result record or `CalcError` out.

pub mod age;
pub mod cgpa;
pub mod emi;
pub mod gst;

pub use age::{compute_age, parse_dob};
pub use cgpa::{convert_cgpa, University, UNIVERSITIES};
pub use emi::calculate_emi;
pub use gst::{calculate_gst, GST_SLABS};

/// Round to two decimal places (money and percentages).
///
/// Ties are decided on the exact binary value and go to the even
/// neighbour, so `round2(8.125)` is 8.12 while `round2(2.675)` (stored as
/// 2.67499...) is 2.67.
pub fn round2(value: f64) -> f64 {
    let scaled = value * 100.0;
    let rounded = scaled.round();
    if (rounded - scaled).abs() != 0.5 {
        return rounded / 100.0;
    }

    // `scaled` landed on a half; the fused remainder tells whether the
    // exact product did too
    let remainder = value.mul_add(100.0, -scaled);
    let rounded = if remainder > 0.0 {
        scaled.ceil()
    } else if remainder < 0.0 {
        scaled.floor()
    } else {
        scaled.round_ties_even()
    };
    rounded / 100.0
}
