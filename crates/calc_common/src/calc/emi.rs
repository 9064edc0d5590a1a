//! Equated monthly installment of an amortizing loan

use super::round2;
use crate::api::EmiResult;
use crate::error::CalcError;

/// EMI = P·r·(1+r)^n / ((1+r)^n − 1) with r the monthly rate as a fraction.
/// A zero rate splits the principal evenly over the tenure.
pub fn calculate_emi(
    principal: f64,
    annual_rate: f64,
    tenure_months: i64,
) -> Result<EmiResult, CalcError> {
    if principal <= 0.0 {
        return Err(CalcError::NonPositivePrincipal);
    }
    if annual_rate < 0.0 {
        return Err(CalcError::NegativeInterestRate);
    }
    if tenure_months <= 0 {
        return Err(CalcError::NonPositiveTenure);
    }

    let n = tenure_months as f64;
    let (emi, total_amount, total_interest) = if annual_rate == 0.0 {
        (principal / n, principal, 0.0)
    } else {
        let monthly_rate = annual_rate / 12.0 / 100.0;
        let growth = (1.0 + monthly_rate).powf(n);
        let emi = principal * monthly_rate * growth / (growth - 1.0);
        let total_amount = emi * n;
        (emi, total_amount, total_amount - principal)
    };

    if !emi.is_finite() || !total_amount.is_finite() {
        return Err(CalcError::OutOfRange);
    }

    Ok(EmiResult {
        principal: round2(principal),
        annual_rate: round2(annual_rate),
        tenure_months,
        emi: round2(emi),
        total_interest: round2(total_interest),
        total_amount: round2(total_amount),
    })
}
