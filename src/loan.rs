use crate::error::LoanError;
use log::trace;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TenureUnit {
    #[default]
    Years,
    Months,
}

impl TenureUnit {
    pub fn months_per_unit(self) -> f64 {
        match self {
            TenureUnit::Years => 12.,
            TenureUnit::Months => 1.,
        }
    }

    // normalize a tenure expressed in this unit to months
    pub fn to_months(self, tenure: f64) -> f64 {
        tenure * self.months_per_unit()
    }
}

impl fmt::Display for TenureUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TenureUnit::Years => write!(f, "years"),
            TenureUnit::Months => write!(f, "months"),
        }
    }
}

/// The three loan parameters plus the unit the tenure is expressed in.
///
/// The unit travels with the input so that every calculation is a pure
/// function of its arguments.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoanInput {
    pub principal: f64,
    pub annual_rate: f64,
    pub tenure: f64,
    pub tenure_unit: TenureUnit,
}

impl LoanInput {
    pub fn new(principal: f64, annual_rate: f64, tenure: f64, tenure_unit: TenureUnit) -> Self {
        Self {
            principal,
            annual_rate,
            tenure,
            tenure_unit,
        }
    }

    pub fn tenure_in_months(&self) -> f64 {
        self.tenure_unit.to_months(self.tenure)
    }

    pub fn compute(&self) -> Result<LoanResult, LoanError> {
        compute(self.principal, self.annual_rate, self.tenure_in_months())
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoanResult {
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_payment: f64,
}

impl LoanResult {
    pub fn principal(&self) -> f64 {
        self.total_payment - self.total_interest
    }
}

impl fmt::Display for LoanResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "monthly payment {:.4}, total interest {:.4}, total payment {:.4}",
            self.monthly_payment, self.total_interest, self.total_payment
        )
    }
}

/// Computes the equated monthly installment and loan totals.
///
/// `annual_rate` is percent per annum (8.5 means 8.5%), `tenure_in_months`
/// may be fractional. Nothing is rounded here; rounding to whole currency
/// units happens at display time.
pub fn compute(
    principal: f64,
    annual_rate: f64,
    tenure_in_months: f64,
) -> Result<LoanResult, LoanError> {
    check_inputs(principal, annual_rate, tenure_in_months)?;

    let monthly_rate = annual_rate / 12. / 100.;
    trace!(
        "principal {}, monthly rate {}, months {}",
        principal,
        monthly_rate,
        tenure_in_months
    );

    let monthly_payment = if monthly_rate == 0. {
        principal / tenure_in_months
    } else {
        let factor = (1. + monthly_rate).powf(tenure_in_months);
        principal * monthly_rate * factor / (factor - 1.)
    };

    let total_payment = monthly_payment * tenure_in_months;
    Ok(LoanResult {
        monthly_payment,
        total_interest: total_payment - principal,
        total_payment,
    })
}

fn check_inputs(principal: f64, annual_rate: f64, tenure_in_months: f64) -> Result<(), LoanError> {
    for (field, value) in [
        ("principal", principal),
        ("annual rate", annual_rate),
        ("tenure", tenure_in_months),
    ] {
        if !value.is_finite() {
            return Err(LoanError::NonFinite { field });
        }
    }
    if principal <= 0. {
        return Err(LoanError::NonPositivePrincipal(principal));
    }
    if annual_rate < 0. {
        return Err(LoanError::NegativeRate(annual_rate));
    }
    if tenure_in_months <= 0. {
        return Err(LoanError::NonPositiveTenure(tenure_in_months));
    }
    Ok(())
}
