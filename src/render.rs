use crate::format::{format_currency, format_rate, format_tenure};
use crate::loan::{LoanInput, LoanResult};
use log::info;
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const PRINCIPAL_LABEL: &str = "Principal Amount";
pub const INTEREST_LABEL: &str = "Total Interest";

/// Text shown in the slider labels and result cards for one calculation.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayValues {
    pub principal_label: String,
    pub rate_label: String,
    pub tenure_label: String,
    pub emi: String,
    pub principal: String,
    pub interest: String,
    pub total: String,
}

impl DisplayValues {
    pub fn new(input: &LoanInput, result: &LoanResult) -> Self {
        Self {
            principal_label: format_currency(input.principal),
            rate_label: format_rate(input.annual_rate),
            tenure_label: format_tenure(input.tenure, input.tenure_unit),
            emi: format_currency(result.monthly_payment.round()),
            principal: format_currency(result.principal().round()),
            interest: format_currency(result.total_interest.round()),
            total: format_currency(result.total_payment.round()),
        }
    }
}

impl fmt::Display for DisplayValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at {} for {}: EMI {}, principal {}, interest {}, total {}",
            self.principal_label,
            self.rate_label,
            self.tenure_label,
            self.emi,
            self.principal,
            self.interest,
            self.total
        )
    }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ChartSlice {
    pub label: &'static str,
    pub value: f64,
}

impl ChartSlice {
    pub fn tooltip(&self) -> String {
        format!("{}: {}", self.label, format_currency(self.value.round()))
    }
}

pub fn chart_slices(principal: f64, interest: f64) -> [ChartSlice; 2] {
    [
        ChartSlice {
            label: PRINCIPAL_LABEL,
            value: principal,
        },
        ChartSlice {
            label: INTEREST_LABEL,
            value: interest,
        },
    ]
}

/// Presentation side of a calculation. Results flow one way into it.
pub trait Render {
    fn set_display_values(&mut self, values: &DisplayValues);
    fn set_chart_data(&mut self, principal: f64, interest: f64);
}

/// Writes every update to the log at info level.
#[derive(Default, Debug)]
pub struct LogRenderer;

impl Render for LogRenderer {
    fn set_display_values(&mut self, values: &DisplayValues) {
        info!("{}", values);
    }

    fn set_chart_data(&mut self, principal: f64, interest: f64) {
        for slice in chart_slices(principal, interest) {
            info!("chart {}", slice.tooltip());
        }
    }
}
