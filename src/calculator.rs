use crate::error::{ConfigError, LoanError, ParseLoanKindError};
use crate::loan::{LoanInput, LoanResult, TenureUnit};
use crate::render::{DisplayValues, Render};
use log::{debug, warn};
use std::{fmt, str::FromStr};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const DEFAULT_TITLE: &str = "EMI Calculator";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LoanKind {
    Home,
    Car,
    Personal,
    Business,
}

impl LoanKind {
    pub fn title(self) -> &'static str {
        match self {
            LoanKind::Home => "Home Loan EMI Calculator",
            LoanKind::Car => "Car Loan EMI Calculator",
            LoanKind::Personal => "Personal Loan EMI Calculator",
            LoanKind::Business => "Business Loan EMI Calculator",
        }
    }
}

impl FromStr for LoanKind {
    type Err = ParseLoanKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "home" => Ok(LoanKind::Home),
            "car" => Ok(LoanKind::Car),
            "personal" => Ok(LoanKind::Personal),
            "business" => Ok(LoanKind::Business),
            _ => Err(ParseLoanKindError(s.to_string())),
        }
    }
}

impl fmt::Display for LoanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LoanKind::Home => "home",
            LoanKind::Car => "car",
            LoanKind::Personal => "personal",
            LoanKind::Business => "business",
        };
        write!(f, "{}", name)
    }
}

/// Slider ranges and starting values.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CalculatorConfig {
    pub min_principal: f64,
    pub max_principal: f64,
    pub min_rate: f64,
    pub max_rate: f64,
    pub min_tenure: f64,
    pub max_years: f64,
    pub principal: f64,
    pub annual_rate: f64,
    pub tenure: f64,
    pub tenure_unit: TenureUnit,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            min_principal: 100_000.,
            max_principal: 10_000_000.,
            min_rate: 1.,
            max_rate: 20.,
            min_tenure: 1.,
            max_years: 30.,
            principal: 1_000_000.,
            annual_rate: 8.5,
            tenure: 10.,
            tenure_unit: TenureUnit::Years,
        }
    }
}

impl CalculatorConfig {
    /// Checks that every range can be clamped into. The tenure range must
    /// hold in years, the shorter of the two slider scales.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (field, min, max) in [
            ("principal", self.min_principal, self.max_principal),
            ("annual rate", self.min_rate, self.max_rate),
            ("tenure", self.min_tenure, self.max_years),
        ] {
            if !min.is_finite() || !max.is_finite() {
                return Err(ConfigError::NonFiniteBound { field });
            }
            if min > max {
                return Err(ConfigError::InvertedRange { field, min, max });
            }
        }
        Ok(())
    }
}

/// Holds the current control values and pushes every recalculation through
/// a [`Render`] implementation.
///
/// Setters clamp into the configured ranges the way a range input does;
/// the engine itself never clamps.
#[derive(Clone, PartialEq, Debug)]
pub struct Calculator {
    config: CalculatorConfig,
    input: LoanInput,
    title: &'static str,
}

impl Default for Calculator {
    fn default() -> Self {
        Self::with_valid_config(CalculatorConfig::default())
    }
}

impl Calculator {
    pub fn new(config: CalculatorConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self::with_valid_config(config))
    }

    fn with_valid_config(config: CalculatorConfig) -> Self {
        let mut calculator = Self {
            config,
            input: LoanInput::new(
                config.principal,
                config.annual_rate,
                config.tenure,
                config.tenure_unit,
            ),
            title: DEFAULT_TITLE,
        };
        // run the starting values through the same clamps as user input
        calculator.set_principal(config.principal);
        calculator.set_annual_rate(config.annual_rate);
        calculator.set_tenure(config.tenure);
        calculator
    }

    pub fn input(&self) -> LoanInput {
        self.input
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn tenure_max(&self) -> f64 {
        TenureUnit::Years.to_months(self.config.max_years) / self.input.tenure_unit.months_per_unit()
    }

    pub fn set_principal(&mut self, principal: f64) {
        self.input.principal = principal.clamp(self.config.min_principal, self.config.max_principal);
    }

    pub fn set_annual_rate(&mut self, annual_rate: f64) {
        self.input.annual_rate = annual_rate.clamp(self.config.min_rate, self.config.max_rate);
    }

    pub fn set_tenure(&mut self, tenure: f64) {
        self.input.tenure = tenure.clamp(self.config.min_tenure, self.tenure_max());
    }

    /// Switches the tenure slider between years and months, carrying the
    /// current value across: years become `years * 12` months, months become
    /// `round(months / 12)` years.
    pub fn set_tenure_unit(&mut self, unit: TenureUnit) {
        if unit == self.input.tenure_unit {
            return;
        }
        let converted = match unit {
            TenureUnit::Months => self.input.tenure * 12.,
            TenureUnit::Years => (self.input.tenure / 12.).round(),
        };
        self.input.tenure_unit = unit;
        self.set_tenure(converted);
        debug!("tenure unit now {}, tenure {}", unit, self.input.tenure);
    }

    pub fn select_kind(&mut self, kind: LoanKind) {
        self.title = kind.title();
    }

    /// Selects the loan kind named by a route segment such as `"car"`.
    /// Unknown names leave the current title in place.
    pub fn select_route(&mut self, route: &str) {
        match route.parse::<LoanKind>() {
            Ok(kind) => self.select_kind(kind),
            Err(e) => debug!("{}, keeping title '{}'", e, self.title),
        }
    }

    /// Recomputes from the current control values and hands the result to
    /// `renderer`. Nothing is rendered when the engine rejects the input.
    pub fn refresh<R: Render>(&self, renderer: &mut R) -> Result<LoanResult, LoanError> {
        let result = self.input.compute().map_err(|e| {
            warn!("not rendering {:?}: {}", self.input, e);
            e
        })?;
        debug!("{:?} -> {}", self.input, result);

        renderer.set_display_values(&DisplayValues::new(&self.input, &result));
        renderer.set_chart_data(self.input.principal, result.total_interest);
        Ok(result)
    }
}
