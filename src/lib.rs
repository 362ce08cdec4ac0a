//! EMI (equated monthly installment) calculator.
//!
//! - **loan**: the pure payment engine
//! - **format**: lakh/crore currency and number formatting
//! - **calculator**: slider state, tenure unit toggle, loan kind titles
//! - **render**: the boundary results are pushed through for display

pub mod calculator;
pub mod error;
pub mod format;
pub mod loan;
pub mod render;

pub use calculator::{Calculator, CalculatorConfig, LoanKind};
pub use error::{ConfigError, LoanError};
pub use format::{format_currency, format_indian_number};
pub use loan::{compute, LoanInput, LoanResult, TenureUnit};
pub use render::{DisplayValues, LogRenderer, Render};
