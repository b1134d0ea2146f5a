pub mod error;
pub mod time_value;
pub mod types;

#[cfg(feature = "variance")]
pub mod variance;

#[cfg(feature = "interest")]
pub mod interest;

#[cfg(feature = "cash_flow")]
pub mod cash_flow;

#[cfg(feature = "forecasting")]
pub mod forecasting;

#[cfg(feature = "investment")]
pub mod investment;

#[cfg(feature = "estimation")]
pub mod estimation;

#[cfg(feature = "optimization")]
pub mod optimization;

pub use error::FinCalcError;
pub use types::*;

/// Standard result type for the composed review analyses
pub type FinCalcResult<T> = Result<T, FinCalcError>;
