pub mod cash_flow;
pub mod estimation;
pub mod forecasting;
pub mod interest;
pub mod investment;
pub mod optimization;
pub mod variance;
