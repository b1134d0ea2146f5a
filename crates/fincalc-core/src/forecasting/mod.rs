pub mod regression;
pub mod review;
pub mod smoothing;
