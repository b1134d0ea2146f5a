pub mod budget;
pub mod review;
