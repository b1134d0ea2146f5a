pub mod flows;
pub mod ratios;
pub mod review;
