pub mod allocation;
pub mod breakeven;
pub mod review;
