pub mod evm;
pub mod pert;
pub mod reserves;
pub mod review;
