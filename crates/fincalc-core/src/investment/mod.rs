pub mod discounting;
pub mod returns;
pub mod review;
