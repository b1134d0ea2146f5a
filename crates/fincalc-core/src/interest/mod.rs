pub mod growth;
pub mod loans;
pub mod review;
