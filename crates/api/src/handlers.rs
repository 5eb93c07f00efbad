pub mod availability;
pub mod business;
