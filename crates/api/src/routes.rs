pub mod availability;
pub mod business;
pub mod health;
