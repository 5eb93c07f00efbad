pub mod availability;
pub mod business;
pub mod hours;
pub mod slot;
