pub mod business;
pub mod service;
