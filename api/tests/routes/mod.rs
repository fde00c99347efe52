pub mod health_test;
pub mod tickets;
