pub mod service;
pub mod ticket_service;
