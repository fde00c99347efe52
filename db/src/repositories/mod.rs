pub mod repository;
pub mod ticket_repository;
