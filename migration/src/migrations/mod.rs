pub mod m202510140001_create_tickets;
pub mod m202510140002_index_ticket_status;
