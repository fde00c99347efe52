use crate::seed::Seeder;
use db::models::tickets::{Priority, TicketStatus};
use sea_orm::DatabaseConnection;
use services::service::ServiceError;
use services::ticket_service::{CreateTicket, TicketService, UpdateTicket};
use std::pin::Pin;

pub struct TicketSeeder;

const DEMO_TICKETS: [(&str, &str, Priority, TicketStatus); 3] = [
    (
        "John Doe",
        "Payment not processed for order #12345",
        Priority::High,
        TicketStatus::Open,
    ),
    (
        "Jane Smith",
        "Wrong item received in shipment",
        Priority::Medium,
        TicketStatus::Open,
    ),
    (
        "Michael Johnson",
        "Request for refund on damaged product",
        Priority::Low,
        TicketStatus::Closed,
    ),
];

impl Seeder for TicketSeeder {
    fn seed<'a>(
        &'a self,
        db: &'a DatabaseConnection,
    ) -> Pin<Box<dyn Future<Output = Result<(), ServiceError>> + Send + 'a>> {
        Box::pin(async move {
            let service = TicketService::from_db(db.clone());

            for (customer_name, issue_description, priority, status) in DEMO_TICKETS {
                let ticket = service
                    .create(CreateTicket {
                        customer_name: customer_name.to_owned(),
                        issue_description: issue_description.to_owned(),
                        priority,
                    })
                    .await?;

                // Creation always yields an open ticket
                if status != TicketStatus::Open {
                    service
                        .update(
                            ticket.id,
                            UpdateTicket {
                                customer_name: ticket.customer_name,
                                issue_description: ticket.issue_description,
                                priority: ticket.priority,
                                status,
                            },
                        )
                        .await?;
                }
            }

            Ok(())
        })
    }
}
