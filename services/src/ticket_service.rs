use crate::service::{ServiceError, ToActiveModel};
use chrono::Utc;
use db::{
    filters::TicketFilter,
    models::tickets::{ActiveModel, Entity, Priority, TicketStatus},
    repositories::{
        repository::Repository,
        ticket_repository::{TicketRepository, TicketStats},
    },
};
use sea_orm::{DatabaseConnection, Set};

pub use db::models::tickets::Model as Ticket;

/// Normalized payload for a new ticket. There is no status: new tickets are open.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateTicket {
    pub customer_name: String,
    pub issue_description: String,
    pub priority: Priority,
}

/// Normalized payload for a full replacement of a ticket's business fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpdateTicket {
    pub customer_name: String,
    pub issue_description: String,
    pub priority: Priority,
    pub status: TicketStatus,
}

impl ToActiveModel<Entity> for CreateTicket {
    fn into_active_model(self) -> ActiveModel {
        let now = Utc::now();
        ActiveModel {
            customer_name: Set(self.customer_name),
            issue_description: Set(self.issue_description),
            priority: Set(self.priority),
            status: Set(TicketStatus::Open),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        }
    }
}

impl UpdateTicket {
    /// Overwrites all four business fields of `existing` and stamps `updated_at`.
    ///
    /// The stamp never precedes `created_at`, even if the clock moved backwards.
    pub fn apply_to(self, existing: Ticket) -> ActiveModel {
        let now = Utc::now().max(existing.created_at);
        let mut active: ActiveModel = existing.into();
        active.customer_name = Set(self.customer_name);
        active.issue_description = Set(self.issue_description);
        active.priority = Set(self.priority);
        active.status = Set(self.status);
        active.updated_at = Set(now);
        active
    }
}

const ENTITY: &str = "Ticket";

#[derive(Clone)]
pub struct TicketService {
    repository: TicketRepository,
}

impl TicketService {
    pub fn new(repository: TicketRepository) -> Self {
        Self { repository }
    }

    pub fn from_db(db: DatabaseConnection) -> Self {
        Self::new(TicketRepository::new(db))
    }

    /// Filtered, sorted tickets plus counts over the whole table.
    pub async fn list(
        &self,
        filter: &TicketFilter,
    ) -> Result<(Vec<Ticket>, TicketStats), ServiceError> {
        let tickets = self.repository.list(filter).await?;
        let stats = self.repository.stats().await?;
        tracing::debug!(
            matched = tickets.len(),
            total = stats.total,
            ?filter,
            "Listed tickets"
        );
        Ok((tickets, stats))
    }

    pub async fn get(&self, id: i64) -> Result<Ticket, ServiceError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(ServiceError::NotFound { entity: ENTITY, id })
    }

    pub async fn create(&self, params: CreateTicket) -> Result<Ticket, ServiceError> {
        let ticket = self.repository.create(params.into_active_model()).await?;
        tracing::info!(ticket_id = ticket.id, priority = %ticket.priority, "Ticket created");
        Ok(ticket)
    }

    pub async fn update(&self, id: i64, params: UpdateTicket) -> Result<Ticket, ServiceError> {
        let existing = self.get(id).await?;
        let ticket = self.repository.update(params.apply_to(existing)).await?;
        tracing::info!(
            ticket_id = ticket.id,
            status = %ticket.status,
            priority = %ticket.priority,
            "Ticket updated"
        );
        Ok(ticket)
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        match self.repository.delete(id).await? {
            0 => Err(ServiceError::NotFound { entity: ENTITY, id }),
            _ => {
                tracing::info!(ticket_id = id, "Ticket deleted");
                Ok(())
            }
        }
    }
}
