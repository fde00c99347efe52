use crate::filters::{SortField, TicketFilter};
use crate::models::tickets::{Column, Entity, Model, Priority, TicketStatus};
use crate::repositories::repository::Repository;
use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, DbErr, EntityTrait, Order, PaginatorTrait,
    QueryFilter, QueryOrder, Select,
};
use serde::Serialize;

/// Aggregate counts over the whole ticket table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct TicketStats {
    pub total: u64,
    pub open: u64,
    pub closed: u64,
}

#[derive(Clone)]
pub struct TicketRepository {
    db: DatabaseConnection,
}

impl Repository<Entity> for TicketRepository {
    fn db(&self) -> &DatabaseConnection {
        &self.db
    }
}

impl TicketRepository {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    pub fn apply_filter(query: Select<Entity>, filter: &TicketFilter) -> Select<Entity> {
        let mut condition = Condition::all();
        if let Some(status) = filter.status {
            condition = condition.add(Column::Status.eq(status));
        }
        if let Some(search) = &filter.search {
            // SQLite's LOWER folds ASCII only; fold the term the same way.
            let pattern = format!("%{}%", escape_like(&search.to_ascii_lowercase()));
            condition = condition.add(
                Condition::any()
                    .add(lower_like(Column::CustomerName, &pattern))
                    .add(lower_like(Column::IssueDescription, &pattern)),
            );
        }
        query.filter(condition)
    }

    /// Orders by the requested column, then by `id` in the same direction.
    pub fn apply_sorting(query: Select<Entity>, filter: &TicketFilter) -> Select<Entity> {
        let order = Order::from(filter.sort_direction);
        let query = match filter.sort_by {
            SortField::CustomerName => query.order_by(Column::CustomerName, order.clone()),
            SortField::Priority => query.order_by(priority_rank(), order.clone()),
            SortField::Status => query.order_by(status_rank(), order.clone()),
            SortField::CreatedAt => query.order_by(Column::CreatedAt, order.clone()),
            SortField::UpdatedAt => query.order_by(Column::UpdatedAt, order.clone()),
        };
        query.order_by(Column::Id, order)
    }

    pub async fn list(&self, filter: &TicketFilter) -> Result<Vec<Model>, DbErr> {
        let query = Self::apply_filter(Entity::find(), filter);
        Self::apply_sorting(query, filter).all(&self.db).await
    }

    /// Counts rows, optionally restricted to one status. Never takes a listing filter.
    pub async fn count_by_status(&self, status: Option<TicketStatus>) -> Result<u64, DbErr> {
        let mut query = Entity::find();
        if let Some(status) = status {
            query = query.filter(Column::Status.eq(status));
        }
        query.count(&self.db).await
    }

    pub async fn stats(&self) -> Result<TicketStats, DbErr> {
        Ok(TicketStats {
            total: self.count_by_status(None).await?,
            open: self.count_by_status(Some(TicketStatus::Open)).await?,
            closed: self.count_by_status(Some(TicketStatus::Closed)).await?,
        })
    }
}

fn escape_like(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        if matches!(ch, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

fn lower_like(column: Column, pattern: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col(column))).like(LikeExpr::new(pattern).escape('\\'))
}

fn priority_rank() -> SimpleExpr {
    Expr::case(Column::Priority.eq(Priority::Low), Expr::val(0))
        .case(Column::Priority.eq(Priority::Medium), Expr::val(1))
        .finally(Expr::val(2))
        .into()
}

fn status_rank() -> SimpleExpr {
    Expr::case(Column::Status.eq(TicketStatus::Open), Expr::val(0))
        .finally(Expr::val(1))
        .into()
}
