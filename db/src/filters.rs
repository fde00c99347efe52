//! Listing contract for tickets: which rows, in which order.
//!
//! Raw query-string values are turned into typed filters here so that every
//! fallback ("unknown value means default") is an explicit match arm.

use crate::models::tickets::TicketStatus;
use sea_orm::Order;
use std::str::FromStr;

/// Columns a ticket listing may be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    CustomerName,
    Priority,
    Status,
    #[default]
    CreatedAt,
    UpdatedAt,
}

impl SortField {
    /// Parses a `sort_by` value. Anything outside the allowed set yields `CreatedAt`.
    pub fn parse(raw: Option<&str>) -> Self {
        match raw {
            Some("customer_name") => Self::CustomerName,
            Some("priority") => Self::Priority,
            Some("status") => Self::Status,
            Some("created_at") => Self::CreatedAt,
            Some("updated_at") => Self::UpdatedAt,
            _ => Self::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    Asc,
    #[default]
    Desc,
}

impl SortDirection {
    /// Only the literal `asc` sorts ascending; every other value, including
    /// none at all, sorts descending.
    pub fn from_param(raw: Option<&str>) -> Self {
        match raw {
            Some("asc") => Self::Asc,
            _ => Self::Desc,
        }
    }
}

impl From<SortDirection> for Order {
    fn from(direction: SortDirection) -> Self {
        match direction {
            SortDirection::Asc => Order::Asc,
            SortDirection::Desc => Order::Desc,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct TicketFilter {
    pub status: Option<TicketStatus>,
    pub search: Option<String>,
    pub sort_by: SortField,
    pub sort_direction: SortDirection,
}

impl TicketFilter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a filter from untyped request parameters.
    ///
    /// An unrecognised `status` means no status filter. `search` is kept even
    /// when empty (it then matches every row).
    pub fn from_params(
        status: Option<&str>,
        search: Option<&str>,
        sort_by: Option<&str>,
        sort_direction: Option<&str>,
    ) -> Self {
        Self {
            status: status.and_then(|s| TicketStatus::from_str(s).ok()),
            search: search.map(str::to_owned),
            sort_by: SortField::parse(sort_by),
            sort_direction: SortDirection::from_param(sort_direction),
        }
    }

    pub fn with_status(mut self, status: TicketStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    pub fn sorted_by(mut self, field: SortField, direction: SortDirection) -> Self {
        self.sort_by = field;
        self.sort_direction = direction;
        self
    }
}
