//! Ticket request/response DTOs and the validation gate.
//!
//! Incoming bodies are deserialized into all-optional request structs of raw
//! JSON values, so missing or mistyped fields surface as field errors rather
//! than deserialization failures.
//! `validate_create` / `validate_update` collect every violation at once and,
//! on success, hand back a trimmed, typed payload for the service layer.

use common::{FieldErrors, check_text, field_error_map, not_in_set_error, string_error};
use db::models::tickets::{Priority, TicketStatus};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use services::ticket_service::{CreateTicket, Ticket, TicketService, UpdateTicket};
use std::str::FromStr;
use util::state::AppState;
use validator::{Validate, ValidationError};

pub const CUSTOMER_NAME_MAX: usize = 255;

pub fn ticket_service(app_state: &AppState) -> TicketService {
    TicketService::from_db(app_state.db_clone())
}

#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct CreateTicketRequest {
    #[validate(
        required(message = "The customer name field is required."),
        custom(function = "validate_customer_name")
    )]
    pub customer_name: Option<Value>,

    #[validate(
        required(message = "The issue description field is required."),
        custom(function = "validate_issue_description")
    )]
    pub issue_description: Option<Value>,

    #[validate(
        required(message = "The priority field is required."),
        custom(function = "validate_priority")
    )]
    pub priority: Option<Value>,
}

#[derive(Debug, Default, Clone, Deserialize, Validate)]
pub struct UpdateTicketRequest {
    #[validate(
        required(message = "The customer name field is required."),
        custom(function = "validate_customer_name")
    )]
    pub customer_name: Option<Value>,

    #[validate(
        required(message = "The issue description field is required."),
        custom(function = "validate_issue_description")
    )]
    pub issue_description: Option<Value>,

    #[validate(
        required(message = "The priority field is required."),
        custom(function = "validate_priority")
    )]
    pub priority: Option<Value>,

    #[validate(
        required(message = "The status field is required."),
        custom(function = "validate_status")
    )]
    pub status: Option<Value>,
}

fn validate_customer_name(value: &Value) -> Result<(), ValidationError> {
    let text = value.as_str().ok_or_else(|| string_error("customer_name"))?;
    check_text("customer_name", text, Some(CUSTOMER_NAME_MAX))
}

fn validate_issue_description(value: &Value) -> Result<(), ValidationError> {
    let text = value
        .as_str()
        .ok_or_else(|| string_error("issue_description"))?;
    check_text("issue_description", text, None)
}

/// Non-string values are simply not among the allowed choices.
fn validate_priority(value: &Value) -> Result<(), ValidationError> {
    value
        .as_str()
        .and_then(|v| Priority::from_str(v).ok())
        .map(|_| ())
        .ok_or_else(|| not_in_set_error("priority"))
}

fn validate_status(value: &Value) -> Result<(), ValidationError> {
    value
        .as_str()
        .and_then(|v| TicketStatus::from_str(v).ok())
        .map(|_| ())
        .ok_or_else(|| not_in_set_error("status"))
}

fn trimmed(value: Option<&Value>) -> String {
    value
        .and_then(Value::as_str)
        .map(|v| v.trim().to_owned())
        .unwrap_or_default()
}

fn parsed<T: FromStr>(field: &'static str, value: Option<&Value>) -> Result<T, FieldErrors> {
    value
        .and_then(Value::as_str)
        .and_then(|v| T::from_str(v).ok())
        .ok_or_else(|| {
            let mut errors = FieldErrors::new();
            errors.insert(field.to_owned(), not_in_set_error(field).to_string());
            errors
        })
}

/// Checks a creation payload. Any `status` the client sends is not even read.
pub fn validate_create(req: CreateTicketRequest) -> Result<CreateTicket, FieldErrors> {
    req.validate().map_err(|e| field_error_map(&e))?;

    let priority = parsed::<Priority>("priority", req.priority.as_ref())?;
    Ok(CreateTicket {
        customer_name: trimmed(req.customer_name.as_ref()),
        issue_description: trimmed(req.issue_description.as_ref()),
        priority,
    })
}

/// Checks a full-replacement payload; all four business fields are required.
pub fn validate_update(req: UpdateTicketRequest) -> Result<UpdateTicket, FieldErrors> {
    req.validate().map_err(|e| field_error_map(&e))?;

    let priority = parsed::<Priority>("priority", req.priority.as_ref())?;
    let status = parsed::<TicketStatus>("status", req.status.as_ref())?;
    Ok(UpdateTicket {
        customer_name: trimmed(req.customer_name.as_ref()),
        issue_description: trimmed(req.issue_description.as_ref()),
        priority,
        status,
    })
}

/// Outgoing ticket representation with RFC 3339 timestamps.
#[derive(Debug, Serialize)]
pub struct TicketResponse {
    pub id: i64,
    pub customer_name: String,
    pub issue_description: String,
    pub priority: Priority,
    pub status: TicketStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Ticket> for TicketResponse {
    fn from(ticket: Ticket) -> Self {
        Self {
            id: ticket.id,
            customer_name: ticket.customer_name,
            issue_description: ticket.issue_description,
            priority: ticket.priority,
            status: ticket.status,
            created_at: ticket.created_at.to_rfc3339(),
            updated_at: ticket.updated_at.to_rfc3339(),
        }
    }
}

/// `{ticket, message?}` body shared by show, create and update.
#[derive(Debug, Serialize)]
pub struct TicketEnvelope {
    pub ticket: TicketResponse,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl TicketEnvelope {
    pub fn new(ticket: Ticket) -> Self {
        Self {
            ticket: ticket.into(),
            message: None,
        }
    }

    pub fn with_message(ticket: Ticket, message: impl Into<String>) -> Self {
        Self {
            ticket: ticket.into(),
            message: Some(message.into()),
        }
    }
}
