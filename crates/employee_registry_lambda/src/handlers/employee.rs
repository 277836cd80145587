use std::error::Error;
use std::fmt;

use serde_json::{json, Value};

use crate::adapters::store::EmployeeStore;
use crate::runtime::contract::{parse_create_request, EmployeeCreatedResponse, EmployeeItemResponse};
use crate::runtime::envelope::{
    error_response, success_response, ApiGatewayResponse, RequestEnvelope,
};
use crate::runtime::routing::{resolve_route, RouteDecision};

/// Store failure surfaced to the Lambda runtime as an invocation error.
/// Client mistakes are rendered as 4xx envelopes and never reach this type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreFault {
    pub operation: &'static str,
    pub message: String,
}

impl fmt::Display for StoreFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} failed: {}", self.operation, self.message)
    }
}

impl Error for StoreFault {}

pub fn handle_employee_event(
    event: Value,
    store: &dyn EmployeeStore,
) -> Result<ApiGatewayResponse, StoreFault> {
    let envelope = RequestEnvelope::from_event(event);
    let route = envelope.canonical_route();

    match resolve_route(route.method.as_deref(), &route.path) {
        RouteDecision::CreateEmployee => create_employee(&envelope, store),
        RouteDecision::FetchEmployee => fetch_employee(&envelope, store),
        RouteDecision::MethodNotAllowed => Ok(error_response(405, "Method not allowed")),
        RouteDecision::UnknownResource => Ok(error_response(404, "Not found")),
    }
}

fn create_employee(
    envelope: &RequestEnvelope,
    store: &dyn EmployeeStore,
) -> Result<ApiGatewayResponse, StoreFault> {
    let record = match parse_create_request(envelope.body.as_deref()) {
        Ok(value) => value,
        Err(error) => return Ok(error_response(400, &error.message())),
    };

    store.put_employee(&record).map_err(|message| StoreFault {
        operation: "put_employee",
        message,
    })?;

    log_handler_info("employee_inserted", json!({"item": record.clone()}));

    Ok(success_response(
        201,
        EmployeeCreatedResponse {
            message: "Employee created".to_string(),
            item: record,
        },
    ))
}

fn fetch_employee(
    envelope: &RequestEnvelope,
    store: &dyn EmployeeStore,
) -> Result<ApiGatewayResponse, StoreFault> {
    let Some(emp_id) = envelope
        .query_param("emp_id")
        .filter(|value| !value.is_empty())
    else {
        return Ok(error_response(400, "emp_id query parameter is required"));
    };

    let found = store.get_employee(emp_id).map_err(|message| StoreFault {
        operation: "get_employee",
        message,
    })?;

    let Some(record) = found else {
        return Ok(error_response(404, "Employee not found"));
    };

    log_handler_info("employee_retrieved", json!({"item": record.clone()}));

    Ok(success_response(200, EmployeeItemResponse { item: record }))
}

fn log_handler_info(event: &str, details: Value) {
    eprintln!(
        "{}",
        json!({
            "component": "employee_handler",
            "event": event,
            "timestamp": chrono::Utc::now().to_rfc3339(),
            "details": details,
        })
    );
}
