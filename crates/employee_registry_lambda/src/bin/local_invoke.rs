use employee_registry_lambda::adapters::store::InMemoryEmployeeStore;
use employee_registry_lambda::handlers::employee::handle_employee_event;
use serde_json::{json, Value};

fn sample_create_event() -> Value {
    json!({
        "method": "POST",
        "path": "/employee",
        "body": json!({
            "Emp_Id": "E001",
            "First_Name": "Alice",
            "Last_Name": "Brown",
            "Date_Of_Joining": "2024-07-01"
        })
        .to_string()
    })
}

fn sample_fetch_event() -> Value {
    json!({
        "method": "GET",
        "path": "/employee",
        "queryStringParameters": {"emp_id": "E001"}
    })
}

/// Replays events against an in-memory store, without AWS credentials or a
/// deployed table. Pass a path to a JSON event file to drive a single event;
/// with no arguments a sample create-then-fetch pair runs.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    let store = InMemoryEmployeeStore::new();

    let events = match std::env::args().nth(1) {
        Some(path) => {
            let text = std::fs::read_to_string(&path)
                .map_err(|error| format!("failed to read event file {path}: {error}"))?;
            vec![serde_json::from_str(&text)
                .map_err(|error| format!("failed to parse event file {path}: {error}"))?]
        }
        None => vec![sample_create_event(), sample_fetch_event()],
    };

    for event in events {
        let response = handle_employee_event(event, &store)?;
        println!("{}", serde_json::to_string_pretty(&response)?);
    }

    Ok(())
}
