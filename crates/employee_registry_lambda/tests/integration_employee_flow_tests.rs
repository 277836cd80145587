use employee_registry_core::envelope::ApiGatewayResponse;
use employee_registry_lambda::adapters::store::InMemoryEmployeeStore;
use employee_registry_lambda::handlers::employee::handle_employee_event;
use serde_json::{json, Value};

fn employee_body(emp_id: &str, first_name: &str) -> String {
    json!({
        "Emp_Id": emp_id,
        "First_Name": first_name,
        "Last_Name": "Brown",
        "Date_Of_Joining": "2024-07-01"
    })
    .to_string()
}

fn http_api_post_event(body: &str) -> Value {
    json!({
        "rawPath": "/employee",
        "requestContext": {"http": {"method": "POST"}},
        "body": body
    })
}

fn rest_api_get_event(emp_id: &str) -> Value {
    json!({
        "path": "/employee",
        "httpMethod": "GET",
        "queryStringParameters": {"emp_id": emp_id}
    })
}

fn body_json(response: &ApiGatewayResponse) -> Value {
    serde_json::from_str(&response.body).expect("response body should be json")
}

#[test]
fn create_then_fetch_round_trips_across_envelope_shapes() {
    let store = InMemoryEmployeeStore::new();

    let created = handle_employee_event(
        http_api_post_event(&employee_body("E001", "Alice")),
        &store,
    )
    .expect("create should succeed");
    assert_eq!(created.status_code, 201);
    assert_eq!(
        body_json(&created),
        json!({
            "message": "Employee created",
            "item": {
                "Emp_Id": "E001",
                "First_Name": "Alice",
                "Last_Name": "Brown",
                "Date_Of_Joining": "2024-07-01"
            }
        })
    );

    let fetched = handle_employee_event(rest_api_get_event("E001"), &store)
        .expect("fetch should succeed");
    assert_eq!(fetched.status_code, 200);
    assert_eq!(
        body_json(&fetched),
        json!({
            "item": {
                "Emp_Id": "E001",
                "First_Name": "Alice",
                "Last_Name": "Brown",
                "Date_Of_Joining": "2024-07-01"
            }
        })
    );
}

#[test]
fn recreating_an_employee_overwrites_the_stored_record() {
    let store = InMemoryEmployeeStore::new();

    let first = handle_employee_event(
        http_api_post_event(&employee_body("E001", "Alice")),
        &store,
    )
    .expect("first create should succeed");
    let second = handle_employee_event(
        http_api_post_event(&employee_body("E001", "Alicia")),
        &store,
    )
    .expect("second create should succeed");

    assert_eq!(first.status_code, 201);
    assert_eq!(second.status_code, 201);

    let fetched = handle_employee_event(rest_api_get_event("E001"), &store)
        .expect("fetch should succeed");
    assert_eq!(body_json(&fetched)["item"]["First_Name"], json!("Alicia"));
}

#[test]
fn responses_carry_the_api_gateway_wire_shape() {
    let store = InMemoryEmployeeStore::new();

    let created = handle_employee_event(
        http_api_post_event(&employee_body("E001", "Alice")),
        &store,
    )
    .expect("create should succeed");

    let wire = serde_json::to_value(&created).expect("response should serialize");
    assert_eq!(wire["statusCode"], json!(201));
    assert_eq!(wire["headers"], json!({"Content-Type": "application/json"}));
    assert!(wire["body"].is_string());
}

#[test]
fn rejected_requests_leave_the_store_untouched() {
    let store = InMemoryEmployeeStore::new();

    let missing_body = handle_employee_event(
        json!({
            "rawPath": "/employee",
            "requestContext": {"http": {"method": "POST"}}
        }),
        &store,
    )
    .expect("handler should succeed");
    assert_eq!(missing_body.status_code, 400);

    let wrong_path = handle_employee_event(
        json!({
            "rawPath": "/departments",
            "requestContext": {"http": {"method": "POST"}},
            "body": employee_body("E001", "Alice")
        }),
        &store,
    )
    .expect("handler should succeed");
    assert_eq!(wrong_path.status_code, 404);
    assert_eq!(body_json(&wrong_path), json!({"error": "Not found"}));

    let wrong_method = handle_employee_event(
        json!({
            "rawPath": "/employee",
            "requestContext": {"http": {"method": "PUT"}},
            "body": employee_body("E001", "Alice")
        }),
        &store,
    )
    .expect("handler should succeed");
    assert_eq!(wrong_method.status_code, 405);
    assert_eq!(body_json(&wrong_method), json!({"error": "Method not allowed"}));

    let fetched = handle_employee_event(rest_api_get_event("E001"), &store)
        .expect("fetch should succeed");
    assert_eq!(fetched.status_code, 404);
    assert_eq!(body_json(&fetched), json!({"error": "Employee not found"}));
}
