use aws_sdk_dynamodb::types::AttributeValue;
use employee_registry_core::contract::EmployeeRecord;
use employee_registry_core::envelope::ApiGatewayResponse;
use employee_registry_lambda::adapters::dynamodb::{
    employee_from_item, employee_to_item, EMPLOYEE_KEY_ATTRIBUTE,
};
use employee_registry_lambda::adapters::store::EmployeeStore;
use employee_registry_lambda::handlers::employee::handle_employee_event;
use lambda_runtime::{service_fn, Error, LambdaEvent};
use serde_json::Value;

struct DynamoDbEmployeeStore {
    table_name: String,
    client: aws_sdk_dynamodb::Client,
}

impl EmployeeStore for DynamoDbEmployeeStore {
    fn put_employee(&self, record: &EmployeeRecord) -> Result<(), String> {
        let item = employee_to_item(record);
        let table_name = self.table_name.clone();
        let client = self.client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                client
                    .put_item()
                    .table_name(table_name)
                    .set_item(Some(item))
                    .send()
                    .await
                    .map(|_| ())
                    .map_err(|error| format!("failed to put employee item: {error}"))
            })
        })
    }

    fn get_employee(&self, emp_id: &str) -> Result<Option<EmployeeRecord>, String> {
        let table_name = self.table_name.clone();
        let key = AttributeValue::S(emp_id.to_string());
        let client = self.client.clone();

        tokio::task::block_in_place(|| {
            tokio::runtime::Handle::current().block_on(async move {
                let output = client
                    .get_item()
                    .table_name(table_name)
                    .key(EMPLOYEE_KEY_ATTRIBUTE, key)
                    .send()
                    .await
                    .map_err(|error| format!("failed to get employee item: {error}"))?;

                Ok(output.item().map(employee_from_item))
            })
        })
    }
}

async fn handle_request(
    event: LambdaEvent<Value>,
    store: &DynamoDbEmployeeStore,
) -> Result<ApiGatewayResponse, Error> {
    handle_employee_event(event.payload, store).map_err(|fault| Error::from(fault.message))
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let config = aws_config::load_defaults(aws_config::BehaviorVersion::latest()).await;
    let store = DynamoDbEmployeeStore {
        table_name: std::env::var("TABLE_NAME").unwrap_or_else(|_| "Emp_Master".to_string()),
        client: aws_sdk_dynamodb::Client::new(&config),
    };

    lambda_runtime::run(service_fn(|event| handle_request(event, &store))).await
}
