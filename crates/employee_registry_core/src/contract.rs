use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const EMPLOYEE_REQUIRED_FIELDS: [&str; 4] =
    ["Emp_Id", "First_Name", "Last_Name", "Date_Of_Joining"];

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeRecord {
    #[serde(rename = "Emp_Id")]
    pub emp_id: String,
    #[serde(rename = "First_Name")]
    pub first_name: String,
    #[serde(rename = "Last_Name")]
    pub last_name: String,
    #[serde(rename = "Date_Of_Joining")]
    pub date_of_joining: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeCreatedResponse {
    pub message: String,
    pub item: EmployeeRecord,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeItemResponse {
    pub item: EmployeeRecord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateRequestError {
    MissingBody,
    InvalidJson,
    MissingFields(Vec<&'static str>),
}

impl CreateRequestError {
    pub fn message(&self) -> String {
        match self {
            Self::MissingBody => "Missing request body".to_string(),
            Self::InvalidJson => "Invalid JSON body".to_string(),
            Self::MissingFields(fields) => format!("Missing fields: {}", fields.join(", ")),
        }
    }
}

impl std::fmt::Display for CreateRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message())
    }
}

impl std::error::Error for CreateRequestError {}

/// Parses a create-employee request body into a record carrying exactly the
/// four required fields. Extra fields in the body are dropped. Missing fields
/// are reported together, in required-field order. A field counts as present
/// only when it holds a JSON string; any other value is reported under the
/// same `Missing fields` message rather than a separate type error.
pub fn parse_create_request(body: Option<&str>) -> Result<EmployeeRecord, CreateRequestError> {
    let text = body.ok_or(CreateRequestError::MissingBody)?;
    let parsed: Value = serde_json::from_str(text).map_err(|_| CreateRequestError::InvalidJson)?;

    // A non-object payload carries none of the required fields.
    let empty = Map::new();
    let fields = parsed.as_object().unwrap_or(&empty);

    let mut missing = Vec::new();
    let mut require = |name: &'static str| -> String {
        match string_field(fields, name) {
            Some(value) => value.to_string(),
            None => {
                missing.push(name);
                String::new()
            }
        }
    };

    let emp_id = require(EMPLOYEE_REQUIRED_FIELDS[0]);
    let first_name = require(EMPLOYEE_REQUIRED_FIELDS[1]);
    let last_name = require(EMPLOYEE_REQUIRED_FIELDS[2]);
    let date_of_joining = require(EMPLOYEE_REQUIRED_FIELDS[3]);

    if !missing.is_empty() {
        return Err(CreateRequestError::MissingFields(missing));
    }

    Ok(EmployeeRecord {
        emp_id,
        first_name,
        last_name,
        date_of_joining,
    })
}

fn string_field<'a>(fields: &'a Map<String, Value>, name: &str) -> Option<&'a str> {
    fields.get(name).and_then(Value::as_str)
}
