use std::collections::HashMap;

use aws_sdk_dynamodb::types::AttributeValue;

use crate::runtime::contract::{EmployeeRecord, EMPLOYEE_REQUIRED_FIELDS};

pub type EmployeeItem = HashMap<String, AttributeValue>;

/// Attribute name of the table partition key.
pub const EMPLOYEE_KEY_ATTRIBUTE: &str = "Emp_Id";

pub fn employee_to_item(record: &EmployeeRecord) -> EmployeeItem {
    let mut item = EmployeeItem::with_capacity(EMPLOYEE_REQUIRED_FIELDS.len());
    item.insert(
        "Emp_Id".to_string(),
        AttributeValue::S(record.emp_id.clone()),
    );
    item.insert(
        "First_Name".to_string(),
        AttributeValue::S(record.first_name.clone()),
    );
    item.insert(
        "Last_Name".to_string(),
        AttributeValue::S(record.last_name.clone()),
    );
    item.insert(
        "Date_Of_Joining".to_string(),
        AttributeValue::S(record.date_of_joining.clone()),
    );
    item
}

/// Decodes a stored item back into a record. Attributes that are missing or
/// not strings decode as empty strings rather than failing the read.
pub fn employee_from_item(item: &EmployeeItem) -> EmployeeRecord {
    EmployeeRecord {
        emp_id: string_attribute(item, "Emp_Id"),
        first_name: string_attribute(item, "First_Name"),
        last_name: string_attribute(item, "Last_Name"),
        date_of_joining: string_attribute(item, "Date_Of_Joining"),
    }
}

fn string_attribute(item: &EmployeeItem, name: &str) -> String {
    match item.get(name) {
        Some(AttributeValue::S(value)) => value.clone(),
        _ => String::new(),
    }
}
