use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::runtime::contract::EmployeeRecord;

/// Adapter seam over the managed key-value store. Implementations perform
/// single-item operations keyed by `Emp_Id`; `put_employee` is an
/// unconditional upsert.
pub trait EmployeeStore {
    fn put_employee(&self, record: &EmployeeRecord) -> Result<(), String>;
    fn get_employee(&self, emp_id: &str) -> Result<Option<EmployeeRecord>, String>;
}

/// Map-backed store for local invocation and tests.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeStore {
    records: Mutex<HashMap<String, EmployeeRecord>>,
}

impl InMemoryEmployeeStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.records().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    // A panic while the lock is held leaves the map itself coherent; every
    // accessor reads through the poison rather than failing or lying.
    fn records(&self) -> MutexGuard<'_, HashMap<String, EmployeeRecord>> {
        self.records.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EmployeeStore for InMemoryEmployeeStore {
    fn put_employee(&self, record: &EmployeeRecord) -> Result<(), String> {
        self.records()
            .insert(record.emp_id.clone(), record.clone());
        Ok(())
    }

    fn get_employee(&self, emp_id: &str) -> Result<Option<EmployeeRecord>, String> {
        Ok(self.records().get(emp_id).cloned())
    }
}
