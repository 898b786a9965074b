//! Domain models for the employee directory.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Opaque employee identifier.
///
/// "No employee filter selected" is expressed as `Option<EmployeeId>` at the
/// orchestrator boundary; no sentinel employee value exists in this crate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An employee in the company directory. Immutable once fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    pub first_name: String,
    pub last_name: String,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        let employee = Employee {
            id: EmployeeId::new("emp-1"),
            first_name: "Jade".to_string(),
            last_name: "Okafor".to_string(),
        };
        assert_eq!(employee.full_name(), "Jade Okafor");
    }

    #[test]
    fn test_wire_field_names() {
        let json = r#"{"id":"emp-7","firstName":"Ana","lastName":"Silva"}"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, EmployeeId::new("emp-7"));
        assert_eq!(employee.first_name, "Ana");
    }
}
