use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Department {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewDepartment {
    pub name: String,
}

impl NewDepartment {
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }
}

/// Full replacement state for an existing department.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdateDepartment {
    pub name: String,
}

impl UpdateDepartment {
    #[must_use]
    pub fn new(name: String) -> Self {
        Self {
            name: name.trim().to_string(),
        }
    }
}
