use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Employee {
    pub id: i32,
    pub department_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub dob: Option<NaiveDate>,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Clone, Debug, Deserialize)]
pub struct NewEmployee {
    pub department_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub dob: Option<NaiveDate>,
}

impl NewEmployee {
    #[must_use]
    pub fn new(
        department_id: i32,
        first_name: String,
        last_name: String,
        email: String,
        phone: Option<String>,
        avatar: Option<String>,
        dob: Option<NaiveDate>,
    ) -> Self {
        Self {
            department_id,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.to_lowercase().trim().to_string(),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            avatar: avatar
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            dob,
        }
    }
}

/// Full replacement state for an existing employee.
#[derive(Clone, Debug, Deserialize)]
pub struct UpdateEmployee {
    pub department_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub dob: Option<NaiveDate>,
}

impl UpdateEmployee {
    #[must_use]
    pub fn new(
        department_id: i32,
        first_name: String,
        last_name: String,
        email: String,
        phone: Option<String>,
        avatar: Option<String>,
        dob: Option<NaiveDate>,
    ) -> Self {
        Self {
            department_id,
            first_name: first_name.trim().to_string(),
            last_name: last_name.trim().to_string(),
            email: email.to_lowercase().trim().to_string(),
            phone: phone
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            avatar: avatar
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty()),
            dob,
        }
    }
}
