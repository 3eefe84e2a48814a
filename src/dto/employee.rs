use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};

/// Read projection of an [`Employee`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EmployeeDto {
    pub id: i32,
    pub department_id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub avatar: Option<String>,
    pub dob: Option<NaiveDate>,
}

impl From<Employee> for EmployeeDto {
    fn from(employee: Employee) -> Self {
        Self {
            id: employee.id,
            department_id: employee.department_id,
            first_name: employee.first_name,
            last_name: employee.last_name,
            email: employee.email,
            phone: employee.phone,
            avatar: employee.avatar,
            dob: employee.dob,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
/// Payload for creating an employee.
pub struct CreateEmployeeDto {
    pub department_id: i32,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    #[validate(url)]
    pub avatar: Option<String>,
    pub dob: Option<NaiveDate>,
}

impl From<CreateEmployeeDto> for NewEmployee {
    fn from(dto: CreateEmployeeDto) -> Self {
        NewEmployee::new(
            dto.department_id,
            dto.first_name,
            dto.last_name,
            dto.email,
            dto.phone,
            dto.avatar,
            dto.dob,
        )
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
/// Payload for replacing an existing employee; carries the target id.
pub struct UpdateEmployeeDto {
    pub id: i32,
    pub department_id: i32,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: String,
    pub phone: Option<String>,
    #[validate(url)]
    pub avatar: Option<String>,
    pub dob: Option<NaiveDate>,
}

impl From<UpdateEmployeeDto> for UpdateEmployee {
    fn from(dto: UpdateEmployeeDto) -> Self {
        UpdateEmployee::new(
            dto.department_id,
            dto.first_name,
            dto.last_name,
            dto.email,
            dto.phone,
            dto.avatar,
            dto.dob,
        )
    }
}
