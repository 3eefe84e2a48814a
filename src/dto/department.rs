use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::department::{Department, NewDepartment, UpdateDepartment};

/// Read projection of a [`Department`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DepartmentDto {
    pub id: i32,
    pub name: String,
}

impl From<Department> for DepartmentDto {
    fn from(department: Department) -> Self {
        Self {
            id: department.id,
            name: department.name,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
/// Payload for creating a department.
pub struct CreateDepartmentDto {
    #[validate(length(min = 1))]
    pub name: String,
}

impl From<CreateDepartmentDto> for NewDepartment {
    fn from(dto: CreateDepartmentDto) -> Self {
        NewDepartment::new(dto.name)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
/// Payload for replacing an existing department; carries the target id.
pub struct UpdateDepartmentDto {
    pub id: i32,
    #[validate(length(min = 1))]
    pub name: String,
}

impl From<UpdateDepartmentDto> for UpdateDepartment {
    fn from(dto: UpdateDepartmentDto) -> Self {
        UpdateDepartment::new(dto.name)
    }
}
