use chrono::NaiveDateTime;
use diesel::prelude::*;

use crate::domain::department::{
    Department as DomainDepartment, NewDepartment as DomainNewDepartment,
    UpdateDepartment as DomainUpdateDepartment,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::departments)]
/// Diesel model for [`crate::domain::department::Department`].
pub struct Department {
    pub id: i32,
    pub name: String,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
}

#[derive(Insertable)]
#[diesel(table_name = crate::schema::departments)]
pub struct NewDepartment<'a> {
    pub name: &'a str,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::departments)]
pub struct UpdateDepartment<'a> {
    pub name: &'a str,
}

impl From<Department> for DomainDepartment {
    fn from(department: Department) -> Self {
        Self {
            id: department.id,
            name: department.name,
            created_at: department.created_at,
            updated_at: department.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewDepartment> for NewDepartment<'a> {
    fn from(department: &'a DomainNewDepartment) -> Self {
        Self {
            name: department.name.as_str(),
        }
    }
}

impl<'a> From<&'a DomainUpdateDepartment> for UpdateDepartment<'a> {
    fn from(department: &'a DomainUpdateDepartment) -> Self {
        Self {
            name: department.name.as_str(),
        }
    }
}
