use chrono::{NaiveDate, NaiveDateTime};
use diesel::prelude::*;

use crate::domain::employee::{
    Employee as DomainEmployee, NewEmployee as DomainNewEmployee,
    UpdateEmployee as DomainUpdateEmployee,
};

#[derive(Debug, Clone, Identifiable, Queryable)]
#[diesel(table_name = crate::schema::employees)]
/// Diesel model for [`crate::domain::employee::Employee`].
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

#[derive(Insertable)]
#[diesel(table_name = crate::schema::employees)]
/// Insertable form of [`Employee`].
pub struct NewEmployee<'a> {
    pub department_id: i32,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub avatar: Option<&'a str>,
    pub dob: Option<NaiveDate>,
}

#[derive(AsChangeset)]
#[diesel(table_name = crate::schema::employees)]
#[diesel(treat_none_as_null = true)]
/// Data used when replacing an [`Employee`] record. `None` clears the column.
pub struct UpdateEmployee<'a> {
    pub department_id: i32,
    pub first_name: &'a str,
    pub last_name: &'a str,
    pub email: &'a str,
    pub phone: Option<&'a str>,
    pub avatar: Option<&'a str>,
    pub dob: Option<NaiveDate>,
}

impl From<Employee> for DomainEmployee {
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
            created_at: employee.created_at,
            updated_at: employee.updated_at,
        }
    }
}

impl<'a> From<&'a DomainNewEmployee> for NewEmployee<'a> {
    fn from(employee: &'a DomainNewEmployee) -> Self {
        Self {
            department_id: employee.department_id,
            first_name: employee.first_name.as_str(),
            last_name: employee.last_name.as_str(),
            email: employee.email.as_str(),
            phone: employee.phone.as_deref(),
            avatar: employee.avatar.as_deref(),
            dob: employee.dob,
        }
    }
}

impl<'a> From<&'a DomainUpdateEmployee> for UpdateEmployee<'a> {
    fn from(employee: &'a DomainUpdateEmployee) -> Self {
        Self {
            department_id: employee.department_id,
            first_name: employee.first_name.as_str(),
            last_name: employee.last_name.as_str(),
            email: employee.email.as_str(),
            phone: employee.phone.as_deref(),
            avatar: employee.avatar.as_deref(),
            dob: employee.dob,
        }
    }
}
