//! Employee commands, queries and the handlers bound to them.

use async_trait::async_trait;

use crate::domain::employee::{NewEmployee, UpdateEmployee};
use crate::dto::employee::{CreateEmployeeDto, EmployeeDto, UpdateEmployeeDto};
use crate::mediator::{Request, RequestHandler};
use crate::repository::{EmployeeRepository, Repository};
use crate::services::ServiceResult;

/// Returns every employee.
#[derive(Debug, Clone, Default)]
pub struct GetAllEmployeesQuery;

impl Request for GetAllEmployeesQuery {
    type Output = Vec<EmployeeDto>;
}

/// Returns a single employee by id.
#[derive(Debug, Clone)]
pub struct GetEmployeeByIdQuery {
    pub id: i32,
}

impl Request for GetEmployeeByIdQuery {
    type Output = Option<EmployeeDto>;
}

/// Returns the employee registered under the given email address.
#[derive(Debug, Clone)]
pub struct GetEmployeeByEmailQuery {
    pub email: String,
}

impl Request for GetEmployeeByEmailQuery {
    type Output = Option<EmployeeDto>;
}

/// Persists a new employee.
#[derive(Debug, Clone)]
pub struct CreateEmployeeCommand {
    pub employee: CreateEmployeeDto,
}

impl Request for CreateEmployeeCommand {
    type Output = EmployeeDto;
}

/// Replaces the employee carried in the payload's id.
#[derive(Debug, Clone)]
pub struct UpdateEmployeeCommand {
    pub employee: UpdateEmployeeDto,
}

impl Request for UpdateEmployeeCommand {
    type Output = Option<EmployeeDto>;
}

/// Removes an employee by id.
#[derive(Debug, Clone)]
pub struct DeleteEmployeeCommand {
    pub id: i32,
}

impl Request for DeleteEmployeeCommand {
    type Output = Option<EmployeeDto>;
}

pub struct GetAllEmployeesHandler<R> {
    repo: R,
}

impl<R> GetAllEmployeesHandler<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> RequestHandler<GetAllEmployeesQuery> for GetAllEmployeesHandler<R>
where
    R: EmployeeRepository + Send + Sync,
{
    async fn handle(&self, _request: GetAllEmployeesQuery) -> ServiceResult<Vec<EmployeeDto>> {
        let employees = self.repo.list()?;
        Ok(employees.into_iter().map(EmployeeDto::from).collect())
    }
}

pub struct GetEmployeeByIdHandler<R> {
    repo: R,
}

impl<R> GetEmployeeByIdHandler<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> RequestHandler<GetEmployeeByIdQuery> for GetEmployeeByIdHandler<R>
where
    R: EmployeeRepository + Send + Sync,
{
    async fn handle(&self, request: GetEmployeeByIdQuery) -> ServiceResult<Option<EmployeeDto>> {
        let employee = self.repo.get_by_id(request.id)?;
        Ok(employee.map(EmployeeDto::from))
    }
}

pub struct GetEmployeeByEmailHandler<R> {
    repo: R,
}

impl<R> GetEmployeeByEmailHandler<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> RequestHandler<GetEmployeeByEmailQuery> for GetEmployeeByEmailHandler<R>
where
    R: EmployeeRepository + Send + Sync,
{
    async fn handle(&self, request: GetEmployeeByEmailQuery) -> ServiceResult<Option<EmployeeDto>> {
        // Stored emails are normalized; match the lookup key to them.
        let email = request.email.to_lowercase().trim().to_string();
        let employee = self.repo.get_by_email(&email)?;
        Ok(employee.map(EmployeeDto::from))
    }
}

pub struct CreateEmployeeHandler<R> {
    repo: R,
}

impl<R> CreateEmployeeHandler<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> RequestHandler<CreateEmployeeCommand> for CreateEmployeeHandler<R>
where
    R: EmployeeRepository + Send + Sync,
{
    async fn handle(&self, request: CreateEmployeeCommand) -> ServiceResult<EmployeeDto> {
        let new_employee = NewEmployee::from(request.employee);
        let created = self.repo.create(&new_employee)?;
        Ok(created.into())
    }
}

pub struct UpdateEmployeeHandler<R> {
    repo: R,
}

impl<R> UpdateEmployeeHandler<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> RequestHandler<UpdateEmployeeCommand> for UpdateEmployeeHandler<R>
where
    R: EmployeeRepository + Send + Sync,
{
    async fn handle(&self, request: UpdateEmployeeCommand) -> ServiceResult<Option<EmployeeDto>> {
        let id = request.employee.id;
        let updates = UpdateEmployee::from(request.employee);
        let updated = self.repo.update(id, &updates)?;
        Ok(updated.map(EmployeeDto::from))
    }
}

pub struct DeleteEmployeeHandler<R> {
    repo: R,
}

impl<R> DeleteEmployeeHandler<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> RequestHandler<DeleteEmployeeCommand> for DeleteEmployeeHandler<R>
where
    R: EmployeeRepository + Send + Sync,
{
    async fn handle(&self, request: DeleteEmployeeCommand) -> ServiceResult<Option<EmployeeDto>> {
        let Some(employee) = self.repo.get_by_id(request.id)? else {
            return Ok(None);
        };

        if self.repo.delete(request.id)? {
            Ok(Some(employee.into()))
        } else {
            Ok(None)
        }
    }
}
