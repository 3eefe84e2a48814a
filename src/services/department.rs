//! Department commands, queries and the handlers bound to them.

use async_trait::async_trait;

use crate::domain::department::{NewDepartment, UpdateDepartment};
use crate::dto::department::{CreateDepartmentDto, DepartmentDto, UpdateDepartmentDto};
use crate::mediator::{Request, RequestHandler};
use crate::repository::{DepartmentRepository, Repository};
use crate::services::ServiceResult;

/// Returns every department.
#[derive(Debug, Clone, Default)]
pub struct GetAllDepartmentsQuery;

impl Request for GetAllDepartmentsQuery {
    type Output = Vec<DepartmentDto>;
}

/// Returns a single department by id.
#[derive(Debug, Clone)]
pub struct GetDepartmentByIdQuery {
    pub id: i32,
}

impl Request for GetDepartmentByIdQuery {
    type Output = Option<DepartmentDto>;
}

/// Persists a new department.
#[derive(Debug, Clone)]
pub struct CreateDepartmentCommand {
    pub department: CreateDepartmentDto,
}

impl Request for CreateDepartmentCommand {
    type Output = DepartmentDto;
}

/// Replaces the department carried in the payload's id.
#[derive(Debug, Clone)]
pub struct UpdateDepartmentCommand {
    pub department: UpdateDepartmentDto,
}

impl Request for UpdateDepartmentCommand {
    type Output = Option<DepartmentDto>;
}

/// Removes a department by id.
#[derive(Debug, Clone)]
pub struct DeleteDepartmentCommand {
    pub id: i32,
}

impl Request for DeleteDepartmentCommand {
    type Output = Option<DepartmentDto>;
}

pub struct GetAllDepartmentsHandler<R> {
    repo: R,
}

impl<R> GetAllDepartmentsHandler<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> RequestHandler<GetAllDepartmentsQuery> for GetAllDepartmentsHandler<R>
where
    R: DepartmentRepository + Send + Sync,
{
    async fn handle(&self, _request: GetAllDepartmentsQuery) -> ServiceResult<Vec<DepartmentDto>> {
        let departments = self.repo.list()?;
        Ok(departments.into_iter().map(DepartmentDto::from).collect())
    }
}

pub struct GetDepartmentByIdHandler<R> {
    repo: R,
}

impl<R> GetDepartmentByIdHandler<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> RequestHandler<GetDepartmentByIdQuery> for GetDepartmentByIdHandler<R>
where
    R: DepartmentRepository + Send + Sync,
{
    async fn handle(
        &self,
        request: GetDepartmentByIdQuery,
    ) -> ServiceResult<Option<DepartmentDto>> {
        let department = self.repo.get_by_id(request.id)?;
        Ok(department.map(DepartmentDto::from))
    }
}

pub struct CreateDepartmentHandler<R> {
    repo: R,
}

impl<R> CreateDepartmentHandler<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> RequestHandler<CreateDepartmentCommand> for CreateDepartmentHandler<R>
where
    R: DepartmentRepository + Send + Sync,
{
    async fn handle(&self, request: CreateDepartmentCommand) -> ServiceResult<DepartmentDto> {
        let new_department = NewDepartment::from(request.department);
        let created = self.repo.create(&new_department)?;
        Ok(created.into())
    }
}

pub struct UpdateDepartmentHandler<R> {
    repo: R,
}

impl<R> UpdateDepartmentHandler<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> RequestHandler<UpdateDepartmentCommand> for UpdateDepartmentHandler<R>
where
    R: DepartmentRepository + Send + Sync,
{
    async fn handle(
        &self,
        request: UpdateDepartmentCommand,
    ) -> ServiceResult<Option<DepartmentDto>> {
        let id = request.department.id;
        let updates = UpdateDepartment::from(request.department);
        let updated = self.repo.update(id, &updates)?;
        Ok(updated.map(DepartmentDto::from))
    }
}

pub struct DeleteDepartmentHandler<R> {
    repo: R,
}

impl<R> DeleteDepartmentHandler<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> RequestHandler<DeleteDepartmentCommand> for DeleteDepartmentHandler<R>
where
    R: DepartmentRepository + Send + Sync,
{
    async fn handle(
        &self,
        request: DeleteDepartmentCommand,
    ) -> ServiceResult<Option<DepartmentDto>> {
        let Some(department) = self.repo.get_by_id(request.id)? else {
            return Ok(None);
        };

        if self.repo.delete(request.id)? {
            Ok(Some(department.into()))
        } else {
            Ok(None)
        }
    }
}
