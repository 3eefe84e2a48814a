//! Command/query handlers routed through the mediator.

use thiserror::Error;

use crate::mediator::{Mediator, MediatorBuilder, MediatorError};
use crate::repository::errors::RepositoryError;
use crate::repository::{ClientRepository, DepartmentRepository, EmployeeRepository};

pub mod client;
pub mod department;
pub mod employee;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(String),

    #[error("no handler registered for {0}")]
    Configuration(&'static str),

    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Binds every request type to its handler over the given repository.
///
/// This is the single registration point: a request type missing here can
/// never be dispatched, and a duplicate binding fails the build before the
/// server accepts traffic.
pub fn register_handlers<R>(repo: R) -> Result<Mediator, MediatorError>
where
    R: ClientRepository
        + EmployeeRepository
        + DepartmentRepository
        + Clone
        + Send
        + Sync
        + 'static,
{
    MediatorBuilder::new()
        .register::<client::GetAllClientsQuery, _>(client::GetAllClientsHandler::new(repo.clone()))
        .register::<client::GetClientByIdQuery, _>(client::GetClientByIdHandler::new(repo.clone()))
        .register::<client::GetClientByNameQuery, _>(client::GetClientByNameHandler::new(
            repo.clone(),
        ))
        .register::<client::CreateClientCommand, _>(client::CreateClientHandler::new(repo.clone()))
        .register::<client::UpdateClientCommand, _>(client::UpdateClientHandler::new(repo.clone()))
        .register::<client::DeleteClientCommand, _>(client::DeleteClientHandler::new(repo.clone()))
        .register::<employee::GetAllEmployeesQuery, _>(employee::GetAllEmployeesHandler::new(
            repo.clone(),
        ))
        .register::<employee::GetEmployeeByIdQuery, _>(employee::GetEmployeeByIdHandler::new(
            repo.clone(),
        ))
        .register::<employee::GetEmployeeByEmailQuery, _>(employee::GetEmployeeByEmailHandler::new(
            repo.clone(),
        ))
        .register::<employee::CreateEmployeeCommand, _>(employee::CreateEmployeeHandler::new(
            repo.clone(),
        ))
        .register::<employee::UpdateEmployeeCommand, _>(employee::UpdateEmployeeHandler::new(
            repo.clone(),
        ))
        .register::<employee::DeleteEmployeeCommand, _>(employee::DeleteEmployeeHandler::new(
            repo.clone(),
        ))
        .register::<department::GetAllDepartmentsQuery, _>(
            department::GetAllDepartmentsHandler::new(repo.clone()),
        )
        .register::<department::GetDepartmentByIdQuery, _>(
            department::GetDepartmentByIdHandler::new(repo.clone()),
        )
        .register::<department::CreateDepartmentCommand, _>(
            department::CreateDepartmentHandler::new(repo.clone()),
        )
        .register::<department::UpdateDepartmentCommand, _>(
            department::UpdateDepartmentHandler::new(repo.clone()),
        )
        .register::<department::DeleteDepartmentCommand, _>(
            department::DeleteDepartmentHandler::new(repo),
        )
        .build()
}
