//! Capability contracts over the entity store, plus the Diesel-backed
//! implementation used by the running service.

use crate::db::DbPool;
use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::department::{Department, NewDepartment, UpdateDepartment};
use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::repository::errors::RepositoryResult;

pub mod client;
pub mod department;
pub mod employee;
pub mod errors;
#[cfg(feature = "test-mocks")]
pub mod mock;

/// Store-agnostic CRUD capability over an entity type `E` keyed by `K`.
///
/// A miss is always `Ok(None)` (or `Ok(false)` for [`Repository::delete`]),
/// never an error; errors are reserved for store failures.
pub trait Repository<E, K> {
    /// Insertable form of `E`, key not yet assigned.
    type New;
    /// Full replacement state for an existing `E`.
    type Update;

    /// Returns all records in store-defined order.
    fn list(&self) -> RepositoryResult<Vec<E>>;

    /// Returns the record with the given key.
    fn get_by_id(&self, id: K) -> RepositoryResult<Option<E>>;

    /// Persists a new record and returns it with the key populated.
    fn create(&self, new: &Self::New) -> RepositoryResult<E>;

    /// Replaces the full record with the given key.
    fn update(&self, id: K, updates: &Self::Update) -> RepositoryResult<Option<E>>;

    /// Removes the record with the given key, reporting whether it existed.
    fn delete(&self, id: K) -> RepositoryResult<bool>;
}

pub trait ClientRepository: Repository<Client, i32, New = NewClient, Update = UpdateClient> {
    /// Looks up a client by exact first and last name.
    fn get_by_name(&self, first_name: &str, last_name: &str) -> RepositoryResult<Option<Client>>;
}

pub trait EmployeeRepository:
    Repository<Employee, i32, New = NewEmployee, Update = UpdateEmployee>
{
    /// Looks up an employee by email address.
    fn get_by_email(&self, email: &str) -> RepositoryResult<Option<Employee>>;
}

pub trait DepartmentRepository:
    Repository<Department, i32, New = NewDepartment, Update = UpdateDepartment>
{
}

#[derive(Clone)]
/// Diesel implementation of the repository contracts, one impl per entity.
pub struct DieselRepository {
    pool: DbPool,
}

impl DieselRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}
