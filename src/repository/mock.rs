//! Mock repository implementations for isolating handlers in tests.

use mockall::mock;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::domain::department::{Department, NewDepartment, UpdateDepartment};
use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::repository::errors::RepositoryResult;
use crate::repository::{
    ClientRepository, DepartmentRepository, EmployeeRepository, Repository,
};

mock! {
    pub ClientRepo {}

    impl Repository<Client, i32> for ClientRepo {
        type New = NewClient;
        type Update = UpdateClient;

        fn list(&self) -> RepositoryResult<Vec<Client>>;
        fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Client>>;
        fn create(&self, new: &NewClient) -> RepositoryResult<Client>;
        fn update(&self, id: i32, updates: &UpdateClient) -> RepositoryResult<Option<Client>>;
        fn delete(&self, id: i32) -> RepositoryResult<bool>;
    }

    impl ClientRepository for ClientRepo {
        fn get_by_name(
            &self,
            first_name: &str,
            last_name: &str,
        ) -> RepositoryResult<Option<Client>>;
    }
}

mock! {
    pub EmployeeRepo {}

    impl Repository<Employee, i32> for EmployeeRepo {
        type New = NewEmployee;
        type Update = UpdateEmployee;

        fn list(&self) -> RepositoryResult<Vec<Employee>>;
        fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Employee>>;
        fn create(&self, new: &NewEmployee) -> RepositoryResult<Employee>;
        fn update(&self, id: i32, updates: &UpdateEmployee) -> RepositoryResult<Option<Employee>>;
        fn delete(&self, id: i32) -> RepositoryResult<bool>;
    }

    impl EmployeeRepository for EmployeeRepo {
        fn get_by_email(&self, email: &str) -> RepositoryResult<Option<Employee>>;
    }
}

mock! {
    pub DepartmentRepo {}

    impl Repository<Department, i32> for DepartmentRepo {
        type New = NewDepartment;
        type Update = UpdateDepartment;

        fn list(&self) -> RepositoryResult<Vec<Department>>;
        fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Department>>;
        fn create(&self, new: &NewDepartment) -> RepositoryResult<Department>;
        fn update(
            &self,
            id: i32,
            updates: &UpdateDepartment,
        ) -> RepositoryResult<Option<Department>>;
        fn delete(&self, id: i32) -> RepositoryResult<bool>;
    }

    impl DepartmentRepository for DepartmentRepo {}
}
