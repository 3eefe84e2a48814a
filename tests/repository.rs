use clientele::domain::client::{NewClient, UpdateClient};
use clientele::domain::department::{NewDepartment, UpdateDepartment};
use clientele::domain::employee::NewEmployee;
use clientele::repository::errors::RepositoryError;
use clientele::repository::{
    ClientRepository, DepartmentRepository, DieselRepository, EmployeeRepository, Repository,
};

mod common;

fn new_client(first: &str, last: &str, email: Option<&str>) -> NewClient {
    NewClient::new(
        first.to_string(),
        last.to_string(),
        email.map(str::to_string),
        Some("111".to_string()),
        Some("Addr 1".to_string()),
    )
}

#[test]
fn created_clients_come_back_by_id() {
    let test_db = common::TestDb::new("repo_client_create.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let clients: &dyn ClientRepository = &repo;

    let created = clients
        .create(&new_client("Alice", "Adams", Some("alice@example.com")))
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.first_name, "Alice");
    assert_eq!(created.email, Some("alice@example.com".to_string()));

    let fetched = clients.get_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched, created);

    let all = clients.list().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0], created);
}

#[test]
fn unknown_keys_are_absent_not_errors() {
    let test_db = common::TestDb::new("repo_client_absent.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let clients: &dyn ClientRepository = &repo;

    assert!(clients.get_by_id(12345).unwrap().is_none());

    let updates = UpdateClient::new("Ghost".to_string(), "Entry".to_string(), None, None, None);
    assert!(clients.update(12345, &updates).unwrap().is_none());

    assert!(!clients.delete(12345).unwrap());
}

#[test]
fn delete_is_idempotent() {
    let test_db = common::TestDb::new("repo_client_delete.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let clients: &dyn ClientRepository = &repo;

    let created = clients.create(&new_client("Bob", "Brown", None)).unwrap();

    assert!(clients.delete(created.id).unwrap());
    assert!(clients.get_by_id(created.id).unwrap().is_none());
    assert!(!clients.delete(created.id).unwrap());
}

#[test]
fn update_replaces_the_full_record() {
    let test_db = common::TestDb::new("repo_client_update.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let clients: &dyn ClientRepository = &repo;

    let created = clients
        .create(&new_client("Carol", "Clark", Some("carol@example.com")))
        .unwrap();

    // The replacement clears every field it leaves unset.
    let updates = UpdateClient::new("Caroline".to_string(), "Clark".to_string(), None, None, None);
    let updated = clients.update(created.id, &updates).unwrap().unwrap();
    assert_eq!(updated.first_name, "Caroline");
    assert_eq!(updated.email, None);
    assert_eq!(updated.phone, None);
    assert_eq!(updated.address, None);

    let fetched = clients.get_by_id(created.id).unwrap().unwrap();
    assert_eq!(fetched, updated);
}

#[test]
fn clients_are_found_by_exact_name() {
    let test_db = common::TestDb::new("repo_client_by_name.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let clients: &dyn ClientRepository = &repo;

    clients.create(&new_client("Jane", "Doe", None)).unwrap();

    let found = clients.get_by_name("Jane", "Doe").unwrap().unwrap();
    assert_eq!(found.first_name, "Jane");
    assert_eq!(found.last_name, "Doe");

    assert!(clients.get_by_name("Jane", "Bloggs").unwrap().is_none());
}

#[test]
fn employee_repository_crud_and_email_lookup() {
    let test_db = common::TestDb::new("repo_employee_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let departments: &dyn DepartmentRepository = &repo;
    let employees: &dyn EmployeeRepository = &repo;

    let department = departments
        .create(&NewDepartment::new("Engineering".to_string()))
        .unwrap();

    let created = employees
        .create(&NewEmployee::new(
            department.id,
            "Ann".to_string(),
            "Lee".to_string(),
            "Ann.Lee@Example.com".to_string(),
            Some("222".to_string()),
            None,
            None,
        ))
        .unwrap();
    assert!(created.id > 0);
    assert_eq!(created.email, "ann.lee@example.com");

    let by_email = employees.get_by_email("ann.lee@example.com").unwrap().unwrap();
    assert_eq!(by_email.id, created.id);
    assert!(employees.get_by_email("nobody@example.com").unwrap().is_none());

    assert!(employees.delete(created.id).unwrap());
    assert!(employees.get_by_id(created.id).unwrap().is_none());
}

#[test]
fn duplicate_employee_email_is_a_constraint_violation() {
    let test_db = common::TestDb::new("repo_employee_unique.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let departments: &dyn DepartmentRepository = &repo;
    let employees: &dyn EmployeeRepository = &repo;

    let department = departments
        .create(&NewDepartment::new("Sales".to_string()))
        .unwrap();

    let employee = NewEmployee::new(
        department.id,
        "Ann".to_string(),
        "Lee".to_string(),
        "ann@example.com".to_string(),
        None,
        None,
        None,
    );
    employees.create(&employee).unwrap();

    let err = employees.create(&employee).unwrap_err();
    assert!(matches!(err, RepositoryError::ConstraintViolation(_)));
}

#[test]
fn department_repository_crud() {
    let test_db = common::TestDb::new("repo_department_crud.db");
    let repo = DieselRepository::new(test_db.pool().clone());
    let departments: &dyn DepartmentRepository = &repo;

    let created = departments
        .create(&NewDepartment::new("Support".to_string()))
        .unwrap();

    let renamed = departments
        .update(created.id, &UpdateDepartment::new("Customer Support".to_string()))
        .unwrap()
        .unwrap();
    assert_eq!(renamed.name, "Customer Support");

    let all = departments.list().unwrap();
    assert_eq!(all.len(), 1);

    assert!(departments.delete(created.id).unwrap());
    assert!(departments.list().unwrap().is_empty());
}
