use chrono::Utc;
use diesel::prelude::*;

use crate::domain::employee::{Employee, NewEmployee, UpdateEmployee};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DieselRepository, EmployeeRepository, Repository};

impl Repository<Employee, i32> for DieselRepository {
    type New = NewEmployee;
    type Update = UpdateEmployee;

    fn list(&self) -> RepositoryResult<Vec<Employee>> {
        use crate::models::employee::Employee as DbEmployee;
        use crate::schema::employees;

        let mut conn = self.pool.get()?;
        let items = employees::table
            .order(employees::id.asc())
            .load::<DbEmployee>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Employee>> {
        use crate::models::employee::Employee as DbEmployee;
        use crate::schema::employees;

        let mut conn = self.pool.get()?;
        let employee = employees::table
            .find(id)
            .first::<DbEmployee>(&mut conn)
            .optional()?;

        Ok(employee.map(Into::into))
    }

    fn create(&self, new: &NewEmployee) -> RepositoryResult<Employee> {
        use crate::models::employee::{Employee as DbEmployee, NewEmployee as DbNewEmployee};
        use crate::schema::employees;

        let mut conn = self.pool.get()?;
        let insertable: DbNewEmployee = new.into();
        let created = diesel::insert_into(employees::table)
            .values(&insertable)
            .get_result::<DbEmployee>(&mut conn)?;

        Ok(created.into())
    }

    fn update(&self, id: i32, updates: &UpdateEmployee) -> RepositoryResult<Option<Employee>> {
        use crate::models::employee::{Employee as DbEmployee, UpdateEmployee as DbUpdateEmployee};
        use crate::schema::employees;

        let mut conn = self.pool.get()?;
        let changes: DbUpdateEmployee = updates.into();
        let updated = diesel::update(employees::table.find(id))
            .set((&changes, employees::updated_at.eq(Utc::now().naive_utc())))
            .get_result::<DbEmployee>(&mut conn)
            .optional()?;

        Ok(updated.map(Into::into))
    }

    fn delete(&self, id: i32) -> RepositoryResult<bool> {
        use crate::schema::employees;

        let mut conn = self.pool.get()?;
        let affected = diesel::delete(employees::table.find(id)).execute(&mut conn)?;

        Ok(affected > 0)
    }
}

impl EmployeeRepository for DieselRepository {
    fn get_by_email(&self, email: &str) -> RepositoryResult<Option<Employee>> {
        use crate::models::employee::Employee as DbEmployee;
        use crate::schema::employees;

        let mut conn = self.pool.get()?;
        let employee = employees::table
            .filter(employees::email.eq(email))
            .first::<DbEmployee>(&mut conn)
            .optional()?;

        Ok(employee.map(Into::into))
    }
}
