use chrono::Utc;
use diesel::prelude::*;

use crate::domain::department::{Department, NewDepartment, UpdateDepartment};
use crate::repository::errors::RepositoryResult;
use crate::repository::{DepartmentRepository, DieselRepository, Repository};

impl Repository<Department, i32> for DieselRepository {
    type New = NewDepartment;
    type Update = UpdateDepartment;

    fn list(&self) -> RepositoryResult<Vec<Department>> {
        use crate::models::department::Department as DbDepartment;
        use crate::schema::departments;

        let mut conn = self.pool.get()?;
        let items = departments::table
            .order(departments::id.asc())
            .load::<DbDepartment>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Department>> {
        use crate::models::department::Department as DbDepartment;
        use crate::schema::departments;

        let mut conn = self.pool.get()?;
        let department = departments::table
            .find(id)
            .first::<DbDepartment>(&mut conn)
            .optional()?;

        Ok(department.map(Into::into))
    }

    fn create(&self, new: &NewDepartment) -> RepositoryResult<Department> {
        use crate::models::department::{
            Department as DbDepartment, NewDepartment as DbNewDepartment,
        };
        use crate::schema::departments;

        let mut conn = self.pool.get()?;
        let insertable: DbNewDepartment = new.into();
        let created = diesel::insert_into(departments::table)
            .values(&insertable)
            .get_result::<DbDepartment>(&mut conn)?;

        Ok(created.into())
    }

    fn update(&self, id: i32, updates: &UpdateDepartment) -> RepositoryResult<Option<Department>> {
        use crate::models::department::{
            Department as DbDepartment, UpdateDepartment as DbUpdateDepartment,
        };
        use crate::schema::departments;

        let mut conn = self.pool.get()?;
        let changes: DbUpdateDepartment = updates.into();
        let updated = diesel::update(departments::table.find(id))
            .set((&changes, departments::updated_at.eq(Utc::now().naive_utc())))
            .get_result::<DbDepartment>(&mut conn)
            .optional()?;

        Ok(updated.map(Into::into))
    }

    fn delete(&self, id: i32) -> RepositoryResult<bool> {
        use crate::schema::departments;

        let mut conn = self.pool.get()?;
        let affected = diesel::delete(departments::table.find(id)).execute(&mut conn)?;

        Ok(affected > 0)
    }
}

impl DepartmentRepository for DieselRepository {}
