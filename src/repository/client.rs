use chrono::Utc;
use diesel::prelude::*;

use crate::domain::client::{Client, NewClient, UpdateClient};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ClientRepository, DieselRepository, Repository};

impl Repository<Client, i32> for DieselRepository {
    type New = NewClient;
    type Update = UpdateClient;

    fn list(&self) -> RepositoryResult<Vec<Client>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = self.pool.get()?;
        let items = clients::table
            .order(clients::id.asc())
            .load::<DbClient>(&mut conn)?
            .into_iter()
            .map(Into::into)
            .collect();

        Ok(items)
    }

    fn get_by_id(&self, id: i32) -> RepositoryResult<Option<Client>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = self.pool.get()?;
        let client = clients::table
            .find(id)
            .first::<DbClient>(&mut conn)
            .optional()?;

        Ok(client.map(Into::into))
    }

    fn create(&self, new: &NewClient) -> RepositoryResult<Client> {
        use crate::models::client::{Client as DbClient, NewClient as DbNewClient};
        use crate::schema::clients;

        let mut conn = self.pool.get()?;
        let insertable: DbNewClient = new.into();
        let created = diesel::insert_into(clients::table)
            .values(&insertable)
            .get_result::<DbClient>(&mut conn)?;

        Ok(created.into())
    }

    fn update(&self, id: i32, updates: &UpdateClient) -> RepositoryResult<Option<Client>> {
        use crate::models::client::{Client as DbClient, UpdateClient as DbUpdateClient};
        use crate::schema::clients;

        let mut conn = self.pool.get()?;
        let changes: DbUpdateClient = updates.into();
        let updated = diesel::update(clients::table.find(id))
            .set((&changes, clients::updated_at.eq(Utc::now().naive_utc())))
            .get_result::<DbClient>(&mut conn)
            .optional()?;

        Ok(updated.map(Into::into))
    }

    fn delete(&self, id: i32) -> RepositoryResult<bool> {
        use crate::schema::clients;

        let mut conn = self.pool.get()?;
        let affected = diesel::delete(clients::table.find(id)).execute(&mut conn)?;

        Ok(affected > 0)
    }
}

impl ClientRepository for DieselRepository {
    fn get_by_name(&self, first_name: &str, last_name: &str) -> RepositoryResult<Option<Client>> {
        use crate::models::client::Client as DbClient;
        use crate::schema::clients;

        let mut conn = self.pool.get()?;
        let client = clients::table
            .filter(clients::first_name.eq(first_name))
            .filter(clients::last_name.eq(last_name))
            .order(clients::id.asc())
            .first::<DbClient>(&mut conn)
            .optional()?;

        Ok(client.map(Into::into))
    }
}
