//! Client commands, queries and the handlers bound to them.

use async_trait::async_trait;

use crate::domain::client::{NewClient, UpdateClient};
use crate::dto::client::{ClientDto, CreateClientDto, UpdateClientDto};
use crate::mediator::{Request, RequestHandler};
use crate::repository::{ClientRepository, Repository};
use crate::services::{ServiceError, ServiceResult};

/// Returns every client.
#[derive(Debug, Clone, Default)]
pub struct GetAllClientsQuery;

impl Request for GetAllClientsQuery {
    type Output = Vec<ClientDto>;
}

/// Returns a single client by id.
#[derive(Debug, Clone)]
pub struct GetClientByIdQuery {
    pub id: i32,
}

impl Request for GetClientByIdQuery {
    type Output = Option<ClientDto>;
}

/// Returns the first client matching a free-text `"First Last"` name.
#[derive(Debug, Clone)]
pub struct GetClientByNameQuery {
    pub name: String,
}

impl Request for GetClientByNameQuery {
    type Output = Option<ClientDto>;
}

/// Persists a new client.
#[derive(Debug, Clone)]
pub struct CreateClientCommand {
    pub client: CreateClientDto,
}

impl Request for CreateClientCommand {
    type Output = ClientDto;
}

/// Replaces the client carried in the payload's id.
#[derive(Debug, Clone)]
pub struct UpdateClientCommand {
    pub client: UpdateClientDto,
}

impl Request for UpdateClientCommand {
    type Output = Option<ClientDto>;
}

/// Removes a client by id.
#[derive(Debug, Clone)]
pub struct DeleteClientCommand {
    pub id: i32,
}

impl Request for DeleteClientCommand {
    type Output = Option<ClientDto>;
}

/// Splits a free-text name into its first and last parts.
///
/// The first whitespace token is the first name; the remaining tokens,
/// rejoined with single spaces, form the last name. Anything shorter than
/// two tokens is a validation failure, not a miss.
fn split_name(name: &str) -> ServiceResult<(String, String)> {
    let mut tokens = name.split_whitespace();
    let first = tokens.next();
    let rest = tokens.collect::<Vec<_>>();

    match first {
        Some(first) if !rest.is_empty() => Ok((first.to_string(), rest.join(" "))),
        _ => Err(ServiceError::Validation(
            "name must contain a first and a last name".to_string(),
        )),
    }
}

pub struct GetAllClientsHandler<R> {
    repo: R,
}

impl<R> GetAllClientsHandler<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> RequestHandler<GetAllClientsQuery> for GetAllClientsHandler<R>
where
    R: ClientRepository + Send + Sync,
{
    async fn handle(&self, _request: GetAllClientsQuery) -> ServiceResult<Vec<ClientDto>> {
        let clients = self.repo.list()?;
        Ok(clients.into_iter().map(ClientDto::from).collect())
    }
}

pub struct GetClientByIdHandler<R> {
    repo: R,
}

impl<R> GetClientByIdHandler<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> RequestHandler<GetClientByIdQuery> for GetClientByIdHandler<R>
where
    R: ClientRepository + Send + Sync,
{
    async fn handle(&self, request: GetClientByIdQuery) -> ServiceResult<Option<ClientDto>> {
        let client = self.repo.get_by_id(request.id)?;
        Ok(client.map(ClientDto::from))
    }
}

pub struct GetClientByNameHandler<R> {
    repo: R,
}

impl<R> GetClientByNameHandler<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> RequestHandler<GetClientByNameQuery> for GetClientByNameHandler<R>
where
    R: ClientRepository + Send + Sync,
{
    async fn handle(&self, request: GetClientByNameQuery) -> ServiceResult<Option<ClientDto>> {
        let (first_name, last_name) = split_name(&request.name)?;
        let client = self.repo.get_by_name(&first_name, &last_name)?;
        Ok(client.map(ClientDto::from))
    }
}

pub struct CreateClientHandler<R> {
    repo: R,
}

impl<R> CreateClientHandler<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> RequestHandler<CreateClientCommand> for CreateClientHandler<R>
where
    R: ClientRepository + Send + Sync,
{
    async fn handle(&self, request: CreateClientCommand) -> ServiceResult<ClientDto> {
        let new_client = NewClient::from(request.client);
        let created = self.repo.create(&new_client)?;
        Ok(created.into())
    }
}

pub struct UpdateClientHandler<R> {
    repo: R,
}

impl<R> UpdateClientHandler<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> RequestHandler<UpdateClientCommand> for UpdateClientHandler<R>
where
    R: ClientRepository + Send + Sync,
{
    async fn handle(&self, request: UpdateClientCommand) -> ServiceResult<Option<ClientDto>> {
        let id = request.client.id;
        let updates = UpdateClient::from(request.client);
        let updated = self.repo.update(id, &updates)?;
        Ok(updated.map(ClientDto::from))
    }
}

pub struct DeleteClientHandler<R> {
    repo: R,
}

impl<R> DeleteClientHandler<R> {
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> RequestHandler<DeleteClientCommand> for DeleteClientHandler<R>
where
    R: ClientRepository + Send + Sync,
{
    async fn handle(&self, request: DeleteClientCommand) -> ServiceResult<Option<ClientDto>> {
        let Some(client) = self.repo.get_by_id(request.id)? else {
            return Ok(None);
        };

        if self.repo.delete(request.id)? {
            Ok(Some(client.into()))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_name_takes_first_token_as_first_name() {
        let (first, last) = split_name("Jane Doe").unwrap();
        assert_eq!(first, "Jane");
        assert_eq!(last, "Doe");
    }

    #[test]
    fn split_name_joins_remaining_tokens_into_last_name() {
        let (first, last) = split_name("  Anna  Maria   Schmidt ").unwrap();
        assert_eq!(first, "Anna");
        assert_eq!(last, "Maria Schmidt");
    }

    #[test]
    fn split_name_rejects_single_token() {
        assert!(matches!(
            split_name("Madonna"),
            Err(ServiceError::Validation(_))
        ));
        assert!(matches!(split_name("   "), Err(ServiceError::Validation(_))));
    }
}

#[cfg(all(test, feature = "test-mocks"))]
mod handler_tests {
    use super::*;
    use crate::domain::client::Client;
    use crate::repository::mock::MockClientRepo;

    fn sample_client(id: i32) -> Client {
        Client {
            id,
            first_name: "Jane".to_string(),
            last_name: "Doe".to_string(),
            email: Some("jane@example.com".to_string()),
            ..Client::default()
        }
    }

    #[actix_web::test]
    async fn get_by_name_splits_before_querying() {
        let mut repo = MockClientRepo::new();
        repo.expect_get_by_name()
            .withf(|first, last| first == "Jane" && last == "Doe")
            .returning(|_, _| Ok(Some(sample_client(7))));

        let handler = GetClientByNameHandler::new(repo);
        let found = handler
            .handle(GetClientByNameQuery {
                name: "Jane Doe".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(found.unwrap().id, 7);
    }

    #[actix_web::test]
    async fn get_by_name_rejects_unsplittable_input_without_a_lookup() {
        let mut repo = MockClientRepo::new();
        repo.expect_get_by_name().times(0);

        let handler = GetClientByNameHandler::new(repo);
        let err = handler
            .handle(GetClientByNameQuery {
                name: "Madonna".to_string(),
            })
            .await
            .unwrap_err();

        assert!(matches!(err, ServiceError::Validation(_)));
    }

    #[actix_web::test]
    async fn delete_returns_absent_for_unknown_id() {
        let mut repo = MockClientRepo::new();
        repo.expect_get_by_id().returning(|_| Ok(None));
        repo.expect_delete().times(0);

        let handler = DeleteClientHandler::new(repo);
        let deleted = handler.handle(DeleteClientCommand { id: 99 }).await.unwrap();

        assert!(deleted.is_none());
    }

    #[actix_web::test]
    async fn delete_returns_the_removed_record() {
        let mut repo = MockClientRepo::new();
        repo.expect_get_by_id().returning(|id| Ok(Some(sample_client(id))));
        repo.expect_delete().returning(|_| Ok(true));

        let handler = DeleteClientHandler::new(repo);
        let deleted = handler.handle(DeleteClientCommand { id: 5 }).await.unwrap();

        assert_eq!(deleted.unwrap().id, 5);
    }
}
