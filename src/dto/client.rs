use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::client::{Client, NewClient, UpdateClient};

/// Read projection of a [`Client`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientDto {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<Client> for ClientDto {
    fn from(client: Client) -> Self {
        Self {
            id: client.id,
            first_name: client.first_name,
            last_name: client.last_name,
            email: client.email,
            phone: client.phone,
            address: client.address,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
/// Payload for creating a client.
pub struct CreateClientDto {
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<CreateClientDto> for NewClient {
    fn from(dto: CreateClientDto) -> Self {
        NewClient::new(dto.first_name, dto.last_name, dto.email, dto.phone, dto.address)
    }
}

#[derive(Debug, Clone, Deserialize, Validate)]
/// Payload for replacing an existing client; carries the target id.
pub struct UpdateClientDto {
    pub id: i32,
    #[validate(length(min = 1))]
    pub first_name: String,
    #[validate(length(min = 1))]
    pub last_name: String,
    #[validate(email)]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
}

impl From<UpdateClientDto> for UpdateClient {
    fn from(dto: UpdateClientDto) -> Self {
        UpdateClient::new(dto.first_name, dto.last_name, dto.email, dto.phone, dto.address)
    }
}
