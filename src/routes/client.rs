use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::dto::client::{CreateClientDto, UpdateClientDto};
use crate::mediator::Mediator;
use crate::routes::error_response;
use crate::services::client::{
    CreateClientCommand, DeleteClientCommand, GetAllClientsQuery, GetClientByIdQuery,
    GetClientByNameQuery, UpdateClientCommand,
};

#[derive(Deserialize)]
struct SearchClientsParams {
    name: String,
}

#[get("/v1/clients")]
pub async fn list_clients(mediator: web::Data<Mediator>) -> impl Responder {
    match mediator.send(GetAllClientsQuery).await {
        Ok(clients) => HttpResponse::Ok().json(clients),
        Err(e) => error_response(&e),
    }
}

#[get("/v1/clients/search")]
pub async fn search_clients(
    params: web::Query<SearchClientsParams>,
    mediator: web::Data<Mediator>,
) -> impl Responder {
    let query = GetClientByNameQuery {
        name: params.into_inner().name,
    };

    match mediator.send(query).await {
        Ok(Some(client)) => HttpResponse::Ok().json(client),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => error_response(&e),
    }
}

#[get("/v1/clients/{client_id}")]
pub async fn get_client(
    client_id: web::Path<i32>,
    mediator: web::Data<Mediator>,
) -> impl Responder {
    let query = GetClientByIdQuery {
        id: client_id.into_inner(),
    };

    match mediator.send(query).await {
        Ok(Some(client)) => HttpResponse::Ok().json(client),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => error_response(&e),
    }
}

#[post("/v1/clients")]
pub async fn create_client(
    payload: web::Json<CreateClientDto>,
    mediator: web::Data<Mediator>,
) -> impl Responder {
    let client = payload.into_inner();

    if let Err(e) = client.validate() {
        return HttpResponse::BadRequest().json(e);
    }

    match mediator.send(CreateClientCommand { client }).await {
        Ok(client) => HttpResponse::Created().json(client),
        Err(e) => error_response(&e),
    }
}

#[put("/v1/clients/{client_id}")]
pub async fn update_client(
    client_id: web::Path<i32>,
    payload: web::Json<UpdateClientDto>,
    mediator: web::Data<Mediator>,
) -> impl Responder {
    let client = payload.into_inner();

    if client.id != *client_id {
        return HttpResponse::BadRequest().json(json!({ "error": "Client ids do not match" }));
    }
    if let Err(e) = client.validate() {
        return HttpResponse::BadRequest().json(e);
    }

    match mediator.send(UpdateClientCommand { client }).await {
        Ok(Some(client)) => HttpResponse::Ok().json(client),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => error_response(&e),
    }
}

#[delete("/v1/clients/{client_id}")]
pub async fn delete_client(
    client_id: web::Path<i32>,
    mediator: web::Data<Mediator>,
) -> impl Responder {
    let command = DeleteClientCommand {
        id: client_id.into_inner(),
    };

    match mediator.send(command).await {
        Ok(Some(client)) => HttpResponse::Ok().json(client),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => error_response(&e),
    }
}
