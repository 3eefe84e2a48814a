use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde_json::json;
use validator::Validate;

use crate::dto::department::{CreateDepartmentDto, UpdateDepartmentDto};
use crate::mediator::Mediator;
use crate::routes::error_response;
use crate::services::department::{
    CreateDepartmentCommand, DeleteDepartmentCommand, GetAllDepartmentsQuery,
    GetDepartmentByIdQuery, UpdateDepartmentCommand,
};

#[get("/v1/departments")]
pub async fn list_departments(mediator: web::Data<Mediator>) -> impl Responder {
    match mediator.send(GetAllDepartmentsQuery).await {
        Ok(departments) => HttpResponse::Ok().json(departments),
        Err(e) => error_response(&e),
    }
}

#[get("/v1/departments/{department_id}")]
pub async fn get_department(
    department_id: web::Path<i32>,
    mediator: web::Data<Mediator>,
) -> impl Responder {
    let query = GetDepartmentByIdQuery {
        id: department_id.into_inner(),
    };

    match mediator.send(query).await {
        Ok(Some(department)) => HttpResponse::Ok().json(department),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => error_response(&e),
    }
}

#[post("/v1/departments")]
pub async fn create_department(
    payload: web::Json<CreateDepartmentDto>,
    mediator: web::Data<Mediator>,
) -> impl Responder {
    let department = payload.into_inner();

    if let Err(e) = department.validate() {
        return HttpResponse::BadRequest().json(e);
    }

    match mediator.send(CreateDepartmentCommand { department }).await {
        Ok(department) => HttpResponse::Created().json(department),
        Err(e) => error_response(&e),
    }
}

#[put("/v1/departments/{department_id}")]
pub async fn update_department(
    department_id: web::Path<i32>,
    payload: web::Json<UpdateDepartmentDto>,
    mediator: web::Data<Mediator>,
) -> impl Responder {
    let department = payload.into_inner();

    if department.id != *department_id {
        return HttpResponse::BadRequest().json(json!({ "error": "Department ids do not match" }));
    }
    if let Err(e) = department.validate() {
        return HttpResponse::BadRequest().json(e);
    }

    match mediator.send(UpdateDepartmentCommand { department }).await {
        Ok(Some(department)) => HttpResponse::Ok().json(department),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => error_response(&e),
    }
}

#[delete("/v1/departments/{department_id}")]
pub async fn delete_department(
    department_id: web::Path<i32>,
    mediator: web::Data<Mediator>,
) -> impl Responder {
    let command = DeleteDepartmentCommand {
        id: department_id.into_inner(),
    };

    match mediator.send(command).await {
        Ok(Some(department)) => HttpResponse::Ok().json(department),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => error_response(&e),
    }
}
