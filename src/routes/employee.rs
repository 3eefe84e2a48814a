use actix_web::{HttpResponse, Responder, delete, get, post, put, web};
use serde::Deserialize;
use serde_json::json;
use validator::Validate;

use crate::dto::employee::{CreateEmployeeDto, UpdateEmployeeDto};
use crate::mediator::Mediator;
use crate::routes::error_response;
use crate::services::employee::{
    CreateEmployeeCommand, DeleteEmployeeCommand, GetAllEmployeesQuery, GetEmployeeByEmailQuery,
    GetEmployeeByIdQuery, UpdateEmployeeCommand,
};

#[derive(Deserialize)]
struct SearchEmployeesParams {
    email: String,
}

#[get("/v1/employees")]
pub async fn list_employees(mediator: web::Data<Mediator>) -> impl Responder {
    match mediator.send(GetAllEmployeesQuery).await {
        Ok(employees) => HttpResponse::Ok().json(employees),
        Err(e) => error_response(&e),
    }
}

#[get("/v1/employees/search")]
pub async fn search_employees(
    params: web::Query<SearchEmployeesParams>,
    mediator: web::Data<Mediator>,
) -> impl Responder {
    let query = GetEmployeeByEmailQuery {
        email: params.into_inner().email,
    };

    match mediator.send(query).await {
        Ok(Some(employee)) => HttpResponse::Ok().json(employee),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => error_response(&e),
    }
}

#[get("/v1/employees/{employee_id}")]
pub async fn get_employee(
    employee_id: web::Path<i32>,
    mediator: web::Data<Mediator>,
) -> impl Responder {
    let query = GetEmployeeByIdQuery {
        id: employee_id.into_inner(),
    };

    match mediator.send(query).await {
        Ok(Some(employee)) => HttpResponse::Ok().json(employee),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => error_response(&e),
    }
}

#[post("/v1/employees")]
pub async fn create_employee(
    payload: web::Json<CreateEmployeeDto>,
    mediator: web::Data<Mediator>,
) -> impl Responder {
    let employee = payload.into_inner();

    if let Err(e) = employee.validate() {
        return HttpResponse::BadRequest().json(e);
    }

    match mediator.send(CreateEmployeeCommand { employee }).await {
        Ok(employee) => HttpResponse::Created().json(employee),
        Err(e) => error_response(&e),
    }
}

#[put("/v1/employees/{employee_id}")]
pub async fn update_employee(
    employee_id: web::Path<i32>,
    payload: web::Json<UpdateEmployeeDto>,
    mediator: web::Data<Mediator>,
) -> impl Responder {
    let employee = payload.into_inner();

    if employee.id != *employee_id {
        return HttpResponse::BadRequest().json(json!({ "error": "Employee ids do not match" }));
    }
    if let Err(e) = employee.validate() {
        return HttpResponse::BadRequest().json(e);
    }

    match mediator.send(UpdateEmployeeCommand { employee }).await {
        Ok(Some(employee)) => HttpResponse::Ok().json(employee),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => error_response(&e),
    }
}

#[delete("/v1/employees/{employee_id}")]
pub async fn delete_employee(
    employee_id: web::Path<i32>,
    mediator: web::Data<Mediator>,
) -> impl Responder {
    let command = DeleteEmployeeCommand {
        id: employee_id.into_inner(),
    };

    match mediator.send(command).await {
        Ok(Some(employee)) => HttpResponse::Ok().json(employee),
        Ok(None) => HttpResponse::NotFound().finish(),
        Err(e) => error_response(&e),
    }
}
