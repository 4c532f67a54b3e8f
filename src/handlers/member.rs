use actix_web::{Responder, web, get, post, put, delete, HttpResponse};
use serde_json::json;

use crate::{
    dto::{ListQuery, NewMemberDto, UpdateMemberDto},
    service::{self, pagination},
    state::AppState,
};

#[post("/admins/{uuid:[0-9a-f]+}/members")]
pub async fn create(
    admin_id: web::Path<String>,
    new_member_dto: web::Json<NewMemberDto>,
    state: web::Data<AppState>,
) -> impl Responder {
    let res = service::member::create(
        &admin_id.into_inner(),
        new_member_dto.into_inner(),
        state.get_ref(),
    )
    .await;
    match res {
        Ok(member) => HttpResponse::Created().json(member),
        Err(err) => HttpResponse::from_error(err),
    }
}

#[get("/members")]
pub async fn get_all(query: web::Query<Vec<(String, String)>>, state: web::Data<AppState>) -> impl Responder {
    let (start, count) = ListQuery::from_pairs(query.into_inner()).bounds();
    match service::member::get_all(pagination::resolve(start, count), state.get_ref()).await {
        Ok(members) => HttpResponse::Ok().json(members),
        Err(err) => HttpResponse::from_error(err),
    }
}

#[get("/members/{uuid:[0-9a-f]+}")]
pub async fn get_by_id(id: web::Path<String>, state: web::Data<AppState>) -> impl Responder {
    match service::member::get_by_id(&id.into_inner(), state.get_ref()).await {
        Ok(member) => HttpResponse::Ok().json(member),
        Err(err) => HttpResponse::from_error(err),
    }
}

#[put("/members/{uuid:[0-9a-f]+}")]
pub async fn update(
    id: web::Path<String>,
    update_member_dto: web::Json<UpdateMemberDto>,
    state: web::Data<AppState>,
) -> impl Responder {
    let res = service::member::update(&id.into_inner(), update_member_dto.into_inner(), state.get_ref()).await;
    match res {
        Ok(member) => HttpResponse::Ok().json(member),
        Err(err) => HttpResponse::from_error(err),
    }
}

#[delete("/members/{uuid:[0-9a-f]+}")]
pub async fn remove(id: web::Path<String>, state: web::Data<AppState>) -> impl Responder {
    match service::member::delete(&id.into_inner(), state.get_ref()).await {
        Ok(_) => HttpResponse::Ok().json(json!({ "result": "success" })),
        Err(err) => HttpResponse::from_error(err),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(create)
        .service(get_all)
        .service(get_by_id)
        .service(update)
        .service(remove);
}
