use actix_web::{Responder, web, get, post, put, delete, HttpResponse};
use serde_json::json;

use crate::{
   dto::{ListQuery, NewEventDto, UpdateEventDto},
   service::{self, pagination},
   state::AppState,
};

#[get("/events")]
pub async fn get_all(query: web::Query<Vec<(String, String)>>, state: web::Data<AppState>) -> impl Responder {
   let (start, count) = ListQuery::from_pairs(query.into_inner()).bounds();
   let page = pagination::resolve(start, count);
   match service::event::get_all(page, state.get_ref()).await {
      Ok(events) => HttpResponse::Ok().json(events),
      Err(err) => HttpResponse::from_error(err)
   }
}

#[get("/events/{uuid:[0-9a-f]+}")]
pub async fn get_by_id(id: web::Path<String>, state: web::Data<AppState>) -> impl Responder {
   match service::event::get_by_id(&id.into_inner(), state.get_ref()).await {
      Ok(event) => HttpResponse::Ok().json(event),
      Err(err) => HttpResponse::from_error(err)
   }
}

#[post("/admins/{uuid:[0-9a-f]+}/events")]
pub async fn create(
   admin_id: web::Path<String>,
   new_event_dto: web::Json<NewEventDto>,
   state: web::Data<AppState>
) -> impl Responder {
   let res = service::event::create(
      &admin_id.into_inner(),
      new_event_dto.into_inner(),
      state.get_ref()
   ).await;
   match res {
      Ok(event) => HttpResponse::Created().json(event),
      Err(err) => HttpResponse::from_error(err)
   }
}

#[put("/events/{uuid:[0-9a-f]+}")]
pub async fn update(
   id: web::Path<String>,
   update_event_dto: web::Json<UpdateEventDto>,
   state: web::Data<AppState>
) -> impl Responder {
   let res = service::event::update(
      &id.into_inner(),
      update_event_dto.into_inner(),
      state.get_ref()
   ).await;
   match res {
      Ok(event) => HttpResponse::Ok().json(event),
      Err(err) => HttpResponse::from_error(err)
   }
}

#[delete("/events/{uuid:[0-9a-f]+}")]
pub async fn remove(id: web::Path<String>, state: web::Data<AppState>) -> impl Responder {
   match service::event::delete(&id.into_inner(), state.get_ref()).await {
      Ok(_) => HttpResponse::Ok().json(json!({ "result": "success" })),
      Err(err) => HttpResponse::from_error(err)
   }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
   cfg.service(get_all)
      .service(get_by_id)
      .service(create)
      .service(update)
      .service(remove);
}
