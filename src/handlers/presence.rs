use actix_web::{Responder, web, get, post, HttpResponse};

use crate::{
    dto::{ListQuery, ParticipationDto},
    service::{self, pagination},
    state::AppState,
};

#[post("/events/{event_uuid:[0-9a-f]+}/members/{member_uuid:[0-9a-f]+}")]
pub async fn participate(
    path: web::Path<(String, String)>,
    dto: web::Json<ParticipationDto>,
    state: web::Data<AppState>,
) -> impl Responder {
    let (event_id, member_id) = path.into_inner();
    match service::presence::participate(&event_id, &member_id, dto.into_inner(), state.get_ref()).await {
        Ok(presence) => HttpResponse::Created().json(presence),
        Err(err) => HttpResponse::from_error(err),
    }
}

#[get("/events/{event_uuid:[0-9a-f]+}/members/{member_uuid:[0-9a-f]+}")]
pub async fn get_answer(path: web::Path<(String, String)>, state: web::Data<AppState>) -> impl Responder {
    let (event_id, member_id) = path.into_inner();
    match service::presence::get(&event_id, &member_id, state.get_ref()).await {
        Ok(presence) => HttpResponse::Ok().json(presence),
        Err(err) => HttpResponse::from_error(err),
    }
}

#[get("/events/{uuid:[0-9a-f]+}/members")]
pub async fn list_for_event(
    event_id: web::Path<String>,
    query: web::Query<Vec<(String, String)>>,
    state: web::Data<AppState>,
) -> impl Responder {
    let (start, count) = ListQuery::from_pairs(query.into_inner()).bounds();
    let page = pagination::resolve(start, count);
    match service::presence::list_for_event(&event_id.into_inner(), page, state.get_ref()).await {
        Ok(presences) => HttpResponse::Ok().json(presences),
        Err(err) => HttpResponse::from_error(err),
    }
}

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(participate)
        .service(get_answer)
        .service(list_for_event);
}
