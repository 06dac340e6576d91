use actix_web::{error::InternalError, web, HttpResponse};
use serde::Deserialize;
use serde_json::json;

use crate::{error::ApiError, service, state::AppState};

#[derive(Deserialize)]
struct SlotFilter {
    coach_id: Option<i64>,
    date: Option<String>,
}

#[derive(Deserialize)]
struct DateFilter {
    coach_id: Option<i64>,
}

#[derive(Deserialize)]
struct BookingPayload {
    slot_id: Option<i64>,
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
}

#[derive(Deserialize)]
struct BookingFilter {
    #[serde(default)]
    email: String,
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .app_data(web::JsonConfig::default().error_handler(|err, _req| {
                InternalError::from_response(
                    err,
                    HttpResponse::BadRequest().json(json!({ "error": "JSON body required" })),
                )
                .into()
            }))
            .service(web::resource("/coaches").route(web::get().to(list_coaches)))
            .service(web::resource("/slots").route(web::get().to(list_slots)))
            .service(web::resource("/dates").route(web::get().to(list_dates)))
            .service(web::resource("/book").route(web::post().to(book_slot)))
            .service(web::resource("/bookings").route(web::get().to(list_bookings)))
            .service(web::resource("/bookings/{id}").route(web::delete().to(cancel_booking))),
    );
}

async fn list_coaches(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let coaches = service::list_coaches(&state.db).await?;
    Ok(HttpResponse::Ok().json(coaches))
}

async fn list_slots(
    state: web::Data<AppState>,
    query: web::Query<SlotFilter>,
) -> Result<HttpResponse, ApiError> {
    let slots =
        service::list_available_slots(&state.db, query.coach_id, query.date.as_deref()).await?;
    Ok(HttpResponse::Ok().json(slots))
}

async fn list_dates(
    state: web::Data<AppState>,
    query: web::Query<DateFilter>,
) -> Result<HttpResponse, ApiError> {
    let dates = service::list_available_dates(&state.db, query.coach_id).await?;
    Ok(HttpResponse::Ok().json(dates))
}

async fn book_slot(
    state: web::Data<AppState>,
    payload: web::Json<BookingPayload>,
) -> Result<HttpResponse, ApiError> {
    let payload = payload.into_inner();
    let booking =
        service::book_slot(&state.db, payload.slot_id, &payload.name, &payload.email).await?;
    Ok(HttpResponse::Created().json(booking))
}

async fn list_bookings(
    state: web::Data<AppState>,
    query: web::Query<BookingFilter>,
) -> Result<HttpResponse, ApiError> {
    let bookings = service::list_bookings_by_email(&state.db, &query.email).await?;
    Ok(HttpResponse::Ok().json(bookings))
}

async fn cancel_booking(
    state: web::Data<AppState>,
    path: web::Path<i64>,
) -> Result<HttpResponse, ApiError> {
    service::cancel_booking(&state.db, path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(json!({ "message": "Booking cancelled successfully" })))
}
