use actix_web::{HttpResponse, get, post, web};
use payloads::requests;
use sqlx::PgPool;

use crate::store;
use crate::time::TimeSource;

use super::APIError;

#[tracing::instrument(skip(pool, time_source), ret)]
#[post("/bookings")]
pub async fn create_booking(
    details: web::Json<requests::CreateBooking>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let booking =
        store::create_booking(&details, &pool, &time_source).await?;
    Ok(HttpResponse::Ok().json(booking))
}

#[tracing::instrument(skip(pool), ret)]
#[get("/bookings")]
pub async fn list_bookings(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let bookings = store::list_bookings(&pool).await?;
    Ok(HttpResponse::Ok().json(bookings))
}

/// Owner action: take a date off the calendar.
#[tracing::instrument(skip(pool, time_source), ret)]
#[post("/block-date")]
pub async fn block_date(
    details: web::Json<requests::BlockDate>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let message = store::block_date(&details, &pool, &time_source).await?;
    Ok(HttpResponse::Ok().json(message))
}
