use actix_web::{HttpResponse, delete, get, post, web};
use payloads::{VenueId, requests};
use sqlx::PgPool;

use crate::store;
use crate::time::TimeSource;

use super::APIError;

#[tracing::instrument(skip(pool), ret)]
#[get("/venues")]
pub async fn list_venues(
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    let venues = store::list_venues(&pool).await?;
    Ok(HttpResponse::Ok().json(venues))
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[post("/venues")]
pub async fn create_venue(
    details: web::Json<requests::CreateVenue>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let venue = store::create_venue(&details, &pool, &time_source).await?;
    Ok(HttpResponse::Ok().json(venue))
}

#[tracing::instrument(skip(pool), ret)]
#[delete("/venues/{venue_id}")]
pub async fn delete_venue(
    path: web::Path<VenueId>,
    pool: web::Data<PgPool>,
) -> Result<HttpResponse, APIError> {
    store::delete_venue(&path.into_inner(), &pool).await?;
    Ok(HttpResponse::Ok().finish())
}

#[tracing::instrument(skip(pool, time_source), ret)]
#[get("/venues/{venue_id}/availability")]
pub async fn get_availability(
    path: web::Path<VenueId>,
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let availability =
        store::get_availability(&path.into_inner(), &pool, &time_source)
            .await?;
    Ok(HttpResponse::Ok().json(availability))
}
