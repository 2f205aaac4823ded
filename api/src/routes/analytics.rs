use actix_web::{HttpResponse, get, web};
use sqlx::PgPool;

use crate::store;
use crate::time::TimeSource;

use super::APIError;

#[tracing::instrument(skip(pool, time_source), ret)]
#[get("/analytics/dashboard")]
pub async fn dashboard_summary(
    pool: web::Data<PgPool>,
    time_source: web::Data<TimeSource>,
) -> Result<HttpResponse, APIError> {
    let summary = store::dashboard_summary(&pool, &time_source).await?;
    Ok(HttpResponse::Ok().json(summary))
}
