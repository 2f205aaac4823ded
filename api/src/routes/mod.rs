pub mod analytics;
pub mod booking;
pub mod venue;

use actix_web::{
    HttpResponse, ResponseError, body::BoxBody, get, http::StatusCode, web,
};
use payloads::responses::{ErrorDetail, Health};

use crate::store::StoreError;
use crate::telemetry::log_error;
use crate::time::TimeSource;

/// Register every API route at the root of the app. Routes are added one by
/// one rather than through a scope so unmatched paths can still fall through
/// to the static dashboard.
pub fn api_services(cfg: &mut web::ServiceConfig) {
    cfg.service(health_check)
        .service(venue::list_venues)
        .service(venue::create_venue)
        .service(venue::delete_venue)
        .service(venue::get_availability)
        .service(booking::create_booking)
        .service(booking::list_bookings)
        .service(booking::block_date)
        .service(analytics::dashboard_summary);
}

#[get("/health")]
pub async fn health_check(time_source: web::Data<TimeSource>) -> HttpResponse {
    HttpResponse::Ok().json(Health {
        status: "healthy".into(),
        timestamp: time_source.now(),
    })
}

/// Malformed JSON bodies become a 400 with the parser's message.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        APIError::BadRequest(anyhow::anyhow!("{err}")).into()
    })
}

/// Path segments that fail to parse become a 400 as well.
pub fn path_config() -> web::PathConfig {
    web::PathConfig::default().error_handler(|err, _req| {
        APIError::BadRequest(anyhow::anyhow!("{err}")).into()
    })
}

#[derive(Debug, thiserror::Error)]
pub enum APIError {
    #[error("Bad request")]
    BadRequest(#[source] anyhow::Error),
    #[error("Not found")]
    NotFound(#[source] anyhow::Error),
    #[error("Something went wrong")]
    UnexpectedError(#[from] anyhow::Error),
}

impl APIError {
    /// What the client sees in the `detail` field.
    fn detail(&self) -> String {
        match self {
            Self::BadRequest(e) | Self::NotFound(e) => e.to_string(),
            Self::UnexpectedError(_) => self.to_string(),
        }
    }
}

impl ResponseError for APIError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::UnexpectedError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse<BoxBody> {
        HttpResponse::build(self.status_code()).json(ErrorDetail {
            detail: self.detail(),
        })
    }
}

impl From<StoreError> for APIError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::Database(_) | StoreError::UnexpectedError(_) => {
                let e = anyhow::Error::from(e);
                log_error(&e);
                APIError::UnexpectedError(e)
            }
            StoreError::VenueNotFound => APIError::NotFound(e.into()),
            _ => APIError::BadRequest(e.into()),
        }
    }
}
