use crate::{VenueId, requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/{path}", &self.address)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        self.inner_client
            .post(self.format_url(path))
            .json(body)
            .send()
            .await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        self.inner_client.get(self.format_url(path)).send().await
    }

    async fn empty_delete(&self, path: &str) -> ReqwestResult {
        self.inner_client.delete(self.format_url(path)).send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn health_check(
        &self,
    ) -> Result<responses::Health, ClientError> {
        let response = self.empty_get("health").await?;
        ok_body(response).await
    }

    pub async fn list_venues(
        &self,
    ) -> Result<Vec<responses::Venue>, ClientError> {
        let response = self.empty_get("venues").await?;
        ok_body(response).await
    }

    pub async fn create_venue(
        &self,
        details: &requests::CreateVenue,
    ) -> Result<responses::Venue, ClientError> {
        let response = self.post("venues", details).await?;
        ok_body(response).await
    }

    /// Delete a venue along with its bookings and blocked dates.
    pub async fn delete_venue(
        &self,
        venue_id: &VenueId,
    ) -> Result<(), ClientError> {
        let response =
            self.empty_delete(&format!("venues/{venue_id}")).await?;
        ok_empty(response).await
    }

    /// Booked and blocked dates for one venue.
    pub async fn get_availability(
        &self,
        venue_id: &VenueId,
    ) -> Result<responses::Availability, ClientError> {
        let response = self
            .empty_get(&format!("venues/{venue_id}/availability"))
            .await?;
        ok_body(response).await
    }

    pub async fn create_booking(
        &self,
        details: &requests::CreateBooking,
    ) -> Result<responses::Booking, ClientError> {
        let response = self.post("bookings", details).await?;
        ok_body(response).await
    }

    pub async fn list_bookings(
        &self,
    ) -> Result<Vec<responses::Booking>, ClientError> {
        let response = self.empty_get("bookings").await?;
        ok_body(response).await
    }

    pub async fn block_date(
        &self,
        details: &requests::BlockDate,
    ) -> Result<responses::SuccessMessage, ClientError> {
        let response = self.post("block-date", details).await?;
        ok_body(response).await
    }

    pub async fn dashboard_summary(
        &self,
    ) -> Result<responses::DashboardSummary, ClientError> {
        let response = self.empty_get("analytics/dashboard").await?;
        ok_body(response).await
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An API error with the `detail` from the error body, if it had one.
    #[error("{}", .1.as_deref().unwrap_or("Unexpected response from server"))]
    APIError(StatusCode, Option<String>),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

impl ClientError {
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::APIError(status, _) => Some(*status),
            Self::Network(e) => e.status(),
        }
    }

    /// The server-provided detail, if any.
    pub fn detail(&self) -> Option<&str> {
        match self {
            Self::APIError(_, detail) => detail.as_deref(),
            Self::Network(_) => None,
        }
    }

    /// The message to show the user: the server's detail verbatim, or the
    /// given fallback.
    pub fn detail_or(&self, fallback: &str) -> String {
        self.detail().unwrap_or(fallback).to_string()
    }
}

async fn api_error(response: reqwest::Response) -> ClientError {
    let status = response.status();
    let detail = response
        .json::<responses::ErrorDetail>()
        .await
        .ok()
        .map(|body| body.detail);
    ClientError::APIError(status, detail)
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(response.json::<T>().await?)
}

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(api_error(response).await);
    }
    Ok(())
}
