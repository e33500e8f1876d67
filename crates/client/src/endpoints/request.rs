//! Request execution shared by every endpoint.
//!
//! Sends a prepared `reqwest::RequestBuilder`, records metrics, and maps
//! non-success statuses into `ClientError`. There is no retry: callers
//! that poll simply try again on their next tick.

use std::time::Instant;

use reqwest::{RequestBuilder, Response};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::{ClientError, Result};
use crate::metrics::MetricsCollector;
use crate::models::{ApiResponse, ErrorBody};

/// Sends a request and returns the response if its status is 2xx.
///
/// `endpoint` is the route template (e.g. `/monitors/:id`) used as a
/// low-cardinality metrics label.
///
/// # Errors
///
/// - `ClientError::Unauthorized` for 401.
/// - `ClientError::ApiError` for any other non-2xx, carrying the engine's
///   `message` or `error` text when the body has one.
/// - `ClientError::HttpError` for transport failures.
pub async fn send_request(
    builder: RequestBuilder,
    endpoint: &str,
    method: &str,
    metrics: Option<&MetricsCollector>,
) -> Result<Response> {
    if let Some(m) = metrics {
        m.record_request(endpoint, method);
    }

    let started = Instant::now();
    let result = builder.send().await;
    let elapsed = started.elapsed();

    let response = match result {
        Ok(response) => response,
        Err(e) => {
            let err = ClientError::from(e);
            if let Some(m) = metrics {
                m.record_request_duration(endpoint, method, elapsed, None);
                m.record_client_error(endpoint, method, &err);
            }
            return Err(err);
        }
    };

    let status = response.status().as_u16();
    if let Some(m) = metrics {
        m.record_request_duration(endpoint, method, elapsed, Some(status));
    }

    if response.status().is_success() {
        return Ok(response);
    }

    let url = response.url().to_string();
    let body = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&body)
        .ok()
        .and_then(ErrorBody::into_text)
        .unwrap_or(body);

    debug!(status, url = %url, "Request failed");

    let err = if status == 401 {
        ClientError::Unauthorized(message)
    } else {
        ClientError::ApiError {
            status,
            url,
            message,
        }
    };

    if let Some(m) = metrics {
        m.record_client_error(endpoint, method, &err);
    }
    Err(err)
}

/// Reads the body as an envelope.
pub(crate) async fn read_envelope<T: DeserializeOwned>(response: Response) -> Result<ApiResponse<T>> {
    let bytes = response.bytes().await?;
    serde_json::from_slice(&bytes).map_err(|e| ClientError::InvalidResponse(e.to_string()))
}

/// Reads the envelope and requires a `data` payload.
pub(crate) async fn read_data<T: DeserializeOwned>(response: Response) -> Result<T> {
    read_envelope(response)
        .await?
        .data
        .ok_or_else(|| ClientError::InvalidResponse("missing data in response".to_string()))
}

/// Reads the envelope, treating `data: null` as an empty list.
pub(crate) async fn read_list<T: DeserializeOwned>(response: Response) -> Result<Vec<T>> {
    Ok(read_envelope(response).await?.data.unwrap_or_default())
}

/// Reads the optional confirmation message.
pub(crate) async fn read_message(response: Response) -> Result<Option<String>> {
    Ok(read_envelope::<serde_json::Value>(response).await?.message)
}
