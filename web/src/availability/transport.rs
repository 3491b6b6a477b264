use std::time::Duration;

use async_trait::async_trait;
use shared_types::{AvailabilityRequest, AvailabilityResponse};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Request(String),

    #[error("endpoint answered with status {0}")]
    Status(u16),

    #[error("response body is not valid availability JSON: {0}")]
    Decode(String),

    #[error("no response within {0:?}")]
    Timeout(Duration),

    #[error("no browser window to send from")]
    NoWindow,
}

/// Network boundary of the availability workflow.
#[async_trait(?Send)]
pub trait AvailabilityTransport {
    async fn check(
        &self,
        request: &AvailabilityRequest,
    ) -> Result<AvailabilityResponse, TransportError>;
}

/// Multipart POST from the browser, bounded by a timeout.
#[derive(Debug, Clone)]
#[cfg_attr(not(feature = "hydrate"), allow(dead_code))]
pub struct FetchTransport {
    endpoint: String,
    timeout: Duration,
}

impl FetchTransport {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout,
        }
    }
}

#[cfg(feature = "hydrate")]
impl FetchTransport {
    async fn send_with_deadline(
        &self,
        request: &AvailabilityRequest,
    ) -> Result<AvailabilityResponse, TransportError> {
        use futures::future::{select, Either};

        let sent = Box::pin(self.send(request));
        let deadline = Box::pin(crate::utils::timer::sleep(self.timeout));
        match select(sent, deadline).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => Err(TransportError::Timeout(self.timeout)),
        }
    }

    async fn send(
        &self,
        request: &AvailabilityRequest,
    ) -> Result<AvailabilityResponse, TransportError> {
        let origin = web_sys::window()
            .ok_or(TransportError::NoWindow)?
            .location()
            .origin()
            .map_err(|_| TransportError::NoWindow)?;

        let form = request
            .form_fields()
            .into_iter()
            .fold(reqwest::multipart::Form::new(), |form, (name, value)| {
                form.text(name, value.to_owned())
            });

        let response = reqwest::Client::new()
            .post(format!("{origin}{}", self.endpoint))
            .multipart(form)
            .send()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(TransportError::Status(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| TransportError::Request(e.to_string()))?;
        AvailabilityResponse::from_json(&body).map_err(|e| TransportError::Decode(e.to_string()))
    }
}

#[cfg(not(feature = "hydrate"))]
impl FetchTransport {
    async fn send_with_deadline(
        &self,
        _request: &AvailabilityRequest,
    ) -> Result<AvailabilityResponse, TransportError> {
        Err(TransportError::NoWindow)
    }
}

#[async_trait(?Send)]
impl AvailabilityTransport for FetchTransport {
    async fn check(
        &self,
        request: &AvailabilityRequest,
    ) -> Result<AvailabilityResponse, TransportError> {
        self.send_with_deadline(request).await
    }
}
