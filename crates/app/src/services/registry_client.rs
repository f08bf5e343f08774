//! Registry client — the HTTP contract of the service registry API.

use svcboard_domain::error::ApiError;
use svcboard_domain::service::{NewService, Service, decode_service_list};

use crate::ports::{HttpRequest, HttpResponse, HttpTransport, Method};

/// Path of the service collection on the registry.
pub const DEFAULT_SERVICES_PATH: &str = "/api/v1/services";

const ACCEPT: (&str, &str) = ("Accept", "application/json, text/plain, */*");
const CONTENT_TYPE_JSON: (&str, &str) = ("Content-Type", "application/json");

/// Typed access to the registry's service collection.
pub struct RegistryClient<T> {
    transport: T,
    services_path: String,
}

impl<T: HttpTransport> RegistryClient<T> {
    /// Create a client sending requests for `services_path` through `transport`.
    pub fn new(transport: T, services_path: impl Into<String>) -> Self {
        Self {
            transport,
            services_path: services_path.into(),
        }
    }

    /// `GET {services_path}` with no extra headers.
    #[must_use]
    pub fn list_request(&self) -> HttpRequest {
        HttpRequest {
            method: Method::Get,
            path: self.services_path.clone(),
            headers: Vec::new(),
            body: None,
            read_body: true,
        }
    }

    /// `POST {services_path}` with a JSON `{url, name}` body. The response
    /// body is not read.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if the body cannot be serialized.
    pub fn create_request(&self, service: &NewService) -> Result<HttpRequest, ApiError> {
        Ok(HttpRequest {
            method: Method::Post,
            path: self.services_path.clone(),
            headers: vec![ACCEPT, CONTENT_TYPE_JSON],
            body: Some(service.to_json()?),
            read_body: false,
        })
    }

    /// Fetch every service, in the order the registry returns them.
    ///
    /// The status code is not checked: whatever body comes back must decode
    /// as an array. Elements that are not readable services are logged and
    /// skipped.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Transport`] when no response is received and
    /// [`ApiError::Decode`] when the body is not a service array.
    pub async fn list_services(&self) -> Result<Vec<Service>, ApiError> {
        let response = self.transport.send(self.list_request()).await?;
        tracing::debug!(status = response.status, "received service list response");
        let decoded = decode_service_list(&response.body)?;
        for rejected in &decoded.rejected {
            tracing::warn!(
                index = rejected.index,
                reason = %rejected.reason,
                "skipping unreadable service record"
            );
        }
        Ok(decoded.services)
    }

    /// Submit a new service. Any HTTP status counts as settled; the body is
    /// not inspected.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Encode`] if the body cannot be serialized, or
    /// [`ApiError::Transport`] when no response is received.
    pub async fn create_service(&self, service: &NewService) -> Result<HttpResponse, ApiError> {
        let request = self.create_request(service)?;
        self.transport.send(request).await
    }
}
