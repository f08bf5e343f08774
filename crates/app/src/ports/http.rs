//! HTTP port — executes requests against the registry API.

use std::future::Future;
use std::rc::Rc;

use svcboard_domain::error::ApiError;

/// HTTP methods used by the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
}

impl Method {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
        }
    }
}

/// A fully described outgoing request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: Method,
    pub path: String,
    pub headers: Vec<(&'static str, &'static str)>,
    pub body: Option<String>,
    /// Whether the caller needs the response body. When `false` the
    /// transport resolves as soon as the status is known.
    pub read_body: bool,
}

/// A settled response. `body` is empty when the request did not ask for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

/// Sends requests and resolves once a response has been received.
///
/// Any HTTP status resolves to `Ok`. Only transport failures (no response at
/// all) resolve to [`ApiError::Transport`].
pub trait HttpTransport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>>;
}

impl<T: HttpTransport> HttpTransport for Rc<T> {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> {
        (**self).send(request)
    }
}
