//! HTTP transport wrapping `gloo-net` for calls to the registry API.

use std::future::Future;

use gloo_net::http::{Method as GlooMethod, RequestBuilder};
use svcboard_app::ports::{HttpRequest, HttpResponse, HttpTransport, Method};
use svcboard_domain::error::ApiError;

/// Sends requests with the browser's `fetch`.
///
/// Any HTTP status is reported as a response. A failed fetch maps to
/// [`ApiError::Transport`], as does a broken body stream when the request
/// asked for the body.
#[derive(Debug, Clone, Copy, Default)]
pub struct GlooTransport;

fn transport_error(err: gloo_net::Error) -> ApiError {
    ApiError::Transport {
        message: err.to_string(),
    }
}

fn gloo_method(method: Method) -> GlooMethod {
    match method {
        Method::Get => GlooMethod::GET,
        Method::Post => GlooMethod::POST,
    }
}

async fn execute(request: HttpRequest) -> Result<HttpResponse, ApiError> {
    let mut builder = RequestBuilder::new(&request.path).method(gloo_method(request.method));
    for (name, value) in &request.headers {
        builder = builder.header(name, value);
    }
    let pending = match request.body {
        Some(body) => builder.body(body),
        None => builder.build(),
    }
    .map_err(transport_error)?;

    let response = pending.send().await.map_err(transport_error)?;
    let status = response.status();
    let body = if request.read_body {
        response.text().await.map_err(transport_error)?
    } else {
        String::new()
    };
    Ok(HttpResponse { status, body })
}

impl HttpTransport for GlooTransport {
    fn send(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, ApiError>> {
        tracing::debug!(method = request.method.as_str(), path = %request.path, "sending request");
        execute(request)
    }
}
