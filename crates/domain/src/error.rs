//! Common error types used across the workspace.
//!
//! Each boundary has its own typed error and converts into
//! [`RegistryError`] via `#[from]`.

/// Failure talking to the registry HTTP API.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (network failure, aborted fetch, …).
    #[error("request failed: {message}")]
    Transport { message: String },

    /// The response body was not a JSON array of services.
    #[error("invalid response body: {message}")]
    Decode { message: String },

    /// The request body could not be serialized.
    #[error("invalid request body: {message}")]
    Encode { message: String },
}

/// Failure interacting with the host page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DomError {
    /// No element matches a selector the dashboard requires.
    #[error("no element matches selector `{selector}`")]
    MissingElement { selector: String },

    /// A browser API call threw.
    #[error("browser call failed: {message}")]
    Js { message: String },
}

/// Top-level error for dashboard flows.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("registry api: {0}")]
    Api(#[from] ApiError),

    #[error("page: {0}")]
    Dom(#[from] DomError),
}
