//! Service form submitter — posts a new service and reloads the page.

use svcboard_domain::error::RegistryError;
use svcboard_domain::service::NewService;

use crate::ports::{HttpTransport, PageNavigator, ServiceForm};
use crate::services::registry_client::RegistryClient;

/// Result of a submission whose request settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmitOutcome {
    /// HTTP status returned by the registry.
    pub status: u16,
}

impl SubmitOutcome {
    #[must_use]
    pub fn is_success(self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Submits the form contents on every invocation.
///
/// Invocations are independent: concurrent calls each send their own request
/// and each reload the page once their request settles.
pub struct ServiceFormSubmitter<T, F, N> {
    client: RegistryClient<T>,
    form: F,
    navigator: N,
}

impl<T, F, N> ServiceFormSubmitter<T, F, N>
where
    T: HttpTransport,
    F: ServiceForm,
    N: PageNavigator,
{
    pub fn new(client: RegistryClient<T>, form: F, navigator: N) -> Self {
        Self {
            client,
            form,
            navigator,
        }
    }

    /// Read the inputs, post them, and reload once any response arrives.
    ///
    /// The inputs are sent as-is, without validation. The reload happens
    /// whatever the response status is.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Dom`] if an input cannot be read or the reload
    /// is refused, and [`RegistryError::Api`] if no response is received. The
    /// page is not reloaded in the latter case.
    pub async fn submit(&self) -> Result<SubmitOutcome, RegistryError> {
        let service = NewService::new(self.form.url()?, self.form.name()?);
        let response = self.client.create_service(&service).await?;

        let outcome = SubmitOutcome {
            status: response.status,
        };
        if outcome.is_success() {
            tracing::info!(status = outcome.status, url = %service.url, "service submitted");
        } else {
            tracing::warn!(
                status = outcome.status,
                url = %service.url,
                "registry rejected service submission"
            );
        }

        self.navigator.reload()?;
        Ok(outcome)
    }
}
