//! Service list loader — renders the registry's services on page load.

use svcboard_domain::error::RegistryError;

use crate::ports::{HttpTransport, ServiceListView};
use crate::services::registry_client::RegistryClient;

/// Fetches the service collection once and appends one item per service.
pub struct ServiceListLoader<T, V> {
    client: RegistryClient<T>,
    view: V,
}

impl<T: HttpTransport, V: ServiceListView> ServiceListLoader<T, V> {
    pub fn new(client: RegistryClient<T>, view: V) -> Self {
        Self { client, view }
    }

    /// Fetch the services and append their list lines in response order.
    ///
    /// Existing items in the view are left in place. Nothing is appended when
    /// the fetch or decode fails. Returns the number of items appended.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::Api`] when the request fails or the body is
    /// not a service array, and [`RegistryError::Dom`] when an item cannot be
    /// appended.
    pub async fn load(&self) -> Result<usize, RegistryError> {
        let services = self.client.list_services().await?;
        for service in &services {
            self.view.append_item(&service.list_line())?;
        }
        tracing::debug!(count = services.len(), "rendered service list");
        Ok(services.len())
    }
}
