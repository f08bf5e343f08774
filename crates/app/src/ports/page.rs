//! Page ports — the DOM surfaces the dashboard reads from and writes to.
//!
//! These are synchronous: DOM access never suspends.

use std::rc::Rc;

use svcboard_domain::error::DomError;

/// The container that receives one item per service.
pub trait ServiceListView {
    /// Append an item with the given text after any existing items.
    ///
    /// # Errors
    ///
    /// Returns a [`DomError`] if the item cannot be created or inserted.
    fn append_item(&self, text: &str) -> Result<(), DomError>;
}

/// The submission form inputs.
pub trait ServiceForm {
    /// Current value of the url input.
    ///
    /// # Errors
    ///
    /// Returns a [`DomError`] if the input cannot be read.
    fn url(&self) -> Result<String, DomError>;

    /// Current value of the name input.
    ///
    /// # Errors
    ///
    /// Returns a [`DomError`] if the input cannot be read.
    fn name(&self) -> Result<String, DomError>;
}

/// Navigation of the current page.
pub trait PageNavigator {
    /// Reload the current page.
    ///
    /// # Errors
    ///
    /// Returns a [`DomError`] if the browser refuses the reload.
    fn reload(&self) -> Result<(), DomError>;
}

impl<T: ServiceListView> ServiceListView for Rc<T> {
    fn append_item(&self, text: &str) -> Result<(), DomError> {
        (**self).append_item(text)
    }
}

impl<T: PageNavigator> PageNavigator for Rc<T> {
    fn reload(&self) -> Result<(), DomError> {
        (**self).reload()
    }
}
