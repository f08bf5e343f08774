//! `web-sys` implementations of the page ports.

use svcboard_app::ports::{PageNavigator, ServiceForm, ServiceListView};
use svcboard_domain::error::DomError;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, Element, HtmlInputElement, Location};

/// Map a thrown JS value into a [`DomError`].
pub(crate) fn js_error(value: JsValue) -> DomError {
    DomError::Js {
        message: format!("{value:?}"),
    }
}

/// First element matching `selector`.
pub(crate) fn query(document: &Document, selector: &str) -> Result<Element, DomError> {
    document
        .query_selector(selector)
        .map_err(js_error)?
        .ok_or_else(|| DomError::MissingElement {
            selector: selector.to_string(),
        })
}

/// A list element that receives one `<li>` per service.
pub struct DomServiceList {
    document: Document,
    container: Element,
}

impl DomServiceList {
    /// Locate the container by selector.
    ///
    /// # Errors
    ///
    /// Returns [`DomError::MissingElement`] if nothing matches.
    pub fn find(document: &Document, selector: &str) -> Result<Self, DomError> {
        let container = query(document, selector)?;
        Ok(Self {
            document: document.clone(),
            container,
        })
    }
}

impl ServiceListView for DomServiceList {
    fn append_item(&self, text: &str) -> Result<(), DomError> {
        let item = self.document.create_element("li").map_err(js_error)?;
        item.set_text_content(Some(text));
        self.container.append_child(&item).map_err(js_error)?;
        Ok(())
    }
}

/// The url/name inputs, looked up each time they are read.
pub struct DomServiceForm {
    document: Document,
    url_selector: String,
    name_selector: String,
}

impl DomServiceForm {
    pub fn new(
        document: &Document,
        url_selector: impl Into<String>,
        name_selector: impl Into<String>,
    ) -> Self {
        Self {
            document: document.clone(),
            url_selector: url_selector.into(),
            name_selector: name_selector.into(),
        }
    }

    fn input_value(&self, selector: &str) -> Result<String, DomError> {
        let input = query(&self.document, selector)?
            .dyn_into::<HtmlInputElement>()
            .map_err(|_| DomError::Js {
                message: format!("`{selector}` is not an input element"),
            })?;
        Ok(input.value())
    }
}

impl ServiceForm for DomServiceForm {
    fn url(&self) -> Result<String, DomError> {
        self.input_value(&self.url_selector)
    }

    fn name(&self) -> Result<String, DomError> {
        self.input_value(&self.name_selector)
    }
}

/// Reloads through `window.location`.
pub struct LocationNavigator {
    location: Location,
}

impl LocationNavigator {
    pub fn new(location: Location) -> Self {
        Self { location }
    }
}

impl PageNavigator for LocationNavigator {
    fn reload(&self) -> Result<(), DomError> {
        self.location.reload().map_err(js_error)
    }
}
