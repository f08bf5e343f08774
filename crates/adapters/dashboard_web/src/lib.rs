//! # adapter_dashboard_web
//!
//! Browser adapter for the service registry dashboard, compiled to
//! `wasm32-unknown-unknown`.
//!
//! ## Responsibilities
//! - Implement the HTTP port with `gloo-net` ([`api::GlooTransport`])
//! - Implement the page ports with `web-sys` ([`dom`])
//! - Read configuration from the host page ([`config`])
//! - Route `tracing` output to the browser console ([`logging`])
//! - Start both flows: render the service list on load, submit on click

use std::rc::Rc;

use svcboard_app::services::registry_client::RegistryClient;
use svcboard_app::services::service_form::ServiceFormSubmitter;
use svcboard_app::services::service_list::ServiceListLoader;
use svcboard_domain::error::{DomError, RegistryError};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::{Document, HtmlElement, Window};

pub mod api;
pub mod config;
pub mod dom;
pub mod logging;

use api::GlooTransport;
use config::DashboardConfig;
use dom::{DomServiceForm, DomServiceList, LocationNavigator};

/// Entry point: configure logging, render the service list and bind the form.
///
/// Each flow starts independently; a failure in one is logged and does not
/// prevent the other.
pub fn start() {
    let Some(window) = web_sys::window() else {
        return;
    };
    let Some(document) = window.document() else {
        return;
    };

    let (config, problems) = DashboardConfig::load(&document);
    logging::init(&config.logging.filter);
    for problem in &problems {
        tracing::warn!(error = %problem, "adjusted dashboard configuration");
    }

    if let Err(err) = load_service_list(&document, &config) {
        tracing::error!(error = %err, "service list unavailable");
    }
    if let Err(err) = bind_service_form(&window, &document, &config) {
        tracing::error!(error = %err, "service form unavailable");
    }
}

/// Fetch the services in the background and append them to the list.
fn load_service_list(document: &Document, config: &DashboardConfig) -> Result<(), RegistryError> {
    let view = DomServiceList::find(document, &config.selectors.list)?;
    let client = RegistryClient::new(GlooTransport, config.api.services_path.as_str());
    let loader = ServiceListLoader::new(client, view);

    spawn_local(async move {
        match loader.load().await {
            Ok(count) => tracing::info!(count, "service list loaded"),
            Err(err) => tracing::error!(error = %err, "failed to load service list"),
        }
    });
    Ok(())
}

/// Install the submit button's click handler.
///
/// Every click spawns its own submission; in-flight submissions are neither
/// de-duplicated nor cancelled.
fn bind_service_form(
    window: &Window,
    document: &Document,
    config: &DashboardConfig,
) -> Result<(), RegistryError> {
    let button = dom::query(document, &config.selectors.submit)?
        .dyn_into::<HtmlElement>()
        .map_err(|_| DomError::Js {
            message: format!("`{}` is not an HTML element", config.selectors.submit),
        })?;

    let submitter = Rc::new(ServiceFormSubmitter::new(
        RegistryClient::new(GlooTransport, config.api.services_path.as_str()),
        DomServiceForm::new(
            document,
            config.selectors.url_input.as_str(),
            config.selectors.name_input.as_str(),
        ),
        LocationNavigator::new(window.location()),
    ));

    let on_click = Closure::<dyn FnMut(web_sys::Event)>::new(move |_: web_sys::Event| {
        let submitter = Rc::clone(&submitter);
        spawn_local(async move {
            if let Err(err) = submitter.submit().await {
                tracing::error!(error = %err, "failed to submit service");
            }
        });
    });
    button.set_onclick(Some(on_click.as_ref().unchecked_ref()));
    // The handler lives as long as the page.
    on_click.forget();
    Ok(())
}
