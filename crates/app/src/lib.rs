//! # svcboard-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound ports):
//!   - `HttpTransport` — execute an HTTP request against the registry
//!   - `ServiceListView` — append rendered lines to the service list
//!   - `ServiceForm` — read the submission inputs
//!   - `PageNavigator` — reload the page
//! - Define the **use-cases** driven by browser events:
//!   - `ServiceListLoader` — fetch and render the service list (page load)
//!   - `ServiceFormSubmitter` — submit a new service and reload (click)
//! - Describe the registry's HTTP contract (`RegistryClient`) as plain data so
//!   it can be exercised without a browser
//!
//! ## Dependency rule
//! Depends on `svcboard-domain` only (plus `tracing`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.
//!
//! Port futures are not required to be `Send`: every adapter runs on the
//! browser's single UI thread.

pub mod ports;
pub mod services;
