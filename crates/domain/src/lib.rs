//! # svcboard-domain
//!
//! Pure domain model for the svcboard service dashboard.
//!
//! ## Responsibilities
//! - Define the **Service** record as the registry API serves it
//!   (id, name, url, status, creation date)
//! - Define **`NewService`**, the partial record submitted to create a service
//! - Own the wire codec: decoding the service list, encoding submissions
//! - Own the list-line rendering shown in the dashboard
//! - Define the error taxonomy shared by the application and adapters
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or browser crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod service;
