//! Application services — use-case implementations.
//!
//! Each service struct accepts port trait implementations via generic parameters
//! (constructor injection), keeping this layer decoupled from concrete adapters.

pub mod registry_client;
pub mod service_form;
pub mod service_list;

#[cfg(test)]
pub(crate) mod testing;
