//! HTTP clients for external services
//!
//! The only remote collaborator is the ITB SHACL validator.

pub mod itb;

pub use itb::{ItbClient, ItbClientBuilder, ItbClientConfig, DEFAULT_BASE_URL};
