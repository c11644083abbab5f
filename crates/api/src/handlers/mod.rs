//! HTTP handlers, one module per resource.

pub mod audit;
pub mod auth;
pub mod compliance;
pub mod data_request;
pub mod policy;
pub mod settings;
