//! Assistant CRUD HTTP Service Library

pub mod config;
pub mod http;
pub mod store;

pub use config::schema::ServiceConfig;
pub use http::HttpServer;
pub use store::{Assistant, AssistantStore};
