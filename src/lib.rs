pub mod admin;
pub mod auth;
pub mod error;
pub mod fixtures;
pub mod models;
pub mod routes;
pub mod schema;
pub mod service;
pub mod state;
pub mod store;
