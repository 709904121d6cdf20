//! HTTP inbound adapter exposing REST endpoints.

pub mod error;
pub mod health;
pub mod insights;
pub mod schemas;
pub mod state;
pub mod ui;

pub use error::ApiResult;
