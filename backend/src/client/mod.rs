//! Headless model of the browser insights page.
//!
//! The interactive page served at `/` implements this behaviour in script;
//! this module keeps the same state machine in Rust so the list behaviour
//! and the add-insight dialog flow stay covered by the test suite.

pub mod app;
pub mod brands;
pub mod dialog;
pub mod gateway;

pub use app::InsightsApp;
pub use brands::{BRANDS, Brand};
pub use dialog::{AddInsightDialog, DialogState};
pub use gateway::{GatewayError, HttpInsightsGateway, InsightsGateway};
