pub mod chart;
pub mod collector;
pub mod config;
pub mod error;
pub mod inference;
pub mod models;
pub mod presenter;
pub mod routes;

pub use error::{BurnoutError, Result};
