pub mod age;
pub mod client;
pub mod config;
pub mod error;
pub mod icons;
pub mod poll;
pub mod sites;
pub mod state;
pub mod view;

pub use error::{DashboardError, Result};
