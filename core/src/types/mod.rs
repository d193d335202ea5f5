//! Data types module - activity inputs and HTTP payloads shared with the API

mod activity;
pub mod api;

pub use activity::{ActivityCounts, StudentActivity};
pub use api::*;
