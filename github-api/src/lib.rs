mod client;
mod error;
mod models;
mod search_url;

pub(crate) use search_url::*;

pub use client::*;
pub use error::*;
pub use models::*;
