mod error;
pub mod models;
mod popularity;
pub mod ports;
pub mod services;

pub use error::*;
pub use popularity::*;
