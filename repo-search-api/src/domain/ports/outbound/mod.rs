#[cfg(test)]
pub mod mock;
mod repository_provider;

pub use repository_provider::*;
