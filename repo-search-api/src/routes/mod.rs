pub(crate) mod error;
pub(crate) mod repositories;

pub(crate) use error::ApiError;
