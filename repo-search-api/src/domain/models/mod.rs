mod criteria;
mod repository;
mod sort;

pub use criteria::*;
pub use repository::*;
pub use sort::*;
