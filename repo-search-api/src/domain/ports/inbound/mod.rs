mod repository_search;

pub use repository_search::*;
