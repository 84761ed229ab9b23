mod common;
pub use self::common::*;
mod error;
pub use self::error::{Error, Result};
pub mod corpus;
pub use self::corpus::Corpus;
pub mod crawl;
pub use self::crawl::crawl;

pub mod page_rank;
