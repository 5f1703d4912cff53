//! # glossa-sources
//!
//! Catalog sources (filesystem, HTTP, in-memory) and language-name
//! directories for glossa.

pub mod directory;
pub mod fs;
pub mod http;
pub mod memory;

pub use directory::{FsLanguageDirectory, HttpLanguageDirectory, StaticLanguageDirectory};
pub use fs::FsCatalogSource;
pub use http::HttpCatalogSource;
pub use memory::MemoryCatalogSource;
