//! Lucent query vocabulary.
//!
//! This crate defines the types a caller uses to describe a search query and
//! the compiler that turns them into wire parameters for a Lucene/Solr-style
//! `select` endpoint.
//!
//! # Modules
//!
//! - [`value`] - Field values and query-term escaping
//! - [`sort`] - Sort directions and the random-ordering marker
//! - [`options`] - Paging, sorting, field selection and extra parameters
//! - [`params`] - Wire parameter map and the parameter compiler
//! - [`document`] - Unique-key declaration for result documents
//! - [`result`] - Result sets produced by a fetch
//! - [`error`] - Configuration and schema errors
//!
//! ```
//! use lucent_proto::{compile, QueryOptions, SortOrder};
//!
//! let options = QueryOptions::builder()
//!     .order_by(SortOrder::asc("id"))
//!     .order_by(SortOrder::desc("name"))
//!     .build()
//!     .unwrap();
//! let params = compile("id:123456", &options, None).unwrap();
//! assert_eq!(params.get("sort"), Some("id asc,name desc"));
//! ```

pub mod document;
pub mod error;
pub mod options;
pub mod params;
pub mod result;
pub mod sort;
pub mod value;

pub use error::Error;

// Re-export commonly used types at crate root
pub use document::{unique_key_field, unique_key_value, Document, FieldSchema};
pub use options::{QueryOptions, QueryOptionsBuilder};
pub use params::{compile, QueryParams, UNLIMITED_ROWS};
pub use result::ResultSet;
pub use sort::{Order, SortOrder};
pub use value::Value;
