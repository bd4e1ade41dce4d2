//! Lucent Client - query execution against a Lucene/Solr-style search server.
//!
//! The executer compiles [`QueryOptions`](lucent_proto::QueryOptions) into
//! wire parameters, sends them through a [`Connection`] and hands the body to
//! a caller-supplied [`ResultParser`]. Random ordering is done client side
//! with a [`ListRandomizer`] and a second, key-filtered fetch.
//!
//! # Quick Start
//!
//! ```ignore
//! use lucent_client::{ClientConfig, HttpConnection, QueryExecuter, SeededRandomizer};
//! use lucent_proto::QueryOptions;
//!
//! let connection = HttpConnection::new(ClientConfig::localhost())?;
//! let parser = MyJsonParser::default();
//!
//! // Five random books, reproducible across runs.
//! let executer = QueryExecuter::<Book>::new(&connection, &parser)
//!     .with_randomizer(SeededRandomizer::new(7));
//! let options = QueryOptions::builder().random().rows(5).build()?;
//! let books = executer.execute("genre:scifi", &options)?;
//!
//! println!("Picked {} of {} books", books.len(), books.num_found());
//! ```

pub mod config;
pub mod connection;
pub mod error;
pub mod executer;
pub mod parser;
pub mod randomizer;

pub use config::ClientConfig;
pub use connection::{Connection, HttpConnection};
pub use error::Error;
pub use executer::{QueryExecuter, SELECT_PATH};
pub use parser::ResultParser;
pub use randomizer::{ListRandomizer, SeededRandomizer, ShuffleRandomizer};

/// Re-export protocol types.
pub use lucent_proto as proto;
