//! Query execution against a search server.
//!
//! A plain query is one round trip: compile parameters, `GET` the select
//! endpoint, parse the body. Random ordering takes two, because the index
//! cannot shuffle by itself:
//!
//! 1. fetch only the unique key of every matching document,
//! 2. shuffle the keys client side and keep the requested page,
//! 3. fetch the full documents with an `OR` of key clauses.
//!
//! The engine is free to return the second fetch in its own order, so the
//! final order is not guaranteed to match the shuffle unless the parser
//! re-sorts by key.

use std::collections::HashSet;

use lucent_proto::{
    compile, unique_key_field, unique_key_value, Document, QueryOptions, ResultSet, Value,
    UNLIMITED_ROWS,
};
use tracing::{debug, instrument};

use crate::connection::Connection;
use crate::error::Error;
use crate::parser::ResultParser;
use crate::randomizer::{ListRandomizer, ShuffleRandomizer};

/// Path of the select endpoint, relative to the connection's base URL.
pub const SELECT_PATH: &str = "/select";

/// Executes queries for documents of type `T`.
///
/// Collaborators are fixed at construction; the query and its options are
/// passed to each [`execute`](Self::execute) call, so one executer can serve
/// any number of independent queries.
///
/// # Example
///
/// ```ignore
/// use lucent_client::{ClientConfig, HttpConnection, QueryExecuter};
/// use lucent_proto::{QueryOptions, SortOrder};
///
/// let connection = HttpConnection::new(ClientConfig::new("http://localhost:8983/solr/books"))?;
/// let parser = BookParser::default();
/// let executer = QueryExecuter::<Book>::new(&connection, &parser);
///
/// let options = QueryOptions::builder()
///     .order_by(SortOrder::desc("published"))
///     .rows(20)
///     .build()?;
/// let books = executer.execute("author:herbert", &options)?;
/// ```
pub struct QueryExecuter<'a, T> {
    connection: &'a dyn Connection,
    parser: &'a dyn ResultParser<T>,
    randomizer: Box<dyn ListRandomizer + 'a>,
    path: String,
}

impl<'a, T: Document> QueryExecuter<'a, T> {
    /// Create an executer using the default shuffle.
    pub fn new(connection: &'a dyn Connection, parser: &'a dyn ResultParser<T>) -> Self {
        Self {
            connection,
            parser,
            randomizer: Box::new(ShuffleRandomizer),
            path: SELECT_PATH.to_string(),
        }
    }

    /// Replace the randomizer used for random ordering.
    pub fn with_randomizer(mut self, randomizer: impl ListRandomizer + 'a) -> Self {
        self.randomizer = Box::new(randomizer);
        self
    }

    /// Send requests to `path` instead of [`SELECT_PATH`].
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Endpoint path requests are sent to.
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Run `query` with `options` and return the parsed documents.
    ///
    /// Transport and parse errors are returned as-is; nothing is retried.
    /// With random ordering, a document type without exactly one unique key
    /// fails before any request is sent.
    #[instrument(level = "debug", skip(self, options), fields(random = options.is_random()))]
    pub fn execute(&self, query: &str, options: &QueryOptions) -> Result<ResultSet<T>, Error> {
        if options.is_random() {
            self.execute_random(query, options)
        } else {
            self.fetch(query, options, None)
        }
    }

    fn execute_random(&self, query: &str, options: &QueryOptions) -> Result<ResultSet<T>, Error> {
        let key = unique_key_field::<T>()?;

        let candidates = self.fetch(query, options, Some(key))?;
        let mut ids = unique_ids(&candidates)?;
        let candidate_count = ids.len();

        self.randomizer.randomize(&mut ids);
        let ids = select_page(ids, options.start(), options.rows());
        debug!(
            candidates = candidate_count,
            selected = ids.len(),
            "Shuffled candidate keys"
        );

        if ids.is_empty() {
            return Ok(ResultSet::empty());
        }

        let id_query = key_disjunction(key, &ids);
        let count = u32::try_from(ids.len()).unwrap_or(UNLIMITED_ROWS);
        self.fetch(&id_query, &options.for_id_lookup(count), Some(key))
    }

    fn fetch(
        &self,
        query: &str,
        options: &QueryOptions,
        unique_key: Option<&str>,
    ) -> Result<ResultSet<T>, Error> {
        let params = compile(query, options, unique_key)?;
        debug!(path = %self.path, params = params.len(), "Fetching documents");

        let raw = self.connection.get(&self.path, &params)?;
        let results = self.parser.parse(&raw)?;

        debug!(docs = results.len(), num_found = results.num_found(), "Parsed response");
        Ok(results)
    }
}

/// Unique-key values of `docs` in order, keeping the first of any duplicates.
fn unique_ids<T: Document>(docs: &ResultSet<T>) -> Result<Vec<Value>, Error> {
    let mut seen = HashSet::new();
    let mut ids = Vec::with_capacity(docs.len());
    for doc in docs {
        let id = unique_key_value(doc)?;
        if seen.insert(id.to_query_term()) {
            ids.push(id);
        }
    }
    Ok(ids)
}

/// Skip `start` leading ids, then keep at most `rows`.
fn select_page(ids: Vec<Value>, start: Option<u32>, rows: Option<u32>) -> Vec<Value> {
    let skip = start.map_or(0, |s| s as usize);
    let take = rows.map_or(usize::MAX, |r| r as usize);
    ids.into_iter().skip(skip).take(take).collect()
}

/// Build `(key:v1 OR key:v2 OR ...)` over `ids` in order.
fn key_disjunction(key: &str, ids: &[Value]) -> String {
    let clauses = ids
        .iter()
        .map(|id| format!("{}:{}", key, id.to_query_term()))
        .collect::<Vec<_>>()
        .join(" OR ");
    format!("({})", clauses)
}
