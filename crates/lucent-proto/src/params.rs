//! Query parameter compilation.
//!
//! Translates a query string and [`QueryOptions`] into the flat parameter map
//! sent as the query string of a `GET` request. Compilation is pure: the same
//! inputs always produce the same map.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::Error;
use crate::options::QueryOptions;

/// Wire key for the query string.
pub const QUERY: &str = "q";
/// Wire key for the page size.
pub const ROWS: &str = "rows";
/// Wire key for the page offset.
pub const START: &str = "start";
/// Wire key for the sort specification.
pub const SORT: &str = "sort";
/// Wire key for the field list.
pub const FIELDS: &str = "fl";

/// `rows` value meaning "no effective limit".
///
/// The engine parses `rows` as a signed 32-bit integer, so this is the
/// largest value it accepts.
pub const UNLIMITED_ROWS: u32 = i32::MAX as u32;

/// Flat map of wire parameter names to values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct QueryParams(BTreeMap<String, String>);

impl QueryParams {
    /// Create an empty parameter map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Value for `key`, if present.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    /// Check if `key` is present.
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.contains_key(key)
    }

    /// Set `key`, replacing any previous value.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.0.insert(key.into(), value.into());
    }

    /// Remove `key`, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<String> {
        self.0.remove(key)
    }

    /// Number of parameters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterate over `(key, value)` pairs in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Borrow the underlying map.
    pub fn as_map(&self) -> &BTreeMap<String, String> {
        &self.0
    }

    /// Take the underlying map.
    pub fn into_map(self) -> BTreeMap<String, String> {
        self.0
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

impl<K: Into<String>, V: Into<String>, const N: usize> From<[(K, V); N]> for QueryParams {
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

/// Compile `query` and `options` into wire parameters.
///
/// `unique_key` names the document's unique-key field. It is only consulted
/// when random ordering is requested, in which case the field list is forced
/// to that field alone; a missing key is then a [`Error::Schema`].
///
/// `rows` defaults to [`UNLIMITED_ROWS`] when the caller did not set it but a
/// sort, random ordering or a field selection is requested. With random
/// ordering it is always [`UNLIMITED_ROWS`]: the first phase needs every
/// candidate ID, and the caller's `rows` and `start` are applied after the
/// shuffle. Extra parameters are merged last and win over computed keys,
/// except with random ordering: there `rows` and `fl` stay forced, and `sort`
/// and `start` are dropped even when passed as extra parameters.
pub fn compile(
    query: &str,
    options: &QueryOptions,
    unique_key: Option<&str>,
) -> Result<QueryParams, Error> {
    let mut params = QueryParams::new();
    params.insert(QUERY, query);

    if options.is_random() {
        let key = unique_key.ok_or_else(|| {
            Error::Schema("random ordering requires a unique key field".to_string())
        })?;
        merge_extra_params(&mut params, options);
        params.remove(SORT);
        params.remove(START);
        params.insert(ROWS, UNLIMITED_ROWS.to_string());
        params.insert(FIELDS, key);
        return Ok(params);
    }

    let wants_all_rows = !options.order_by().is_empty() || !options.fields().is_empty();
    match options.rows() {
        Some(rows) => params.insert(ROWS, rows.to_string()),
        None if wants_all_rows => params.insert(ROWS, UNLIMITED_ROWS.to_string()),
        None => {}
    }

    if let Some(start) = options.start() {
        params.insert(START, start.to_string());
    }

    if !options.order_by().is_empty() {
        let sort = options
            .order_by()
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");
        params.insert(SORT, sort);
    }

    if !options.fields().is_empty() {
        params.insert(FIELDS, options.fields().join(","));
    }

    merge_extra_params(&mut params, options);
    Ok(params)
}

fn merge_extra_params(params: &mut QueryParams, options: &QueryOptions) {
    for (name, value) in options.extra_params() {
        params.insert(name.as_str(), value.as_str());
    }
}
