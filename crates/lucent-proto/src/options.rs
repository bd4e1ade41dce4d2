//! Query options: paging, sorting, field selection and extra parameters.

use std::collections::BTreeMap;

use crate::error::Error;
use crate::sort::SortOrder;

/// Options attached to a query.
///
/// Options are immutable once built; use [`QueryOptions::builder`] to create
/// them. The builder rejects inconsistent combinations so every value of this
/// type satisfies its invariants:
/// - a `Random` sort entry is the only entry in `order_by`,
/// - sort, field and extra-parameter names are non-empty.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    rows: Option<u32>,
    start: Option<u32>,
    order_by: Vec<SortOrder>,
    fields: Vec<String>,
    extra_params: BTreeMap<String, String>,
}

impl QueryOptions {
    /// Start building a set of options.
    pub fn builder() -> QueryOptionsBuilder {
        QueryOptionsBuilder::default()
    }

    /// Maximum number of documents to return.
    pub fn rows(&self) -> Option<u32> {
        self.rows
    }

    /// Offset of the first document to return.
    pub fn start(&self) -> Option<u32> {
        self.start
    }

    /// Sort specification, in priority order.
    pub fn order_by(&self) -> &[SortOrder] {
        &self.order_by
    }

    /// Selected fields; empty means all fields.
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// Caller-supplied wire parameters.
    pub fn extra_params(&self) -> &BTreeMap<String, String> {
        &self.extra_params
    }

    /// Check if random ordering was requested.
    pub fn is_random(&self) -> bool {
        matches!(self.order_by.as_slice(), [SortOrder::Random])
    }

    /// Options for fetching an explicit list of `count` documents by ID.
    ///
    /// Field selection and extra parameters are kept; sorting and paging are
    /// dropped and `rows` is set to `count` so no document is cut off by the
    /// engine's default page size.
    pub fn for_id_lookup(&self, count: u32) -> QueryOptions {
        QueryOptions {
            rows: Some(count),
            start: None,
            order_by: Vec::new(),
            fields: self.fields.clone(),
            extra_params: self.extra_params.clone(),
        }
    }
}

/// Builder for [`QueryOptions`].
#[derive(Debug, Clone, Default)]
pub struct QueryOptionsBuilder {
    options: QueryOptions,
}

impl QueryOptionsBuilder {
    /// Set the maximum number of documents to return.
    pub fn rows(mut self, rows: u32) -> Self {
        self.options.rows = Some(rows);
        self
    }

    /// Set the offset of the first document.
    pub fn start(mut self, start: u32) -> Self {
        self.options.start = Some(start);
        self
    }

    /// Add a sort entry.
    pub fn order_by(mut self, order: SortOrder) -> Self {
        self.options.order_by.push(order);
        self
    }

    /// Request random ordering instead of a deterministic sort.
    pub fn random(self) -> Self {
        self.order_by(SortOrder::Random)
    }

    /// Add a field to select.
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.options.fields.push(field.into());
        self
    }

    /// Add several fields to select.
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.fields.extend(fields.into_iter().map(Into::into));
        self
    }

    /// Add an extra wire parameter. Later values for the same key replace
    /// earlier ones.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.options.extra_params.insert(key.into(), value.into());
        self
    }

    /// Validate and produce the options.
    pub fn build(self) -> Result<QueryOptions, Error> {
        let options = self.options;

        let random_entries = options.order_by.iter().filter(|o| o.is_random()).count();
        if random_entries > 0 && options.order_by.len() > 1 {
            return Err(Error::Configuration(format!(
                "random ordering cannot be combined with other sort entries (got {})",
                options.order_by.len()
            )));
        }

        if options.order_by.iter().any(|o| o.field() == Some("")) {
            return Err(Error::Configuration(
                "sort entry has an empty field name".to_string(),
            ));
        }

        if options.fields.iter().any(|f| f.is_empty()) {
            return Err(Error::Configuration(
                "field list contains an empty name".to_string(),
            ));
        }

        if options.extra_params.keys().any(|k| k.is_empty()) {
            return Err(Error::Configuration(
                "extra parameter has an empty key".to_string(),
            ));
        }

        Ok(options)
    }
}
