//! Sort specifications.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    /// Ascending order.
    #[default]
    Asc,
    /// Descending order.
    Desc,
}

impl Order {
    /// Wire keyword for this direction.
    pub fn as_str(&self) -> &'static str {
        match self {
            Order::Asc => "asc",
            Order::Desc => "desc",
        }
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Order {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("asc") {
            Ok(Order::Asc)
        } else if s.eq_ignore_ascii_case("desc") {
            Ok(Order::Desc)
        } else {
            Err(Error::Configuration(format!("unknown sort direction '{}'", s)))
        }
    }
}

/// One entry of an `order_by` list.
///
/// Serializes as its wire token, e.g. `"name desc"` or `"random"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum SortOrder {
    /// Sort by a field in the given direction.
    Field { field: String, order: Order },
    /// No deterministic sort; results are shuffled client side.
    Random,
}

impl SortOrder {
    /// Sort by `field` in the given direction.
    pub fn new(field: impl Into<String>, order: Order) -> Self {
        SortOrder::Field {
            field: field.into(),
            order,
        }
    }

    /// Sort by `field` in the default (ascending) direction.
    pub fn by(field: impl Into<String>) -> Self {
        Self::new(field, Order::default())
    }

    /// Create an ascending sort.
    pub fn asc(field: impl Into<String>) -> Self {
        Self::new(field, Order::Asc)
    }

    /// Create a descending sort.
    pub fn desc(field: impl Into<String>) -> Self {
        Self::new(field, Order::Desc)
    }

    /// Check if this is the random-ordering marker.
    pub fn is_random(&self) -> bool {
        matches!(self, SortOrder::Random)
    }

    /// Field name, or `None` for the random marker.
    pub fn field(&self) -> Option<&str> {
        match self {
            SortOrder::Field { field, .. } => Some(field),
            SortOrder::Random => None,
        }
    }

    /// Direction, or `None` for the random marker.
    pub fn order(&self) -> Option<Order> {
        match self {
            SortOrder::Field { order, .. } => Some(*order),
            SortOrder::Random => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SortOrder::Field { field, order } => write!(f, "{} {}", field, order),
            SortOrder::Random => f.write_str("random"),
        }
    }
}

impl FromStr for SortOrder {
    type Err = Error;

    /// Parse `"field"`, `"field asc"`, `"field DESC"` or `"random"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let field = parts
            .next()
            .ok_or_else(|| Error::Configuration("empty sort specification".to_string()))?;
        let order = match parts.next() {
            Some(direction) => direction.parse()?,
            None if field.eq_ignore_ascii_case("random") => return Ok(SortOrder::Random),
            None => Order::default(),
        };
        if let Some(extra) = parts.next() {
            return Err(Error::Configuration(format!(
                "unexpected token '{}' in sort specification '{}'",
                extra, s
            )));
        }
        Ok(SortOrder::new(field, order))
    }
}

impl TryFrom<String> for SortOrder {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<SortOrder> for String {
    fn from(order: SortOrder) -> Self {
        order.to_string()
    }
}
