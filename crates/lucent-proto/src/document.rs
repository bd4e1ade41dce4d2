//! Document schema introspection.
//!
//! Each result document type declares its fields, and which one is the unique
//! key, through the [`Document`] trait. The declaration is static, so the
//! executer can find the key field without a document instance and fail
//! before any request is sent.

use crate::error::Error;
use crate::value::Value;

/// Declaration of one document field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSchema {
    /// Field name as stored in the index.
    pub name: &'static str,
    /// Whether this field is the document's unique key.
    pub unique_key: bool,
}

impl FieldSchema {
    /// Declare a regular field.
    pub const fn new(name: &'static str) -> Self {
        Self {
            name,
            unique_key: false,
        }
    }

    /// Declare the unique-key field.
    pub const fn unique_key(name: &'static str) -> Self {
        Self {
            name,
            unique_key: true,
        }
    }
}

/// A typed result document.
///
/// ```ignore
/// struct Book { id: i32, title: String }
///
/// impl Document for Book {
///     const FIELDS: &'static [FieldSchema] =
///         &[FieldSchema::unique_key("id"), FieldSchema::new("title")];
///
///     fn field_value(&self, field: &str) -> Option<Value> {
///         match field {
///             "id" => Some(self.id.into()),
///             "title" => Some(self.title.as_str().into()),
///             _ => None,
///         }
///     }
/// }
/// ```
pub trait Document {
    /// Fields declared by this document type.
    const FIELDS: &'static [FieldSchema];

    /// Value of `field` on this instance, if the field is declared and set.
    fn field_value(&self, field: &str) -> Option<Value>;
}

/// Name of the single unique-key field declared by `T`.
pub fn unique_key_field<T: Document>() -> Result<&'static str, Error> {
    let mut keys = T::FIELDS.iter().filter(|f| f.unique_key);
    match (keys.next(), keys.next()) {
        (Some(field), None) => Ok(field.name),
        (None, _) => Err(Error::Schema(format!(
            "{} declares no unique key field",
            std::any::type_name::<T>()
        ))),
        (Some(_), Some(_)) => Err(Error::Schema(format!(
            "{} declares more than one unique key field",
            std::any::type_name::<T>()
        ))),
    }
}

/// Value of the unique key on `doc`.
pub fn unique_key_value<T: Document>(doc: &T) -> Result<Value, Error> {
    let field = unique_key_field::<T>()?;
    doc.field_value(field).ok_or_else(|| {
        Error::Schema(format!(
            "{} has no value for unique key field '{}'",
            std::any::type_name::<T>(),
            field
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Book {
        id: i32,
        title: String,
    }

    impl Document for Book {
        const FIELDS: &'static [FieldSchema] =
            &[FieldSchema::unique_key("id"), FieldSchema::new("title")];

        fn field_value(&self, field: &str) -> Option<Value> {
            match field {
                "id" => Some(self.id.into()),
                "title" => Some(self.title.as_str().into()),
                _ => None,
            }
        }
    }

    struct NoKey;

    impl Document for NoKey {
        const FIELDS: &'static [FieldSchema] = &[FieldSchema::new("title")];

        fn field_value(&self, _field: &str) -> Option<Value> {
            None
        }
    }

    struct TwoKeys;

    impl Document for TwoKeys {
        const FIELDS: &'static [FieldSchema] =
            &[FieldSchema::unique_key("id"), FieldSchema::unique_key("sku")];

        fn field_value(&self, _field: &str) -> Option<Value> {
            Some(Value::Int32(1))
        }
    }

    struct MissingValue;

    impl Document for MissingValue {
        const FIELDS: &'static [FieldSchema] = &[FieldSchema::unique_key("id")];

        fn field_value(&self, _field: &str) -> Option<Value> {
            None
        }
    }

    #[test]
    fn test_unique_key_field() {
        assert_eq!(unique_key_field::<Book>().unwrap(), "id");
    }

    #[test]
    fn test_unique_key_value() {
        let book = Book {
            id: 123,
            title: "Dune".into(),
        };
        assert_eq!(unique_key_value(&book).unwrap(), Value::Int32(123));
        assert_eq!(book.field_value("title"), Some(Value::from("Dune")));
    }

    #[test]
    fn test_missing_unique_key_is_schema_error() {
        let err = unique_key_field::<NoKey>().unwrap_err();
        assert!(matches!(err, Error::Schema(msg) if msg.contains("no unique key")));
    }

    #[test]
    fn test_multiple_unique_keys_is_schema_error() {
        let err = unique_key_field::<TwoKeys>().unwrap_err();
        assert!(matches!(err, Error::Schema(msg) if msg.contains("more than one")));
        assert!(unique_key_value(&TwoKeys).is_err());
    }

    #[test]
    fn test_missing_value_is_schema_error() {
        let err = unique_key_value(&MissingValue).unwrap_err();
        assert!(matches!(err, Error::Schema(msg) if msg.contains("no value")));
    }
}
