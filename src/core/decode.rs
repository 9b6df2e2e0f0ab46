//! Purpose: Typed extraction from resolved tree nodes.
//! Exports: `Leaf`, `extract`, `coerce`, `DecodeFields`, `required_field`, `decode_at`.
//! Role: Conversion layer between generic values and statically typed targets.
//! Invariants: No implicit cross-kind coercion; numbers must fit the target range.
//! Invariants: Record-decode failures use the fixed wire wording
//! `Value of type '<T>' required for key '<k>'.` exactly.

use serde_json::Value;

use crate::core::error::{Error, ErrorKind};
use crate::core::path::{Segment, resolve};
use crate::core::value::Kind;

/// A scalar target a resolved node can be converted into. `TYPE_NAME` is the
/// declared name that appears in record-decode failure messages.
pub trait Leaf: Sized {
    const TYPE_NAME: &'static str;

    fn from_node(node: &Value) -> Option<Self>;
}

impl Leaf for String {
    const TYPE_NAME: &'static str = "String";

    // No numeric-to-string coercion.
    fn from_node(node: &Value) -> Option<Self> {
        node.as_str().map(str::to_string)
    }
}

impl Leaf for bool {
    const TYPE_NAME: &'static str = "Bool";

    fn from_node(node: &Value) -> Option<Self> {
        node.as_bool()
    }
}

impl Leaf for i64 {
    const TYPE_NAME: &'static str = "Int";

    fn from_node(node: &Value) -> Option<Self> {
        node.as_i64()
    }
}

impl Leaf for i32 {
    const TYPE_NAME: &'static str = "Int";

    fn from_node(node: &Value) -> Option<Self> {
        node.as_i64().and_then(|n| i32::try_from(n).ok())
    }
}

impl Leaf for u64 {
    const TYPE_NAME: &'static str = "UInt";

    fn from_node(node: &Value) -> Option<Self> {
        node.as_u64()
    }
}

impl Leaf for u32 {
    const TYPE_NAME: &'static str = "UInt";

    fn from_node(node: &Value) -> Option<Self> {
        node.as_u64().and_then(|n| u32::try_from(n).ok())
    }
}

impl Leaf for f64 {
    const TYPE_NAME: &'static str = "Double";

    fn from_node(node: &Value) -> Option<Self> {
        node.as_f64()
    }
}

/// Converts a single node to `T` without any path descent.
pub fn coerce<T: Leaf>(node: &Value) -> Result<T, Error> {
    T::from_node(node).ok_or_else(|| {
        Error::new(ErrorKind::Coercion)
            .with_expected(T::TYPE_NAME)
            .with_found(Kind::of(node))
    })
}

/// Resolves `path` from the root, then converts the addressed node to `T`.
pub fn extract<T: Leaf>(root: &Value, path: &[Segment]) -> Result<T, Error> {
    coerce(resolve(root, path)?)
}

/// A record decodable field-by-field from an object node. Implementations
/// list each declared field explicitly via [`required_field`]; there is no
/// runtime reflection.
pub trait DecodeFields: Sized {
    fn decode_fields(node: &Value) -> Result<Self, Error>;
}

/// Resolves `path`, then decodes the addressed subtree as a record.
pub fn decode_at<T: DecodeFields>(root: &Value, path: &[Segment]) -> Result<T, Error> {
    T::decode_fields(resolve(root, path)?)
}

/// Fetches one declared field of a record: a single-segment key resolution
/// against `node` followed by coercion. A missing key, a non-object node, and
/// a failed coercion all produce the same caller-facing message, since the
/// wire contract names only the field and its declared type.
pub fn required_field<T: Leaf>(node: &Value, name: &str) -> Result<T, Error> {
    let failure = || {
        Error::new(ErrorKind::Coercion)
            .with_key(name.to_string())
            .with_expected(T::TYPE_NAME)
            .with_message(format!(
                "Value of type '{}' required for key '{name}'.",
                T::TYPE_NAME
            ))
    };
    let Value::Object(map) = node else {
        return Err(failure().with_found(Kind::of(node)));
    };
    match map.get(name) {
        Some(field) => T::from_node(field).ok_or_else(|| failure().with_found(Kind::of(field))),
        None => Err(failure()),
    }
}

#[cfg(test)]
mod tests {
    use super::{DecodeFields, coerce, decode_at, extract, required_field};
    use crate::core::error::{Error, ErrorKind};
    use serde_json::{Value, json};

    #[test]
    fn string_extraction_keeps_decoded_content() {
        let tree = json!({"s": "caf\u{e9} \"quoted\""});
        let s: String = extract(&tree, &crate::path!["s"]).unwrap();
        assert_eq!(s, "café \"quoted\"");
    }

    #[test]
    fn no_numeric_to_string_coercion() {
        let err = coerce::<String>(&json!(42)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Coercion);
        assert_eq!(err.expected(), Some("String"));
    }

    #[test]
    fn no_string_to_number_coercion() {
        assert!(coerce::<i64>(&json!("42")).is_err());
    }

    #[test]
    fn numbers_must_fit_the_target_range() {
        assert_eq!(coerce::<i64>(&json!(9_000_000_000i64)).unwrap(), 9_000_000_000);
        assert!(coerce::<i32>(&json!(9_000_000_000i64)).is_err());
        assert!(coerce::<u64>(&json!(-1)).is_err());
        assert_eq!(coerce::<f64>(&json!(0.55)).unwrap(), 0.55);
    }

    #[test]
    fn floats_do_not_coerce_to_integers() {
        assert!(coerce::<i64>(&json!(1.5)).is_err());
    }

    #[derive(Debug)]
    struct Signup {
        name: String,
        bar: i64,
    }

    impl DecodeFields for Signup {
        fn decode_fields(node: &Value) -> Result<Self, Error> {
            Ok(Self {
                name: required_field(node, "name")?,
                bar: required_field(node, "bar")?,
            })
        }
    }

    #[test]
    fn record_decode_succeeds_field_by_field() {
        let tree = json!({"name": "hi", "bar": 3});
        let signup: Signup = decode_at(&tree, &[]).unwrap();
        assert_eq!(signup.name, "hi");
        assert_eq!(signup.bar, 3);
    }

    #[test]
    fn record_decode_failure_uses_verbatim_wording() {
        let tree = json!({"name": "hi", "bar": "asdf"});
        let err = decode_at::<Signup>(&tree, &[]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Coercion);
        assert_eq!(err.key(), Some("bar"));
        assert_eq!(err.reason(), "Value of type 'Int' required for key 'bar'.");
    }

    #[test]
    fn missing_required_field_uses_the_same_wording() {
        let tree = json!({"bar": 1});
        let err = decode_at::<Signup>(&tree, &[]).unwrap_err();
        assert_eq!(err.reason(), "Value of type 'String' required for key 'name'.");
    }

    #[test]
    fn record_decode_of_a_nested_subtree() {
        let tree = json!({"payload": {"name": "n", "bar": 2}});
        let signup: Signup = decode_at(&tree, &crate::path!["payload"]).unwrap();
        assert_eq!(signup.bar, 2);
    }
}
