use crate::schema::types::Primitive;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

///
/// Value
///
/// A single property value as the store holds it.
///

#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(tag = "type", content = "value")]
#[remain::sorted]
pub enum Value {
    Checkbox(bool),
    Number(f64),
    Text(String),
}

impl Value {
    #[must_use]
    pub const fn primitive(&self) -> Primitive {
        match self {
            Self::Checkbox(_) => Primitive::Checkbox,
            Self::Number(_) => Primitive::Number,
            Self::Text(_) => Primitive::Text,
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Self::Checkbox(b)
    }
}

///
/// FieldKind
///
/// Ties a field's declared primitive to the Rust type an entity struct
/// stores it as. Used by `entity!`.
///

pub trait FieldKind {
    type Type;
    const PRIMITIVE: Primitive;

    fn to_value(value: &Self::Type) -> Value;
    fn from_value(value: &Value) -> Option<Self::Type>;
}

pub mod kind {
    use super::{FieldKind, Value};
    use crate::schema::types::Primitive;

    pub struct Checkbox;

    impl FieldKind for Checkbox {
        type Type = bool;
        const PRIMITIVE: Primitive = Primitive::Checkbox;

        fn to_value(value: &bool) -> Value {
            Value::Checkbox(*value)
        }

        fn from_value(value: &Value) -> Option<bool> {
            match value {
                Value::Checkbox(b) => Some(*b),
                _ => None,
            }
        }
    }

    pub struct Number;

    impl FieldKind for Number {
        type Type = f64;
        const PRIMITIVE: Primitive = Primitive::Number;

        fn to_value(value: &f64) -> Value {
            Value::Number(*value)
        }

        fn from_value(value: &Value) -> Option<f64> {
            match value {
                Value::Number(n) => Some(*n),
                _ => None,
            }
        }
    }

    pub struct Text;

    impl FieldKind for Text {
        type Type = String;
        const PRIMITIVE: Primitive = Primitive::Text;

        fn to_value(value: &String) -> Value {
            Value::Text(value.clone())
        }

        fn from_value(value: &Value) -> Option<String> {
            value.as_text().map(ToString::to_string)
        }
    }
}

///
/// FieldValues
///
/// Decoded values of one record keyed by local field name.
///

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldValues {
    entity: &'static str,
    values: BTreeMap<&'static str, Value>,
}

impl FieldValues {
    #[must_use]
    pub fn new(entity: &'static str) -> Self {
        Self {
            entity,
            values: BTreeMap::new(),
        }
    }

    pub fn insert(&mut self, field: &'static str, value: Value) {
        self.values.insert(field, value);
    }

    /// Take one field as the Rust type of its kind.
    pub fn get<K: FieldKind>(&self, field: &'static str) -> Result<K::Type, crate::record::RecordError> {
        use crate::record::RecordError;

        let value = self.values.get(field).ok_or_else(|| RecordError::MissingValue {
            entity: self.entity.to_string(),
            field: field.to_string(),
        })?;

        K::from_value(value).ok_or_else(|| RecordError::KindMismatch {
            entity: self.entity.to_string(),
            field: field.to_string(),
            expected: K::PRIMITIVE,
            found: value.primitive(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::RecordError;

    #[test]
    fn value_reports_primitive() {
        assert_eq!(Value::from("x").primitive(), Primitive::Text);
        assert_eq!(Value::from(1.5).primitive(), Primitive::Number);
        assert_eq!(Value::from(true).primitive(), Primitive::Checkbox);
    }

    #[test]
    fn serde_tags_the_kind() {
        let json = serde_json::to_value(Value::from("Physics")).unwrap();

        assert_eq!(json, serde_json::json!({ "type": "Text", "value": "Physics" }));
    }

    #[test]
    fn field_values_check_kind() {
        let mut values = FieldValues::new("AcademicField");
        values.insert("name", Value::from(3.0));

        assert_eq!(
            values.get::<kind::Text>("name"),
            Err(RecordError::KindMismatch {
                entity: "AcademicField".to_string(),
                field: "name".to_string(),
                expected: Primitive::Text,
                found: Primitive::Number,
            })
        );
        assert_eq!(
            values.get::<kind::Text>("description"),
            Err(RecordError::MissingValue {
                entity: "AcademicField".to_string(),
                field: "description".to_string(),
            })
        );
        assert_eq!(values.get::<kind::Number>("name"), Ok(3.0));
    }
}
