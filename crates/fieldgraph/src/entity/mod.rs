//! Typed entities.
//!
//! Each entity type is a plain struct with statically typed fields. Its
//! shape is declared alongside it; store identifiers come from the mapping
//! held by the `Registry`, linked by entity name.

use crate::{
    record::RecordError,
    schema::{id::Id, node::EntityShape},
    value::{FieldValues, Value},
};

///
/// EntityKind
///

pub trait EntityKind: Sized {
    const ENTITY: &'static str;
    const SHAPE: EntityShape;

    fn id(&self) -> Id;

    /// Field values in declaration order.
    fn to_values(&self) -> Vec<(&'static str, Value)>;

    fn from_values(id: Id, values: &FieldValues) -> Result<Self, RecordError>;
}

///
/// entity!
///
/// Declares an entity struct with an `id` plus the listed fields, and its
/// `EntityKind` impl. Field kinds are the markers in `value::kind`.
///

#[macro_export]
macro_rules! entity {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $(
                $(#[$field_meta:meta])*
                $field:ident : $kind:ident
            ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq)]
        $vis struct $name {
            pub id: $crate::schema::id::Id,
            $(
                $(#[$field_meta])*
                pub $field: <$crate::value::kind::$kind as $crate::value::FieldKind>::Type,
            )*
        }

        impl $crate::entity::EntityKind for $name {
            const ENTITY: &'static str = stringify!($name);
            const SHAPE: $crate::schema::node::EntityShape = $crate::schema::node::EntityShape::new(
                stringify!($name),
                &[
                    $(
                        $crate::schema::node::Field::new(
                            stringify!($field),
                            <$crate::value::kind::$kind as $crate::value::FieldKind>::PRIMITIVE,
                        ),
                    )*
                ],
            );

            fn id(&self) -> $crate::schema::id::Id {
                self.id
            }

            fn to_values(&self) -> ::std::vec::Vec<(&'static str, $crate::value::Value)> {
                ::std::vec![
                    $(
                        (
                            stringify!($field),
                            <$crate::value::kind::$kind as $crate::value::FieldKind>::to_value(&self.$field),
                        ),
                    )*
                ]
            }

            fn from_values(
                id: $crate::schema::id::Id,
                values: &$crate::value::FieldValues,
            ) -> ::std::result::Result<Self, $crate::record::RecordError> {
                ::std::result::Result::Ok(Self {
                    id,
                    $(
                        $field: values.get::<$crate::value::kind::$kind>(stringify!($field))?,
                    )*
                })
            }
        }
    };
}
