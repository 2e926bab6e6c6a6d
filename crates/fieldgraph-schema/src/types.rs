use derive_more::{Display, FromStr};
use serde::{Deserialize, Serialize};

///
/// Primitive
///
/// Scalar value kind a field carries in the store.
///

#[derive(Clone, Copy, Debug, Deserialize, Display, Eq, FromStr, Hash, PartialEq, Serialize)]
#[remain::sorted]
pub enum Primitive {
    Checkbox,
    Number,
    Text,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_from_name() {
        assert_eq!("Text".parse::<Primitive>().ok(), Some(Primitive::Text));
        assert_eq!("Number".parse::<Primitive>().ok(), Some(Primitive::Number));
        assert!("Blob".parse::<Primitive>().is_err());
    }
}
