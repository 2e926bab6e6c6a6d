use crate::{prelude::*, validate::naming::validate_field_ident};

///
/// Field
///

#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Field {
    pub ident: &'static str,
    pub primitive: Primitive,
}

impl Field {
    #[must_use]
    pub const fn new(ident: &'static str, primitive: Primitive) -> Self {
        Self { ident, primitive }
    }

    #[must_use]
    pub const fn text(ident: &'static str) -> Self {
        Self::new(ident, Primitive::Text)
    }
}

impl ValidateNode for Field {
    fn validate(&self) -> Result<(), ErrorTree> {
        let mut errs = ErrorTree::new();

        if let Err(msg) = validate_field_ident(self.ident) {
            errs.add(msg);
        }

        errs.result()
    }
}
