use crate::{MAX_ENTITY_NAME_LEN, MAX_FIELD_NAME_LEN};

/// Entity names: non-empty ASCII identifiers starting with a letter.
pub(crate) fn validate_entity_name(name: &str) -> Result<(), String> {
    if name.is_empty() {
        return Err("entity name is empty".to_string());
    }
    if name.len() > MAX_ENTITY_NAME_LEN {
        return Err(format!(
            "entity name '{name}' exceeds max length {MAX_ENTITY_NAME_LEN}"
        ));
    }
    if !is_ident(name) || !name.starts_with(|c: char| c.is_ascii_alphabetic()) {
        return Err(format!("entity name '{name}' is not a valid identifier"));
    }

    Ok(())
}

/// Field idents: non-empty ASCII identifiers, leading letter or underscore.
pub(crate) fn validate_field_ident(ident: &str) -> Result<(), String> {
    if ident.is_empty() {
        return Err("field ident is empty".to_string());
    }
    if ident.len() > MAX_FIELD_NAME_LEN {
        return Err(format!(
            "field ident '{ident}' exceeds max length {MAX_FIELD_NAME_LEN}"
        ));
    }
    if !is_ident(ident) || ident.starts_with(|c: char| c.is_ascii_digit()) {
        return Err(format!("field ident '{ident}' is not a valid identifier"));
    }

    Ok(())
}

fn is_ident(s: &str) -> bool {
    s.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_names() {
        assert!(validate_entity_name("AcademicField").is_ok());
        assert!(validate_entity_name("").is_err());
        assert!(validate_entity_name("_Hidden").is_err());
        assert!(validate_entity_name("Café").is_err());
        assert!(validate_entity_name(&"A".repeat(MAX_ENTITY_NAME_LEN + 1)).is_err());
    }

    #[test]
    fn field_idents() {
        assert!(validate_field_ident("name").is_ok());
        assert!(validate_field_ident("_internal").is_ok());
        assert!(validate_field_ident("2nd").is_err());
        assert!(validate_field_ident("first name").is_err());
        assert!(validate_field_ident("").is_err());
    }
}
