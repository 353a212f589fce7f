use crate::features::classifier::FieldError;

pub fn field_validation_class(error: Option<&FieldError>) -> &'static str {
    match error {
        Some(_) => "input-field error",
        None => "input-field",
    }
}

pub fn field_validation_style(error: Option<&FieldError>) -> &'static str {
    match error {
        Some(_) => "border: 2px solid #ef4444; background-color: #fef2f2;",
        None => "",
    }
}

/// Inline style for the message under a field; hidden when there is nothing to say
pub fn error_message_style(error: Option<&FieldError>) -> &'static str {
    match error {
        Some(_) => "display: block;",
        None => "display: none;",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classes_follow_error_state() {
        let error = FieldError::Required;
        assert_eq!(field_validation_class(Some(&error)), "input-field error");
        assert_eq!(field_validation_class(None), "input-field");
        assert_eq!(error_message_style(None), "display: none;");
        assert_eq!(error_message_style(Some(&error)), "display: block;");
        assert!(field_validation_style(None).is_empty());
    }
}
