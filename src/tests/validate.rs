#[cfg(test)]
mod tests {
    use crate::error::FormError;
    use crate::tests::common;
    use crate::utils::validate_contact;

    #[test]
    fn accepts_and_trims_a_complete_message() {
        common::setup();

        let accepted = validate_contact(
            "  Ada Lovelace ",
            " ada@example.com ",
            " Hello there.\n"
        ).expect("valid input");

        assert_eq!(accepted.name, "Ada Lovelace");
        assert_eq!(accepted.email, "ada@example.com");
        assert_eq!(accepted.message, "Hello there.");
    }

    #[test]
    fn rejects_blank_name_first() {
        common::setup();

        assert_eq!(validate_contact("", "ada@example.com", "hi"), Err(FormError::EmptyName));
        assert_eq!(validate_contact("   ", "not-an-email", ""), Err(FormError::EmptyName));
    }

    #[test]
    fn rejects_malformed_email() {
        common::setup();

        for email in ["", "ada", "ada@", "@example.com", "ada@example", "a b@example.com"] {
            assert_eq!(
                validate_contact("Ada", email, "hi"),
                Err(FormError::InvalidEmail),
                "email {:?} should be rejected",
                email
            );
        }
    }

    #[test]
    fn rejects_blank_message() {
        common::setup();

        assert_eq!(validate_contact("Ada", "ada@example.com", ""), Err(FormError::EmptyMessage));
        assert_eq!(
            validate_contact("Ada", "ada@example.com", "  \n "),
            Err(FormError::EmptyMessage)
        );
    }

    #[test]
    fn accepted_message_serializes_for_the_log_line() {
        common::setup();

        let accepted = validate_contact("Ada", "ada@example.com", "hi").expect("valid input");
        let json = serde_json::to_string(&accepted).expect("serializable");
        assert!(json.contains("\"name\":\"Ada\""));
        assert!(json.contains("\"email\":\"ada@example.com\""));
    }

    #[test]
    fn form_errors_display_inline_text() {
        common::setup();

        assert_eq!(FormError::EmptyName.to_string(), "Please enter your name");
        assert_eq!(FormError::InvalidEmail.to_string(), "Please enter a valid email address");
        assert_eq!(FormError::EmptyMessage.to_string(), "Please enter a message");
    }
}
