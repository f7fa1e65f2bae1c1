//! Contact-form validation rules
//!
//! Pure checks over the submitted values; the DOM layer paints the
//! resulting messages next to the offending fields.

/// A form field that can fail validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

impl Field {
    /// ID of the page element that shows this field's error message
    pub fn error_element_id(self) -> &'static str {
        match self {
            Field::Name => "nameError",
            Field::Email => "emailError",
            Field::Subject => "subjectError",
            Field::Message => "messageError",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldError {
    pub field: Field,
    pub message: &'static str,
}

/// Validate a submission. Returns one error per failing field; an empty
/// result means the form may be submitted.
pub fn validate(name: &str, email: &str, subject: &str, message: &str) -> Vec<FieldError> {
    let mut errors = Vec::new();
    if name.trim().chars().count() < 2 {
        errors.push(FieldError {
            field: Field::Name,
            message: "Name must be at least 2 characters long",
        });
    }
    if !is_valid_email(email.trim()) {
        errors.push(FieldError {
            field: Field::Email,
            message: "Please enter a valid email address",
        });
    }
    if subject.trim().chars().count() < 3 {
        errors.push(FieldError {
            field: Field::Subject,
            message: "Subject must be at least 3 characters long",
        });
    }
    if message.trim().chars().count() < 10 {
        errors.push(FieldError {
            field: Field::Message,
            message: "Message must be at least 10 characters long",
        });
    }
    errors
}

/// Loose email shape check: something before an @, and a domain with a dot,
/// none of the chunks empty or containing whitespace or a second @.
pub fn is_valid_email(s: &str) -> bool {
    let Some((local, domain)) = s.split_once('@') else {
        return false;
    };
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    let clean = |chunk: &str| {
        !chunk.is_empty() && !chunk.chars().any(|c| c.is_whitespace() || c == '@')
    };
    clean(local) && clean(host) && clean(tld)
}
