use crate::errors::AppError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub name: String,
    pub phone: String,
    pub email: String,
}

impl Contact {
    /// Builds a contact from raw user input. Surrounding whitespace is
    /// trimmed from every field; name and phone must be non-empty after
    /// trimming. An empty email means "not provided".
    pub fn new(name: &str, phone: &str, email: &str) -> Result<Self, AppError> {
        let name = name.trim();
        let phone = phone.trim();
        let email = email.trim();

        if name.is_empty() {
            return Err(AppError::Validation("Name must not be empty".to_string()));
        }

        if phone.is_empty() {
            return Err(AppError::Validation("Phone must not be empty".to_string()));
        }

        Ok(Contact {
            name: name.to_string(),
            phone: phone.to_string(),
            email: email.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn trims_surrounding_whitespace() -> Result<(), AppError> {
        let contact = Contact::new("  Anna Lee ", " 111\t", " anna@example.com ")?;

        assert_eq!(contact.name, "Anna Lee");
        assert_eq!(contact.phone, "111");
        assert_eq!(contact.email, "anna@example.com");
        Ok(())
    }

    #[test]
    fn rejects_blank_name() {
        let result = Contact::new("   ", "111", "");

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn rejects_blank_phone() {
        let result = Contact::new("Anna", "  ", "");

        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn email_is_optional() -> Result<(), AppError> {
        let contact = Contact::new("Anna", "111", "")?;

        assert!(contact.email.is_empty());
        Ok(())
    }
}
