//! Form Models
//!
//! Field state for the login and signup forms. Values live only while the
//! page is mounted and are never sent anywhere in this revision.

/// Login form fields, one string per input
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Signup form fields
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SignupForm {
    pub username: String,
    pub password: String,
    pub conf_password: String,
    pub email: String,
    pub firstname: String,
    pub lastname: String,
    pub profile_img_url: String,
}

impl SignupForm {
    /// The single validation rule: password must equal its confirmation.
    pub fn validate(&self) -> Result<(), String> {
        if self.password != self.conf_password {
            return Err("Passwords must match".to_string());
        }
        Ok(())
    }

    /// Assemble the registration payload from the current field values.
    pub fn payload(&self) -> SignupPayload {
        SignupPayload {
            username: self.username.clone(),
            password: self.password.clone(),
            firstname: self.firstname.clone(),
            lastname: self.lastname.clone(),
            email: self.email.clone(),
            profile_url: self.profile_img_url.clone(),
        }
    }
}

/// Registration payload assembled on signup submit
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct SignupPayload {
    pub username: String,
    pub password: String,
    pub firstname: String,
    pub lastname: String,
    pub email: String,
    pub profile_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled_form() -> SignupForm {
        SignupForm {
            username: "hunter".to_string(),
            password: "s3cret".to_string(),
            conf_password: "s3cret".to_string(),
            email: "hunter@example.com".to_string(),
            firstname: "Alex".to_string(),
            lastname: "Hunter".to_string(),
            profile_img_url: "https://example.com/me.png".to_string(),
        }
    }

    #[test]
    fn test_validate_matching_passwords() {
        assert!(filled_form().validate().is_ok());
    }

    #[test]
    fn test_validate_mismatched_passwords() {
        let mut form = filled_form();
        form.conf_password = "something else".to_string();
        assert_eq!(form.validate(), Err("Passwords must match".to_string()));
    }

    #[test]
    fn test_validate_empty_form() {
        // Both passwords empty still match; required-field checks are the
        // browser's job via the `required` attribute.
        assert!(SignupForm::default().validate().is_ok());
    }

    #[test]
    fn test_payload_maps_fields() {
        let payload = filled_form().payload();
        assert_eq!(payload.username, "hunter");
        assert_eq!(payload.email, "hunter@example.com");
        assert_eq!(payload.profile_url, "https://example.com/me.png");
    }

    #[test]
    fn test_payload_serializes_to_json() {
        let json = serde_json::to_string(&filled_form().payload()).unwrap();
        assert!(json.contains("\"username\":\"hunter\""));
        assert!(json.contains("\"profile_url\""));
    }
}
