use serde::{Deserialize, Serialize};

/// The signed-in user as reported by the backend's auth endpoints.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct SessionUser {
    pub username: String,
    #[serde(default)]
    pub display_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

impl SessionUser {
    /// Name to greet the user with: display name if set, else username.
    pub fn greeting_name(&self) -> &str {
        self.display_name
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .unwrap_or(&self.username)
    }

    /// Avatar initials: the first letter of up to two words, upper-cased.
    ///
    /// `"jane doe"` → `"JD"`, `"jdoe"` → `"J"`, empty → `"?"`.
    pub fn initials(&self) -> String {
        initials_from_name(self.greeting_name())
    }
}

/// Initials from a free-form name; separators are whitespace, `.`, `_` and `-`.
pub fn initials_from_name(name: &str) -> String {
    let initials: String = name
        .split(|c: char| c.is_whitespace() || matches!(c, '.' | '_' | '-'))
        .filter_map(|word| word.chars().find(|c| c.is_alphanumeric()))
        .take(2)
        .flat_map(char::to_uppercase)
        .collect();
    if initials.is_empty() {
        "?".to_string()
    } else {
        initials
    }
}

/// Credentials submitted by the sign-in form.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[cfg_attr(feature = "validation", derive(validator::Validate))]
pub struct SignInRequest {
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 1, message = "Username is required"))
    )]
    pub username: String,
    #[cfg_attr(
        feature = "validation",
        validate(length(min = 8, message = "Password must be at least 8 characters"))
    )]
    pub password: String,
}

/// Backend response to a successful sign-in.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SignInResponse {
    pub access_token: String,
    pub user: SessionUser,
}
