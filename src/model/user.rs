//! The Spotify user the backend is logged in as.

use serde::Deserialize;

/// The current user's Spotify profile.
///
/// Only the fields useful for showing who is logged in are kept; the rest of Spotify's user object is dropped.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct UserProfile {
    id: String,
    display_name: Option<String>,
    email: Option<String>,
    country: Option<String>,
    product: Option<String>,
}

impl UserProfile {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The user's display name, falling back to their ID if they haven't set one.
    pub fn display_name(&self) -> &str {
        self.display_name.as_deref().unwrap_or(&self.id)
    }

    /// Only available if the backend was granted the `user-read-email` scope.
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    /// The user's subscription level, e.g. `premium` or `free`.
    pub fn product(&self) -> Option<&str> {
        self.product.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_falls_back_to_id() {
        let profile: UserProfile =
            serde_json::from_str(r#"{"id": "wizzler", "display_name": null, "country": "SE", "product": "premium"}"#)
                .unwrap();

        assert_eq!(profile.display_name(), "wizzler");
        assert_eq!(profile.email(), None);
        assert_eq!(profile.product(), Some("premium"));
    }
}
