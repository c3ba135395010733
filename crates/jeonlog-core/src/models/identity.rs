//! Display identity used for feed authorship

use serde::{Deserialize, Serialize};

use crate::util::normalize_text_option;

/// Author name used when no signed-in identity is available.
pub const FALLBACK_AUTHOR_NAME: &str = "user";

/// The current user's display identity, as supplied by the sign-in collaborator.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub avatar: Option<String>,
}

impl Identity {
    #[must_use]
    pub fn new(name: Option<String>, avatar: Option<String>) -> Self {
        Self {
            name: normalize_text_option(name),
            avatar: normalize_text_option(avatar),
        }
    }

    /// No signed-in user.
    #[must_use]
    pub fn anonymous() -> Self {
        Self::default()
    }

    /// Name shown on feed items, falling back to [`FALLBACK_AUTHOR_NAME`].
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .unwrap_or(FALLBACK_AUTHOR_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_name_falls_back() {
        assert_eq!(Identity::anonymous().display_name(), "user");
        assert_eq!(Identity::new(Some("  ".into()), None).display_name(), "user");
    }

    #[test]
    fn test_display_name_uses_name() {
        let identity = Identity::new(Some(" 민지 ".into()), Some("avatar.png".into()));
        assert_eq!(identity.display_name(), "민지");
        assert_eq!(identity.avatar.as_deref(), Some("avatar.png"));
    }
}
