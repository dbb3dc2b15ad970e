//! Data models for the user API.

use serde::{Deserialize, Serialize};

/// A stored user record.
///
/// The `id` is an opaque string generated by the store on creation and
/// never changes afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct User {
    pub id: String,
    pub name: String,
    pub bio: String,
}

/// Incoming body for create and update requests.
///
/// Both fields are optional at the wire level; [`UserPayload::into_fields`]
/// decides whether the request carries enough to persist. Unknown fields
/// are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UserPayload {
    pub name: Option<String>,
    pub bio: Option<String>,
}

/// A validated field set, ready to hand to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: String,
    pub bio: String,
}

impl UserPayload {
    /// Returns the field set when both `name` and `bio` are present and
    /// non-empty. The empty string counts as missing.
    pub fn into_fields(self) -> Option<NewUser> {
        match (self.name, self.bio) {
            (Some(name), Some(bio)) if !name.is_empty() && !bio.is_empty() => {
                Some(NewUser { name, bio })
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(name: Option<&str>, bio: Option<&str>) -> UserPayload {
        UserPayload {
            name: name.map(String::from),
            bio: bio.map(String::from),
        }
    }

    #[test]
    fn test_both_fields_present() {
        let fields = payload(Some("Ann"), Some("Engineer")).into_fields();
        assert_eq!(
            fields,
            Some(NewUser {
                name: "Ann".to_string(),
                bio: "Engineer".to_string(),
            })
        );
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert_eq!(payload(None, None).into_fields(), None);
        assert_eq!(payload(Some("Ann"), None).into_fields(), None);
        assert_eq!(payload(None, Some("Engineer")).into_fields(), None);
    }

    #[test]
    fn test_empty_string_counts_as_missing() {
        assert_eq!(payload(Some(""), Some("Engineer")).into_fields(), None);
        assert_eq!(payload(Some("Ann"), Some("")).into_fields(), None);
        assert_eq!(payload(Some(""), Some("")).into_fields(), None);
    }

    #[test]
    fn test_whitespace_is_not_empty() {
        // Presence check only; " " is a value, not an absence.
        assert!(payload(Some(" "), Some("Engineer")).into_fields().is_some());
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let parsed: UserPayload =
            serde_json::from_str(r#"{"name":"Ann","bio":"Engineer","role":"admin"}"#)
                .expect("payload with extra fields should deserialize");
        assert!(parsed.into_fields().is_some());
    }
}
