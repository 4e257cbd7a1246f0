// SPDX-License-Identifier: MPL-2.0
//! Signed-in user context.
//!
//! The authentication service reports sign-in state changes and, while a
//! user is signed in, the profile store pushes snapshots of that user's
//! profile record. `Session` combines both into the single `User` value the
//! UI reads. Profile fields take precedence over authentication fields.
//!
//! Snapshots are only accepted for the currently signed-in uid, so a late
//! snapshot from a previous user can never resurrect a signed-out session.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// User identity as reported by the authentication service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthUser {
    pub uid: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
}

/// The merged user: authentication fields overlaid with profile fields.
#[derive(Debug, Clone, PartialEq)]
pub struct User {
    uid: String,
    fields: Map<String, Value>,
}

impl User {
    fn from_auth(auth: &AuthUser) -> Self {
        let fields = match serde_json::to_value(auth) {
            Ok(Value::Object(map)) => map,
            _ => Map::new(),
        };
        Self {
            uid: auth.uid.clone(),
            fields,
        }
    }

    #[must_use]
    pub fn uid(&self) -> &str {
        &self.uid
    }

    /// Looks up a merged field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }

    /// Returns a merged string field.
    #[must_use]
    pub fn str_field(&self, name: &str) -> Option<&str> {
        self.field(name).and_then(Value::as_str)
    }

    /// All merged fields.
    #[must_use]
    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }
}

/// Current sign-in state.
#[derive(Debug, Default)]
pub struct Session {
    auth: Option<AuthUser>,
    user: Option<User>,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Applies a sign-in state change.
    ///
    /// Signing in as someone else drops the previous user's profile fields.
    pub fn on_auth_changed(&mut self, auth: Option<AuthUser>) {
        match &auth {
            Some(next) => {
                tracing::debug!(uid = %next.uid, "signed in");
                self.user = Some(User::from_auth(next));
            }
            None => {
                if let Some(previous) = &self.auth {
                    tracing::debug!(uid = %previous.uid, "signed out");
                }
                self.user = None;
            }
        }
        self.auth = auth;
    }

    /// Applies a profile snapshot for `uid`.
    ///
    /// Object snapshots are merged over the authentication fields. A `null`
    /// snapshot (no profile record) leaves the authentication-only user.
    /// Returns `false` if the snapshot was ignored because `uid` is not the
    /// signed-in user.
    pub fn on_profile_snapshot(&mut self, uid: &str, snapshot: &Value) -> bool {
        let Some(auth) = self.auth.as_ref().filter(|auth| auth.uid == uid) else {
            tracing::debug!(%uid, "ignoring profile snapshot for a user that is not signed in");
            return false;
        };

        let mut user = User::from_auth(auth);
        match snapshot {
            Value::Object(profile) => {
                for (key, value) in profile {
                    user.fields.insert(key.clone(), value.clone());
                }
            }
            Value::Null => {}
            other => {
                tracing::warn!(%uid, kind = value_kind(other), "profile snapshot is not an object");
            }
        }
        self.user = Some(user);
        true
    }

    /// Returns the signed-in user, if any.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.user.as_ref()
    }

    /// Returns the uid a profile subscription should be open for.
    #[must_use]
    pub fn profile_uid(&self) -> Option<&str> {
        self.auth.as_ref().map(|auth| auth.uid.as_str())
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn alice() -> AuthUser {
        AuthUser {
            uid: "alice".to_string(),
            email: Some("alice@example.com".to_string()),
            display_name: Some("Alice".to_string()),
        }
    }

    #[test]
    fn signed_out_session_has_no_user() {
        let session = Session::new();
        assert!(session.user().is_none());
        assert!(session.profile_uid().is_none());
    }

    #[test]
    fn sign_in_exposes_auth_fields() {
        let mut session = Session::new();
        session.on_auth_changed(Some(alice()));

        let user = session.user().expect("signed in");
        assert_eq!(user.uid(), "alice");
        assert_eq!(user.str_field("email"), Some("alice@example.com"));
        assert_eq!(user.str_field("displayName"), Some("Alice"));
        assert_eq!(session.profile_uid(), Some("alice"));
    }

    #[test]
    fn profile_fields_override_auth_fields() {
        let mut session = Session::new();
        session.on_auth_changed(Some(alice()));

        let accepted = session.on_profile_snapshot(
            "alice",
            &json!({ "displayName": "Alice L.", "role": "admin" }),
        );
        assert!(accepted);

        let user = session.user().unwrap();
        assert_eq!(user.str_field("displayName"), Some("Alice L."));
        assert_eq!(user.str_field("role"), Some("admin"));
        assert_eq!(user.str_field("email"), Some("alice@example.com"));
        assert_eq!(user.fields().len(), 4);
    }

    #[test]
    fn later_snapshot_replaces_earlier_profile() {
        let mut session = Session::new();
        session.on_auth_changed(Some(alice()));
        session.on_profile_snapshot("alice", &json!({ "role": "admin", "team": "a" }));
        session.on_profile_snapshot("alice", &json!({ "role": "viewer" }));

        let user = session.user().unwrap();
        assert_eq!(user.str_field("role"), Some("viewer"));
        assert!(user.field("team").is_none());
    }

    #[test]
    fn null_snapshot_keeps_auth_only_user() {
        let mut session = Session::new();
        session.on_auth_changed(Some(alice()));
        assert!(session.on_profile_snapshot("alice", &Value::Null));
        assert_eq!(session.user().unwrap().str_field("displayName"), Some("Alice"));
    }

    #[test]
    fn sign_out_clears_user_and_ignores_late_snapshots() {
        let mut session = Session::new();
        session.on_auth_changed(Some(alice()));
        session.on_auth_changed(None);
        assert!(session.user().is_none());

        assert!(!session.on_profile_snapshot("alice", &json!({ "role": "admin" })));
        assert!(session.user().is_none());
    }

    #[test]
    fn snapshot_for_other_user_is_ignored() {
        let mut session = Session::new();
        session.on_auth_changed(Some(alice()));
        assert!(!session.on_profile_snapshot("bob", &json!({ "displayName": "Bob" })));
        assert_eq!(session.user().unwrap().str_field("displayName"), Some("Alice"));
    }

    #[test]
    fn auth_user_deserializes_from_camel_case() {
        let auth: AuthUser =
            serde_json::from_value(json!({ "uid": "u1", "displayName": "U" })).unwrap();
        assert_eq!(auth.display_name.as_deref(), Some("U"));
        assert!(auth.email.is_none());
    }
}
