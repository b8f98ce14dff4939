//! Redirect-on-401 policy.

use std::sync::Arc;

use crate::credentials::{AUTH_TOKEN_KEY, CredentialStore};
use crate::error::RequestError;
use crate::navigation::{LOGIN_PATH, Navigator};

/// Reacts to failed calls: a 401 clears the stored token and navigates to the
/// login entry point. The failure itself is still returned to the caller.
#[derive(Clone)]
pub struct AuthExpiryPolicy {
    credentials: Arc<dyn CredentialStore>,
    navigator: Arc<dyn Navigator>,
}

impl AuthExpiryPolicy {
    pub fn new(credentials: Arc<dyn CredentialStore>, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            credentials,
            navigator,
        }
    }

    /// Apply the policy to `error`. Returns whether the session was expired.
    pub fn on_failure(&self, error: &RequestError) -> bool {
        if !error.is_unauthorized() {
            return false;
        }

        tracing::warn!("received 401; clearing stored token and redirecting to {LOGIN_PATH}");
        self.credentials.remove(AUTH_TOKEN_KEY);
        self.navigator.navigate(LOGIN_PATH);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::credentials::InMemoryCredentialStore;
    use crate::navigation::RecordingNavigator;

    fn policy() -> (
        AuthExpiryPolicy,
        Arc<InMemoryCredentialStore>,
        Arc<RecordingNavigator>,
    ) {
        let store = Arc::new(InMemoryCredentialStore::with_token("jwt-token"));
        let nav = Arc::new(RecordingNavigator::new());
        (AuthExpiryPolicy::new(store.clone(), nav.clone()), store, nav)
    }

    #[test]
    fn unauthorized_clears_token_and_redirects_once() {
        let (policy, store, nav) = policy();
        let err = RequestError::Status {
            status: 401,
            message: None,
        };

        assert!(policy.on_failure(&err));
        assert_eq!(store.get(AUTH_TOKEN_KEY), None);
        assert_eq!(nav.visits(), vec![LOGIN_PATH.to_string()]);
    }

    #[test]
    fn other_failures_leave_session_alone() {
        let (policy, store, nav) = policy();
        for err in [
            RequestError::Status {
                status: 403,
                message: None,
            },
            RequestError::Status {
                status: 500,
                message: Some("boom".to_string()),
            },
            RequestError::Timeout,
            RequestError::Network("refused".to_string()),
        ] {
            assert!(!policy.on_failure(&err));
        }
        assert_eq!(store.get(AUTH_TOKEN_KEY).as_deref(), Some("jwt-token"));
        assert!(nav.visits().is_empty());
    }
}
