//! Per-request authentication context.
//!
//! Every API call receives a [`RequestContext`] built at the moment the
//! request is dispatched. The context captures the access token once, so a
//! token change mid-flight never alters a request that has already been
//! constructed.

use gloo_net::http::RequestBuilder;

use super::storage;

/// Snapshot of the auth state used for a single HTTP request.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RequestContext {
    bearer: Option<String>,
}

impl RequestContext {
    /// Build a context from the token currently held in localStorage.
    pub fn current() -> Self {
        Self {
            bearer: storage::get_access_token(),
        }
    }

    /// Context carrying a specific token.
    pub fn with_token(token: impl Into<String>) -> Self {
        Self {
            bearer: Some(token.into()),
        }
    }

    /// Context without credentials. Requests go out unauthenticated.
    pub fn anonymous() -> Self {
        Self { bearer: None }
    }

    /// The `Authorization` header value, if a token is present.
    pub fn authorization(&self) -> Option<String> {
        self.bearer.as_ref().map(|token| format!("Bearer {token}"))
    }

    /// Attach the auth header to a request under construction. A missing
    /// token means the request is simply sent without credentials.
    pub fn apply(&self, builder: RequestBuilder) -> RequestBuilder {
        match self.authorization() {
            Some(value) => builder.header("Authorization", &value),
            None => builder,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_formats_bearer() {
        let ctx = RequestContext::with_token("abc123");
        assert_eq!(ctx.authorization(), Some("Bearer abc123".to_string()));
    }

    #[test]
    fn test_anonymous_has_no_header() {
        let ctx = RequestContext::anonymous();
        assert_eq!(ctx.authorization(), None);
    }
}
