//! Access token resolution.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use reqwest::header::HeaderValue;
use secrecy::{ExposeSecret, SecretString};

use crate::{Error, Result};

type TokenFuture = Pin<Box<dyn Future<Output = Result<String>> + Send>>;

/// A zero-argument async callback that supplies an access token.
///
/// The callback is invoked once per request, so it can hand out a fresh
/// token each time; caching and refresh are up to the caller.
///
/// # Example
///
/// ```
/// use property_validation::AccessTokenCallback;
///
/// let callback = AccessTokenCallback::new(|| async {
///     Ok("Bearer eyJhbGciOi...".to_string())
/// });
/// ```
#[derive(Clone)]
pub struct AccessTokenCallback {
    inner: Arc<dyn Fn() -> TokenFuture + Send + Sync>,
}

impl AccessTokenCallback {
    /// Wrap an async closure.
    pub fn new<F, Fut>(callback: F) -> Self
    where
        F: Fn() -> Fut + Send + Sync + 'static,
        Fut: Future<Output = Result<String>> + Send + 'static,
    {
        Self {
            inner: Arc::new(move || Box::pin(callback())),
        }
    }

    /// Invoke the callback.
    pub async fn call(&self) -> Result<String> {
        (self.inner)().await
    }
}

impl fmt::Debug for AccessTokenCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessTokenCallback(..)")
    }
}

/// The credential sources available to one call: an explicit token and/or
/// the client-wide callback. The explicit token wins.
#[derive(Debug, Clone, Default)]
pub struct Credentials {
    token: Option<SecretString>,
    callback: Option<AccessTokenCallback>,
}

impl Credentials {
    /// Credentials backed only by the given callback, if any.
    pub fn from_callback(callback: Option<AccessTokenCallback>) -> Self {
        Self {
            token: None,
            callback,
        }
    }

    /// Use `token` for every request made with these credentials.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(SecretString::from(token.into()));
        self
    }

    fn explicit_token(&self) -> Option<&SecretString> {
        self.token
            .as_ref()
            .filter(|t| !t.expose_secret().trim().is_empty())
    }

    /// Fail with [`Error::AuthenticationRequired`] unless a token or a
    /// callback is present. Does not invoke the callback.
    pub fn ensure_available(&self) -> Result<()> {
        if self.explicit_token().is_none() && self.callback.is_none() {
            return Err(Error::AuthenticationRequired);
        }
        Ok(())
    }

    /// Produce the token for one request.
    pub async fn resolve(&self) -> Result<SecretString> {
        if let Some(token) = self.explicit_token() {
            return Ok(token.clone());
        }

        let callback = self.callback.as_ref().ok_or(Error::AuthenticationRequired)?;
        tracing::trace!("resolving access token through callback");
        let token = callback.call().await?;
        if token.trim().is_empty() {
            return Err(Error::AuthenticationRequired);
        }
        Ok(SecretString::from(token))
    }
}

/// Build the `Authorization` header value. Tokens that already carry a
/// scheme (`Bearer ...`) are sent as is.
pub(crate) fn authorization_value(token: &SecretString) -> Result<HeaderValue> {
    let raw = token.expose_secret().trim();
    let mut value = if has_scheme(raw) {
        HeaderValue::from_str(raw)
    } else {
        HeaderValue::from_str(&format!("Bearer {}", raw))
    }
    .map_err(|_| Error::InvalidInput("Invalid token format".to_string()))?;
    value.set_sensitive(true);
    Ok(value)
}

fn has_scheme(token: &str) -> bool {
    token
        .split_once(' ')
        .map(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use super::*;

    #[test]
    fn test_missing_credentials() {
        let credentials = Credentials::default();
        assert!(matches!(
            credentials.ensure_available(),
            Err(Error::AuthenticationRequired)
        ));
    }

    #[test]
    fn test_blank_token_counts_as_missing() {
        let credentials = Credentials::default().with_token("   ");
        assert!(credentials.ensure_available().is_err());
    }

    #[tokio::test]
    async fn test_explicit_token_wins_over_callback() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let callback = AccessTokenCallback::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok("from-callback".to_string()) }
        });

        let credentials = Credentials::from_callback(Some(callback)).with_token("explicit");
        let token = credentials.resolve().await.unwrap();

        assert_eq!(token.expose_secret(), "explicit");
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_callback_is_invoked_per_resolve() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = calls.clone();
        let callback = AccessTokenCallback::new(move || {
            let n = counter.fetch_add(1, Ordering::SeqCst);
            async move { Ok(format!("token-{}", n)) }
        });

        let credentials = Credentials::from_callback(Some(callback));
        assert_eq!(credentials.resolve().await.unwrap().expose_secret(), "token-0");
        assert_eq!(credentials.resolve().await.unwrap().expose_secret(), "token-1");
    }

    #[tokio::test]
    async fn test_callback_error_propagates() {
        let callback =
            AccessTokenCallback::new(|| async { Err(Error::Config("no signed-in user".into())) });
        let credentials = Credentials::from_callback(Some(callback));
        assert!(matches!(credentials.resolve().await, Err(Error::Config(_))));
    }

    #[test]
    fn test_authorization_value() {
        let bare = authorization_value(&SecretString::from("abc".to_string())).unwrap();
        assert_eq!(bare.to_str().unwrap(), "Bearer abc");
        assert!(bare.is_sensitive());

        let prefixed = authorization_value(&SecretString::from("Bearer abc".to_string())).unwrap();
        assert_eq!(prefixed.to_str().unwrap(), "Bearer abc");

        assert!(authorization_value(&SecretString::from("bad\ntoken".to_string())).is_err());
    }
}
