//! Session methods for [`SentinelClient`].

use secrecy::SecretString;

use crate::client::SentinelClient;
use crate::endpoints;
use crate::error::Result;

impl SentinelClient {
    /// Sign in and store the session cookie.
    pub async fn sign_in(&self, username: &str, password: &SecretString) -> Result<()> {
        endpoints::sign_in(
            &self.http,
            &self.base_url,
            username,
            password,
            self.metrics.as_ref(),
        )
        .await
    }

    /// Verify the session is still valid.
    pub async fn check_session(&self) -> Result<()> {
        endpoints::check_session(&self.http, &self.base_url, self.metrics.as_ref()).await
    }

    /// Sign out and let the engine expire the session cookie.
    pub async fn sign_out(&self) -> Result<Option<String>> {
        endpoints::sign_out(&self.http, &self.base_url, self.metrics.as_ref()).await
    }
}
