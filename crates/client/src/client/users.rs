//! Profile methods for [`SentinelClient`].

use secrecy::SecretString;

use crate::client::SentinelClient;
use crate::endpoints;
use crate::error::Result;

impl SentinelClient {
    /// Change the signed-in user's password.
    pub async fn update_password(&self, password: &SecretString) -> Result<Option<String>> {
        endpoints::update_password(&self.http, &self.base_url, password, self.metrics.as_ref())
            .await
    }
}
