// src/registry/api.rs

//! Registry lookup: trait plus the HTTP implementation.
//!
//! The executor talks to a `Registry` instead of a concrete HTTP client.
//! This makes it easy to swap in a fake registry in tests while keeping the
//! production client here.

use std::future::Future;
use std::pin::Pin;

use reqwest::{Client, StatusCode};
use tracing::debug;

use crate::errors::{Result, SdCmdError};
use crate::registry::model::CommandSpec;

/// Trait abstracting how a command reference is resolved to a specification.
///
/// Production code uses [`HttpRegistry`]; tests can provide their own
/// implementation that doesn't touch the network.
pub trait Registry: Send + Sync {
    /// Resolve `(namespace, name, version)` to a [`CommandSpec`].
    ///
    /// No retries: resolution failures surface to the caller unchanged.
    fn get_command<'a>(
        &'a self,
        namespace: &'a str,
        name: &'a str,
        version: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<CommandSpec>> + Send + 'a>>;
}

/// Registry client backed by the Screwdriver REST API.
pub struct HttpRegistry {
    client: Client,
    base_url: String,
    token: String,
}

impl HttpRegistry {
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            token: token.into(),
        }
    }

    /// URL of the command resource for one reference.
    pub fn command_url(&self, namespace: &str, name: &str, version: &str) -> String {
        let base = self.base_url.trim_end_matches('/');
        format!("{base}/commands/{namespace}/{name}/{version}")
    }
}

impl Registry for HttpRegistry {
    fn get_command<'a>(
        &'a self,
        namespace: &'a str,
        name: &'a str,
        version: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<CommandSpec>> + Send + 'a>> {
        Box::pin(async move {
            let url = self.command_url(namespace, name, version);
            debug!(%url, "resolving command against registry");

            let mut request = self.client.get(&url);
            if !self.token.is_empty() {
                request = request.bearer_auth(&self.token);
            }

            let response = request.send().await?;
            match response.status() {
                StatusCode::NOT_FOUND => Err(SdCmdError::CommandNotFound {
                    namespace: namespace.to_string(),
                    name: name.to_string(),
                    version: version.to_string(),
                }),
                status if !status.is_success() => Err(SdCmdError::RegistryResponse(format!(
                    "{status} from {url}"
                ))),
                _ => Ok(response.json::<CommandSpec>().await?),
            }
        })
    }
}
