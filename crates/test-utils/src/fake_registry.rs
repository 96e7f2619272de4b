use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use tracing::debug;

use sd_cmd::errors::{Result, SdCmdError};
use sd_cmd::registry::{CommandSpec, Registry};

/// An in-memory registry that:
/// - serves specs preloaded with [`FakeRegistry::with_command`]
/// - records every lookup as `ns/name@version`
/// - resolves unknown references to `CommandNotFound`, like the real
///   registry's 404 path.
pub struct FakeRegistry {
    commands: HashMap<(String, String, String), CommandSpec>,
    lookups: Arc<Mutex<Vec<String>>>,
}

impl FakeRegistry {
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
            lookups: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn with_command(mut self, spec: CommandSpec) -> Self {
        self.commands.insert(
            (
                spec.namespace.clone(),
                spec.name.clone(),
                spec.version.clone(),
            ),
            spec,
        );
        self
    }

    /// Shared handle to the recorded lookups.
    pub fn lookups(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.lookups)
    }
}

impl Default for FakeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry for FakeRegistry {
    fn get_command<'a>(
        &'a self,
        namespace: &'a str,
        name: &'a str,
        version: &'a str,
    ) -> Pin<Box<dyn Future<Output = Result<CommandSpec>> + Send + 'a>> {
        Box::pin(async move {
            debug!(namespace, name, version, "fake registry lookup");
            self.lookups
                .lock()
                .unwrap()
                .push(format!("{namespace}/{name}@{version}"));

            match self.commands.get(&(
                namespace.to_string(),
                name.to_string(),
                version.to_string(),
            )) {
                Some(spec) => Ok(spec.clone()),
                None => Err(SdCmdError::CommandNotFound {
                    namespace: namespace.to_string(),
                    name: name.to_string(),
                    version: version.to_string(),
                }),
            }
        })
    }
}
