//! Directory of live clients, one per API key.
//!
//! An explicitly constructed, owned object: embedders hold it (or several,
//! e.g. one per test) rather than reaching through a process-wide global.
//! Creation is serialized under the registry lock so two concurrent
//! `create` calls for the same key cannot both succeed.

use std::collections::HashMap;
use std::sync::Arc;

use parking_lot::Mutex;

use crate::client::WeatherClient;
use crate::types::{ClientConfig, ClientMode};
use crate::{Result, WeatherError};

/// Registry mapping each API key to exactly one live [`WeatherClient`].
pub struct WeatherRegistry {
    config: ClientConfig,
    clients: Mutex<HashMap<String, Arc<WeatherClient>>>,
}

impl WeatherRegistry {
    /// Create an empty registry using the default [`ClientConfig`].
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    /// Create an empty registry whose clients share the given configuration.
    pub fn with_config(config: ClientConfig) -> Self {
        Self {
            config,
            clients: Mutex::new(HashMap::new()),
        }
    }

    /// Create and register a client for `api_key`.
    ///
    /// Rejects a blank key and a key that already has a live client, both
    /// with [`WeatherError::Configuration`]; a rejected call leaves the
    /// registry unchanged.
    ///
    /// # Panics
    ///
    /// [`ClientMode::Polling`] spawns the refresh task and therefore
    /// requires a tokio runtime context.
    pub fn create(
        &self,
        api_key: impl Into<String>,
        mode: ClientMode,
    ) -> Result<Arc<WeatherClient>> {
        let api_key = api_key.into();
        let mut clients = self.clients.lock();

        if clients.contains_key(&api_key) {
            return Err(WeatherError::Configuration(
                "a client for this API key already exists".to_string(),
            ));
        }

        let client = Arc::new(WeatherClient::new(
            api_key.clone(),
            mode,
            self.config.clone(),
        )?);
        clients.insert(api_key, Arc::clone(&client));
        Ok(client)
    }

    /// The live client for `api_key`, if one is registered.
    pub fn get(&self, api_key: &str) -> Option<Arc<WeatherClient>> {
        self.clients.lock().get(api_key).cloned()
    }

    /// Whether a client is registered for `api_key`.
    pub fn contains(&self, api_key: &str) -> bool {
        self.clients.lock().contains_key(api_key)
    }

    /// Number of registered clients.
    pub fn count(&self) -> usize {
        self.clients.lock().len()
    }

    /// Detach and shut down the client for `api_key`. No-op if absent.
    pub async fn remove(&self, api_key: &str) {
        let removed = self.clients.lock().remove(api_key);
        if let Some(client) = removed {
            client.shutdown().await;
        }
    }

    /// Shut down every registered client and empty the registry.
    pub async fn shutdown_all(&self) {
        let drained: Vec<_> = self.clients.lock().drain().collect();
        for (_, client) in drained {
            client.shutdown().await;
        }
    }
}

impl Default for WeatherRegistry {
    fn default() -> Self {
        Self::new()
    }
}
