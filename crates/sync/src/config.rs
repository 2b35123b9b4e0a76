use std::time::Duration;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SyncConfig {
    /// Maximum number of unsent entries kept in the outbox.
    pub queue_capacity: usize,
    pub send_timeout_secs: u64,
    /// Reachability changes within this period after a failed attempt do not trigger a drain.
    pub retry_cooldown_secs: u64,
}

impl SyncConfig {
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.queue_capacity.max(1)
    }

    #[must_use]
    pub fn send_timeout(&self) -> Duration {
        Duration::from_secs(self.send_timeout_secs)
    }

    #[must_use]
    pub fn retry_cooldown(&self) -> Duration {
        Duration::from_secs(self.retry_cooldown_secs)
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            queue_capacity: 50,
            send_timeout_secs: 10,
            retry_cooldown_secs: 5,
        }
    }
}
