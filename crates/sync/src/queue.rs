use std::{
    collections::VecDeque,
    fs,
    io::{self, Write},
    path::PathBuf,
    sync::{Arc, Mutex, MutexGuard, PoisonError},
};

use chrono::{DateTime, Utc};
use log::{debug, error, info, warn};
use serde::{Deserialize, Serialize};
use tokio::time::{Instant, sleep_until, timeout};
use uuid::Uuid;

use crate::{Envelope, SyncConfig, Transport, TransportError, check_reply};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncQueueEntry {
    pub id: Uuid,
    pub enqueued_at: DateTime<Utc>,
    pub envelope: Envelope,
}

impl SyncQueueEntry {
    #[must_use]
    pub fn new(envelope: Envelope) -> Self {
        Self {
            id: Uuid::new_v4(),
            enqueued_at: Utc::now(),
            envelope,
        }
    }
}

/// Persistence of the queued entries across restarts.
pub trait QueueStore: Send + Sync {
    fn load(&self) -> Result<Vec<SyncQueueEntry>, StoreError>;
    fn save(&self, entries: &[SyncQueueEntry]) -> Result<(), StoreError>;
}

#[derive(thiserror::Error, Debug)]
pub enum StoreError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Vec<SyncQueueEntry>>,
}

impl QueueStore for MemoryStore {
    fn load(&self) -> Result<Vec<SyncQueueEntry>, StoreError> {
        Ok(lock(&self.entries).clone())
    }

    fn save(&self, entries: &[SyncQueueEntry]) -> Result<(), StoreError> {
        *lock(&self.entries) = entries.to_vec();
        Ok(())
    }
}

/// Stores the entries as a JSON array in a single file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl QueueStore for JsonFileStore {
    fn load(&self) -> Result<Vec<SyncQueueEntry>, StoreError> {
        match fs::read_to_string(&self.path) {
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(vec![]),
            Err(err) => Err(err.into()),
        }
    }

    fn save(&self, entries: &[SyncQueueEntry]) -> Result<(), StoreError> {
        let tmp = self.path.with_extension("tmp");
        let mut file = fs::File::create(&tmp)?;
        file.write_all(serde_json::to_string(entries)?.as_bytes())?;
        file.sync_all()?;
        fs::rename(tmp, &self.path)?;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrainTrigger {
    Enqueue,
    Reachability,
    Manual,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DrainOutcome {
    Completed { sent: usize },
    Interrupted { sent: usize, error: TransportError },
    Skipped(SkipReason),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    InProgress,
    Empty,
    Unreachable,
    CoolingDown,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SyncStatus {
    pub pending: usize,
    pub last_error: Option<String>,
}

#[derive(Debug, Default)]
struct State {
    entries: VecDeque<SyncQueueEntry>,
    last_failure: Option<(Instant, TransportError)>,
}

/// Bounded outbox that delivers envelopes to the peer in enqueue order.
///
/// Entries stay queued until the peer confirmed their receipt. When the queue exceeds its
/// capacity, the oldest entries are dropped.
pub struct SyncQueue<T: Transport, S: QueueStore> {
    transport: Arc<T>,
    store: S,
    config: SyncConfig,
    state: Mutex<State>,
    drain_guard: tokio::sync::Mutex<()>,
}

impl<T: Transport, S: QueueStore> SyncQueue<T, S> {
    pub fn new(transport: Arc<T>, store: S, config: SyncConfig) -> Self {
        let mut entries = match store.load() {
            Ok(entries) => VecDeque::from(entries),
            Err(err) => {
                error!("failed to load sync queue: {err}");
                VecDeque::new()
            }
        };
        while entries.len() > config.capacity() {
            entries.pop_front();
        }
        if !entries.is_empty() {
            info!("restored {} queued messages", entries.len());
        }

        Self {
            transport,
            store,
            config,
            state: Mutex::new(State {
                entries,
                last_failure: None,
            }),
            drain_guard: tokio::sync::Mutex::new(()),
        }
    }

    #[must_use]
    pub fn config(&self) -> SyncConfig {
        self.config
    }

    /// Adds an envelope without trying to send it.
    pub fn push(&self, envelope: Envelope) -> Uuid {
        let entry = SyncQueueEntry::new(envelope);
        let id = entry.id;
        let mut state = self.state();
        state.entries.push_back(entry);
        while state.entries.len() > self.config.capacity() {
            if let Some(evicted) = state.entries.pop_front() {
                warn!(
                    "sync queue full, dropping {} message {}",
                    evicted.envelope.kind(),
                    evicted.id
                );
            }
        }
        self.persist(&state.entries);
        id
    }

    /// Adds an envelope and tries to send all queued entries.
    pub async fn enqueue(&self, envelope: Envelope) -> DrainOutcome {
        self.push(envelope);
        self.drain(DrainTrigger::Enqueue).await
    }

    /// Sends the queued entries one by one until the queue is empty or a send fails.
    pub async fn drain(&self, trigger: DrainTrigger) -> DrainOutcome {
        let Ok(_guard) = self.drain_guard.try_lock() else {
            debug!("sync queue drain already in progress");
            return DrainOutcome::Skipped(SkipReason::InProgress);
        };

        if self.state().entries.is_empty() {
            return DrainOutcome::Skipped(SkipReason::Empty);
        }

        if trigger == DrainTrigger::Reachability && self.cooling_down() {
            debug!("skipping sync queue drain during retry cooldown");
            return DrainOutcome::Skipped(SkipReason::CoolingDown);
        }

        if !self.transport.is_reachable() {
            debug!("skipping sync queue drain, peer unreachable");
            return DrainOutcome::Skipped(SkipReason::Unreachable);
        }

        let mut sent = 0;
        while let Some(entry) = self.front() {
            let result = match timeout(
                self.config.send_timeout(),
                self.transport.send(entry.envelope.clone()),
            )
            .await
            {
                Ok(result) => result.and_then(check_reply),
                Err(_) => Err(TransportError::Timeout),
            };

            match result {
                Ok(_) => {
                    self.remove(entry.id);
                    sent += 1;
                }
                Err(err) => {
                    if err.is_no_connection() {
                        debug!("failed to send {} message: {err}", entry.envelope.kind());
                    } else {
                        error!("failed to send {} message: {err}", entry.envelope.kind());
                    }
                    self.state().last_failure = Some((Instant::now(), err.clone()));
                    return DrainOutcome::Interrupted { sent, error: err };
                }
            }
        }

        self.state().last_failure = None;
        if sent > 0 {
            info!("sent {sent} queued messages");
        }

        DrainOutcome::Completed { sent }
    }

    /// Drains the queue whenever the peer becomes reachable.
    ///
    /// While the peer stays reachable after a failed drain, the drain is retried once the
    /// cooldown has passed. Runs until the transport drops its reachability channel.
    pub async fn watch_reachability(&self) {
        let mut reachability = self.transport.reachability();
        loop {
            let reachable = *reachability.borrow_and_update();
            let retry_at = if reachable {
                self.drain(DrainTrigger::Reachability).await;
                self.retry_at()
            } else {
                None
            };

            let changed = match retry_at {
                Some(deadline) => tokio::select! {
                    changed = reachability.changed() => changed,
                    () = sleep_until(deadline) => Ok(()),
                },
                None => reachability.changed().await,
            };
            if changed.is_err() {
                debug!("reachability channel closed");
                return;
            }
        }
    }

    pub fn clear(&self) {
        let mut state = self.state();
        state.entries.clear();
        state.last_failure = None;
        self.persist(&state.entries);
    }

    #[must_use]
    pub fn entries(&self) -> Vec<SyncQueueEntry> {
        self.state().entries.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.state().entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state().entries.is_empty()
    }

    #[must_use]
    pub fn status(&self) -> SyncStatus {
        let state = self.state();
        SyncStatus {
            pending: state.entries.len(),
            last_error: state
                .last_failure
                .as_ref()
                .map(|(_, err)| err.to_string()),
        }
    }

    fn state(&self) -> MutexGuard<'_, State> {
        lock(&self.state)
    }

    fn front(&self) -> Option<SyncQueueEntry> {
        self.state().entries.front().cloned()
    }

    fn remove(&self, id: Uuid) {
        let mut state = self.state();
        state.entries.retain(|e| e.id != id);
        self.persist(&state.entries);
    }

    fn retry_at(&self) -> Option<Instant> {
        let state = self.state();
        if state.entries.is_empty() {
            return None;
        }
        state
            .last_failure
            .as_ref()
            .map(|(time, _)| *time + self.config.retry_cooldown())
    }

    fn cooling_down(&self) -> bool {
        self.state()
            .last_failure
            .as_ref()
            .is_some_and(|(time, _)| time.elapsed() < self.config.retry_cooldown())
    }

    fn persist(&self, entries: &VecDeque<SyncQueueEntry>) {
        let entries = entries.iter().cloned().collect::<Vec<_>>();
        if let Err(err) = self.store.save(&entries) {
            error!("failed to persist sync queue: {err}");
        }
    }
}

fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use pretty_assertions::assert_eq;

    use crate::Message;
    use crate::tests::transport::FakeTransport;

    use super::*;

    fn envelope(timestamp: u32) -> Envelope {
        Envelope {
            message: Message::PingTest,
            timestamp: f64::from(timestamp),
        }
    }

    fn timestamps(envelopes: impl IntoIterator<Item = Envelope>) -> Vec<f64> {
        envelopes.into_iter().map(|e| e.timestamp).collect()
    }

    fn queue(transport: &Arc<FakeTransport>) -> SyncQueue<FakeTransport, MemoryStore> {
        SyncQueue::new(
            transport.clone(),
            MemoryStore::default(),
            SyncConfig::default(),
        )
    }

    #[tokio::test]
    async fn test_enqueue_evicts_oldest() {
        let transport = Arc::new(FakeTransport::new(false));
        let queue = queue(&transport);

        for i in 1..=60 {
            assert_eq!(
                queue.enqueue(envelope(i)).await,
                DrainOutcome::Skipped(SkipReason::Unreachable)
            );
        }

        assert_eq!(queue.len(), 50);
        assert_eq!(
            timestamps(queue.entries().into_iter().map(|e| e.envelope)),
            (11..=60).map(f64::from).collect::<Vec<_>>()
        );
        assert_eq!(transport.sent(), vec![]);
    }

    #[tokio::test]
    async fn test_enqueue_sends_immediately() {
        let transport = Arc::new(FakeTransport::new(true));
        let queue = queue(&transport);

        assert_eq!(
            queue.enqueue(envelope(1)).await,
            DrainOutcome::Completed { sent: 1 }
        );
        assert!(queue.is_empty());
        assert_eq!(timestamps(transport.sent()), vec![1.0]);
    }

    #[tokio::test]
    async fn test_drain_in_enqueue_order() {
        let transport = Arc::new(FakeTransport::new(true));
        let queue = queue(&transport);
        for i in 1..=3 {
            queue.push(envelope(i));
        }

        assert_eq!(
            queue.drain(DrainTrigger::Manual).await,
            DrainOutcome::Completed { sent: 3 }
        );
        assert_eq!(timestamps(transport.sent()), vec![1.0, 2.0, 3.0]);
        assert_eq!(
            queue.drain(DrainTrigger::Manual).await,
            DrainOutcome::Skipped(SkipReason::Empty)
        );
    }

    #[tokio::test]
    async fn test_failed_send_keeps_entry() {
        let transport = Arc::new(FakeTransport::new(true));
        let queue = queue(&transport);
        queue.push(envelope(1));
        queue.push(envelope(2));
        transport.fail_next(TransportError::Rejected("busy".to_string()));

        assert_eq!(
            queue.drain(DrainTrigger::Manual).await,
            DrainOutcome::Interrupted {
                sent: 0,
                error: TransportError::Rejected("busy".to_string())
            }
        );
        assert_eq!(
            queue.status(),
            SyncStatus {
                pending: 2,
                last_error: Some("rejected by peer: busy".to_string())
            }
        );

        assert_eq!(
            queue.drain(DrainTrigger::Manual).await,
            DrainOutcome::Completed { sent: 2 }
        );
        assert_eq!(queue.status(), SyncStatus::default());
        assert_eq!(timestamps(transport.sent()), vec![1.0, 1.0, 2.0]);
    }

    #[tokio::test]
    async fn test_negative_reply_keeps_entry() {
        let transport = Arc::new(FakeTransport::new(true));
        let queue = queue(&transport);
        transport.reply_next(crate::Reply::error("decode failed"));

        assert_eq!(
            queue.enqueue(envelope(1)).await,
            DrainOutcome::Interrupted {
                sent: 0,
                error: TransportError::Rejected("decode failed".to_string())
            }
        );
        assert_eq!(queue.len(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_timeout_keeps_entry() {
        let transport = Arc::new(FakeTransport::new(true));
        let queue = queue(&transport);
        transport.set_delay(Duration::from_secs(30));

        assert_eq!(
            queue.enqueue(envelope(1)).await,
            DrainOutcome::Interrupted {
                sent: 0,
                error: TransportError::Timeout
            }
        );
        assert_eq!(queue.len(), 1);
        assert_eq!(queue.status().last_error, Some("no reply within timeout".to_string()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_concurrent_drains_are_coalesced() {
        let transport = Arc::new(FakeTransport::new(true));
        let queue = queue(&transport);
        queue.push(envelope(1));
        queue.push(envelope(2));
        transport.set_delay(Duration::from_secs(1));

        let (first, second) = tokio::join!(
            queue.drain(DrainTrigger::Manual),
            queue.drain(DrainTrigger::Reachability)
        );

        assert_eq!(first, DrainOutcome::Completed { sent: 2 });
        assert_eq!(second, DrainOutcome::Skipped(SkipReason::InProgress));
        assert_eq!(timestamps(transport.sent()), vec![1.0, 2.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cooldown_after_failure() {
        let transport = Arc::new(FakeTransport::new(true));
        let queue = queue(&transport);
        transport.fail_next(TransportError::Other("session inactive".to_string()));
        queue.enqueue(envelope(1)).await;

        assert_eq!(
            queue.drain(DrainTrigger::Reachability).await,
            DrainOutcome::Skipped(SkipReason::CoolingDown)
        );

        tokio::time::advance(Duration::from_secs(6)).await;

        assert_eq!(
            queue.drain(DrainTrigger::Reachability).await,
            DrainOutcome::Completed { sent: 1 }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_cooldown_does_not_block_manual_drain() {
        let transport = Arc::new(FakeTransport::new(true));
        let queue = queue(&transport);
        transport.fail_next(TransportError::Other("session inactive".to_string()));
        queue.enqueue(envelope(1)).await;

        assert_eq!(
            queue.drain(DrainTrigger::Manual).await,
            DrainOutcome::Completed { sent: 1 }
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_watch_reachability() {
        let transport = Arc::new(FakeTransport::new(false));
        let queue = queue(&transport);
        queue.enqueue(envelope(1)).await;
        queue.enqueue(envelope(2)).await;

        let (watched, ()) = tokio::join!(
            timeout(Duration::from_secs(1), queue.watch_reachability()),
            async {
                tokio::time::sleep(Duration::from_millis(10)).await;
                transport.set_reachable(true);
            }
        );

        assert!(watched.is_err());
        assert!(queue.is_empty());
        assert_eq!(timestamps(transport.sent()), vec![1.0, 2.0]);
    }

    #[tokio::test(start_paused = true)]
    async fn test_watch_reachability_retries_after_cooldown() {
        let transport = Arc::new(FakeTransport::new(true));
        let queue = queue(&transport);
        transport.fail_next(TransportError::Other("session inactive".to_string()));
        queue.enqueue(envelope(1)).await;
        assert_eq!(queue.len(), 1);

        let (watched, ()) = tokio::join!(
            timeout(Duration::from_secs(120), queue.watch_reachability()),
            async {
                transport.set_reachable(false);
                tokio::time::sleep(Duration::from_secs(1)).await;
                transport.set_reachable(true);
            }
        );

        assert!(watched.is_err());
        assert!(queue.is_empty());
        assert_eq!(timestamps(transport.sent()), vec![1.0, 1.0]);
    }

    #[tokio::test]
    async fn test_clear() {
        let transport = Arc::new(FakeTransport::new(false));
        let queue = queue(&transport);
        queue.enqueue(envelope(1)).await;
        queue.clear();
        assert_eq!(queue.status(), SyncStatus::default());
    }

    #[test]
    fn test_queue_is_restored_from_store() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("queue.json");
        let transport = Arc::new(FakeTransport::new(false));

        let queue = SyncQueue::new(
            transport.clone(),
            JsonFileStore::new(&path),
            SyncConfig::default(),
        );
        queue.push(envelope(1));
        queue.push(envelope(2));
        let entries = queue.entries();
        drop(queue);

        let queue = SyncQueue::new(transport, JsonFileStore::new(&path), SyncConfig::default());
        assert_eq!(queue.entries(), entries);
    }

    #[test]
    fn test_restored_queue_is_bounded() {
        let store = MemoryStore::default();
        store
            .save(
                &(1..=5)
                    .map(|i| SyncQueueEntry::new(envelope(i)))
                    .collect::<Vec<_>>(),
            )
            .unwrap();

        let queue = SyncQueue::new(
            Arc::new(FakeTransport::new(false)),
            store,
            SyncConfig {
                queue_capacity: 3,
                ..SyncConfig::default()
            },
        );
        assert_eq!(
            timestamps(queue.entries().into_iter().map(|e| e.envelope)),
            vec![3.0, 4.0, 5.0]
        );
    }

    #[test]
    fn test_json_file_store() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("queue.json"));
        assert_eq!(store.load().unwrap(), vec![]);

        let entries = vec![SyncQueueEntry::new(envelope(7))];
        store.save(&entries).unwrap();
        assert_eq!(store.load().unwrap(), entries);
    }

    #[test]
    fn test_corrupt_store_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("queue.json");
        fs::write(&path, "{").unwrap();

        assert!(matches!(
            JsonFileStore::new(&path).load(),
            Err(StoreError::Json(_))
        ));

        let queue = SyncQueue::new(
            Arc::new(FakeTransport::new(false)),
            JsonFileStore::new(&path),
            SyncConfig::default(),
        );
        assert!(queue.is_empty());
    }
}
