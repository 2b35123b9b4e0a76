use std::{
    collections::VecDeque,
    sync::{Mutex, PoisonError},
    time::Duration,
};

use tokio::sync::watch;

use crate::{Envelope, Handler, Reply, Transport, TransportError};

/// Transport that records every delivery attempt and answers with scripted replies.
pub struct FakeTransport {
    reachable: watch::Sender<bool>,
    sent: Mutex<Vec<Envelope>>,
    replies: Mutex<VecDeque<Result<Reply, TransportError>>>,
    delay: Mutex<Option<Duration>>,
    handler: Mutex<Option<Handler>>,
}

impl FakeTransport {
    pub fn new(reachable: bool) -> Self {
        Self {
            reachable: watch::channel(reachable).0,
            sent: Mutex::new(vec![]),
            replies: Mutex::new(VecDeque::new()),
            delay: Mutex::new(None),
            handler: Mutex::new(None),
        }
    }

    pub fn set_reachable(&self, reachable: bool) {
        self.reachable.send_replace(reachable);
    }

    pub fn fail_next(&self, error: TransportError) {
        self.replies.lock().unwrap().push_back(Err(error));
    }

    pub fn reply_next(&self, reply: Reply) {
        self.replies.lock().unwrap().push_back(Ok(reply));
    }

    pub fn set_delay(&self, delay: Duration) {
        *self.delay.lock().unwrap() = Some(delay);
    }

    pub fn sent(&self) -> Vec<Envelope> {
        self.sent.lock().unwrap().clone()
    }

    /// Passes an envelope from the peer to the registered handler.
    pub fn deliver(&self, envelope: Envelope) -> Option<Reply> {
        let handler = self
            .handler
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone();
        handler.map(|handler| handler(envelope))
    }
}

impl Transport for FakeTransport {
    fn is_reachable(&self) -> bool {
        *self.reachable.borrow()
    }

    fn reachability(&self) -> watch::Receiver<bool> {
        self.reachable.subscribe()
    }

    async fn send(&self, envelope: Envelope) -> Result<Reply, TransportError> {
        if !self.is_reachable() {
            return Err(TransportError::Unreachable);
        }

        self.sent.lock().unwrap().push(envelope);

        let delay = *self.delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let reply = self.replies.lock().unwrap().pop_front();
        reply.unwrap_or_else(|| Ok(Reply::received()))
    }

    fn on_receive(&self, handler: Handler) {
        *self.handler.lock().unwrap() = Some(handler);
    }
}
