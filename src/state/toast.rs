//! Transient notification messages

use super::forms::NotificationSink;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// A message shown briefly in the status bar
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub created_at: Instant,
}

impl Toast {
    /// How long a toast stays visible
    const DURATION: Duration = Duration::from_millis(3000);

    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    pub fn is_expired(&self) -> bool {
        self.created_at.elapsed() >= Self::DURATION
    }
}

/// Shared toast queue; clones see the same messages
#[derive(Debug, Clone, Default)]
pub struct ToastQueue {
    inner: Arc<Mutex<VecDeque<Toast>>>,
}

impl ToastQueue {
    /// Oldest messages are dropped past this length
    const MAX_LEN: usize = 5;

    pub fn push(&self, message: impl Into<String>) {
        if let Ok(mut queue) = self.inner.lock() {
            queue.push_back(Toast::new(message));
            while queue.len() > Self::MAX_LEN {
                queue.pop_front();
            }
        }
    }

    /// Message to display now, dropping expired ones first
    pub fn current(&self) -> Option<String> {
        let mut queue = self.inner.lock().ok()?;
        while queue.front().is_some_and(Toast::is_expired) {
            queue.pop_front();
        }
        queue.front().map(|toast| toast.message.clone())
    }

    /// Skip the message currently on screen
    pub fn dismiss(&self) {
        if let Ok(mut queue) = self.inner.lock() {
            queue.pop_front();
        }
    }

    pub fn len(&self) -> usize {
        self.inner.lock().map(|queue| queue.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for ToastQueue {
    fn notify(&self, message: &str) {
        tracing::debug!("Toast: {message}");
        self.push(message);
    }
}
