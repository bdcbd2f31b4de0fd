//! Delayed scroll-to-selected.
//!
//! The list scrolls to the selected row a short while after it is built, so
//! the host has finished laying it out. The wait runs as a tokio task that
//! only sends a request back over a channel; the widget applies requests on
//! its own thread. Each schedule replaces the previous one, and dropping the
//! scheduler cancels whatever is still pending.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::error::DropdownError;

/// Default settle time before scrolling to the selected row.
pub const DEFAULT_SCROLL_DELAY: Duration = Duration::from_millis(400);

/// A fired scroll request: the selected item's group and its index within
/// that group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScrollRequest {
    pub group_id: String,
    pub item_index: usize,
}

#[derive(Debug)]
pub struct ScrollScheduler {
    root: CancellationToken,
    pending: Option<CancellationToken>,
    /// Bumped on every schedule and cancel; requests tagged with an older
    /// generation are stale.
    generation: u64,
    tx: mpsc::UnboundedSender<(u64, ScrollRequest)>,
    rx: mpsc::UnboundedReceiver<(u64, ScrollRequest)>,
}

impl Default for ScrollScheduler {
    fn default() -> Self {
        Self::new()
    }
}

impl ScrollScheduler {
    pub fn new() -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            root: CancellationToken::new(),
            pending: None,
            generation: 0,
            tx,
            rx,
        }
    }

    /// Deliver `request` after `delay`, replacing any pending request.
    pub fn schedule(&mut self, request: ScrollRequest, delay: Duration) -> Result<(), DropdownError> {
        let handle = tokio::runtime::Handle::try_current().map_err(|_| DropdownError::NoRuntime)?;

        self.cancel();
        let token = self.root.child_token();
        self.pending = Some(token.clone());
        let generation = self.generation;

        let tx = self.tx.clone();
        log::debug!(
            "ScrollScheduler: scroll to {}[{}] in {:?}",
            request.group_id,
            request.item_index,
            delay
        );
        handle.spawn(async move {
            tokio::select! {
                _ = token.cancelled() => {}
                _ = tokio::time::sleep(delay) => {
                    // Receiver gone means the widget was torn down.
                    let _ = tx.send((generation, request));
                }
            }
        });
        Ok(())
    }

    /// Drop the pending request, if any, along with anything that already
    /// fired but was not taken.
    pub fn cancel(&mut self) {
        if let Some(token) = self.pending.take() {
            token.cancel();
        }
        self.generation = self.generation.wrapping_add(1);
        while self.rx.try_recv().is_ok() {}
    }

    pub fn has_pending(&self) -> bool {
        self.pending.as_ref().is_some_and(|t| !t.is_cancelled())
    }

    /// Take a fired request without waiting.
    pub fn try_recv(&mut self) -> Option<ScrollRequest> {
        while let Ok((generation, request)) = self.rx.try_recv() {
            if let Some(request) = self.accept(generation, request) {
                return Some(request);
            }
        }
        None
    }

    /// Wait for the next fired request.
    pub async fn recv(&mut self) -> Option<ScrollRequest> {
        loop {
            let (generation, request) = self.rx.recv().await?;
            if let Some(request) = self.accept(generation, request) {
                return Some(request);
            }
        }
    }

    fn accept(&mut self, generation: u64, request: ScrollRequest) -> Option<ScrollRequest> {
        if generation != self.generation {
            log::debug!("ScrollScheduler: dropping stale scroll to {}", request.group_id);
            return None;
        }
        self.pending = None;
        Some(request)
    }
}

impl Drop for ScrollScheduler {
    fn drop(&mut self) {
        self.root.cancel();
    }
}
