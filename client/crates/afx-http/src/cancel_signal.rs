use std::sync::Arc;

use tokio::sync::watch;

/// Cancellation handle for an in-flight request.
///
/// Cloning shares the same signal. Once canceled it stays canceled.
#[derive(Clone, Debug)]
pub struct CancelSignal {
    tx: Arc<watch::Sender<bool>>,
}

impl CancelSignal {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self { tx: Arc::new(tx) }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_canceled(&self) -> bool {
        *self.tx.borrow()
    }

    /// Resolves once `cancel` has been called.
    pub async fn canceled(&self) {
        let mut rx = self.tx.subscribe();
        // The sender lives as long as `self`, so this only errors if it was dropped
        if rx.wait_for(|canceled| *canceled).await.is_err() {
            std::future::pending::<()>().await;
        }
    }
}

impl Default for CancelSignal {
    fn default() -> Self {
        Self::new()
    }
}
