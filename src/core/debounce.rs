use std::time::Duration;
use tokio::task::JoinHandle;

/// Default quiet period before a search notification fires.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(300);

/// Trailing-edge debounce timer.
///
/// Each `schedule` aborts whatever was pending and starts a fresh countdown,
/// so only the last call of a burst runs. Dropping the debouncer aborts the
/// pending task: a callback never runs after its owner is gone.
///
/// `schedule` spawns onto the current tokio runtime and must be called from
/// within one.
#[derive(Debug)]
pub struct Debouncer {
    delay: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn schedule<F>(&mut self, callback: F)
    where
        F: FnOnce() + Send + 'static,
    {
        if self.cancel() {
            tracing::trace!("Debounce timer reset");
        }
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback();
        }));
    }

    /// Aborts the pending callback. Returns true if one was still waiting.
    pub fn cancel(&mut self) -> bool {
        match self.pending.take() {
            Some(handle) => {
                let was_waiting = !handle.is_finished();
                handle.abort();
                was_waiting
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .map(|handle| !handle.is_finished())
            .unwrap_or(false)
    }
}

impl Default for Debouncer {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE)
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        if self.cancel() {
            tracing::debug!("Pending debounced callback cancelled on teardown");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn counter() -> (Arc<AtomicUsize>, impl Fn() -> Box<dyn FnOnce() + Send>) {
        let fired = Arc::new(AtomicUsize::new(0));
        let handle = fired.clone();
        let make = move || {
            let fired = handle.clone();
            Box::new(move || {
                fired.fetch_add(1, Ordering::SeqCst);
            }) as Box<dyn FnOnce() + Send>
        };
        (fired, make)
    }

    #[tokio::test(start_paused = true)]
    async fn test_fires_once_after_quiet_period() {
        let (fired, make) = counter();
        let mut debouncer = Debouncer::default();

        debouncer.schedule(make());
        tokio::time::sleep(Duration::from_millis(299)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
        assert!(debouncer.is_pending());

        tokio::time::sleep(Duration::from_millis(2)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
        assert!(!debouncer.is_pending());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reschedule_resets_the_timer() {
        let (fired, make) = counter();
        let mut debouncer = Debouncer::new(Duration::from_millis(300));

        debouncer.schedule(make());
        tokio::time::sleep(Duration::from_millis(200)).await;
        debouncer.schedule(make());
        tokio::time::sleep(Duration::from_millis(200)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_callback() {
        let (fired, make) = counter();
        let mut debouncer = Debouncer::default();
        debouncer.schedule(make());
        drop(debouncer);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(fired.load(Ordering::SeqCst), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_reports_whether_something_was_waiting() {
        let (_fired, make) = counter();
        let mut debouncer = Debouncer::default();
        assert!(!debouncer.cancel());
        debouncer.schedule(make());
        assert!(debouncer.cancel());
        assert!(!debouncer.is_pending());
    }
}
