use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Cooperative cancellation for one stress stage.
///
/// Carries a soft deadline plus a manual trip wire. Workers poll
/// [`StageToken::is_cancelled`] between requests and never abort a request
/// already in flight; a worker that hits a fatal transport error calls
/// [`StageToken::cancel`] so its siblings stop at their next poll.
#[derive(Clone, Debug)]
pub struct StageToken {
    deadline: Instant,
    cancelled: Arc<AtomicBool>,
}

impl StageToken {
    #[must_use]
    pub fn with_deadline(stage_delay: Duration) -> Self {
        Self {
            deadline: Instant::now() + stage_delay,
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed) || Instant::now() >= self.deadline
    }
}
