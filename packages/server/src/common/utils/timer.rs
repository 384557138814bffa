//! Submission timer - minimum-delay policy for form responses.
//!
//! Every submission response waits until at least the configured minimum has
//! elapsed since handling began, bounding how quickly repeated submissions
//! can be attempted. The delay applies to success and failure alike.

use std::time::Duration;

use tokio::time::Instant;

/// Tracks when handling began and sleeps out the rest of the minimum window.
pub struct SubmissionTimer {
    started: Instant,
    minimum: Duration,
}

impl SubmissionTimer {
    /// Start the timer. Call this before any validation or store access.
    pub fn start(minimum: Duration) -> Self {
        Self {
            started: Instant::now(),
            minimum,
        }
    }

    /// Wait until the minimum window has elapsed since `start`.
    ///
    /// Returns immediately if handling already took longer than the minimum.
    pub async fn delay(&self) {
        let elapsed = self.started.elapsed();
        if elapsed < self.minimum {
            tokio::time::sleep(self.minimum - elapsed).await;
        }
    }
}
