use std::collections::HashSet;
use std::sync::{Arc, Mutex};

use crate::core::error::{AppError, Result};

/// Tracks admin form submissions that are still being processed
///
/// A form instance may have at most one submission in flight. Requests that
/// carry no instance id are not tracked.
#[derive(Debug, Clone, Default)]
pub struct SubmissionTracker {
    in_flight: Arc<Mutex<HashSet<String>>>,
}

/// Marks a form instance busy until dropped
#[derive(Debug)]
pub struct SubmissionGuard {
    key: Option<String>,
    in_flight: Arc<Mutex<HashSet<String>>>,
}

impl SubmissionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim `form_instance` for the duration of the returned guard
    pub fn begin(&self, form: &str, form_instance: Option<&str>) -> Result<SubmissionGuard> {
        let key = form_instance.map(|id| format!("{}:{}", form, id));

        if let Some(ref key) = key {
            let mut in_flight = self
                .in_flight
                .lock()
                .map_err(|_| AppError::Internal("Submission tracker poisoned".to_string()))?;
            if !in_flight.insert(key.clone()) {
                tracing::debug!("Rejected duplicate submission for {}", key);
                return Err(AppError::Conflict(
                    "A submission for this form is already in progress".to_string(),
                ));
            }
        }

        Ok(SubmissionGuard {
            key,
            in_flight: Arc::clone(&self.in_flight),
        })
    }

    #[cfg(test)]
    pub fn in_flight_count(&self) -> usize {
        self.in_flight.lock().map(|s| s.len()).unwrap_or(0)
    }
}

impl Drop for SubmissionGuard {
    fn drop(&mut self) {
        if let Some(key) = self.key.take() {
            if let Ok(mut in_flight) = self.in_flight.lock() {
                in_flight.remove(&key);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio_test::{assert_err, assert_ok};

    #[test]
    fn test_second_submission_rejected_while_first_in_flight() {
        let tracker = SubmissionTracker::new();
        let first = assert_ok!(tracker.begin("post", Some("form-1")));
        assert_err!(tracker.begin("post", Some("form-1")));

        // Other instances and other forms are independent
        let _other = assert_ok!(tracker.begin("post", Some("form-2")));
        let _category = assert_ok!(tracker.begin("category", Some("form-1")));

        drop(first);
        assert_ok!(tracker.begin("post", Some("form-1")));
    }

    #[test]
    fn test_untracked_submissions_never_conflict() {
        let tracker = SubmissionTracker::new();
        let _a = assert_ok!(tracker.begin("post", None));
        let _b = assert_ok!(tracker.begin("post", None));
        assert_eq!(tracker.in_flight_count(), 0);
    }
}
