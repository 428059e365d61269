//! Trailing-edge debouncer.
//!
//! A `Debouncer` owns at most one pending timer. Every `schedule` call
//! aborts the pending timer and arms a new one with the latest value, so a
//! burst of calls produces a single callback once input has been quiet for
//! `delay`.

use std::fmt;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;

/// Coalesces rapid calls into one delayed callback with the most recent value.
///
/// `schedule` spawns onto the current Tokio runtime and must be called from
/// within one.
pub struct Debouncer<T> {
    delay: Duration,
    callback: Arc<dyn Fn(T) + Send + Sync>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new(delay: Duration, callback: impl Fn(T) + Send + Sync + 'static) -> Self {
        Self {
            delay,
            callback: Arc::new(callback),
            pending: Mutex::new(None),
        }
    }

    #[inline]
    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Replace any pending call with `value`, firing after `delay` of quiet.
    pub fn schedule(&self, value: T) {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let callback = Arc::clone(&self.callback);
        let delay = self.delay;
        *pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            callback(value);
        }));
    }
}

impl<T> fmt::Debug for Debouncer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Debouncer")
            .field("delay", &self.delay)
            .finish_non_exhaustive()
    }
}

/// Wrap `callback` so that bursts of calls collapse into one, `delay` after the last.
///
/// # Example
///
/// ```no_run
/// use std::time::Duration;
/// use clubroster_engine::debounce::debounce;
///
/// # async fn demo() {
/// let on_search = debounce(|text: String| println!("searching for {text}"), Duration::from_millis(300));
/// on_search.schedule("a".to_string());
/// on_search.schedule("ar".to_string());
/// on_search.schedule("art".to_string()); // only this one prints
/// # }
/// ```
pub fn debounce<T, F>(callback: F, delay: Duration) -> Debouncer<T>
where
    T: Send + 'static,
    F: Fn(T) + Send + Sync + 'static,
{
    Debouncer::new(delay, callback)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    fn recorder() -> (Arc<Mutex<Vec<String>>>, impl Fn(String) + Send + Sync + 'static) {
        let calls = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&calls);
        (calls, move |value: String| sink.lock().unwrap().push(value))
    }

    #[tokio::test(start_paused = true)]
    async fn burst_fires_once_with_last_value() {
        let (calls, callback) = recorder();
        let debounced = debounce(callback, Duration::from_millis(300));

        debounced.schedule("a".to_string());
        sleep(Duration::from_millis(100)).await;
        debounced.schedule("ar".to_string());
        sleep(Duration::from_millis(100)).await;
        debounced.schedule("art".to_string());

        sleep(Duration::from_millis(250)).await;
        assert!(calls.lock().unwrap().is_empty());

        sleep(Duration::from_millis(100)).await;
        assert_eq!(*calls.lock().unwrap(), vec!["art".to_string()]);
    }

    #[tokio::test(start_paused = true)]
    async fn quiet_gaps_fire_separately() {
        let (calls, callback) = recorder();
        let debounced = debounce(callback, Duration::from_millis(300));

        debounced.schedule("chess".to_string());
        sleep(Duration::from_millis(400)).await;
        debounced.schedule("robotics".to_string());
        sleep(Duration::from_millis(400)).await;

        assert_eq!(
            *calls.lock().unwrap(),
            vec!["chess".to_string(), "robotics".to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn nothing_fires_before_delay() {
        let (calls, callback) = recorder();
        let debounced = Debouncer::new(Duration::from_millis(300), callback);

        debounced.schedule("a".to_string());
        sleep(Duration::from_millis(299)).await;
        assert!(calls.lock().unwrap().is_empty());
        assert_eq!(debounced.delay(), Duration::from_millis(300));
    }

    #[tokio::test(start_paused = true)]
    async fn each_call_restarts_the_window() {
        let (calls, callback) = recorder();
        let debounced = debounce(callback, Duration::from_millis(300));

        for text in ["r", "ro", "rob", "robo"] {
            debounced.schedule(text.to_string());
            sleep(Duration::from_millis(200)).await;
        }
        // 800ms have passed since the first call but only 200ms since the last
        assert!(calls.lock().unwrap().is_empty());

        sleep(Duration::from_millis(200)).await;
        assert_eq!(*calls.lock().unwrap(), vec!["robo".to_string()]);
    }
}
