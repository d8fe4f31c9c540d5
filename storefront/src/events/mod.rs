//! Rate limiting for UI-driven event streams.
//!
//! Search keystrokes are debounced (trailing edge) so a burst of typing
//! triggers one recompute; scroll and resize events are throttled to a
//! fixed window (leading edge, trailing value emitted at window end).
//! Each policy runs as a small forwarding task between an input and an
//! output channel and stops when the input closes or the shutdown token
//! fires. Pending values are flushed on shutdown.

use tokio::sync::mpsc;
use tokio::time::{Duration, Instant};
use tokio_util::sync::CancellationToken;

/// Trailing-edge debounce delay for search input
pub const SEARCH_DEBOUNCE_MS: u64 = 300;
/// Throttle window for scroll/resize recomputation
pub const SCROLL_THROTTLE_MS: u64 = 16;

/// Spawn a trailing-edge debounce stage.
///
/// Every received value resets the timer; only the latest value of a
/// burst is forwarded, `delay` after the burst stops.
pub fn debounce<T: Send + 'static>(
    delay: Duration,
    shutdown: CancellationToken,
) -> (mpsc::UnboundedSender<T>, mpsc::UnboundedReceiver<T>) {
    let (in_tx, mut in_rx) = mpsc::unbounded_channel::<T>();
    let (out_tx, out_rx) = mpsc::unbounded_channel::<T>();

    tokio::spawn(async move {
        let mut pending: Option<T> = None;
        let mut deadline: Option<Instant> = None;

        loop {
            let sleep_until =
                deadline.unwrap_or_else(|| Instant::now() + Duration::from_secs(3600));

            tokio::select! {
                _ = shutdown.cancelled() => {
                    if let Some(value) = pending.take() {
                        let _ = out_tx.send(value);
                    }
                    break;
                }

                _ = tokio::time::sleep_until(sleep_until), if deadline.is_some() => {
                    deadline = None;
                    if let Some(value) = pending.take()
                        && out_tx.send(value).is_err()
                    {
                        break;
                    }
                }

                received = in_rx.recv() => match received {
                    Some(value) => {
                        pending = Some(value);
                        deadline = Some(Instant::now() + delay);
                    }
                    None => {
                        if let Some(value) = pending.take() {
                            let _ = out_tx.send(value);
                        }
                        break;
                    }
                },
            }
        }
    });

    (in_tx, out_rx)
}

/// Spawn a throttle stage.
///
/// The first value of a quiet period is forwarded immediately and opens
/// a window; values arriving inside the window are coalesced into one
/// trailing emission when the window closes.
pub fn throttle<T: Send + 'static>(
    window: Duration,
    shutdown: CancellationToken,
) -> (mpsc::UnboundedSender<T>, mpsc::UnboundedReceiver<T>) {
    let (in_tx, mut in_rx) = mpsc::unbounded_channel::<T>();
    let (out_tx, out_rx) = mpsc::unbounded_channel::<T>();

    tokio::spawn(async move {
        let mut trailing: Option<T> = None;
        let mut window_end: Option<Instant> = None;

        loop {
            let sleep_until =
                window_end.unwrap_or_else(|| Instant::now() + Duration::from_secs(3600));

            tokio::select! {
                _ = shutdown.cancelled() => {
                    if let Some(value) = trailing.take() {
                        let _ = out_tx.send(value);
                    }
                    break;
                }

                _ = tokio::time::sleep_until(sleep_until), if window_end.is_some() => {
                    match trailing.take() {
                        Some(value) => {
                            if out_tx.send(value).is_err() {
                                break;
                            }
                            window_end = Some(Instant::now() + window);
                        }
                        None => window_end = None,
                    }
                }

                received = in_rx.recv() => match received {
                    Some(value) => {
                        if window_end.is_none() {
                            if out_tx.send(value).is_err() {
                                break;
                            }
                            window_end = Some(Instant::now() + window);
                        } else {
                            trailing = Some(value);
                        }
                    }
                    None => {
                        if let Some(value) = trailing.take() {
                            let _ = out_tx.send(value);
                        }
                        break;
                    }
                },
            }
        }
    });

    (in_tx, out_rx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::timeout;

    #[tokio::test(start_paused = true)]
    async fn test_debounce_collapses_bursts() {
        let shutdown = CancellationToken::new();
        let (tx, mut rx) = debounce::<&str>(Duration::from_millis(300), shutdown);

        tx.send("d").unwrap();
        tx.send("do").unwrap();
        tx.send("dop").unwrap();

        assert_eq!(rx.recv().await, Some("dop"));

        // Nothing else queued once the burst settled
        let extra = timeout(Duration::from_millis(500), rx.recv()).await;
        assert!(extra.is_err());
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_resets_timer_on_each_value() {
        let shutdown = CancellationToken::new();
        let (tx, mut rx) = debounce::<u32>(Duration::from_millis(300), shutdown);

        tx.send(1).unwrap();
        tokio::time::sleep(Duration::from_millis(200)).await;
        tx.send(2).unwrap();

        // 200ms after the second value: timer was reset, still quiet
        let early = timeout(Duration::from_millis(200), rx.recv()).await;
        assert!(early.is_err());

        assert_eq!(rx.recv().await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_debounce_flushes_on_input_close() {
        let shutdown = CancellationToken::new();
        let (tx, mut rx) = debounce::<u32>(Duration::from_millis(300), shutdown);

        tx.send(7).unwrap();
        drop(tx);

        assert_eq!(rx.recv().await, Some(7));
        assert_eq!(rx.recv().await, None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttle_leading_and_trailing() {
        let shutdown = CancellationToken::new();
        let (tx, mut rx) = throttle::<u32>(Duration::from_millis(16), shutdown);

        // Leading edge passes straight through
        tx.send(1).unwrap();
        assert_eq!(rx.recv().await, Some(1));

        // Values inside the window coalesce to the latest
        tx.send(2).unwrap();
        tx.send(3).unwrap();
        assert_eq!(rx.recv().await, Some(3));
    }

    #[tokio::test(start_paused = true)]
    async fn test_throttle_reopens_after_quiet_window() {
        let shutdown = CancellationToken::new();
        let (tx, mut rx) = throttle::<u32>(Duration::from_millis(16), shutdown);

        tx.send(1).unwrap();
        assert_eq!(rx.recv().await, Some(1));

        // Let the window close with nothing pending
        tokio::time::sleep(Duration::from_millis(40)).await;

        tx.send(2).unwrap();
        assert_eq!(rx.recv().await, Some(2));
    }

    #[tokio::test(start_paused = true)]
    async fn test_shutdown_flushes_pending_value() {
        let shutdown = CancellationToken::new();
        let (tx, mut rx) = debounce::<u32>(Duration::from_millis(300), shutdown.clone());

        tx.send(9).unwrap();
        tokio::task::yield_now().await;
        shutdown.cancel();

        assert_eq!(rx.recv().await, Some(9));
    }
}
