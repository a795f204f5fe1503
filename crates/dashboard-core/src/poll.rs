//! Cancellable polling.
//!
//! The schedule is an interval stream anchored at start time, so request
//! latency never shifts later ticks. The browser passes a JS interval;
//! tests pass a virtual clock. Cancelling aborts the whole poll future,
//! which drops the pending interval and any request in flight.

use std::future::Future;

use futures::future::{AbortHandle, Abortable};
use futures::{FutureExt, Stream, StreamExt};

/// Stops a poll future created by [`cancellable_poll`]
#[derive(Debug, Clone)]
pub struct CancelToken(AbortHandle);

impl CancelToken {
    pub fn cancel(&self) {
        self.0.abort();
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.is_aborted()
    }
}

/// Run `tick` now and once per item of `interval`.
async fn poll_loop<I, T, TF>(mut interval: I, mut tick: T)
where
    I: Stream<Item = ()> + Unpin,
    T: FnMut() -> TF,
    TF: Future<Output = ()>,
{
    tick().await;
    while interval.next().await.is_some() {
        tick().await;
    }
}

/// Build the poll future and the token that ends it.
///
/// After `cancel()` the future resolves on its next poll without running
/// another tick, and the executor drops it together with `interval`.
pub fn cancellable_poll<I, T, TF>(interval: I, tick: T) -> (impl Future<Output = ()>, CancelToken)
where
    I: Stream<Item = ()> + Unpin,
    T: FnMut() -> TF,
    TF: Future<Output = ()>,
{
    let (handle, registration) = AbortHandle::new_pair();
    let poller = Abortable::new(poll_loop(interval, tick), registration).map(|outcome| {
        if outcome.is_err() {
            log::debug!("[POLL] Stopped");
        }
    });
    (poller, CancelToken(handle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::pin::Pin;
    use std::rc::Rc;
    use std::task::{Context, Poll};
    use std::time::Duration;

    use futures::executor::{block_on, LocalPool};
    use futures::future::ready;
    use futures::task::LocalSpawnExt;

    /// Interval on a shared virtual clock, ending after `window`.
    /// Like `setInterval`, overdue boundaries fire immediately.
    struct VirtualInterval {
        clock: Rc<Cell<Duration>>,
        period: Duration,
        next_fire: Duration,
        window: Duration,
    }

    impl VirtualInterval {
        fn new(clock: Rc<Cell<Duration>>, period: Duration, window: Duration) -> Self {
            Self { clock, period, next_fire: period, window }
        }
    }

    impl Stream for VirtualInterval {
        type Item = ();

        fn poll_next(mut self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<()>> {
            if self.next_fire > self.window {
                return Poll::Ready(None);
            }
            let fire = self.next_fire;
            if self.clock.get() < fire {
                self.clock.set(fire);
            }
            self.next_fire = fire + self.period;
            Poll::Ready(Some(()))
        }
    }

    /// Ticks within `window` when every request takes `latency`
    fn count_ticks(window: Duration, latency: Duration) -> usize {
        let clock = Rc::new(Cell::new(Duration::ZERO));
        let ticks = Cell::new(0usize);
        let interval = VirtualInterval::new(clock.clone(), Duration::from_secs(30), window);

        let (poller, _token) = cancellable_poll(interval, || {
            ticks.set(ticks.get() + 1);
            clock.set(clock.get() + latency);
            ready(())
        });
        block_on(poller);

        ticks.get()
    }

    #[test]
    fn test_ticks_immediately_then_per_interval() {
        assert_eq!(count_ticks(Duration::from_secs(1), Duration::ZERO), 1);
        assert_eq!(count_ticks(Duration::from_secs(30), Duration::ZERO), 2);
        assert_eq!(count_ticks(Duration::from_secs(95), Duration::ZERO), 4);
    }

    #[test]
    fn test_request_latency_does_not_drift_schedule() {
        let window = Duration::from_secs(300);
        let expected = count_ticks(window, Duration::ZERO);
        assert_eq!(expected, 11);
        assert_eq!(count_ticks(window, Duration::from_secs(1)), expected);
        assert_eq!(count_ticks(window, Duration::from_secs(29)), expected);
    }

    /// Interval that never fires and records when it is dropped
    struct PendingInterval {
        dropped: Rc<Cell<bool>>,
    }

    impl Stream for PendingInterval {
        type Item = ();

        fn poll_next(self: Pin<&mut Self>, _cx: &mut Context<'_>) -> Poll<Option<()>> {
            Poll::Pending
        }
    }

    impl Drop for PendingInterval {
        fn drop(&mut self) {
            self.dropped.set(true);
        }
    }

    #[test]
    fn test_cancel_drops_pending_interval() {
        let dropped = Rc::new(Cell::new(false));
        let ticks = Rc::new(Cell::new(0usize));
        let tick_count = ticks.clone();

        let (poller, token) = cancellable_poll(PendingInterval { dropped: dropped.clone() }, move || {
            tick_count.set(tick_count.get() + 1);
            ready(())
        });

        let mut pool = LocalPool::new();
        pool.spawner().spawn_local(poller).unwrap();
        pool.run_until_stalled();
        assert_eq!(ticks.get(), 1);
        assert!(!dropped.get());

        token.cancel();
        assert!(token.is_cancelled());
        pool.run_until_stalled();

        assert!(dropped.get());
        assert_eq!(ticks.get(), 1);
    }

    #[test]
    fn test_cancel_before_start_never_ticks() {
        let ticks = Cell::new(0usize);
        let dropped = Rc::new(Cell::new(false));

        let (poller, token) = cancellable_poll(PendingInterval { dropped: dropped.clone() }, || {
            ticks.set(ticks.get() + 1);
            ready(())
        });
        token.cancel();
        block_on(poller);

        assert_eq!(ticks.get(), 0);
    }

    #[test]
    fn test_clones_share_cancellation() {
        let (_poller, token) = cancellable_poll(futures::stream::empty::<()>(), || ready(()));
        let other = token.clone();
        assert!(!other.is_cancelled());
        token.cancel();
        assert!(other.is_cancelled());
    }
}
