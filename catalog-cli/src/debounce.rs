use std::{
    sync::mpsc::{self, RecvTimeoutError, Sender},
    thread::{self, JoinHandle},
    time::Duration,
};

enum TimerMsg {
    Reset,
    Cancel,
    Shutdown,
}

/// Cancellable quiet-period timer for collapsing bursts of input.
///
/// `reset` (re)starts the quiet period; if no further `reset` or
/// `cancel` arrives within it, the callback fires exactly once. Each
/// new `reset` pushes a pending fire back, so a burst of events
/// produces a single callback after the burst ends.
///
/// The timer runs on its own worker thread so the event loop never
/// blocks; the callback typically just posts an event back to it.
pub struct Debouncer {
    tx: Sender<TimerMsg>,
    handle: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new<F>(period: Duration, on_quiet: F) -> Self
    where
        F: Fn() + Send + 'static,
    {
        let (tx, rx) = mpsc::channel();
        let handle = thread::spawn(move || {
            let mut armed = false;
            loop {
                if armed {
                    match rx.recv_timeout(period) {
                        // Still typing, restart the quiet period
                        Ok(TimerMsg::Reset) => {}
                        Ok(TimerMsg::Cancel) => armed = false,
                        Ok(TimerMsg::Shutdown) => break,
                        Err(RecvTimeoutError::Timeout) => {
                            armed = false;
                            on_quiet();
                        }
                        Err(RecvTimeoutError::Disconnected) => break,
                    }
                } else {
                    match rx.recv() {
                        Ok(TimerMsg::Reset) => armed = true,
                        Ok(TimerMsg::Cancel) => {}
                        Ok(TimerMsg::Shutdown) | Err(_) => break,
                    }
                }
            }
        });

        Debouncer {
            tx,
            handle: Some(handle),
        }
    }

    /// Start or restart the quiet period.
    pub fn reset(&self) {
        let _ = self.tx.send(TimerMsg::Reset);
    }

    /// Drop any pending fire without invoking the callback.
    pub fn cancel(&self) {
        let _ = self.tx.send(TimerMsg::Cancel);
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        let _ = self.tx.send(TimerMsg::Shutdown);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        sync::{
            atomic::{AtomicUsize, Ordering},
            Arc,
        },
        time::Duration,
    };

    fn counting_debouncer(period: Duration) -> (Debouncer, Arc<AtomicUsize>) {
        let fires = Arc::new(AtomicUsize::new(0));
        let counter = fires.clone();
        let debouncer = Debouncer::new(period, move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        (debouncer, fires)
    }

    #[test]
    fn fires_once_after_quiet_period() {
        let (debouncer, fires) = counting_debouncer(Duration::from_millis(50));

        debouncer.reset();
        thread::sleep(Duration::from_millis(300));

        assert_eq!(fires.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn burst_of_resets_collapses_to_one_fire() {
        let (debouncer, fires) = counting_debouncer(Duration::from_millis(50));

        for _ in 0..10 {
            debouncer.reset();
        }
        thread::sleep(Duration::from_millis(300));

        assert_eq!(fires.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn reset_postpones_a_pending_fire() {
        let (debouncer, fires) = counting_debouncer(Duration::from_millis(500));

        debouncer.reset();
        thread::sleep(Duration::from_millis(250));
        debouncer.reset();
        // 600ms after the first reset, but only 350ms after the second:
        // the first schedule must not have fired.
        thread::sleep(Duration::from_millis(350));
        assert_eq!(fires.load(Ordering::SeqCst), 0);

        thread::sleep(Duration::from_millis(400));
        assert_eq!(fires.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn cancel_prevents_the_fire() {
        let (debouncer, fires) = counting_debouncer(Duration::from_millis(50));

        debouncer.reset();
        debouncer.cancel();
        thread::sleep(Duration::from_millis(300));

        assert_eq!(fires.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn idle_cancel_is_a_no_op() {
        let (debouncer, fires) = counting_debouncer(Duration::from_millis(50));

        debouncer.cancel();
        thread::sleep(Duration::from_millis(150));

        assert_eq!(fires.load(Ordering::SeqCst), 0);
    }
}
