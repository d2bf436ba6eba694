/// Rate limiters -- debounce and throttle wrappers around a callback.
///
/// Both run on the caller's cooperative timeline: nothing fires from another
/// thread. The owning loop calls `poll()` once per frame to fire any trailing
/// call that has come due, and can use `next_deadline()` to decide when to wake
/// up next. All timing uses `Instant`, so wall-clock changes have no effect.
///
/// The `*_at` variants take an explicit `now` for deterministic tests.
use std::time::{Duration, Instant};

type Callback<A> = Box<dyn FnMut(A) + Send>;

/// A scheduled call and the arguments it will receive.
struct Pending<A> {
    due: Instant,
    args: A,
}

/// Fires the callback once, `delay` after the last invocation, with the
/// latest arguments.
pub struct Debounce<A> {
    callback: Callback<A>,
    delay: Duration,
    pending: Option<Pending<A>>,
}

impl<A> Debounce<A> {
    pub fn new(delay: Duration, callback: impl FnMut(A) + Send + 'static) -> Self {
        Self {
            callback: Box::new(callback),
            delay,
            pending: None,
        }
    }

    pub fn invoke(&mut self, args: A) {
        self.invoke_at(Instant::now(), args);
    }

    /// Replace any pending call with one due `delay` after `now`.
    pub fn invoke_at(&mut self, now: Instant, args: A) {
        // A call that came due before this invocation would already have
        // fired on a real timer.
        self.poll_at(now);
        self.pending = Some(Pending {
            due: now + self.delay,
            args,
        });
    }

    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    /// Fire the pending call if it is due. Returns `true` if it fired.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        match self.pending.take() {
            Some(pending) if pending.due <= now => {
                (self.callback)(pending.args);
                true
            }
            other => {
                self.pending = other;
                false
            }
        }
    }

    /// Cancel the pending call without firing it.
    pub fn clear(&mut self) {
        self.pending = None;
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }
}

/// Fires the callback at most once per `delay`.
///
/// A call inside the window is coalesced into a single trailing call, due
/// `delay` after the first suppressed call and carrying the latest arguments.
pub struct Throttle<A> {
    callback: Callback<A>,
    delay: Duration,
    last_fired: Option<Instant>,
    trailing: Option<Pending<A>>,
}

impl<A> Throttle<A> {
    pub fn new(delay: Duration, callback: impl FnMut(A) + Send + 'static) -> Self {
        Self {
            callback: Box::new(callback),
            delay,
            last_fired: None,
            trailing: None,
        }
    }

    pub fn invoke(&mut self, args: A) {
        self.invoke_at(Instant::now(), args);
    }

    pub fn invoke_at(&mut self, now: Instant, args: A) {
        self.poll_at(now);

        match self.last_fired {
            Some(last) if now.saturating_duration_since(last) < self.delay => {
                match &mut self.trailing {
                    Some(pending) => pending.args = args,
                    None => {
                        self.trailing = Some(Pending {
                            due: now + self.delay,
                            args,
                        })
                    }
                }
            }
            _ => {
                self.last_fired = Some(now);
                (self.callback)(args);
            }
        }
    }

    pub fn poll(&mut self) -> bool {
        self.poll_at(Instant::now())
    }

    /// Fire the trailing call if it is due. Its firing time becomes the new
    /// reference for the throttle window.
    pub fn poll_at(&mut self, now: Instant) -> bool {
        match self.trailing.take() {
            Some(pending) if pending.due <= now => {
                self.last_fired = Some(now);
                (self.callback)(pending.args);
                true
            }
            other => {
                self.trailing = other;
                false
            }
        }
    }

    /// Cancel the trailing call without firing it.
    pub fn clear(&mut self) {
        self.trailing = None;
    }

    pub fn is_pending(&self) -> bool {
        self.trailing.is_some()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.trailing.as_ref().map(|p| p.due)
    }
}
