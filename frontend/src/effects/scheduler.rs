//! Frame and timer scheduling shared by the effects.
//!
//! Every handle here owns its pending `AnimationFrame` / `Timeout`, so
//! dropping the owner cancels whatever was still queued.

use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

use gloo_render::{request_animation_frame, AnimationFrame};
use gloo_timers::callback::Timeout;

/// Guard that lets at most one piece of work be outstanding.
#[derive(Debug, Default)]
pub struct PendingFlag {
    pending: Cell<bool>,
}

impl PendingFlag {
    /// True if the caller now owns the pending slot.
    pub fn try_claim(&self) -> bool {
        !self.pending.replace(true)
    }

    pub fn release(&self) {
        self.pending.set(false);
    }

    pub fn is_pending(&self) -> bool {
        self.pending.get()
    }
}

struct CoalescerInner {
    job: Box<dyn Fn()>,
    flag: PendingFlag,
    frame: RefCell<Option<AnimationFrame>>,
}

/// Runs its job at most once per animation frame, no matter how many times
/// `schedule` is called in between.
#[derive(Clone)]
pub struct FrameCoalescer {
    inner: Rc<CoalescerInner>,
}

impl FrameCoalescer {
    pub fn new(job: impl Fn() + 'static) -> Self {
        Self {
            inner: Rc::new(CoalescerInner {
                job: Box::new(job),
                flag: PendingFlag::default(),
                frame: RefCell::new(None),
            }),
        }
    }

    pub fn schedule(&self) {
        if !self.inner.flag.try_claim() {
            return;
        }
        let weak = Rc::downgrade(&self.inner);
        let frame = request_animation_frame(move |_| {
            if let Some(inner) = weak.upgrade() {
                inner.frame.borrow_mut().take();
                inner.flag.release();
                (inner.job)();
            }
        });
        *self.inner.frame.borrow_mut() = Some(frame);
    }

    /// Runs the job right away, outside the frame clock.
    pub fn run_now(&self) {
        (self.inner.job)();
    }

    /// True between `schedule` and the frame that runs the job.
    pub fn is_pending(&self) -> bool {
        self.inner.flag.is_pending()
    }
}

/// A single replaceable frame callback: scheduling again cancels the one
/// still pending, so only the latest request runs.
#[derive(Clone, Default)]
pub struct FrameSlot {
    frame: Rc<RefCell<Option<AnimationFrame>>>,
}

impl FrameSlot {
    pub fn replace(&self, job: impl FnOnce() + 'static) {
        self.cancel();
        let weak: Weak<RefCell<Option<AnimationFrame>>> = Rc::downgrade(&self.frame);
        let frame = request_animation_frame(move |_| {
            if let Some(slot) = weak.upgrade() {
                slot.borrow_mut().take();
            }
            job();
        });
        *self.frame.borrow_mut() = Some(frame);
    }

    pub fn cancel(&self) {
        self.frame.borrow_mut().take();
    }
}

struct LoopInner {
    tick: Box<dyn Fn()>,
    frame: RefCell<Option<AnimationFrame>>,
}

/// Calls `tick` on every animation frame between `start` and `stop`.
pub struct FrameLoop {
    inner: Rc<LoopInner>,
}

impl FrameLoop {
    pub fn new(tick: impl Fn() + 'static) -> Self {
        Self {
            inner: Rc::new(LoopInner {
                tick: Box::new(tick),
                frame: RefCell::new(None),
            }),
        }
    }

    /// No-op while already running.
    pub fn start(&self) {
        if self.is_running() {
            return;
        }
        Self::schedule(&self.inner);
    }

    pub fn stop(&self) {
        self.inner.frame.borrow_mut().take();
    }

    pub fn is_running(&self) -> bool {
        self.inner.frame.borrow().is_some()
    }

    fn schedule(inner: &Rc<LoopInner>) {
        let weak = Rc::downgrade(inner);
        let frame = request_animation_frame(move |_| {
            let Some(inner) = weak.upgrade() else {
                return;
            };
            inner.frame.borrow_mut().take();
            (inner.tick)();
            Self::schedule(&inner);
        });
        *inner.frame.borrow_mut() = Some(frame);
    }
}

/// Trailing-edge debounce: each call cancels the previous pending timeout.
pub struct Debouncer {
    delay_ms: u32,
    pending: RefCell<Option<Timeout>>,
}

impl Debouncer {
    pub fn new(delay_ms: u32) -> Self {
        Self {
            delay_ms,
            pending: RefCell::new(None),
        }
    }

    pub fn call(&self, job: impl FnOnce() + 'static) {
        // Dropping the old timeout clears it.
        let timeout = Timeout::new(self.delay_ms, job);
        *self.pending.borrow_mut() = Some(timeout);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_first_claim_wins_until_released() {
        let flag = PendingFlag::default();
        assert!(flag.try_claim());
        assert!(!flag.try_claim());
        assert!(!flag.try_claim());
        assert!(flag.is_pending());

        flag.release();
        assert!(!flag.is_pending());
        assert!(flag.try_claim());
    }

    #[test]
    fn release_without_claim_is_harmless() {
        let flag = PendingFlag::default();
        flag.release();
        assert!(flag.try_claim());
    }
}
