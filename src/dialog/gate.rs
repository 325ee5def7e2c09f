//! One-shot completion slot a dialog waits on.

use std::cell::RefCell;
use std::mem;
use std::rc::Rc;

enum Slot<T> {
    Idle,
    Armed(Box<dyn FnOnce(T)>),
    Resolved,
}

/// Single-slot completion signal.
///
/// [`arm`](Self::arm) installs the continuation; the first
/// [`try_resolve`](Self::try_resolve) after that runs it. Resolutions while
/// idle or after completion are dropped.
pub struct CompletionGate<T> {
    slot: Rc<RefCell<Slot<T>>>,
}

impl<T> Clone for CompletionGate<T> {
    fn clone(&self) -> Self {
        Self {
            slot: self.slot.clone(),
        }
    }
}

impl<T: 'static> Default for CompletionGate<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: 'static> CompletionGate<T> {
    pub fn new() -> Self {
        Self {
            slot: Rc::new(RefCell::new(Slot::Idle)),
        }
    }

    /// Start waiting. Replaces any earlier waiter or completion.
    pub fn arm(&self, continuation: impl FnOnce(T) + 'static) {
        *self.slot.borrow_mut() = Slot::Armed(Box::new(continuation));
    }

    /// Complete with `value`. Returns false if nobody is waiting.
    pub fn try_resolve(&self, value: T) -> bool {
        let continuation = {
            let mut slot = self.slot.borrow_mut();
            match mem::replace(&mut *slot, Slot::Resolved) {
                Slot::Armed(c) => c,
                other => {
                    *slot = other;
                    return false;
                }
            }
        };
        continuation(value);
        true
    }

    pub fn is_armed(&self) -> bool {
        matches!(*self.slot.borrow(), Slot::Armed(_))
    }

    pub fn is_resolved(&self) -> bool {
        matches!(*self.slot.borrow(), Slot::Resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn ignores_resolution_before_arming() {
        let gate = CompletionGate::<u32>::new();
        assert!(!gate.try_resolve(1));
        assert!(!gate.is_resolved());
    }

    #[test]
    fn first_resolution_wins() {
        let gate = CompletionGate::new();
        let got = Rc::new(Cell::new(0));
        let sink = got.clone();
        gate.arm(move |v| sink.set(v));
        assert!(gate.is_armed());
        assert!(gate.try_resolve(7));
        assert!(!gate.try_resolve(9));
        assert_eq!(got.get(), 7);
        assert!(gate.is_resolved());
    }

    #[test]
    fn continuation_may_touch_the_gate() {
        let gate = CompletionGate::new();
        let inner = gate.clone();
        let rejected = Rc::new(Cell::new(false));
        let flag = rejected.clone();
        gate.arm(move |_: ()| flag.set(!inner.try_resolve(())));
        gate.try_resolve(());
        assert!(rejected.get());
    }

    #[test]
    fn can_be_rearmed() {
        let gate = CompletionGate::new();
        let count = Rc::new(Cell::new(0));
        for _ in 0..2 {
            let c = count.clone();
            gate.arm(move |()| c.set(c.get() + 1));
            gate.try_resolve(());
        }
        assert_eq!(count.get(), 2);
    }
}
