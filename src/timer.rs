use gloo_timers::callback::Timeout;

/// Holds at most one pending one-shot timer. Arming a new one drops, and so
/// cancels, the previous handle; dropping the slot cancels whatever is left.
pub struct TimerSlot<H = Timeout> {
    pending: Option<H>,
}

impl<H> Default for TimerSlot<H> {
    fn default() -> Self {
        Self { pending: None }
    }
}

impl<H> TimerSlot<H> {
    /// Stores `handle`, returns true if an earlier handle was superseded.
    pub fn arm(&mut self, handle: H) -> bool {
        self.pending.replace(handle).is_some()
    }

    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

impl TimerSlot<Timeout> {
    pub fn schedule<F>(&mut self, millis: u32, callback: F) -> bool
    where
        F: FnOnce() + 'static,
    {
        self.arm(Timeout::new(millis, callback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    struct Handle(Rc<Cell<u32>>);

    impl Drop for Handle {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn arming_twice_drops_the_first_handle() {
        let dropped = Rc::new(Cell::new(0));
        let mut slot: TimerSlot<Handle> = TimerSlot::default();

        assert!(!slot.arm(Handle(dropped.clone())));
        assert_eq!(dropped.get(), 0);
        assert!(slot.arm(Handle(dropped.clone())));
        assert_eq!(dropped.get(), 1);
        assert!(slot.is_armed());
    }

    #[test]
    fn dropping_the_slot_cancels() {
        let dropped = Rc::new(Cell::new(0));
        {
            let mut slot: TimerSlot<Handle> = TimerSlot::default();
            slot.arm(Handle(dropped.clone()));
        }
        assert_eq!(dropped.get(), 1);
    }

    #[test]
    fn cancel_empties_the_slot() {
        let dropped = Rc::new(Cell::new(0));
        let mut slot: TimerSlot<Handle> = TimerSlot::default();
        assert!(!slot.cancel());
        slot.arm(Handle(dropped.clone()));
        assert!(slot.cancel());
        assert!(!slot.is_armed());
        assert_eq!(dropped.get(), 1);
    }
}

#[cfg(all(test, target_arch = "wasm32"))]
mod browser_tests {
    use super::*;
    use gloo_timers::future::TimeoutFuture;
    use std::cell::Cell;
    use std::rc::Rc;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    async fn superseded_timer_never_fires() {
        let fired = Rc::new(Cell::new(0u32));
        let mut slot: TimerSlot = TimerSlot::default();

        let first = fired.clone();
        slot.schedule(20, move || first.set(first.get() + 1));
        let second = fired.clone();
        slot.schedule(40, move || second.set(second.get() + 10));

        TimeoutFuture::new(100).await;
        assert_eq!(fired.get(), 10);
    }

    #[wasm_bindgen_test]
    async fn dropped_slot_never_fires() {
        let fired = Rc::new(Cell::new(false));
        {
            let mut slot: TimerSlot = TimerSlot::default();
            let flag = fired.clone();
            slot.schedule(20, move || flag.set(true));
        }
        TimeoutFuture::new(60).await;
        assert!(!fired.get());
    }
}
