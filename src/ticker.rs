use gloo_timers::callback::Interval;
use log::debug;

/// Holds at most one running timer. Dropping the handle cancels the timer, so
/// `stop` and dropping the `Ticker` itself both end the callbacks.
pub struct Ticker<H> {
    handle: Option<H>,
}

impl<H> Default for Ticker<H> {
    fn default() -> Self {
        Self { handle: None }
    }
}

impl<H> Ticker<H> {
    /// Returns false and leaves the running timer alone if one is installed.
    pub fn start(&mut self, spawn: impl FnOnce() -> H) -> bool {
        if self.is_running() {
            debug!("Ticker already running, ignoring start");
            return false;
        }
        self.handle = Some(spawn());
        true
    }

    pub fn stop(&mut self) -> bool {
        self.handle.take().is_some()
    }

    pub fn is_running(&self) -> bool {
        self.handle.is_some()
    }
}

impl Ticker<Interval> {
    pub fn every<F>(&mut self, millis: u32, callback: F) -> bool
    where
        F: FnMut() + 'static,
    {
        self.start(move || Interval::new(millis, callback))
    }
}

/// Counts live handles the way a browser counts registered intervals.
#[cfg(test)]
pub(crate) struct FakeInterval {
    live: std::rc::Rc<std::cell::Cell<u32>>,
}

#[cfg(test)]
impl FakeInterval {
    pub(crate) fn new(live: &std::rc::Rc<std::cell::Cell<u32>>) -> Self {
        live.set(live.get() + 1);
        Self { live: live.clone() }
    }
}

#[cfg(test)]
impl Drop for FakeInterval {
    fn drop(&mut self) {
        self.live.set(self.live.get() - 1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    #[test]
    fn second_start_is_ignored() {
        let live = Rc::new(Cell::new(0));
        let mut ticker = Ticker::default();

        assert!(ticker.start(|| FakeInterval::new(&live)));
        assert!(!ticker.start(|| FakeInterval::new(&live)));
        assert_eq!(live.get(), 1);
        assert!(ticker.is_running());
    }

    #[test]
    fn stop_cancels_the_timer() {
        let live = Rc::new(Cell::new(0));
        let mut ticker = Ticker::default();
        ticker.start(|| FakeInterval::new(&live));

        assert!(ticker.stop());
        assert_eq!(live.get(), 0);
        assert!(!ticker.is_running());
        assert!(!ticker.stop());
    }

    #[test]
    fn restart_after_stop() {
        let live = Rc::new(Cell::new(0));
        let mut ticker = Ticker::default();
        ticker.start(|| FakeInterval::new(&live));
        ticker.stop();

        assert!(ticker.start(|| FakeInterval::new(&live)));
        assert_eq!(live.get(), 1);
    }

    #[test]
    fn dropping_the_ticker_cancels_the_timer() {
        let live = Rc::new(Cell::new(0));
        {
            let mut ticker = Ticker::default();
            ticker.start(|| FakeInterval::new(&live));
            assert_eq!(live.get(), 1);
        }
        assert_eq!(live.get(), 0);
    }
}
