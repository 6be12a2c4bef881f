use std::cell::RefCell;
use std::rc::Rc;

use chrono::{DateTime, Utc};
use gloo_timers::callback::Interval;
use log::debug;
use yew::prelude::*;

use crate::config::COUNTDOWN_REFRESH_MS;
use crate::countdown::TimeLeft;
use crate::ticker::Ticker;

const REVEAL_STEP_MS: u32 = 40;

/// Time left until `deadline`, refreshed every second while mounted.
#[hook]
pub fn use_countdown(deadline: DateTime<Utc>) -> TimeLeft {
    let time_left = use_state_eq(|| TimeLeft::until(deadline, Utc::now()));
    let ticker = use_mut_ref(Ticker::<Interval>::default);

    {
        let time_left = time_left.clone();
        use_effect_with_deps(
            move |deadline| {
                let deadline = *deadline;
                let refresh = move || time_left.set(TimeLeft::until(deadline, Utc::now()));

                debug!("Countdown started for {}", deadline);
                start_refreshing(ticker, refresh, |tick| Interval::new(COUNTDOWN_REFRESH_MS, tick))
            },
            deadline,
        );
    }

    *time_left
}

/// Runs `refresh` once, hands it to `spawn` as the tick callback, and returns
/// the effect teardown that stops the ticker.
pub fn start_refreshing<H, R, S>(ticker: Rc<RefCell<Ticker<H>>>, refresh: R, spawn: S) -> impl FnOnce()
where
    H: 'static,
    R: Fn(),
    S: FnOnce(R) -> H,
{
    refresh();
    ticker.borrow_mut().start(move || spawn(refresh));

    move || {
        if ticker.borrow_mut().stop() {
            debug!("Ticker stopped");
        }
    }
}

/// Types `text` out left to right over `duration_ms` with linear pacing.
#[hook]
pub fn use_typewriter(text: &'static str, duration_ms: u32) -> &'static str {
    let elapsed_ms = use_state_eq(|| 0u32);
    let ticker = use_mut_ref(Ticker::<Interval>::default);
    let finished = *elapsed_ms >= duration_ms;

    {
        let elapsed_ms = elapsed_ms.clone();
        use_effect_with_deps(
            move |finished| {
                if !*finished {
                    let started = Utc::now();
                    ticker.borrow_mut().every(REVEAL_STEP_MS, move || {
                        let elapsed = (Utc::now() - started).num_milliseconds();
                        elapsed_ms.set(elapsed.clamp(0, duration_ms as i64) as u32);
                    });
                }
                move || {
                    ticker.borrow_mut().stop();
                }
            },
            finished,
        );
    }

    reveal_prefix(text, *elapsed_ms, duration_ms)
}

/// Visible part of `text` after `elapsed_ms` of a `duration_ms` reveal, cut on
/// a char boundary.
pub fn reveal_prefix(text: &str, elapsed_ms: u32, duration_ms: u32) -> &str {
    if elapsed_ms >= duration_ms {
        return text;
    }
    let total = text.chars().count() as u64;
    let shown = (total * elapsed_ms as u64 / duration_ms as u64) as usize;
    match text.char_indices().nth(shown) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ticker::FakeInterval;
    use std::cell::Cell;

    fn counter() -> (Rc<Cell<u32>>, impl Fn()) {
        let count = Rc::new(Cell::new(0));
        let bump = {
            let count = count.clone();
            move || count.set(count.get() + 1)
        };
        (count, bump)
    }

    #[test]
    fn refreshes_immediately_and_on_tick() {
        let live = Rc::new(Cell::new(0));
        let (refreshes, refresh) = counter();
        let ticker = Rc::new(RefCell::new(Ticker::default()));

        let _teardown = start_refreshing(ticker.clone(), refresh, |tick| {
            tick();
            FakeInterval::new(&live)
        });

        assert_eq!(refreshes.get(), 2);
        assert_eq!(live.get(), 1);
        assert!(ticker.borrow().is_running());
    }

    #[test]
    fn teardown_cancels_the_timer() {
        let live = Rc::new(Cell::new(0));
        let (_, refresh) = counter();
        let ticker = Rc::new(RefCell::new(Ticker::default()));

        let teardown = start_refreshing(ticker.clone(), refresh, |_| FakeInterval::new(&live));
        teardown();

        assert_eq!(live.get(), 0);
        assert!(!ticker.borrow().is_running());
    }

    #[test]
    fn second_start_keeps_a_single_timer() {
        let live = Rc::new(Cell::new(0));
        let (refreshes, refresh) = counter();
        let (_, other_refresh) = counter();
        let ticker = Rc::new(RefCell::new(Ticker::default()));

        let first = start_refreshing(ticker.clone(), refresh, |_| FakeInterval::new(&live));
        let _second = start_refreshing(ticker.clone(), other_refresh, |_| FakeInterval::new(&live));
        assert_eq!(live.get(), 1);
        assert_eq!(refreshes.get(), 1);

        first();
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn nothing_shown_at_start() {
        assert_eq!(reveal_prefix("Recruitments 2025", 0, 2000), "");
    }

    #[test]
    fn everything_shown_at_and_after_duration() {
        assert_eq!(reveal_prefix("Recruitments 2025", 2000, 2000), "Recruitments 2025");
        assert_eq!(reveal_prefix("Recruitments 2025", 9000, 2000), "Recruitments 2025");
    }

    #[test]
    fn zero_duration_shows_everything() {
        assert_eq!(reveal_prefix("abc", 0, 0), "abc");
    }

    #[test]
    fn linear_pacing() {
        assert_eq!(reveal_prefix("abcdefghij", 1000, 2000), "abcde");
        assert_eq!(reveal_prefix("abcdefghij", 1999, 2000), "abcdefghi");
    }

    #[test]
    fn grows_monotonically_on_char_boundaries() {
        let text = "Réclame 2025 ✓";
        let mut previous = 0;
        for elapsed in (0..=2000).step_by(10) {
            let shown = reveal_prefix(text, elapsed, 2000);
            assert!(text.starts_with(shown));
            assert!(shown.len() >= previous);
            previous = shown.len();
        }
        assert_eq!(previous, text.len());
    }
}
