//! Carousel controller.
//!
//! Owns the slide index and the auto-play task. Slides and indicators are
//! two [`ActiveView`]s of equal length `N`; after every operation exactly one
//! slide and the indicator at the same position are active.
//!
//! ## Navigation
//!
//! ```text
//! next:  (current + 1) mod N        wraps last → first
//! prev:  (current + N - 1) mod N    wraps first → last
//! ```
//!
//! ## Auto-play
//!
//! Auto-play is a single repeating task on the injected [`Scheduler`]. At
//! most one task is ever outstanding: starting replaces whatever was running,
//! stopping is idempotent, and every manual navigation resets the task so the
//! period restarts from the last user interaction. A tick carrying an id that
//! is no longer current is ignored.

use crate::schedule::{Scheduler, TaskId};
use crate::swipe::SwipeDirection;
use crate::view::ActiveView;
use std::time::Duration;
use thiserror::Error;
use tracing::debug;

/// Default auto-play period.
pub const DEFAULT_AUTOPLAY: Duration = Duration::from_millis(5000);

#[derive(Error, Debug, PartialEq, Eq)]
pub enum CarouselError {
    #[error("carousel has no slides")]
    NoSlides,
    #[error("carousel has {slides} slides but {indicators} indicators")]
    IndicatorMismatch { slides: usize, indicators: usize },
}

/// Manual inputs the carousel reacts to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CarouselInput {
    NextButton,
    PrevButton,
    Indicator(usize),
    ArrowLeft,
    ArrowRight,
    Swipe(SwipeDirection),
    PointerEnter,
    PointerLeave,
}

pub struct Carousel<V: ActiveView> {
    slides: V,
    indicators: V,
    current: usize,
    period: Duration,
    autoplay: Option<TaskId>,
}

impl<V: ActiveView> Carousel<V> {
    /// Build a carousel showing slide 0. Auto-play is not started; the page
    /// starts it once the carousel is wired up.
    pub fn new(slides: V, indicators: V, period: Duration) -> Result<Self, CarouselError> {
        if slides.is_empty() {
            return Err(CarouselError::NoSlides);
        }
        if slides.len() != indicators.len() {
            return Err(CarouselError::IndicatorMismatch {
                slides: slides.len(),
                indicators: indicators.len(),
            });
        }
        let mut carousel = Self {
            slides,
            indicators,
            current: 0,
            period,
            autoplay: None,
        };
        carousel.show_slide(0);
        Ok(carousel)
    }

    pub fn slide_count(&self) -> usize {
        self.slides.len()
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn slides(&self) -> &V {
        &self.slides
    }

    pub fn indicators(&self) -> &V {
        &self.indicators
    }

    /// The outstanding auto-play task, if auto-play is running.
    pub fn autoplay_task(&self) -> Option<TaskId> {
        self.autoplay
    }

    pub fn is_playing(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Activate slide `index` and its indicator. Returns `false` and leaves
    /// the carousel untouched when `index` is out of range.
    pub fn show_slide(&mut self, index: usize) -> bool {
        if index >= self.slide_count() {
            debug!(index, len = self.slide_count(), "ignoring out-of-range slide");
            return false;
        }
        self.slides.set_active(index);
        self.indicators.set_active(index);
        self.current = index;
        debug!(slide = index, "showing slide");
        true
    }

    pub fn next_slide(&mut self) {
        let next = (self.current + 1) % self.slide_count();
        self.show_slide(next);
    }

    pub fn prev_slide(&mut self) {
        let n = self.slide_count();
        let prev = (self.current + n - 1) % n;
        self.show_slide(prev);
    }

    /// Start auto-play, replacing any task already running.
    pub fn start_auto_play<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(old) = self.autoplay.take() {
            debug!(task = %old, "replacing auto-play task");
            scheduler.cancel(old);
        }
        let id = scheduler.schedule_repeating(self.period);
        debug!(task = %id, period_ms = self.period.as_millis() as u64, "auto-play started");
        self.autoplay = Some(id);
    }

    /// Stop auto-play. Safe to call when nothing is running.
    pub fn stop_auto_play<S: Scheduler>(&mut self, scheduler: &mut S) {
        if let Some(id) = self.autoplay.take() {
            scheduler.cancel(id);
            debug!(task = %id, "auto-play stopped");
        }
    }

    /// Restart the auto-play period from now.
    pub fn reset_auto_play<S: Scheduler>(&mut self, scheduler: &mut S) {
        self.stop_auto_play(scheduler);
        self.start_auto_play(scheduler);
    }

    /// Handle a fired task. Returns `true` if it was the current auto-play
    /// task and the carousel advanced.
    pub fn on_tick(&mut self, id: TaskId) -> bool {
        if self.autoplay != Some(id) {
            return false;
        }
        self.next_slide();
        true
    }

    /// Dispatch a manual input. Returns `true` if the visible slide was
    /// (re)selected.
    pub fn handle<S: Scheduler>(&mut self, input: CarouselInput, scheduler: &mut S) -> bool {
        match input {
            CarouselInput::NextButton
            | CarouselInput::ArrowRight
            | CarouselInput::Swipe(SwipeDirection::Left) => {
                self.next_slide();
                self.reset_auto_play(scheduler);
                true
            }
            CarouselInput::PrevButton
            | CarouselInput::ArrowLeft
            | CarouselInput::Swipe(SwipeDirection::Right) => {
                self.prev_slide();
                self.reset_auto_play(scheduler);
                true
            }
            CarouselInput::Indicator(index) => {
                if !self.show_slide(index) {
                    return false;
                }
                self.reset_auto_play(scheduler);
                true
            }
            CarouselInput::PointerEnter => {
                self.stop_auto_play(scheduler);
                false
            }
            CarouselInput::PointerLeave => {
                self.start_auto_play(scheduler);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schedule::VirtualClock;
    use crate::test_helpers::{assert_single_active, carousel_of, ms};
    use crate::view::ActiveSet;
    use proptest::prelude::*;

    #[test]
    fn starts_on_first_slide() {
        let carousel = carousel_of(4);
        assert_eq!(carousel.slide_count(), 4);
        assert_eq!(carousel.current(), 0);
        assert_single_active(&carousel, 0);
        assert!(!carousel.is_playing());
    }

    #[test]
    fn rejects_empty_carousel() {
        let err = Carousel::new(ActiveSet::new(0), ActiveSet::new(0), DEFAULT_AUTOPLAY)
            .err()
            .unwrap();
        assert_eq!(err, CarouselError::NoSlides);
    }

    #[test]
    fn rejects_mismatched_indicators() {
        let err = Carousel::new(ActiveSet::new(3), ActiveSet::new(2), DEFAULT_AUTOPLAY)
            .err()
            .unwrap();
        assert_eq!(
            err,
            CarouselError::IndicatorMismatch {
                slides: 3,
                indicators: 2
            }
        );
        assert_eq!(err.to_string(), "carousel has 3 slides but 2 indicators");
    }

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut carousel = carousel_of(3);
        assert!(carousel.show_slide(2));
        carousel.next_slide();
        assert_single_active(&carousel, 0);
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let mut carousel = carousel_of(3);
        carousel.prev_slide();
        assert_single_active(&carousel, 2);
    }

    #[test]
    fn single_slide_stays_put() {
        let mut carousel = carousel_of(1);
        carousel.next_slide();
        carousel.prev_slide();
        assert_single_active(&carousel, 0);
    }

    #[test]
    fn reset_then_wait_under_period_does_not_advance() {
        let mut clock = VirtualClock::new();
        let mut carousel = carousel_of(3);
        carousel.start_auto_play(&mut clock);
        clock.advance(ms(3000));
        carousel.reset_auto_play(&mut clock);

        for id in clock.advance(ms(4999)) {
            carousel.on_tick(id);
        }
        assert_eq!(carousel.current(), 0);

        let advanced: usize = clock
            .advance(ms(1))
            .into_iter()
            .filter(|id| carousel.on_tick(*id))
            .count();
        assert_eq!(advanced, 1);
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn at_most_one_autoplay_task_outstanding() {
        let mut clock = VirtualClock::new();
        let mut carousel = carousel_of(3);
        carousel.start_auto_play(&mut clock);
        carousel.start_auto_play(&mut clock);
        carousel.reset_auto_play(&mut clock);
        carousel.handle(CarouselInput::PointerLeave, &mut clock);
        assert_eq!(clock.pending(), 1);
    }

    #[test]
    fn stop_is_idempotent() {
        let mut clock = VirtualClock::new();
        let mut carousel = carousel_of(2);
        carousel.stop_auto_play(&mut clock);
        carousel.start_auto_play(&mut clock);
        carousel.stop_auto_play(&mut clock);
        carousel.stop_auto_play(&mut clock);
        assert_eq!(clock.pending(), 0);
        assert!(!carousel.is_playing());
    }

    #[test]
    fn stale_tick_is_ignored() {
        let mut clock = VirtualClock::new();
        let mut carousel = carousel_of(3);
        carousel.start_auto_play(&mut clock);
        let old = carousel.autoplay_task().unwrap();
        carousel.reset_auto_play(&mut clock);
        assert!(!carousel.on_tick(old));
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn hover_pauses_and_resumes() {
        let mut clock = VirtualClock::new();
        let mut carousel = carousel_of(3);
        carousel.start_auto_play(&mut clock);

        carousel.handle(CarouselInput::PointerEnter, &mut clock);
        assert!(clock.advance(ms(20_000)).is_empty());
        assert_eq!(carousel.current(), 0);

        carousel.handle(CarouselInput::PointerLeave, &mut clock);
        for id in clock.advance(ms(5000)) {
            carousel.on_tick(id);
        }
        assert_eq!(carousel.current(), 1);
    }

    #[test]
    fn indicator_click_jumps_and_resets() {
        let mut clock = VirtualClock::new();
        let mut carousel = carousel_of(5);
        carousel.start_auto_play(&mut clock);
        let before = carousel.autoplay_task();

        assert!(carousel.handle(CarouselInput::Indicator(3), &mut clock));
        assert_single_active(&carousel, 3);
        assert_ne!(carousel.autoplay_task(), before);
    }

    #[test]
    fn out_of_range_indicator_is_ignored() {
        let mut clock = VirtualClock::new();
        let mut carousel = carousel_of(2);
        assert!(!carousel.handle(CarouselInput::Indicator(2), &mut clock));
        assert_single_active(&carousel, 0);
        assert!(!carousel.is_playing());
    }

    #[test]
    fn out_of_range_show_slide_keeps_current() {
        let mut carousel = carousel_of(3);
        assert!(carousel.show_slide(1));
        assert!(!carousel.show_slide(7));
        assert!(!carousel.show_slide(3));
        assert_eq!(carousel.current(), 1);
        assert_single_active(&carousel, 1);
    }

    #[test]
    fn arrows_and_swipes_map_to_directions() {
        let mut clock = VirtualClock::new();
        let mut carousel = carousel_of(4);
        carousel.handle(CarouselInput::ArrowRight, &mut clock);
        carousel.handle(CarouselInput::Swipe(SwipeDirection::Left), &mut clock);
        assert_eq!(carousel.current(), 2);
        carousel.handle(CarouselInput::ArrowLeft, &mut clock);
        carousel.handle(CarouselInput::Swipe(SwipeDirection::Right), &mut clock);
        carousel.handle(CarouselInput::PrevButton, &mut clock);
        assert_eq!(carousel.current(), 3);
        assert_eq!(clock.pending(), 1);
    }

    proptest! {
        #[test]
        fn index_stays_in_range_with_one_active(
            n in 1usize..12,
            moves in prop::collection::vec(any::<bool>(), 0..64),
        ) {
            let mut carousel = carousel_of(n);
            for forward in moves {
                if forward { carousel.next_slide() } else { carousel.prev_slide() }
                prop_assert!(carousel.current() < n);
                prop_assert_eq!(carousel.slides().active(), Some(carousel.current()));
                prop_assert_eq!(carousel.indicators().active(), Some(carousel.current()));
            }
        }

        #[test]
        fn next_then_prev_round_trips(n in 1usize..12, start in 0usize..12, next_first in any::<bool>()) {
            let mut carousel = carousel_of(n);
            let start = start % n;
            carousel.show_slide(start);
            if next_first {
                carousel.next_slide();
                carousel.prev_slide();
            } else {
                carousel.prev_slide();
                carousel.next_slide();
            }
            prop_assert_eq!(carousel.current(), start);
        }

        #[test]
        fn n_nexts_return_to_start(n in 1usize..12, start in 0usize..12) {
            let mut carousel = carousel_of(n);
            let start = start % n;
            carousel.show_slide(start);
            for _ in 0..n {
                carousel.next_slide();
            }
            prop_assert_eq!(carousel.current(), start);
        }
    }
}
