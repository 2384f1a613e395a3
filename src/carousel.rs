//! Index controller behind the featured-projects carousel.
//!
//! The controller knows nothing about timers. The view feeds it elapsed time
//! through [`Carousel::elapse`] from a fixed heartbeat, and both the autoplay
//! interval and the idle-resume countdown are measured from those ticks.

use std::time::Duration;

/// Time between automatic advances while autoplay is on and nothing is hovered.
pub const AUTOPLAY_INTERVAL: Duration = Duration::from_secs(5);
/// Idle time after a manual interaction before autoplay turns back on.
pub const RESUME_DELAY: Duration = Duration::from_secs(8);
/// How often the view calls [`Carousel::elapse`].
pub const HEARTBEAT: Duration = Duration::from_millis(250);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> i32 {
        match self {
            Self::Forward => 1,
            Self::Backward => -1,
        }
    }

    /// Class for the slide-in transition of the entering card.
    pub fn enter_class(self) -> &'static str {
        match self {
            Self::Forward => "carousel-enter-right",
            Self::Backward => "carousel-enter-left",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    index: usize,
    direction: Direction,
    autoplay: bool,
    hovered: bool,
    since_advance: Duration,
    // Some while a manual interaction is waiting out RESUME_DELAY
    idle: Option<Duration>,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self {
            len,
            index: 0,
            direction: Direction::Forward,
            autoplay: true,
            hovered: false,
            since_advance: Duration::ZERO,
            idle: None,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn is_autoplay(&self) -> bool {
        self.autoplay
    }

    pub fn is_hovered(&self) -> bool {
        self.hovered
    }

    pub fn next(&mut self) {
        if self.is_empty() {
            return;
        }
        self.step(Direction::Forward);
        self.interrupt();
    }

    pub fn prev(&mut self) {
        if self.is_empty() {
            return;
        }
        self.step(Direction::Backward);
        self.interrupt();
    }

    /// Jumps straight to `index`, as when a dot is clicked. Out-of-range
    /// indices are ignored and return `false`.
    pub fn go_to(&mut self, index: usize) -> bool {
        if index >= self.len {
            return false;
        }
        self.direction = if index >= self.index {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.index = index;
        self.interrupt();
        true
    }

    pub fn set_hovered(&mut self, hovered: bool) {
        if self.hovered && !hovered {
            // leaving restarts the interval rather than firing immediately
            self.since_advance = Duration::ZERO;
        }
        self.hovered = hovered;
    }

    /// Advances both clocks by `dt`. Returns `true` when the visible index changed.
    pub fn elapse(&mut self, dt: Duration) -> bool {
        if let Some(idle) = self.idle {
            let idle = idle + dt;
            if idle >= RESUME_DELAY {
                log::debug!("carousel: resuming autoplay at index {}", self.index);
                self.idle = None;
                self.autoplay = true;
                self.since_advance = Duration::ZERO;
            } else {
                self.idle = Some(idle);
            }
            return false;
        }
        if !self.autoplay || self.hovered || self.len < 2 {
            return false;
        }
        self.since_advance += dt;
        if self.since_advance < AUTOPLAY_INTERVAL {
            return false;
        }
        self.since_advance -= AUTOPLAY_INTERVAL;
        self.step(Direction::Forward);
        true
    }

    fn step(&mut self, direction: Direction) {
        self.direction = direction;
        self.index = match direction {
            Direction::Forward => (self.index + 1) % self.len,
            Direction::Backward => (self.index + self.len - 1) % self.len,
        };
    }

    fn interrupt(&mut self) {
        self.autoplay = false;
        self.since_advance = Duration::ZERO;
        self.idle = Some(Duration::ZERO);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_for(carousel: &mut Carousel, total: Duration) -> usize {
        let mut advanced = 0;
        let mut elapsed = Duration::ZERO;
        while elapsed < total {
            if carousel.elapse(HEARTBEAT) {
                advanced += 1;
            }
            elapsed += HEARTBEAT;
        }
        advanced
    }

    #[test]
    fn test_next_cycles_back_to_start() {
        for n in 1..=6 {
            let mut c = Carousel::new(n);
            let start = c.index();
            for _ in 0..n {
                c.next();
            }
            assert_eq!(c.index(), start, "n = {n}");
        }
    }

    #[test]
    fn test_prev_wraps_and_tracks_direction() {
        let mut c = Carousel::new(3);
        c.prev();
        assert_eq!(c.index(), 2);
        assert_eq!(c.direction(), Direction::Backward);
        assert_eq!(c.direction().sign(), -1);
        c.next();
        assert_eq!(c.index(), 0);
        assert_eq!(c.direction(), Direction::Forward);
        assert!(!c.is_autoplay());
    }

    #[test]
    fn test_go_to_sets_index_and_disables_autoplay() {
        let mut c = Carousel::new(3);
        assert!(c.is_autoplay());
        assert!(c.go_to(2));
        assert_eq!(c.index(), 2);
        assert!(!c.is_autoplay());
        assert!(c.go_to(1));
        assert_eq!(c.direction(), Direction::Backward);
    }

    #[test]
    fn test_go_to_out_of_range_is_ignored() {
        let mut c = Carousel::new(3);
        assert!(!c.go_to(3));
        assert_eq!(c.index(), 0);
        assert!(c.is_autoplay());
    }

    #[test]
    fn test_autoplay_resumes_after_idle_delay() {
        let mut c = Carousel::new(3);
        c.go_to(1);
        run_for(&mut c, RESUME_DELAY - HEARTBEAT);
        assert!(!c.is_autoplay());
        c.elapse(HEARTBEAT);
        assert!(c.is_autoplay());
        assert_eq!(c.index(), 1);
    }

    #[test]
    fn test_later_interaction_restarts_idle_countdown() {
        let mut c = Carousel::new(3);
        c.next();
        run_for(&mut c, Duration::from_secs(6));
        c.next();
        run_for(&mut c, Duration::from_secs(6));
        assert!(!c.is_autoplay());
        run_for(&mut c, Duration::from_secs(2));
        assert!(c.is_autoplay());
    }

    #[test]
    fn test_autoplay_advances_every_interval() {
        let mut c = Carousel::new(3);
        assert_eq!(run_for(&mut c, AUTOPLAY_INTERVAL - HEARTBEAT), 0);
        assert!(c.elapse(HEARTBEAT));
        assert_eq!(c.index(), 1);
        assert_eq!(run_for(&mut c, AUTOPLAY_INTERVAL * 2), 2);
        assert_eq!(c.index(), 0);
        assert!(c.is_autoplay());
    }

    #[test]
    fn test_hover_pauses_autoplay() {
        let mut c = Carousel::new(3);
        run_for(&mut c, Duration::from_secs(4));
        c.set_hovered(true);
        assert_eq!(run_for(&mut c, Duration::from_secs(20)), 0);
        c.set_hovered(false);
        // the interval starts over on leave
        assert_eq!(run_for(&mut c, Duration::from_secs(4)), 0);
        assert_eq!(run_for(&mut c, Duration::from_secs(1)), 1);
    }

    #[test]
    fn test_hover_does_not_cancel_pending_resume() {
        let mut c = Carousel::new(3);
        c.go_to(1);
        c.set_hovered(true);
        assert!(c.is_hovered());
        run_for(&mut c, RESUME_DELAY);
        assert!(c.is_autoplay());
        // still paused by the hover
        assert_eq!(run_for(&mut c, AUTOPLAY_INTERVAL * 3), 0);
        assert_eq!(c.index(), 1);
        c.set_hovered(false);
        assert_eq!(run_for(&mut c, AUTOPLAY_INTERVAL), 1);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn test_timing_constants() {
        assert_eq!(AUTOPLAY_INTERVAL, Duration::from_secs(5));
        assert_eq!(RESUME_DELAY, Duration::from_secs(8));
        assert_eq!(HEARTBEAT, Duration::from_millis(250));
    }

    #[test]
    fn test_single_and_empty_never_advance() {
        let mut one = Carousel::new(1);
        assert_eq!(run_for(&mut one, Duration::from_secs(30)), 0);
        one.next();
        assert_eq!(one.index(), 0);

        let mut none = Carousel::new(0);
        none.next();
        none.prev();
        assert!(!none.go_to(0));
        assert_eq!(run_for(&mut none, Duration::from_secs(30)), 0);
        assert!(none.is_autoplay());
    }
}
