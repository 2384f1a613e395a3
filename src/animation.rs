//! Motion presets shared by the decorative components.
//!
//! Animations are CSS driven; these helpers only produce the classes and inline
//! styles (delays, durations, transforms) the components attach.

use std::time::Duration;

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

pub const FAST: Duration = Duration::from_millis(300);
pub const MEDIUM: Duration = Duration::from_millis(600);
pub const SLOW: Duration = Duration::from_millis(1000);

pub const EASE_OUT: &str = "cubic-bezier(0.33, 1, 0.68, 1)";
pub const EASE_IN_OUT: &str = "cubic-bezier(0.42, 0, 0.58, 1)";
/// Overshooting curve used by the word-by-word headline reveal.
pub const EASE_BACK: &str = "cubic-bezier(0.34, 1.56, 0.64, 1)";

/// Largest card tilt, in degrees, when the pointer sits on an edge.
pub const MAX_TILT: f64 = 15.0;

/// Entry animations; each maps to a keyframe class in `input.css`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    FadeInUp,
    SlideInLeft,
    SlideInRight,
    TextReveal,
    Stagger,
}

impl Reveal {
    pub fn class(self) -> &'static str {
        match self {
            Self::FadeInUp => "reveal-fade-up",
            Self::SlideInLeft => "reveal-slide-left",
            Self::SlideInRight => "reveal-slide-right",
            Self::TextReveal => "reveal-text",
            Self::Stagger => "reveal-stagger",
        }
    }

    pub fn easing(self) -> &'static str {
        match self {
            Self::TextReveal => EASE_BACK,
            _ => EASE_OUT,
        }
    }

    /// Delay and timing function for the `index`th revealed sibling.
    pub fn style(self, index: usize, base: Duration, step: Duration) -> String {
        format!(
            "{} animation-timing-function: {};",
            stagger(index, base, step),
            self.easing()
        )
    }

    /// Alternating left/right entry used by two-column grids.
    pub fn alternating(index: usize) -> Self {
        if index % 2 == 0 {
            Self::SlideInLeft
        } else {
            Self::SlideInRight
        }
    }
}

fn secs(d: Duration) -> String {
    format!("{:.2}s", d.as_secs_f64())
}

/// Inline style delaying the `index`th child by `step` after `base`.
pub fn stagger(index: usize, base: Duration, step: Duration) -> String {
    let delay = base + step * index as u32;
    format!("animation-delay: {};", secs(delay))
}

/// Delays for a headline revealed one word at a time.
pub fn word_delays(text: &str, base: Duration, step: Duration) -> Vec<(&str, String)> {
    text.split_whitespace()
        .enumerate()
        .map(|(i, word)| (word, stagger(i, base, step)))
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tilt {
    pub rotate_x: f64,
    pub rotate_y: f64,
}

impl Tilt {
    pub const FLAT: Tilt = Tilt {
        rotate_x: 0.0,
        rotate_y: 0.0,
    };

    /// Rotation for a pointer at (`x`, `y`) inside a `width` by `height` box,
    /// both measured from the box's top-left corner.
    pub fn from_pointer(x: f64, y: f64, width: f64, height: f64) -> Self {
        if width <= 0.0 || height <= 0.0 {
            return Self::FLAT;
        }
        let dx = (x - width / 2.0).clamp(-width / 2.0, width / 2.0);
        let dy = (y - height / 2.0).clamp(-height / 2.0, height / 2.0);
        Self {
            rotate_x: -(dy / height) * MAX_TILT * 2.0,
            rotate_y: (dx / width) * MAX_TILT * 2.0,
        }
    }

    pub fn style(&self) -> String {
        format!(
            "transform: perspective(1000px) rotateX({:.2}deg) rotateY({:.2}deg); transform-style: preserve-3d;",
            self.rotate_x, self.rotate_y
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    /// percent of container width
    pub x: f64,
    /// percent of container height
    pub y: f64,
    pub size: f64,
    pub duration: f64,
    pub delay: f64,
}

impl Particle {
    pub fn style(&self) -> String {
        format!(
            "left: {:.1}%; top: {:.1}%; width: {:.1}px; height: {:.1}px; animation-duration: {:.2}s; animation-delay: {:.2}s;",
            self.x, self.y, self.size, self.size, self.duration, self.delay
        )
    }
}

/// A deterministic field of floating particles. The same `seed` always yields
/// the same layout.
pub fn particles(count: usize, seed: u64, min_size: f64) -> Vec<Particle> {
    // ChaCha gives the same stream on the server and in wasm32
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|_| Particle {
            x: rng.random::<f64>() * 100.0,
            y: rng.random::<f64>() * 100.0,
            size: rng.random::<f64>() * 3.0 + min_size,
            duration: rng.random::<f64>() * 4.0 + 6.0,
            delay: rng.random::<f64>() * 2.0,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarqueeDirection {
    Left,
    Right,
}

impl MarqueeDirection {
    pub fn class(self) -> &'static str {
        match self {
            Self::Left => "marquee-left",
            Self::Right => "marquee-right",
        }
    }
}

/// Copies of the item list laid end to end so the loop never shows a gap.
pub const MARQUEE_REPEAT: usize = 3;

/// Hovering slows the marquee down rather than stopping it.
pub fn marquee_duration(base: Duration, hovered: bool) -> Duration {
    if hovered {
        base.mul_f64(1.5)
    } else {
        base
    }
}

pub fn marquee_style(base: Duration, hovered: bool) -> String {
    format!(
        "animation-duration: {};",
        secs(marquee_duration(base, hovered))
    )
}

pub fn repeat_items<T: Clone>(items: &[T], times: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(items.len() * times);
    for _ in 0..times {
        out.extend_from_slice(items);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stagger() {
        assert_eq!(
            stagger(0, Duration::ZERO, Duration::from_millis(100)),
            "animation-delay: 0.00s;"
        );
        assert_eq!(
            stagger(3, Duration::from_millis(100), Duration::from_millis(150)),
            "animation-delay: 0.55s;"
        );
    }

    #[test]
    fn test_word_delays() {
        let words = word_delays("Let's  build   together", Duration::ZERO, Duration::from_millis(400));
        assert_eq!(words.len(), 3);
        assert_eq!(words[0].0, "Let's");
        assert_eq!(words[2], ("together", "animation-delay: 0.80s;".to_string()));
    }

    #[test]
    fn test_tilt_center_is_flat() {
        let t = Tilt::from_pointer(100.0, 50.0, 200.0, 100.0);
        assert_eq!(t, Tilt::FLAT);
    }

    #[test]
    fn test_tilt_corners_hit_max() {
        let top_right = Tilt::from_pointer(200.0, 0.0, 200.0, 100.0);
        assert_eq!(top_right.rotate_x, MAX_TILT);
        assert_eq!(top_right.rotate_y, MAX_TILT);

        let bottom_left = Tilt::from_pointer(0.0, 100.0, 200.0, 100.0);
        assert_eq!(bottom_left.rotate_x, -MAX_TILT);
        assert_eq!(bottom_left.rotate_y, -MAX_TILT);

        // outside the box is clamped
        let far = Tilt::from_pointer(900.0, -900.0, 200.0, 100.0);
        assert_eq!(far, top_right);
    }

    #[test]
    fn test_tilt_degenerate_box() {
        assert_eq!(Tilt::from_pointer(5.0, 5.0, 0.0, 10.0), Tilt::FLAT);
    }

    #[test]
    fn test_particles_are_deterministic_and_bounded() {
        let a = particles(20, 42, 1.0);
        let b = particles(20, 42, 1.0);
        assert_eq!(a, b);
        assert_ne!(a, particles(20, 7, 1.0));
        for p in &a {
            assert!((0.0..100.0).contains(&p.x));
            assert!((0.0..100.0).contains(&p.y));
            assert!((1.0..4.0).contains(&p.size));
            assert!((6.0..10.0).contains(&p.duration));
            assert!((0.0..2.0).contains(&p.delay));
        }
    }

    #[test]
    fn test_marquee() {
        let base = Duration::from_secs(20);
        assert_eq!(marquee_duration(base, false), base);
        assert_eq!(marquee_duration(base, true), Duration::from_secs(30));
        assert_eq!(marquee_style(base, true), "animation-duration: 30.00s;");
        assert_eq!(repeat_items(&[1, 2], MARQUEE_REPEAT), vec![1, 2, 1, 2, 1, 2]);
    }

    #[test]
    fn test_alternating_reveal() {
        assert_eq!(Reveal::alternating(0), Reveal::SlideInLeft);
        assert_eq!(Reveal::alternating(1), Reveal::SlideInRight);
        assert_eq!(Reveal::FadeInUp.class(), "reveal-fade-up");
    }

    #[test]
    fn test_reveal_style_carries_easing() {
        assert_eq!(
            Reveal::SlideInLeft.style(1, Duration::ZERO, Duration::from_millis(100)),
            format!("animation-delay: 0.10s; animation-timing-function: {EASE_OUT};")
        );
        assert_eq!(Reveal::TextReveal.easing(), EASE_BACK);
    }

    #[test]
    fn test_particles_zero_seed_is_usable() {
        let field = particles(5, 0, 2.0);
        assert_eq!(field.len(), 5);
        assert_ne!(field[0], field[1]);
        assert!(field.iter().all(|p| p.size >= 2.0));
    }
}
