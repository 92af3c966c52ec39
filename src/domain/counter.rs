// SPDX-License-Identifier: MPL-2.0
//! Statistic counter parsing and frame stepping.
//!
//! A counter's text is split twice: the target is every ASCII digit
//! concatenated, the suffix is every other character in order. Text with
//! internal separators therefore keeps the separator in the suffix
//! (`"1,000"` animates to `"1000,"`).

use std::time::Duration;

/// Parsed counter text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CounterTarget {
    target: u64,
    suffix: String,
}

impl CounterTarget {
    /// Parses counter text. Returns `None` when the text has no digits or
    /// the digits overflow `u64`.
    #[must_use]
    pub fn parse(text: &str) -> Option<Self> {
        let digits: String = text.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return None;
        }
        let target = digits.parse().ok()?;
        let suffix = text.chars().filter(|c| !c.is_ascii_digit()).collect();
        Some(Self { target, suffix })
    }

    #[must_use]
    pub fn target(&self) -> u64 {
        self.target
    }

    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// Text shown when the animation completes.
    #[must_use]
    pub fn final_text(&self) -> String {
        format!("{}{}", self.target, self.suffix)
    }
}

/// Frame produced by one animation step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    pub text: String,
    pub done: bool,
}

/// Linear count-up from zero to a target.
#[derive(Debug, Clone)]
pub struct CountUp {
    target: CounterTarget,
    increment: f64,
    current: f64,
}

impl CountUp {
    /// Creates an animation reaching the target after `duration / tick` steps.
    #[must_use]
    pub fn new(target: CounterTarget, duration: Duration, tick: Duration) -> Self {
        let steps = if tick.is_zero() {
            1.0
        } else {
            (duration.as_nanos() as f64 / tick.as_nanos() as f64).max(1.0)
        };
        let increment = target.target as f64 / steps;
        Self {
            target,
            increment,
            current: 0.0,
        }
    }

    /// Advances one tick.
    pub fn step(&mut self) -> Frame {
        self.current += self.increment;
        if self.current >= self.target.target as f64 {
            Frame {
                text: self.target.final_text(),
                done: true,
            }
        } else {
            Frame {
                text: format!("{}{}", self.current.floor() as u64, self.target.suffix),
                done: false,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DURATION: Duration = Duration::from_millis(2000);
    const TICK: Duration = Duration::from_millis(16);

    fn run_to_end(text: &str) -> (Vec<Frame>, CounterTarget) {
        let target = CounterTarget::parse(text).expect("counter text has digits");
        let mut count_up = CountUp::new(target.clone(), DURATION, TICK);
        let mut frames = Vec::new();
        for _ in 0..1_000 {
            let frame = count_up.step();
            let done = frame.done;
            frames.push(frame);
            if done {
                break;
            }
        }
        (frames, target)
    }

    #[test]
    fn parse_splits_target_and_suffix() {
        let parsed = CounterTarget::parse("250+").unwrap();
        assert_eq!(parsed.target(), 250);
        assert_eq!(parsed.suffix(), "+");
    }

    #[test]
    fn parse_keeps_thousands_separator_in_suffix() {
        let parsed = CounterTarget::parse("1,000").unwrap();
        assert_eq!(parsed.target(), 1000);
        assert_eq!(parsed.suffix(), ",");
        assert_eq!(parsed.final_text(), "1000,");
    }

    #[test]
    fn parse_rejects_text_without_digits() {
        assert!(CounterTarget::parse("many").is_none());
        assert!(CounterTarget::parse("").is_none());
    }

    #[test]
    fn parse_rejects_overflowing_digits() {
        assert!(CounterTarget::parse("99999999999999999999999").is_none());
    }

    #[test]
    fn count_up_ends_with_exact_text() {
        let (frames, _) = run_to_end("250+");
        let last = frames.last().unwrap();
        assert!(last.done);
        assert_eq!(last.text, "250+");
        // 125 steps of 2.0, give or take float accumulation
        assert!((125..=126).contains(&frames.len()));
    }

    #[test]
    fn intermediate_frames_floor_and_keep_suffix() {
        let (frames, _) = run_to_end("50K");
        assert_eq!(frames[0].text, "0K");
        assert!(frames.iter().all(|f| f.text.ends_with('K')));
        assert!(!frames[0].done);
    }

    #[test]
    fn zero_target_finishes_on_first_step() {
        let (frames, _) = run_to_end("0+");
        assert_eq!(frames.len(), 1);
        assert_eq!(frames[0].text, "0+");
    }
}
