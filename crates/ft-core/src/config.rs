//! Configuration for a fortune session.

use std::path::PathBuf;
use std::time::Duration;

use crate::animation::{DEFAULT_ANIMATION, DEFAULT_FRAME_INTERVAL};
use crate::lang::Language;

/// Default pause before a fortune is revealed.
pub const DEFAULT_REVEAL_DELAY: Duration = Duration::from_millis(1200);

/// Configuration for a fortune session.
#[derive(Debug, Clone)]
pub struct FortuneConfig {
    /// Directory holding the four table files.
    pub data_dir: PathBuf,
    /// Language used until the user switches.
    pub language: Language,
    /// Pause before revealing a fortune.
    pub reveal_delay: Duration,
    /// Length of the score counter animation.
    pub animation: Duration,
    /// Spacing between animation frames.
    pub frame_interval: Duration,
}

impl Default for FortuneConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            language: Language::ZhHant,
            reveal_delay: DEFAULT_REVEAL_DELAY,
            animation: DEFAULT_ANIMATION,
            frame_interval: DEFAULT_FRAME_INTERVAL,
        }
    }
}

impl FortuneConfig {
    /// Set the data directory.
    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    /// Set the starting language.
    pub fn with_language(mut self, language: Language) -> Self {
        self.language = language;
        self
    }

    /// Set the reveal delay.
    pub fn with_reveal_delay(mut self, delay: Duration) -> Self {
        self.reveal_delay = delay;
        self
    }

    /// Set the animation length.
    pub fn with_animation(mut self, duration: Duration) -> Self {
        self.animation = duration;
        self
    }

    /// Set the frame interval.
    pub fn with_frame_interval(mut self, interval: Duration) -> Self {
        self.frame_interval = interval;
        self
    }

    /// Turn off the reveal delay and the counter animation.
    pub fn instant(self) -> Self {
        self.with_reveal_delay(Duration::ZERO)
            .with_animation(Duration::ZERO)
    }
}
