//! Time-of-day theme selection with manual override.
//!
//! The selector is a small state machine over [`Theme`]. In automatic mode the
//! active theme follows [`theme_for_hour`]; a manual selection pins a theme
//! until the override deadline passes, after which the hour rule is applied
//! again.

use super::constants::{
    EVENING_START_HOUR, MANUAL_OVERRIDE_TIMEOUT, MORNING_START_HOUR, NIGHT_START_HOUR,
};
use super::error::FxError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Theme {
    Morning,
    Evening,
    Night,
}

impl Theme {
    pub const ALL: [Theme; 3] = [Theme::Morning, Theme::Evening, Theme::Night];

    pub fn name(self) -> &'static str {
        match self {
            Theme::Morning => "morning",
            Theme::Evening => "evening",
            Theme::Night => "night",
        }
    }

    /// Palette is a pure function of the theme.
    pub fn palette(self) -> Palette {
        match self {
            Theme::Morning => Palette {
                colors: [
                    [1.0, 0.78, 0.62], // peach
                    [1.0, 0.86, 0.45], // gold
                    [0.98, 0.58, 0.68], // rose
                ],
            },
            Theme::Evening => Palette {
                colors: [
                    [0.96, 0.36, 0.52], // rose
                    [0.86, 0.28, 0.72], // magenta
                    [0.62, 0.36, 0.92], // violet
                ],
            },
            Theme::Night => Palette {
                colors: [
                    [0.30, 0.32, 0.78], // indigo
                    [0.84, 0.86, 0.94], // silver
                    [0.72, 0.64, 0.96], // lavender
                ],
            },
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Theme {
    type Err = FxError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "morning" => Ok(Theme::Morning),
            "evening" => Ok(Theme::Evening),
            "night" => Ok(Theme::Night),
            other => Err(FxError::UnknownTheme(other.to_string())),
        }
    }
}

/// Three RGB colors (0..1) consumed by the particle and trail effects.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub colors: [[f32; 3]; 3],
}

impl Palette {
    #[inline]
    pub fn color(&self, i: usize) -> [f32; 3] {
        self.colors[i % self.colors.len()]
    }

    pub fn primary(&self) -> [f32; 3] {
        self.colors[0]
    }
}

/// Automatic theme for a local hour (0..=23).
#[inline]
pub fn theme_for_hour(hour: u32) -> Theme {
    if (MORNING_START_HOUR..EVENING_START_HOUR).contains(&hour) {
        Theme::Morning
    } else if (EVENING_START_HOUR..NIGHT_START_HOUR).contains(&hour) {
        Theme::Evening
    } else {
        Theme::Night
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ThemeMode {
    Automatic,
    /// Manual selection active until the given instant.
    Manual { until: Duration },
}

/// Emitted whenever the active theme actually changes.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ThemeChange {
    pub from: Theme,
    pub to: Theme,
}

#[derive(Clone, Debug)]
pub struct ThemeSelector {
    active: Theme,
    mode: ThemeMode,
    override_timeout: Duration,
}

impl ThemeSelector {
    pub fn new(hour: u32) -> Self {
        Self::with_timeout(hour, MANUAL_OVERRIDE_TIMEOUT)
    }

    pub fn with_timeout(hour: u32, override_timeout: Duration) -> Self {
        Self {
            active: theme_for_hour(hour),
            mode: ThemeMode::Automatic,
            override_timeout,
        }
    }

    pub fn active(&self) -> Theme {
        self.active
    }

    pub fn palette(&self) -> Palette {
        self.active.palette()
    }

    pub fn mode(&self) -> ThemeMode {
        self.mode
    }

    pub fn is_automatic(&self) -> bool {
        self.mode == ThemeMode::Automatic
    }

    pub fn override_timeout(&self) -> Duration {
        self.override_timeout
    }

    /// Manual selection: pins `theme` and disables automatic mode until
    /// `now + override_timeout`. Re-selecting restarts the timeout.
    pub fn select(&mut self, theme: Theme, now: Duration) -> Option<ThemeChange> {
        self.mode = ThemeMode::Manual {
            until: now + self.override_timeout,
        };
        log::info!("[theme] manual {} for {:?}", theme, self.override_timeout);
        self.apply(theme)
    }

    /// Return to automatic mode right away.
    pub fn resume_auto(&mut self, hour: u32) -> Option<ThemeChange> {
        self.mode = ThemeMode::Automatic;
        self.apply(theme_for_hour(hour))
    }

    /// Expire a manual override whose deadline has passed. No-op otherwise.
    pub fn expire_override(&mut self, now: Duration, hour: u32) -> Option<ThemeChange> {
        match self.mode {
            ThemeMode::Manual { until } if now >= until => {
                log::info!("[theme] manual override expired");
                self.resume_auto(hour)
            }
            _ => None,
        }
    }

    /// Periodic poll. While manual, only checks for override expiry; while
    /// automatic, re-applies the hour rule.
    pub fn poll(&mut self, now: Duration, hour: u32) -> Option<ThemeChange> {
        match self.mode {
            ThemeMode::Manual { .. } => self.expire_override(now, hour),
            ThemeMode::Automatic => self.apply(theme_for_hour(hour)),
        }
    }

    fn apply(&mut self, theme: Theme) -> Option<ThemeChange> {
        if theme == self.active {
            return None;
        }
        let change = ThemeChange {
            from: self.active,
            to: theme,
        };
        self.active = theme;
        Some(change)
    }
}
