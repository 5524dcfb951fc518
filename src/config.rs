use log::Level;

use crate::animation::Pacing;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose latch/counter transitions while developing
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}

/// How long a stat counter takes to count up once revealed.
pub const COUNTER_DURATION_MS: u32 = 2000;
/// One animation frame at ~60Hz.
pub const COUNTER_TICK_MS: u32 = 16;
pub const COUNTER_THRESHOLD: f64 = 0.3;
pub const COUNTER_PACING: Pacing = Pacing::Elapsed;

pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.15;
pub const SECTION_REVEAL_THRESHOLD: f64 = 0.1;
pub const ABOUT_REVEAL_THRESHOLD: f64 = 0.15;

pub const NAV_SCROLLED_OFFSET_PX: f64 = 50.0;
pub const INQUIRY_NOTICE_MS: u32 = 5000;
