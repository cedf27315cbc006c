//! Clock abstraction for testability.
//!
//! Export filenames embed the current wall time; routing time through a
//! trait lets production code use the system clock while tests pin a fixed
//! instant and get deterministic bytes and filenames.

use chrono::{DateTime, FixedOffset, Utc};

/// Fixed offset for America/Sao_Paulo. Brazil has not observed daylight
/// saving since 2019, so -03:00 is exact for all current dates.
pub fn sao_paulo_offset() -> FixedOffset {
    FixedOffset::west_opt(3 * 3600).expect("static UTC-3 offset is valid")
}

/// Source of the wall-clock time used for export filenames.
pub trait Clock: std::fmt::Debug {
    /// Current time in America/Sao_Paulo.
    fn now_sao_paulo(&self) -> DateTime<FixedOffset>;
}

/// Production implementation using the system clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_sao_paulo(&self) -> DateTime<FixedOffset> {
        Utc::now().with_timezone(&sao_paulo_offset())
    }
}

/// Test implementation pinned to a fixed instant.
#[derive(Debug, Clone)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now_sao_paulo(&self) -> DateTime<FixedOffset> {
        self.0
    }
}
