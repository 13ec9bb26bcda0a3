#[cfg(not(all(test, feature = "loom")))]
use core::sync::atomic::{AtomicU8, Ordering};

#[cfg(all(test, feature = "loom"))]
use loom::sync::atomic::{AtomicU8, Ordering};

use crate::levels::LogLevel;

/// Holds the current threshold as a single byte so readers never observe a
/// partially written level.
pub(crate) struct LevelCell {
    raw: AtomicU8,
}

impl LevelCell {
    pub(crate) fn new(level: LogLevel) -> Self {
        Self {
            raw: AtomicU8::new(level as u8),
        }
    }

    #[inline]
    pub(crate) fn load(&self) -> LogLevel {
        // Only `store` writes here, and it only writes valid discriminants.
        LogLevel::try_from(self.raw.load(Ordering::Acquire)).unwrap_or_default()
    }

    #[inline]
    pub(crate) fn store(&self, level: LogLevel) {
        self.raw.store(level as u8, Ordering::Release);
    }
}

impl Default for LevelCell {
    fn default() -> Self {
        Self::new(LogLevel::default())
    }
}

impl std::fmt::Debug for LevelCell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("LevelCell").field(&self.load()).finish()
    }
}
