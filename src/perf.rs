//! Scoped profiling instrumentation for interaction hot paths.
//!
//! Touch move handling and point queries run dozens of times per second
//! during a gesture. Enable the `profiling` cargo feature to emit per-scope
//! timing through `tracing`; with the feature off the macros compile to
//! nothing.

#[cfg(feature = "profiling")]
use std::time::Instant;

#[cfg(feature = "profiling")]
use tracing::trace;

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
///
/// # Example
/// ```ignore
/// use dropdeck::profile_scope;
///
/// fn handle_touch_move() {
///     profile_scope!("touch_move");
///     // ... event handling code ...
/// }
/// ```
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::start($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name; // Suppress unused variable warning
    };
}

/// RAII timer emitting a `tracing` event with the elapsed time on drop.
#[cfg(feature = "profiling")]
pub struct ScopedTimer {
    name: &'static str,
    started: Instant,
}

#[cfg(feature = "profiling")]
impl ScopedTimer {
    pub fn start(name: &'static str) -> Self {
        Self {
            name,
            started: Instant::now(),
        }
    }
}

#[cfg(feature = "profiling")]
impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_us = self.started.elapsed().as_micros();
        trace!(scope = self.name, elapsed_us, "scope timing");
    }
}
