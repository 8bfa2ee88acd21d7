//! Handler timing instrumentation.
//!
//! Input handlers run on every pointer move and wheel notch, so each one is
//! wrapped in [`profile_scope!`]. With the `profiling` feature disabled the
//! macro compiles to nothing.
//!
//! ```ignore
//! fn on_pointer_move(&mut self) {
//!     profile_scope!("on_pointer_move");
//!     // ... event handling code ...
//! }
//! ```

use crate::constants::HANDLER_WARN_MS;
use std::time::Instant;
use tracing::{trace, warn};

/// Profile a scope with the given name. Zero-cost when profiling is disabled.
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {
        #[cfg(feature = "profiling")]
        let _timer = $crate::perf::ScopedTimer::for_handler($name);
        #[cfg(not(feature = "profiling"))]
        let _ = $name;
    };
}

pub use profile_scope;

/// A scoped timer that logs its duration on drop when it exceeds a threshold.
pub struct ScopedTimer {
    name: &'static str,
    start: Instant,
    threshold_ms: f64,
}

impl ScopedTimer {
    pub fn new(name: &'static str, threshold_ms: f64) -> Self {
        Self {
            name,
            start: Instant::now(),
            threshold_ms,
        }
    }

    /// Timer with the input-handler budget.
    pub fn for_handler(name: &'static str) -> Self {
        Self::new(name, HANDLER_WARN_MS)
    }

    /// Get elapsed time without stopping the timer.
    pub fn elapsed_ms(&self) -> f64 {
        self.start.elapsed().as_secs_f64() * 1000.0
    }

    pub fn name(&self) -> &'static str {
        self.name
    }
}

impl Drop for ScopedTimer {
    fn drop(&mut self) {
        let elapsed_ms = self.elapsed_ms();
        if elapsed_ms > self.threshold_ms {
            warn!(
                handler = self.name,
                elapsed_ms,
                budget_ms = self.threshold_ms,
                "input handler over budget"
            );
        } else {
            trace!(handler = self.name, elapsed_ms, "handler timed");
        }
    }
}
