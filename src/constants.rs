//! Engine-wide constants.
//!
//! Centralizes the tuning values shared by the gesture handlers and the
//! geometry mapper.

// ============================================================================
// Touch
// ============================================================================

/// Multiplier applied to raw touch movement before it becomes a scroll delta.
/// 1:1 finger tracking feels too fast on a custom scroll surface.
pub const TOUCH_DAMPING: f32 = 0.8;

// ============================================================================
// Wheel Normalization
// ============================================================================

/// Factor applied to DOM-style `detail` deltas (positive = down, in lines).
pub const WHEEL_DETAIL_FACTOR: f32 = -2.0;

/// Pixels scrolled per wheel line for line-based deltas.
pub const WHEEL_LINE_HEIGHT: f32 = 20.0;

// ============================================================================
// Geometry
// ============================================================================

/// Tolerance used when comparing geometric values.
pub const GEOMETRY_EPSILON: f32 = 1e-4;

// ============================================================================
// Structural Roles
// ============================================================================

/// Default role name of the scroll bar (track) element.
pub const DEFAULT_CLASS_BAR: &str = "scrollbar";

/// Default role name of the draggable handle element.
pub const DEFAULT_CLASS_HANDLE: &str = "handle";

/// Default role name of the scrollable content element.
pub const DEFAULT_CLASS_CONTENT: &str = "content";

// ============================================================================
// Instrumentation
// ============================================================================

/// Handler duration above which a slow-handler warning is logged (ms).
pub const HANDLER_WARN_MS: f64 = 4.0;
