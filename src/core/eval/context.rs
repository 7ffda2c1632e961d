//! Per-evaluation context supplied by the caller.

/// Interpretation of trigonometric arguments and results.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AngleMode {
    /// Radians (default)
    #[default]
    Radians,
    /// Degrees
    Degrees,
}

impl AngleMode {
    /// Convert an input angle in this mode to radians.
    pub fn to_radians(self, value: f64) -> f64 {
        match self {
            AngleMode::Radians => value,
            AngleMode::Degrees => value.to_radians(),
        }
    }

    /// Convert a result in radians to this mode.
    pub fn from_radians(self, value: f64) -> f64 {
        match self {
            AngleMode::Radians => value,
            AngleMode::Degrees => value.to_degrees(),
        }
    }
}

/// Evaluation context: angle mode plus the memory-slot value.
///
/// Owned and mutated by the caller (the REPL); the core reads it for one
/// `evaluate` call and holds no reference afterwards.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvaluationContext {
    pub angle_mode: AngleMode,
    pub memory: f64,
}

impl EvaluationContext {
    /// Create a context with the given angle mode and an empty memory slot.
    pub fn new(angle_mode: AngleMode) -> Self {
        Self {
            angle_mode,
            memory: 0.0,
        }
    }
}
