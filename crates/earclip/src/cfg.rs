//! Tolerance defaults for ear clipping.
//!
//! Policy
//! - Defaults are fixed constants and keep results compatible with the
//!   built-in scenarios. `EarClipCfg` lets callers override them per polygon
//!   or per load.

/// Slack for the closed point-in-triangle test: a cross product `>= -INSIDE_EPS`
/// counts as "on the inner side" of an edge.
pub const INSIDE_EPS: f64 = 1e-12;
/// Per-coordinate tolerance when trimming a closing duplicate record.
pub const DUP_EPS: f64 = 1e-12;

/// Tolerance configuration shared by the engine and the loader.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EarClipCfg {
    /// Magnitude of the containment slack (applied as `-eps_inside`).
    pub eps_inside: f64,
    /// Per-coordinate equality tolerance for the closing-duplicate check.
    pub eps_dup: f64,
}

impl Default for EarClipCfg {
    fn default() -> Self {
        Self {
            eps_inside: INSIDE_EPS,
            eps_dup: DUP_EPS,
        }
    }
}
