//! Numerik-Konstanten und Laufzeit-Optionen der Geometrie-Auswertung.
//!
//! `GeometryOptions` enthält die zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use serde::{Deserialize, Serialize};

// ── Integration ─────────────────────────────────────────────────────

/// Absolute Toleranz der adaptiven Simpson-Integration.
pub const INTEGRATION_TOLERANCE: f64 = 1e-10;
/// Maximale Rekursionstiefe der adaptiven Simpson-Integration.
pub const INTEGRATION_MAX_DEPTH: usize = 20;

// ── Stationssuche ───────────────────────────────────────────────────

/// Absolute Toleranz der Bisektion bei der Umkehrung von s(p).
pub const PARAM_SEARCH_TOLERANCE: f64 = 1e-10;
/// Maximale Bisektionsschritte bei der Umkehrung von s(p).
pub const PARAM_SEARCH_MAX_ITERATIONS: usize = 60;

// ── Laufzeit-Optionen ───────────────────────────────────────────────

/// Numerik-Optionen der Geometrie-Auswertung.
///
/// Betreffen ausschließlich ParamPoly3-Segmente im normalized-Modus;
/// alle anderen Segmenttypen werten geschlossen aus.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeometryOptions {
    /// Absolute Toleranz der Bogenlängen-Integration
    pub integration_tolerance: f64,
    /// Maximale Rekursionstiefe der Bogenlängen-Integration
    pub integration_max_depth: usize,
}

impl Default for GeometryOptions {
    fn default() -> Self {
        Self {
            integration_tolerance: INTEGRATION_TOLERANCE,
            integration_max_depth: INTEGRATION_MAX_DEPTH,
        }
    }
}
