use serde::Serialize;

/// Coarse maintainability bucket derived from the normalized index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum MaintainabilityLevel {
    /// Normalized index >= 85.
    High,
    /// Normalized index >= 65.
    Moderate,
    /// Everything below.
    Low,
}

impl std::fmt::Display for MaintainabilityLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::High => write!(f, "High"),
            Self::Moderate => write!(f, "Moderate"),
            Self::Low => write!(f, "Low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
/// Composite maintainability score for one method.
pub struct MaintainabilityScore {
    /// Halstead volume input.
    pub volume: f64,
    /// Cyclomatic complexity input.
    pub cyclomatic: usize,
    /// Lines of code input.
    pub lines_of_code: usize,
    /// Raw (unnormalized) maintainability index.
    pub raw: f64,
    /// Index normalized to 0-100.
    pub normalized: f64,
    /// Bucketed level.
    pub level: MaintainabilityLevel,
}

/// Computes the Maintainability Index.
///
/// Formula:
/// MI = 171 - 5.2 * ln(V) - 0.23 * G - 16.2 * ln(LOC)
///
/// Where:
/// - V = Halstead Volume
/// - G = Cyclomatic Complexity
/// - LOC = Lines of Code
///
/// The raw index is 0 when volume or LOC is not positive. The normalized
/// index scales raw by 100/171 and clamps to [0, 100].
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn mi_compute(volume: f64, cyclomatic: usize, lines_of_code: usize) -> MaintainabilityScore {
    let raw = if volume <= 0.0 || lines_of_code == 0 {
        0.0
    } else {
        171.0 - 5.2 * volume.ln() - 0.23 * (cyclomatic as f64) - 16.2 * (lines_of_code as f64).ln()
    };

    let normalized = (raw / 171.0 * 100.0).clamp(0.0, 100.0);

    MaintainabilityScore {
        volume,
        cyclomatic,
        lines_of_code,
        raw,
        normalized,
        level: mi_level(normalized),
    }
}

/// Buckets a normalized maintainability index.
///
/// High: >= 85
/// Moderate: >= 65
/// Low: < 65
#[must_use]
pub fn mi_level(normalized: f64) -> MaintainabilityLevel {
    if normalized >= 85.0 {
        MaintainabilityLevel::High
    } else if normalized >= 65.0 {
        MaintainabilityLevel::Moderate
    } else {
        MaintainabilityLevel::Low
    }
}

/// Ranks the Cyclomatic Complexity.
///
/// A: 1 - 5
/// B: 6 - 10
/// C: 11 - 20
/// D: 21 - 30
/// E: 31 - 40
/// F: 41+
#[must_use]
pub fn cc_rank(cc: usize) -> char {
    if cc <= 5 {
        'A'
    } else if cc <= 10 {
        'B'
    } else if cc <= 20 {
        'C'
    } else if cc <= 30 {
        'D'
    } else if cc <= 40 {
        'E'
    } else {
        'F'
    }
}
