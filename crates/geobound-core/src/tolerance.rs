/// Precision used when comparing coordinates approximately.
///
/// Exact comparisons never consult a tolerance; this only applies to the
/// explicit `approx_eq` style helpers.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Maximum absolute difference per coordinate (in coordinate units)
    pub linear: f64,
}

impl Tolerance {
    pub const DEFAULT_LINEAR: f64 = 1e-9;

    pub fn new(linear: f64) -> Self {
        Self { linear }
    }

    pub fn default_precision() -> Self {
        Self {
            linear: Self::DEFAULT_LINEAR,
        }
    }

    pub fn tight() -> Self {
        Self { linear: 1e-12 }
    }

    /// Check if two coordinates are equal within linear tolerance
    pub fn linear_eq(self, a: f64, b: f64) -> bool {
        (a - b).abs() <= self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::default_precision()
    }
}
