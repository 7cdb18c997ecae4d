//! Planar grid coordinates and the two distance metrics.
//!
//! Depots and customers live on an integer grid.  Both metrics return whole
//! distance units because the dispatch convention is 1 distance unit =
//! 1 time unit; fractional travel times never arise.
//!
//! A dispatch run picks exactly one [`Metric`] and uses it for every
//! distance in that run — the metric is part of the run configuration, so
//! mixing metrics within a run is structurally impossible.

/// A point on the integer delivery grid.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridPoint {
    pub x: i32,
    pub y: i32,
}

impl GridPoint {
    #[inline]
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Taxicab distance: `|dx| + |dy|`.  Exact integer arithmetic.
    pub fn distance_grid(self, other: GridPoint) -> u64 {
        let dx = (self.x as i64 - other.x as i64).unsigned_abs();
        let dy = (self.y as i64 - other.y as i64).unsigned_abs();
        dx + dy
    }

    /// Straight-line distance rounded to the nearest whole unit.
    ///
    /// Rounding is half-away-from-zero (`f64::round`).  The operand is a
    /// square root and therefore non-negative, so this coincides with
    /// half-up rounding on every representable `.5` boundary (e.g. the
    /// distance from (0,0) to (1,1) is √2 ≈ 1.414 → 1, and a 3-4-5 right
    /// triangle yields exactly 5).
    pub fn distance_euclidean_rounded(self, other: GridPoint) -> u64 {
        let dx = (self.x as i64 - other.x as i64) as f64;
        let dy = (self.y as i64 - other.y as i64) as f64;
        (dx * dx + dy * dy).sqrt().round() as u64
    }
}

impl std::fmt::Display for GridPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

// ── Metric ────────────────────────────────────────────────────────────────────

/// Which distance function a dispatch run uses.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Metric {
    /// Taxicab (`|dx| + |dy|`) — deliveries follow grid streets.
    #[default]
    Grid,
    /// Rounded straight-line — deliveries fly point to point.
    Euclidean,
}

impl Metric {
    /// Distance between `a` and `b` under this metric, in whole units.
    #[inline]
    pub fn distance(self, a: GridPoint, b: GridPoint) -> u64 {
        match self {
            Metric::Grid      => a.distance_grid(b),
            Metric::Euclidean => a.distance_euclidean_rounded(b),
        }
    }
}

impl std::str::FromStr for Metric {
    type Err = crate::CoreError;

    /// Accepts `grid` or `euclidean`, case-insensitive.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "grid"      => Ok(Metric::Grid),
            "euclidean" => Ok(Metric::Euclidean),
            other       => Err(crate::CoreError::Parse(format!("unknown metric: {other:?}"))),
        }
    }
}
