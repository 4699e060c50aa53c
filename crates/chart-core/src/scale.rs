// File: crates/chart-core/src/scale.rs
// Summary: Linear data-to-pixel scales with explicit (possibly reversed) domain and range.

/// Data-space value (seconds, rank index).
pub type Value = f64;

/// Linear mapping from a `[d0, d1]` domain to a `[r0, r1]` pixel range.
///
/// Either interval may be reversed; the map is `r0 + (v - d0) / (d1 - d0) * (r1 - r0)`.
/// A degenerate domain (`d0 == d1`) maps every value to the middle of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    pub domain: (Value, Value),
    pub range: (f32, f32),
}

impl LinearScale {
    pub fn new(domain: (Value, Value), range: (f32, f32)) -> Self {
        Self { domain, range }
    }

    #[inline]
    fn span(&self) -> f64 { self.domain.1 - self.domain.0 }

    /// True when the domain collapses to a single value.
    pub fn is_degenerate(&self) -> bool { self.span().abs() < 1e-12 }

    #[inline]
    pub fn to_px(&self, v: Value) -> f32 {
        let (r0, r1) = self.range;
        if self.is_degenerate() {
            return r0 + (r1 - r0) * 0.5;
        }
        let t = (v - self.domain.0) / self.span();
        r0 + (t as f32) * (r1 - r0)
    }

    #[inline]
    pub fn from_px(&self, px: f32) -> Value {
        let (r0, r1) = self.range;
        let rspan = r1 - r0;
        if rspan.abs() < f32::EPSILON {
            return self.domain.0 + self.span() * 0.5;
        }
        self.domain.0 + ((px - r0) / rspan) as f64 * self.span()
    }

    /// True when `v` lies within the domain, regardless of its orientation.
    pub fn contains(&self, v: Value) -> bool {
        let lo = self.domain.0.min(self.domain.1);
        let hi = self.domain.0.max(self.domain.1);
        v >= lo && v <= hi
    }
}

/// Minimum and maximum of `values`; `None` when empty.
pub fn extent<I: IntoIterator<Item = Value>>(values: I) -> Option<(Value, Value)> {
    values.into_iter().fold(None, |acc, v| match acc {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

/// Horizontal scale: `[max, min]` seconds onto `[0, width]`, so the fastest time lands at the right edge.
pub fn seconds_scale(min_s: Value, max_s: Value, width: f32) -> LinearScale {
    LinearScale::new((max_s, min_s), (0.0, width))
}

/// Vertical scale: `[n, 0]` onto `[height, 0]`, so index 0 sits at the top and later ranks descend.
pub fn rank_scale(n: usize, height: f32) -> LinearScale {
    LinearScale::new((n as f64, 0.0), (height, 0.0))
}
