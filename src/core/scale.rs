use crate::error::{ChartError, ChartResult};

/// Linear mapping from a value domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain_start: f64,
    domain_end: f64,
}

impl LinearScale {
    pub fn new(domain_start: f64, domain_end: f64) -> ChartResult<Self> {
        if !domain_start.is_finite() || !domain_end.is_finite() || domain_start == domain_end {
            return Err(ChartError::InvalidData(
                "scale domain must be finite and non-zero".to_owned(),
            ));
        }
        if !(domain_end - domain_start).is_finite() {
            return Err(ChartError::InvalidData(
                "scale domain span must be finite".to_owned(),
            ));
        }

        Ok(Self {
            domain_start,
            domain_end,
        })
    }

    /// Builds the value axis domain for a series.
    ///
    /// The range spans the data, widened to include zero when `begin_at_zero`
    /// is set. A `fixed_max` replaces the upper bound. Degenerate domains are
    /// widened by one unit; spans that overflow `f64` are clamped to
    /// `[f64::MIN / 2, f64::MAX / 2]`.
    pub fn for_values(
        values: &[f64],
        begin_at_zero: bool,
        fixed_max: Option<f64>,
    ) -> ChartResult<Self> {
        let data_min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let data_max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

        let mut start = if values.is_empty() { 0.0 } else { data_min };
        if begin_at_zero {
            start = start.min(0.0);
        }
        let mut end = fixed_max.unwrap_or(if values.is_empty() { 0.0 } else { data_max });
        if begin_at_zero && fixed_max.is_none() {
            end = end.max(0.0);
        }
        if end <= start {
            end = start + 1.0;
        }
        if !(end - start).is_finite() {
            start = start.max(f64::MIN / 2.0);
            end = end.min(f64::MAX / 2.0);
        }
        Self::new(start, end)
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.domain_start, self.domain_end)
    }

    /// Maps `value` onto `[pixel_start, pixel_end]`; `pixel_start` is the
    /// position of `domain_start`.
    pub fn value_to_pixel(
        self,
        value: f64,
        pixel_start: f64,
        pixel_end: f64,
    ) -> ChartResult<f64> {
        if !value.is_finite() {
            return Err(ChartError::InvalidData("value must be finite".to_owned()));
        }

        let span = self.domain_end - self.domain_start;
        let offset = value - self.domain_start;
        let normalized = if offset.is_finite() {
            offset / span
        } else {
            // Values far outside a half-range domain.
            value / span - self.domain_start / span
        };
        Ok(pixel_start + normalized * (pixel_end - pixel_start))
    }

    /// Evenly spaced tick values from `domain_start` to `domain_end` inclusive.
    #[must_use]
    pub fn ticks(self, count: usize) -> Vec<f64> {
        if count < 2 {
            return vec![self.domain_start];
        }
        let span = self.domain_end - self.domain_start;
        let last = (count - 1) as f64;
        (0..count)
            .map(|index| self.domain_start + span * (index as f64 / last))
            .collect()
    }
}
