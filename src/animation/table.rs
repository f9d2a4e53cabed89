use std::sync::LazyLock;

use crate::{
    animation::ease::TimingFunction,
    foundation::math::{PROGRESS_BUCKETS, bucket_fraction, progress_bucket},
};

/// Number of time steps sampled across `[0, 1]`; the table takes one more sample
/// than this so both endpoints are included.
pub const TABLE_SAMPLES: usize = 1000;

static CSS_EASE_TABLE: LazyLock<EasingTable> =
    LazyLock::new(|| EasingTable::build(TimingFunction::Ease));

/// Inverse of a timing function, quantized to 2-decimal progress buckets.
///
/// For each bucket the table holds the elapsed-time fraction at which the eased
/// output first rounds into that bucket. Buckets no sample reached are filled from
/// the nearest reached bucket, so lookups never miss.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
pub struct EasingTable {
    timing: TimingFunction,
    times: Vec<f64>,
    filled_gaps: usize,
}

impl EasingTable {
    /// Process-wide table for CSS `ease`, built on first use.
    pub fn css_ease() -> &'static EasingTable {
        &CSS_EASE_TABLE
    }

    /// Sample `timing` at `TABLE_SAMPLES + 1` evenly spaced times, walking from
    /// `t = 1` down to `t = 0`.
    ///
    /// A sample overwrites whatever an earlier sample stored in its bucket, so each
    /// bucket ends up with the smallest `t` that rounds into it.
    ///
    /// The top bucket is therefore reached before the clock runs out: for CSS `ease`,
    /// `lookup(1.0)` is about 0.907, so a pulse at the path's end starts roughly 9% of the
    /// duration early (about 0.19 s of a 2 s reveal), when 99.5% of the path is drawn.
    #[tracing::instrument]
    pub fn build(timing: TimingFunction) -> Self {
        let mut slots: Vec<Option<f64>> = vec![None; PROGRESS_BUCKETS + 1];
        for index in 0..=TABLE_SAMPLES {
            let t = sample_time(index);
            slots[progress_bucket(timing.apply(t))] = Some(t);
        }

        let filled_gaps = slots.iter().filter(|s| s.is_none()).count();
        if filled_gaps > 0 {
            tracing::debug!(filled_gaps, "easing table has unreached buckets");
        }

        let times = (0..slots.len())
            .map(|bucket| {
                slots[bucket]
                    .or_else(|| nearest_reached(&slots, bucket))
                    .unwrap_or(0.0)
            })
            .collect();

        Self {
            timing,
            times,
            filled_gaps,
        }
    }

    /// Timing function this table inverts.
    pub fn timing(&self) -> TimingFunction {
        self.timing
    }

    /// How many buckets were filled from a neighbour instead of a direct sample.
    pub fn filled_gaps(&self) -> usize {
        self.filled_gaps
    }

    /// Bucket index for a progress fraction (clamped into `[0, 1]`).
    pub fn bucket_of(progress: f64) -> usize {
        progress_bucket(progress)
    }

    /// Elapsed-time fraction for `progress`, after quantizing it to 2 decimals.
    pub fn lookup(&self, progress: f64) -> f64 {
        self.lookup_bucket(progress_bucket(progress))
    }

    /// Elapsed-time fraction for a bucket; buckets past the end clamp to the last.
    pub fn lookup_bucket(&self, bucket: usize) -> f64 {
        self.times[bucket.min(PROGRESS_BUCKETS)]
    }

    /// `(progress, time)` pairs in bucket order.
    pub fn entries(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.times
            .iter()
            .enumerate()
            .map(|(bucket, &t)| (bucket_fraction(bucket), t))
    }
}

fn sample_time(index: usize) -> f64 {
    1.0 - (index as f64 / TABLE_SAMPLES as f64)
}

// Lower bucket wins a distance tie.
fn nearest_reached(slots: &[Option<f64>], bucket: usize) -> Option<f64> {
    (1..slots.len()).find_map(|d| {
        let below = bucket.checked_sub(d).and_then(|b| slots[b]);
        let above = slots.get(bucket + d).copied().flatten();
        below.or(above)
    })
}

#[cfg(test)]
#[path = "../../tests/unit/animation/table.rs"]
mod tests;
