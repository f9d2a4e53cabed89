/// Number of quantization steps across `[0, 1]` for progress keys (2 decimals).
pub const PROGRESS_BUCKETS: usize = 100;

pub(crate) fn clamp01(x: f64) -> f64 {
    if x.is_nan() { 0.0 } else { x.clamp(0.0, 1.0) }
}

/// Quantize a fraction to its 2-decimal bucket (`0..=PROGRESS_BUCKETS`).
pub(crate) fn progress_bucket(fraction: f64) -> usize {
    (clamp01(fraction) * PROGRESS_BUCKETS as f64).round() as usize
}

pub(crate) fn bucket_fraction(bucket: usize) -> f64 {
    bucket.min(PROGRESS_BUCKETS) as f64 / PROGRESS_BUCKETS as f64
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
