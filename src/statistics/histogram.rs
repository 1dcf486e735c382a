use crate::statistics::types::Bucket;
use crate::statistics::utility::pct;

/// Number of histogram buckets. The last one is widened to absorb a perfect score.
pub const BUCKET_COUNT: usize = 10;

const BUCKET_WIDTH: f64 = 10.0;

/// Index of the bucket a score falls into: `floor(score / 10)`, with 100 folded into 9.
pub fn bucket_index(score: f64) -> usize {
    ((score / BUCKET_WIDTH).floor() as usize).min(BUCKET_COUNT - 1)
}

/// Distributes `scores` over the ten ranges `0-9, 10-19, ..., 80-89, 90-100`.
///
/// Percentages are relative to `scores.len()`; all of them are 0.0 for empty input.
pub fn histogram(scores: &[f64]) -> Vec<Bucket> {
    let mut counts = [0usize; BUCKET_COUNT];
    for &score in scores {
        counts[bucket_index(score)] += 1;
    }

    counts
        .iter()
        .enumerate()
        .map(|(i, &count)| {
            let lower = (i * 10) as u8;
            let upper = if i == BUCKET_COUNT - 1 { 100 } else { lower + 9 };
            Bucket {
                lower,
                upper,
                count,
                percentage: pct(count, scores.len()),
            }
        })
        .collect()
}
