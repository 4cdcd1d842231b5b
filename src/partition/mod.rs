//! Partition module
//!
//! Splits the filtered table into `N` contiguous chunks of nearly equal size.
//!
//! # Overview
//!
//! Every chunk holds `ceil(M / N)` rows except possibly the last non-empty
//! one. Trailing chunks that would be empty are not produced, so there are
//! at most `min(N, M)` chunks and sometimes fewer (6 rows in 4 parts gives
//! three chunks of two).

mod types;

pub use types::{Chunk, PartitionPlan, NOT_A_NUMBER, NOT_POSITIVE};

/// Rows per chunk for `total` rows split `parts` ways
pub fn chunk_size(total: usize, parts: usize) -> usize {
    if parts == 0 {
        return total;
    }
    total / parts + usize::from(total % parts > 0)
}

/// The non-empty chunks for `total` rows under `plan`, in order
pub fn plan_chunks(total: usize, plan: PartitionPlan) -> Vec<Chunk> {
    let size = chunk_size(total, plan.parts());
    let mut chunks = Vec::new();

    for i in 0..plan.parts() {
        let start = i * size;
        if start >= total {
            break;
        }
        let end = (start + size).min(total);
        chunks.push(Chunk::new(i + 1, start..end));
    }

    chunks
}

#[cfg(test)]
mod tests;
