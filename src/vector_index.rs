use crate::error::{Error, Result};

/// Exact nearest-neighbor search over a flat list of write-once vectors.
///
/// Ids are dense and 0-based, assigned in insertion order, and never reused
/// or renumbered. Distances are squared Euclidean (L2), which orders
/// identically to true Euclidean distance.
#[derive(Debug)]
pub struct FlatIndex {
    dimension: usize,
    vectors: Vec<Vec<f32>>,
}

impl FlatIndex {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            vectors: Vec::new(),
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Append vectors, assigning ids in order starting at the current length.
    pub fn add(&mut self, vectors: Vec<Vec<f32>>) -> Result<()> {
        for vector in &vectors {
            if vector.len() != self.dimension {
                return Err(Error::DimensionMismatch {
                    expected: self.dimension,
                    actual: vector.len(),
                });
            }
        }
        self.vectors.extend(vectors);
        Ok(())
    }

    /// Return the ids and squared-L2 distances of the `k` vectors nearest to
    /// `query`, ascending by distance. Fewer than `k` stored vectors yields
    /// all of them. Equal distances order by ascending id.
    pub fn search(
        &self,
        query: &[f32],
        k: usize,
    ) -> Result<Vec<(usize, f32)>> {
        if query.len() != self.dimension {
            return Err(Error::DimensionMismatch {
                expected: self.dimension,
                actual: query.len(),
            });
        }

        let mut scored: Vec<(usize, f32)> = self
            .vectors
            .iter()
            .enumerate()
            .map(|(id, vector)| (id, squared_l2(query, vector)))
            .collect();

        scored.sort_by(|a, b| {
            a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal)
        });
        scored.truncate(k);

        Ok(scored)
    }
}

fn squared_l2(a: &[f32], b: &[f32]) -> f32 {
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}
