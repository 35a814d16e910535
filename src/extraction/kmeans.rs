//! Lloyd's k-means in RGB space
//!
//! Centroids are seeded from `k` distinct random sample points. Clusters that
//! end up with no members keep their previous centroid while iterating and
//! are dropped from the result; they are not re-seeded.

use log::debug;
use rand::seq::index;
use rand::Rng;

use crate::error::ExtractionError;

/// RGB point on the 0-255 scale
pub type Point = [f64; 3];

/// Final cluster of a k-means run
#[derive(Debug, Clone, PartialEq)]
pub struct Cluster {
    pub centroid: Point,
    pub size: usize,
}

/// Outcome of a k-means run
#[derive(Debug, Clone)]
pub struct KMeansResult {
    /// Non-empty clusters, in seed order
    pub clusters: Vec<Cluster>,
    /// Number of points clustered
    pub total_points: usize,
    /// Iterations actually performed
    pub iterations: usize,
    /// Whether the movement threshold was reached before the cap
    pub converged: bool,
}

/// K-means parameters
#[derive(Debug, Clone, Copy)]
pub struct KMeans {
    k: usize,
    max_iterations: usize,
    convergence_threshold: f64,
}

impl KMeans {
    pub fn new(k: usize, max_iterations: usize, convergence_threshold: f64) -> Self {
        Self {
            k,
            max_iterations,
            convergence_threshold,
        }
    }

    /// Cluster `points` into at most `k` groups
    ///
    /// # Errors
    ///
    /// - `EmptyBuffer` if there are no points
    /// - `NoClusters` if `k` is zero or every cluster ends up empty
    /// - `NumericalFailure` if a centroid becomes non-finite
    pub fn run<R: Rng + ?Sized>(&self, points: &[Point], rng: &mut R) -> Result<KMeansResult, ExtractionError> {
        if points.is_empty() {
            return Err(ExtractionError::EmptyBuffer);
        }
        if self.k == 0 {
            return Err(ExtractionError::NoClusters);
        }

        let k = self.k.min(points.len());
        let mut centroids: Vec<Point> = index::sample(rng, points.len(), k)
            .iter()
            .map(|i| points[i])
            .collect();

        let mut sizes = vec![0usize; k];
        let mut iterations = 0;
        let mut converged = false;

        while iterations < self.max_iterations.max(1) {
            iterations += 1;

            let mut sums = vec![[0.0f64; 3]; k];
            sizes.iter_mut().for_each(|s| *s = 0);

            for point in points {
                let nearest = nearest_centroid(point, &centroids);
                sizes[nearest] += 1;
                for (acc, v) in sums[nearest].iter_mut().zip(point) {
                    *acc += v;
                }
            }

            let mut max_shift = 0.0f64;
            for (idx, centroid) in centroids.iter_mut().enumerate() {
                if sizes[idx] == 0 {
                    continue;
                }
                let n = sizes[idx] as f64;
                let updated = sums[idx].map(|s| s / n);
                if updated.iter().any(|v| !v.is_finite()) {
                    return Err(ExtractionError::NumericalFailure(format!(
                        "centroid {} became {:?}",
                        idx, updated
                    )));
                }
                max_shift = max_shift.max(distance_sq(centroid, &updated).sqrt());
                *centroid = updated;
            }

            if max_shift <= self.convergence_threshold {
                converged = true;
                break;
            }
        }

        debug!(
            "k-means k={} over {} points: {} iterations, converged={}",
            k,
            points.len(),
            iterations,
            converged
        );

        let clusters: Vec<Cluster> = centroids
            .into_iter()
            .zip(sizes)
            .filter(|(_, size)| *size > 0)
            .map(|(centroid, size)| Cluster { centroid, size })
            .collect();

        if clusters.is_empty() {
            return Err(ExtractionError::NoClusters);
        }

        Ok(KMeansResult {
            clusters,
            total_points: points.len(),
            iterations,
            converged,
        })
    }
}

/// Index of the closest centroid; ties go to the lowest index
fn nearest_centroid(point: &Point, centroids: &[Point]) -> usize {
    let mut best_idx = 0;
    let mut best_dist = f64::INFINITY;
    for (idx, centroid) in centroids.iter().enumerate() {
        let dist = distance_sq(point, centroid);
        if dist < best_dist {
            best_dist = dist;
            best_idx = idx;
        }
    }
    best_idx
}

fn distance_sq(a: &Point, b: &Point) -> f64 {
    a.iter().zip(b).map(|(x, y)| (x - y) * (x - y)).sum()
}
