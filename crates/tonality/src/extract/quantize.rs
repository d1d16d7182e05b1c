use std::collections::BTreeMap;

use crate::core::{argb_from_lab, lab_from_argb, Accumulator};
use crate::error::ExtractError;
use crate::{Argb, Float};

/// A group of similar colors.
///
/// A cluster has a representative color, its centroid, and a population, the
/// number of pixels it stands for.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Cluster {
    argb: Argb,
    population: usize,
}

impl Cluster {
    /// Create a new cluster.
    pub const fn new(argb: Argb, population: usize) -> Self {
        Self { argb, population }
    }

    /// Get the representative color.
    pub const fn argb(&self) -> Argb {
        self.argb
    }

    /// Get the number of pixels.
    pub const fn population(&self) -> usize {
        self.population
    }
}

// ====================================================================================================================

/// Count the pixels by color.
///
/// Translucent pixels are ignored unless all pixels are translucent, in which
/// case their opaque versions are counted instead. Since the histogram is a
/// B-tree, iteration order only depends on the colors.
pub(crate) fn histogram(pixels: &[Argb]) -> Result<BTreeMap<Argb, usize>, ExtractError> {
    if pixels.is_empty() {
        return Err(ExtractError::EmptyInput);
    }

    let mut counts = BTreeMap::new();
    for pixel in pixels.iter().filter(|p| p.is_opaque()) {
        *counts.entry(*pixel).or_insert(0) += 1;
    }

    if counts.is_empty() {
        for pixel in pixels {
            *counts.entry(pixel.to_opaque()).or_insert(0) += 1;
        }
    }

    Ok(counts)
}

/// A unique color in CIELAB with its count.
struct Point {
    lab: [Float; 3],
    count: usize,
}

#[inline]
fn distance_squared(p1: &[Float; 3], p2: &[Float; 3]) -> Float {
    let d0 = p1[0] - p2[0];
    let d1 = p1[1] - p2[1];
    let d2 = p1[2] - p2[2];
    d0 * d0 + d1 * d1 + d2 * d2
}

fn nearest(centroids: &[[Float; 3]], lab: &[Float; 3]) -> usize {
    let mut best = 0;
    let mut best_distance = Float::INFINITY;
    for (index, centroid) in centroids.iter().enumerate() {
        let distance = distance_squared(centroid, lab);
        if distance < best_distance {
            best = index;
            best_distance = distance;
        }
    }
    best
}

/// Pick the initial centroids.
///
/// The first centroid is the most populous color. Every further centroid is
/// the color farthest away from all centroids picked so far. Ties go to the
/// earlier color, which keeps seeding deterministic.
fn seed(points: &[Point], k: usize) -> Vec<[Float; 3]> {
    let mut centroids = Vec::with_capacity(k);
    centroids.push(points[0].lab);

    let mut distances: Vec<Float> = points
        .iter()
        .map(|p| distance_squared(&p.lab, &points[0].lab))
        .collect();

    while centroids.len() < k {
        let mut farthest = 0;
        for (index, distance) in distances.iter().enumerate() {
            if *distance > distances[farthest] {
                farthest = index;
            }
        }

        if distances[farthest] == 0.0 {
            break;
        }

        let lab = points[farthest].lab;
        centroids.push(lab);
        for (distance, point) in distances.iter_mut().zip(points) {
            *distance = distance.min(distance_squared(&point.lab, &lab));
        }
    }

    centroids
}

/// Quantize the histogram into at most `max_colors` clusters.
///
/// If the histogram has no more unique colors than `max_colors`, each color
/// becomes its own cluster. Otherwise, this function runs weighted k-means in
/// CIELAB for up to `max_iterations` rounds. The resulting clusters are
/// sorted by descending population, with empty clusters omitted.
pub(crate) fn quantize(
    histogram: &BTreeMap<Argb, usize>,
    max_colors: usize,
    max_iterations: usize,
) -> Vec<Cluster> {
    let max_colors = max_colors.max(1);

    let mut clusters: Vec<Cluster> = if histogram.len() <= max_colors {
        histogram
            .iter()
            .map(|(argb, count)| Cluster::new(*argb, *count))
            .collect()
    } else {
        kmeans(histogram, max_colors, max_iterations)
    };

    // Sorts are stable, so equal populations retain color order.
    clusters.sort_by(|c1, c2| c2.population.cmp(&c1.population));
    clusters
}

fn kmeans(histogram: &BTreeMap<Argb, usize>, k: usize, max_iterations: usize) -> Vec<Cluster> {
    let mut points: Vec<Point> = histogram
        .iter()
        .map(|(argb, count)| Point {
            lab: lab_from_argb(*argb),
            count: *count,
        })
        .collect();
    points.sort_by(|p1, p2| p2.count.cmp(&p1.count));

    let mut centroids = seed(&points, k);
    let mut assignments: Vec<usize> = points.iter().map(|p| nearest(&centroids, &p.lab)).collect();

    for iteration in 0..max_iterations {
        // Update centroids from the full weighted population.
        let mut sums = vec![[Accumulator::default(); 3]; centroids.len()];
        let mut weights = vec![0_usize; centroids.len()];
        for (point, &cluster) in points.iter().zip(&assignments) {
            let weight = point.count as Float;
            for (sum, coordinate) in sums[cluster].iter_mut().zip(point.lab) {
                *sum += weight * coordinate;
            }
            weights[cluster] += point.count;
        }

        for ((centroid, sum), weight) in centroids.iter_mut().zip(&sums).zip(&weights) {
            if *weight > 0 {
                let weight = *weight as Float;
                *centroid = [0, 1, 2].map(|index| sum[index].total() / weight);
            }
        }

        // Reassign points to their nearest centroids.
        let mut changed = 0;
        for (point, cluster) in points.iter().zip(assignments.iter_mut()) {
            let nearest = nearest(&centroids, &point.lab);
            if nearest != *cluster {
                *cluster = nearest;
                changed += 1;
            }
        }

        log::trace!("k-means iteration {} reassigned {} colors", iteration + 1, changed);
        if changed == 0 {
            break;
        }
    }

    let mut populations = vec![0_usize; centroids.len()];
    for (point, &cluster) in points.iter().zip(&assignments) {
        populations[cluster] += point.count;
    }

    centroids
        .iter()
        .zip(populations)
        .filter(|(_, population)| *population > 0)
        .map(|(centroid, population)| Cluster::new(argb_from_lab(centroid), population))
        .collect()
}

#[cfg(test)]
mod test {
    use super::{histogram, quantize, Cluster};
    use crate::error::ExtractError;
    use crate::Argb;

    #[test]
    fn test_histogram() {
        assert_eq!(histogram(&[]), Err(ExtractError::EmptyInput));

        let pixels = [
            Argb::new(0xffff0000),
            Argb::new(0x80ff0000),
            Argb::new(0xff0000ff),
            Argb::new(0xffff0000),
        ];
        let counts = histogram(&pixels).unwrap();
        assert_eq!(counts.len(), 2);
        assert_eq!(counts[&Argb::new(0xffff0000)], 2);
        assert_eq!(counts[&Argb::new(0xff0000ff)], 1);

        let translucent = [Argb::new(0x80ff0000), Argb::new(0x10ff0000)];
        let counts = histogram(&translucent).unwrap();
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[&Argb::new(0xffff0000)], 2);
    }

    #[test]
    fn test_exact() {
        let pixels = [
            Argb::new(0xff808080),
            Argb::new(0xffff0000),
            Argb::new(0xff808080),
            Argb::new(0xff808080),
        ];
        let clusters = quantize(&histogram(&pixels).unwrap(), 128, 10);
        assert_eq!(
            clusters,
            vec![
                Cluster::new(Argb::new(0xff808080), 3),
                Cluster::new(Argb::new(0xffff0000), 1),
            ]
        );
    }

    #[test]
    fn test_kmeans() {
        // Two tight groups of reds and blues.
        let mut pixels = Vec::new();
        for offset in 0..10_u8 {
            pixels.push(Argb::from_rgb(250 - offset, offset, offset));
            pixels.push(Argb::from_rgb(offset, offset, 250 - offset));
            pixels.push(Argb::from_rgb(offset, offset, 250 - offset));
        }

        let clusters = quantize(&histogram(&pixels).unwrap(), 2, 10);
        assert_eq!(clusters.len(), 2);
        assert_eq!(clusters[0].population(), 20);
        assert_eq!(clusters[1].population(), 10);

        let blue = clusters[0].argb();
        assert!(blue.blue() > 200 && blue.red() < 20, "{}", blue);
        let red = clusters[1].argb();
        assert!(red.red() > 200 && red.blue() < 20, "{}", red);

        // Determinism
        assert_eq!(quantize(&histogram(&pixels).unwrap(), 2, 10), clusters);
    }

    #[test]
    fn test_monochrome() {
        let pixels = vec![Argb::new(0xff336699); 1000];
        let clusters = quantize(&histogram(&pixels).unwrap(), 1, 10);
        assert_eq!(clusters, vec![Cluster::new(Argb::new(0xff336699), 1000)]);
    }
}
