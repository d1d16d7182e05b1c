use super::{Cluster, ExtractorConfig};
use crate::core::{difference_degrees, sanitize_degrees};
use crate::{Float, Hct};

const TARGET_CHROMA: Float = 48.0;
const PROPORTION_WEIGHT: Float = 0.7;
const CHROMA_WEIGHT_BELOW: Float = 0.1;
const CHROMA_WEIGHT_ABOVE: Float = 0.3;

/// The hue neighborhood in degrees on either side of a cluster's hue.
const NEIGHBORHOOD: i32 = 15;

/// The minimum hue difference in degrees between ranked colors.
const MIN_HUE_DIFFERENCE: Float = 15.0;

/// A cluster that survived filtering together with its score.
#[derive(Copy, Clone, Debug)]
pub(crate) struct Scored {
    pub cluster: Cluster,
    pub hue: Float,
    pub score: Float,
}

/// Score the clusters as seed colors.
///
/// A cluster's score favors colors that dominate their hue neighborhood and
/// have a chroma close to or above the typical chroma of seed colors.
/// Clusters that are too gray, too dark, or too light as well as clusters
/// with too small a hue neighborhood are filtered out. The result is sorted
/// by descending score.
pub(crate) fn score(clusters: &[Cluster], config: &ExtractorConfig) -> Vec<Scored> {
    let hcts: Vec<Hct> = clusters.iter().map(|c| Hct::from_argb(c.argb())).collect();

    let mut hue_population = [0_usize; 360];
    let mut total = 0_usize;
    for (cluster, hct) in clusters.iter().zip(&hcts) {
        let hue = sanitize_degrees(hct.hue().round()) as usize % 360;
        hue_population[hue] += cluster.population();
        total += cluster.population();
    }

    if total == 0 {
        return Vec::new();
    }

    let total = total as Float;
    let mut scored = Vec::new();

    for (cluster, hct) in clusters.iter().zip(&hcts) {
        let hue = hct.hue().round() as i32;
        let excited = (hue - NEIGHBORHOOD..=hue + NEIGHBORHOOD)
            .map(|h| hue_population[h.rem_euclid(360) as usize])
            .sum::<usize>() as Float
            / total;

        if hct.chroma() < config.min_chroma
            || hct.tone() < config.min_tone
            || config.max_tone < hct.tone()
            || excited < config.min_proportion
        {
            continue;
        }

        let chroma_weight = if hct.chroma() < TARGET_CHROMA {
            CHROMA_WEIGHT_BELOW
        } else {
            CHROMA_WEIGHT_ABOVE
        };
        let score =
            excited * 100.0 * PROPORTION_WEIGHT + (hct.chroma() - TARGET_CHROMA) * chroma_weight;

        scored.push(Scored {
            cluster: *cluster,
            hue: hct.hue(),
            score,
        });
    }

    scored.sort_by(|s1, s2| s2.score.total_cmp(&s1.score));
    scored
}

/// Remove colors whose hues are too close to a better scoring color's hue.
pub(crate) fn dedupe(scored: Vec<Scored>) -> Vec<Scored> {
    let mut chosen: Vec<Scored> = Vec::with_capacity(scored.len());
    for candidate in scored {
        if chosen
            .iter()
            .all(|c| MIN_HUE_DIFFERENCE <= difference_degrees(c.hue, candidate.hue))
        {
            chosen.push(candidate);
        }
    }
    chosen
}
