//! Extracting a seed color from an image.
//!
//! Extraction proceeds in three steps. First, [`Extractor`] counts the
//! image's opaque pixels by color. Second, it quantizes the resulting
//! histogram into a bounded number of [`Cluster`]s, using weighted k-means in
//! CIELAB if there are too many unique colors. Third, it scores the clusters
//! by chroma and by how much of the image falls into their hue neighborhood,
//! filtering out grays, near-blacks, and near-whites.
//!
//! For most uses, [`extract_seed`] with its defaults is all that's needed:
//!
//! ```
//! # use tonality::{extract::extract_seed, Argb};
//! let gray = Argb::new(0xff808080);
//! let red = Argb::new(0xffff0000);
//! assert_eq!(extract_seed(&[gray, gray, red, gray]).unwrap(), red);
//! ```
//!
//! Extraction is deterministic: The same pixels with the same configuration
//! always produce the same seed. Decoding images and resizing them is left to
//! the caller, though [`Pixels::downsample`] helps bounding the work.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

mod quantize;
mod score;

pub use quantize::Cluster;

use crate::error::ExtractError;
use crate::{Argb, Float};

/// A two-dimensional buffer of pixels in row-major order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Pixels {
    width: usize,
    height: usize,
    samples: Vec<Argb>,
}

impl Pixels {
    /// Create a new pixel buffer.
    ///
    /// This function validates that the number of samples matches the
    /// dimensions.
    pub fn new(width: usize, height: usize, samples: Vec<Argb>) -> Result<Self, ExtractError> {
        if width.checked_mul(height) != Some(samples.len()) {
            return Err(ExtractError::Dimensions {
                width,
                height,
                samples: samples.len(),
            });
        }

        Ok(Self {
            width,
            height,
            samples,
        })
    }

    /// Get the width.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the samples.
    pub fn samples(&self) -> &[Argb] {
        &self.samples
    }

    /// Reduce the resolution so that neither side exceeds `max_side`.
    ///
    /// This method samples every n-th pixel along both axes, with n the
    /// smallest stride that brings the longer side into bounds. It does not
    /// average, which keeps small vivid regions vivid.
    pub fn downsample(&self, max_side: usize) -> Self {
        let max_side = max_side.max(1);
        let longest = self.width.max(self.height);
        if longest <= max_side {
            return self.clone();
        }

        let stride = longest.div_ceil(max_side);
        let width = self.width.div_ceil(stride);
        let height = self.height.div_ceil(stride);

        let mut samples = Vec::with_capacity(width * height);
        for row in (0..self.height).step_by(stride) {
            for column in (0..self.width).step_by(stride) {
                samples.push(self.samples[row * self.width + column]);
            }
        }

        Self {
            width,
            height,
            samples,
        }
    }
}

impl AsRef<[Argb]> for Pixels {
    fn as_ref(&self) -> &[Argb] {
        &self.samples
    }
}

// ====================================================================================================================

/// The configuration for extracting seed colors.
#[cfg_attr(feature = "serde", derive(serde::Deserialize, serde::Serialize))]
#[cfg_attr(feature = "serde", serde(default, rename_all = "camelCase"))]
#[derive(Clone, Debug, PartialEq)]
pub struct ExtractorConfig {
    /// The maximum number of clusters.
    pub max_colors: usize,
    /// The maximum number of k-means rounds.
    pub max_iterations: usize,
    /// The minimum chroma of a seed color.
    pub min_chroma: Float,
    /// The minimum tone of a seed color.
    pub min_tone: Float,
    /// The maximum tone of a seed color.
    pub max_tone: Float,
    /// The minimum share of pixels within a seed color's hue neighborhood.
    pub min_proportion: Float,
}

impl Default for ExtractorConfig {
    fn default() -> Self {
        Self {
            max_colors: 128,
            max_iterations: 10,
            min_chroma: 15.0,
            min_tone: 10.0,
            max_tone: 95.0,
            min_proportion: 0.01,
        }
    }
}

/// An extractor of seed colors.
#[derive(Clone, Debug, Default)]
pub struct Extractor {
    config: ExtractorConfig,
}

impl Extractor {
    /// Create a new extractor with the given configuration.
    pub fn new(config: ExtractorConfig) -> Self {
        Self { config }
    }

    /// Get this extractor's configuration.
    pub fn config(&self) -> &ExtractorConfig {
        &self.config
    }

    /// Quantize the pixels into clusters, sorted by descending population.
    pub fn clusters(&self, pixels: &[Argb]) -> Result<Vec<Cluster>, ExtractError> {
        let histogram = quantize::histogram(pixels)?;
        let clusters = quantize::quantize(
            &histogram,
            self.config.max_colors,
            self.config.max_iterations,
        );

        log::debug!(
            "quantized {} pixels with {} unique colors into {} clusters",
            pixels.len(),
            histogram.len(),
            clusters.len()
        );
        Ok(clusters)
    }

    /// Rank the pixels' candidate seed colors.
    ///
    /// The result is never empty and sorted by descending score, with any two
    /// colors differing in hue by at least 15º. If no cluster passes the
    /// filters, the result is the most populous cluster's color.
    pub fn ranked(&self, pixels: &[Argb]) -> Result<Vec<Argb>, ExtractError> {
        let clusters = self.clusters(pixels)?;
        let ranked: Vec<Argb> = score::dedupe(score::score(&clusters, &self.config))
            .iter()
            .map(|s| s.cluster.argb())
            .collect();

        if !ranked.is_empty() {
            return Ok(ranked);
        }

        // The histogram is non-empty and hence so are the clusters.
        let fallback = clusters
            .first()
            .map(|c| c.argb())
            .ok_or(ExtractError::EmptyInput)?;
        log::warn!("no cluster qualifies as seed color, falling back on most populous {}", fallback);
        Ok(vec![fallback])
    }

    /// Extract the best seed color from the pixels.
    pub fn extract(&self, pixels: &[Argb]) -> Result<Argb, ExtractError> {
        let seed = self
            .ranked(pixels)?
            .first()
            .copied()
            .ok_or(ExtractError::EmptyInput)?;
        log::debug!("extracted seed color {}", seed);
        Ok(seed)
    }
}

/// Extract the best seed color from the pixels with the default
/// configuration.
pub fn extract_seed(pixels: &[Argb]) -> Result<Argb, ExtractError> {
    Extractor::default().extract(pixels)
}

/// Extract the best seed color from the pixels with the default
/// configuration. <i class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "extract_seed")]
pub fn py_extract_seed(pixels: Vec<Argb>) -> PyResult<Argb> {
    Ok(extract_seed(&pixels)?)
}
