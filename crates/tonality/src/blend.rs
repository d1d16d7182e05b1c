//! Blending colors.
//!
//! This module combines colors in two rather different ways. The first three
//! functions operate on perceptual coordinates: [`harmonize`] nudges a color's
//! hue towards another color's hue, so that brand or semantic colors fit in
//! with a scheme's seed color, whereas [`hct_hue`] and [`cam16_ucs`]
//! interpolate between two colors in HCT and CAM16-UCS, respectively. The
//! remaining three functions implement plain alpha compositing in sRGB, as
//! needed for layering translucent surface tints over solid backgrounds.
//!
//! # Examples
//!
//! ```
//! # use tonality::{blend::harmonize, Argb, Hct};
//! let blue = Argb::new(0xff0000ff);
//! let red = Argb::new(0xffff0000);
//! let harmonized = harmonize(blue, red);
//!
//! // Blue moves towards red but only by 15º.
//! let shift = Hct::from(harmonized).hue() - Hct::from(blue).hue();
//! assert!(10.0 < shift && shift < 20.0);
//! ```

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{difference_degrees, lerp, rotation_direction, sanitize_degrees};
use crate::{Argb, Cam16, Float, Hct};

/// The maximum rotation in degrees applied by [`harmonize`].
pub const MAX_HARMONIZE_ROTATION: Float = 15.0;

/// Determine the signed rotation that [`harmonize`] applies to a hue.
///
/// The rotation is half the hue difference, capped at
/// [`MAX_HARMONIZE_ROTATION`], in the direction of the shorter arc from the
/// design hue to the source hue.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn harmonize_rotation(design_hue: Float, source_hue: Float) -> Float {
    let difference = difference_degrees(design_hue, source_hue);
    let rotation = (difference * 0.5).min(MAX_HARMONIZE_ROTATION);
    rotation * rotation_direction(design_hue, source_hue)
}

/// Shift the design color's hue towards the source color's hue.
///
/// The result has the design color's chroma and tone, modulo gamut mapping.
/// If the two hues are the same, the result is the opaque design color.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn harmonize(design: Argb, source: Argb) -> Argb {
    let from = Hct::from_argb(design);
    let to = Hct::from_argb(source);

    let rotation = harmonize_rotation(from.hue(), to.hue());
    if rotation == 0.0 {
        return design.to_opaque();
    }

    Hct::new(sanitize_degrees(from.hue() + rotation), from.chroma(), from.tone()).to_argb()
}

/// Blend the hue of one color towards another color's hue.
///
/// The hue is interpolated in CAM16-UCS, while the result keeps the chroma
/// and tone of the `from` color. An `amount` of 0 yields `from`, 1 yields the
/// color with `to`'s hue.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn hct_hue(from: Argb, to: Argb, amount: Float) -> Argb {
    let ucs = cam16_ucs(from, to, amount);
    let ucs = Cam16::from_argb(ucs);
    let from = Hct::from_argb(from);
    Hct::new(ucs.hue(), from.chroma(), from.tone()).to_argb()
}

/// Blend two colors in CAM16-UCS.
///
/// The three coordinates J*, a*, b* are interpolated linearly. An `amount` of
/// 0 yields `from`, 1 yields `to`.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn cam16_ucs(from: Argb, to: Argb, amount: Float) -> Argb {
    let [j1, a1, b1] = Cam16::from_argb(from).ucs();
    let [j2, a2, b2] = Cam16::from_argb(to).ucs();

    Cam16::from_ucs(lerp(j1, j2, amount), lerp(a1, a2, amount), lerp(b1, b2, amount)).viewed()
}

// --------------------------------------------------------------------------------------------------------------------

/// Composite the overlay color over the base color.
///
/// This function implements Porter and Duff's "over" operator on sRGB
/// channels, with the overlay's alpha channel determining its opacity. An
/// opaque base always produces an opaque result.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn over(base: Argb, overlay: Argb) -> Argb {
    let overlay_alpha = overlay.alpha() as Float / 255.0;
    let base_alpha = base.alpha() as Float / 255.0;
    let alpha = overlay_alpha + base_alpha * (1.0 - overlay_alpha);
    if alpha == 0.0 {
        return Argb::new(0);
    }

    let channel = |b: u8, o: u8| {
        let value = (o as Float * overlay_alpha + b as Float * base_alpha * (1.0 - overlay_alpha))
            / alpha;
        value.round().clamp(0.0, 255.0) as u8
    };

    Argb::from_channels(
        (alpha * 255.0).round() as u8,
        channel(base.red(), overlay.red()),
        channel(base.green(), overlay.green()),
        channel(base.blue(), overlay.blue()),
    )
}

/// Composite the overlay color at the given opacity over the base color.
///
/// The overlay's own alpha channel is replaced by the opacity, which is
/// clamped to `0..=1` and quantized to eight bits.
#[cfg_attr(feature = "pyffi", pyfunction)]
pub fn blend(base: Argb, overlay: Argb, opacity: Float) -> Argb {
    let opacity = if opacity.is_nan() { 0.0 } else { opacity.clamp(0.0, 1.0) };
    over(base, overlay.with_alpha((opacity * 255.0).round() as u8))
}

/// Composite several overlays at their opacities over the base color.
///
/// Overlays are applied in order, so that later overlays end up on top.
pub fn compose(base: Argb, overlays: &[(Argb, Float)]) -> Argb {
    overlays
        .iter()
        .fold(base, |total, &(overlay, opacity)| blend(total, overlay, opacity))
}

/// Composite several overlays at their opacities over the base color. <i
/// class=python-only>Python only!</i>
#[cfg(feature = "pyffi")]
#[pyfunction]
#[pyo3(name = "compose")]
pub fn py_compose(base: Argb, overlays: Vec<(Argb, Float)>) -> Argb {
    compose(base, &overlays)
}
