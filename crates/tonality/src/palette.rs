//! Tonal palettes and the core palette derived from a seed color.
//!
//! A [`TonalPalette`] fixes hue and chroma and produces colors for any tone.
//! A [`CorePalette`] bundles the six tonal palettes a scheme draws from.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::sanitize_degrees;
use crate::{Argb, Float, Hct};

/// The tones commonly used for rendering palette swatches.
pub const KEY_TONES: [u8; 13] = [0, 10, 20, 30, 40, 50, 60, 70, 80, 90, 95, 99, 100];

/// A palette of colors sharing hue and chroma.
///
/// Since a tonal palette only fixes hue and chroma, it can produce a color
/// for every tone. Colors with high chroma may not be displayable at very
/// light or very dark tones, in which case [`TonalPalette::tone`] reduces
/// chroma as much as necessary.
///
/// # Examples
///
/// ```
/// # use tonality::{Argb, TonalPalette};
/// let palette = TonalPalette::from_argb(Argb::new(0xff6750a4));
/// assert_eq!(palette.tone(0.0), Argb::new(0xff000000));
/// assert_eq!(palette.tone(100.0), Argb::new(0xffffffff));
/// ```
#[cfg_attr(feature = "pyffi", pyclass(frozen, module = "tonality.color"))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct TonalPalette {
    hue: Float,
    chroma: Float,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl TonalPalette {
    /// Create a new tonal palette with the given hue and chroma.
    #[cfg_attr(feature = "pyffi", new)]
    pub fn from_hue_and_chroma(hue: Float, chroma: Float) -> Self {
        Self { hue, chroma }
    }

    /// Create a new tonal palette with the hue and chroma of the given color.
    #[cfg_attr(feature = "pyffi", staticmethod)]
    pub fn from_argb(argb: Argb) -> Self {
        let hct = Hct::from_argb(argb);
        Self::from_hue_and_chroma(hct.hue(), hct.chroma())
    }

    /// Get the palette's hue.
    pub fn hue(&self) -> Float {
        self.hue
    }

    /// Get the palette's chroma.
    pub fn chroma(&self) -> Float {
        self.chroma
    }

    /// Get the palette's color for the given tone.
    pub fn tone(&self, tone: Float) -> Argb {
        Hct::new(self.hue, self.chroma, tone).to_argb()
    }

    /// Get the palette's colors for the [`KEY_TONES`].
    pub fn key_tones(&self) -> Vec<(u8, Argb)> {
        KEY_TONES
            .iter()
            .map(|&tone| (tone, self.tone(tone as Float)))
            .collect()
    }

    /// Convert this tonal palette to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

// ====================================================================================================================

/// The six palettes of a [`CorePalette`].
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, eq_int, frozen, hash, module = "tonality.color")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PaletteKey {
    Primary,
    Secondary,
    Tertiary,
    Neutral,
    NeutralVariant,
    Error,
}

impl PaletteKey {
    /// All palette keys in canonical order.
    pub const ALL: [PaletteKey; 6] = [
        PaletteKey::Primary,
        PaletteKey::Secondary,
        PaletteKey::Tertiary,
        PaletteKey::Neutral,
        PaletteKey::NeutralVariant,
        PaletteKey::Error,
    ];
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl PaletteKey {
    /// Get the palette's camel-cased name.
    pub fn name(&self) -> &'static str {
        use PaletteKey::*;

        match self {
            Primary => "primary",
            Secondary => "secondary",
            Tertiary => "tertiary",
            Neutral => "neutral",
            NeutralVariant => "neutralVariant",
            Error => "error",
        }
    }
}

impl std::fmt::Display for PaletteKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

// ====================================================================================================================

const ERROR_HUE: Float = 25.0;
const ERROR_CHROMA: Float = 84.0;

/// The six tonal palettes derived from a seed color.
///
/// The primary, secondary, and tertiary palettes provide accent colors, the
/// neutral and neutral variant palettes provide surfaces and outlines, and
/// the error palette provides, well, error colors. All palettes are fixed
/// upon creation.
#[cfg_attr(feature = "pyffi", pyclass(frozen, module = "tonality.color"))]
#[derive(Clone, Debug, PartialEq)]
pub struct CorePalette {
    palettes: [TonalPalette; 6],
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl CorePalette {
    /// Create the core palette for the given seed color.
    ///
    /// The primary palette has at least chroma 48, which keeps schemes vivid
    /// even for muted seeds. The other palettes use fixed chroma values, with
    /// the tertiary palette's hue rotated by 60º.
    #[cfg_attr(feature = "pyffi", staticmethod)]
    pub fn of(seed: Argb) -> Self {
        let hct = Hct::from_argb(seed);
        let (hue, chroma) = (hct.hue(), hct.chroma());

        Self::with_accents(
            hue,
            [
                chroma.max(48.0),
                16.0,
                24.0,
                4.0,
                8.0,
            ],
        )
    }

    /// Create the core palette for the given seed color while preserving the
    /// seed's chroma.
    ///
    /// This variant suits seeds taken from content such as images, where
    /// fidelity to the content matters more than vividness.
    #[cfg_attr(feature = "pyffi", staticmethod)]
    pub fn content_of(seed: Argb) -> Self {
        let hct = Hct::from_argb(seed);
        let (hue, chroma) = (hct.hue(), hct.chroma());

        Self::with_accents(
            hue,
            [
                chroma,
                chroma / 3.0,
                chroma / 2.0,
                (chroma / 12.0).min(4.0),
                (chroma / 6.0).min(8.0),
            ],
        )
    }

    /// Get the primary palette.
    pub fn primary(&self) -> TonalPalette {
        self.palettes[PaletteKey::Primary as usize]
    }

    /// Get the secondary palette.
    pub fn secondary(&self) -> TonalPalette {
        self.palettes[PaletteKey::Secondary as usize]
    }

    /// Get the tertiary palette.
    pub fn tertiary(&self) -> TonalPalette {
        self.palettes[PaletteKey::Tertiary as usize]
    }

    /// Get the neutral palette.
    pub fn neutral(&self) -> TonalPalette {
        self.palettes[PaletteKey::Neutral as usize]
    }

    /// Get the neutral variant palette.
    pub fn neutral_variant(&self) -> TonalPalette {
        self.palettes[PaletteKey::NeutralVariant as usize]
    }

    /// Get the error palette.
    pub fn error(&self) -> TonalPalette {
        self.palettes[PaletteKey::Error as usize]
    }

    /// Get the palette for the given key.
    pub fn palette(&self, key: PaletteKey) -> TonalPalette {
        self.palettes[key as usize]
    }

    /// Convert this core palette to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl CorePalette {
    fn with_accents(hue: Float, chroma: [Float; 5]) -> Self {
        let [primary, secondary, tertiary, neutral, neutral_variant] = chroma;

        Self {
            palettes: [
                TonalPalette::from_hue_and_chroma(hue, primary),
                TonalPalette::from_hue_and_chroma(hue, secondary),
                TonalPalette::from_hue_and_chroma(sanitize_degrees(hue + 60.0), tertiary),
                TonalPalette::from_hue_and_chroma(hue, neutral),
                TonalPalette::from_hue_and_chroma(hue, neutral_variant),
                TonalPalette::from_hue_and_chroma(ERROR_HUE, ERROR_CHROMA),
            ],
        }
    }

    /// Get an iterator over the palette keys and palettes.
    pub fn palettes(&self) -> impl Iterator<Item = (PaletteKey, TonalPalette)> + '_ {
        PaletteKey::ALL
            .into_iter()
            .map(|key| (key, self.palette(key)))
    }
}

impl std::ops::Index<PaletteKey> for CorePalette {
    type Output = TonalPalette;

    fn index(&self, index: PaletteKey) -> &Self::Output {
        &self.palettes[index as usize]
    }
}

#[cfg(test)]
mod test {
    use super::{CorePalette, PaletteKey, TonalPalette, KEY_TONES};
    use crate::{assert_within, Argb, Hct};

    #[test]
    fn test_tonal_palette() {
        let palette = TonalPalette::from_argb(Argb::new(0xff6750a4));
        assert_within!(palette.hue(), 298.981, 0.001);
        assert_within!(palette.chroma(), 47.857, 0.001);
        assert_eq!(palette.tone(40.0), Argb::new(0xff6750a4));
        assert_eq!(palette.tone(90.0), Argb::new(0xffeaddff));

        let swatches = palette.key_tones();
        assert_eq!(swatches.len(), KEY_TONES.len());
        assert_eq!(swatches[0], (0, Argb::new(0xff000000)));
        assert_eq!(swatches[12], (100, Argb::new(0xffffffff)));
    }

    #[test]
    fn test_core_palette() {
        let core = CorePalette::of(Argb::new(0xff6750a4));
        let hue = Hct::from_argb(Argb::new(0xff6750a4)).hue();

        assert_within!(core.primary().hue(), hue, 1e-9);
        assert_eq!(core.primary().chroma(), 48.0);
        assert_eq!(core.secondary().chroma(), 16.0);
        assert_within!(core.tertiary().hue(), hue + 60.0, 1e-9);
        assert_eq!(core.tertiary().chroma(), 24.0);
        assert_eq!(core.neutral().chroma(), 4.0);
        assert_eq!(core.neutral_variant().chroma(), 8.0);
        assert_eq!(core.error().hue(), 25.0);
        assert_eq!(core.error().chroma(), 84.0);

        assert_eq!(core.secondary().tone(40.0), Argb::new(0xff625b71));
        assert_eq!(core.tertiary().tone(40.0), Argb::new(0xff7d5260));
        assert_eq!(core.error().tone(40.0), Argb::new(0xffba1b1b));
        assert_eq!(core.neutral().tone(10.0), Argb::new(0xff1c1b1e));
        assert_eq!(core.neutral_variant().tone(30.0), Argb::new(0xff49454f));
    }

    #[test]
    fn test_tertiary_wraps() {
        let magenta = Argb::new(0xffff00ff);
        let hue = Hct::from_argb(magenta).hue();
        assert!(hue > 300.0, "magenta's hue should exceed 300º");

        let core = CorePalette::of(magenta);
        assert_within!(core.tertiary().hue(), hue + 60.0 - 360.0, 1e-9);
        assert!(core.tertiary().hue() < 360.0, "hue wraps around");
        assert_within!(CorePalette::content_of(magenta).tertiary().hue(), hue - 300.0, 1e-9);
    }

    #[test]
    fn test_vivid_seed() {
        let core = CorePalette::of(Argb::new(0xffff0000));
        assert_within!(core.primary().chroma(), 113.358, 0.001);
        assert_eq!(core.secondary().chroma(), 16.0);
    }

    #[test]
    fn test_content_palette() {
        let seed = Argb::new(0xff6750a4);
        let chroma = Hct::from_argb(seed).chroma();
        let core = CorePalette::content_of(seed);

        assert_within!(core.primary().chroma(), chroma, 1e-9);
        assert_within!(core.secondary().chroma(), chroma / 3.0, 1e-9);
        assert_within!(core.tertiary().chroma(), chroma / 2.0, 1e-9);
        assert_within!(core.neutral().chroma(), 3.988, 0.001);
        assert_within!(core.neutral_variant().chroma(), chroma / 6.0, 1e-9);
        assert_eq!(core.error().chroma(), 84.0);
    }

    #[test]
    fn test_keys() {
        let core = CorePalette::of(Argb::new(0xff6750a4));
        let keys: Vec<_> = core.palettes().map(|(key, _)| key.name()).collect();
        assert_eq!(
            keys,
            [
                "primary",
                "secondary",
                "tertiary",
                "neutral",
                "neutralVariant",
                "error"
            ]
        );
        assert_eq!(core[PaletteKey::Tertiary], core.tertiary());
    }

    mod proptests {
        use super::CorePalette;
        use crate::core::difference_degrees;
        use crate::{Argb, Hct};
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn palettes_are_deterministic(value in any::<u32>()) {
                let seed = Argb::new(value);
                let core1 = CorePalette::of(seed);
                let core2 = CorePalette::of(seed);
                prop_assert_eq!(&core1, &core2);
                prop_assert!(core1.primary().chroma() >= 48.0);
                prop_assert_eq!(core1.primary().tone(50.0), core2.primary().tone(50.0));
            }

            #[test]
            fn distinct_hues_stay_distinct(value1 in any::<u32>(), value2 in any::<u32>()) {
                let hct1 = Hct::from_argb(Argb::new(value1));
                let hct2 = Hct::from_argb(Argb::new(value2));
                prop_assume!(hct1.chroma() > 5.0 && hct2.chroma() > 5.0);
                prop_assume!(difference_degrees(hct1.hue(), hct2.hue()) > 1.0);

                let hue1 = CorePalette::of(hct1.to_argb()).primary().hue();
                let hue2 = CorePalette::of(hct2.to_argb()).primary().hue();
                prop_assert!(difference_degrees(hue1, hue2) > 1.0);
                prop_assert!((0.0..360.0).contains(&hue1) && (0.0..360.0).contains(&hue2));
            }
        }
    }
}
