//! The HCT color model.
//!
//! HCT combines the hue and chroma of the CAM16 color appearance model with
//! the tone, i.e., perceptual lightness L*, of CIELAB. Hue and chroma capture
//! what a color looks like, while tone captures contrast: Two colors whose
//! tones differ by 40 or more have a contrast ratio of at least 3:1, and a
//! difference of 50 guarantees 4.5:1. That makes HCT the natural space for
//! deriving legible color schemes.

#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

mod cam;
mod solver;
mod viewing;

pub use cam::Cam16;
pub(crate) use solver::solve_to_argb;

use crate::core::{lstar_from_argb, to_eq_hct};
use crate::{Argb, Float};

/// A color in hue, chroma, and tone.
///
/// Every `Hct` is displayable: It always carries the [`Argb`] color it
/// renders to, and its three coordinates are derived from that color. When
/// creating an `Hct` from coordinates with [`Hct::new`], the coordinates are
/// first mapped into the sRGB gamut. As a result, hue and chroma of the
/// resulting color may differ from the requested ones, especially for high
/// chroma values. Tone is preserved up to rounding.
///
/// # Examples
///
/// ```
/// # use tonality::{Argb, Hct};
/// let purple = Hct::from_argb(Argb::new(0xff6750a4));
/// assert_eq!(purple.hue().round(), 299.0);
/// assert_eq!(purple.chroma().round(), 48.0);
/// assert_eq!(purple.tone().round(), 40.0);
///
/// let lighter = purple.with_tone(90.0);
/// assert_eq!(lighter.tone().round(), 90.0);
/// assert_eq!(lighter.to_argb(), Hct::new(purple.hue(), purple.chroma(), 90.0).to_argb());
/// ```
#[cfg_attr(feature = "pyffi", pyclass(eq, frozen, hash, module = "tonality.color"))]
#[derive(Copy, Clone, Debug)]
pub struct Hct {
    hue: Float,
    chroma: Float,
    tone: Float,
    argb: Argb,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Hct {
    /// Create a new HCT color.
    ///
    /// This method finds the displayable color closest to the given hue,
    /// chroma, and tone. Hue is normalized into `0..360` and tone is clamped
    /// to `0..=100`.
    #[cfg_attr(feature = "pyffi", new)]
    pub fn new(hue: Float, chroma: Float, tone: Float) -> Self {
        Self::from_argb(solve_to_argb(hue, chroma, tone))
    }

    /// Determine the hue, chroma, and tone of the given color.
    ///
    /// Since HCT has no notion of transparency, the result is opaque.
    #[cfg_attr(feature = "pyffi", staticmethod)]
    pub fn from_argb(argb: Argb) -> Self {
        let argb = argb.to_opaque();
        let cam = Cam16::from_argb(argb);

        Self {
            hue: cam.hue(),
            chroma: cam.chroma(),
            tone: lstar_from_argb(argb),
            argb,
        }
    }

    /// Get the hue in degrees `0..360`.
    ///
    /// The hue of grays, i.e., colors with zero chroma, is meaningless.
    pub fn hue(&self) -> Float {
        self.hue
    }

    /// Get the chroma.
    pub fn chroma(&self) -> Float {
        self.chroma
    }

    /// Get the tone `0..=100`.
    pub fn tone(&self) -> Float {
        self.tone
    }

    /// Get the displayable color.
    pub fn to_argb(&self) -> Argb {
        self.argb
    }

    /// Create a new color with this color's chroma and tone but the given
    /// hue.
    pub fn with_hue(&self, hue: Float) -> Self {
        Self::new(hue, self.chroma, self.tone)
    }

    /// Create a new color with this color's hue and tone but the given
    /// chroma.
    pub fn with_chroma(&self, chroma: Float) -> Self {
        Self::new(self.hue, chroma, self.tone)
    }

    /// Create a new color with this color's hue and chroma but the given
    /// tone.
    pub fn with_tone(&self, tone: Float) -> Self {
        Self::new(self.hue, self.chroma, tone)
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!(
            "Hct({}, {}, {}, {})",
            self.hue, self.chroma, self.tone, self.argb
        )
    }
}

impl From<Argb> for Hct {
    fn from(value: Argb) -> Self {
        Hct::from_argb(value)
    }
}

impl From<Hct> for Argb {
    fn from(value: Hct) -> Self {
        value.argb
    }
}

impl std::hash::Hash for Hct {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        to_eq_hct(self.hue, self.chroma, self.tone).hash(state);
    }
}

impl PartialEq for Hct {
    /// Determine whether this color equals the other color.
    ///
    /// Both this method and [`Hct::hash`](struct.Hct.html#method.hash)
    /// normalize the coordinates before comparing them, so that colors that
    /// are equal also hash the same.
    fn eq(&self, other: &Self) -> bool {
        to_eq_hct(self.hue, self.chroma, self.tone)
            == to_eq_hct(other.hue, other.chroma, other.tone)
    }
}

impl Eq for Hct {}

impl std::fmt::Display for Hct {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "hct({:.1} {:.1} {:.1})",
            self.hue, self.chroma, self.tone
        ))
    }
}

#[cfg(test)]
mod test {
    use super::Hct;
    use crate::{assert_within, Argb};

    #[test]
    fn test_from_argb() {
        let red = Hct::from_argb(Argb::new(0xffff0000));
        assert_within!(red.hue(), 27.408, 0.001);
        assert_within!(red.chroma(), 113.358, 0.001);
        assert_within!(red.tone(), 53.233, 0.001);

        let translucent = Hct::from_argb(Argb::new(0x80ff0000));
        assert_eq!(translucent, red);
        assert_eq!(translucent.to_argb(), Argb::new(0xffff0000));
    }

    #[test]
    fn test_round_trip() {
        for argb in [0xff6750a4, 0xffff0000, 0xff00ff00, 0xff0000ff, 0xff4285f4] {
            let hct = Hct::from_argb(Argb::new(argb));
            let again = Hct::new(hct.hue(), hct.chroma(), hct.tone());
            assert_eq!(again.to_argb(), Argb::new(argb));
        }
    }

    #[test]
    fn test_with() {
        let purple = Hct::from_argb(Argb::new(0xff6750a4));
        let light = purple.with_tone(90.0);
        assert_within!(light.tone(), 90.0, 0.5);
        assert_within!(light.hue(), purple.hue(), 3.0);
        assert_eq!(light.to_argb(), Argb::new(0xffeaddff));

        // Grays have some residual chroma under CAM16's viewing conditions.
        let gray = purple.with_chroma(0.0);
        assert!(gray.chroma() < 3.0, "gray has next to no chroma");
        assert_eq!(gray.to_argb().red(), gray.to_argb().green());
        assert_eq!(gray.to_argb().green(), gray.to_argb().blue());

        let rotated = purple.with_hue(purple.hue() + 360.0);
        assert_eq!(rotated.to_argb(), purple.to_argb());
    }

    #[test]
    fn test_degenerate() {
        assert_eq!(Hct::new(42.0, 80.0, 0.0).to_argb(), Argb::new(0xff000000));
        assert_eq!(Hct::new(42.0, 80.0, 100.0).to_argb(), Argb::new(0xffffffff));
        assert_eq!(Hct::new(-318.0, 80.0, 50.0), Hct::new(42.0, 80.0, 50.0));
        assert_eq!(Hct::new(crate::Float::NAN, 0.0, 50.0).to_argb(), Argb::new(0xff777777));

        let vivid = Hct::new(120.0, crate::Float::INFINITY, 50.0);
        assert_eq!(vivid, Hct::new(120.0, 200.0, 50.0));
        assert!(vivid.to_argb().is_opaque(), "infinite chroma still renders");
    }

    mod proptests {
        use super::Hct;
        use crate::Argb;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn tone_round_trips(hue in 0.0..360.0, chroma in 0.0..200.0, tone in 0.0..=100.0) {
                let hct = Hct::new(hue, chroma, tone);
                prop_assert!((hct.tone().round() - tone.round()).abs() <= 1.0);
                prop_assert!(hct.to_argb().is_opaque());
                prop_assert!(hct.chroma() >= 0.0);
                prop_assert!(0.0 <= hct.hue() && hct.hue() < 360.0);
            }

            #[test]
            fn argb_is_stable(value in any::<u32>()) {
                let argb = Argb::new(value).to_opaque();
                let hct = Hct::from_argb(argb);
                prop_assert_eq!(hct.to_argb(), argb);
                prop_assert!((0.0..=100.0).contains(&hct.tone().round()));
            }
        }
    }
}
