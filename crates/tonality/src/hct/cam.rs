#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use super::viewing::{ViewingConditions, CAM16RGB_TO_XYZ, XYZ_TO_CAM16RGB};
use crate::core::{argb_from_xyz, multiply, signum, xyz_from_argb};
use crate::{Argb, Float};

/// Convert the cone response to its post-adaptation nonlinear compression.
#[inline]
fn adapted(component: Float, fl: Float) -> Float {
    let factor = (fl * component.abs() / 100.0).powf(0.42);
    signum(component) * 400.0 * factor / (factor + 27.13)
}

/// Undo [`adapted`].
#[inline]
fn unadapted(component: Float, fl: Float) -> Float {
    let base = (27.13 * component.abs() / (400.0 - component.abs())).max(0.0);
    signum(component) * (100.0 / fl) * base.powf(1.0 / 0.42)
}

/// Compute the eccentricity factor for the given hue in degrees.
#[inline]
fn eccentricity(hue: Float) -> Float {
    let hue_prime = if hue < 20.14 { hue + 360.0 } else { hue };
    0.25 * ((hue_prime.to_radians() + 2.0).cos() + 3.8)
}

/// A color in the CAM16 color appearance model.
///
/// CAM16 describes how a color appears to a human observer under
/// [`ViewingConditions`], here always the standard ones. Of its correlates,
/// hue and chroma become the H and C of [`Hct`](crate::Hct). The derived
/// CAM16-UCS coordinates J*, a*, b* form a perceptually uniform space, which
/// serves as the basis for [`Cam16::distance`] and for blending colors.
#[cfg_attr(feature = "pyffi", pyclass(frozen, module = "tonality.color"))]
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Cam16 {
    hue: Float,
    chroma: Float,
    j: Float,
    q: Float,
    m: Float,
    s: Float,
    jstar: Float,
    astar: Float,
    bstar: Float,
}

#[cfg_attr(feature = "pyffi", pymethods)]
impl Cam16 {
    /// Determine the CAM16 appearance of the given color.
    ///
    /// The alpha channel is ignored.
    #[cfg_attr(feature = "pyffi", staticmethod)]
    pub fn from_argb(argb: Argb) -> Self {
        let vc = ViewingConditions::standard();

        let xyz = xyz_from_argb(argb);
        let cone = multiply(&XYZ_TO_CAM16RGB, &xyz);
        let [r, g, b] = [0, 1, 2].map(|index| adapted(vc.rgb_d[index] * cone[index], vc.fl));

        // Redness-greenness, yellowness-blueness, and auxiliary components
        let a = (11.0 * r - 12.0 * g + b) / 11.0;
        let bb = (r + g - 2.0 * b) / 9.0;
        let u = (20.0 * r + 20.0 * g + 21.0 * b) / 20.0;
        let p2 = (40.0 * r + 20.0 * g + b) / 20.0;

        let hue = bb.atan2(a).to_degrees().rem_euclid(360.0);
        let hue = if hue >= 360.0 { 0.0 } else { hue };

        let ac = p2 * vc.nbb;
        let j = 100.0 * (ac / vc.aw).powf(vc.c * vc.z);

        let p1 = 50000.0 / 13.0 * eccentricity(hue) * vc.nc * vc.ncb;
        let t = p1 * a.hypot(bb) / (u + 0.305);
        let alpha = t.powf(0.9) * (1.64 - (0.29 as Float).powf(vc.n)).powf(0.73);
        let chroma = alpha * (j / 100.0).sqrt();

        Self::with_correlates(vc, hue, chroma, j, alpha)
    }

    /// Create a CAM16 color from its lightness J, chroma C, and hue h.
    #[cfg_attr(feature = "pyffi", staticmethod)]
    pub fn from_jch(j: Float, chroma: Float, hue: Float) -> Self {
        let vc = ViewingConditions::standard();
        let alpha = if j == 0.0 {
            0.0
        } else {
            chroma / (j / 100.0).sqrt()
        };

        Self::with_correlates(vc, hue, chroma, j, alpha)
    }

    /// Create a CAM16 color from its CAM16-UCS coordinates J*, a*, b*.
    #[cfg_attr(feature = "pyffi", staticmethod)]
    pub fn from_ucs(jstar: Float, astar: Float, bstar: Float) -> Self {
        let vc = ViewingConditions::standard();

        let m = astar.hypot(bstar);
        let colorfulness = ((m * 0.0228).exp() - 1.0) / 0.0228;
        let chroma = colorfulness / vc.fl_root;
        let hue = bstar.atan2(astar).to_degrees().rem_euclid(360.0);
        let j = jstar / (1.0 - (jstar - 100.0) * 0.007);

        Self::from_jch(j, chroma, hue)
    }

    /// Get the hue angle h in degrees.
    pub fn hue(&self) -> Float {
        self.hue
    }

    /// Get the chroma C.
    pub fn chroma(&self) -> Float {
        self.chroma
    }

    /// Get the lightness J.
    pub fn j(&self) -> Float {
        self.j
    }

    /// Get the brightness Q.
    pub fn q(&self) -> Float {
        self.q
    }

    /// Get the colorfulness M.
    pub fn m(&self) -> Float {
        self.m
    }

    /// Get the saturation s.
    pub fn s(&self) -> Float {
        self.s
    }

    /// Get the CAM16-UCS coordinates J*, a*, b*.
    pub fn ucs(&self) -> [Float; 3] {
        [self.jstar, self.astar, self.bstar]
    }

    /// Compute the perceptual distance between this and the other color.
    ///
    /// The distance is based on the Euclidian distance in CAM16-UCS, with an
    /// exponential correction that better matches experimental data for
    /// color differences.
    pub fn distance(&self, other: &Cam16) -> Float {
        let dj = self.jstar - other.jstar;
        let da = self.astar - other.astar;
        let db = self.bstar - other.bstar;
        let delta = (dj * dj + da * da + db * db).sqrt();
        1.41 * delta.powf(0.63)
    }

    /// Convert this color to a displayable, opaque color.
    ///
    /// Coordinates outside the sRGB gamut are clipped. Finding a *good*
    /// displayable color for out-of-gamut coordinates is the job of
    /// [`Hct`](crate::Hct).
    pub fn viewed(&self) -> Argb {
        let vc = ViewingConditions::standard();

        let alpha = if self.chroma == 0.0 || self.j == 0.0 {
            0.0
        } else {
            self.chroma / (self.j / 100.0).sqrt()
        };
        let t = (alpha / (1.64 - (0.29 as Float).powf(vc.n)).powf(0.73)).powf(1.0 / 0.9);
        let radians = self.hue.to_radians();
        let (sin, cos) = radians.sin_cos();

        let ac = vc.aw * (self.j / 100.0).powf(1.0 / vc.c / vc.z);
        let p1 = 0.25 * ((radians + 2.0).cos() + 3.8) * (50000.0 / 13.0) * vc.nc * vc.ncb;
        let p2 = ac / vc.nbb;

        let gamma = 23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * cos + 108.0 * t * sin);
        let a = gamma * cos;
        let b = gamma * sin;

        let adapted = [
            (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0,
            (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0,
            (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0,
        ];
        let cone = [0, 1, 2].map(|index| unadapted(adapted[index], vc.fl) / vc.rgb_d[index]);

        argb_from_xyz(&multiply(&CAM16RGB_TO_XYZ, &cone))
    }

    /// Convert this CAM16 color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("{:?}", self)
    }
}

impl Cam16 {
    fn with_correlates(
        vc: &ViewingConditions,
        hue: Float,
        chroma: Float,
        j: Float,
        alpha: Float,
    ) -> Self {
        let q = 4.0 / vc.c * (j / 100.0).sqrt() * (vc.aw + 4.0) * vc.fl_root;
        let m = chroma * vc.fl_root;
        let s = 50.0 * (alpha * vc.c / (vc.aw + 4.0)).sqrt();

        let jstar = 1.7 * j / (1.0 + 0.007 * j);
        let mstar = (0.0228 * m).ln_1p() / 0.0228;
        let (sin, cos) = hue.to_radians().sin_cos();

        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar: mstar * cos,
            bstar: mstar * sin,
        }
    }
}

impl From<Argb> for Cam16 {
    fn from(value: Argb) -> Self {
        Cam16::from_argb(value)
    }
}

#[cfg(test)]
mod test {
    use super::Cam16;
    use crate::{assert_within, Argb};

    #[test]
    fn test_red() {
        let red = Cam16::from_argb(Argb::new(0xffff0000));
        assert_within!(red.hue(), 27.408, 0.001);
        assert_within!(red.chroma(), 113.358, 0.001);
        assert_within!(red.j(), 46.445, 0.001);
        assert_within!(red.m(), 89.494, 0.001);
        assert_within!(red.s(), 91.889, 0.001);
        assert_within!(red.q(), 105.989, 0.001);
    }

    #[test]
    fn test_black_and_white() {
        let black = Cam16::from_argb(Argb::new(0xff000000));
        assert_eq!(black.j(), 0.0);
        assert_eq!(black.chroma(), 0.0);

        let white = Cam16::from_argb(Argb::new(0xffffffff));
        assert_within!(white.j(), 100.0, 0.001);
        assert_within!(white.chroma(), 2.869, 0.001);
    }

    #[test]
    fn test_viewed() {
        for argb in [0xffff0000, 0xff00ff00, 0xff0000ff, 0xff6750a4, 0xff808080, 0xffffffff] {
            let color = Argb::new(argb);
            assert_eq!(Cam16::from_argb(color).viewed(), color);
        }
    }

    #[test]
    fn test_ucs() {
        let blue = Cam16::from_argb(Argb::new(0xff0000ff));
        let [jstar, astar, bstar] = blue.ucs();
        let again = Cam16::from_ucs(jstar, astar, bstar);
        assert_within!(again.j(), blue.j(), 1e-9);
        assert_within!(again.chroma(), blue.chroma(), 1e-9);
        assert_within!(again.hue(), blue.hue(), 1e-9);
        assert_eq!(again.viewed(), Argb::new(0xff0000ff));
    }

    #[test]
    fn test_distance() {
        let red = Cam16::from_argb(Argb::new(0xffff0000));
        let blue = Cam16::from_argb(Argb::new(0xff0000ff));
        assert_eq!(red.distance(&red), 0.0);
        assert_within!(red.distance(&blue), blue.distance(&red), 1e-12);
        assert!(red.distance(&blue) > 20.0, "red and blue are far apart");
    }
}
