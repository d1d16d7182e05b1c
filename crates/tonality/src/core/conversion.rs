use super::math::multiply;
use crate::{Argb, Float};

// This module uses the conventions of CIE colorimetry with the Y of the
// reference white at 100, not 1. Linear sRGB coordinates are scaled likewise.

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const SRGB_TO_XYZ: [[Float; 3]; 3] = [
    [ 0.41233895, 0.35762064, 0.18051042 ],
    [ 0.2126,     0.7152,     0.0722     ],
    [ 0.01932141, 0.11916382, 0.95034478 ],
];

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const XYZ_TO_SRGB: [[Float; 3]; 3] = [
    [  3.2413774792388685, -1.5376652402851851, -0.49885366846268053 ],
    [ -0.9691452513005321,  1.8758853451067872,  0.04156585616912061 ],
    [  0.05562093689691305, -0.20395524564742123, 1.0571799111220335 ],
];

/// The D65 standard illuminant, i.e., the white point of sRGB.
pub(crate) const WHITE_POINT_D65: [Float; 3] = [95.047, 100.0, 108.883];

// --------------------------------------------------------------------------------------------------------------------

/// Convert an 8-bit gamma-corrected sRGB channel to linear sRGB in `0..=100`.
#[inline]
pub(crate) fn linearized(component: u8) -> Float {
    let normalized = component as Float / 255.0;
    if normalized <= 0.040449936 {
        normalized / 12.92 * 100.0
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
    }
}

/// Convert a linear sRGB channel in `0..=100` to a gamma-corrected 8-bit
/// channel.
///
/// Out-of-gamut values are clamped to `0..=255`, which makes this function the
/// one place where unrepresentable colors are clipped.
#[inline]
pub(crate) fn delinearized(component: Float) -> u8 {
    let normalized = component / 100.0;
    let delinearized = if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        1.055 * normalized.powf(1.0 / 2.4) - 0.055
    };

    let value = (delinearized * 255.0).round();
    if value.is_nan() {
        0
    } else {
        value.clamp(0.0, 255.0) as u8
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the color to linear sRGB coordinates in `0..=100`.
#[inline]
pub(crate) fn linear_rgb_from_argb(argb: Argb) -> [Float; 3] {
    [
        linearized(argb.red()),
        linearized(argb.green()),
        linearized(argb.blue()),
    ]
}

/// Convert the color to XYZ coordinates.
pub(crate) fn xyz_from_argb(argb: Argb) -> [Float; 3] {
    multiply(&SRGB_TO_XYZ, &linear_rgb_from_argb(argb))
}

/// Convert XYZ coordinates to an opaque color, clipping to the sRGB gamut.
pub(crate) fn argb_from_xyz(xyz: &[Float; 3]) -> Argb {
    let [r, g, b] = multiply(&XYZ_TO_SRGB, xyz);
    Argb::from_rgb(delinearized(r), delinearized(g), delinearized(b))
}

// --------------------------------------------------------------------------------------------------------------------

const EPSILON: Float = 216.0 / 24389.0;
const KAPPA: Float = 24389.0 / 27.0;

/// The CIE L*a*b* companding function.
#[inline]
fn lab_f(t: Float) -> Float {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

/// The inverse of the CIE L*a*b* companding function.
#[inline]
fn lab_inv_f(ft: Float) -> Float {
    let ft3 = ft * ft * ft;
    if ft3 > EPSILON {
        ft3
    } else {
        (116.0 * ft - 16.0) / KAPPA
    }
}

/// Convert the relative luminance Y in `0..=100` to the perceptual lightness
/// L* in `0..=100`.
#[inline]
pub(crate) fn lstar_from_y(y: Float) -> Float {
    116.0 * lab_f(y / 100.0) - 16.0
}

/// Convert the perceptual lightness L* in `0..=100` to relative luminance Y in
/// `0..=100`.
#[inline]
pub(crate) fn y_from_lstar(lstar: Float) -> Float {
    100.0 * lab_inv_f((lstar + 16.0) / 116.0)
}

/// Determine the color's perceptual lightness L*.
pub(crate) fn lstar_from_argb(argb: Argb) -> Float {
    let y = xyz_from_argb(argb)[1];
    lstar_from_y(y)
}

/// Create the gray with the given perceptual lightness L*.
///
/// Since all three channels of a gray are the same, the gray is fully
/// determined by Y, which makes this conversion exact up to 8-bit rounding.
pub(crate) fn argb_from_lstar(lstar: Float) -> Argb {
    let component = delinearized(y_from_lstar(lstar));
    Argb::from_rgb(component, component, component)
}

// --------------------------------------------------------------------------------------------------------------------

/// Convert the color to CIE L*a*b* coordinates relative to D65.
pub(crate) fn lab_from_argb(argb: Argb) -> [Float; 3] {
    let [x, y, z] = xyz_from_argb(argb);
    let fx = lab_f(x / WHITE_POINT_D65[0]);
    let fy = lab_f(y / WHITE_POINT_D65[1]);
    let fz = lab_f(z / WHITE_POINT_D65[2]);
    [116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz)]
}

/// Convert CIE L*a*b* coordinates relative to D65 to an opaque color.
pub(crate) fn argb_from_lab(lab: &[Float; 3]) -> Argb {
    let [l, a, b] = *lab;
    let fy = (l + 16.0) / 116.0;
    let fx = a / 500.0 + fy;
    let fz = fy - b / 200.0;
    argb_from_xyz(&[
        lab_inv_f(fx) * WHITE_POINT_D65[0],
        lab_inv_f(fy) * WHITE_POINT_D65[1],
        lab_inv_f(fz) * WHITE_POINT_D65[2],
    ])
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::{assert_within, Argb};

    #[test]
    fn test_linearization() {
        for component in 0..=255_u8 {
            assert_eq!(delinearized(linearized(component)), component);
        }
        assert_eq!(delinearized(-5.0), 0);
        assert_eq!(delinearized(150.0), 255);
        assert_eq!(delinearized(crate::Float::NAN), 0);
    }

    #[test]
    fn test_xyz() {
        let white = xyz_from_argb(Argb::new(0xffff_ffff));
        assert_within!(white[0], 95.047, 0.01);
        assert_within!(white[1], 100.0, 0.0001);
        assert_within!(white[2], 108.883, 0.01);

        for argb in [0xff00_0000, 0xffff_0000, 0xff6750a4, 0xff12_34ff] {
            let color = Argb::new(argb);
            assert_eq!(argb_from_xyz(&xyz_from_argb(color)), color);
        }
    }

    #[test]
    fn test_lstar() {
        assert_within!(lstar_from_argb(Argb::new(0xff000000)), 0.0, 1e-9);
        assert_within!(lstar_from_argb(Argb::new(0xffffffff)), 100.0, 1e-6);
        assert_within!(y_from_lstar(50.0), 18.418651851244416, 1e-9);
        assert_within!(lstar_from_y(y_from_lstar(37.5)), 37.5, 1e-9);

        for tone in [0.0, 1.0, 18.0, 50.0, 99.0, 100.0] {
            let gray = argb_from_lstar(tone);
            assert_eq!(gray.red(), gray.green());
            assert_eq!(gray.green(), gray.blue());
            assert_within!(lstar_from_argb(gray), tone, 0.5);
        }
    }

    #[test]
    fn test_lab() {
        for argb in [0xff80_8080, 0xffff_0000, 0xff00_ff00, 0xff6750a4, 0xff0000ff] {
            let color = Argb::new(argb);
            assert_eq!(argb_from_lab(&lab_from_argb(color)), color);
        }

        let [l, a, b] = lab_from_argb(Argb::new(0xff808080));
        assert_within!(l, 53.585, 0.01);
        assert_within!(a, 0.0, 0.01);
        assert_within!(b, 0.0, 0.01);
    }
}
