#[cfg(feature = "pyffi")]
use pyo3::prelude::*;

use crate::core::{format_hex, lstar_from_argb, parse};
use crate::error::{ColorFormatError, OutOfBoundsError};
use crate::Float;

/// A packed 32-bit color.
///
/// The four channels are laid out as `0xAARRGGBB`, i.e., alpha in the most
/// significant byte followed by red, green, and blue. Channels are
/// gamma-corrected sRGB. Extracting the channels and composing them again is
/// exact for every `u32`.
///
/// `Argb` implements `Display` as hashed hexadecimal notation without alpha,
/// which is how stylesheets commonly write opaque colors. Use
/// [`Argb::to_hex_with_alpha`] to include the alpha channel. `Argb` also
/// implements `FromStr` for `#rgb`, `#rrggbb`, `#aarrggbb`, `0x`-prefixed
/// hexadecimal integers, and decimal integers.
#[cfg_attr(
    feature = "pyffi",
    pyclass(eq, frozen, hash, ord, module = "tonality.color")
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(into = "String", try_from = "String"))]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(transparent)]
pub struct Argb(u32);

#[cfg_attr(feature = "pyffi", pymethods)]
impl Argb {
    /// Create a new color from its packed representation.
    #[cfg_attr(feature = "pyffi", new)]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Create a new opaque color from its red, green, and blue channels.
    #[cfg_attr(feature = "pyffi", staticmethod)]
    pub const fn from_rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::from_channels(0xff, red, green, blue)
    }

    /// Create a new color from its alpha, red, green, and blue channels.
    #[cfg_attr(feature = "pyffi", staticmethod)]
    pub const fn from_channels(alpha: u8, red: u8, green: u8, blue: u8) -> Self {
        Self(((alpha as u32) << 24) | ((red as u32) << 16) | ((green as u32) << 8) | blue as u32)
    }

    /// Create a new color from wider channel values.
    ///
    /// This method validates that each channel fits into `0..=255`, which
    /// makes it suitable for channel values from outside the crate.
    #[cfg_attr(feature = "pyffi", staticmethod)]
    pub fn try_from_channels(
        alpha: u32,
        red: u32,
        green: u32,
        blue: u32,
    ) -> Result<Self, OutOfBoundsError> {
        let check = |value: u32| {
            u8::try_from(value).map_err(|_| OutOfBoundsError::new(value as usize, 0..=255))
        };

        Ok(Self::from_channels(
            check(alpha)?,
            check(red)?,
            check(green)?,
            check(blue)?,
        ))
    }

    /// Parse a color string.
    #[cfg(feature = "pyffi")]
    #[staticmethod]
    pub fn parse(s: &str) -> Result<Self, ColorFormatError> {
        s.parse()
    }

    /// Get the packed representation.
    pub const fn value(&self) -> u32 {
        self.0
    }

    /// Get the alpha channel.
    pub const fn alpha(&self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Get the red channel.
    pub const fn red(&self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Get the green channel.
    pub const fn green(&self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Get the blue channel.
    pub const fn blue(&self) -> u8 {
        self.0 as u8
    }

    /// Determine whether this color is fully opaque.
    pub const fn is_opaque(&self) -> bool {
        self.alpha() == 0xff
    }

    /// Get the fully opaque version of this color.
    pub const fn to_opaque(&self) -> Self {
        Self(self.0 | 0xff00_0000)
    }

    /// Get a version of this color with the given alpha.
    pub const fn with_alpha(&self, alpha: u8) -> Self {
        Self((self.0 & 0x00ff_ffff) | ((alpha as u32) << 24))
    }

    /// Determine this color's perceptual lightness L*, which is the same as
    /// its HCT tone.
    pub fn lstar(&self) -> Float {
        lstar_from_argb(*self)
    }

    /// Format this color in hashed hexadecimal notation including alpha, i.e.,
    /// as `#aarrggbb`.
    pub fn to_hex_with_alpha(&self) -> String {
        format!("#{:08x}", self.0)
    }

    /// Convert this color to its debug representation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __repr__(&self) -> String {
        format!("Argb(0x{:08x})", self.0)
    }

    /// Convert this color to hashed hexadecimal notation. <i
    /// class=python-only>Python only!</i>
    #[cfg(feature = "pyffi")]
    pub fn __str__(&self) -> String {
        format!("{}", self)
    }
}

impl From<u32> for Argb {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<Argb> for u32 {
    fn from(value: Argb) -> Self {
        value.0
    }
}

impl From<[u8; 3]> for Argb {
    fn from(value: [u8; 3]) -> Self {
        Self::from_rgb(value[0], value[1], value[2])
    }
}

impl From<Argb> for [u8; 4] {
    fn from(value: Argb) -> Self {
        value.0.to_be_bytes()
    }
}

impl std::str::FromStr for Argb {
    type Err = ColorFormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s).map(Self)
    }
}

impl TryFrom<String> for Argb {
    type Error = ColorFormatError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Argb> for String {
    fn from(value: Argb) -> Self {
        if value.is_opaque() {
            value.to_string()
        } else {
            value.to_hex_with_alpha()
        }
    }
}

impl std::fmt::Display for Argb {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_hex(self.red(), self.green(), self.blue()))
    }
}

#[cfg(test)]
mod test {
    use super::Argb;
    use crate::error::{ColorFormatError, OutOfBoundsError};

    #[test]
    fn test_channels() {
        let color = Argb::new(0x806750a4);
        assert_eq!(color.alpha(), 0x80);
        assert_eq!(color.red(), 0x67);
        assert_eq!(color.green(), 0x50);
        assert_eq!(color.blue(), 0xa4);
        assert_eq!(
            Argb::from_channels(color.alpha(), color.red(), color.green(), color.blue()),
            color
        );
        assert!(!color.is_opaque(), "{:?}", color);
        assert_eq!(color.to_opaque(), Argb::new(0xff6750a4));
        assert_eq!(color.with_alpha(0x33), Argb::new(0x336750a4));
        assert_eq!(<[u8; 4]>::from(color), [0x80, 0x67, 0x50, 0xa4]);
    }

    #[test]
    fn test_try_from_channels() {
        assert_eq!(
            Argb::try_from_channels(255, 1, 2, 3),
            Ok(Argb::new(0xff010203))
        );
        assert_eq!(
            Argb::try_from_channels(255, 256, 2, 3),
            Err(OutOfBoundsError::new(256_usize, 0..=255))
        );
    }

    #[test]
    fn test_string() -> Result<(), ColorFormatError> {
        let color: Argb = "#6750a4".parse()?;
        assert_eq!(color, Argb::new(0xff6750a4));
        assert_eq!(color.to_string(), "#6750a4");
        assert_eq!(color.to_hex_with_alpha(), "#ff6750a4");
        assert_eq!(String::from(Argb::new(0x806750a4)), "#806750a4");
        assert_eq!("0x6750a4".parse::<Argb>()?, color);
        assert_eq!(
            "hotpink".parse::<Argb>(),
            Err(ColorFormatError::UnknownFormat)
        );
        Ok(())
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_serde() -> Result<(), serde_json::Error> {
        let color = Argb::new(0xff6750a4);
        let json = serde_json::to_string(&color)?;
        assert_eq!(json, "\"#6750a4\"");
        assert_eq!(serde_json::from_str::<Argb>(&json)?, color);
        assert!(serde_json::from_str::<Argb>("\"#zzz\"").is_err(), "malformed hex");
        Ok(())
    }

    mod proptests {
        use super::Argb;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn channels_round_trip(value in any::<u32>()) {
                let color = Argb::new(value);
                let again = Argb::from_channels(
                    color.alpha(), color.red(), color.green(), color.blue()
                );
                prop_assert_eq!(again, color);
                prop_assert_eq!(color.to_hex_with_alpha().parse::<Argb>(), Ok(color));
            }
        }
    }
}
