//! Utility module with tonality's errors.
//!
//! The color science itself is total: Every 32-bit ARGB value converts to HCT
//! and every hue, chroma, and tone maps back to a displayable color. Errors
//! only arise where data enters from the outside, i.e., when parsing color
//! strings, validating channel values or opacities, checking pixel buffers, and
//! extracting a color from no pixels at all.

#[cfg(feature = "pyffi")]
use pyo3::{exceptions::PyValueError, prelude::*};

/// An out-of-bounds error.
///
/// This error indicates a value that is out of bounds for some range. The
/// ranges used by this crate include:
///
///   * `0..=255` for the alpha, red, green, and blue channels of
///     [`Argb`](crate::Argb);
///   * `0..=1` for opacities, which are reported in thousandths, i.e., as
///     `0..=1000`.
///
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutOfBoundsError {
    pub value: usize,
    pub expected: std::ops::RangeInclusive<usize>,
}

impl OutOfBoundsError {
    /// Create a new out-of-bounds error.
    pub fn new(value: impl Into<usize>, expected: std::ops::RangeInclusive<usize>) -> Self {
        Self {
            value: value.into(),
            expected,
        }
    }
}

impl std::fmt::Display for OutOfBoundsError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_fmt(format_args!(
            "{} does not fit into range {}..={}",
            self.value,
            self.expected.start(),
            self.expected.end()
        ))
    }
}

impl std::error::Error for OutOfBoundsError {}

#[cfg(feature = "pyffi")]
impl From<OutOfBoundsError> for PyErr {
    fn from(value: OutOfBoundsError) -> Self {
        pyo3::exceptions::PyIndexError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An erroneous color format.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ColorFormatError {
    /// A color format that does not start with a known prefix such as `#`,
    /// `0x`, or a decimal digit.
    UnknownFormat,

    /// A color format with unexpected characters or an unexpected number of
    /// characters. For example, `#00` is missing a hexadecimal digit, whereas
    /// `#💩00` has the correct length but contains an unsuitable character.
    UnexpectedCharacters,

    /// A color format that has a malformed hexadecimal channel. For example,
    /// `#efg` has a malformed blue channel.
    MalformedHex,

    /// An integer color format without digits. For example, `0x` is just a
    /// prefix.
    MissingDigits,

    /// An integer color format whose value does not fit into 32 bits.
    Overflow,
}

impl std::fmt::Display for ColorFormatError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        use ColorFormatError::*;

        match self {
            UnknownFormat => {
                f.write_str("color format should start with `#`, `0x`, or a decimal digit")
            }
            UnexpectedCharacters => {
                f.write_str("color format should contain only valid ASCII characters")
            }
            MalformedHex => {
                f.write_str("color format channels should be hexadecimal integers but are not")
            }
            MissingDigits => f.write_str("color format should have digits after its prefix"),
            Overflow => f.write_str("color format should fit into 32 bits but does not"),
        }
    }
}

impl std::error::Error for ColorFormatError {}

#[cfg(feature = "pyffi")]
impl From<ColorFormatError> for PyErr {
    fn from(value: ColorFormatError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// An error while extracting a seed color from pixels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ExtractError {
    /// There are no pixels to extract a color from.
    EmptyInput,

    /// The number of samples does not match the pixel buffer's dimensions.
    Dimensions {
        width: usize,
        height: usize,
        samples: usize,
    },
}

impl std::fmt::Display for ExtractError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyInput => f.write_str("unable to extract color from zero pixels"),
            Self::Dimensions {
                width,
                height,
                samples,
            } => f.write_fmt(format_args!(
                "pixel buffer with {}×{} dimensions should have {} samples but has {}",
                width,
                height,
                width.saturating_mul(*height),
                samples
            )),
        }
    }
}

impl std::error::Error for ExtractError {}

#[cfg(feature = "pyffi")]
impl From<ExtractError> for PyErr {
    fn from(value: ExtractError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}

// ====================================================================================================================

/// The kinds of errors while mapping scheme roles to preset variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PresetErrorKind {
    /// A mixed entry without any layers.
    NoLayers,
    /// A layer with an opacity greater than one.
    Opacity(OutOfBoundsError),
    /// A layer with a negative or not-a-number opacity.
    NegativeOpacity,
}

/// An error while mapping scheme roles to preset variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PresetError {
    variable: String,
    kind: PresetErrorKind,
}

impl PresetError {
    /// Create a new preset error for the given variable.
    pub fn new(variable: impl Into<String>, kind: PresetErrorKind) -> Self {
        Self {
            variable: variable.into(),
            kind,
        }
    }

    /// Get the name of the offending variable.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Get the kind of error.
    pub fn kind(&self) -> &PresetErrorKind {
        &self.kind
    }
}

impl std::fmt::Display for PresetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            PresetErrorKind::NoLayers => f.write_fmt(format_args!(
                "mapping for {} should have at least one layer but has none",
                self.variable
            )),
            PresetErrorKind::Opacity(ref error) => f.write_fmt(format_args!(
                "mapping for {} has invalid opacity (in thousandths): {}",
                self.variable, error
            )),
            PresetErrorKind::NegativeOpacity => f.write_fmt(format_args!(
                "mapping for {} has negative or undefined opacity",
                self.variable
            )),
        }
    }
}

impl std::error::Error for PresetError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self.kind {
            PresetErrorKind::NoLayers | PresetErrorKind::NegativeOpacity => None,
            PresetErrorKind::Opacity(ref error) => Some(error),
        }
    }
}

#[cfg(feature = "pyffi")]
impl From<PresetError> for PyErr {
    fn from(value: PresetError) -> Self {
        PyValueError::new_err(value.to_string())
    }
}
