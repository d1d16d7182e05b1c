use crate::error::ColorFormatError;
use crate::Float;

/// Parse a color in hashed hexadecimal format.
///
/// This function accepts `#rgb`, `#rrggbb`, and `#aarrggbb`. If successful, it
/// returns the packed 32-bit ARGB value, with alpha defaulting to opaque. It
/// transparently handles single-digit coordinates.
fn parse_hashed(s: &str) -> Result<u32, ColorFormatError> {
    let digits = s.strip_prefix('#').ok_or(ColorFormatError::UnknownFormat)?;
    if !digits.is_ascii() {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    fn parse_channel(digits: &str, width: usize, index: usize) -> Result<u32, ColorFormatError> {
        let t = digits
            .get(width * index..width * (index + 1))
            .ok_or(ColorFormatError::UnexpectedCharacters)?;
        let n = u8::from_str_radix(t, 16).map_err(|_| ColorFormatError::MalformedHex)? as u32;

        Ok(if width == 1 { 16 * n + n } else { n })
    }

    let (width, has_alpha) = match digits.len() {
        3 => (1, false),
        6 => (2, false),
        8 => (2, true),
        _ => return Err(ColorFormatError::UnexpectedCharacters),
    };

    let mut channels = [0xff_u32; 4];
    let offset = if has_alpha { 0 } else { 1 };
    for (index, channel) in channels.iter_mut().skip(offset).enumerate() {
        *channel = parse_channel(digits, width, index)?;
    }

    let [a, r, g, b] = channels;
    Ok((a << 24) | (r << 16) | (g << 8) | b)
}

/// Parse a color written as an integer.
///
/// This function accepts `0x`-prefixed hexadecimal as well as decimal
/// integers. A value that fits into 24 bits and has no explicit alpha digits is
/// treated as opaque, which matches how accent colors are usually written down,
/// e.g., `0x6750a4`.
fn parse_integer(s: &str) -> Result<u32, ColorFormatError> {
    let (digits, radix) = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        Some(rest) => (rest, 16),
        None => (s, 10),
    };

    if digits.is_empty() {
        return Err(ColorFormatError::MissingDigits);
    } else if !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(ColorFormatError::UnexpectedCharacters);
    }

    let value = u32::from_str_radix(digits, radix).map_err(|_| ColorFormatError::Overflow)?;
    let has_alpha = if radix == 16 {
        digits.len() > 6
    } else {
        value > 0xff_ffff
    };

    Ok(if has_alpha { value } else { 0xff00_0000 | value })
}

/// Parse a color string into a packed ARGB value.
///
/// Leading and trailing whitespace is ignored.
pub(crate) fn parse(s: &str) -> Result<u32, ColorFormatError> {
    let s = s.trim();
    if s.starts_with('#') {
        parse_hashed(s)
    } else if s.starts_with(|c: char| c.is_ascii_digit()) {
        parse_integer(s)
    } else {
        Err(ColorFormatError::UnknownFormat)
    }
}

// --------------------------------------------------------------------------------------------------------------------

/// Format the red, green, and blue channels in hashed hexadecimal notation.
pub(crate) fn format_hex(r: u8, g: u8, b: u8) -> String {
    format!("#{:02x}{:02x}{:02x}", r, g, b)
}

/// Format the channels in CSS `rgba()` notation with the given opacity.
///
/// The opacity is written with the shortest representation that round-trips,
/// so that 0.5 becomes `0.5` and not `0.500000`.
pub(crate) fn format_rgba(r: u8, g: u8, b: u8, opacity: Float) -> String {
    format!("rgba({}, {}, {}, {})", r, g, b, opacity)
}
