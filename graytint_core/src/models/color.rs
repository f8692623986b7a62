use custom_error::custom_error;

use super::pixel::Pixel;

custom_error! {pub ColorParseError
    InvalidFormat {description: String} = "Invalid color format: {description}",
    InvalidHexDigits {description: String} = "Invalid hex digits in color: {description}",
}

/// Parses a `#RRGGBBAA` string into a color value. Requires both the `#`
/// prefix and the exact 9 character length.
pub fn parse_color(input: &str) -> Result<Pixel, ColorParseError> {
    if input.len() != 9 || !input.starts_with('#') || !input.is_ascii() {
        return Err(ColorParseError::InvalidFormat {
            description: format!("expected #RRGGBBAA, got \"{}\"", input),
        });
    }

    // from_str_radix tolerates a leading '+', which is not a hex digit
    if let Some(bad) = input[1..].chars().find(|c| !c.is_ascii_hexdigit()) {
        return Err(ColorParseError::InvalidHexDigits {
            description: format!("\"{}\" contains '{}'", input, bad),
        });
    }

    let mut channels = [0u8; 4];
    for (index, channel) in channels.iter_mut().enumerate() {
        let offset = 1 + index * 2;
        *channel = u8::from_str_radix(&input[offset..offset + 2], 16)
            .map_err(|err| ColorParseError::InvalidHexDigits {
                description: format!("\"{}\": {}", input, err),
            })?;
    }

    Ok(Pixel::from_rgba(channels[0], channels[1], channels[2], channels[3]))
}
