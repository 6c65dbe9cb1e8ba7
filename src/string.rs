use crate::error::{Error, Kind};
use crate::source::Source;

fn u16_hex<I: Iterator<Item = char>>(source: &mut Source<I>) -> Result<u16, Error> {
    let mut unit = 0u16;

    for _ in 0..4 {
        let c = source
            .next()
            .ok_or_else(|| source.error(Kind::UnterminatedEscape))?;
        let digit = c
            .to_digit(16)
            .ok_or_else(|| source.error(Kind::InvalidUnicodeEscape(c)))?;

        unit = (unit << 4) | digit as u16;
    }

    Ok(unit)
}

/// Reads the rest of a quoted string, the opening quote having been consumed
/// already, and returns its decoded content.
///
/// Content is collected as UTF-16 code units so that `\u` escapes can be
/// emitted as-is. An escaped surrogate pair decodes to a single character,
/// a lone surrogate to U+FFFD.
pub fn decode<I: Iterator<Item = char>>(source: &mut Source<I>) -> Result<String, Error> {
    let mut units: Vec<u16> = Vec::new();
    let mut buf = [0u16; 2];

    loop {
        let c = source
            .next()
            .ok_or_else(|| source.error(Kind::UnterminatedString))?;

        match c {
            '"' => return Ok(String::from_utf16_lossy(&units)),
            '\\' => {
                let escaped = source
                    .next()
                    .ok_or_else(|| source.error(Kind::UnterminatedEscape))?;

                let unit = match escaped {
                    '"' => '"' as u16,
                    '\\' => '\\' as u16,
                    '/' => '/' as u16,
                    'b' => 0x08,
                    'f' => 0x0c,
                    'n' => '\n' as u16,
                    'r' => '\r' as u16,
                    't' => '\t' as u16,
                    'u' => u16_hex(source)?,
                    c => return Err(source.error(Kind::InvalidEscape(c))),
                };

                units.push(unit);
            }
            c => units.extend_from_slice(c.encode_utf16(&mut buf)),
        }
    }
}
