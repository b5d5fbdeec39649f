//! Encoding Repair
//!
//! The meal endpoint sometimes hands back UTF-8 text that was read as a
//! single-byte charset, so every byte ends up as its own character.
//! This module undoes that for Korean menu text.

use std::borrow::Cow;

/// Hangul syllables block (가..힣)
const HANGUL_SYLLABLES: std::ops::RangeInclusive<char> = '\u{AC00}'..='\u{D7A3}';

/// True if `text` contains at least one Hangul syllable
pub fn contains_hangul(text: &str) -> bool {
    text.chars().any(|c| HANGUL_SYLLABLES.contains(&c))
}

/// Reinterpret each code unit as a raw byte and decode the bytes as UTF-8.
///
/// The decoded text is only accepted when it is non-empty and contains
/// Hangul; anything else (invalid UTF-8, code units above 0xFF, plain
/// ASCII) returns the input unchanged.
pub fn try_fix_encoding(value: &str) -> Cow<'_, str> {
    if value.is_empty() {
        return Cow::Borrowed(value);
    }

    let bytes: Option<Vec<u8>> = value
        .encode_utf16()
        .map(|unit| u8::try_from(unit).ok())
        .collect();

    let Some(bytes) = bytes else {
        return Cow::Borrowed(value);
    };

    match String::from_utf8(bytes) {
        Ok(decoded) if !decoded.is_empty() && contains_hangul(&decoded) => Cow::Owned(decoded),
        _ => Cow::Borrowed(value),
    }
}
