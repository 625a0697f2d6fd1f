//! Character state codec
//!
//! Round-trips a [`CharacterState`] through a fixed-width string suitable
//! for a URL query parameter: one character each for x, y and heading,
//! then four characters per drawn path segment, with no delimiters.
//!
//! # Character Classes
//!
//! - Position: `'0'` is 0, `'a'..='z'` are 1..26, `'A'..='Z'` are -1..-26.
//!   Encoding truncates to an integer and saturates beyond +/-26; only a
//!   non-numeric coordinate (NaN) is an error.
//! - Heading: stored as an eighth-of-turn index 0..=7 (`'0'`, `'a'..='g'`).
//!   A heading that is not on a 45 degree boundary cannot be encoded.
//!
//! Decoding is strict: any character outside its class fails, as does a
//! string too short to hold the pose or a trailing partial path segment.

use std::fmt;

use crate::model::{CharacterState, PathSegment};

/// Errors produced while encoding or decoding character state.
#[derive(Debug, Clone, PartialEq)]
pub enum CharacterStateError {
    /// Position coordinate that cannot be encoded (NaN).
    PositionOutOfRange { value: f64 },

    /// Character outside the position class during decode.
    UnrecognizedPositionCharacter { character: char },

    /// Heading not representable as an eighth-of-turn index 0..=7.
    UnrecognizedDirection { value: f64 },

    /// Character outside the direction class during decode.
    UnrecognizedDirectionCharacter { character: char },

    /// Input shorter than the 3-character pose prefix.
    TruncatedState { length: usize },

    /// Trailing path characters that do not form a whole 4-character quad.
    IncompletePathSegment { remainder: usize },
}

impl fmt::Display for CharacterStateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterStateError::PositionOutOfRange { value } => {
                write!(f, "Position out of encodable range: {}", value)
            }
            CharacterStateError::UnrecognizedPositionCharacter { character } => {
                write!(f, "Unrecognized position character '{}'", character)
            }
            CharacterStateError::UnrecognizedDirection { value } => {
                write!(f, "Unrecognized direction: {}", value)
            }
            CharacterStateError::UnrecognizedDirectionCharacter { character } => {
                write!(f, "Unrecognized direction character '{}'", character)
            }
            CharacterStateError::TruncatedState { length } => {
                write!(
                    f,
                    "Character state text too short: {} characters, need at least 3",
                    length
                )
            }
            CharacterStateError::IncompletePathSegment { remainder } => {
                write!(
                    f,
                    "Incomplete path segment: {} trailing characters, need 4 per segment",
                    remainder
                )
            }
        }
    }
}

impl std::error::Error for CharacterStateError {}

/// Encode one position coordinate as a single character.
///
/// The coordinate is truncated to an integer and saturated at +/-26.
pub fn encode_position(value: f64) -> Result<char, CharacterStateError> {
    if value.is_nan() {
        return Err(CharacterStateError::PositionOutOfRange { value });
    }
    let truncated = value.trunc();
    if truncated == 0.0 {
        Ok('0')
    } else if truncated > 0.0 {
        if truncated > 26.0 {
            Ok('z')
        } else {
            Ok((b'a' + truncated as u8 - 1) as char)
        }
    } else if truncated < -26.0 {
        Ok('Z')
    } else {
        Ok((b'A' + (-truncated) as u8 - 1) as char)
    }
}

/// Decode one position character back to an integer coordinate.
pub fn decode_position(character: char) -> Result<i32, CharacterStateError> {
    match character {
        '0' => Ok(0),
        'a'..='z' => Ok((character as i32) - ('a' as i32) + 1),
        'A'..='Z' => Ok(-((character as i32) - ('A' as i32) + 1)),
        _ => Err(CharacterStateError::UnrecognizedPositionCharacter { character }),
    }
}

/// Encode an eighth-of-turn index (0..=7) as a single character.
pub fn encode_direction(eighth: i32) -> Result<char, CharacterStateError> {
    match eighth {
        0 => Ok('0'),
        1..=7 => Ok((b'a' + eighth as u8 - 1) as char),
        _ => Err(CharacterStateError::UnrecognizedDirection {
            value: eighth as f64,
        }),
    }
}

/// Decode a direction character back to an eighth-of-turn index.
pub fn decode_direction(character: char) -> Result<i32, CharacterStateError> {
    match character {
        '0' => Ok(0),
        'a'..='g' => Ok((character as i32) - ('a' as i32) + 1),
        _ => Err(CharacterStateError::UnrecognizedDirectionCharacter { character }),
    }
}

fn direction_to_eighth(degrees: f64) -> Result<i32, CharacterStateError> {
    let eighth = degrees / 45.0;
    if eighth.fract() == 0.0 && (0.0..8.0).contains(&eighth) {
        Ok(eighth as i32)
    } else {
        Err(CharacterStateError::UnrecognizedDirection { value: degrees })
    }
}

/// Serialize a character state to its fixed-width text form.
pub fn serialize(state: &CharacterState) -> Result<String, CharacterStateError> {
    let mut text = String::with_capacity(3 + state.path.len() * 4);
    text.push(encode_position(state.x_pos)?);
    text.push(encode_position(state.y_pos)?);
    text.push(encode_direction(direction_to_eighth(state.direction_degrees)?)?);
    for segment in &state.path {
        text.push(encode_position(segment.x1)?);
        text.push(encode_position(segment.y1)?);
        text.push(encode_position(segment.x2)?);
        text.push(encode_position(segment.y2)?);
    }
    Ok(text)
}

/// Deserialize character state text back to a [`CharacterState`].
///
/// The first 3 characters are the pose; the remainder must chunk evenly
/// into 4-character path segments.
pub fn deserialize(text: &str) -> Result<CharacterState, CharacterStateError> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() < 3 {
        return Err(CharacterStateError::TruncatedState {
            length: chars.len(),
        });
    }

    let x_pos = decode_position(chars[0])? as f64;
    let y_pos = decode_position(chars[1])? as f64;
    let direction_degrees = decode_direction(chars[2])? as f64 * 45.0;

    let rest = &chars[3..];
    if rest.len() % 4 != 0 {
        return Err(CharacterStateError::IncompletePathSegment {
            remainder: rest.len() % 4,
        });
    }

    let mut path = Vec::with_capacity(rest.len() / 4);
    for quad in rest.chunks(4) {
        path.push(PathSegment {
            x1: decode_position(quad[0])? as f64,
            y1: decode_position(quad[1])? as f64,
            x2: decode_position(quad[2])? as f64,
            y2: decode_position(quad[3])? as f64,
        });
    }

    Ok(CharacterState::new(x_pos, y_pos, direction_degrees, path))
}
