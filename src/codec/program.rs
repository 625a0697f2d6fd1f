//! Program text codec
//!
//! Two deliberately different encodings of the same nine command tokens
//! coexist and must not be unified:
//!
//! - **Compact alphabet** — one character per token, used where every byte
//!   counts (URL-embedded programs and allowed-action sets):
//!   `'1'/'2'/'3'` for `forward1/2/3`, `'A'/'B'/'D'` for `left45/90/180`,
//!   `'a'/'b'/'d'` for `right45/90/180`.
//! - **Mnemonic alphabet** — a short human-legible mnemonic per token
//!   (`"f1"`, `"l45"`, `"r180"`, ...), used for the alternate persisted
//!   form.
//!
//! Parsing the compact form is strict and fails on the first character
//! outside the alphabet. Serializing is lenient and silently skips tokens
//! it does not recognize (best-effort export).

use std::fmt;

/// Error produced when decoding program text fails.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A character outside the compact alphabet was encountered.
    UnexpectedCharacter { character: char, position: usize },

    /// The input was not valid percent-encoded UTF-8.
    InvalidEncoding { message: String },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::UnexpectedCharacter {
                character,
                position,
            } => {
                write!(
                    f,
                    "Unexpected character '{}' at position {}",
                    character, position
                )
            }
            ParseError::InvalidEncoding { message } => {
                write!(f, "Invalid program encoding: {}", message)
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Parse compact program text into a token list.
///
/// Consumes exactly one character per token, left to right, with no
/// separators. Fails on the first character outside the compact alphabet.
pub fn parse(text: &str) -> Result<Vec<String>, ParseError> {
    let mut program = Vec::new();
    for (position, character) in text.chars().enumerate() {
        let command = match character {
            '1' => "forward1",
            '2' => "forward2",
            '3' => "forward3",
            'A' => "left45",
            'B' => "left90",
            'D' => "left180",
            'a' => "right45",
            'b' => "right90",
            'd' => "right180",
            _ => {
                return Err(ParseError::UnexpectedCharacter {
                    character,
                    position,
                })
            }
        };
        program.push(command.to_string());
    }
    Ok(program)
}

/// Serialize a token list to the mnemonic form (`"f1l45..."`).
///
/// Unrecognized tokens are skipped, not reported: this is a best-effort
/// exporter and the asymmetry with [`parse`] is intentional.
pub fn serialize<S: AsRef<str>>(program: &[S]) -> String {
    let mut text = String::new();
    for command in program {
        let mnemonic = match command.as_ref() {
            "forward1" => "f1",
            "forward2" => "f2",
            "forward3" => "f3",
            "left45" => "l45",
            "left90" => "l90",
            "left180" => "l180",
            "right45" => "r45",
            "right90" => "r90",
            "right180" => "r180",
            _ => continue,
        };
        text.push_str(mnemonic);
    }
    text
}

/// Encode a token list in the compact single-character form.
///
/// Same leniency as [`serialize`]: unrecognized tokens are skipped.
pub fn encode_compact<S: AsRef<str>>(program: &[S]) -> String {
    let mut text = String::new();
    for command in program {
        let character = match command.as_ref() {
            "forward1" => '1',
            "forward2" => '2',
            "forward3" => '3',
            "left45" => 'A',
            "left90" => 'B',
            "left180" => 'D',
            "right45" => 'a',
            "right90" => 'b',
            "right180" => 'd',
            _ => continue,
        };
        text.push(character);
    }
    text
}

/// Percent-decode `text`, then parse it with the compact alphabet.
pub fn deserialize(text: &str) -> Result<Vec<String>, ParseError> {
    let decoded = urlencoding::decode(text).map_err(|err| ParseError::InvalidEncoding {
        message: err.to_string(),
    })?;
    parse(&decoded)
}
