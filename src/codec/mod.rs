//! Text codecs for persistence and sharing
//!
//! Programs and character state are persisted as compact strings (URL query
//! parameters and local-storage entries). This module holds the codecs:
//! - [`program`]: command tokens <-> text (compact single-character
//!   alphabet and mnemonic multi-character alphabet)
//! - [`character`]: character state <-> fixed-width string
//! - [`url`]: query-string parsing for the persisted parameters
//!
//! # Strict Decode, Lenient Encode
//!
//! Decoding always fails fast on unrecognized input, citing the offending
//! character or value. Encoding of token lists is best-effort and skips
//! tokens it does not recognize. Both directions preserve their formats
//! bit-exactly; see the individual modules for the alphabets.

pub mod character;
pub mod program;
pub mod url;
