//! Hexadecimal load-address parsing.
//!
//! Load addresses arrive as text tokens: one per line in trace files, one
//! per prompt in interactive mode. A token is an optional `0x`/`0X` prefix
//! followed by at most 8 hexadecimal digits, so every accepted address fits
//! in 32 bits exactly.

use crate::error::Error;

/// Maximum number of hex digits in an address token (32-bit addresses).
const MAX_HEX_DIGITS: usize = 8;

/// Parses a hexadecimal address token into a 32-bit address.
///
/// Accepts an optional `0x`/`0X` prefix and between 1 and 8 hex digits.
///
/// # Errors
///
/// Returns [`Error::MalformedAddress`] if the token is empty, too long, or
/// contains a non-hex character.
///
/// # Examples
///
/// ```
/// use cachesim_core::addr::parse_address;
///
/// assert_eq!(parse_address("1f4").unwrap(), 0x1f4);
/// assert_eq!(parse_address("0xFFFFFFFF").unwrap(), u32::MAX);
/// assert!(parse_address("xyz").is_err());
/// assert!(parse_address("100000000").is_err());
/// ```
pub fn parse_address(token: &str) -> Result<u32, Error> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);

    if digits.is_empty() || digits.len() > MAX_HEX_DIGITS {
        return Err(Error::MalformedAddress(token.to_owned()));
    }

    u32::from_str_radix(digits, 16).map_err(|_| Error::MalformedAddress(token.to_owned()))
}
