//! Four-character chunk identifiers.

use std::fmt;

/// 4-byte chunk identifier (FourCC).
///
/// Every chunk in a RIFF-family container is introduced by four identifier
/// bytes. They are usually printable ASCII ("RIFX", "LIST", "fdta") but the
/// format does not require it: identifiers are compared byte-for-byte,
/// case-sensitively, and may contain arbitrary bytes, stored in reading
/// order.
///
/// # Usage
///
/// ```rust
/// use ae_riff::FourCC;
///
/// let list = FourCC::LIST;
/// assert_eq!(list.to_string(), "LIST");
///
/// // Short names are space-padded, the RIFF convention ("fmt ", "AVI ")
/// let fmt = FourCC::from_str("fmt").unwrap();
/// assert_eq!(fmt, FourCC(*b"fmt "));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FourCC(pub [u8; 4]);

impl FourCC {
    /// Little-endian container marker, the classic RIFF root.
    pub const RIFF: Self = Self(*b"RIFF");

    /// Big-endian container marker, used by After Effects project files.
    pub const RIFX: Self = Self(*b"RIFX");

    /// Nested container marker.
    pub const LIST: Self = Self(*b"LIST");

    /// Identifier of the empty sentinel chunk returned by failed lookups.
    pub const NIL: Self = Self([0; 4]);

    /// Raw identifier bytes.
    pub const fn bytes(&self) -> [u8; 4] {
        self.0
    }

    /// Create from a 1-4 byte name, padding with spaces on the right.
    ///
    /// Identifiers shorter than four bytes are conventionally space-padded
    /// ("fmt " in WAV files). Returns `None` for empty or over-long input.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        let bytes = s.as_bytes();
        if bytes.is_empty() || bytes.len() > 4 {
            return None;
        }
        let mut id = [b' '; 4];
        id[..bytes.len()].copy_from_slice(bytes);
        Some(Self(id))
    }
}

impl From<[u8; 4]> for FourCC {
    fn from(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
}

impl From<&[u8; 4]> for FourCC {
    fn from(bytes: &[u8; 4]) -> Self {
        Self(*bytes)
    }
}

impl fmt::Display for FourCC {
    /// Prints printable identifiers verbatim and escapes everything else
    /// (`\xNN`), so arbitrary-byte identifiers stay displayable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.escape_ascii())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_printable() {
        assert_eq!(FourCC::RIFX.to_string(), "RIFX");
        assert_eq!(FourCC(*b"fdta").to_string(), "fdta");
    }

    #[test]
    fn display_escapes_non_printable() {
        let id = FourCC([0x00, b'A', 0xFF, b' ']);
        assert_eq!(id.to_string(), "\\x00A\\xff ");
    }

    #[test]
    fn from_str_pads_short_names() {
        assert_eq!(FourCC::from_str("fmt").unwrap(), FourCC(*b"fmt "));
        assert_eq!(FourCC::from_str("LIST").unwrap(), FourCC::LIST);
    }

    #[test]
    fn from_str_rejects_bad_lengths() {
        assert!(FourCC::from_str("").is_none());
        assert!(FourCC::from_str("TOOLONG").is_none());
    }

    #[test]
    fn from_byte_array() {
        let id: FourCC = b"Layr".into();
        assert_eq!(id, FourCC(*b"Layr"));
    }
}
