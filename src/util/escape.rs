/*!
Provides convenience routines for escaping raw bytes in error messages.
*/

/// Provides a convenient `Display` implementation for a `u8`.
///
/// The byte is treated as ASCII. Anything that isn't printable ASCII is
/// emitted as an upper case hex escape sequence.
#[derive(Clone, Copy)]
pub(crate) struct Byte(pub(crate) u8);

impl core::fmt::Display for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        match self.0 {
            b' ' => f.write_str(" "),
            b @ 0x21..=0x7E => write!(f, "{}", char::from(b)),
            b'\t' => f.write_str("\\t"),
            b'\n' => f.write_str("\\n"),
            b'\r' => f.write_str("\\r"),
            b => write!(f, "\\x{b:02X}"),
        }
    }
}

impl core::fmt::Debug for Byte {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

/// Provides a convenient `Debug` implementation for `&[u8]`.
///
/// Valid UTF-8 is written as escaped text. Any byte that is not part of a
/// valid UTF-8 sequence is written as a hex escape sequence.
pub(crate) struct Bytes<'a>(pub(crate) &'a [u8]);

impl<'a> core::fmt::Display for Bytes<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let mut bytes = self.0;
        while !bytes.is_empty() {
            let (valid_len, invalid_len) = match core::str::from_utf8(bytes) {
                Ok(_) => (bytes.len(), 0),
                Err(err) => {
                    let valid_len = err.valid_up_to();
                    let rest = bytes.len() - valid_len;
                    (valid_len, err.error_len().unwrap_or(rest))
                }
            };
            let (valid, rest) = bytes.split_at(valid_len);
            if let Ok(valid) = core::str::from_utf8(valid) {
                write!(f, "{}", valid.escape_debug())?;
            }
            let (invalid, rest) = rest.split_at(invalid_len);
            for &b in invalid {
                write!(f, "\\x{b:02x}")?;
            }
            bytes = rest;
        }
        Ok(())
    }
}

impl<'a> core::fmt::Debug for Bytes<'a> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "\"{self}\"")
    }
}

#[cfg(test)]
mod tests {
    use alloc::string::ToString;

    use super::*;

    #[test]
    fn byte() {
        assert_eq!(Byte(b'Y').to_string(), "Y");
        assert_eq!(Byte(b' ').to_string(), " ");
        assert_eq!(Byte(b'\n').to_string(), "\\n");
        assert_eq!(Byte(0xFF).to_string(), "\\xFF");
    }

    #[test]
    fn bytes() {
        assert_eq!(Bytes(b"P1Y").to_string(), "P1Y");
        assert_eq!(Bytes("P1Yé".as_bytes()).to_string(), "P1Yé");
        assert_eq!(Bytes(b"P\xFF1Y").to_string(), "P\\xff1Y");
        assert_eq!(Bytes(b"P\"").to_string(), "P\\\"");
        assert_eq!(alloc::format!("{:?}", Bytes(b"PT")), "\"PT\"");
    }
}
