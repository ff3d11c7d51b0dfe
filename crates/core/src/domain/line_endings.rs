use std::borrow::Cow;

/// Which way a line-ending conversion goes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Conversion {
    /// CRLF to LF
    ToUnix,
    /// LF to CRLF
    ToDos,
}

impl Conversion {
    pub fn from_reverse_flag(reverse: bool) -> Self {
        if reverse { Conversion::ToDos } else { Conversion::ToUnix }
    }
}

/// Rewrite line endings byte by byte.
///
/// Content is treated as one byte per character, so any single-byte encoding
/// passes through untouched. `ToDos` leaves an LF that already follows a CR
/// alone, which keeps both directions idempotent. Returns `Cow::Borrowed`
/// when nothing had to change.
pub fn convert(input: &[u8], conversion: Conversion) -> Cow<'_, [u8]> {
    match conversion {
        Conversion::ToUnix => {
            if !input.windows(2).any(|w| w == b"\r\n") {
                return Cow::Borrowed(input);
            }
            let mut out = Vec::with_capacity(input.len());
            let mut i = 0;
            while i < input.len() {
                if input[i] == b'\r' && input.get(i + 1) == Some(&b'\n') {
                    out.push(b'\n');
                    i += 2;
                } else {
                    out.push(input[i]);
                    i += 1;
                }
            }
            Cow::Owned(out)
        }
        Conversion::ToDos => {
            let bare_lf = |i: usize| input[i] == b'\n' && (i == 0 || input[i - 1] != b'\r');
            if !(0..input.len()).any(bare_lf) {
                return Cow::Borrowed(input);
            }
            let mut out = Vec::with_capacity(input.len() + input.len() / 16);
            for i in 0..input.len() {
                if bare_lf(i) {
                    out.push(b'\r');
                }
                out.push(input[i]);
            }
            Cow::Owned(out)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_crlf_to_lf() {
        let out = convert(b"line1\r\nline2\r\n", Conversion::ToUnix);
        assert_eq!(out.as_ref(), b"line1\nline2\n");
    }

    #[test]
    fn test_lf_to_crlf() {
        let out = convert(b"line1\nline2\n", Conversion::ToDos);
        assert_eq!(out.as_ref(), b"line1\r\nline2\r\n");
    }

    #[test]
    fn test_already_converted_is_borrowed() {
        assert!(matches!(convert(b"a\nb\n", Conversion::ToUnix), Cow::Borrowed(_)));
        assert!(matches!(convert(b"a\r\nb\r\n", Conversion::ToDos), Cow::Borrowed(_)));
        assert!(matches!(convert(b"", Conversion::ToDos), Cow::Borrowed(_)));
    }

    #[test]
    fn test_both_directions_idempotent() {
        let mixed: &[u8] = b"a\r\nb\nc\r\n\n\rd";
        for conversion in [Conversion::ToUnix, Conversion::ToDos] {
            let once = convert(mixed, conversion).into_owned();
            let twice = convert(&once, conversion).into_owned();
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn test_lf_round_trip() {
        let original: &[u8] = b"\nfirst\n\nsecond line\nno newline at end";
        let dos = convert(original, Conversion::ToDos).into_owned();
        let back = convert(&dos, Conversion::ToUnix).into_owned();
        assert_eq!(back, original);
    }

    #[test]
    fn test_lone_cr_and_high_bytes_untouched() {
        let input: &[u8] = &[b'a', b'\r', 0xE9, b'\r', b'\n'];
        assert_eq!(convert(input, Conversion::ToUnix).as_ref(), &[b'a', b'\r', 0xE9, b'\n']);
    }
}
