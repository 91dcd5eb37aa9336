use std::borrow::Cow;

///
/// Decode bytes as UTF-8, dropping invalid byte sequences instead of
/// replacing them with U+FFFD. Valid input is borrowed without copying.
///
pub fn decode_lossy(bytes: &[u8]) -> Cow<'_, str> {
    if let Ok(text) = std::str::from_utf8(bytes) {
        return Cow::Borrowed(text);
    }

    let mut text = String::with_capacity(bytes.len());
    for chunk in bytes.utf8_chunks() {
        text.push_str(chunk.valid());
    }

    Cow::Owned(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    fn test_valid_utf8_is_borrowed() {
        let decoded = decode_lossy(b"GENE=CYP2D6");
        assert_eq!(matches!(decoded, Cow::Borrowed(_)), true);
        assert_eq!(decoded, "GENE=CYP2D6");
    }

    #[rstest]
    #[case(b"GENE=\xffCYP2D6", "GENE=CYP2D6")]
    #[case(b"\xc3\x28STAR=*4", "(STAR=*4")]
    #[case(b"truncated\xe2\x82", "truncated")]
    fn test_invalid_sequences_are_dropped(#[case] bytes: &[u8], #[case] expected: &str) {
        let decoded = decode_lossy(bytes);
        assert_eq!(decoded, expected);
        assert_eq!(decoded.contains('\u{FFFD}'), false);
    }
}
