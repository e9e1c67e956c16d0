//! Text decoding for uploaded payloads.
//! Uploaded files arrive as raw bytes; the wire format is UTF-8 JSON but
//! browser-exported files frequently carry a byte order mark.

use encoding_rs::UTF_8;

/// Decodes a raw payload to text.
/// BOM sniffing honors UTF-8 and UTF-16 marks; invalid sequences are replaced.
pub(crate) fn decode(payload: &[u8]) -> String {
    let (text, _, _) = UTF_8.decode(payload);
    text.into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_plain_utf8() {
        assert_eq!(decode(b"a,b\n1,2"), "a,b\n1,2");
    }

    #[test]
    fn decode_strips_utf8_bom() {
        assert_eq!(decode(b"\xef\xbb\xbfa,b"), "a,b");
    }

    #[test]
    fn decode_utf16le_with_bom() {
        let bytes: Vec<u8> = [0xff, 0xfe]
            .into_iter()
            .chain("a,b".encode_utf16().flat_map(|unit| unit.to_le_bytes()))
            .collect();
        assert_eq!(decode(&bytes), "a,b");
    }
}
