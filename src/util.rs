use std::char;

/// Files saved by Windows editors often start with a byte order mark. `FF FE` marks UTF-16 LE.
const BOM_UTF16_LE: &[u8] = &[0xFF, 0xFE];
const BOM_UTF8: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Space, horizontal tab, line feed, vertical tab, form feed and carriage return.
/// Non-breaking spaces and other Unicode separators are kept as part of keys and values.
const WHITESPACE: &[char] = &[' ', '\t', '\n', '\x0B', '\x0C', '\r'];

#[must_use]
pub(crate) fn trim(s: &str) -> &str {
    s.trim_matches(WHITESPACE)
}

/// Decode raw file contents into text. A leading UTF-16 LE or UTF-8 byte order mark selects the
/// encoding and is dropped, so it never ends up in front of the first section header.
#[must_use]
pub(crate) fn decode_data(data: &[u8]) -> String {
    if let Some(rest) = data.strip_prefix(BOM_UTF16_LE) {
        let utf16 = rest
            .chunks_exact(2)
            .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
            .collect::<Vec<u16>>();

        char::decode_utf16(utf16)
            .map(|c| c.unwrap_or(char::REPLACEMENT_CHARACTER))
            .collect::<String>()
    } else {
        let data = data.strip_prefix(BOM_UTF8).unwrap_or(data);
        String::from_utf8_lossy(data).into_owned()
    }
}
