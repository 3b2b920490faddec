/// Decode a UTF-16LE byte slice and strip the NUL padding around it.
///
/// Unpaired surrogates decode to U+FFFD. A dangling odd byte is ignored.
pub fn decode_utf16le(bytes: &[u8]) -> String {
    let units: Vec<u16> = bytes
        .chunks_exact(2)
        .map(|chunk| u16::from_le_bytes([chunk[0], chunk[1]]))
        .collect();

    let decoded = String::from_utf16_lossy(&units);
    decoded.trim_matches('\0').to_string()
}
