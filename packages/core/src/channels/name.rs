/// The name Slack stores for a requested channel name.
///
/// Slack lowercases names and rewrites anything outside `[a-z0-9_-]` to `_`
/// instead of rejecting the request, so a `name_taken` for `"My Channel"`
/// refers to the existing `my_channel`. The rewrite is per UTF-16 code unit,
/// so a character outside the BMP becomes two underscores.
pub fn normalize_channel_name(name: &str) -> String {
    name.to_lowercase()
        .encode_utf16()
        .map(|unit| match u8::try_from(unit) {
            Ok(byte @ (b'a'..=b'z' | b'0'..=b'9' | b'_' | b'-')) => char::from(byte),
            _ => '_',
        })
        .collect()
}
