//! StorCLI Output Quirk Normalization
//!
//! The controller summary JSON is not schema-stable across firmware and
//! driver versions: a couple of fields change *type* depending on the
//! hardware present. These quirks are fixed up by literal substring
//! replacement before the document ever reaches the typed decoder, so
//! the decoder stays simple and the quirks stay in one tested place.
//!
//! Known quirks:
//!
//! - `"BBU Status" : "NA"` — reported as a string when no BBU is
//!   fitted, while every other payload carries an integer. Replaced
//!   (first occurrence only) with the [`BBU_STATUS_SENTINEL`].
//! - `"DG" : "-"` — a dash standing in for "drive not in any group" in
//!   `PD LIST` entries. Replaced (all occurrences) with
//!   [`DRIVE_GROUP_NONE`].
//!
//! Both sentinels are out of the fields' real value domains: BBU status
//! codes are small positive integers and drive-group indices are small
//! non-negative integers.

/// Sentinel substituted for a `"NA"` BBU status. Maps to "not healthy".
pub const BBU_STATUS_SENTINEL: i64 = 9999;

/// Sentinel substituted for a `"-"` drive group. Exported as `"-"`.
pub const DRIVE_GROUP_NONE: i64 = 9999;

/// Rewrites known-bad literals in raw controller JSON so it decodes
/// into the fixed numeric types of [`crate::storcli::types`].
pub fn normalize_controller_json(raw: &str) -> String {
    let normalized = raw.replacen(r#""BBU Status" : "NA""#, r#""BBU Status" : 9999"#, 1);
    normalized.replace(r#""DG" : "-""#, r#""DG" : 9999"#)
}
