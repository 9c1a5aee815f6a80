use lazy_static::lazy_static;
use regex::Regex;

/// Suffix an entry must carry to be part of the PNG subset
pub const PNG_SUFFIX: &str = ".png";

/// Snapshot name up to the 1-based frame number
pub const SOURCE_PREFIX: &str =
    "framefusion-test-ts-test-framefusion-test-ts-frame-fusion-can-get-all-frames-low-playback-rate-";
/// Snapshot name after the frame number
pub const SOURCE_SUFFIX: &str = "-snap.png";

/// Renamed file stem before the padded index
pub const DESTINATION_PREFIX: &str = "framefusion";
/// Zero-padding width of the destination index
pub const DESTINATION_WIDTH: usize = 3;

lazy_static! {
    static ref SOURCE_PATTERN: Regex = Regex::new(&format!(
        r"^{}(\d+){}$",
        regex::escape(SOURCE_PREFIX),
        regex::escape(SOURCE_SUFFIX)
    ))
    .unwrap();
    static ref DESTINATION_PATTERN: Regex = Regex::new(&format!(
        r"^{}\d{{{},}}{}$",
        regex::escape(DESTINATION_PREFIX),
        DESTINATION_WIDTH,
        regex::escape(PNG_SUFFIX)
    ))
    .unwrap();
}

/// Expected snapshot filename for the zero-based `index` (frame numbers start at 1)
pub fn source_name(index: usize) -> String {
    format!("{}{}{}", SOURCE_PREFIX, index + 1, SOURCE_SUFFIX)
}

/// Sequential filename for the zero-based `index`, e.g. `framefusion007.png`
pub fn destination_name(index: usize) -> String {
    format!(
        "{}{:0width$}{}",
        DESTINATION_PREFIX,
        index,
        PNG_SUFFIX,
        width = DESTINATION_WIDTH
    )
}

/// Literal, case-sensitive `.png` suffix check
pub fn is_png(name: &str) -> bool {
    name.ends_with(PNG_SUFFIX)
}

/// 1-based frame number of a name following the snapshot template
pub fn snapshot_index(name: &str) -> Option<usize> {
    SOURCE_PATTERN
        .captures(name)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Whether a name is already in sequential form
pub fn is_renamed(name: &str) -> bool {
    DESTINATION_PATTERN.is_match(name)
}
