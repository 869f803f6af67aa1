use crate::platform::CharacterSet;

fn is_windows_reserved_basename(name: &str) -> bool {
    // Reserved device names are case-insensitive and reserved even with extensions
    let upper = name.trim_end().to_ascii_uppercase();
    matches!(upper.as_str(),
        "CON" | "PRN" | "AUX" | "NUL" |
        "COM1" | "COM2" | "COM3" | "COM4" | "COM5" | "COM6" | "COM7" | "COM8" | "COM9" |
        "LPT1" | "LPT2" | "LPT3" | "LPT4" | "LPT5" | "LPT6" | "LPT7" | "LPT8" | "LPT9"
    )
}

/// Whether `seg` can be used as a single file name on the host, and on
/// `platform` when one is targeted.
pub fn is_safe_path_segment(seg: &str, platform: Option<CharacterSet>) -> bool {
    if seg.is_empty() { return false; }
    if seg == "." || seg == ".." { return false; }
    if seg.contains('/') || seg.contains(std::path::MAIN_SEPARATOR) { return false; }
    if platform == Some(CharacterSet::Windows) {
        // Windows does not allow names ending with space or dot
        if seg.ends_with(' ') || seg.ends_with('.') { return false; }
        let base = seg.split('.').next().unwrap_or(seg);
        if is_windows_reserved_basename(base) { return false; }
    }
    true
}
