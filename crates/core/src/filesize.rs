//! Human-readable file size formatting.

/// Unit labels in ascending order of magnitude (base 1024).
const UNITS: [&str; 5] = ["Bytes", "KB", "MB", "GB", "TB"];

/// Render a byte count using base-1024 scaling with two-decimal rounding.
///
/// The largest unit where the scaled value is >= 1 is chosen, and
/// trailing zeros are trimmed: `1024` renders as `"1 KB"`, `1536` as
/// `"1.5 KB"`, `1100` as `"1.07 KB"`.
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 Bytes".to_string();
    }

    // Integer division picks the exponent so exact powers of 1024 never
    // land in the wrong unit through float log imprecision.
    let mut exponent = 0usize;
    let mut remaining = bytes;
    while remaining >= 1024 && exponent < UNITS.len() - 1 {
        remaining /= 1024;
        exponent += 1;
    }

    let scaled = bytes as f64 / 1024f64.powi(exponent as i32);
    let rounded = (scaled * 100.0).round() / 100.0;
    format!("{} {}", rounded, UNITS[exponent])
}
