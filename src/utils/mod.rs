const BYTES_PER_MEGABYTE: f64 = 1024.0 * 1024.0;

/// Human readable size, always in megabytes with two decimals (`2.00 MB`).
pub fn format_megabytes(size: u64) -> String {
    format!("{:.2} MB", size as f64 / BYTES_PER_MEGABYTE)
}

/// Pad `value` with spaces to `width` characters, counting chars rather than bytes.
pub fn pad(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        value.to_string()
    } else {
        format!("{}{}", value, " ".repeat(width - len))
    }
}
