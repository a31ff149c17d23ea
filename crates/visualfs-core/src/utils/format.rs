//! Formatting utilities for ages, names, and sizes.

use crate::config::{MS_PER_DAY, TODAY_LABEL};
use crate::models::Millis;

/// Relative-age label for a modification time (e.g., "Today", "3 days ago").
///
/// Whole days are floored, so a timestamp slightly in the future counts as
/// `-1 days ago`. Out-of-range timestamps saturate instead of overflowing.
pub fn format_age(mtime: Millis, now: Millis) -> String {
    let days = now.saturating_sub(mtime).div_euclid(MS_PER_DAY);
    if days == 0 {
        TODAY_LABEL.to_string()
    } else {
        format!("{} days ago", days)
    }
}

/// File name with its final extension stripped (e.g., `notes.md` -> `notes`).
///
/// Dotfiles keep their full name.
pub fn display_name(name: &str) -> &str {
    match name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => name,
    }
}

/// Format file size for display (e.g., "1.2K", "3.4M").
pub fn format_size(size: Option<u64>) -> String {
    match size {
        None => "-".to_string(),
        Some(bytes) if bytes >= 1_000_000 => format!("{:.1}M", bytes as f64 / 1_000_000.0),
        Some(bytes) if bytes >= 1_000 => format!("{:.1}K", bytes as f64 / 1_000.0),
        Some(bytes) => format!("{}B", bytes),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NOW: Millis = 1_704_067_200_000;

    #[test]
    fn test_format_age() {
        assert_eq!(format_age(NOW, NOW), "Today");
        assert_eq!(format_age(NOW - MS_PER_DAY + 1, NOW), "Today");
        assert_eq!(format_age(NOW - MS_PER_DAY, NOW), "1 days ago");
        assert_eq!(format_age(NOW - 5 * MS_PER_DAY - 10, NOW), "5 days ago");
    }

    #[test]
    fn test_format_age_future_timestamp() {
        assert_eq!(format_age(NOW + 1, NOW), "-1 days ago");
    }

    #[test]
    fn test_format_age_extreme_timestamps() {
        let oldest = format!("{} days ago", i64::MAX / MS_PER_DAY);
        assert_eq!(format_age(i64::MIN, NOW), oldest);
        assert_eq!(format_age(i64::MIN, i64::MAX), oldest);
        assert_eq!(
            format_age(i64::MAX, i64::MIN),
            format!("{} days ago", i64::MIN.div_euclid(MS_PER_DAY))
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(display_name("notes.md"), "notes");
        assert_eq!(display_name("v1.2.md"), "v1.2");
        assert_eq!(display_name("README"), "README");
        assert_eq!(display_name(".hidden"), ".hidden");
    }

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(None), "-");
        assert_eq!(format_size(Some(500)), "500B");
        assert_eq!(format_size(Some(1500)), "1.5K");
        assert_eq!(format_size(Some(1_500_000)), "1.5M");
    }
}
