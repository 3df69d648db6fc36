//! Formatting utilities for display values.

/// Format file size for display (e.g., "1.2K", "3.4M").
pub fn format_size(bytes: u64) -> String {
    if bytes >= 1_000_000 {
        format!("{:.1}M", bytes as f64 / 1_000_000.0)
    } else if bytes >= 1_000 {
        format!("{:.1}K", bytes as f64 / 1_000.0)
    } else {
        format!("{}B", bytes)
    }
}

/// Date part of an ISO 8601 timestamp ("2017-05-01T10:00:00Z" -> "2017-05-01").
pub fn format_commit_date(timestamp: &str) -> &str {
    timestamp.split('T').next().unwrap_or(timestamp)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(500), "500B");
        assert_eq!(format_size(1500), "1.5K");
        assert_eq!(format_size(1_500_000), "1.5M");
    }

    #[test]
    fn test_format_commit_date() {
        assert_eq!(format_commit_date("2017-05-01T10:00:00.000Z"), "2017-05-01");
        assert_eq!(format_commit_date(""), "");
    }
}
