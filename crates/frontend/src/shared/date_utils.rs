/// Utilities for date and time formatting
///
/// Provides consistent timestamp formatting across the application
use chrono::{DateTime, Utc};

/// Format an upload timestamp to DD.MM.YYYY HH:MM:SS
pub fn format_timestamp(at: DateTime<Utc>) -> String {
    at.format("%d.%m.%Y %H:%M:%S").to_string()
}
