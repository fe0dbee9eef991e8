//! Waku message timestamps: signed nanoseconds since the Unix epoch.
use std::time::{Duration, SystemTime, UNIX_EPOCH};

/// Convert a [`SystemTime`] to a Waku timestamp.
///
/// Instants before the epoch map to negative values; values beyond the `i64` range saturate.
pub fn to_timestamp(time: SystemTime) -> i64 {
    match time.duration_since(UNIX_EPOCH) {
        Ok(elapsed) => i64::try_from(elapsed.as_nanos()).unwrap_or(i64::MAX),
        Err(err) => i64::try_from(err.duration().as_nanos())
            .map(|nanos| -nanos)
            .unwrap_or(i64::MIN),
    }
}

/// Convert a Waku timestamp back into a [`SystemTime`].
pub fn from_timestamp(timestamp: i64) -> SystemTime {
    let offset = Duration::from_nanos(timestamp.unsigned_abs());
    if timestamp >= 0 {
        UNIX_EPOCH + offset
    } else {
        UNIX_EPOCH - offset
    }
}

/// The current time as a Waku timestamp.
pub fn now() -> i64 {
    to_timestamp(SystemTime::now())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timestamp_conversion() {
        // Given
        let time = UNIX_EPOCH + Duration::from_secs(1_650_000_000) + Duration::from_nanos(42);

        // When
        let timestamp = to_timestamp(time);

        // Then
        assert_eq!(timestamp, 1_650_000_000_000_000_042);
        assert_eq!(from_timestamp(timestamp), time);
    }

    #[test]
    fn test_timestamp_before_epoch() {
        // Given
        let time = UNIX_EPOCH - Duration::from_secs(1);

        // Then
        assert_eq!(to_timestamp(time), -1_000_000_000);
        assert_eq!(from_timestamp(-1_000_000_000), time);
    }
}
