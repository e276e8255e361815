use crate::models::common::Timestamp;
use chrono::{SecondsFormat, Utc};

/// Returns the current time as an RFC 3339 string, the format every
/// persisted document uses for `createdAt`/`updatedAt`.
pub fn now_iso() -> Timestamp {
    Utc::now().to_rfc3339_opts(SecondsFormat::Micros, true)
}

/// Current time as whole seconds since epoch, used in attachment keys.
pub fn now_epoch_secs() -> i64 {
    Utc::now().timestamp()
}
