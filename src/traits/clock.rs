//! Wall-clock abstraction so cache freshness can be tested without sleeping.

/// Source of the current time in milliseconds since the Unix epoch.
pub trait Clock: Send + Sync {
    fn now_millis(&self) -> i64;
}
