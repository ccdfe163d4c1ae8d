//! Wall-clock access in epoch milliseconds.
//!
//! Browser builds read `Date.now()`; native builds (SSR, tests) use the
//! system clock so expiry math agrees across both.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current time as epoch milliseconds.
#[allow(clippy::cast_possible_truncation)]
pub fn now_millis() -> i64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() as i64
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0, |d| i64::try_from(d.as_millis()).unwrap_or(i64::MAX))
    }
}
