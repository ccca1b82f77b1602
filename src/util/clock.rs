//! Local calendar date for "today" counters.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Format a calendar date as `YYYY-MM-DD`.
pub fn format_ymd(year: u32, month: u32, day: u32) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Today's date in the browser's local time zone.
///
/// Off-browser there is no meaningful local date, so this returns an empty
/// string and nothing counts as today.
pub fn today() -> String {
    #[cfg(feature = "hydrate")]
    {
        let now = js_sys::Date::new_0();
        format_ymd(now.get_full_year(), now.get_month() + 1, now.get_date())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        String::new()
    }
}
