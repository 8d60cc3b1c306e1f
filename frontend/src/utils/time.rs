use chrono::{DateTime, Local, NaiveDate, Utc};
use chrono_tz::Tz;

use crate::config;

pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

pub fn today_in_time_zone(now: DateTime<Utc>, tz: Option<Tz>) -> NaiveDate {
    match tz {
        Some(tz) => now.with_timezone(&tz).date_naive(),
        None => now.with_timezone(&Local).date_naive(),
    }
}

/// Captured once per screen and passed down; nothing below the page reads the
/// clock on its own.
pub fn today_in_app_tz() -> NaiveDate {
    today_in_time_zone(Utc::now(), config::configured_time_zone())
}

pub fn format_iso_date(date: NaiveDate) -> String {
    date.format(ISO_DATE_FORMAT).to_string()
}

pub fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), ISO_DATE_FORMAT).ok()
}

/// "Feb 10, 2026" style label; falls back to the raw input when it is not an
/// ISO date.
pub fn format_display_date(raw: &str) -> String {
    match parse_iso_date(raw) {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}

/// Suspends for `ms` milliseconds on the browser's timer queue.
#[cfg(target_arch = "wasm32")]
pub async fn sleep_ms(ms: u32) {
    gloo_timers::future::TimeoutFuture::new(ms).await;
}

#[cfg(all(test, not(target_arch = "wasm32")))]
pub async fn sleep_ms(ms: u32) {
    tokio::time::sleep(std::time::Duration::from_millis(u64::from(ms))).await;
}

// Host builds outside tests have no timer source; the delay collapses.
#[cfg(all(not(test), not(target_arch = "wasm32")))]
pub async fn sleep_ms(_ms: u32) {}
