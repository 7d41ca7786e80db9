//! Market session calendar used by the cache TTL policy.
//!
//! A cached entry lives 30 minutes while the market trades and 60 minutes
//! otherwise. Freshness is judged at read time, so an entry written during
//! the session can outlive its original window once the market closes.

use chrono::{DateTime, Datelike, Duration, Timelike, Utc, Weekday};

use crate::core::Market;

const LIVE_TTL_MINUTES: i64 = 30;
const OFF_TTL_MINUTES: i64 = 60;

/// Session open/close as (hour, minute) in the market's local timezone.
const fn session_hours(market: Market) -> ((u32, u32), (u32, u32)) {
    match market {
        Market::Kr => ((9, 0), (15, 30)),
        Market::Us => ((9, 30), (16, 0)),
    }
}

/// Whether the market is inside its live trading session at `now`.
/// Weekends are always off-session; holidays are not modeled.
#[must_use]
pub fn is_live_session(market: Market, now: DateTime<Utc>) -> bool {
    let local = now.with_timezone(&market.timezone());
    if matches!(local.weekday(), Weekday::Sat | Weekday::Sun) {
        return false;
    }
    let (open, close) = session_hours(market);
    let hm = (local.hour(), local.minute());
    hm >= open && hm <= close
}

/// The freshness window in effect at `now` for the given market.
#[must_use]
pub fn ttl(market: Market, now: DateTime<Utc>) -> Duration {
    Duration::minutes(ttl_minutes(market, now))
}

pub(crate) fn ttl_minutes(market: Market, now: DateTime<Utc>) -> i64 {
    if is_live_session(market, now) {
        LIVE_TTL_MINUTES
    } else {
        OFF_TTL_MINUTES
    }
}

/// `now` rendered in the market's local time, e.g. `2026-08-28 15:04:05`.
pub(crate) fn local_timestamp(market: Market, now: DateTime<Utc>) -> String {
    now.with_timezone(&market.timezone())
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn kst(y: i32, mo: u32, d: u32, h: u32, mi: u32) -> DateTime<Utc> {
        chrono_tz::Asia::Seoul
            .with_ymd_and_hms(y, mo, d, h, mi, 0)
            .unwrap()
            .with_timezone(&Utc)
    }

    #[test]
    fn kr_weekday_mid_session_is_live() {
        // Wednesday 2026-08-26 10:00 KST
        assert!(is_live_session(Market::Kr, kst(2026, 8, 26, 10, 0)));
    }

    #[test]
    fn kr_session_boundaries() {
        assert!(is_live_session(Market::Kr, kst(2026, 8, 26, 9, 0)));
        assert!(is_live_session(Market::Kr, kst(2026, 8, 26, 15, 30)));
        assert!(!is_live_session(Market::Kr, kst(2026, 8, 26, 8, 59)));
        assert!(!is_live_session(Market::Kr, kst(2026, 8, 26, 15, 31)));
    }

    #[test]
    fn weekend_is_off_session() {
        // Saturday 2026-08-29 11:00 KST
        assert!(!is_live_session(Market::Kr, kst(2026, 8, 29, 11, 0)));
    }

    #[test]
    fn ttl_doubles_off_session() {
        let live = ttl(Market::Kr, kst(2026, 8, 26, 10, 0));
        let off = ttl(Market::Kr, kst(2026, 8, 26, 20, 0));
        assert_eq!(off, live * 2);
    }

    #[test]
    fn us_session_uses_new_york_clock() {
        // Wednesday 2026-08-26 10:00 ET == 14:00 UTC (EDT)
        let now = chrono_tz::America::New_York
            .with_ymd_and_hms(2026, 8, 26, 10, 0, 0)
            .unwrap()
            .with_timezone(&Utc);
        assert!(is_live_session(Market::Us, now));
        assert!(!is_live_session(Market::Kr, now)); // 23:00 KST
    }
}
