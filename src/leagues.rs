//! The fixed set of NatStat league codes polled each run.

use chrono::{Days, NaiveDate};

/// Every league queried by a run, in fetch order.
pub const LEAGUE_CODES: [&str; 25] = [
    "asiabb", "amerbb", "cbb", "eurobb", "gl", "kbo", "khl", "mhk", "mlb",
    "milb", "mbb", "mb2", "mb3", "nba", "mbia", "mbjc", "nhl", "npb", "wbb",
    "wb2", "wb3", "wbia", "wnba", "pfb", "cfb",
];

/// Leagues whose schedules sit far enough ahead of US time that the forecast
/// endpoint must be queried with tomorrow's date.
const LOOKAHEAD_LEAGUES: [&str; 3] = ["asiabb", "kbo", "npb"];

/// The date to embed in the forecast request for `sport` when running on
/// `today`.
pub fn query_date(sport: &str, today: NaiveDate) -> NaiveDate {
    if LOOKAHEAD_LEAGUES.contains(&sport) {
        today.checked_add_days(Days::new(1)).unwrap_or(today)
    } else {
        today
    }
}
