//! League batch assembly.

use chrono::NaiveDate;
use tracing::info;

use crate::dataset::models::TeamGameRecord;
use crate::error::{Result, ScreenerError};
use crate::natstat::{ForecastProvider, ForecastResponse};
use crate::pipeline::record::game_records;

/// Assemble one league's table from an already-fetched response.
///
/// A NO_DATA failure from upstream is a normal quiet day and yields an empty
/// table; any other upstream failure is surfaced. Rows that could not be
/// given a value index are dropped here, after the home/away pair has been
/// built whole.
pub fn build_league_table(
    resp: &ForecastResponse,
    sport: &str,
    game_date: NaiveDate,
    today: NaiveDate,
) -> Result<Vec<TeamGameRecord>> {
    if resp.is_failure() {
        return match &resp.error {
            Some(err) if err.message == "NO_DATA" => {
                info!("No {sport} games for {game_date}: {}", err.detail);
                Ok(Vec::new())
            }
            Some(err) => Err(ScreenerError::Api(format!(
                "{} query failed: {}",
                sport, err.message
            ))),
            None => Err(ScreenerError::Api(format!(
                "{sport} query failed with no error payload"
            ))),
        };
    }

    let forecasts = resp.forecasts.as_ref().ok_or_else(|| ScreenerError::Shape {
        path: "forecasts".to_string(),
        found: "null",
    })?;

    let mut table = Vec::with_capacity(forecasts.len() * 2);
    for game in forecasts.values() {
        let pair = game_records(game, sport, game_date, today)?;
        table.extend(pair);
    }
    // A row without a value index carries nothing worth screening.
    table.retain(|row| row.ml_value_idx.is_some());

    Ok(table)
}

/// Fetch a league's forecasts and assemble its table.
pub async fn fetch_league_table(
    provider: &dyn ForecastProvider,
    sport: &str,
    game_date: NaiveDate,
    today: NaiveDate,
) -> Result<Vec<TeamGameRecord>> {
    let resp = provider.fetch_forecasts(sport, game_date).await?;
    build_league_table(&resp, sport, game_date, today)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn response(body: Value) -> ForecastResponse {
        serde_json::from_value(body).unwrap()
    }

    fn dates() -> (NaiveDate, NaiveDate) {
        let d = NaiveDate::from_ymd_opt(2025, 6, 10).unwrap();
        (d, d)
    }

    fn full_game(home: &str, visitor: &str) -> Value {
        json!({
            "League": "NBA",
            "home": home,
            "visitor": visitor,
            "forecast": {
                "elo": {"helowinexp": 6000, "velowinexp": 4000},
                "moneyline": {"vismoneyline": -200, "homemoneyline": 180}
            }
        })
    }

    #[test]
    fn test_no_data_yields_empty_table() {
        let resp = response(json!({
            "success": "0",
            "error": {"message": "NO_DATA", "detail": "No games scheduled"}
        }));
        let (game_date, today) = dates();
        let table = build_league_table(&resp, "kbo", game_date, today).unwrap();
        assert!(table.is_empty());
    }

    #[test]
    fn test_other_upstream_error_is_surfaced() {
        let resp = response(json!({
            "success": "0",
            "error": {"message": "INVALID_KEY", "detail": "bad key"}
        }));
        let (game_date, today) = dates();
        let err = build_league_table(&resp, "nba", game_date, today).unwrap_err();
        assert!(matches!(err, ScreenerError::Api(_)));
    }

    #[test]
    fn test_successful_response_builds_both_rows() {
        let resp = response(json!({
            "success": "1",
            "forecasts": {"game-1": full_game("Celtics", "Heat")}
        }));
        let (game_date, today) = dates();
        let table = build_league_table(&resp, "nba", game_date, today).unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.iter().all(|r| r.sport_name == "nba"));
        assert!(table.iter().all(|r| r.game_date == game_date));
        assert!(table.iter().all(|r| r.ml_value_idx.is_some()));
    }

    #[test]
    fn test_rows_without_value_index_are_dropped() {
        // Second game has no ELO block, so neither of its rows gets an index.
        let resp = response(json!({
            "success": "1",
            "forecasts": {
                "game-1": full_game("Celtics", "Heat"),
                "game-2": {
                    "home": "Knicks",
                    "visitor": "Nets",
                    "forecast": {
                        "moneyline": {"vismoneyline": -110, "homemoneyline": -110}
                    }
                }
            }
        }));
        let (game_date, today) = dates();
        let table = build_league_table(&resp, "nba", game_date, today).unwrap();

        assert_eq!(table.len(), 2);
        assert!(table.iter().all(|r| r.team_name.as_deref() != Some("Knicks")));
    }

    #[test]
    fn test_missing_home_elo_drops_only_home_row() {
        let resp = response(json!({
            "success": "1",
            "forecasts": {
                "game-1": {
                    "home": "Celtics",
                    "visitor": "Heat",
                    "forecast": {
                        "elo": {"velowinexp": 4000},
                        "moneyline": {"vismoneyline": -200, "homemoneyline": 180}
                    }
                }
            }
        }));
        let (game_date, today) = dates();
        let table = build_league_table(&resp, "nba", game_date, today).unwrap();

        assert_eq!(table.len(), 1);
        assert_eq!(table[0].team_name.as_deref(), Some("Heat"));
    }

    #[test]
    fn test_success_without_forecasts_is_shape_error() {
        let resp = response(json!({"success": "1"}));
        let (game_date, today) = dates();
        let err = build_league_table(&resp, "nba", game_date, today).unwrap_err();
        assert!(matches!(err, ScreenerError::Shape { .. }));
    }
}
