//! Per-game record assembly.

use chrono::NaiveDate;
use serde_json::Value;

use crate::dataset::models::{Setting, TeamGameRecord};
use crate::error::Result;
use crate::pipeline::json::deep_get;
use crate::pipeline::odds::{implied_probability, parse_scaled, FieldValue};

/// Build the home/away record pair for one game's forecast object.
///
/// The pair is one atomic unit: both rows are always produced, stamped with
/// the same sport and dates. Rows that end up without a value index are
/// filtered later, at league-table assembly.
///
/// NatStat's moneyline fields are cross-wired: the field named for the
/// visitor carries the home side's line and vice versa. That mapping is
/// load-bearing and must not be "fixed".
pub fn game_records(
    game: &Value,
    sport: &str,
    game_date: NaiveDate,
    today: NaiveDate,
) -> Result<[TeamGameRecord; 2]> {
    let league_name = game
        .get("League")
        .and_then(Value::as_str)
        .unwrap_or(sport)
        .to_string();
    let home_team = game.get("home").and_then(Value::as_str).map(str::to_string);
    let away_team = game
        .get("visitor")
        .and_then(Value::as_str)
        .map(str::to_string);

    let home_elo = parse_scaled(deep_get(game, &["forecast", "elo", "helowinexp"])?);
    let away_elo = parse_scaled(deep_get(game, &["forecast", "elo", "velowinexp"])?);
    let home_ml = parse_scaled(deep_get(game, &["forecast", "moneyline", "vismoneyline"])?);
    let away_ml = parse_scaled(deep_get(game, &["forecast", "moneyline", "homemoneyline"])?);

    let home = team_record(
        sport, game_date, today, &league_name, Setting::Home, home_team, home_elo, home_ml,
    );
    let away = team_record(
        sport, game_date, today, &league_name, Setting::Away, away_team, away_elo, away_ml,
    );

    Ok([home, away])
}

#[allow(clippy::too_many_arguments)]
fn team_record(
    sport: &str,
    game_date: NaiveDate,
    today: NaiveDate,
    league_name: &str,
    setting: Setting,
    team_name: Option<String>,
    elo: FieldValue,
    ml: FieldValue,
) -> TeamGameRecord {
    // helowinexp/velowinexp arrive as hundredths of a percent, so the shared
    // /100 parse leaves a percentage; a second /100 lands on the probability
    // scale the value index compares against.
    let elo = elo.value().map(|pct| pct / 100.0);
    let ml = ml.value();
    let implied_odds = ml.map(implied_probability);
    let ml_value_idx = match (elo, implied_odds) {
        (Some(e), Some(p)) if p != 0.0 => Some(e / p),
        _ => None,
    };

    TeamGameRecord {
        sport_name: sport.to_string(),
        game_date,
        today_date: today,
        league_name: league_name.to_string(),
        setting,
        team_name,
        elo,
        ml,
        implied_odds,
        ml_value_idx,
    }
}
