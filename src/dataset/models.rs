use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Which side of the matchup a row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Setting {
    Home,
    Away,
}

/// One team's slice of a game forecast.
///
/// Field order doubles as the CSV column order of the history file. Records
/// are built in home/away pairs and never mutated after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TeamGameRecord {
    /// League code the forecast was queried under, e.g. "nba"
    pub sport_name: String,
    /// Date the games are played on (advanced one day for lookahead leagues)
    pub game_date: NaiveDate,
    /// Date the run was executed
    pub today_date: NaiveDate,
    /// League label from the response, defaulted to the sport code
    pub league_name: String,
    pub setting: Setting,
    pub team_name: Option<String>,
    /// ELO win-expectancy on the [0, 1] scale
    pub elo: Option<f64>,
    /// Moneyline / 100, sign preserved
    pub ml: Option<f64>,
    /// Win probability implied by `ml` (0.0–1.0)
    pub implied_odds: Option<f64>,
    /// `elo / implied_odds`; >1 means the model rates the team above the market
    pub ml_value_idx: Option<f64>,
}
