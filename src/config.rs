//! Game configuration loaded from TOML.
//!
//! Every field has a default, so an empty file (or no file) yields a
//! player-vs-computer game where the computer plays black at depth 3.
//!
//! ```toml
//! mode = "pve"
//! computer_color = "black"
//! search_depth = 3
//!
//! [search]
//! max_candidates_per_node = 30
//! max_candidates_at_root = 40
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::ChessResult;
use crate::game_state::chess_types::Color;
use crate::game_state::game_session::GameMode;
use crate::search::minimax::SearchConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    Pvp,
    Pve,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub mode: ModeSetting,
    pub computer_color: Color,
    pub search_depth: u32,
    pub search: SearchConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            mode: ModeSetting::Pve,
            computer_color: Color::Black,
            search_depth: 3,
            search: SearchConfig::default(),
        }
    }
}

impl GameConfig {
    /// Parse and validate; zero branching caps are rejected.
    pub fn from_toml_str(text: &str) -> ChessResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.search.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> ChessResult<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }

    pub fn game_mode(&self) -> GameMode {
        match self.mode {
            ModeSetting::Pvp => GameMode::PlayerVsPlayer,
            ModeSetting::Pve => GameMode::PlayerVsComputer {
                computer_color: self.computer_color,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ChessErrors;

    #[test]
    fn empty_document_gives_defaults() {
        let config = GameConfig::from_toml_str("").unwrap();
        assert_eq!(config, GameConfig::default());
        assert_eq!(
            config.game_mode(),
            GameMode::PlayerVsComputer {
                computer_color: Color::Black
            }
        );
        assert_eq!(config.search.max_candidates_per_node, 30);
        assert_eq!(config.search.max_candidates_at_root, 40);
    }

    #[test]
    fn partial_overrides_keep_other_defaults() {
        let config = GameConfig::from_toml_str(
            r#"
            mode = "pvp"
            search_depth = 2

            [search]
            max_candidates_at_root = 12
            "#,
        )
        .unwrap();
        assert_eq!(config.game_mode(), GameMode::PlayerVsPlayer);
        assert_eq!(config.search_depth, 2);
        assert_eq!(config.search.max_candidates_at_root, 12);
        assert_eq!(config.search.max_candidates_per_node, 30);
    }

    #[test]
    fn invalid_values_are_config_errors() {
        let err = GameConfig::from_toml_str("computer_color = \"green\"").unwrap_err();
        assert!(matches!(err, ChessErrors::Config(_)));
    }

    #[test]
    fn zero_search_caps_are_rejected() {
        for text in [
            "[search]\nmax_candidates_at_root = 0",
            "[search]\nmax_candidates_per_node = 0",
        ] {
            let err = GameConfig::from_toml_str(text).unwrap_err();
            assert!(matches!(err, ChessErrors::InvalidSearchConfig(_)), "{text}");
        }
        assert!(GameConfig::from_toml_str("[search]\nmax_candidates_at_root = 1").is_ok());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let err = GameConfig::load("/definitely/not/here/plum_minimax.toml").unwrap_err();
        assert!(matches!(err, ChessErrors::Io(_)));
    }
}
