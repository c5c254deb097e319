use serde::{Deserialize, Serialize};

use crate::domain::NumberRange;

/// Numbers the all-numbers grid can lay out (ten rows by nine columns)
pub const GRID_RANGE: NumberRange = NumberRange::new(1, 90);

/// Compiled game variants
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    /// 1..=90 with three history entries
    #[default]
    Classic,
    /// 1..=100 with five history entries
    Extended,
    /// 0..=100 with five history entries
    Wide,
}

impl Variant {
    pub fn config(self) -> GameConfig {
        match self {
            Variant::Classic => GameConfig::CLASSIC,
            Variant::Extended => GameConfig::EXTENDED,
            Variant::Wide => GameConfig::WIDE,
        }
    }
}

/// Fixed parameters of one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Numbers that can be drawn
    pub draw_range: NumberRange,
    /// Numbers shown in the all-numbers grid; always inside `GRID_RANGE`
    pub display_range: NumberRange,
    /// History entries kept besides the current number
    pub history_len: usize,
}

impl GameConfig {
    pub const CLASSIC: GameConfig = GameConfig {
        draw_range: NumberRange::new(1, 90),
        display_range: NumberRange::new(1, 90),
        history_len: 3,
    };

    pub const EXTENDED: GameConfig = GameConfig {
        draw_range: NumberRange::new(1, 100),
        display_range: NumberRange::new(1, 90),
        history_len: 5,
    };

    pub const WIDE: GameConfig = GameConfig {
        draw_range: NumberRange::new(0, 100),
        display_range: NumberRange::new(1, 90),
        history_len: 5,
    };
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::CLASSIC
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variants_map_to_presets() {
        assert_eq!(Variant::Classic.config(), GameConfig::CLASSIC);
        assert_eq!(Variant::Extended.config(), GameConfig::EXTENDED);
        assert_eq!(Variant::Wide.config(), GameConfig::WIDE);
        assert_eq!(Variant::default().config(), GameConfig::default());
    }

    #[test]
    fn display_ranges_fit_the_grid() {
        for variant in [Variant::Classic, Variant::Extended, Variant::Wide] {
            let config = variant.config();
            assert_eq!(
                config.display_range.intersection(&GRID_RANGE),
                Some(config.display_range)
            );
        }
    }

    #[test]
    fn classic_matches_ninety_ball_bingo() {
        let config = GameConfig::CLASSIC;
        assert_eq!(config.draw_range.len(), 90);
        assert_eq!(config.history_len, 3);
    }
}
