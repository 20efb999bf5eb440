mod input;
mod player;
mod result;
mod strategy;

pub use self::input::{GameInput, GameInputUi};
pub use self::player::Player;
pub use self::result::GameResult;
pub use self::strategy::{
    total_probability, validate_mixed_strategy, zip_strategy, MixedStrategy, MixedStrategyEntry,
    PROBABILITY_TOLERANCE,
};
