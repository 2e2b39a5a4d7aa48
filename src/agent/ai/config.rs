//! Search configuration
//!
//! [`SearchConfig`] carries every tunable the search reads. [`Difficulty`]
//! offers named presets on top of it.

/// Iterative deepening ceiling
pub const DEFAULT_MAX_DEPTH: i32 = 100;

/// Never spend more than `remaining / DEFAULT_TIME_DIVISOR` on one move
pub const DEFAULT_TIME_DIVISOR: u64 = 30;

/// Hard ply cap for the capture-only extension
pub const DEFAULT_QUIESCENCE_LIMIT: u8 = 2;

/// Transposition table buckets
pub const DEFAULT_TT_CAPACITY: usize = 0x7F_FFFF;

/// Which static evaluator scores leaf positions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EvalStyle {
    /// Midgame and endgame piece-square tables blended by game phase
    #[default]
    Tapered,
    /// One fixed mask set chosen by a piece-count threshold
    Discrete,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    pub max_depth: i32,
    pub time_divisor: u64,
    pub quiescence_limit: u8,
    pub tt_capacity: usize,
    pub eval_style: EvalStyle,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            time_divisor: DEFAULT_TIME_DIVISOR,
            quiescence_limit: DEFAULT_QUIESCENCE_LIMIT,
            tt_capacity: DEFAULT_TT_CAPACITY,
            eval_style: EvalStyle::Tapered,
        }
    }
}

impl SearchConfig {
    pub fn with_max_depth(mut self, max_depth: i32) -> Self {
        self.max_depth = max_depth.max(1);
        self
    }

    pub fn with_time_divisor(mut self, time_divisor: u64) -> Self {
        self.time_divisor = time_divisor.max(1);
        self
    }

    pub fn with_quiescence_limit(mut self, quiescence_limit: u8) -> Self {
        self.quiescence_limit = quiescence_limit;
        self
    }

    pub fn with_tt_capacity(mut self, tt_capacity: usize) -> Self {
        self.tt_capacity = tt_capacity.max(1);
        self
    }

    pub fn with_eval_style(mut self, eval_style: EvalStyle) -> Self {
        self.eval_style = eval_style;
        self
    }

    /// Time allowed for one move given the clock's remaining time
    pub fn move_budget_ms(&self, remaining_ms: u64) -> u64 {
        remaining_ms / self.time_divisor.max(1)
    }
}

/// AI difficulty levels that map to a search depth ceiling
///
/// All levels still respect the per-move time cap; the depth ceiling only
/// makes the weaker levels answer sooner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    /// Depth 2: basic tactics only
    Easy,
    /// Depth 4: sees two full moves ahead
    Medium,
    /// Depth 6
    Hard,
    /// No depth ceiling beyond the default; limited by time alone
    Expert,
}

impl Difficulty {
    /// Maximum search depth in plies
    pub fn max_depth(&self) -> i32 {
        match self {
            Difficulty::Easy => 2,
            Difficulty::Medium => 4,
            Difficulty::Hard => 6,
            Difficulty::Expert => DEFAULT_MAX_DEPTH,
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }

    pub fn config(&self) -> SearchConfig {
        SearchConfig::default().with_max_depth(self.max_depth())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget_is_one_thirtieth() {
        let config = SearchConfig::default();
        assert_eq!(config.move_budget_ms(300), 10);
        assert_eq!(config.move_budget_ms(29), 0);
    }

    #[test]
    fn test_builders_clamp_degenerate_values() {
        let config = SearchConfig::default()
            .with_max_depth(0)
            .with_time_divisor(0)
            .with_tt_capacity(0);

        assert_eq!(config.max_depth, 1);
        assert_eq!(config.time_divisor, 1);
        assert_eq!(config.tt_capacity, 1);
    }

    #[test]
    fn test_difficulty_depths_increase() {
        let depths: Vec<i32> = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard, Difficulty::Expert]
            .iter()
            .map(|d| d.config().max_depth)
            .collect();

        assert!(depths.windows(2).all(|w| w[0] < w[1]));
    }
}
