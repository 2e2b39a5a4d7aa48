//! Turn clock and cooperative cancellation
//!
//! The host hands the bot a [`Clock`]. The driver turns it into a per-move
//! budget and threads a [`SearchContext`] through every recursive call; the
//! first node that finds the budget spent sets the abort flag and every frame
//! above it unwinds without doing further work.

use super::config::{EvalStyle, SearchConfig};
use std::time::Instant;

/// Read-only view of the game clock for the side to move
pub trait Clock {
    /// Milliseconds spent on the current turn so far
    fn elapsed_ms_this_turn(&self) -> u64;

    /// Milliseconds left on the game clock at the start of this turn
    fn remaining_ms(&self) -> u64;
}

/// Wall-clock implementation started when the turn begins
#[derive(Debug, Clone, Copy)]
pub struct TurnTimer {
    started: Instant,
    remaining_ms: u64,
}

impl TurnTimer {
    pub fn start(remaining_ms: u64) -> Self {
        Self {
            started: Instant::now(),
            remaining_ms,
        }
    }

    /// A clock that never runs out; depth limits alone end the search
    pub fn unlimited() -> Self {
        Self::start(u64::MAX)
    }
}

impl Clock for TurnTimer {
    fn elapsed_ms_this_turn(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }
}

/// Per-search state shared by every node: cancellation, counters and the
/// leaf evaluation settings
pub struct SearchContext<'a> {
    clock: &'a dyn Clock,
    budget_ms: u64,
    aborted: bool,
    pub nodes: u64,
    pub eval_style: EvalStyle,
    pub quiescence_limit: u8,
}

impl<'a> SearchContext<'a> {
    pub fn new(clock: &'a dyn Clock, config: &SearchConfig) -> Self {
        Self {
            clock,
            budget_ms: config.move_budget_ms(clock.remaining_ms()),
            aborted: false,
            nodes: 0,
            eval_style: config.eval_style,
            quiescence_limit: config.quiescence_limit,
        }
    }

    /// Poll the clock; once the budget is spent the flag stays set
    #[inline]
    pub fn should_stop(&mut self) -> bool {
        if !self.aborted && self.clock.elapsed_ms_this_turn() >= self.budget_ms {
            self.aborted = true;
        }
        self.aborted
    }

    /// Whether any node has already seen the budget run out
    #[inline]
    pub fn aborted(&self) -> bool {
        self.aborted
    }

    pub fn budget_ms(&self) -> u64 {
        self.budget_ms
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.clock.elapsed_ms_this_turn()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::ai::tests::FixedClock;

    #[test]
    fn test_budget_from_remaining_time() {
        let clock = FixedClock::new(0, 3000);
        let mut ctx = SearchContext::new(&clock, &SearchConfig::default());

        assert_eq!(ctx.budget_ms(), 100);
        assert!(!ctx.should_stop());
        assert!(!ctx.aborted());
    }

    #[test]
    fn test_context_takes_evaluation_settings_from_config() {
        let clock = FixedClock::new(0, 3000);
        let config = SearchConfig::default()
            .with_quiescence_limit(0)
            .with_eval_style(EvalStyle::Discrete);
        let ctx = SearchContext::new(&clock, &config);

        assert_eq!(ctx.quiescence_limit, 0);
        assert_eq!(ctx.eval_style, EvalStyle::Discrete);
    }

    #[test]
    fn test_abort_flag_latches() {
        let clock = FixedClock::new(50, 300);
        let mut ctx = SearchContext::new(&clock, &SearchConfig::default());

        assert!(ctx.should_stop());
        assert!(ctx.aborted());
        assert!(ctx.should_stop());
    }

    #[test]
    fn test_unlimited_timer_never_stops() {
        let timer = TurnTimer::unlimited();
        let mut ctx = SearchContext::new(&timer, &SearchConfig::default());
        assert!(!ctx.should_stop());
    }
}
