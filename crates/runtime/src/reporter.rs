//! Report sink that mirrors battle narration into `tracing`.

use battle_core::{BattleEvent, Reporter};

/// Forwards every event to `inner` and logs it at `info` level.
#[derive(Debug, Default)]
pub struct TracingReporter<R> {
    inner: R,
    round: u32,
}

impl<R: Reporter> TracingReporter<R> {
    pub fn new(inner: R) -> Self {
        Self { inner, round: 0 }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl<R: Reporter> Reporter for TracingReporter<R> {
    fn report(&mut self, event: &BattleEvent) {
        match event {
            BattleEvent::RoundStarted { round } => {
                self.round = *round;
                tracing::info!(round, "round started");
            }
            BattleEvent::DamageTaken {
                actor,
                amount,
                remaining,
            } => {
                tracing::info!(round = self.round, %actor, amount, remaining, "damage taken");
            }
            BattleEvent::Died { actor } => {
                tracing::info!(round = self.round, %actor, "actor died");
            }
            BattleEvent::BattleWon | BattleEvent::BattleLost => {
                tracing::info!(round = self.round, outcome = %event, "battle finished");
            }
            other => {
                tracing::info!(round = self.round, narration = %other, "battle event");
            }
        }
        self.inner.report(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use battle_core::EventLog;

    #[test]
    fn forwards_in_order() {
        let mut reporter = TracingReporter::new(EventLog::new());
        reporter.report(&BattleEvent::RoundStarted { round: 2 });
        reporter.report(&BattleEvent::BattleWon);

        assert_eq!(reporter.round, 2);
        assert_eq!(
            reporter.into_inner().into_events(),
            vec![BattleEvent::RoundStarted { round: 2 }, BattleEvent::BattleWon]
        );
    }
}
