//! Console narration of battle events.
use std::io::Write;

use battle_core::{BattleEvent, Reporter};

/// Writes one line per event.
pub struct ConsoleReporter<W> {
    output: W,
}

impl<W: Write> ConsoleReporter<W> {
    pub fn new(output: W) -> Self {
        Self { output }
    }
}

impl<W: Write> Reporter for ConsoleReporter<W> {
    fn report(&mut self, event: &BattleEvent) {
        let result = match event {
            BattleEvent::RoundStarted { .. } => writeln!(self.output, "\n{event}"),
            _ => writeln!(self.output, "{event}"),
        };
        if let Err(err) = result {
            tracing::warn!(%err, "failed to write narration");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_line_per_event() {
        let mut out = Vec::new();
        let mut reporter = ConsoleReporter::new(&mut out);
        reporter.report(&BattleEvent::Died {
            actor: "lil bug".into(),
        });
        reporter.report(&BattleEvent::BattleWon);

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "lil bug died\nAll enemies dead. You win.\n"
        );
    }
}
