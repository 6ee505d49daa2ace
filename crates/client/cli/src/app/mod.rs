//! Glue code tying the runtime to the terminal.
use std::io::{self, Write};

use anyhow::Result;

use battle_core::{BattleError, BattleStatus, DecisionError, GameError};
use battle_runtime::{RunOutcome, Runtime, RuntimeConfig, RuntimeError};

use crate::input::ConsoleDecisions;
use crate::presentation::ConsoleReporter;

pub struct CliApp {
    runtime: Runtime,
}

impl CliApp {
    pub fn new(config: RuntimeConfig) -> Result<Self> {
        let runtime = Runtime::builder().config(config).build()?;
        Ok(Self { runtime })
    }

    pub fn execute(self) -> Result<()> {
        let stdin = io::stdin();
        let mut decisions = ConsoleDecisions::new(stdin.lock(), io::stdout());
        let mut reporter = ConsoleReporter::new(io::stdout());

        let outcome = match self.runtime.run(&mut decisions, &mut reporter) {
            Ok(outcome) => outcome,
            Err(RuntimeError::Battle(BattleError::Decision(DecisionError::Closed))) => {
                tracing::info!("input closed, leaving");
                return Ok(());
            }
            Err(err) => {
                tracing::error!(
                    code = err.error_code(),
                    severity = err.severity().as_str(),
                    %err,
                    "run failed"
                );
                return Err(err.into());
            }
        };

        let mut stdout = io::stdout();
        match outcome {
            RunOutcome::Demo(BattleStatus::PlayersWon) => writeln!(stdout, "Victory!")?,
            RunOutcome::Demo(_) => writeln!(stdout, "Defeat.")?,
            RunOutcome::Crawl(crawl) => writeln!(stdout, "Game over. Your score: {}", crawl.score)?,
        }
        Ok(())
    }
}
