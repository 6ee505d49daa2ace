//! The choice boundary.
//!
//! Every point where a battle waits on an outside decision (player menu,
//! target pick, spell pick, grid pick) goes through [`DecisionSource`]. The
//! battle never offers an empty option list.

use std::collections::VecDeque;

/// Which question is being asked. Lets scripted sources and UIs tell prompts
/// apart without parsing labels.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[strum(serialize_all = "snake_case")]
pub enum ChoiceKind {
    Action,
    AttackTarget,
    Item,
    ItemTarget,
    Ability,
    Spell,
    InteractTarget,
    GridCell,
}

/// Why a decision source could not answer.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DecisionError {
    /// Input stream ended.
    #[error("decision source closed")]
    Closed,

    /// A scripted source ran out of answers.
    #[error("no scripted answer left for {0}")]
    Exhausted(ChoiceKind),

    #[error("decision source I/O failed: {0}")]
    Io(String),
}

/// Picks one of N labelled options.
///
/// Implementations return an index into `options`. Re-prompting on bad
/// input is the implementation's job; an out-of-range index that escapes
/// is treated by the battle as an invariant violation.
pub trait DecisionSource {
    fn choose(&mut self, kind: ChoiceKind, options: &[String]) -> Result<usize, DecisionError>;
}

impl<D: DecisionSource + ?Sized> DecisionSource for &mut D {
    fn choose(&mut self, kind: ChoiceKind, options: &[String]) -> Result<usize, DecisionError> {
        (**self).choose(kind, options)
    }
}

impl<D: DecisionSource + ?Sized> DecisionSource for Box<D> {
    fn choose(&mut self, kind: ChoiceKind, options: &[String]) -> Result<usize, DecisionError> {
        (**self).choose(kind, options)
    }
}

/// Always picks the first option.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstOption;

impl DecisionSource for FirstOption {
    fn choose(&mut self, _kind: ChoiceKind, _options: &[String]) -> Result<usize, DecisionError> {
        Ok(0)
    }
}

/// Answers by label: the first queued label present in `options` wins.
///
/// Useful where indices shift with battle state (an action menu that drops
/// unaffordable entries). Once the queue is empty it falls back to
/// `fallback`, or fails with [`DecisionError::Exhausted`].
#[derive(Clone, Debug, Default)]
pub struct ScriptedChoices {
    answers: VecDeque<String>,
    fallback: Option<String>,
}

impl ScriptedChoices {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            fallback: None,
        }
    }

    /// Label answered once the script runs out (e.g. `"attack"`).
    #[must_use]
    pub fn with_fallback(mut self, label: impl Into<String>) -> Self {
        self.fallback = Some(label.into());
        self
    }

    pub fn push(&mut self, label: impl Into<String>) {
        self.answers.push_back(label.into());
    }

    pub fn remaining(&self) -> usize {
        self.answers.len()
    }

    fn position(options: &[String], label: &str) -> Option<usize> {
        options
            .iter()
            .position(|option| option == label)
            .or_else(|| options.iter().position(|option| option.starts_with(label)))
    }
}

impl DecisionSource for ScriptedChoices {
    fn choose(&mut self, kind: ChoiceKind, options: &[String]) -> Result<usize, DecisionError> {
        if let Some(label) = self.answers.pop_front() {
            return Self::position(options, &label).ok_or(DecisionError::Exhausted(kind));
        }
        match &self.fallback {
            Some(label) => Self::position(options, label)
                .or(if kind == ChoiceKind::Action { None } else { Some(0) })
                .ok_or(DecisionError::Exhausted(kind)),
            None => Err(DecisionError::Exhausted(kind)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn labels(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn scripted_matches_by_label_and_prefix() {
        let mut script = ScriptedChoices::new(["look", "Potion"]);
        let actions = labels(&["attack (3 AP)", "item (1 AP)", "look (0 AP)"]);
        assert_eq!(script.choose(ChoiceKind::Action, &actions), Ok(2));

        let items = labels(&["Sword", "Potion"]);
        assert_eq!(script.choose(ChoiceKind::Item, &items), Ok(1));
        assert_eq!(
            script.choose(ChoiceKind::Item, &items),
            Err(DecisionError::Exhausted(ChoiceKind::Item))
        );
    }

    #[test]
    fn fallback_picks_label_for_actions_and_first_for_targets() {
        let mut script = ScriptedChoices::default().with_fallback("attack");
        let actions = labels(&["item (1 AP)", "attack (3 AP)"]);
        assert_eq!(script.choose(ChoiceKind::Action, &actions), Ok(1));

        let targets = labels(&["lil bug", "Papa Roach"]);
        assert_eq!(script.choose(ChoiceKind::AttackTarget, &targets), Ok(0));

        let without_attack = labels(&["end turn (0 AP)"]);
        assert!(script.choose(ChoiceKind::Action, &without_attack).is_err());
    }

    #[test]
    fn first_option_through_mut_ref() {
        let mut first = FirstOption;
        let source: &mut dyn DecisionSource = &mut first;
        assert_eq!(source.choose(ChoiceKind::Spell, &labels(&["a", "b"])), Ok(0));
    }
}
