//! Turn order: descending speed, ties broken by ascending name.

use std::cmp::{Ordering, Reverse};

use super::ActorId;
use crate::actor::Actor;

fn key(actor: &Actor) -> (Reverse<i32>, &str) {
    (Reverse(actor.speed), actor.name.as_str())
}

/// Orders two actors for initiative.
pub fn compare(a: &Actor, b: &Actor) -> Ordering {
    key(a).cmp(&key(b))
}

/// Sorts `ids` in place by initiative. Ids missing from `roster` sort last.
pub fn sort(roster: &[Actor], ids: &mut [ActorId]) {
    ids.sort_by(|a, b| match (roster.get(a.index()), roster.get(b.index())) {
        (Some(a), Some(b)) => compare(a, b),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.cmp(b),
    });
}
