//! Damage formula and integer conversion.

/// Compute damage for a single damage type.
///
/// # Formula
///
/// ```text
/// raw    = power * strength / resistance + damage_bonus - armor
/// result = max(0, raw) * damage_multiplier * received_damage_multiplier
/// ```
///
/// Negative raw damage clamps to zero before the multipliers apply.
///
/// # Panics
///
/// Panics when `resistance` is zero. Content data guarantees a positive
/// resistance; a zero here is a content defect, not a recoverable state.
#[allow(clippy::too_many_arguments)]
pub fn compute_damage(
    power: f64,
    strength: f64,
    resistance: f64,
    damage_bonus: f64,
    armor: f64,
    damage_multiplier: f64,
    received_damage_multiplier: f64,
) -> f64 {
    assert!(
        resistance != 0.0,
        "resistance must be non-zero (power={power}, strength={strength})"
    );

    let raw = power * strength / resistance + damage_bonus - armor;
    raw.max(0.0) * damage_multiplier * received_damage_multiplier
}

/// Round a damage amount to whole hit points, ties to even.
///
/// Negative and NaN inputs yield zero.
pub fn round_damage(amount: f64) -> u32 {
    let rounded = amount.round_ties_even();
    if rounded.is_nan() || rounded <= 0.0 {
        0
    } else {
        rounded.min(u32::MAX as f64) as u32
    }
}
