//! Animation selection.
//!
//! [`animation_controller`] picks which animation each entity should show
//! based on rule conditions evaluated against its [`Signals`]. Movement writes
//! the player's direction scalars (see [`crate::systems::movement`]); the
//! torch raises a pick-up trigger when it is interacted with.
//!
//! Trigger conditions behave like one-shot flags: when the selected rule
//! references a trigger, the flag is cleared so the animation fires once.
//!
//! # Related
//!
//! - [`crate::components::animation::AnimationController`] – rule-based animation selection

use bevy_ecs::prelude::*;

use crate::components::animation::{AnimationController, CmpOp, Condition};
use crate::components::signals::Signals;

/// Evaluate a controller condition against an entity's current signals.
///
/// Recursively evaluates conditions including `All`, `Any`, and `Not`
/// combinators. Returns true if the condition is satisfied.
fn evaluate_condition(signals: &Signals, condition: &Condition) -> bool {
    match condition {
        Condition::ScalarCmp { key, op, value } => {
            if let Some(signal_value) = signals.get_scalar(key) {
                match op {
                    CmpOp::Lt => signal_value < *value,
                    CmpOp::Le => signal_value <= *value,
                    CmpOp::Gt => signal_value > *value,
                    CmpOp::Ge => signal_value >= *value,
                    CmpOp::Eq => (signal_value - *value).abs() < f32::EPSILON,
                    CmpOp::Ne => (signal_value - *value).abs() >= f32::EPSILON,
                }
            } else {
                false
            }
        }
        Condition::ScalarRange {
            key,
            min,
            max,
            inclusive,
        } => match signals.get_scalar(key) {
            Some(v) if *inclusive => v >= *min && v <= *max,
            Some(v) => v > *min && v < *max,
            None => false,
        },
        Condition::HasFlag { key } | Condition::Trigger { key } => signals.has_flag(key),
        Condition::LacksFlag { key } => !signals.has_flag(key),
        Condition::All(conditions) => conditions
            .iter()
            .all(|cond| evaluate_condition(signals, cond)),
        Condition::Any(conditions) => conditions
            .iter()
            .any(|cond| evaluate_condition(signals, cond)),
        Condition::Not(cond) => !evaluate_condition(signals, cond),
    }
}

/// Select the active animation key according to controller rules.
///
/// The first matching rule wins. If no rules match, the controller's fallback
/// key is used. Triggers referenced by the winning rule are consumed.
pub fn animation_controller(mut query: Query<(&mut AnimationController, &mut Signals)>) {
    for (mut controller, mut signals) in query.iter_mut() {
        let selected = controller
            .rules
            .iter()
            .position(|rule| evaluate_condition(&signals, &rule.when));

        let target_key = match selected {
            Some(index) => {
                let rule = &controller.rules[index];
                let mut triggers = Vec::new();
                rule.when.trigger_keys(&mut triggers);
                for key in triggers {
                    signals.take_flag(key);
                }
                rule.set_key.clone()
            }
            None => controller.fallback_key.clone(),
        };
        if controller.current_key != target_key {
            log::debug!("animation {} -> {}", controller.current_key, target_key);
            controller.current_key = target_key;
        }
    }
}
