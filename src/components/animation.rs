use bevy_ecs::prelude::Component;
use serde::{Deserialize, Serialize};

// Animation Controller Component

// Generic, data-driven conditions over Signals
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CmpOp {
    Lt,
    Le,
    Gt,
    Ge,
    Eq,
    Ne,
}

// Condition
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Condition {
    ScalarCmp {
        key: String,
        op: CmpOp,
        value: f32,
    },
    ScalarRange {
        key: String,
        min: f32,
        max: f32,
        inclusive: bool,
    },
    HasFlag {
        key: String,
    },
    LacksFlag {
        key: String,
    },
    /// Like `HasFlag`, but the flag is consumed when the rule is selected.
    Trigger {
        key: String,
    },
    All(Vec<Condition>),
    Any(Vec<Condition>),
    Not(Box<Condition>),
}

impl Condition {
    pub fn scalar(key: impl Into<String>, op: CmpOp, value: f32) -> Self {
        Condition::ScalarCmp {
            key: key.into(),
            op,
            value,
        }
    }

    pub fn trigger(key: impl Into<String>) -> Self {
        Condition::Trigger { key: key.into() }
    }

    /// Keys of every trigger referenced by this condition.
    pub fn trigger_keys<'a>(&'a self, out: &mut Vec<&'a str>) {
        match self {
            Condition::Trigger { key } => out.push(key.as_str()),
            Condition::All(conditions) | Condition::Any(conditions) => {
                for cond in conditions {
                    cond.trigger_keys(out);
                }
            }
            Condition::Not(cond) => cond.trigger_keys(out),
            _ => {}
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnimRule {
    pub when: Condition,
    pub set_key: String,
}

/// Picks the animation an entity should show from its [`Signals`](super::signals::Signals).
///
/// Rules are checked in order and the first match wins; with no match the
/// fallback key is used. Frame playback belongs to the renderer, which reads
/// `current_key`.
#[derive(Debug, Clone, Component, Serialize, Deserialize)]
pub struct AnimationController {
    pub current_key: String,
    pub rules: Vec<AnimRule>,
    pub fallback_key: String,
}

impl AnimationController {
    pub fn new(fallback_key: impl Into<String>) -> Self {
        let fallback_key = fallback_key.into();
        Self {
            current_key: fallback_key.clone(),
            rules: Vec::new(),
            fallback_key,
        }
    }
    pub fn with_rule(mut self, when: Condition, set_key: impl Into<String>) -> Self {
        self.rules.push(AnimRule {
            when,
            set_key: set_key.into(),
        });
        self
    }

    /// Walk while moving, otherwise idle facing the last cardinal direction.
    pub fn player() -> Self {
        Self::new("idle_down")
            .with_rule(Condition::scalar("speed", CmpOp::Gt, 0.0), "walk")
            .with_rule(Condition::scalar("last_move_y", CmpOp::Gt, 0.5), "idle_up")
            .with_rule(Condition::scalar("last_move_x", CmpOp::Lt, -0.5), "idle_left")
            .with_rule(Condition::scalar("last_move_x", CmpOp::Gt, 0.5), "idle_right")
    }

    /// Burning until picked up; stays picked up while the light is out.
    pub fn torch() -> Self {
        Self::new("burning").with_rule(
            Condition::Any(vec![
                Condition::trigger("pick_up_torch"),
                Condition::scalar("light", CmpOp::Le, 0.0),
            ]),
            "pick_up",
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trigger_keys_nested() {
        let cond = Condition::All(vec![
            Condition::trigger("a"),
            Condition::Not(Box::new(Condition::Any(vec![Condition::trigger("b")]))),
            Condition::HasFlag {
                key: "c".to_string(),
            },
        ]);
        let mut keys = Vec::new();
        cond.trigger_keys(&mut keys);
        assert_eq!(keys, vec!["a", "b"]);
    }

    #[test]
    fn test_rules_deserialize_from_json() {
        let rule: AnimRule = serde_json::from_str(
            r#"{ "when": { "ScalarCmp": { "key": "speed", "op": "Gt", "value": 0.0 } }, "set_key": "walk" }"#,
        )
        .unwrap();
        assert_eq!(rule.when, Condition::scalar("speed", CmpOp::Gt, 0.0));
        assert_eq!(rule.set_key, "walk");
    }
}
