use serde::{Deserialize, Serialize};

/// Rule-set switches for the points where checkers variants disagree.
///
/// The defaults are standard checkers with mandatory capture, kings that keep
/// jumping after mid-chain promotion, stalemate counted as a loss, and no
/// draw rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rules {
    /// A side that can capture must capture.
    pub mandatory_capture: bool,
    /// Crowning during a capture chain ends the turn.
    pub crowning_ends_chain: bool,
    /// A side to move with pieces but no legal moves loses.
    pub stalemate_is_loss: bool,
    /// Draw after this many consecutive turns without a capture or crowning.
    pub quiet_turn_limit: Option<u32>,
}

impl Default for Rules {
    fn default() -> Self {
        Rules {
            mandatory_capture: true,
            crowning_ends_chain: false,
            stalemate_is_loss: true,
            quiet_turn_limit: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let rules: Rules = toml::from_str("crowning_ends_chain = true").unwrap();
        assert!(rules.crowning_ends_chain);
        assert!(rules.mandatory_capture);
        assert!(rules.stalemate_is_loss);
        assert_eq!(rules.quiet_turn_limit, None);
    }
}
