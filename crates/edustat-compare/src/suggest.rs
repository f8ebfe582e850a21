//! Heuristic suggestion rules.
//!
//! A fixed, ordered list of independent rules over delta sign patterns.
//! Rules are not mutually exclusive: every rule whose condition holds
//! appends its sentence, in declaration order. The rule set is closed;
//! sign combinations with no rule (literacy down with income down, for
//! one) contribute no text.

use crate::delta::{Direction, SnapshotChange};

struct SuggestionRule {
    applies: fn(&SnapshotChange) -> bool,
    note: &'static str,
}

fn education_without_income(change: &SnapshotChange) -> bool {
    change.literacy_rate.direction == Direction::Up
        && change.average_income.direction != Direction::Up
}

fn income_without_education(change: &SnapshotChange) -> bool {
    change.average_income.direction == Direction::Up
        && change.literacy_rate.direction != Direction::Up
}

fn poverty_with_falling_income(change: &SnapshotChange) -> bool {
    change.poverty_rate.direction == Direction::Up
        && change.average_income.direction == Direction::Down
}

const RULES: [SuggestionRule; 3] = [
    SuggestionRule {
        applies: education_without_income,
        note: "education improved but income did not; this may point to a lack of job opportunities.",
    },
    SuggestionRule {
        applies: income_without_education,
        note: "income grew despite no improvement in literacy; possibly informal employment.",
    },
    SuggestionRule {
        applies: poverty_with_falling_income,
        note: "poverty worsened while income declined; consider employment generation schemes.",
    },
];

/// Suggestion text for one state, one sentence per firing rule. A state
/// firing zero rules contributes an empty string.
pub fn suggestions_for(state: &str, change: &SnapshotChange) -> String {
    let mut text = String::new();
    for rule in &RULES {
        if (rule.applies)(change) {
            text.push_str(&format!("For {state}: {}\n", rule.note));
        }
    }
    text
}
