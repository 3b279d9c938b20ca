//! DamageResult - Outcome of a damage attempt

use super::CombatError;
use crate::types::Interaction;
use serde::{Deserialize, Serialize};

/// Result of one damage attempt against one target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DamageResult {
    amount: u32,
    interaction: Interaction,
}

impl DamageResult {
    /// Create a result
    pub fn new(amount: u32, interaction: Interaction) -> Self {
        DamageResult {
            amount,
            interaction,
        }
    }

    /// No damage was computed
    pub fn pass_through() -> Self {
        Self::new(0, Interaction::PassThrough)
    }

    /// Damage landed on the target
    pub fn landed(amount: u32) -> Self {
        Self::new(amount, Interaction::Land)
    }

    /// The target blocked the attempt
    pub fn blocked() -> Self {
        Self::new(0, Interaction::Block)
    }

    /// The target parried the attempt
    pub fn parried() -> Self {
        Self::new(0, Interaction::Parry)
    }

    /// The target absorbed the attempt
    pub fn absorbed(amount: u32) -> Self {
        Self::new(amount, Interaction::Absorb)
    }

    /// Actual health reduction applied
    pub fn amount(&self) -> u32 {
        self.amount
    }

    /// How the attempt was classified
    pub fn interaction(&self) -> Interaction {
        self.interaction
    }
}

/// Why a candidate was skipped without any hook firing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The candidate cannot receive damage
    NotDamageable,
    /// The candidate shares the attacker's alignment
    SameAlignment,
}

/// What happened to one candidate of an attack
#[derive(Debug, Clone, PartialEq)]
pub enum CandidateOutcome {
    Skipped(SkipReason),
    Resolved(DamageResult),
    /// The strike failed for this candidate; the batch carried on
    Failed(CombatError),
}

impl CandidateOutcome {
    /// The damage result, if the candidate was resolved
    pub fn result(&self) -> Option<DamageResult> {
        match self {
            CandidateOutcome::Resolved(result) => Some(*result),
            _ => None,
        }
    }
}

/// Outcome of one call to `Hitbox::attack`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AttackReport {
    /// The attack was suppressed by pause or an inactive hitbox
    pub gated: bool,
    /// One entry per candidate, in candidate order
    pub outcomes: Vec<CandidateOutcome>,
}

impl AttackReport {
    /// Create an empty report
    pub fn new() -> Self {
        Self::default()
    }

    /// Report for an attack that never ran
    pub fn gated() -> Self {
        AttackReport {
            gated: true,
            outcomes: Vec::new(),
        }
    }

    /// Record the outcome of the next candidate
    pub fn push(&mut self, outcome: CandidateOutcome) {
        self.outcomes.push(outcome);
    }

    /// Iterate over resolved results
    pub fn results(&self) -> impl Iterator<Item = DamageResult> + '_ {
        self.outcomes.iter().filter_map(CandidateOutcome::result)
    }

    /// Number of resolved results with the given interaction
    pub fn count(&self, interaction: Interaction) -> usize {
        self.results()
            .filter(|r| r.interaction() == interaction)
            .count()
    }

    /// Total health removed across all candidates
    pub fn total_damage(&self) -> u64 {
        self.results().map(|r| u64::from(r.amount())).sum()
    }

    /// Get a summary string
    pub fn summary(&self) -> String {
        if self.gated {
            return "Inactive".to_string();
        }

        let mut parts = Vec::new();

        let total = self.total_damage();
        if total > 0 {
            parts.push(format!("{} damage dealt", total));
        }

        for (interaction, label) in [
            (Interaction::Land, "landed"),
            (Interaction::Block, "blocked"),
            (Interaction::Parry, "parried"),
            (Interaction::Absorb, "absorbed"),
        ] {
            let n = self.count(interaction);
            if n > 0 {
                parts.push(format!("{} {}", n, label));
            }
        }

        let failed = self
            .outcomes
            .iter()
            .filter(|o| matches!(o, CandidateOutcome::Failed(_)))
            .count();
        if failed > 0 {
            parts.push(format!("{} failed", failed));
        }

        if parts.is_empty() {
            "No contact".to_string()
        } else {
            parts.join(", ")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constructors() {
        assert_eq!(DamageResult::default(), DamageResult::pass_through());
        assert_eq!(DamageResult::landed(7).amount(), 7);
        assert_eq!(DamageResult::blocked().interaction(), Interaction::Block);
        assert_eq!(DamageResult::parried().amount(), 0);
        assert_eq!(DamageResult::absorbed(3).interaction(), Interaction::Absorb);
    }

    #[test]
    fn test_report_totals() {
        let mut report = AttackReport::new();
        report.push(CandidateOutcome::Skipped(SkipReason::SameAlignment));
        report.push(CandidateOutcome::Resolved(DamageResult::blocked()));
        report.push(CandidateOutcome::Resolved(DamageResult::landed(20)));
        report.push(CandidateOutcome::Resolved(DamageResult::absorbed(5)));

        assert_eq!(report.total_damage(), 25);
        assert_eq!(report.count(Interaction::Land), 1);
        assert_eq!(report.count(Interaction::Block), 1);
        assert_eq!(report.results().count(), 3);
    }

    #[test]
    fn test_report_summary() {
        let mut report = AttackReport::new();
        report.push(CandidateOutcome::Resolved(DamageResult::landed(12)));
        report.push(CandidateOutcome::Failed(CombatError::NegativeDamage(-1)));

        let summary = report.summary();
        assert!(summary.contains("12 damage"));
        assert!(summary.contains("1 landed"));
        assert!(summary.contains("1 failed"));

        assert_eq!(AttackReport::new().summary(), "No contact");
        assert_eq!(AttackReport::gated().summary(), "Inactive");
    }

    #[test]
    fn test_result_serializes() {
        let json = serde_json::to_string(&DamageResult::landed(4)).unwrap();
        assert_eq!(json, r#"{"amount":4,"interaction":"land"}"#);
    }
}
