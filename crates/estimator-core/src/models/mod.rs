//! Data model shared by the engine, evaluator, builder, and exporters.

pub mod answer;
pub mod estimate;
pub mod mode;
pub mod phase;
pub mod question;
pub mod risk;
pub mod rule;
pub mod totals;

pub use answer::{AnswerSet, AnswerValue};
pub use estimate::{DisplayTotals, EstimateResult, PhaseContribution, RuleContribution};
pub use mode::{ComplexityMode, ModeDefinition, QuestionSelection};
pub use phase::{Phase, PhaseAmounts, PhaseSplit};
pub use question::{AnswerKind, ComplexityTier, Dependency, Question};
pub use risk::{
    ConfidenceBand, ConfidenceThresholds, RiskAssessment, RiskFactor, RiskTrigger,
    TriggerCondition,
};
pub use rule::{Rule, RuleWeights, Tier};
pub use totals::{RawTotals, Resolution, ResolvedWeight, RuleShare, Scale};
