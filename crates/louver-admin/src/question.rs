#![forbid(unsafe_code)]

//! Rule pack for the question form.
//!
//! The question admin renders every answer-rule panel up front; the type
//! select decides which of them the editor should see. Choice-style types
//! share the response-choices panel, scale questions get the bound and
//! category panels, and the numeric types each get their range panel.
//! Open questions reveal nothing.
//!
//! Profiling questions reuse this form with a reduced panel set; under the
//! tolerant policy the absent panels become no-ops, which is exactly how
//! those pages are meant to degrade.

use louver_core::{FieldId, PanelId};
use louver_rules::RuleSet;

use crate::routes::{AdminForm, RouteMatcher};

/// Id of the controlling type select.
pub const CONTROLLING_FIELD: &str = "type";

/// Every panel the question pack manages.
pub const MANAGED_PANELS: [&str; 7] = [
    "response-choices",
    "max-choices",
    "scale-bounds",
    "scale-categories",
    "binary-rules",
    "percentage-ranges",
    "number-settings",
];

/// Question answer formats, mirroring the type select's option values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionType {
    /// Free-text answer.
    Open,
    /// Pick one response choice.
    UniqueChoice,
    /// Pick several response choices, up to a configured maximum.
    MultipleChoice,
    /// Rank the response choices. Retired from the select but still
    /// present on old records, so the rule stays.
    ClosedWithRanking,
    /// Grade along a scale.
    ClosedWithScale,
    /// Yes / no.
    Boolean,
    /// Percentage answer.
    Percentage,
    /// Free numeric answer.
    Number,
}

impl QuestionType {
    /// Every type, in select order.
    pub const ALL: [QuestionType; 8] = [
        QuestionType::Open,
        QuestionType::UniqueChoice,
        QuestionType::MultipleChoice,
        QuestionType::ClosedWithRanking,
        QuestionType::ClosedWithScale,
        QuestionType::Boolean,
        QuestionType::Percentage,
        QuestionType::Number,
    ];

    /// The raw option value the select reports.
    #[must_use]
    pub const fn value(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::UniqueChoice => "unique_choice",
            Self::MultipleChoice => "multiple_choice",
            Self::ClosedWithRanking => "closed_with_ranking",
            Self::ClosedWithScale => "closed_with_scale",
            Self::Boolean => "boolean",
            Self::Percentage => "percentage",
            Self::Number => "number",
        }
    }

    /// Panels this type reveals.
    #[must_use]
    pub const fn revealed(self) -> &'static [&'static str] {
        match self {
            Self::Open => &[],
            Self::UniqueChoice | Self::ClosedWithRanking => &["response-choices"],
            Self::MultipleChoice => &["response-choices", "max-choices"],
            Self::ClosedWithScale => &["scale-bounds", "scale-categories"],
            Self::Boolean => &["binary-rules"],
            Self::Percentage => &["percentage-ranges"],
            Self::Number => &["number-settings"],
        }
    }
}

/// Id of the controlling field.
#[must_use]
pub fn field_id() -> FieldId {
    FieldId::new(CONTROLLING_FIELD)
}

/// The managed panel universe.
#[must_use]
pub fn managed_panels() -> Vec<PanelId> {
    MANAGED_PANELS.iter().map(PanelId::new).collect()
}

/// The question rule table.
#[must_use]
pub fn rules() -> RuleSet {
    let mut builder = RuleSet::builder();
    for question_type in QuestionType::ALL {
        builder = builder.rule(
            question_type.value(),
            question_type.revealed().iter().copied(),
        );
    }
    builder.build()
}

/// The question form's route.
#[must_use]
pub const fn route() -> RouteMatcher {
    AdminForm::Question.matcher()
}
