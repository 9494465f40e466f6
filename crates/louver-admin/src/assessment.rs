#![forbid(unsafe_code)]

//! Rule pack for the assessment form.
//!
//! The assessment admin has no select to read: the assessment type is
//! picked through a chooser, and the form only exposes the chosen type's
//! *title text*. The controlling value is therefore the display label,
//! compared exactly, and the watch source is the title node's text
//! mutation rather than a change event.
//!
//! Only expert assessments involve external experts and royalties, so
//! those two panels hang off one label and every other label hides them.

use louver_core::{FieldId, PanelId};
use louver_rules::RuleSet;

use crate::routes::{AdminForm, RouteMatcher};

/// Id of the chooser title node carrying the selected type's label.
pub const CONTROLLING_FIELD: &str = "assessment_type-title";

/// Every panel the assessment pack manages.
pub const MANAGED_PANELS: [&str; 2] = ["experts", "royalty-payed"];

/// Assessment types, identified by the label the chooser title displays.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssessmentType {
    /// Self-serve quick diagnostic.
    Quick,
    /// Participative evaluation.
    Participative,
    /// Expert-led evaluation.
    WithExpert,
}

impl AssessmentType {
    /// Every type the chooser offers.
    pub const ALL: [AssessmentType; 3] = [
        AssessmentType::Quick,
        AssessmentType::Participative,
        AssessmentType::WithExpert,
    ];

    /// The display label, exactly as the chooser title renders it.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Quick => "Diagnostic rapide",
            Self::Participative => "Evaluation participative",
            Self::WithExpert => "Evaluation avec expert",
        }
    }

    /// Panels this type reveals.
    #[must_use]
    pub const fn revealed(self) -> &'static [&'static str] {
        match self {
            Self::WithExpert => &["experts", "royalty-payed"],
            _ => &[],
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

/// The assessment rule table.
#[must_use]
pub fn rules() -> RuleSet {
    let mut builder = RuleSet::builder();
    for assessment_type in AssessmentType::ALL {
        builder = builder.rule(
            assessment_type.label(),
            assessment_type.revealed().iter().copied(),
        );
    }
    builder.build()
}

/// The assessment form's route.
#[must_use]
pub const fn route() -> RouteMatcher {
    AdminForm::Assessment.matcher()
}
