#![forbid(unsafe_code)]

//! End-to-end scenarios for the shipped admin form packs.
//!
//! These tests run the full stack the way a page load does: a host with
//! the server-rendered elements, a URL, one `attach` call, then user
//! edits. No engine or rule internals are reached into; everything is
//! observed through panel visibility.
//!
//! # Behaviors covered
//!
//! 1. Initial apply on attach, driven by the preselected value.
//! 2. Recompute on every change, full set each time.
//! 3. Unknown and unset values hide every managed panel.
//! 4. Reduced page variants bind and degrade under the tolerant policy.
//! 5. A missing controlling field aborts with the page untouched.
//! 6. Off-route URLs touch nothing.
//! 7. Disposal stops tracking without resetting panel state.

use louver_admin::{AdminForm, AdminView, attach};
use louver_core::memory::{MemoryPage, MemoryPanel, SelectField, WatchedLabel};
use louver_core::{FieldValue, PanelHandle};
use louver_runtime::SetupError;

// ============================================================================
// Fixtures
// ============================================================================

const QUESTION_PANELS: [&str; 7] = [
    "response-choices",
    "max-choices",
    "scale-bounds",
    "scale-categories",
    "binary-rules",
    "percentage-ranges",
    "number-settings",
];

/// The full question edit page: every panel present.
fn question_page(initial_type: &str) -> (MemoryPage, Vec<MemoryPanel>, SelectField) {
    let mut page = MemoryPage::new();
    let panels: Vec<MemoryPanel> = QUESTION_PANELS
        .iter()
        .map(|id| page.add_panel(*id))
        .collect();
    let select = page.add_select("type", initial_type);
    (page, panels, select)
}

/// The assessment page: chooser title label plus the two expert panels.
fn assessment_page(initial_label: &str) -> (MemoryPage, MemoryPanel, MemoryPanel, WatchedLabel) {
    let mut page = MemoryPage::new();
    let experts = page.add_panel("experts");
    let royalty = page.add_panel("royalty-payed");
    let title = page.add_label("assessment_type-title", initial_label);
    (page, experts, royalty, title)
}

fn visible_ids(panels: &[MemoryPanel]) -> Vec<&'static str> {
    QUESTION_PANELS
        .iter()
        .zip(panels)
        .filter_map(|(id, panel)| panel.is_visible().then_some(*id))
        .collect()
}

// ============================================================================
// Question form
// ============================================================================

#[test]
fn attach_applies_the_preselected_type() {
    let (page, panels, _select) = question_page("multiple_choice");
    let attached = attach(&page, "https://cms.example/admin/question/edit/4/")
        .expect("page is complete")
        .expect("route matches");

    assert_eq!(attached.form(), AdminForm::Question);
    assert_eq!(attached.view(), AdminView::EDIT);
    assert_eq!(visible_ids(&panels), ["response-choices", "max-choices"]);
}

#[test]
fn every_type_change_recomputes_the_full_set() {
    let (page, panels, select) = question_page("open");
    let _attached = attach(&page, "https://cms.example/admin/question/add/")
        .expect("page is complete")
        .expect("route matches");

    assert!(visible_ids(&panels).is_empty(), "open reveals nothing");

    select.select("unique_choice");
    assert_eq!(visible_ids(&panels), ["response-choices"]);

    select.select("multiple_choice");
    assert_eq!(visible_ids(&panels), ["response-choices", "max-choices"]);

    select.select("closed_with_scale");
    assert_eq!(visible_ids(&panels), ["scale-bounds", "scale-categories"]);

    select.select("boolean");
    assert_eq!(visible_ids(&panels), ["binary-rules"]);

    select.select("percentage");
    assert_eq!(visible_ids(&panels), ["percentage-ranges"]);

    select.select("number");
    assert_eq!(visible_ids(&panels), ["number-settings"]);
}

#[test]
fn unknown_and_unset_values_hide_everything() {
    let (page, panels, select) = question_page("boolean");
    let _attached = attach(&page, "https://cms.example/admin/question/add/")
        .expect("page is complete")
        .expect("route matches");
    assert_eq!(visible_ids(&panels), ["binary-rules"]);

    select.select("some_future_type");
    assert!(visible_ids(&panels).is_empty());

    select.select("boolean");
    select.select(FieldValue::unset());
    assert!(visible_ids(&panels).is_empty());
}

#[test]
fn reduced_profiling_page_binds_and_degrades() {
    // Profiling questions render only the choice panels; the rest of the
    // managed set is simply absent from the page.
    let mut page = MemoryPage::new();
    let choices = page.add_panel("response-choices");
    let max = page.add_panel("max-choices");
    let select = page.add_select("type", "multiple_choice");

    let attached = attach(&page, "https://cms.example/admin/question/edit/11/")
        .expect("tolerant policy covers the missing panels")
        .expect("route matches");

    assert!(choices.is_visible());
    assert!(max.is_visible());

    select.select("boolean");
    assert!(!choices.is_visible());
    assert!(!max.is_visible());

    select.select("unique_choice");
    assert!(choices.is_visible());
    assert!(!max.is_visible());
    drop(attached);
}

#[test]
fn missing_type_select_aborts_with_the_page_untouched() {
    let mut page = MemoryPage::new();
    let panels: Vec<MemoryPanel> = QUESTION_PANELS
        .iter()
        .map(|id| page.add_panel(*id))
        .collect();

    let err = attach(&page, "https://cms.example/admin/question/add/")
        .expect_err("no controlling field on the page");
    assert!(matches!(err, SetupError::MissingField(_)));
    assert!(
        panels.iter().all(MemoryPanel::is_visible),
        "failed setup must not hide anything"
    );
}

#[test]
fn disposal_stops_tracking_but_keeps_the_last_state() {
    let (page, panels, select) = question_page("percentage");
    let attached = attach(&page, "https://cms.example/admin/question/edit/8/")
        .expect("page is complete")
        .expect("route matches");
    assert_eq!(visible_ids(&panels), ["percentage-ranges"]);

    drop(attached);
    select.select("boolean");
    assert_eq!(
        visible_ids(&panels),
        ["percentage-ranges"],
        "panels keep their last applied state after disposal"
    );
}

// ============================================================================
// Assessment form
// ============================================================================

#[test]
fn expert_assessment_reveals_both_panels_on_load() {
    let (page, experts, royalty, _title) = assessment_page("Evaluation avec expert");
    let attached = attach(&page, "https://cms.example/admin/assessment/edit/3/")
        .expect("page is complete")
        .expect("route matches");

    assert_eq!(attached.form(), AdminForm::Assessment);
    assert!(experts.is_visible());
    assert!(royalty.is_visible());
}

#[test]
fn switching_away_from_expert_hides_both_panels() {
    let (page, experts, royalty, title) = assessment_page("Evaluation avec expert");
    let _attached = attach(&page, "https://cms.example/admin/assessment/edit/3/")
        .expect("page is complete")
        .expect("route matches");
    assert!(experts.is_visible());

    title.set_text("Diagnostic rapide");
    assert!(!experts.is_visible());
    assert!(!royalty.is_visible());

    title.set_text("Evaluation avec expert");
    assert!(experts.is_visible());
    assert!(royalty.is_visible());
}

#[test]
fn fresh_add_view_starts_with_an_unset_title() {
    let (page, experts, royalty, title) = assessment_page("");
    let attached = attach(&page, "https://cms.example/admin/assessment/add/")
        .expect("page is complete")
        .expect("route matches");

    assert_eq!(attached.view(), AdminView::ADD);
    assert!(!experts.is_visible(), "no type chosen yet");
    assert!(!royalty.is_visible());

    title.set_text("Evaluation avec expert");
    assert!(experts.is_visible());
}

#[test]
fn near_miss_labels_reveal_nothing() {
    let (page, experts, _royalty, title) = assessment_page("Diagnostic rapide");
    let _attached = attach(&page, "https://cms.example/admin/assessment/edit/5/")
        .expect("page is complete")
        .expect("route matches");

    title.set_text("Evaluation avec expert ");
    assert!(!experts.is_visible(), "labels are compared exactly");

    title.set_text("Evaluation avec expert");
    assert!(experts.is_visible());
}

// ============================================================================
// Route gating
// ============================================================================

#[test]
fn foreign_pages_are_never_touched() {
    let mut page = MemoryPage::new();
    let experts = page.add_panel("experts");
    page.add_label("assessment_type-title", "Evaluation avec expert");
    page.add_select("type", "boolean");
    let binary = page.add_panel("binary-rules");

    for url in [
        "https://cms.example/admin/",
        "https://cms.example/admin/pages/12/edit-this/",
        "https://cms.example/admin/snippets/role/add/",
    ] {
        let attached = attach(&page, url).expect("off-route is not an error");
        assert!(attached.is_none(), "{url} should not match");
    }
    assert!(experts.is_visible(), "nothing was hidden");
    assert!(binary.is_visible(), "nothing was hidden");
}

#[test]
fn chooser_create_flow_attaches_like_add() {
    let (page, panels, _select) = question_page("unique_choice");
    let attached = attach(
        &page,
        "https://cms.example/admin/question/create?chooser=1",
    )
    .expect("page is complete")
    .expect("route matches");

    assert_eq!(attached.view(), AdminView::CREATE);
    assert_eq!(visible_ids(&panels), ["response-choices"]);
}
