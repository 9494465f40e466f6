#![forbid(unsafe_code)]

//! Route gating: which admin page a URL belongs to.
//!
//! The CMS exposes each model admin under `<slug>/add`, `<slug>/edit` and
//! `<slug>/create` paths. Matching is by substring, the same check the
//! admin pages themselves perform; anything else on the same page load is
//! a foreign page and must stay untouched.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Admin views a rule pack is wired on.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct AdminView: u8 {
        /// No view.
        const NONE   = 0b000;
        /// The "add" view of a model admin.
        const ADD    = 0b001;
        /// The "edit" view of a model admin.
        const EDIT   = 0b010;
        /// The "create" view of a chooser-driven creation flow.
        const CREATE = 0b100;
    }
}

impl AdminView {
    /// Every view a form pack normally covers.
    pub const ALL_VIEWS: AdminView = AdminView::ADD
        .union(AdminView::EDIT)
        .union(AdminView::CREATE);

    /// Single view flags paired with their URL path segments.
    const SEGMENTS: [(AdminView, &'static str); 3] = [
        (AdminView::ADD, "add"),
        (AdminView::EDIT, "edit"),
        (AdminView::CREATE, "create"),
    ];
}

impl Default for AdminView {
    fn default() -> Self {
        Self::NONE
    }
}

impl fmt::Display for AdminView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "none");
        }
        let mut first = true;
        for (name, _) in self.iter_names() {
            if !first {
                write!(f, "|")?;
            }
            write!(f, "{}", name.to_ascii_lowercase())?;
            first = false;
        }
        Ok(())
    }
}

/// Recognizes one form's admin URLs.
#[derive(Debug, Clone, Copy)]
pub struct RouteMatcher {
    slug: &'static str,
    views: AdminView,
}

impl RouteMatcher {
    /// A matcher for `slug` on the given views.
    #[must_use]
    pub const fn new(slug: &'static str, views: AdminView) -> Self {
        Self { slug, views }
    }

    /// The model slug this matcher recognizes.
    #[must_use]
    pub const fn slug(&self) -> &'static str {
        self.slug
    }

    /// The view `url` lands on, if any.
    ///
    /// Substring match on `<slug>/<segment>`, so edit URLs with trailing
    /// object ids ("question/edit/42/") match the edit view.
    #[must_use]
    pub fn matches(&self, url: &str) -> Option<AdminView> {
        for (view, segment) in AdminView::SEGMENTS {
            if !self.views.contains(view) {
                continue;
            }
            let needle = format!("{}/{segment}", self.slug);
            if url.contains(&needle) {
                return Some(view);
            }
        }
        None
    }
}

/// The admin forms Louver ships rule packs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AdminForm {
    /// Questionnaire and profiling question form, driven by the question
    /// type select.
    Question,
    /// Assessment form, driven by the assessment type chooser title.
    Assessment,
}

impl AdminForm {
    /// Every shipped form pack, in match order.
    pub const ALL: [AdminForm; 2] = [AdminForm::Question, AdminForm::Assessment];

    /// The route matcher for this form.
    #[must_use]
    pub const fn matcher(self) -> RouteMatcher {
        match self {
            AdminForm::Question => RouteMatcher::new("question", AdminView::ALL_VIEWS),
            AdminForm::Assessment => RouteMatcher::new("assessment", AdminView::ALL_VIEWS),
        }
    }
}

impl fmt::Display for AdminForm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Question => write!(f, "question"),
            Self::Assessment => write!(f, "assessment"),
        }
    }
}

/// First shipped form whose route matches `url`, with the matched view.
#[must_use]
pub fn active_form(url: &str) -> Option<(AdminForm, AdminView)> {
    AdminForm::ALL
        .into_iter()
        .find_map(|form| form.matcher().matches(url).map(|view| (form, view)))
}
