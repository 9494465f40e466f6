#![forbid(unsafe_code)]

//! Page attachment: from a URL and a host to a wired form.
//!
//! [`attach`] is the page-ready entry point. It decides which shipped
//! rule pack, if any, the current URL belongs to, then resolves and binds
//! that pack against the host. Off-route pages come back as `Ok(None)`
//! with nothing touched; a matched route that fails setup comes back as
//! an error, also with nothing touched.

use std::fmt;

use louver_core::FormHost;
use louver_rules::MissingPanelPolicy;
use louver_runtime::{FormBinding, SetupError, bind_form};
use tracing::{debug, info, warn};

use crate::routes::{AdminForm, AdminView, active_form};
use crate::{assessment, question};

/// A rule pack wired to a live page.
pub struct AttachedForm<H: FormHost> {
    form: AdminForm,
    view: AdminView,
    binding: FormBinding<H>,
}

impl<H: FormHost> fmt::Debug for AttachedForm<H>
where
    H::Panel: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AttachedForm")
            .field("form", &self.form)
            .field("view", &self.view)
            .field("binding", &self.binding)
            .finish()
    }
}

impl<H: FormHost> AttachedForm<H> {
    /// Which form pack is attached.
    #[must_use]
    pub fn form(&self) -> AdminForm {
        self.form
    }

    /// Which admin view the URL landed on.
    #[must_use]
    pub fn view(&self) -> AdminView {
        self.view
    }

    /// The underlying binding.
    #[must_use]
    pub fn binding(&self) -> &FormBinding<H> {
        &self.binding
    }

    /// True while the change listener is attached.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.binding.is_active()
    }
}

/// Wire whichever shipped form pack `url` belongs to.
///
/// Returns `Ok(None)` when no route matches; the host is not consulted
/// at all in that case. On a matched route the pack binds under the
/// tolerant policy, so page variants missing some panels still work; a
/// missing controlling field aborts with the page untouched.
pub fn attach<H>(host: &H, url: &str) -> Result<Option<AttachedForm<H>>, SetupError>
where
    H: FormHost,
    H::Panel: 'static,
{
    let Some((form, view)) = active_form(url) else {
        debug!(url, "no admin route matched");
        return Ok(None);
    };

    let result = match form {
        AdminForm::Question => bind_form(
            host,
            &question::field_id(),
            question::rules(),
            &question::managed_panels(),
            MissingPanelPolicy::Tolerant,
        ),
        AdminForm::Assessment => bind_form(
            host,
            &assessment::field_id(),
            assessment::rules(),
            &assessment::managed_panels(),
            MissingPanelPolicy::Tolerant,
        ),
    };

    match result {
        Ok(binding) => {
            info!(%form, %view, "admin form attached");
            Ok(Some(AttachedForm {
                form,
                view,
                binding,
            }))
        }
        Err(e) => {
            warn!(%form, %view, error = %e, "admin form attach failed");
            Err(e)
        }
    }
}
