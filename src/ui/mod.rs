//! Injected view port.
//!
//! The services never touch a document directly: every visibility,
//! requirement, and busy-state change is batched into a [`ViewPatch`] and
//! applied through the [`FormView`] port in one call, and every user-facing
//! message goes through the same port as a [`Notice`]. Substituting a
//! scripted implementation makes the whole controller deterministic in
//! tests.

/// Which busy indicator a service is toggling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Indicator {
    /// Spinner on the name input while the roster loads.
    NameField,
    /// Spinner on the whole entry form during a submission.
    EntryForm,
    /// Spinner on the public page's submit control.
    SubmitControl,
}

/// Which fields are visible and required for the active mode and selection.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FieldRequirements {
    pub amount_visible: bool,
    pub amount_required: bool,
    pub name_required: bool,
    pub identifier_required: bool,
    pub file_visible: bool,
    /// Whether the name input listens for autocomplete.
    pub autocomplete_enabled: bool,
}

/// One batched set of view updates, applied in a single port call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewPatch {
    pub fields: Option<FieldRequirements>,
    pub busy: Option<(Indicator, bool)>,
    /// Enable or disable the name input.
    pub name_enabled: Option<bool>,
    /// Render these suggestions; an empty list clears and hides the box.
    pub suggestions: Option<Vec<String>>,
    /// Clear the name and identifier inputs.
    pub reset_entry: bool,
    /// Permanently disable the submit control (post-redirect guard).
    pub disable_submit: bool,
}

impl ViewPatch {
    pub fn fields(requirements: FieldRequirements) -> Self {
        Self {
            fields: Some(requirements),
            ..Self::default()
        }
    }

    pub fn busy(indicator: Indicator, on: bool) -> Self {
        Self {
            busy: Some((indicator, on)),
            ..Self::default()
        }
    }

    pub fn suggestions(items: Vec<String>) -> Self {
        Self {
            suggestions: Some(items),
            ..Self::default()
        }
    }
}

/// User-facing message routed through the view port.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    /// Blocking alert with a retry instruction.
    Alert(String),
    /// Inline dismissible warning next to the form.
    Warning(String),
    /// Success banner below the form.
    Success(String),
}

/// Message areas that services clear before an operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MessageKind {
    Success,
    Warning,
}

/// Port to whatever renders the form: a page, a console, or a test double.
pub trait FormView {
    fn apply(&self, patch: &ViewPatch);
    fn notify(&self, notice: &Notice);
    fn clear(&self, kind: MessageKind);
    /// Blocking confirmation prompt; `true` means the user accepted.
    fn confirm(&self, message: &str) -> bool;
}

impl<T: FormView + ?Sized> FormView for &T {
    fn apply(&self, patch: &ViewPatch) {
        (**self).apply(patch);
    }

    fn notify(&self, notice: &Notice) {
        (**self).notify(notice);
    }

    fn clear(&self, kind: MessageKind) {
        (**self).clear(kind);
    }

    fn confirm(&self, message: &str) -> bool {
        (**self).confirm(message)
    }
}

/// Keeps a busy indicator engaged for the lifetime of an operation.
///
/// Releasing on drop covers every exit path, early returns and errors
/// included.
pub struct BusyGuard<'a, V: FormView + ?Sized> {
    ui: &'a V,
    indicator: Indicator,
}

impl<'a, V: FormView + ?Sized> BusyGuard<'a, V> {
    pub fn engage(ui: &'a V, indicator: Indicator) -> Self {
        ui.apply(&ViewPatch::busy(indicator, true));
        Self { ui, indicator }
    }
}

impl<V: FormView + ?Sized> Drop for BusyGuard<'_, V> {
    fn drop(&mut self) {
        self.ui.apply(&ViewPatch::busy(self.indicator, false));
    }
}
