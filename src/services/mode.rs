//! Mode toggling and the visibility/requirement transition table.

use crate::domain::session::{FormSession, Mode};
use crate::ui::{FieldRequirements, FormView, MessageKind, ViewPatch};

/// Field visibility and requirements for a mode and selection.
///
/// `donation_selected` is true when the current part is the donation
/// category (or the public page's donate box is checked): no roster match is
/// required there, so autocomplete detaches and the identifier requirement
/// drops.
pub fn requirements(mode: Mode, donation_selected: bool) -> FieldRequirements {
    match mode {
        Mode::Payment => FieldRequirements {
            amount_visible: true,
            amount_required: true,
            name_required: true,
            identifier_required: !donation_selected,
            file_visible: false,
            autocomplete_enabled: !donation_selected,
        },
        Mode::Registration => FieldRequirements {
            amount_visible: false,
            amount_required: false,
            name_required: false,
            identifier_required: false,
            file_visible: true,
            autocomplete_enabled: false,
        },
    }
}

/// Swaps the active mode, clearing any pending success message and any open
/// suggestion list, then applies the new field requirements in one patch.
pub fn toggle_mode<V>(ui: &V, session: &mut FormSession, donation_part: &str) -> Mode
where
    V: FormView + ?Sized,
{
    session.mode = session.mode.toggled();
    ui.clear(MessageKind::Success);

    let donation_selected = session.part == donation_part;
    ui.apply(&ViewPatch {
        fields: Some(requirements(session.mode, donation_selected)),
        suggestions: Some(Vec::new()),
        ..ViewPatch::default()
    });

    session.mode
}
