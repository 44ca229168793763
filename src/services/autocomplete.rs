//! Name autocomplete over the roster cache.

use crate::domain::session::FormSession;
use crate::ui::{FormView, ViewPatch};

/// Display names suggested for the typed input, in roster order.
pub fn suggestions(session: &FormSession, input: &str) -> Vec<String> {
    session
        .roster
        .matches(input)
        .into_iter()
        .map(|entry| entry.display_name.clone())
        .collect()
}

/// Handles a keystroke in the name input: stores the value and renders the
/// filtered suggestion list. An empty input clears and hides the list.
pub fn name_input<V>(ui: &V, session: &mut FormSession, value: String)
where
    V: FormView + ?Sized,
{
    let items = suggestions(session, &value);
    session.name = value;
    ui.apply(&ViewPatch::suggestions(items));
}

/// Handles a click on a suggestion: fills the name input with the chosen
/// display name, fills the identifier input from the first roster entry with
/// that name, and hides the list.
pub fn select_suggestion<V>(ui: &V, session: &mut FormSession, choice: &str)
where
    V: FormView + ?Sized,
{
    session.name = choice.to_string();
    if let Some(identifier) = session.roster.identifier_for(choice) {
        session.identifier = identifier.to_string();
    }
    ui.apply(&ViewPatch::suggestions(Vec::new()));
}
