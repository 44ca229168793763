//! Roster synchronization with the backend.

use crate::domain::session::FormSession;
use crate::gateway::RosterReader;
use crate::services::{ServiceResult, mode};
use crate::ui::{BusyGuard, FormView, Indicator, Notice, ViewPatch};

/// Re-fetches the roster for the session's current (part, fee type)
/// selection, replacing the cache wholesale on success.
///
/// The name and identifier inputs are cleared up front and field
/// requirements re-applied, attaching or detaching autocomplete per the
/// selection. On failure the user is alerted and the cache is left
/// unchanged, so stale data is never used to validate a different
/// selection. Triggered on part change, fee-type change, initial load, and
/// after a successful registration.
pub async fn refresh_roster<G, V>(
    gateway: &G,
    ui: &V,
    session: &mut FormSession,
    donation_part: &str,
) -> ServiceResult<()>
where
    G: RosterReader + ?Sized,
    V: FormView + ?Sized,
{
    session.clear_entry_fields();

    let donation_selected = session.part == donation_part || session.donate;
    ui.apply(&ViewPatch {
        fields: Some(mode::requirements(session.mode, donation_selected)),
        reset_entry: true,
        suggestions: Some(Vec::new()),
        ..ViewPatch::default()
    });

    let _busy = BusyGuard::engage(ui, Indicator::NameField);

    match gateway.fetch_names(&session.part, &session.fee_type).await {
        Ok(entries) => {
            log::info!(
                "Fetched {} roster entries for {} / {}",
                entries.len(),
                session.fee_type,
                session.part
            );
            session.roster.replace(entries);
            session.roster_ready = true;
            ui.apply(&ViewPatch {
                name_enabled: Some(true),
                ..ViewPatch::default()
            });
            Ok(())
        }
        Err(err) => {
            log::error!("Failed to fetch the roster: {err}");
            ui.notify(&Notice::Alert(
                "Error getting names. Try refreshing the page.".to_string(),
            ));
            Err(err.into())
        }
    }
}
