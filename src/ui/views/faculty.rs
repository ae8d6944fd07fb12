use egui::{Context, ScrollArea};

use crate::app::GreenPathApp;
use crate::events::ChangeKind;
use crate::ui::layout::centered_panel;

/// Faculty/admin dashboard: shows the live record changes the external
/// backend pushes (attendance marks, profile updates). Reachable only through
/// the `authorize` gate in `navigate`.
pub fn ui_faculty(app: &mut GreenPathApp, ctx: &Context) {
    centered_panel(ctx, 400.0, 560.0, |ui| {
        ui.heading("🎓 Faculty Dashboard");
        ui.add_space(8.0);

        if app.feed.is_none() {
            ui.weak("No realtime feed connected.");
        }

        ui.strong("Live record changes");
        ui.add_space(4.0);
        if app.feed_log.is_empty() {
            ui.weak("Nothing received yet.");
        } else {
            ScrollArea::vertical().max_height(300.0).show(ui, |ui| {
                for change in app.feed_log.iter().rev() {
                    let kind = match change.kind {
                        ChangeKind::Inserted => "insert",
                        ChangeKind::Updated => "update",
                        ChangeKind::Deleted => "delete",
                    };
                    ui.label(format!(
                        "{} · {} · {}",
                        change.table, change.record_id, kind
                    ));
                }
            });
        }
    });
}
