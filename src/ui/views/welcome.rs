use egui::Context;

use crate::app::GreenPathApp;
use crate::auth::Role;
use crate::ui::layout::centered_panel;

pub fn ui_welcome(app: &mut GreenPathApp, ctx: &Context) {
    centered_panel(ctx, 320.0, 480.0, |ui| {
        ui.heading("🌍 GreenPath");
        ui.add_space(6.0);
        ui.label("Learn sustainability, earn XP, keep your streak alive.");
        ui.add_space(18.0);

        ui.label("Your name:");
        ui.text_edit_singleline(&mut app.profile.display_name);
        ui.add_space(12.0);

        let name = app.profile.display_name.clone();
        let ready = !name.trim().is_empty();

        ui.horizontal(|ui| {
            for role in [Role::Student, Role::Faculty, Role::Admin] {
                let button = egui::Button::new(format!("Continue as {}", role.label()));
                if ui.add_enabled(ready, button).clicked() {
                    app.sign_in(&name, role);
                }
            }
        });

        if !ready {
            ui.add_space(8.0);
            ui.weak("Enter a name to continue.");
        }
    });
}
