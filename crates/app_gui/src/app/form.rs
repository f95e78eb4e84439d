//! Label selectors and navigation buttons.

use super::UiApp;
use annotator_core::{Gender, Status};
use eframe::egui;

impl UiApp {
    /// Renders the gender and status radio groups followed by Previous/Next.
    pub(super) fn render_form(&mut self, ui: &mut egui::Ui) {
        ui.label("Select Gender:");
        ui.horizontal(|ui| {
            for gender in Gender::ALL {
                ui.radio_value(&mut self.selection.gender, gender, gender.display_name());
            }
        });
        ui.add_space(5.0);

        ui.label("Select Status:");
        ui.horizontal(|ui| {
            for status in Status::ALL {
                ui.radio_value(&mut self.selection.status, status, status.option_label());
            }
        });
        ui.add_space(10.0);

        ui.horizontal(|ui| {
            if ui.button("Previous").clicked() {
                self.prev_image();
            }
            if ui.button("Next").clicked() {
                self.next_image();
            }
        });
    }
}
