//! eframe front end over an [`AnnotationSession`].

mod form;
mod input;
mod viewer;

use annotator_core::{
    AnnotationSession, AnnotatorConfig, AnnotatorError, CurrentImage, FolderSource, LabelPair,
    Step,
};
use eframe::{App, Frame, egui};
use input::Action;
use viewer::TextureCache;

/// Modal message shown until dismissed.
struct Notice {
    title: String,
    message: String,
}

pub struct UiApp {
    session: AnnotationSession,
    source: FolderSource,
    config: AnnotatorConfig,
    /// What the selectors currently show; committed on navigation and save.
    selection: LabelPair,
    current: CurrentImage,
    textures: TextureCache,
    notice: Option<Notice>,
    close_save_failed: bool,
}

impl UiApp {
    pub fn new(session: AnnotationSession, source: FolderSource, config: AnnotatorConfig) -> Self {
        let current = session.load_current();
        Self {
            selection: current.labels,
            current,
            textures: TextureCache::new(config.display_size),
            session,
            source,
            config,
            notice: None,
            close_save_failed: false,
        }
    }

    fn show_notice(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.notice = Some(Notice {
            title: title.into(),
            message: message.into(),
        });
    }

    fn apply_step(&mut self, step: Step) {
        match step {
            Step::Moved(current) => {
                self.selection = current.labels;
                self.current = current;
            }
            boundary => {
                if let Some((title, message)) = boundary.notice() {
                    self.show_notice(title, message);
                }
            }
        }
    }

    fn next_image(&mut self) {
        let step = self.session.advance(self.selection);
        self.apply_step(step);
    }

    fn prev_image(&mut self) {
        let step = self.session.retreat(self.selection);
        self.apply_step(step);
    }

    fn report_save(&mut self, result: Result<usize, AnnotatorError>) -> bool {
        match result {
            Ok(_) => true,
            Err(e) => {
                tracing::error!(
                    "saving to {} failed: {e}",
                    self.config.output_path.display()
                );
                self.show_notice("Save Failed", format!("Could not save annotations: {e}"));
                false
            }
        }
    }

    /// Save button: commits the visible selection, then rewrites the file.
    fn save_with_notice(&mut self) {
        let result = self
            .session
            .save_all(self.selection, &self.config.output_path);
        if self.report_save(result) {
            self.show_notice(
                "Save Successful",
                "Annotations have been saved successfully.",
            );
        }
    }

    /// Window close: rewrites the file from committed labels only, so an image
    /// that was merely displayed never gets a row.
    fn write_on_close(&mut self) -> bool {
        let result = self.session.write_to(&self.config.output_path);
        self.report_save(result)
    }

    fn controls_enabled(&self) -> bool {
        self.notice.is_none()
    }

    fn dispatch(&mut self, action: Action) {
        match action {
            Action::Key(c) => {
                self.selection.apply_key(c);
            }
            Action::Next => self.next_image(),
            Action::Previous => self.prev_image(),
        }
    }

    fn handle_close(&mut self, ctx: &egui::Context) {
        if !ctx.input(|i| i.viewport().close_requested()) {
            return;
        }
        if self.write_on_close() || self.close_save_failed {
            return;
        }
        // Keep the window open once so the operator sees why saving failed.
        self.close_save_failed = true;
        ctx.send_viewport_cmd(egui::ViewportCommand::CancelClose);
    }

    fn render_notice(&mut self, ctx: &egui::Context) {
        let Some(notice) = &self.notice else {
            return;
        };
        let mut dismissed = false;
        egui::Window::new(notice.title.as_str())
            .collapsible(false)
            .resizable(false)
            .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
            .show(ctx, |ui| {
                ui.label(notice.message.as_str());
                ui.add_space(6.0);
                if ui.button("OK").clicked() {
                    dismissed = true;
                }
            });
        if dismissed || ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.notice = None;
        }
    }
}

impl App for UiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        let enabled = self.controls_enabled();
        if enabled {
            for action in ctx.input(|i| input::actions(&i.events)) {
                self.dispatch(action);
            }
        }

        egui::TopBottomPanel::bottom("save").show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(6.0);
                ui.add_enabled_ui(enabled, |ui| {
                    if ui.button("Save").clicked() {
                        self.save_with_notice();
                    }
                });
                ui.add_space(6.0);
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            ui.vertical_centered(|ui| {
                let path = self.source.path_for(&self.current.filename);
                self.textures.show(ctx, ui, &path);
                ui.add_space(5.0);
                ui.label(format!("File: {}", self.current.filename));
                ui.add_space(5.0);
                ui.label(self.current.progress_text());
                ui.add_space(5.0);
                ui.add_enabled_ui(enabled, |ui| self.render_form(ui));
            });
        });

        self.render_notice(ctx);
        self.handle_close(ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use annotator_core::{Gender, Status};
    use anyhow::Result;
    use std::fs;
    use tempfile::tempdir;

    fn app_over(names: &[&str], output: &std::path::Path) -> Result<UiApp> {
        let session = AnnotationSession::new(names.iter().map(|s| s.to_string()).collect())?;
        let config = AnnotatorConfig {
            output_path: output.to_path_buf(),
            ..AnnotatorConfig::default()
        };
        Ok(UiApp::new(session, FolderSource::new("."), config))
    }

    #[test]
    fn close_leaves_displayed_but_untouched_image_out() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("tsv").join("labels.tsv");
        let mut app = app_over(&["a.png", "b.png", "c.png"], &out)?;
        app.selection = LabelPair::new(Gender::Female, Status::Warrior);
        app.next_image();
        app.next_image();
        assert_eq!(app.current.filename, "c.png");

        assert!(app.write_on_close());
        let text = fs::read_to_string(&out)?;
        assert_eq!(
            text,
            "filename\tgender\tstatus\na.png\tfemale\twarrior\nb.png\tmale\tnoble\n"
        );
        assert_eq!(app.session.label_for("c.png"), None);
        Ok(())
    }

    #[test]
    fn save_button_commits_visible_selection() -> Result<()> {
        let dir = tempdir()?;
        let out = dir.path().join("labels.tsv");
        let mut app = app_over(&["a.png", "b.png"], &out)?;
        app.next_image();
        app.selection = LabelPair::new(Gender::Female, Status::Commoner);
        app.save_with_notice();
        assert!(fs::read_to_string(&out)?.contains("b.png\tfemale\tcommoner\n"));
        assert_eq!(
            app.notice.as_ref().map(|n| n.title.as_str()),
            Some("Save Successful")
        );
        Ok(())
    }

    #[test]
    fn failed_close_write_shows_notice() -> Result<()> {
        let dir = tempdir()?;
        let blocker = dir.path().join("tsv");
        fs::File::create(&blocker)?;
        let mut app = app_over(&["a.png"], &blocker.join("labels.tsv"))?;
        assert!(!app.write_on_close());
        assert_eq!(
            app.notice.as_ref().map(|n| n.title.as_str()),
            Some("Save Failed")
        );
        Ok(())
    }

    #[test]
    fn boundary_notice_disables_controls_until_dismissed() -> Result<()> {
        let dir = tempdir()?;
        let mut app = app_over(&["a.png"], &dir.path().join("labels.tsv"))?;
        assert!(app.controls_enabled());
        app.prev_image();
        assert_eq!(
            app.notice.as_ref().map(|n| n.title.as_str()),
            Some("Start of Images")
        );
        assert!(!app.controls_enabled());
        app.notice = None;
        assert!(app.controls_enabled());
        Ok(())
    }
}
