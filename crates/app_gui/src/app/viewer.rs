//! Square preview of the current image with a small texture cache.

use eframe::egui;
use image::imageops::FilterType;
use std::collections::{HashMap, HashSet, VecDeque};
use std::path::{Path, PathBuf};

const MAX_TEXTURES: usize = 32;

pub(super) struct TextureCache {
    size: u32,
    textures: HashMap<PathBuf, egui::TextureHandle>,
    keys: VecDeque<PathBuf>,
    failed: HashSet<PathBuf>,
}

impl TextureCache {
    pub(super) fn new(size: u32) -> Self {
        Self {
            size,
            textures: HashMap::new(),
            keys: VecDeque::new(),
            failed: HashSet::new(),
        }
    }

    fn get_or_load(&mut self, ctx: &egui::Context, path: &Path) -> Option<egui::TextureId> {
        if let Some(tex) = self.textures.get(path) {
            return Some(tex.id());
        }
        if self.failed.contains(path) {
            return None;
        }

        match image::open(path) {
            Ok(img) => {
                let resized = img
                    .resize_exact(self.size, self.size, FilterType::Lanczos3)
                    .to_rgba8();
                let (w, h) = resized.dimensions();
                let color = egui::ColorImage::from_rgba_unmultiplied(
                    [w as usize, h as usize],
                    &resized.into_raw(),
                );
                let name = format!("preview:{}", path.display());
                let tex = ctx.load_texture(name, color, egui::TextureOptions::LINEAR);
                let id = tex.id();
                self.textures.insert(path.to_path_buf(), tex);
                self.keys.push_back(path.to_path_buf());
                if self.textures.len() > MAX_TEXTURES
                    && let Some(old) = self.keys.pop_front()
                {
                    self.textures.remove(&old);
                }
                Some(id)
            }
            Err(e) => {
                tracing::warn!("Failed to load image {}: {}", path.display(), e);
                self.failed.insert(path.to_path_buf());
                None
            }
        }
    }

    /// Paints the image at `path`, or a placeholder when it cannot be decoded.
    pub(super) fn show(&mut self, ctx: &egui::Context, ui: &mut egui::Ui, path: &Path) {
        let side = self.size as f32;
        let desired = egui::vec2(side, side);
        match self.get_or_load(ctx, path) {
            Some(id) => {
                ui.add(egui::Image::new(egui::load::SizedTexture::new(id, desired)));
            }
            None => {
                let (resp, painter) = ui.allocate_painter(desired, egui::Sense::hover());
                let r = resp.rect;
                painter.rect_filled(r, 4.0, egui::Color32::from_gray(40));
                painter.rect_stroke(
                    r,
                    4.0,
                    egui::Stroke::new(1.0, egui::Color32::DARK_GRAY),
                    egui::StrokeKind::Inside,
                );
                painter.text(
                    r.center(),
                    egui::Align2::CENTER_CENTER,
                    "Cannot display image",
                    egui::FontId::proportional(14.0),
                    egui::Color32::GRAY,
                );
            }
        }
    }
}
