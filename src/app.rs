use eframe::egui;
use image::{DynamicImage, RgbImage};

use image_convertor::filter::enhance::{BLUR_SIGMA_RANGE, BRIGHTNESS_RANGE, CONTRAST_RANGE};
use image_convertor::image_io;
use image_convertor::pipeline::{self, FilterKind, FilterParams};

use crate::curve_display;

/// Largest texture side uploaded for display; WebGL commonly caps at 4096.
const MAX_TEXTURE_SIDE: u32 = 4096;

fn load_display_texture(ctx: &egui::Context, name: &str, img: &DynamicImage) -> egui::TextureHandle {
    let rgb = image_io::fit_within(img, MAX_TEXTURE_SIDE, MAX_TEXTURE_SIDE).to_rgb8();
    let color_image =
        egui::ColorImage::from_rgb([rgb.width() as usize, rgb.height() as usize], rgb.as_raw());
    ctx.load_texture(name, color_image, egui::TextureOptions::LINEAR)
}

pub struct ImageConvertorApp {
    source_image: Option<DynamicImage>,
    source_name: Option<String>,
    source_texture: Option<egui::TextureHandle>,
    result: Option<RgbImage>,
    preview_texture: Option<egui::TextureHandle>,
    params: FilterParams,
    needs_process: bool,
    auto_process: bool,
    processing_time_ms: f64,
    last_error: Option<String>,
    #[cfg(target_arch = "wasm32")]
    upload: crate::web::UploadSlot,
}

impl ImageConvertorApp {
    pub fn new(_cc: &eframe::CreationContext<'_>) -> Self {
        Self {
            source_image: None,
            source_name: None,
            source_texture: None,
            result: None,
            preview_texture: None,
            params: FilterParams::default(),
            needs_process: false,
            auto_process: true,
            processing_time_ms: 0.0,
            last_error: None,
            #[cfg(target_arch = "wasm32")]
            upload: Default::default(),
        }
    }

    fn report(&mut self, context: &str, e: impl std::fmt::Display) {
        log::error!("{context}: {e}");
        self.last_error = Some(format!("{context}: {e}"));
    }

    fn set_source(&mut self, ctx: &egui::Context, name: String, img: DynamicImage) {
        self.source_texture = Some(load_display_texture(ctx, "source", &img));
        self.source_image = Some(img);
        self.source_name = Some(name);
        self.result = None;
        self.preview_texture = None;
        self.last_error = None;
        self.needs_process = true;
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn open_image(&mut self, ctx: &egui::Context) {
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg"])
            .pick_file()
        {
            match image_io::load_image(&path) {
                Ok(img) => {
                    let name = path
                        .file_name()
                        .map(|n| n.to_string_lossy().into_owned())
                        .unwrap_or_default();
                    self.set_source(ctx, name, img);
                }
                Err(e) => self.report("Error loading image", e),
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn open_image(&mut self, ctx: &egui::Context) {
        if let Err(e) = crate::web::pick_file(self.upload.clone(), ctx.clone()) {
            self.report("Error opening file picker", e);
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn poll_upload(&mut self, ctx: &egui::Context) {
        let Some((name, bytes)) = self.upload.borrow_mut().take() else {
            return;
        };
        match image_io::decode_image(&bytes) {
            Ok(img) => self.set_source(ctx, name, img),
            Err(e) => self.report("Error loading image", e),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn save_result(&mut self) {
        let Some(result) = &self.result else {
            return;
        };
        if let Some(path) = rfd::FileDialog::new()
            .add_filter("PNG", &["png"])
            .add_filter("JPEG", &["jpg", "jpeg"])
            .save_file()
        {
            if let Err(e) = image_io::save_image(result, &path) {
                self.report("Error saving image", e);
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn save_result(&mut self) {
        let Some(result) = &self.result else {
            return;
        };
        let saved = image_io::encode_png(result)
            .map_err(|e| e.to_string())
            .and_then(|png| crate::web::download(&png, "filtered.png", "image/png"));
        if let Err(e) = saved {
            self.report("Error saving image", e);
        }
    }

    fn process_image(&mut self, ctx: &egui::Context) {
        let Some(source) = &self.source_image else {
            return;
        };
        let start = web_time::Instant::now();
        let processed = pipeline::process(source, &self.params)
            .and_then(|(w, h, bytes)| image_io::rgb_from_raw(w, h, bytes));
        self.processing_time_ms = start.elapsed().as_secs_f64() * 1000.0;

        match processed {
            Ok(img) => {
                let img = DynamicImage::ImageRgb8(img);
                self.preview_texture = Some(load_display_texture(ctx, "preview", &img));
                self.result = Some(img.into_rgb8());
                self.last_error = None;
            }
            Err(e) => {
                self.result = None;
                self.preview_texture = None;
                self.report(self.params.kind.name(), e);
            }
        }
    }
}

impl eframe::App for ImageConvertorApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        #[cfg(target_arch = "wasm32")]
        self.poll_upload(ctx);

        // Top panel: file operations
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui.button("Open Image").clicked() {
                    self.open_image(ctx);
                }
                if ui
                    .add_enabled(self.result.is_some(), egui::Button::new("Save Result"))
                    .clicked()
                {
                    self.save_result();
                }
                ui.separator();

                ui.checkbox(&mut self.auto_process, "Auto");
                if ui.button("Process").clicked() {
                    self.needs_process = true;
                }
                if ui.button("Reset").clicked() {
                    self.params = FilterParams::default();
                    self.needs_process = true;
                }

                ui.separator();
                if let Some(err) = &self.last_error {
                    ui.colored_label(egui::Color32::from_rgb(255, 90, 90), err);
                } else if let (Some(name), Some(result)) = (&self.source_name, &self.result) {
                    ui.label(format!(
                        "{name} | {}x{} | {:.0}ms",
                        result.width(),
                        result.height(),
                        self.processing_time_ms
                    ));
                }
            });
        });

        // Left panel: filter selection
        egui::SidePanel::left("controls")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                egui::ScrollArea::vertical().show(ui, |ui| {
                    let mut changed = false;
                    changed |= ui_filter_list(ui, &mut self.params);
                    changed |= ui_adjustment(ui, &mut self.params);
                    ui_curve_preview(ui, &self.params);

                    if changed && self.auto_process {
                        self.needs_process = true;
                    }
                });
            });

        if self.needs_process && self.source_image.is_some() {
            self.process_image(ctx);
            self.needs_process = false;
        }

        // Central panel: original and filtered side by side
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(source) = &self.source_texture else {
                ui.centered_and_justified(|ui| {
                    ui.label("Upload an image to begin");
                });
                return;
            };
            let half = egui::vec2(ui.available_width() / 2.0 - 8.0, ui.available_height() - 24.0);
            ui.horizontal_top(|ui| {
                ui.vertical(|ui| {
                    ui.label("Original Image");
                    show_scaled(ui, source, half);
                });
                ui.vertical(|ui| {
                    ui.label("Filtered Image");
                    if let Some(tex) = &self.preview_texture {
                        show_scaled(ui, tex, half);
                    }
                });
            });
        });
    }
}

fn show_scaled(ui: &mut egui::Ui, tex: &egui::TextureHandle, available: egui::Vec2) {
    let size = tex.size_vec2();
    let scale = f32::min(available.x / size.x, available.y / size.y).min(1.0);
    ui.image(egui::load::SizedTexture::new(tex.id(), size * scale));
}

// --- UI Section Builders ---

fn ui_filter_list(ui: &mut egui::Ui, params: &mut FilterParams) -> bool {
    let mut changed = false;
    egui::CollapsingHeader::new("Enhance Type")
        .default_open(true)
        .show(ui, |ui| {
            for &kind in FilterKind::ALL {
                changed |= ui.radio_value(&mut params.kind, kind, kind.name()).changed();
            }
        });
    changed
}

fn ui_adjustment(ui: &mut egui::Ui, params: &mut FilterParams) -> bool {
    if !params.kind.is_adjustable() {
        return false;
    }
    let mut changed = false;
    egui::CollapsingHeader::new("Adjustment")
        .default_open(true)
        .show(ui, |ui| match params.kind {
            FilterKind::Contrast => {
                changed |= ui
                    .add(egui::Slider::new(&mut params.contrast, CONTRAST_RANGE).text("Contrast"))
                    .changed();
            }
            FilterKind::Brightness => {
                changed |= ui
                    .add(
                        egui::Slider::new(&mut params.brightness, BRIGHTNESS_RANGE)
                            .text("Brightness"),
                    )
                    .changed();
            }
            FilterKind::Blur => {
                changed |= ui
                    .add(egui::Slider::new(&mut params.blur_sigma, BLUR_SIGMA_RANGE).text("Blurring"))
                    .changed();
            }
            _ => {}
        });
    changed
}

fn ui_curve_preview(ui: &mut egui::Ui, params: &FilterParams) {
    let Some(mode) = params.kind.seasonal_mode() else {
        return;
    };
    egui::CollapsingHeader::new("Color Curves")
        .default_open(true)
        .show(ui, |ui| {
            curve_display::draw_curves(ui, mode);
        });
}
