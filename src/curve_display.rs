use eframe::egui;

use image_convertor::curve::{LookupTable, TABLE_SIZE};
use image_convertor::filter::channel::Channel;
use image_convertor::filter::seasonal::SeasonalMode;

const PLOT_BG: egui::Color32 = egui::Color32::from_rgb(10, 10, 14);
const PLOT_GRID: egui::Color32 = egui::Color32::from_rgb(32, 32, 40);
const PLOT_BORDER: egui::Color32 = egui::Color32::from_rgb(48, 48, 56);
const IDENTITY: egui::Color32 = egui::Color32::from_rgb(90, 90, 90);
const TRACE_RED: egui::Color32 = egui::Color32::from_rgb(255, 80, 70);
const TRACE_BLUE: egui::Color32 = egui::Color32::from_rgb(70, 150, 255);
const LABEL_DIM: egui::Color32 = egui::Color32::from_rgb(110, 110, 120);

/// Square plot of the two remapped channels for `mode`, with the identity
/// line as reference. Green is unchanged and drawn as the identity.
pub fn draw_curves(ui: &mut egui::Ui, mode: SeasonalMode) {
    let side = ui.available_width().min(260.0);
    let (response, painter) =
        ui.allocate_painter(egui::vec2(side, side), egui::Sense::hover());
    let rect = response.rect;

    draw_plot_bg(&painter, rect);

    painter.line_segment(
        [rect.left_bottom(), rect.right_top()],
        egui::Stroke::new(1.0, IDENTITY),
    );

    let mut traces = Vec::new();
    for (ch, curve) in mode.assignments() {
        let table = match curve.table() {
            Ok(t) => t,
            Err(e) => {
                log::warn!("Cannot plot {} curve: {e}", curve.name());
                continue;
            }
        };
        let color = match ch {
            Channel::Red => TRACE_RED,
            _ => TRACE_BLUE,
        };
        draw_table(&painter, rect, &table, color);
        traces.push((ch, curve.name(), table, color));
    }

    for (row, (ch, name, _, color)) in traces.iter().enumerate() {
        painter.text(
            egui::pos2(rect.min.x + 4.0, rect.min.y + 4.0 + row as f32 * 11.0),
            egui::Align2::LEFT_TOP,
            format!("{}: {name}", ch.name()),
            egui::FontId::monospace(9.0),
            *color,
        );
    }
    painter.text(
        egui::pos2(rect.max.x - 4.0, rect.max.y - 4.0),
        egui::Align2::RIGHT_BOTTOM,
        mode.name(),
        egui::FontId::monospace(9.0),
        LABEL_DIM,
    );

    // Table values under the pointer
    if let Some(pos) = response.hover_pos() {
        if rect.contains(pos) {
            let t = ((pos.x - rect.min.x) / rect.width()).clamp(0.0, 1.0);
            let level = (t * (TABLE_SIZE - 1) as f32).round() as usize;
            egui::show_tooltip_at_pointer(
                ui.ctx(),
                ui.layer_id(),
                ui.id().with("curve_tip"),
                |ui: &mut egui::Ui| {
                    ui.label(egui::RichText::new(format!("in {level}")).monospace().strong());
                    for (ch, _, table, color) in &traces {
                        ui.label(
                            egui::RichText::new(format!(
                                "{} -> {} ({:.2})",
                                ch.name(),
                                table.map(level as u8),
                                table.get(level)
                            ))
                            .monospace()
                            .color(*color),
                        );
                    }
                },
            );
        }
    }
}

fn draw_plot_bg(painter: &egui::Painter, rect: egui::Rect) {
    painter.rect_filled(rect, 2.0, PLOT_BG);
    painter.rect(
        rect,
        2.0,
        egui::Color32::TRANSPARENT,
        egui::Stroke::new(1.0, PLOT_BORDER),
        egui::StrokeKind::Inside,
    );

    // Quarter divisions: 64, 128, 192
    for i in 1..4 {
        let f = i as f32 / 4.0;
        let x = rect.min.x + rect.width() * f;
        let y = rect.max.y - rect.height() * f;
        painter.line_segment(
            [egui::pos2(x, rect.min.y), egui::pos2(x, rect.max.y)],
            egui::Stroke::new(0.5, PLOT_GRID),
        );
        painter.line_segment(
            [egui::pos2(rect.min.x, y), egui::pos2(rect.max.x, y)],
            egui::Stroke::new(0.5, PLOT_GRID),
        );
    }
}

fn draw_table(painter: &egui::Painter, rect: egui::Rect, table: &LookupTable, color: egui::Color32) {
    let max = (TABLE_SIZE - 1) as f32;
    let points: Vec<egui::Pos2> = table
        .entries()
        .iter()
        .enumerate()
        .map(|(i, &v)| {
            let x = rect.min.x + i as f32 / max * rect.width();
            let y = rect.max.y - (v as f32 / max).clamp(0.0, 1.0) * rect.height();
            egui::pos2(x, y)
        })
        .collect();
    painter.add(egui::Shape::line(points, egui::Stroke::new(1.5, color)));
}
