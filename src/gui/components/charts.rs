// src/gui/components/charts.rs
//
// Painter-drawn charts: horizontal bars, line and scatter. Every chart is
// sized to the available width and never scrolls on its own.

use eframe::egui::{
    self, Align2, FontId, Pos2, Rect, RichText, Sense, Shape, Stroke, pos2, vec2,
};

use crate::gui::theme;
use crate::report::{ Axes, BarPanel, Plot, Point };

const ROW_H: f32 = 20.0;
const LABEL_W: f32 = 230.0;
const MAX_W: f32 = 960.0;
const XY_H: f32 = 300.0;

pub fn draw(ui: &mut egui::Ui, plot: &Plot) {
    match plot {
        Plot::None => {}
        Plot::Bars { axes, panels } => {
            for panel in panels {
                bar_panel(ui, axes, panel);
            }
        }
        Plot::Line { axes, points } => xy_chart(ui, axes, points, true),
        Plot::Scatter { axes, points } => xy_chart(ui, axes, points, false),
    }
}

fn fmt_value(v: f64) -> String {
    if v.fract() == 0.0 { format!("{v:.0}") } else { format!("{v:.2}") }
}

fn bar_panel(ui: &mut egui::Ui, axes: &Axes, panel: &BarPanel) {
    if let Some(title) = &panel.title {
        ui.label(RichText::new(title).strong());
    }
    // the section summary carries the empty note
    if panel.bars.is_empty() {
        return;
    }

    let max = panel
        .max
        .unwrap_or_else(|| panel.bars.iter().map(|(_, v)| *v).fold(0.0, f64::max))
        .max(f64::EPSILON);

    let width = ui.available_width().min(MAX_W);
    let height = panel.bars.len() as f32 * ROW_H + 26.0;
    let (resp, painter) = ui.allocate_painter(vec2(width, height), Sense::hover());
    let rect = resp.rect;

    let font = FontId::proportional(12.0);
    let text = ui.visuals().text_color();
    let left = rect.left() + LABEL_W;
    let plot_w = (rect.right() - left - 64.0).max(10.0);
    let bottom = rect.top() + panel.bars.len() as f32 * ROW_H;

    for (i, (label, v)) in panel.bars.iter().enumerate() {
        let top = rect.top() + i as f32 * ROW_H;
        let mid = top + ROW_H / 2.0;
        painter.text(pos2(left - 6.0, mid), Align2::RIGHT_CENTER, label, font.clone(), text);

        let w = (v / max).clamp(0.0, 1.0) as f32 * plot_w;
        let bar = Rect::from_min_size(pos2(left, top + 3.0), vec2(w, ROW_H - 6.0));
        painter.rect_filled(bar, 2.0, theme::BAR);
        painter.text(pos2(left + w + 4.0, mid), Align2::LEFT_CENTER, fmt_value(*v), font.clone(), text);
    }

    let axis = Stroke::new(1.0, theme::AXIS);
    painter.line_segment([pos2(left, rect.top()), pos2(left, bottom)], axis);
    painter.line_segment([pos2(left, bottom), pos2(left + plot_w, bottom)], axis);
    painter.text(pos2(left + plot_w / 2.0, bottom + 13.0), Align2::CENTER_CENTER, axes.x, font.clone(), theme::AXIS);
    painter.text(pos2(rect.left(), bottom + 13.0), Align2::LEFT_CENTER, axes.y, font, theme::AXIS);
}

/// `(lo, hi)` over the values, widened when flat.
fn bounds(values: impl Iterator<Item = f64>) -> (f64, f64) {
    let (lo, hi) = values.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), v| (lo.min(v), hi.max(v)));
    if !lo.is_finite() || !hi.is_finite() {
        (0.0, 1.0)
    } else if (hi - lo).abs() < f64::EPSILON {
        (lo - 1.0, hi + 1.0)
    } else {
        (lo, hi)
    }
}

fn xy_chart(ui: &mut egui::Ui, axes: &Axes, points: &[Point], connect: bool) {
    if points.is_empty() {
        return;
    }

    let (x0, x1) = bounds(points.iter().map(|p| p.x));
    let (y0, y1) = bounds(points.iter().map(|p| p.y).chain(std::iter::once(0.0)));

    let width = ui.available_width().min(MAX_W);
    let (resp, painter) = ui.allocate_painter(vec2(width, XY_H), Sense::hover());
    let rect = resp.rect;
    let area = Rect::from_min_max(
        pos2(rect.left() + 64.0, rect.top() + 8.0),
        pos2(rect.right() - 16.0, rect.bottom() - 40.0),
    );

    let to_screen = |p: &Point| -> Pos2 {
        pos2(
            area.left() + ((p.x - x0) / (x1 - x0)) as f32 * area.width(),
            area.bottom() - ((p.y - y0) / (y1 - y0)) as f32 * area.height(),
        )
    };

    let font = FontId::proportional(11.0);
    let grid = Stroke::new(1.0, theme::GRID);
    for i in 0..=4 {
        let t = i as f32 / 4.0;
        let y = area.bottom() - t * area.height();
        painter.line_segment([pos2(area.left(), y), pos2(area.right(), y)], grid);
        let label = format!("{:.1}", y0 + (y1 - y0) * t as f64);
        painter.text(pos2(area.left() - 6.0, y), Align2::RIGHT_CENTER, label, font.clone(), theme::AXIS);

        let x = area.left() + t * area.width();
        let label = format!("{:.0}", x0 + (x1 - x0) * t as f64);
        painter.text(pos2(x, area.bottom() + 10.0), Align2::CENTER_CENTER, label, font.clone(), theme::AXIS);
    }

    let axis = Stroke::new(1.0, theme::AXIS);
    painter.line_segment([area.left_bottom(), area.right_bottom()], axis);
    painter.line_segment([area.left_bottom(), area.left_top()], axis);

    let screen: Vec<Pos2> = points.iter().map(to_screen).collect();
    let color = if connect { theme::LINE } else { theme::POINT };
    if connect && screen.len() > 1 {
        painter.add(Shape::line(screen.clone(), Stroke::new(2.0, theme::LINE)));
    }
    for pos in &screen {
        painter.circle_filled(*pos, if connect { 2.0 } else { 3.5 }, color);
    }

    let label_font = FontId::proportional(12.0);
    painter.text(
        pos2(area.center().x, rect.bottom() - 10.0),
        Align2::CENTER_CENTER,
        axes.x,
        label_font.clone(),
        theme::AXIS,
    );
    painter.text(pos2(rect.left(), rect.top() + 2.0), Align2::LEFT_TOP, axes.y, label_font.clone(), theme::AXIS);

    // nearest point readout
    if let Some(hover) = resp.hover_pos() {
        let nearest = screen
            .iter()
            .zip(points)
            .map(|(pos, p)| (pos.distance(hover), *pos, p))
            .min_by(|a, b| a.0.total_cmp(&b.0));
        if let Some((dist, pos, p)) = nearest {
            if dist < 10.0 {
                painter.circle_stroke(pos, 5.0, Stroke::new(1.5, ui.visuals().strong_text_color()));
                let text = format!("{}, {}", fmt_value(p.x), fmt_value(p.y));
                painter.text(pos + vec2(8.0, -8.0), Align2::LEFT_BOTTOM, text, label_font, ui.visuals().strong_text_color());
            }
        }
    }
}
