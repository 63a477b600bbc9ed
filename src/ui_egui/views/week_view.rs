use chrono::{Datelike, Local, Timelike};
use egui::{Align2, FontId, Margin, Pos2, Rect, Sense, Stroke, Vec2};

use super::palette::WeekGridPalette;
use crate::models::day::DayOfWeek;
use crate::models::event::EventRecord;
use crate::models::time_slot::{slots_for_day, SLOTS_PER_HOUR};
use crate::services::layout::{BlockRect, DayColumn};
use crate::services::planner::WeeklyPlanner;

const TIME_LABEL_WIDTH: f32 = 64.0;
const COLUMN_SPACING: f32 = 2.0;
const HEADER_HEIGHT: f32 = 32.0;

pub struct WeekView;

impl WeekView {
    pub fn show(ui: &mut egui::Ui, planner: &WeeklyPlanner) {
        let palette = WeekGridPalette::from_visuals(ui.visuals());
        let today = DayOfWeek::from(Local::now().weekday());
        let geometry = planner.column(DayOfWeek::Sunday).geometry();

        Self::render_header(ui, &palette, geometry.width, today);

        egui::ScrollArea::both()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                let size = Vec2::new(
                    TIME_LABEL_WIDTH + 7.0 * (geometry.width + COLUMN_SPACING),
                    geometry.height,
                );
                let (grid_rect, _) = ui.allocate_exact_size(size, Sense::hover());

                Self::render_time_labels(ui, &palette, grid_rect, planner);

                for column in planner.columns() {
                    let column_rect = Self::column_rect(grid_rect, column);
                    Self::render_column(ui, &palette, column_rect, column, column.day() == today);
                }

                Self::draw_current_time_indicator(ui, &palette, grid_rect, planner, today);
            });
    }

    fn render_header(
        ui: &mut egui::Ui,
        palette: &WeekGridPalette,
        col_width: f32,
        today: DayOfWeek,
    ) {
        ui.horizontal(|ui| {
            ui.spacing_mut().item_spacing.x = 0.0;
            ui.add_space(TIME_LABEL_WIDTH);

            for day in DayOfWeek::ALL {
                ui.add_space(COLUMN_SPACING);
                ui.allocate_ui_with_layout(
                    Vec2::new(col_width, HEADER_HEIGHT),
                    egui::Layout::top_down(egui::Align::Center),
                    |cell_ui| {
                        let border = if day == today {
                            palette.now_line
                        } else {
                            palette.border
                        };
                        egui::Frame::none()
                            .fill(palette.header_bg)
                            .rounding(egui::Rounding::same(6.0))
                            .stroke(Stroke::new(1.0, border))
                            .inner_margin(Margin::symmetric(6.0, 6.0))
                            .show(cell_ui, |content_ui| {
                                content_ui.set_min_width(col_width - 12.0);
                                content_ui.vertical_centered(|ui| {
                                    ui.label(
                                        egui::RichText::new(day.name())
                                            .size(13.0)
                                            .color(palette.header_text)
                                            .strong(),
                                    );
                                });
                            });
                    },
                );
            }
        });
        ui.add_space(4.0);
    }

    fn column_rect(grid_rect: Rect, column: &DayColumn) -> Rect {
        let geometry = column.geometry();
        let left = grid_rect.left()
            + TIME_LABEL_WIDTH
            + COLUMN_SPACING
            + column.day().index() as f32 * (geometry.width + COLUMN_SPACING);
        Rect::from_min_size(
            Pos2::new(left, grid_rect.top()),
            Vec2::new(geometry.width, geometry.height),
        )
    }

    fn render_time_labels(
        ui: &egui::Ui,
        palette: &WeekGridPalette,
        grid_rect: Rect,
        planner: &WeeklyPlanner,
    ) {
        let geometry = planner.column(DayOfWeek::Sunday).geometry();
        let painter = ui.painter();

        for slot in slots_for_day().step_by(SLOTS_PER_HOUR as usize) {
            let y = grid_rect.top() + geometry.top_for(slot.index());
            painter.text(
                Pos2::new(grid_rect.left() + TIME_LABEL_WIDTH - 6.0, y),
                Align2::RIGHT_TOP,
                slot.label(),
                FontId::proportional(11.0),
                palette.time_text,
            );
        }
    }

    fn render_column(
        ui: &egui::Ui,
        palette: &WeekGridPalette,
        column_rect: Rect,
        column: &DayColumn,
        is_today: bool,
    ) {
        let geometry = column.geometry();
        let painter = ui.painter_at(column_rect);

        let bg = if is_today {
            palette.today_bg
        } else {
            palette.column_bg
        };
        painter.rect_filled(column_rect, 4.0, bg);

        for slot in slots_for_day().step_by(2) {
            let y = column_rect.top() + geometry.top_for(slot.index());
            let stroke = if slot.minute() == 0 {
                Stroke::new(1.0, palette.hour_line)
            } else {
                Stroke::new(0.5, palette.half_hour_line)
            };
            painter.line_segment(
                [Pos2::new(column_rect.left(), y), Pos2::new(column_rect.right(), y)],
                stroke,
            );
        }

        for (handle, rect) in column.handles().zip(column.rendered_rects()) {
            let Some(block) = column.block(handle) else {
                continue;
            };
            let screen_rect = Self::to_screen(column_rect, rect);
            Self::render_block(ui, palette, column_rect, screen_rect, block.record());

            let id = egui::Id::new(("event_block", handle.day, handle.index));
            ui.interact(screen_rect.intersect(column_rect), id, Sense::hover())
                .on_hover_text(format_event_tooltip(block.record()));
        }

        painter.rect_stroke(column_rect, 4.0, Stroke::new(1.0, palette.border));
    }

    fn to_screen(column_rect: Rect, rect: BlockRect) -> Rect {
        Rect::from_min_max(
            Pos2::new(column_rect.left() + rect.left, column_rect.top() + rect.top),
            Pos2::new(column_rect.left() + rect.right, column_rect.top() + rect.bottom),
        )
    }

    fn render_block(
        ui: &egui::Ui,
        palette: &WeekGridPalette,
        column_rect: Rect,
        screen_rect: Rect,
        record: &EventRecord,
    ) {
        let block_rect = screen_rect.shrink2(Vec2::new(1.0, 0.0));
        let painter = ui.painter_at(block_rect.intersect(column_rect));

        painter.rect_filled(block_rect, 3.0, palette.event_bg);
        painter.rect_stroke(block_rect, 3.0, Stroke::new(1.0, palette.event_border));

        let lines = [
            (record.name().to_string(), 12.0),
            (record.location().to_string(), 11.0),
            (record.time_range_label(), 10.0),
        ];

        let mut y = block_rect.top() + 2.0;
        for (text, size) in lines {
            if text.is_empty() {
                continue;
            }
            painter.text(
                Pos2::new(block_rect.left() + 4.0, y),
                Align2::LEFT_TOP,
                text,
                FontId::proportional(size),
                palette.event_text,
            );
            y += size + 3.0;
        }
    }

    /// Line across today's column at the current time of day
    fn draw_current_time_indicator(
        ui: &egui::Ui,
        palette: &WeekGridPalette,
        grid_rect: Rect,
        planner: &WeeklyPlanner,
        today: DayOfWeek,
    ) {
        let column = planner.column(today);
        let column_rect = Self::column_rect(grid_rect, column);
        let now = Local::now().time();
        let slots = (now.hour() * 60 + now.minute()) as f32 / 15.0;
        let y = column_rect.top() + column.geometry().height_step() * slots;

        let painter = ui.painter();
        painter.circle_filled(Pos2::new(column_rect.left() - 4.0, y), 3.0, palette.now_line);
        painter.line_segment(
            [Pos2::new(column_rect.left(), y), Pos2::new(column_rect.right(), y)],
            Stroke::new(2.0, palette.now_line),
        );
    }
}

/// Hover text for a block: name, location and time range
pub fn format_event_tooltip(record: &EventRecord) -> String {
    let mut lines = vec![format!("📌 {}", record.name())];
    if !record.location().is_empty() {
        lines.push(format!("📍 {}", record.location()));
    }
    lines.push(format!("🕐 {} ({})", record.time_range_label(), record.day()));
    lines.join("\n")
}
