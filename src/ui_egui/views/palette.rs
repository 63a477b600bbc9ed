use egui::{Color32, Visuals};

fn with_alpha(color: Color32, alpha: u8) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), alpha)
}

fn blend(a: Color32, b: Color32, t: f32) -> Color32 {
    let t = t.clamp(0.0, 1.0);
    let lerp = |c1: u8, c2: u8| -> u8 { ((c1 as f32 * (1.0 - t)) + (c2 as f32 * t)).round() as u8 };
    Color32::from_rgb(lerp(a.r(), b.r()), lerp(a.g(), b.g()), lerp(a.b(), b.b()))
}

#[derive(Clone, Copy)]
pub(crate) struct WeekGridPalette {
    pub column_bg: Color32,
    pub today_bg: Color32,
    pub header_bg: Color32,
    pub header_text: Color32,
    pub hour_line: Color32,
    pub half_hour_line: Color32,
    pub time_text: Color32,
    pub border: Color32,
    pub event_bg: Color32,
    pub event_border: Color32,
    pub event_text: Color32,
    pub now_line: Color32,
}

impl WeekGridPalette {
    pub fn from_visuals(visuals: &Visuals) -> Self {
        let base = visuals.extreme_bg_color;
        let panel = visuals.panel_fill;
        let border = visuals.widgets.noninteractive.bg_stroke.color;
        let accent = visuals.selection.bg_fill;
        let text = visuals.text_color();

        Self {
            column_bg: blend(base, panel, 0.3),
            today_bg: blend(base, accent, 0.12),
            header_bg: blend(panel, accent, 0.25),
            header_text: text,
            hour_line: border,
            half_hour_line: with_alpha(border, 90),
            time_text: visuals.weak_text_color(),
            border,
            event_bg: if visuals.dark_mode {
                Color32::from_rgb(70, 110, 160)
            } else {
                Color32::from_rgb(100, 150, 200)
            },
            event_border: with_alpha(Color32::WHITE, 140),
            event_text: Color32::WHITE,
            now_line: Color32::from_rgb(255, 100, 100),
        }
    }
}
