//! Modal overlay helpers: background dimming and centering
//!
//! Call [`render_modal`] after the page has been drawn; it dims everything
//! rendered so far and clears the modal area for its content.

use ratatui::{buffer::Buffer, layout::Rect, style::Color, widgets::Widget, Frame};

/// Background dim factor (0.0 = unchanged, 1.0 = black)
pub const DIM_FACTOR: f32 = 0.6;

/// Dim the page and fill `area` with `bg`
pub fn render_modal(frame: &mut Frame, area: Rect, bg: Color) {
    dim_buffer(frame.buffer_mut(), DIM_FACTOR);
    frame.render_widget(BgFill(bg), area);
}

/// Fills an area with a background color
struct BgFill(Color);

impl Widget for BgFill {
    fn render(self, area: Rect, buf: &mut Buffer) {
        for y in area.y..area.y.saturating_add(area.height) {
            for x in area.x..area.x.saturating_add(area.width) {
                buf[(x, y)].set_bg(self.0);
                buf[(x, y)].set_symbol(" ");
            }
        }
    }
}

/// Scale every cell's colors toward black
///
/// Pictographic emoji carry their own colors, so they are blanked instead.
pub fn dim_buffer(buffer: &mut Buffer, factor: f32) {
    let scale = 1.0 - factor.clamp(0.0, 1.0);

    for cell in buffer.content.iter_mut() {
        if cell.symbol().chars().any(is_pictograph) {
            cell.set_symbol(" ");
        }
        cell.fg = dim_color(cell.fg, scale);
        cell.bg = dim_color(cell.bg, scale);
    }
}

fn is_pictograph(c: char) -> bool {
    matches!(c as u32, 0x1F300..=0x1F5FF | 0x1F600..=0x1F64F | 0x1F900..=0x1F9FF)
}

fn dim_color(color: Color, scale: f32) -> Color {
    let dim = |v: u8| ((v as f32) * scale) as u8;
    match color {
        Color::Rgb(r, g, b) => Color::Rgb(dim(r), dim(g), dim(b)),
        Color::White => Color::Rgb(dim(255), dim(255), dim(255)),
        Color::Gray => Color::Rgb(dim(229), dim(229), dim(229)),
        Color::DarkGray => Color::Rgb(dim(127), dim(127), dim(127)),
        // Reset and the remaining named colors are left to the terminal
        other => other,
    }
}

/// A `width` x `height` rectangle centered in `area`, kept one cell inside it
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width.saturating_sub(2));
    let height = height.min(area.height.saturating_sub(2));
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}
