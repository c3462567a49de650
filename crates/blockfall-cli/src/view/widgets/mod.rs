use ratatui::{layout::Rect, widgets::Block as BlockWidget};

pub use self::{
    board_display::*, cell_display::*, key_binding_display::*, session_display::*,
    stats_display::*,
};

mod board_display;
mod cell_display;
mod key_binding_display;
mod session_display;
mod stats_display;

mod color {
    use ratatui::style::Color;

    // Board palette
    pub const VERMILION: Color = Color::Rgb(255, 87, 51);
    pub const CRIMSON: Color = Color::Rgb(199, 0, 57);
    pub const CLARET: Color = Color::Rgb(144, 12, 63);
    pub const PLUM: Color = Color::Rgb(88, 24, 69);
    pub const AMBER: Color = Color::Rgb(255, 195, 0);
    pub const TEA_GREEN: Color = Color::Rgb(218, 247, 166);
    pub const PINK: Color = Color::Rgb(255, 51, 166);
    pub const GRAY: Color = Color::Rgb(127, 127, 127);
    pub const BLACK: Color = Color::Rgb(0, 0, 0);
    pub const WHITE: Color = Color::Rgb(255, 255, 255);
}

pub mod style {
    use ratatui::style::{Color, Style};

    use crate::view::widgets::color;

    const fn fg_bg(fg: Color, bg: Color) -> Style {
        Style::new().fg(fg).bg(bg)
    }

    const fn bg_only(color: Color) -> Style {
        Style::new().fg(color).bg(color)
    }

    pub const DEFAULT: Style = fg_bg(color::WHITE, color::BLACK);
    pub const EMPTY_DOT: Style = fg_bg(color::GRAY, color::BLACK);

    pub const I_CELL: Style = bg_only(color::VERMILION);
    pub const J_CELL: Style = bg_only(color::CRIMSON);
    pub const L_CELL: Style = bg_only(color::CLARET);
    pub const O_CELL: Style = bg_only(color::PLUM);
    pub const S_CELL: Style = bg_only(color::AMBER);
    pub const T_CELL: Style = bg_only(color::TEA_GREEN);
    pub const Z_CELL: Style = bg_only(color::PINK);
}

fn block_vertical_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.height - inner_rect.height
}

fn block_horizontal_margin(block: Option<&BlockWidget>) -> u16 {
    let dummy_rect = Rect::new(0, 0, 100, 100);
    let inner_rect = block.map_or(dummy_rect, |block| block.inner(dummy_rect));
    dummy_rect.width - inner_rect.width
}
