use blockfall_engine::GameSession;
use ratatui::{
    layout::{Constraint, Flex, Layout},
    prelude::{Buffer, Rect},
    text::Line,
    widgets::{Block, Padding, Widget},
};

use crate::view::widgets::{BoardDisplay, StatsDisplay, style};

#[derive(Debug)]
pub struct SessionDisplay<'a> {
    session: &'a GameSession,
}

impl<'a> SessionDisplay<'a> {
    pub fn new(session: &'a GameSession) -> Self {
        Self { session }
    }

    pub fn height(&self) -> u16 {
        BoardDisplay::new(self.session.board())
            .block(Block::bordered())
            .height()
    }
}

impl Widget for SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        Widget::render(&self, area, buf);
    }
}

impl Widget for &SessionDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer)
    where
        Self: Sized,
    {
        let style = style::DEFAULT;

        let game_board = BoardDisplay::new(self.session.board())
            .falling_piece(*self.session.falling_piece())
            .block(Block::bordered().style(style));
        let game_stats = StatsDisplay::new(self.session.stats()).block(
            Block::bordered()
                .title(Line::from("STATS").centered())
                .padding(Padding::symmetric(1, 0))
                .style(style),
        );

        let [board_column, stats_column] = Layout::horizontal([
            Constraint::Length(game_board.width()),
            Constraint::Length(game_stats.width()),
        ])
        .flex(Flex::Center)
        .spacing(1)
        .areas(area);

        let [board_area] =
            Layout::vertical([Constraint::Length(game_board.height())]).areas(board_column);
        let [stats_area] =
            Layout::vertical([Constraint::Length(game_stats.height())]).areas(stats_column);

        game_board.render(board_area, buf);
        game_stats.render(stats_area, buf);
    }
}
