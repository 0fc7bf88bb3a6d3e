//! Grid of recommended activity cards

use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use skyplan_core::{category_tone, ActivityRecommendation, Theme};

use super::Component;
use crate::palette::{badge_colors, Palette};

pub const GRID_TITLE: &str = "Recommended Activities";

pub struct ActivityGridProps<'a> {
    pub activities: &'a [ActivityRecommendation],
    /// Index of the first activity to show; rounded down to a row start
    pub scroll: usize,
    pub theme: Theme,
    pub palette: &'a Palette,
}

/// Remembers the layout of the last frame so paging can move by whole rows
#[derive(Debug)]
pub struct ActivityGrid {
    columns: usize,
    visible_rows: usize,
}

impl Default for ActivityGrid {
    fn default() -> Self {
        Self {
            columns: 1,
            visible_rows: 1,
        }
    }
}

impl ActivityGrid {
    pub const CARD_HEIGHT: u16 = 6;

    pub fn new() -> Self {
        Self::default()
    }

    /// Cards per row for a given width
    pub fn columns_for(width: u16) -> usize {
        match width {
            w if w >= 120 => 3,
            w if w >= 70 => 2,
            _ => 1,
        }
    }

    /// Scroll step for one row
    pub fn row_step(&self) -> isize {
        self.columns as isize
    }

    /// Scroll step for one screenful
    pub fn page_step(&self) -> isize {
        (self.columns * self.visible_rows.max(1)) as isize
    }

    fn render_card(
        frame: &mut Frame,
        area: Rect,
        activity: &ActivityRecommendation,
        theme: Theme,
        palette: &Palette,
    ) {
        let (badge_fg, badge_bg) = badge_colors(category_tone(&activity.category), theme);

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .style(Style::default().bg(palette.surface));

        let lines = vec![
            Line::from(vec![
                Span::styled(activity.name.as_str(), Style::default().fg(palette.text).bold()),
                Span::raw(" "),
                Span::styled(
                    format!(" {} ", activity.category),
                    Style::default().fg(badge_fg).bg(badge_bg),
                ),
            ]),
            Line::from(Span::styled(
                activity.description.as_str(),
                Style::default().fg(palette.muted),
            )),
            Line::from(vec![
                Span::styled("★ ", Style::default().fg(palette.star)),
                Span::styled(format!("{}", activity.rating), Style::default().fg(palette.text)),
                Span::styled("  ·  ", Style::default().fg(palette.muted)),
                Span::styled(activity.duration.as_str(), Style::default().fg(palette.text)),
            ]),
            Line::from(Span::styled(
                format!("Best time: {}", activity.best_time),
                Style::default().fg(palette.accent),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

impl Component for ActivityGrid {
    type Props<'a> = ActivityGridProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let palette = props.palette;
        let total = props.activities.len();

        let [title_row, cards_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Min(0)]).areas(area);

        self.columns = Self::columns_for(cards_area.width);
        // a short area still shows one clipped row
        self.visible_rows = ((cards_area.height / Self::CARD_HEIGHT) as usize).max(1);

        let start = (props.scroll.min(total.saturating_sub(1)) / self.columns) * self.columns;
        let end = (start + self.columns * self.visible_rows).min(total);

        let mut title = vec![Span::styled(
            GRID_TITLE,
            Style::default().fg(palette.text).bold(),
        )];
        if start > 0 || end < total {
            title.push(Span::styled(
                format!("  {}-{} of {}", start + 1, end, total),
                Style::default().fg(palette.muted),
            ));
        }
        frame.render_widget(Paragraph::new(Line::from(title)), title_row);

        if total == 0 {
            let empty = Line::from(Span::styled(
                "No activities recommended for this weather.",
                Style::default().fg(palette.muted),
            ));
            frame.render_widget(Paragraph::new(empty), cards_area);
            return;
        }

        let rows = Layout::vertical(vec![
            Constraint::Length(Self::CARD_HEIGHT);
            self.visible_rows
        ])
        .split(cards_area);
        let column_constraints = vec![Constraint::Ratio(1, self.columns as u32); self.columns];

        for (row_index, chunk) in props.activities[start..end].chunks(self.columns).enumerate() {
            let cells = Layout::horizontal(column_constraints.clone()).split(rows[row_index]);
            for (cell, activity) in cells.iter().zip(chunk) {
                Self::render_card(frame, *cell, activity, props.theme, palette);
            }
        }
    }
}
