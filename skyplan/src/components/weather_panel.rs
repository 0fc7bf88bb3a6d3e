//! Current conditions for the looked-up city

use ratatui::{
    layout::{Alignment, Rect},
    style::{Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use skyplan_core::{condition_icon, WeatherSnapshot};

use super::Component;
use crate::palette::Palette;

pub struct WeatherPanel;

pub struct WeatherPanelProps<'a> {
    pub weather: &'a WeatherSnapshot,
    pub palette: &'a Palette,
}

impl WeatherPanel {
    pub const HEIGHT: u16 = 7;
}

fn stat<'a>(label: &'a str, value: String, palette: &Palette) -> [Span<'a>; 3] {
    [
        Span::styled(label, Style::default().fg(palette.muted)),
        Span::styled(value, Style::default().fg(palette.text).bold()),
        Span::raw("    "),
    ]
}

impl Component for WeatherPanel {
    type Props<'a> = WeatherPanelProps<'a>;

    fn render(&mut self, frame: &mut Frame, area: Rect, props: Self::Props<'_>) {
        let weather = props.weather;
        let palette = props.palette;

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(palette.border))
            .title(format!(" {} ", weather.city))
            .title_style(Style::default().fg(palette.text).bold())
            .title_alignment(Alignment::Center)
            .style(Style::default().bg(palette.surface));

        let headline = Line::from(vec![
            Span::raw(condition_icon(&weather.condition)),
            Span::raw(" "),
            Span::styled(
                format!("{}°C", weather.temperature),
                Style::default().fg(palette.accent).bold(),
            ),
            Span::raw("  "),
            Span::styled(weather.condition.as_str(), Style::default().fg(palette.text)),
        ])
        .centered();

        let feels_like = Line::from(Span::styled(
            format!("Feels like {}°C", weather.feels_like()),
            Style::default().fg(palette.muted),
        ))
        .centered();

        let description = Line::from(Span::styled(
            weather.description.as_str(),
            Style::default().fg(palette.text).italic(),
        ))
        .centered();

        let stats = Line::from(
            [
                stat("Humidity ", format!("{}%", weather.humidity), palette),
                stat("Wind ", format!("{} km/h", weather.wind_speed), palette),
                stat("Visibility ", format!("{} km", weather.visibility), palette),
            ]
            .concat(),
        )
        .centered();

        let lines = vec![headline, feels_like, description, Line::default(), stats];
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::RenderHarness;
    use skyplan_core::testing::sample_weather;
    use skyplan_core::Theme;

    #[test]
    fn test_renders_all_readings() {
        let mut render = RenderHarness::new(80, WeatherPanel::HEIGHT);
        let weather = sample_weather();

        let output = render.render_to_string_plain(|frame| {
            let props = WeatherPanelProps {
                weather: &weather,
                palette: Palette::for_theme(Theme::Light),
            };
            WeatherPanel.render(frame, frame.area(), props);
        });

        assert!(output.contains("Paris"));
        assert!(output.contains("18°C"));
        assert!(output.contains("Cloudy"));
        assert!(output.contains("Feels like 20°C"));
        assert!(output.contains("Humidity 72%"));
        assert!(output.contains("Wind 14 km/h"));
        assert!(output.contains("Visibility 10 km"));
        assert!(output.contains("Mild and comfortable"));
    }

    #[test]
    fn test_fractional_temperature() {
        let mut render = RenderHarness::new(80, WeatherPanel::HEIGHT);
        let weather = WeatherSnapshot {
            temperature: 26.5,
            condition: "Sunny".into(),
            ..sample_weather()
        };

        let output = render.render_to_string_plain(|frame| {
            let props = WeatherPanelProps {
                weather: &weather,
                palette: Palette::for_theme(Theme::Dark),
            };
            WeatherPanel.render(frame, frame.area(), props);
        });

        assert!(output.contains("26.5°C"));
        assert!(output.contains("Feels like 28.5°C"));
        assert!(output.contains('☀'));
    }
}
