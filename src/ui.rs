//! UI rendering helpers for the terminal user interface.
//!
//! `draw` renders the player card with `ratatui` and returns a `HitMap`
//! describing where each clickable control landed, so mouse events can be
//! mapped back to player actions.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Position, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, Borders, Gauge, Paragraph, Wrap},
};

use crate::app::{Action, App, RepeatMode};
use crate::catalog::Cover;
use crate::config::UiSettings;

const CARD_WIDTH: u16 = 46;
// title, artist, album, gap, progress, times, gap, transport, gap, volume, indicator
const BODY_ROWS: u16 = 11;
const HELP_ROWS: u16 = 5;
const BUTTON_WIDTH: u16 = 5;

// Rendered in this order.
const CONTROLS: [(&str, &str); 11] = [
    ("space/p", "play/pause"),
    ("h/l", "prev/next"),
    ("H/L", "scrub"),
    ("-/+", "volume"),
    ("m", "mute"),
    ("f", "like"),
    ("s", "shuffle"),
    ("r", "repeat"),
    ("1-9", "track"),
    ("?", "help"),
    ("q", "quit"),
];

/// Render the key help text.
fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<_>>()
        .join(" ")
}

/// A draggable slider on the card.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Slider {
    Progress,
    Volume,
}

impl Slider {
    /// The action a click or drag at `percent` performs.
    pub fn action(self, percent: u8) -> Action {
        match self {
            Self::Progress => Action::ScrubTo(percent),
            Self::Volume => Action::SetVolume(percent),
        }
    }
}

/// What a mouse click landed on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Hit {
    Button(Action),
    Slider(Slider, u8),
}

/// Screen regions of the clickable parts of the last rendered frame.
#[derive(Debug, Default, Clone)]
pub struct HitMap {
    buttons: Vec<(Rect, Action)>,
    sliders: Vec<(Rect, Slider)>,
}

impl HitMap {
    fn button(&mut self, area: Rect, action: Action) {
        if !area.is_empty() {
            self.buttons.push((area, action));
        }
    }

    fn slider(&mut self, area: Rect, slider: Slider) {
        if !area.is_empty() {
            self.sliders.push((area, slider));
        }
    }

    /// Resolve a click at `(column, row)`.
    pub fn hit(&self, column: u16, row: u16) -> Option<Hit> {
        let pos = Position::new(column, row);
        if let Some((area, slider)) = self.sliders.iter().find(|(a, _)| a.contains(pos)) {
            return Some(Hit::Slider(*slider, column_to_percent(*area, column)));
        }
        self.buttons
            .iter()
            .find(|(a, _)| a.contains(pos))
            .map(|(_, action)| Hit::Button(*action))
    }

    /// Percentage for a drag of `slider` to `column`; the row is ignored so a
    /// drag can wander off the slider line.
    pub fn drag(&self, slider: Slider, column: u16) -> Option<u8> {
        self.slider_area(slider)
            .map(|area| column_to_percent(area, column))
    }

    pub fn slider_area(&self, slider: Slider) -> Option<Rect> {
        self.sliders
            .iter()
            .find(|(_, s)| *s == slider)
            .map(|(a, _)| *a)
    }

    #[cfg(test)]
    pub fn button_area(&self, action: Action) -> Option<Rect> {
        self.buttons
            .iter()
            .find(|(_, a)| *a == action)
            .map(|(r, _)| *r)
    }
}

/// Map a column inside `area` to a percentage; the first cell is 0 and the
/// last is 100. Columns outside the area are clamped.
pub fn column_to_percent(area: Rect, column: u16) -> u8 {
    if area.width <= 1 {
        return 0;
    }
    let span = u32::from(area.width - 1);
    let offset = u32::from(column.saturating_sub(area.x).min(area.width - 1));
    (offset * 100 / span) as u8
}

fn toggle_style(on: bool) -> Style {
    if on {
        Style::default().fg(Color::Green).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Gray)
    }
}

fn repeat_label(mode: RepeatMode) -> &'static str {
    match mode {
        RepeatMode::Off | RepeatMode::All => "↻",
        RepeatMode::One => "↻1",
    }
}

fn volume_icon(app: &App) -> &'static str {
    if app.is_silent() { "◁×" } else { "◁)" }
}

/// Center a `width` x `height` rectangle inside `r`, shrinking to fit.
fn centered_rect_sized(width: u16, height: u16, r: Rect) -> Rect {
    let width = width.min(r.width);
    let height = height.min(r.height);
    let x = r.x + (r.width - width) / 2;
    let y = r.y + (r.height - height) / 2;
    Rect {
        x,
        y,
        width,
        height,
    }
}

/// Rows the boxed cover takes, trimmed so the controls below always fit in
/// `available` rows. Too little room for any art drops the box entirely.
fn cover_rows_for(cover: &Cover, available: u16) -> u16 {
    let rows = cover.height().saturating_add(2).min(available);
    if rows < 3 { 0 } else { rows }
}

fn gauge(ratio: f64, color: Color) -> Gauge<'static> {
    Gauge::default()
        .ratio(ratio.clamp(0.0, 1.0))
        .label("")
        .use_unicode(true)
        .gauge_style(Style::default().fg(color).bg(Color::DarkGray))
}

/// Render the player card into `frame` and report where its controls are.
pub fn draw(frame: &mut Frame, app: &App, cover: &Cover, ui: &UiSettings) -> HitMap {
    let mut hits = HitMap::default();

    let help_rows = if app.show_help { HELP_ROWS } else { 0 };
    let fixed_rows = BODY_ROWS + help_rows + 2;
    let cover_rows = if ui.show_cover {
        cover_rows_for(cover, frame.area().height.saturating_sub(fixed_rows))
    } else {
        0
    };
    let card = centered_rect_sized(CARD_WIDTH, cover_rows + fixed_rows, frame.area());

    let block = Block::bordered()
        .title(ui.header_text.as_str())
        .title_alignment(Alignment::Center)
        .border_style(Style::default().fg(Color::Magenta));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let [
        cover_area,
        title_area,
        artist_area,
        album_area,
        _,
        progress_area,
        times_area,
        _,
        transport_area,
        _,
        volume_area,
        indicator_area,
        help_area,
    ] = Layout::vertical([
        Constraint::Length(cover_rows),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(1),
        Constraint::Length(help_rows),
    ])
    .areas(inner);

    // Cover art, boxed at its own width so the art keeps its shape.
    if cover_rows > 0 {
        let art_area = centered_rect_sized(
            cover.width().saturating_add(2),
            cover_area.height,
            cover_area,
        );
        let art_style = if cover.is_placeholder() {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White)
        };
        let art = Paragraph::new(cover.art.as_str()).style(art_style).block(
            Block::bordered().border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(art, art_area);
    }

    // Track info, with the like button to the right of the title.
    let track = app.current_track();
    let [_, title_text, like_area] = Layout::horizontal([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .areas(title_area);
    frame.render_widget(
        Paragraph::new(track.title.as_str())
            .bold()
            .alignment(Alignment::Center),
        title_text,
    );
    let heart = if app.liked {
        Span::styled("♥", Style::default().fg(Color::Red).add_modifier(Modifier::BOLD))
    } else {
        Span::styled("♡", Style::default().fg(Color::Gray))
    };
    frame.render_widget(Paragraph::new(heart).alignment(Alignment::Center), like_area);
    hits.button(like_area, Action::ToggleLike);

    frame.render_widget(
        Paragraph::new(track.artist.as_str())
            .fg(Color::Gray)
            .alignment(Alignment::Center),
        artist_area,
    );
    frame.render_widget(
        Paragraph::new(track.album.as_str())
            .fg(Color::DarkGray)
            .alignment(Alignment::Center),
        album_area,
    );

    // Scrubber and time labels.
    frame.render_widget(gauge(app.progress_percent() / 100.0, Color::White), progress_area);
    hits.slider(progress_area, Slider::Progress);

    let [elapsed_area, total_area] =
        Layout::horizontal([Constraint::Fill(1), Constraint::Fill(1)]).areas(times_area);
    frame.render_widget(
        Paragraph::new(app.elapsed_label()).fg(Color::Gray),
        elapsed_area,
    );
    frame.render_widget(
        Paragraph::new(app.total_label())
            .fg(Color::Gray)
            .alignment(Alignment::Right),
        total_area,
    );

    // Transport buttons.
    let play_label = if app.is_playing() { "||" } else { "▶" };
    let base = Style::default().fg(Color::White);
    let buttons = [
        ("⇄", toggle_style(app.shuffle), Action::ToggleShuffle),
        ("|◀", base, Action::Previous),
        (
            play_label,
            Style::default()
                .fg(Color::Black)
                .bg(Color::White)
                .add_modifier(Modifier::BOLD),
            Action::PlayPause,
        ),
        ("▶|", base, Action::Next),
        (
            repeat_label(app.repeat),
            toggle_style(app.repeat != RepeatMode::Off),
            Action::CycleRepeat,
        ),
    ];
    let button_areas = Layout::horizontal([Constraint::Length(BUTTON_WIDTH); 5])
        .flex(Flex::Center)
        .spacing(1)
        .split(transport_area);
    for ((label, style, action), area) in buttons.into_iter().zip(button_areas.iter()) {
        frame.render_widget(
            Paragraph::new(label).style(style).alignment(Alignment::Center),
            *area,
        );
        hits.button(*area, action);
    }

    // Volume row: mute toggle, slider, and an inert "more" affordance.
    let [icon_area, volume_slider, more_area] = Layout::horizontal([
        Constraint::Length(3),
        Constraint::Min(0),
        Constraint::Length(3),
    ])
    .spacing(1)
    .areas(volume_area);
    let icon_style = if app.is_silent() {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::Gray)
    };
    frame.render_widget(Paragraph::new(volume_icon(app)).style(icon_style), icon_area);
    hits.button(icon_area, Action::ToggleMute);
    frame.render_widget(
        gauge(f64::from(app.effective_volume()) / 100.0, Color::Gray),
        volume_slider,
    );
    hits.slider(volume_slider, Slider::Volume);
    frame.render_widget(
        Paragraph::new("⋯")
            .fg(Color::DarkGray)
            .alignment(Alignment::Right),
        more_area,
    );

    // Track position indicator.
    let markers = Layout::horizontal(vec![Constraint::Length(1); app.tracks.len()])
        .flex(Flex::Center)
        .spacing(1)
        .split(indicator_area);
    for (index, area) in markers.iter().enumerate() {
        let marker = if index == app.current_index() {
            Span::styled("●", Style::default().fg(Color::White))
        } else {
            Span::styled("○", Style::default().fg(Color::DarkGray))
        };
        frame.render_widget(Paragraph::new(Line::from(marker)), *area);
        hits.button(*area, Action::Select(index));
    }

    if app.show_help {
        let help = Paragraph::new(controls_text())
            .fg(Color::DarkGray)
            .block(
                Block::new()
                    .borders(Borders::TOP)
                    .border_style(Style::default().fg(Color::DarkGray))
                    .title(" keys "),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(help, help_area);
    }

    hits
}
