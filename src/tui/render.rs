//! Pane rendering
//!
//! Layout, top to bottom: header, hints, then either the two-pane picker
//! (list + preview), the action menu under a preview, or a message panel.

use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph, Wrap};
use ratatui::Frame;

use super::screen::Tone;
use crate::icons::{icon_for, IconMode};
use crate::navigation::NavigationState;
use crate::strings;
use crate::utilities::UtilityRecord;

const ACCENT: Color = Color::Cyan;
const MUTED: Color = Color::DarkGray;
const BORDER: Color = Color::Blue;

/// Everything the picker frame needs
#[derive(Debug, Clone, Copy)]
pub struct PickerView<'a> {
    pub catalog: &'a [UtilityRecord],
    pub state: NavigationState,
    pub icons: IconMode,
    /// Extra warning line under the hints (skipped files)
    pub notice: Option<&'a str>,
}

pub fn draw_picker(frame: &mut Frame, view: &PickerView) {
    let [header, hints, notice, body] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(u16::from(view.notice.is_some())),
        Constraint::Min(5),
    ])
    .areas(frame.area());

    render_header(frame, header);
    render_hints(frame, hints, strings::KEYBOARD_HINTS);
    if let Some(text) = view.notice {
        frame.render_widget(Paragraph::new(text.to_string()).fg(Color::Yellow), notice);
    }

    let [left, right] =
        Layout::horizontal([Constraint::Percentage(45), Constraint::Percentage(55)]).areas(body);

    let list_block = pane(strings::HEADER_UTILITIES);
    let rule_width = list_block.inner(left).width as usize;
    frame.render_widget(
        Paragraph::new(list_lines(view, rule_width)).block(list_block),
        left,
    );

    if let Some(record) = view.catalog.get(view.state.selected()) {
        render_preview(frame, right, record, view.icons);
    }
}

/// Preview of the chosen utility with the action list beneath it
pub fn draw_action_menu(
    frame: &mut Frame,
    record: &UtilityRecord,
    icons: IconMode,
    labels: &[&str],
    state: &NavigationState,
) {
    let [header, hints, preview, menu] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(8),
        Constraint::Min(labels.len() as u16 + 2),
    ])
    .areas(frame.area());

    render_header(frame, header);
    render_hints(frame, hints, strings::MENU_HINTS);
    render_preview(frame, preview, record, icons);
    frame.render_widget(
        Paragraph::new(menu_lines(labels, state)).block(pane(strings::HEADER_ACTION)),
        menu,
    );
}

/// Header plus a bordered panel of colored lines
pub fn draw_messages(frame: &mut Frame, lines: &[(Tone, String)]) {
    let [header, body] =
        Layout::vertical([Constraint::Length(3), Constraint::Min(3)]).areas(frame.area());
    render_header(frame, header);

    let lines: Vec<Line> = lines
        .iter()
        .map(|(tone, text)| Line::styled(text.clone(), tone_style(*tone)))
        .collect();
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(Block::bordered().border_type(BorderType::Rounded).border_style(BORDER)),
        body,
    );
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(vec![
        Line::styled(strings::APP_NAME, Style::new().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Line::styled(strings::APP_SUBTITLE, Style::new().fg(MUTED)),
    ])
    .alignment(Alignment::Center)
    .block(Block::new().borders(Borders::BOTTOM).border_style(BORDER));
    frame.render_widget(header, area);
}

fn render_hints(frame: &mut Frame, area: Rect, hints: &str) {
    frame.render_widget(
        Paragraph::new(hints.to_string())
            .fg(MUTED)
            .alignment(Alignment::Center),
        area,
    );
}

fn render_preview(frame: &mut Frame, area: Rect, record: &UtilityRecord, icons: IconMode) {
    let title = format!("{} {}", icon_for(record, icons), record.title());
    frame.render_widget(
        Paragraph::new(preview_lines(record))
            .wrap(Wrap { trim: true })
            .block(pane(&title)),
        area,
    );
}

fn pane(title: &str) -> Block<'static> {
    Block::bordered()
        .border_type(BorderType::Rounded)
        .border_style(BORDER)
        .title(Span::styled(
            format!(" {} ", title),
            Style::new().fg(ACCENT).add_modifier(Modifier::BOLD),
        ))
        .padding(Padding::horizontal(1))
}

fn tone_style(tone: Tone) -> Style {
    match tone {
        Tone::Info => Style::new().fg(ACCENT),
        Tone::Muted => Style::new().fg(MUTED),
        Tone::Success => Style::new().fg(Color::Green),
        Tone::Warning => Style::new().fg(Color::Yellow),
        Tone::Error => Style::new().fg(Color::Red),
    }
}

/// Visible rows, a rule, then the `(i/n)` counter
fn list_lines(view: &PickerView, rule_width: usize) -> Vec<Line<'static>> {
    let state = &view.state;
    let mut lines: Vec<Line> = view.catalog[state.visible_range()]
        .iter()
        .zip(state.visible_range())
        .map(|(record, index)| {
            row(
                format!("{} {}", icon_for(record, view.icons), record.title()),
                index == state.selected(),
            )
        })
        .collect();

    lines.push(Line::styled("─".repeat(rule_width.max(1)), Style::new().fg(MUTED)));
    lines.push(Line::styled(
        strings::format_item_count(state.selected() + 1, state.item_count()),
        Style::new().fg(MUTED),
    ));
    lines
}

fn menu_lines(labels: &[&str], state: &NavigationState) -> Vec<Line<'static>> {
    labels[state.visible_range()]
        .iter()
        .zip(state.visible_range())
        .map(|(label, index)| row(label.to_string(), index == state.selected()))
        .collect()
}

fn row(text: String, selected: bool) -> Line<'static> {
    if selected {
        Line::from(vec![
            Span::styled("> ", Style::new().fg(ACCENT).add_modifier(Modifier::BOLD)),
            Span::styled(text, Style::new().fg(Color::White).add_modifier(Modifier::BOLD)),
        ])
    } else {
        Line::from(vec![Span::raw("  "), Span::styled(text, Style::new().fg(Color::Gray))])
    }
}

fn preview_lines(record: &UtilityRecord) -> Vec<Line<'static>> {
    let tags = record.tags().join(", ");
    vec![
        field(strings::LABEL_ID, record.id()),
        field(strings::LABEL_FILE, &record.file_name()),
        field(strings::LABEL_DESCRIPTION, record.description()),
        field(strings::LABEL_TAGS, &tags),
    ]
}

fn field(label: &str, value: &str) -> Line<'static> {
    let value = if value.trim().is_empty() {
        strings::DEFAULT_PLACEHOLDER
    } else {
        value
    };
    Line::from(vec![
        Span::styled(label.to_string(), Style::new().fg(ACCENT).add_modifier(Modifier::BOLD)),
        Span::raw(" "),
        Span::raw(value.to_string()),
    ])
}
