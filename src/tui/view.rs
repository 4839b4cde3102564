//! Rendering of the chat screen

use crate::session::{Message, Role, Session};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

pub const TITLE: &str = "Weather Assistant";
pub const SUBTITLE: &str = "Ask me about the weather in any city!";
pub const PLACEHOLDER: &str = "Ask about weather in any city...";
pub const CHECKING: &str = "Checking weather...";

const WELCOME: [&str; 2] = [
    "Welcome! Ask me about the weather in any city.",
    "Try: \"What's the weather in New York?\" or \"How's the weather in Tokyo today?\"",
];

pub fn draw(frame: &mut Frame, session: &Session) {
    let [header, chat, input, footer] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Min(3),
        Constraint::Length(3),
        Constraint::Length(1),
    ])
    .areas(frame.area());

    draw_header(frame, header);
    draw_chat(frame, chat, session);
    draw_input(frame, input, session);
    frame.render_widget(
        Paragraph::new("Enter to send · Esc to quit").style(Style::default().fg(Color::DarkGray)),
        footer,
    );
}

fn draw_header(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            TITLE,
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(SUBTITLE, Style::default().fg(Color::Gray))),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn draw_chat(frame: &mut Frame, area: Rect, session: &Session) {
    let block = Block::default().borders(Borders::ALL);
    let inner = block.inner(area);
    let width = usize::from(inner.width.max(1));

    let lines = if session.transcript().is_empty() && !session.is_busy() {
        welcome_lines(width)
    } else {
        transcript_lines(session, width)
    };

    // Follow the newest message
    let overflow = lines.len().saturating_sub(usize::from(inner.height));
    let scroll = u16::try_from(overflow).unwrap_or(u16::MAX);

    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}

fn welcome_lines(width: usize) -> Vec<Line<'static>> {
    WELCOME
        .iter()
        .flat_map(|text| wrap(text, width))
        .map(|l| Line::from(Span::styled(l, Style::default().fg(Color::Gray))))
        .collect()
}

fn transcript_lines(session: &Session, width: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::new();
    for message in session.transcript().all() {
        lines.extend(message_lines(message, width));
        lines.push(Line::default());
    }
    if session.is_busy() {
        lines.push(Line::from(Span::styled(
            CHECKING,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::ITALIC),
        )));
    }
    lines
}

fn message_lines(message: &Message, width: usize) -> Vec<Line<'static>> {
    let (label, style) = match message.role() {
        Role::User => ("You", Style::default().fg(Color::Green)),
        Role::Bot => ("Assistant", Style::default().fg(Color::Cyan)),
    };

    let mut lines = vec![Line::from(Span::styled(
        label,
        style.add_modifier(Modifier::BOLD),
    ))];
    lines.extend(
        wrap(message.content(), width)
            .into_iter()
            .map(|l| Line::from(Span::styled(l, style))),
    );
    lines
}

fn draw_input(frame: &mut Frame, area: Rect, session: &Session) {
    let busy = session.is_busy();
    let block = Block::default()
        .borders(Borders::ALL)
        .title(if busy { " Waiting for reply " } else { " Message " });

    let text = if session.draft().is_empty() {
        Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray))
    } else {
        Span::raw(session.draft().to_string())
    };
    let style = if busy {
        Style::default().add_modifier(Modifier::DIM)
    } else {
        Style::default()
    };

    let inner = block.inner(area);
    let (offset, cursor) = input_viewport(session.draft(), inner.width);
    frame.render_widget(
        Paragraph::new(Line::from(text))
            .block(block)
            .style(style)
            .scroll((0, offset)),
        area,
    );

    if !busy {
        frame.set_cursor_position((inner.x.saturating_add(cursor), inner.y));
    }
}

/// Horizontal scroll and cursor column for a draft in a box `width` cells
/// wide. The tail of the draft stays visible with one cell left for the cursor.
fn input_viewport(draft: &str, width: u16) -> (u16, u16) {
    let typed = u16::try_from(draft.width()).unwrap_or(u16::MAX);
    let visible = width.saturating_sub(1);
    let offset = typed.saturating_sub(visible);
    (offset, typed - offset)
}

/// Wrap by display width. Spacing inside a line is kept; tabs become four spaces.
fn wrap(text: &str, width: usize) -> Vec<String> {
    let mut out = Vec::new();
    for line in text.replace('\t', "    ").lines() {
        out.extend(
            textwrap::wrap(line, width.max(1))
                .into_iter()
                .map(std::borrow::Cow::into_owned),
        );
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}
