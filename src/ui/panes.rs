//! Stateless render functions for the calculator panes
//!
//! - [`render_display`]: the input line and the last result or error
//! - [`render_keypad`]: the button grid, flashing the most recent key press
//! - [`render_status_bar`]: keybindings and evaluation state

use crate::parser::EvalError;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// The keypad layout, row by row. Mirrors a desk calculator: digits on the
/// left, operators on the right, clear and backspace on top.
pub const KEYPAD_ROWS: [[char; 4]; 5] = [
    ['(', ')', 'c', '<'],
    ['7', '8', '9', '/'],
    ['4', '5', '6', '*'],
    ['1', '2', '3', '-'],
    ['0', '.', '=', '+'],
];

/// Render the display pane: the expression being typed and, below it, the
/// outcome of the last `=` press.
pub fn render_display(
    frame: &mut Frame,
    area: Rect,
    input: &str,
    outcome: Option<&Result<f64, EvalError>>,
) {
    let block = Block::default()
        .title(" Display ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_focused))
        .padding(Padding::new(1, 1, 0, 0));

    let input_line = if input.is_empty() {
        Line::from(Span::styled(
            "(type an expression)",
            Style::default().fg(DEFAULT_THEME.comment),
        ))
    } else {
        Line::from(Span::styled(
            input.to_string(),
            Style::default().fg(DEFAULT_THEME.fg),
        ))
    };

    let outcome_line = match outcome {
        Some(Ok(value)) => Line::from(Span::styled(
            format!("= {}", value),
            Style::default()
                .fg(DEFAULT_THEME.success)
                .add_modifier(Modifier::BOLD),
        )),
        Some(Err(e)) => Line::from(Span::styled(
            format!("error: {}", e),
            Style::default()
                .fg(DEFAULT_THEME.error)
                .add_modifier(Modifier::BOLD),
        )),
        None => Line::from(""),
    };

    let paragraph = Paragraph::new(vec![input_line, outcome_line])
        .block(block)
        .alignment(Alignment::Right);

    frame.render_widget(paragraph, area);
}

/// Render the keypad pane.
///
/// `flashed_key` is the key most recently pressed (if it maps to a button);
/// its button is briefly highlighted so keyboard input reads like pressing
/// the on-screen keypad.
pub fn render_keypad(frame: &mut Frame, area: Rect, flashed_key: Option<char>) {
    let block = Block::default()
        .title(" Keypad ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(DEFAULT_THEME.border_normal));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(inner);

    for (row_idx, row_keys) in KEYPAD_ROWS.iter().enumerate() {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Ratio(1, 4); 4])
            .split(rows[row_idx]);

        for (col_idx, &key) in row_keys.iter().enumerate() {
            let is_flashed = flashed_key == Some(key);
            let is_digit = key.is_ascii_digit() || key == '.';

            let style = if is_flashed {
                Style::default()
                    .bg(DEFAULT_THEME.secondary)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD)
            } else if is_digit {
                Style::default().fg(DEFAULT_THEME.fg)
            } else {
                Style::default().fg(DEFAULT_THEME.key_label)
            };

            let label = match key {
                'c' => "C".to_string(),
                '<' => "⌫".to_string(),
                _ => key.to_string(),
            };

            let button = Paragraph::new(format!("[ {} ]", label))
                .style(style)
                .alignment(Alignment::Center);
            frame.render_widget(button, centered_row(cells[col_idx]));
        }
    }
}

/// Vertically center a one-line label within its keypad cell
fn centered_row(cell: Rect) -> Rect {
    if cell.height <= 1 {
        return cell;
    }
    Rect {
        y: cell.y + (cell.height - 1) / 2,
        height: 1,
        ..cell
    }
}

/// Render the status bar at the bottom.
pub fn render_status_bar(frame: &mut Frame, area: Rect, message: &str, is_error: bool) {
    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
        .split(area);

    // Left side: last action or error message
    let left_spans = vec![
        Span::styled(
            " calctty ",
            Style::default()
                .bg(if is_error {
                    DEFAULT_THEME.error
                } else {
                    DEFAULT_THEME.primary
                })
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!(" {} ", message),
            Style::default().bg(DEFAULT_THEME.display_bg).fg(if is_error {
                DEFAULT_THEME.error
            } else {
                DEFAULT_THEME.fg
            }),
        ),
    ];

    let left_paragraph = Paragraph::new(Line::from(left_spans))
        .style(Style::default().bg(DEFAULT_THEME.display_bg))
        .alignment(Alignment::Left);

    frame.render_widget(left_paragraph, layout[0]);

    // Right side: keybinds
    let key_style = Style::default().bg(DEFAULT_THEME.comment).fg(Color::Black);
    let desc_style = Style::default()
        .bg(DEFAULT_THEME.display_bg)
        .fg(DEFAULT_THEME.fg);
    let sep_style = Style::default()
        .bg(DEFAULT_THEME.display_bg)
        .fg(DEFAULT_THEME.comment);

    let right_spans = vec![
        Span::styled(" ↵ / = ", key_style),
        Span::styled(" evaluate ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" c ", key_style),
        Span::styled(" clear ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled(" ⌫ ", key_style),
        Span::styled(" delete ", desc_style),
        Span::styled("│", sep_style),
        Span::styled(" ", desc_style),
        Span::styled("q", key_style),
        Span::styled(" quit ", desc_style),
    ];

    let right_paragraph = Paragraph::new(Line::from(right_spans))
        .style(Style::default().bg(DEFAULT_THEME.display_bg))
        .alignment(Alignment::Right);

    frame.render_widget(right_paragraph, layout[1]);
}
