pub mod keymap;
pub mod screens;

mod terminal;
mod theme;

use engine::Ledger;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::app::{AppState, Mode, Section};

pub use terminal::{AppTerminal as Terminal, restore_terminal, setup_terminal};
pub use theme::Theme;

pub fn render(frame: &mut Frame<'_>, state: &AppState, ledger: &Ledger) {
    let theme = Theme::default();
    let area = frame.area();

    // Main layout: info bar, tabs, content, bottom bar
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Info bar
            Constraint::Length(2), // Tab bar (label + spacer)
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Bottom bar
        ])
        .split(area);

    render_info_bar(frame, layout[0], state, ledger, &theme);
    render_tabs(frame, layout[1], state.section, &theme);

    match state.section {
        Section::Overview => screens::overview::render(frame, layout[2], ledger, &theme),
        Section::Expenses => screens::expenses::render(frame, layout[2], state, ledger, &theme),
    }

    render_bottom_bar(frame, layout[3], state, &theme);
}

fn render_info_bar(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    ledger: &Ledger,
    theme: &Theme,
) {
    let summary = ledger.summary();

    let line = Line::from(vec![
        Span::styled("Store", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}  ", state.store_label)),
        Span::styled("Records", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}  ", summary.count)),
        Span::styled("Total", Style::default().fg(theme.dim)),
        Span::raw(format!(": {}", summary.total)),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_tabs(frame: &mut Frame<'_>, area: Rect, section: Section, theme: &Theme) {
    let tab = |label: Section| {
        if label == section {
            Span::styled(
                format!(" {} ", label.label()),
                Style::default()
                    .fg(theme.accent)
                    .add_modifier(Modifier::BOLD),
            )
        } else {
            Span::styled(format!(" {} ", label.label()), Style::default().fg(theme.dim))
        }
    };

    let line = Line::from(vec![
        tab(Section::Overview),
        Span::styled("│", Style::default().fg(theme.border)),
        tab(Section::Expenses),
    ]);

    frame.render_widget(Paragraph::new(line), area);
}

fn render_bottom_bar(frame: &mut Frame<'_>, area: Rect, state: &AppState, theme: &Theme) {
    let mut parts = match state.mode {
        Mode::Add => vec![
            Span::styled("Tab", Style::default().fg(theme.accent)),
            Span::raw(" next field  "),
            Span::styled("↑/↓", Style::default().fg(theme.accent)),
            Span::raw(" category  "),
            Span::styled("Enter", Style::default().fg(theme.accent)),
            Span::raw(" save  "),
            Span::styled("Esc", Style::default().fg(theme.accent)),
            Span::raw(" cancel"),
        ],
        Mode::Browse => {
            let mut hints = vec![
                Span::styled("o", Style::default().fg(theme.accent)),
                Span::raw(" overview  "),
                Span::styled("e", Style::default().fg(theme.accent)),
                Span::raw(" expenses  "),
                Span::styled("a", Style::default().fg(theme.accent)),
                Span::raw(" add  "),
            ];
            if state.section == Section::Expenses {
                hints.extend([
                    Span::styled("j/k", Style::default().fg(theme.accent)),
                    Span::raw(" move  "),
                    Span::styled("d", Style::default().fg(theme.accent)),
                    Span::raw(" delete  "),
                    Span::styled("C", Style::default().fg(theme.accent)),
                    Span::raw(" clear  "),
                ]);
            }
            hints.extend([
                Span::styled("x", Style::default().fg(theme.accent)),
                Span::raw(" export  "),
                Span::styled("q", Style::default().fg(theme.accent)),
                Span::raw(" quit"),
            ]);
            hints
        }
    };

    if let Some(status) = &state.status {
        parts.push(Span::styled("  │  ", Style::default().fg(theme.border)));
        parts.push(Span::styled(
            status.clone(),
            Style::default().fg(theme.positive),
        ));
    }

    frame.render_widget(Paragraph::new(Line::from(parts)), area);
}
