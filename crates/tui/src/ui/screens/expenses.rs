use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, ListState, Paragraph},
};

use engine::Ledger;

use crate::{
    app::{AppState, Mode},
    form::{ExpenseForm, FormField},
    ui::theme::Theme,
};

pub fn render(frame: &mut Frame<'_>, area: Rect, state: &AppState, ledger: &Ledger, theme: &Theme) {
    match state.mode {
        Mode::Browse => render_list(frame, area, state, ledger, theme),
        Mode::Add => {
            let layout = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(9)])
                .split(area);
            render_list(frame, layout[0], state, ledger, theme);
            render_form(frame, layout[1], &state.form, theme);
        }
    }
}

fn render_list(
    frame: &mut Frame<'_>,
    area: Rect,
    state: &AppState,
    ledger: &Ledger,
    theme: &Theme,
) {
    let block = Block::default()
        .title(Span::styled(" Expenses ", Style::default().fg(theme.accent)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border));

    if ledger.is_empty() {
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("No expenses recorded. Press "),
                Span::styled("a", Style::default().fg(theme.accent)),
                Span::raw(" to add one."),
            ]))
            .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    let items = ledger
        .expenses()
        .iter()
        .enumerate()
        .map(|(index, expense)| {
            let date = expense.date.format("%Y-%m-%d").to_string();
            let text = format!(
                "{index:>3}  {date}  {:<14} {:<30} {:>12}",
                expense.category.as_str(),
                truncate(&expense.description, 30),
                expense.amount.to_string(),
            );
            ListItem::new(Line::from(text))
        })
        .collect::<Vec<_>>();

    let mut list_state = ListState::default();
    list_state.select(Some(state.selected));

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("» ");

    frame.render_stateful_widget(list, area, &mut list_state);
}

fn render_form(frame: &mut Frame<'_>, area: Rect, form: &ExpenseForm, theme: &Theme) {
    let block = Block::default()
        .title(Span::styled(" Add Expense ", Style::default().fg(theme.accent)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.accent));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut lines = vec![
        field_line("Date", &form.date, form.focus == FormField::Date, theme),
        field_line(
            "Category",
            form.category.as_str(),
            form.focus == FormField::Category,
            theme,
        ),
        field_line(
            "Description",
            &form.description,
            form.focus == FormField::Description,
            theme,
        ),
        field_line("Amount", &form.amount, form.focus == FormField::Amount, theme),
    ];

    lines.push(match &form.message {
        Some(message) => Line::from(Span::styled(
            message.clone(),
            Style::default().fg(theme.error),
        )),
        None => Line::from(Span::styled(
            "Date as YYYY-MM-DD, amount as a plain decimal.",
            Style::default().fg(theme.dim),
        )),
    });

    frame.render_widget(Paragraph::new(lines), inner);
}

fn field_line(label: &str, value: &str, focused: bool, theme: &Theme) -> Line<'static> {
    let marker = if focused { "▸ " } else { "  " };
    let value_style = if focused {
        Style::default()
            .fg(theme.accent)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    let cursor = if focused { "_" } else { "" };

    Line::from(vec![
        Span::styled(marker.to_string(), Style::default().fg(theme.accent)),
        Span::styled(format!("{label:<12}"), Style::default().fg(theme.dim)),
        Span::styled(format!("{value}{cursor}"), value_style),
    ])
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let cut: String = s.chars().take(max_len.saturating_sub(1)).collect();
        format!("{cut}…")
    }
}
