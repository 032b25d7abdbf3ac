use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{BarChart, Block, BorderType, Borders, Paragraph},
};

use engine::Ledger;

use crate::ui::theme::Theme;

pub fn render(frame: &mut Frame<'_>, area: Rect, ledger: &Ledger, theme: &Theme) {
    let summary = ledger.summary();

    if summary.count == 0 {
        let block = bordered_block(" Overview ", theme);
        let inner = block.inner(area);
        frame.render_widget(block, area);
        frame.render_widget(
            Paragraph::new(Line::from(vec![
                Span::raw("No expenses yet. Press "),
                Span::styled("a", Style::default().fg(theme.accent)),
                Span::raw(" to add one."),
            ]))
            .alignment(Alignment::Center),
            inner,
        );
        return;
    }

    // Main layout: totals, category breakdown, monthly trend
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Length(10),
            Constraint::Min(5),
        ])
        .split(area);

    render_totals(frame, layout[0], &summary, theme);
    render_category_breakdown(frame, layout[1], &summary, theme);
    render_monthly_trend(frame, layout[2], &summary, theme);
}

fn render_totals(frame: &mut Frame<'_>, area: Rect, summary: &engine::Summary, theme: &Theme) {
    let block = bordered_block(" Totals ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        metric_line("Total Spent", summary.total.to_string(), theme),
        metric_line("Records", summary.count.to_string(), theme),
        metric_line("Average", summary.average.to_string(), theme),
    ];

    frame.render_widget(Paragraph::new(lines), inner);
}

fn metric_line(label: &str, value: String, theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{label:<12}"), Style::default().fg(theme.dim)),
        Span::styled(
            value,
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        ),
    ])
}

fn render_category_breakdown(
    frame: &mut Frame<'_>,
    area: Rect,
    summary: &engine::Summary,
    theme: &Theme,
) {
    let block = bordered_block(" Category Breakdown ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let total = summary.total.paise();

    let rows: Vec<Line> = summary
        .by_category
        .iter()
        .take(inner.height as usize)
        .map(|(category, amount)| {
            let pct = if total > 0 {
                (amount.paise() as f64 / total as f64 * 100.0) as u16
            } else {
                0
            };

            let bar_width = 20;
            let filled = ((pct as usize * bar_width) / 100).min(bar_width);
            let empty = bar_width.saturating_sub(filled);
            let bar = format!("{}{}", "█".repeat(filled), "░".repeat(empty));

            Line::from(vec![
                Span::styled(
                    format!("{:<15}", category.as_str()),
                    Style::default().fg(theme.text),
                ),
                Span::styled(
                    format!("{:>12}", amount.to_string()),
                    Style::default().fg(theme.accent),
                ),
                Span::raw("  "),
                Span::styled(bar, Style::default().fg(theme.accent)),
                Span::styled(format!(" {pct:>3}%"), Style::default().fg(theme.dim)),
            ])
        })
        .collect();

    frame.render_widget(Paragraph::new(rows), inner);
}

fn render_monthly_trend(frame: &mut Frame<'_>, area: Rect, summary: &engine::Summary, theme: &Theme) {
    let block = bordered_block(" Monthly Trend ", theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    // Bar values are whole rupees; paise would dwarf the axis labels.
    let bar_data: Vec<(&str, u64)> = summary
        .by_month
        .iter()
        .map(|(month, amount)| (month.as_str(), (amount.paise() / 100).max(0) as u64))
        .collect();

    let chart = BarChart::default()
        .data(&bar_data)
        .bar_width(7)
        .bar_gap(2)
        .bar_style(Style::default().fg(theme.accent))
        .value_style(Style::default().fg(theme.dim).add_modifier(Modifier::BOLD))
        .label_style(Style::default().fg(theme.dim));

    frame.render_widget(chart, inner);
}

fn bordered_block(title: &'static str, theme: &Theme) -> Block<'static> {
    Block::default()
        .title(Span::styled(title, Style::default().fg(theme.accent)))
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme.border))
}
