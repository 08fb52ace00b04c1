use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph},
    Frame,
};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

use crate::ui::app::App;
use crate::ui::util::truncate;

/// One green income bar beside a red bar per expense category.
pub(crate) fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let series = &app.chart;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border_style())
        .title(Span::styled(
            format!(" Income vs Expenses ({}) ", series.month),
            theme.title_style(),
        ));

    if !series.has_data() {
        let msg = Paragraph::new(Line::from(Span::styled(
            format!(
                "Nothing to chart for {}. Add entries or change :month",
                series.month
            ),
            theme.dim_style(),
        )))
        .centered()
        .block(block);
        f.render_widget(msg, area);
        return;
    }

    let mut bars: Vec<Bar> = vec![bar(
        "Income",
        series.total_income,
        theme.income_style(),
        theme,
    )];
    for (cat, amount) in &series.by_category {
        bars.push(bar(cat.as_str(), *amount, theme.expense_style(), theme));
    }

    let chart = BarChart::default()
        .block(block)
        .data(BarGroup::default().bars(&bars))
        .bar_width(10)
        .bar_gap(1);

    f.render_widget(chart, area);
}

fn bar<'a>(
    label: &str,
    amount: Decimal,
    style: Style,
    theme: &crate::ui::theme::Theme,
) -> Bar<'a> {
    Bar::default()
        .value(amount.round().to_u64().unwrap_or(0))
        .label(Line::from(truncate(label, 10)))
        .style(style)
        .value_style(
            Style::default()
                .fg(theme.text)
                .add_modifier(Modifier::BOLD),
        )
}
