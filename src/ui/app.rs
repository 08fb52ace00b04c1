use crate::alert::{self, AlertKind};
use crate::report::{self, ChartSeries, Summary};
use crate::store::{BudgetStore, EntryKind};
use crate::ui::theme::Theme;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Screen {
    Dashboard,
    History,
    Chart,
}

impl Screen {
    pub(crate) fn all() -> &'static [Screen] {
        &[Self::Dashboard, Self::History, Self::Chart]
    }
}

impl std::fmt::Display for Screen {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dashboard => write!(f, "Dashboard"),
            Self::History => write!(f, "History"),
            Self::Chart => write!(f, "Chart"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Confirm,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Confirm => write!(f, "CONFIRM"),
        }
    }
}

/// Pending action that requires user confirmation.
#[derive(Debug, Clone)]
pub(crate) enum PendingAction {
    DeleteEntry {
        kind: EntryKind,
        index: usize,
        description: String,
    },
}

/// One line on the History screen: an entry addressed by sequence and
/// position, income rows first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HistoryRow {
    pub(crate) kind: EntryKind,
    pub(crate) index: usize,
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) screen: Screen,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,

    /// None means "current month"; Some holds an explicit filter string.
    pub(crate) month_filter: Option<String>,
    pub(crate) theme: Theme,

    // Derived views, recomputed after every mutation or filter change
    pub(crate) summary: Summary,
    pub(crate) chart: ChartSeries,
    pub(crate) alerts: Vec<AlertKind>,

    // History
    pub(crate) rows: Vec<HistoryRow>,
    pub(crate) history_index: usize,
    pub(crate) history_scroll: usize,

    // Confirmation
    pub(crate) pending_action: Option<PendingAction>,
    pub(crate) confirm_message: String,

    // Layout (updated each render frame)
    pub(crate) visible_rows: usize,
}

impl App {
    pub(crate) fn new(store: &BudgetStore) -> Self {
        let mut app = Self {
            running: true,
            screen: Screen::Dashboard,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,

            month_filter: None,
            theme: Theme::dark(),

            summary: report::summarize(store, None),
            chart: report::chart_series(store, None),
            alerts: alert::evaluate(store),

            rows: Vec::new(),
            history_index: 0,
            history_scroll: 0,

            pending_action: None,
            confirm_message: String::new(),

            visible_rows: 20,
        };
        app.rebuild_rows(store);
        app
    }

    /// Recompute every derived view from the store.
    pub(crate) fn refresh(&mut self, store: &BudgetStore) {
        let filter = self.month_filter.as_deref();
        self.summary = report::summarize(store, filter);
        self.chart = report::chart_series(store, filter);
        self.alerts = alert::evaluate(store);
        self.rebuild_rows(store);
    }

    fn rebuild_rows(&mut self, store: &BudgetStore) {
        self.rows = (0..store.income.len())
            .map(|index| HistoryRow {
                kind: EntryKind::Income,
                index,
            })
            .chain((0..store.expenses.len()).map(|index| HistoryRow {
                kind: EntryKind::Expense,
                index,
            }))
            .collect();
        if self.history_index >= self.rows.len() {
            self.history_index = self.rows.len().saturating_sub(1);
        }
        if self.history_scroll > self.history_index {
            self.history_scroll = self.history_index;
        }
    }

    pub(crate) fn selected_row(&self) -> Option<HistoryRow> {
        self.rows.get(self.history_index).copied()
    }

    /// The resolved month driving Dashboard and Chart.
    pub(crate) fn active_month(&self) -> String {
        report::resolve_month(self.month_filter.as_deref())
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
