use rust_decimal::Decimal;

use crate::store::BudgetStore;

/// Conditions checked after every mutation, always over all-time totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertKind {
    /// Expenses exceed 80% of income.
    HighExpenseRatio,
    /// Balance is below half the savings goal.
    LowSavingsProgress,
}

impl AlertKind {
    pub fn message(&self) -> &'static str {
        match self {
            Self::HighExpenseRatio => "Expenses exceed 80% of income",
            Self::LowSavingsProgress => "Balance is below 50% of your savings goal",
        }
    }
}

/// Both comparisons are strict: landing exactly on the threshold does not
/// fire. Kept in integer arithmetic so the 0.8 and 0.5 factors are exact.
pub fn evaluate(store: &BudgetStore) -> Vec<AlertKind> {
    let mut alerts = Vec::new();
    let income = store.total_income();
    let expenses = store.total_expenses();

    // expenses > 0.8 * income
    if income > Decimal::ZERO && expenses * Decimal::from(5) > income * Decimal::from(4) {
        alerts.push(AlertKind::HighExpenseRatio);
    }

    // balance < 0.5 * goal
    if store.savings_goal > Decimal::ZERO
        && store.balance() * Decimal::from(2) < store.savings_goal
    {
        alerts.push(AlertKind::LowSavingsProgress);
    }

    alerts
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::Category;

    fn store_with(income: Decimal, expenses: Decimal) -> BudgetStore {
        let mut store = BudgetStore::default();
        if income > Decimal::ZERO {
            store.add_income(income, "pay", Category::Other).unwrap();
        }
        if expenses > Decimal::ZERO {
            store.add_expense(expenses, "stuff", Category::Other).unwrap();
        }
        store
    }

    #[test]
    fn quiet_when_under_thresholds() {
        let store = store_with(dec!(1000), dec!(500));
        assert!(evaluate(&store).is_empty());
    }

    #[test]
    fn high_expense_ratio_fires_above_80_percent() {
        let store = store_with(dec!(1000), dec!(801));
        assert_eq!(evaluate(&store), vec![AlertKind::HighExpenseRatio]);
    }

    #[test]
    fn exactly_80_percent_does_not_fire() {
        let store = store_with(dec!(1000), dec!(800));
        assert!(evaluate(&store).is_empty());
    }

    #[test]
    fn no_ratio_alert_without_income() {
        let store = store_with(Decimal::ZERO, dec!(50));
        assert!(evaluate(&store).is_empty());
    }

    #[test]
    fn low_savings_fires_below_half_goal() {
        let mut store = store_with(dec!(1000), dec!(700));
        store.set_savings_goal(dec!(700)).unwrap();
        // balance 300 < 350
        assert_eq!(evaluate(&store), vec![AlertKind::LowSavingsProgress]);
    }

    #[test]
    fn exactly_half_goal_does_not_fire() {
        let mut store = store_with(dec!(1000), dec!(650));
        store.set_savings_goal(dec!(700)).unwrap();
        // balance 350 == half of 700
        assert!(evaluate(&store).is_empty());
    }

    #[test]
    fn both_alerts_together() {
        let mut store = store_with(dec!(1000), dec!(900));
        store.set_savings_goal(dec!(500)).unwrap();
        assert_eq!(
            evaluate(&store),
            vec![AlertKind::HighExpenseRatio, AlertKind::LowSavingsProgress]
        );
    }
}
