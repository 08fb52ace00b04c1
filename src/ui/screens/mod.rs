pub(crate) mod chart;
pub(crate) mod dashboard;
pub(crate) mod history;
