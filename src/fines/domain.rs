pub mod service;

// FineCalculator converts a count of overdue days into a monetary amount;
// implementations are pure and hold no state.
pub(crate) trait FineCalculator: Sync + Send {
    fn compute(&self, overdue_days: i64) -> i64;
}
