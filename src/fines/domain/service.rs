use crate::fines::domain::FineCalculator;

const STANDARD_DAILY_FINE: i64 = 10;
const DISCOUNTED_DAILY_FINE: i64 = 5;

// StandardFineCalculator charges the regular daily rate.
#[derive(Debug)]
pub(crate) struct StandardFineCalculator {}

impl FineCalculator for StandardFineCalculator {
    fn compute(&self, overdue_days: i64) -> i64 {
        overdue_days.max(0) * STANDARD_DAILY_FINE
    }
}

// DiscountedFineCalculator charges the reduced daily rate, e.g. for students.
#[derive(Debug)]
pub(crate) struct DiscountedFineCalculator {}

impl FineCalculator for DiscountedFineCalculator {
    fn compute(&self, overdue_days: i64) -> i64 {
        overdue_days.max(0) * DISCOUNTED_DAILY_FINE
    }
}

// WaivedFineCalculator never charges, regardless of how late the return is.
#[derive(Debug)]
pub(crate) struct WaivedFineCalculator {}

impl FineCalculator for WaivedFineCalculator {
    fn compute(&self, _overdue_days: i64) -> i64 {
        0
    }
}

#[cfg(test)]
mod tests {
    use crate::fines::domain::FineCalculator;
    use crate::fines::domain::service::{DiscountedFineCalculator, StandardFineCalculator, WaivedFineCalculator};

    #[tokio::test]
    async fn test_should_compute_standard_fine() {
        let calculator = StandardFineCalculator {};
        assert_eq!(30, calculator.compute(3));
        assert_eq!(0, calculator.compute(0));
    }

    #[tokio::test]
    async fn test_should_compute_discounted_fine() {
        let calculator = DiscountedFineCalculator {};
        assert_eq!(15, calculator.compute(3));
        assert_eq!(0, calculator.compute(0));
    }

    #[tokio::test]
    async fn test_should_compute_waived_fine() {
        let calculator = WaivedFineCalculator {};
        assert_eq!(0, calculator.compute(3));
        assert_eq!(0, calculator.compute(0));
    }

    #[tokio::test]
    async fn test_should_not_charge_negative_days() {
        let calculator = StandardFineCalculator {};
        assert_eq!(0, calculator.compute(-2));
    }
}
