use crate::core::library::FinePolicyKind;
use crate::fines::domain::FineCalculator;
use crate::fines::domain::service::{DiscountedFineCalculator, StandardFineCalculator, WaivedFineCalculator};

pub(crate) fn create_fine_calculator(kind: FinePolicyKind) -> Box<dyn FineCalculator> {
    match kind {
        FinePolicyKind::Standard => {
            Box::new(StandardFineCalculator {})
        }
        FinePolicyKind::Discounted => {
            Box::new(DiscountedFineCalculator {})
        }
        FinePolicyKind::Waived => {
            Box::new(WaivedFineCalculator {})
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::core::library::FinePolicyKind;
    use crate::fines::factory::create_fine_calculator;

    #[tokio::test]
    async fn test_should_create_fine_calculator() {
        assert_eq!(20, create_fine_calculator(FinePolicyKind::Standard).compute(2));
        assert_eq!(10, create_fine_calculator(FinePolicyKind::Discounted).compute(2));
        assert_eq!(0, create_fine_calculator(FinePolicyKind::Waived).compute(2));
    }
}
