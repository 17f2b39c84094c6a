use crate::books::factory::create_book_repository;
use crate::borrowers::factory::create_borrower_repository;
use crate::core::domain::Configuration;
use crate::core::library::FinePolicyKind;
use crate::core::repository::RepositoryStore;
use crate::fines::factory::create_fine_calculator;
use crate::loans::domain::LoanService;
use crate::loans::domain::service::LoanServiceImpl;
use crate::loans::factory;
use crate::loans::repository::LoanRepository;
use crate::loans::repository::mem_loan_repository::MemLoanRepository;
use crate::notify::factory::create_notification_channel;
use crate::notify::NotificationVia;

pub(crate) async fn create_loan_repository(store: RepositoryStore) -> Box<dyn LoanRepository> {
    match store {
        RepositoryStore::Memory => {
            Box::new(MemLoanRepository::new("loans"))
        }
    }
}

pub(crate) async fn create_loan_service(config: &Configuration, store: RepositoryStore,
                                        kind: FinePolicyKind, via: NotificationVia) -> Box<dyn LoanService> {
    let loan_repo = factory::create_loan_repository(store).await;
    let book_repo = create_book_repository(store).await;
    let borrower_repo = create_borrower_repository(store).await;
    let fine_calculator = create_fine_calculator(kind);
    let channel = create_notification_channel(via).await;
    Box::new(LoanServiceImpl::new(config, loan_repo, book_repo,
                                  borrower_repo, fine_calculator, channel))
}
