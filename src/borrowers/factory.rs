use crate::borrowers::repository::BorrowerRepository;
use crate::borrowers::repository::mem_borrower_repository::MemBorrowerRepository;
use crate::core::repository::RepositoryStore;

pub(crate) async fn create_borrower_repository(store: RepositoryStore) -> Box<dyn BorrowerRepository> {
    match store {
        RepositoryStore::Memory => {
            Box::new(MemBorrowerRepository::new("borrowers"))
        }
    }
}
