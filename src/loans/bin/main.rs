include!("../../lib.rs");

use std::collections::HashMap;
use chrono::{Duration, Utc};
use tracing::log::{info, warn};
use crate::books::domain::model::BookEntity;
use crate::books::factory::create_book_repository;
use crate::borrowers::domain::model::BorrowerEntity;
use crate::borrowers::factory::create_borrower_repository;
use crate::core::command::{Command, CommandError};
use crate::core::domain::Configuration;
use crate::core::library::{BookStatus, FinePolicyKind};
use crate::core::repository::RepositoryStore;
use crate::loans::command::checkout_book_cmd::{CheckoutBookCommand, CheckoutBookCommandRequest};
use crate::loans::command::return_book_cmd::{ReturnBookCommand, ReturnBookCommandRequest};
use crate::loans::factory::{create_loan_repository, create_loan_service};
use crate::notify::NotificationVia;
use crate::utils::store::setup_tracing;

#[tokio::main]
async fn main() -> Result<(), CommandError> {
    setup_tracing();

    let config = Configuration::new("central");
    let store = RepositoryStore::Memory;

    let book_repo = create_book_repository(store).await;
    let borrower_repo = create_borrower_repository(store).await;
    let loan_repo = create_loan_repository(store).await;

    let book1 = BookEntity::new("978-0-452-28423-4", "1984",
                                "George Orwell", BookStatus::Available);
    let book2 = BookEntity::new("978-84-376-0494-7", "Cien anos de soledad",
                                "Gabriel Garcia Marquez", BookStatus::Available);
    let _ = book_repo.create(&book1).await?;
    let _ = book_repo.create(&book2).await?;

    let ana = BorrowerEntity::new("Ana Garcia", "ana@example.org");
    let carlos = BorrowerEntity::new("Carlos Lopez", "carlos@example.org");
    let _ = borrower_repo.create(&ana).await?;
    let _ = borrower_repo.create(&carlos).await?;

    // regular borrowers pay the standard fine and are notified by email;
    // students pay the reduced fine and are notified by SMS
    let regular_svc = create_loan_service(&config, store,
                                          FinePolicyKind::Standard, NotificationVia::Email).await;
    let student_svc = create_loan_service(&config, store,
                                          FinePolicyKind::Discounted, NotificationVia::Sms).await;

    let checkout_regular = CheckoutBookCommand::new(regular_svc);
    let loan1 = checkout_regular.execute(CheckoutBookCommandRequest::new(
        ana.borrower_id.to_string(), book1.book_id.to_string())).await?.loan;
    let checkout_student = CheckoutBookCommand::new(student_svc);
    let loan2 = checkout_student.execute(CheckoutBookCommandRequest::new(
        carlos.borrower_id.to_string(), book2.book_id.to_string())).await?.loan;

    // a second checkout of the same copy is rejected
    if let Err(err) = checkout_student.execute(CheckoutBookCommandRequest::new(
        carlos.borrower_id.to_string(), book1.book_id.to_string())).await {
        warn!("checkout rejected {:?}", err);
    }

    // backdate the first loan to simulate a late return
    let mut stored = loan_repo.get(loan1.loan_id.as_str()).await?;
    stored.due_at = Utc::now().naive_utc() - Duration::days(3);
    let _ = loan_repo.update(&stored).await?;

    let overdue_svc = create_loan_service(&config, store,
                                          FinePolicyKind::Standard, NotificationVia::Email).await;
    let overdue = overdue_svc.query_overdue(&HashMap::new(), None, 50).await?;
    info!("overdue loans before returns: {}", overdue.records.len());

    let return_regular = ReturnBookCommand::new(create_loan_service(
        &config, store, FinePolicyKind::Standard, NotificationVia::Email).await);
    let late = return_regular.execute(ReturnBookCommandRequest::new(
        loan1.loan_id.to_string())).await?.receipt;
    info!("'{}' returned {} days late, fine owed {}",
          book1.title, late.overdue_days, late.fine_amount);

    let return_student = ReturnBookCommand::new(create_loan_service(
        &config, store, FinePolicyKind::Discounted, NotificationVia::Sms).await);
    let on_time = return_student.execute(ReturnBookCommandRequest::new(
        loan2.loan_id.to_string())).await?.receipt;
    info!("'{}' returned on time, fine owed {}", book2.title, on_time.fine_amount);

    Ok(())
}
