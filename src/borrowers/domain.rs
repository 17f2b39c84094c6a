use crate::core::domain::Identifiable;

pub mod model;

pub(crate) trait Borrower: Identifiable {
    // display name that loan notifications are addressed to
    fn recipient(&self) -> String;
}
