use crate::domain::model::{CandidateNumber, EmptyPolicy};

/// A checksum scheme the input loop can run candidates through.
pub trait CardValidator {
    fn is_valid(&self, number: &CandidateNumber) -> bool;
}

pub trait ConfigProvider {
    fn prompt(&self) -> &str;
    fn empty_policy(&self) -> EmptyPolicy;
    fn max_attempts(&self) -> Option<usize>;
}
