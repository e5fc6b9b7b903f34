pub mod luhn;
pub mod normalize;
pub mod session;

pub use crate::domain::model::{AttemptOutcome, CandidateNumber, SessionSummary, Verdict};
pub use crate::domain::ports::{CardValidator, ConfigProvider};
pub use crate::utils::error::Result;
