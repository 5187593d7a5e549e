//! Error type shared by every engine in the crate.
//!
//! Two failure classes exist:
//!
//! - **InvalidArgument**: a documented precondition was violated by the caller
//!   (e.g. `k` outside `[1, distinct]`, a count vector whose length does not
//!   match the alphabet).
//! - **StrategyDisagreement**: raised only by the [`harness`](crate::harness)
//!   when two strategies for the same problem return incompatible results.
//!
//! A pair search that finds nothing is *not* an error; it returns `None`.

use thiserror::Error;

use crate::harness::Mismatch;

#[derive(Debug, Error)]
pub enum Error {
    /// A precondition documented on the called operation does not hold.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Strategies for the same problem disagree on the same input.
    #[error("strategy disagreement: {0}")]
    StrategyDisagreement(Box<Mismatch>),
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
