pub mod error;
pub mod request;

pub use error::{BatchError, InvalidRequest};
pub use request::{Batch, Request, Ticks, Token, TransactionKind};
