use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::InvalidRequest;

/// Simulated-clock time unit. The clock is a discrete counter, never wall time.
pub type Ticks = u64;

/// Sequence number assigned at intake. Display only; scheduling never reads it.
pub type Token = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

/// One pending teller transaction. Validated at construction (positive
/// burst, non-negative amount, non-empty account) and immutable afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request {
    token: Token,
    account_id: String,
    kind: TransactionKind,
    amount: Decimal,
    arrival_time: Ticks,
    burst_time: Ticks,
    priority: i32,
}

impl Request {
    pub fn new(
        token: Token,
        account_id: impl Into<String>,
        kind: TransactionKind,
        amount: Decimal,
        arrival_time: Ticks,
        burst_time: Ticks,
        priority: i32,
    ) -> Result<Self, InvalidRequest> {
        let account_id = account_id.into();
        if burst_time == 0 {
            return Err(InvalidRequest::ZeroBurst { token });
        }
        if amount.is_sign_negative() {
            return Err(InvalidRequest::NegativeAmount { token, amount });
        }
        if account_id.is_empty() {
            return Err(InvalidRequest::EmptyAccountId { token });
        }

        Ok(Self {
            token,
            account_id,
            kind,
            amount,
            arrival_time,
            burst_time,
            priority,
        })
    }

    pub fn token(&self) -> Token {
        self.token
    }

    pub fn account_id(&self) -> &str {
        &self.account_id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn arrival_time(&self) -> Ticks {
        self.arrival_time
    }

    pub fn burst_time(&self) -> Ticks {
        self.burst_time
    }

    /// Lower value means more urgent. Only the Priority policy reads this.
    pub fn priority(&self) -> i32 {
        self.priority
    }
}

/// Intake queue for one run: assigns tokens from 1 and rejects malformed
/// requests before they reach the scheduler.
#[derive(Debug, Default)]
pub struct Batch {
    requests: Vec<Request>,
}

impl Batch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn submit(
        &mut self,
        account_id: impl Into<String>,
        kind: TransactionKind,
        amount: Decimal,
        arrival_time: Ticks,
        burst_time: Ticks,
        priority: i32,
    ) -> Result<Token, InvalidRequest> {
        let token = self.requests.len() as Token + 1;
        let request = Request::new(
            token,
            account_id,
            kind,
            amount,
            arrival_time,
            burst_time,
            priority,
        )?;
        self.requests.push(request);
        Ok(token)
    }

    pub fn requests(&self) -> &[Request] {
        &self.requests
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rejects_zero_burst() {
        let err = Request::new(1, "ACC1", TransactionKind::Deposit, dec!(10), 0, 0, 0);
        assert_eq!(err.unwrap_err(), InvalidRequest::ZeroBurst { token: 1 });
    }

    #[test]
    fn rejects_negative_amount() {
        let err = Request::new(1, "ACC1", TransactionKind::Withdraw, dec!(-5), 0, 3, 0);
        assert!(matches!(
            err.unwrap_err(),
            InvalidRequest::NegativeAmount { token: 1, .. }
        ));
    }

    #[test]
    fn rejects_empty_account() {
        let err = Request::new(1, "", TransactionKind::Deposit, dec!(1), 0, 1, 0);
        assert_eq!(err.unwrap_err(), InvalidRequest::EmptyAccountId { token: 1 });
    }

    #[test]
    fn batch_assigns_sequential_tokens() {
        let mut batch = Batch::new();
        let t1 = batch
            .submit("ACC1", TransactionKind::Deposit, dec!(10), 0, 2, 0)
            .unwrap();
        let t2 = batch
            .submit("ACC2", TransactionKind::Withdraw, dec!(5), 1, 3, 1)
            .unwrap();
        assert_eq!((t1, t2), (1, 2));
        assert_eq!(batch.len(), 2);
        assert_eq!(batch.requests()[1].token(), 2);
    }

    #[test]
    fn rejected_submission_does_not_consume_a_token() {
        let mut batch = Batch::new();
        batch
            .submit("ACC1", TransactionKind::Deposit, dec!(10), 0, 2, 0)
            .unwrap();
        assert!(batch
            .submit("ACC2", TransactionKind::Deposit, dec!(1), 0, 0, 0)
            .is_err());
        let t = batch
            .submit("ACC3", TransactionKind::Deposit, dec!(1), 0, 1, 0)
            .unwrap();
        assert_eq!(t, 2);
    }
}
