use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use teller_sim::{
    run_batch, Batch, BatchError, FailureReason, Ledger, MemoryLedger, Outcome, Policy,
    TransactionKind,
};

fn ledger_with(accounts: &[(&str, Decimal)]) -> MemoryLedger {
    let mut ledger = MemoryLedger::new();
    for &(id, balance) in accounts {
        ledger.open_account(id, balance);
    }
    ledger
}

#[test]
fn fcfs_batch_applies_deposits_and_withdrawals_in_arrival_order() {
    let mut ledger = ledger_with(&[("ACC1", dec!(100))]);
    let mut batch = Batch::new();
    batch
        .submit("ACC1", TransactionKind::Deposit, dec!(40), 0, 3, 1)
        .unwrap();
    batch
        .submit("ACC1", TransactionKind::Withdraw, dec!(90), 1, 2, 1)
        .unwrap();

    let report = run_batch(batch.requests(), &Policy::Fcfs, &mut ledger).unwrap();

    let tokens: Vec<u64> = report.rows().iter().map(|r| r.request.token()).collect();
    assert_eq!(tokens, vec![1, 2]);
    assert_eq!(
        report.rows()[0].outcome,
        Outcome::Success { balance: dec!(140) }
    );
    assert_eq!(
        report.rows()[1].outcome,
        Outcome::Success { balance: dec!(50) }
    );
    assert_eq!(ledger.read_balance("ACC1"), Ok(dec!(50)));
}

#[test]
fn sjf_completion_order_decides_side_effect_order() {
    // The long withdrawal arrives first but only succeeds because the short
    // deposit preempts it and settles first.
    let build = || {
        let mut batch = Batch::new();
        batch
            .submit("ACC1", TransactionKind::Withdraw, dec!(60), 0, 6, 1)
            .unwrap();
        batch
            .submit("ACC1", TransactionKind::Deposit, dec!(20), 0, 1, 1)
            .unwrap();
        batch
    };

    let mut ledger = ledger_with(&[("ACC1", dec!(50))]);
    let batch = build();
    let report = run_batch(batch.requests(), &Policy::Sjf, &mut ledger).unwrap();
    let tokens: Vec<u64> = report.rows().iter().map(|r| r.request.token()).collect();
    assert_eq!(tokens, vec![2, 1]);
    assert!(report.rows().iter().all(|r| r.outcome.is_success()));
    assert_eq!(ledger.read_balance("ACC1"), Ok(dec!(10)));

    // Same batch under FCFS: the withdrawal runs first and bounces.
    let mut ledger = ledger_with(&[("ACC1", dec!(50))]);
    let batch = build();
    let report = run_batch(batch.requests(), &Policy::Fcfs, &mut ledger).unwrap();
    assert_eq!(
        report.row_for_token(1).unwrap().outcome,
        Outcome::Failed(FailureReason::InsufficientFunds)
    );
    assert_eq!(ledger.read_balance("ACC1"), Ok(dec!(70)));
}

#[test]
fn failed_withdrawal_leaves_balance_and_batch_intact() {
    let mut ledger = ledger_with(&[("ACC1", dec!(30))]);
    let mut batch = Batch::new();
    batch
        .submit("ACC1", TransactionKind::Withdraw, dec!(100), 0, 2, 1)
        .unwrap();
    batch
        .submit("ACC1", TransactionKind::Deposit, dec!(5), 1, 2, 1)
        .unwrap();

    let report = run_batch(batch.requests(), &Policy::Fcfs, &mut ledger).unwrap();

    assert_eq!(
        report.row_for_token(1).unwrap().outcome,
        Outcome::Failed(FailureReason::InsufficientFunds)
    );
    // The failure is local: the deposit after it still ran.
    assert_eq!(
        report.row_for_token(2).unwrap().outcome,
        Outcome::Success { balance: dec!(35) }
    );
    assert_eq!(ledger.read_balance("ACC1"), Ok(dec!(35)));
}

#[test]
fn unknown_account_fails_only_that_request() {
    let mut ledger = ledger_with(&[("ACC1", dec!(10))]);
    let mut batch = Batch::new();
    batch
        .submit("GHOST", TransactionKind::Deposit, dec!(10), 0, 1, 1)
        .unwrap();
    batch
        .submit("ACC1", TransactionKind::Deposit, dec!(10), 0, 1, 1)
        .unwrap();

    let report = run_batch(batch.requests(), &Policy::RoundRobin { quantum: 2 }, &mut ledger)
        .unwrap();

    assert_eq!(
        report.row_for_token(1).unwrap().outcome,
        Outcome::Failed(FailureReason::AccountNotFound)
    );
    assert_eq!(
        report.row_for_token(2).unwrap().outcome,
        Outcome::Success { balance: dec!(20) }
    );
}

#[test]
fn priority_batch_serves_urgent_customer_first() {
    let mut ledger = ledger_with(&[("ACC1", dec!(25))]);
    let mut batch = Batch::new();
    // Intake order is the opposite of urgency.
    batch
        .submit("ACC1", TransactionKind::Withdraw, dec!(25), 0, 4, 3)
        .unwrap();
    batch
        .submit("ACC1", TransactionKind::Withdraw, dec!(25), 0, 3, 1)
        .unwrap();

    let report = run_batch(batch.requests(), &Policy::Priority, &mut ledger).unwrap();

    // The urgent withdrawal drains the account; the other one bounces.
    assert_eq!(
        report.row_for_token(2).unwrap().outcome,
        Outcome::Success { balance: dec!(0) }
    );
    assert_eq!(
        report.row_for_token(1).unwrap().outcome,
        Outcome::Failed(FailureReason::InsufficientFunds)
    );
    assert_eq!(report.row_for_token(2).unwrap().event.waiting_time, 0);
}

#[test]
fn report_means_match_exact_sums() {
    let mut ledger = ledger_with(&[("ACC1", dec!(1000))]);
    let mut batch = Batch::new();
    for (arrival, burst) in [(0, 5), (1, 3), (2, 4), (9, 2)] {
        batch
            .submit("ACC1", TransactionKind::Deposit, dec!(1), arrival, burst, 1)
            .unwrap();
    }

    let report = run_batch(batch.requests(), &Policy::Fcfs, &mut ledger).unwrap();

    let n = report.rows().len() as f64;
    let waiting_sum: u64 = report.rows().iter().map(|r| r.event.waiting_time).sum();
    let turnaround_sum: u64 = report.rows().iter().map(|r| r.event.turnaround_time).sum();
    assert_eq!(report.mean_waiting_time(), waiting_sum as f64 / n);
    assert_eq!(report.mean_turnaround_time(), turnaround_sum as f64 / n);
}

#[test]
fn empty_batch_is_rejected_before_any_mutation() {
    let mut ledger = ledger_with(&[("ACC1", dec!(77))]);
    let err = run_batch(&[], &Policy::Fcfs, &mut ledger).unwrap_err();
    assert_eq!(err, BatchError::EmptyBatch);
    assert_eq!(ledger.read_balance("ACC1"), Ok(dec!(77)));
}

#[test]
fn invalid_policy_selector_is_rejected_before_any_mutation() {
    let mut ledger = ledger_with(&[("ACC1", dec!(77))]);
    assert!(matches!(
        Policy::parse("edf", 2),
        Err(BatchError::InvalidPolicy(_))
    ));

    // A zero quantum smuggled past parse is still rejected by the driver.
    let mut batch = Batch::new();
    batch
        .submit("ACC1", TransactionKind::Deposit, dec!(1), 0, 1, 1)
        .unwrap();
    let err = run_batch(
        batch.requests(),
        &Policy::RoundRobin { quantum: 0 },
        &mut ledger,
    )
    .unwrap_err();
    assert!(matches!(err, BatchError::InvalidPolicy(_)));
    assert_eq!(ledger.read_balance("ACC1"), Ok(dec!(77)));
}

#[test]
fn every_request_gets_exactly_one_outcome() {
    let mut batch = Batch::new();
    for (arrival, burst, account) in [(0, 4, "ACC1"), (0, 4, "ACC2"), (3, 1, "ACC1")] {
        batch
            .submit(account, TransactionKind::Withdraw, dec!(10), arrival, burst, 1)
            .unwrap();
    }

    for policy in [
        Policy::Fcfs,
        Policy::Sjf,
        Policy::Priority,
        Policy::RoundRobin { quantum: 2 },
    ] {
        let mut ledger = ledger_with(&[("ACC1", dec!(100)), ("ACC2", dec!(100))]);
        let report = run_batch(batch.requests(), &policy, &mut ledger).unwrap();
        assert_eq!(report.rows().len(), 3, "{policy:?}");

        let mut tokens: Vec<u64> = report.rows().iter().map(|r| r.request.token()).collect();
        tokens.sort_unstable();
        assert_eq!(tokens, vec![1, 2, 3], "{policy:?}");
    }
}
