use std::error::Error;

use average::Estimate;
use rand::prelude::*;
use rust_decimal::Decimal;
use teller_sim::{run_batch, Batch, MemoryLedger, Policy, TransactionKind, DEFAULT_QUANTUM};

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let selector = std::env::args().nth(1).unwrap_or_else(|| "fcfs".into());
    let policy = Policy::parse(&selector, DEFAULT_QUANTUM)?;

    let num_accounts = 4;
    let batch = bernoulli_batch(40, 0.3, 1, 6, num_accounts, 0)?;

    let mut ledger = MemoryLedger::new();
    for acc in 0..num_accounts {
        ledger.open_account(format!("ACC{acc}"), Decimal::new(20_000, 2));
    }

    let report = run_batch(batch.requests(), &policy, &mut ledger)?;

    println!("policy: {selector}, {} customers", batch.len());
    println!("{report}");
    println!(
        "mean burst length: {:.2} ticks",
        avg(batch.requests().iter().map(|r| r.burst_time() as f64))
    );
    println!(
        "failed transactions: {}",
        report.rows().iter().filter(|r| !r.outcome.is_success()).count()
    );

    Ok(())
}

// Customers trickle in over a tick horizon with arrival probability
// `p_arrival`; bursts and amounts are drawn uniformly.
fn bernoulli_batch(
    ticks: u64,
    p_arrival: f64,
    min_burst: u64,
    max_burst: u64,
    num_accounts: u64,
    seed: u64,
) -> Result<Batch, Box<dyn Error>> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut batch = Batch::new();

    for t in 0..ticks {
        if rng.random::<f64>() < p_arrival {
            let kind = if rng.random::<f64>() < 0.5 {
                TransactionKind::Deposit
            } else {
                TransactionKind::Withdraw
            };
            let amount = Decimal::new(rng.random_range(100..10_000), 2);
            let account = format!("ACC{}", rng.random_range(0..num_accounts));
            let burst = rng.random_range(min_burst..=max_burst);
            let priority = rng.random_range(1..=5);

            batch.submit(account, kind, amount, t, burst, priority)?;
        }
    }

    Ok(batch)
}

fn avg(iter: impl Iterator<Item = f64>) -> f64 {
    iter.collect::<average::Mean>().estimate()
}
