//! # Flow Plan Utility
//!
//! This binary prints the complete replacement flow set a swap request
//! would submit for a user, without submitting anything.
//!
//! ## Usage
//!
//! ```bash
//! cargo run --package flow-plan --bin flow_plan -- \
//!     0xYOUR_ACCOUNT DAI USDC 100 week [MIN_OUT [MAX_OUT]]
//! ```
//!
//! The program will:
//! 1. Load `SUBGRAPH_URL` (and optionally `POOL_ADDRESS`) from the environment
//! 2. Resolve both tokens by symbol or address
//! 3. Fetch the account's active continuous swaps
//! 4. Report whether an existing stream for the pair would be updated
//! 5. Print the reconciled flow set, per second and per period

use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Context;
use lib_core::error::Result;
use lib_core::model::{FlowArgument, SwapRequest};
use lib_stream::{rates, SubgraphHttpClient, SubmissionGateway, SubmissionReceipt, SwapService};
use lib_utils::time::TimePeriod;

/// Gateway stand-in so the service can be wired without any chain access.
struct PlanOnlyGateway;

#[async_trait::async_trait]
impl SubmissionGateway for PlanOnlyGateway {
    async fn submit(
        &self,
        _source_token: &str,
        _pool: &str,
        _account: &str,
        _args: &[FlowArgument],
    ) -> Result<SubmissionReceipt> {
        Err(lib_core::AppError::Submission(
            "flow-plan is a dry-run tool; nothing is submitted".to_string(),
        ))
    }
}

fn usage() -> String {
    let periods: Vec<&str> = TimePeriod::ALL.iter().map(|p| p.as_str()).collect();
    format!(
        "usage: flow_plan ACCOUNT FROM_TOKEN TO_TOKEN RATE PERIOD [MIN_OUT [MAX_OUT]]\n\
         periods: {}",
        periods.join(", ")
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    lib_core::config::init_config().map_err(anyhow::Error::msg)?;

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() < 5 || args.len() > 7 {
        anyhow::bail!(usage());
    }

    let account = args[0].to_lowercase();
    lib_utils::validate_address(&account).map_err(anyhow::Error::msg)?;
    let period: TimePeriod = args[4]
        .parse()
        .with_context(|| format!("unknown period '{}'", args[4]))?;

    let client = Arc::new(SubgraphHttpClient::from_config()?);

    let token_in = client.resolve_token(&args[1]).await?;
    let token_out = client.resolve_token(&args[2]).await?;

    let mut request = SwapRequest::new(token_in.clone(), token_out.clone(), args[3].clone(), period);
    if args.len() > 5 {
        request = request.with_bounds(args.get(5).cloned(), args.get(6).cloned());
    }

    let pool = match &lib_core::config::core_config().pool_address {
        Some(pool) => pool.clone(),
        None => client
            .all_pools()
            .await?
            .first()
            .map(|p| p.id.clone())
            .context("no pools registered in subgraph")?,
    };

    // Symbol lookup for printing destination addresses readably
    let symbols: HashMap<String, String> = client
        .all_tokens()
        .await?
        .into_iter()
        .map(|t| (t.id.clone(), t.symbol))
        .collect();

    println!("============================================");
    println!("  Flow Plan (dry run)");
    println!("============================================");
    println!();
    println!("Account: {}", account);
    println!("Pool:    {}", pool);
    println!(
        "Request: {} {} / {} -> {}",
        request.amount, token_in.symbol, period, token_out.symbol
    );
    println!();

    let service = SwapService::new(client.clone(), Arc::new(PlanOnlyGateway));

    if let Some(existing) = service.existing_for_pair(&account, &request).await? {
        println!(
            "An existing continuous swap for this pair (rate {} {}/second) will be updated.",
            existing.rate_in, token_in.symbol
        );
        println!();
    }

    let plan = service.preview(&account, &request).await?;

    println!("Replacement flow set for {} ({} entries):", token_in.symbol, plan.len());
    for arg in &plan {
        let dest = symbols
            .get(&arg.dest_token)
            .cloned()
            .unwrap_or_else(|| arg.dest_token.clone());
        println!(
            "  -> {}: {} /second ({} /{}), min {} max {} /second",
            dest,
            arg.in_amount,
            rates::per_period(arg.in_amount, period),
            period,
            arg.min_out,
            arg.max_out,
        );
    }
    println!();
    println!("No transaction was submitted.");

    Ok(())
}
