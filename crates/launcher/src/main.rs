use std::path::PathBuf;
use std::str::FromStr;

use clap::Parser;
use solana_sdk::{pubkey::Pubkey, signer::Signer};
use tracing_subscriber::EnvFilter;

use launch_factory::params::resolve_starting_sqrt_price;
use launch_factory::{LaunchParams, Launcher};
use launch_sdk::{load_keypair, LaunchClient, SdkConfig};
use launch_types::{
    DEFAULT_DEADLINE_OFFSET_SECS, DEFAULT_DECIMALS, DEFAULT_FEE_BPS, DEFAULT_SLIPPAGE_BPS,
    DEFAULT_TICK_SPACING,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "One-shot token pair and pool launch")]
struct Args {
    #[arg(long)]
    rpc_url: String,
    #[arg(long)]
    payer_path: String,
    #[arg(long)]
    pool_program: String,
    #[arg(long)]
    allowance_program: String,
    #[arg(long)]
    position_manager: String,
    /// Fixed partner receiving half of each issued supply
    #[arg(long)]
    partner: String,
    #[arg(long)]
    supply_a: u64,
    #[arg(long)]
    supply_b: u64,
    #[arg(long, default_value_t = DEFAULT_DECIMALS)]
    decimals_a: u8,
    #[arg(long, default_value_t = DEFAULT_DECIMALS)]
    decimals_b: u8,
    #[arg(long, default_value_t = DEFAULT_FEE_BPS)]
    fee_bps: u16,
    #[arg(long, default_value_t = DEFAULT_TICK_SPACING)]
    tick_spacing: u16,
    /// Starting pool price as a Q64.64 square root
    #[arg(long, conflicts_with = "starting_price")]
    starting_sqrt_price: Option<u128>,
    /// Starting pool price as a plain Q64.64 exchange rate
    #[arg(long)]
    starting_price: Option<u128>,
    /// Position range; omit both for the widest on-grid range
    #[arg(long)]
    tick_lower: Option<i32>,
    #[arg(long)]
    tick_upper: Option<i32>,
    #[arg(long)]
    deposit_a: u64,
    #[arg(long)]
    deposit_b: u64,
    #[arg(long, default_value_t = DEFAULT_SLIPPAGE_BPS)]
    slippage_bps: u64,
    #[arg(long, default_value_t = DEFAULT_DEADLINE_OFFSET_SECS)]
    deadline_offset_secs: i64,
    /// Position owner; defaults to the payer
    #[arg(long)]
    recipient: Option<String>,
    /// Optional hook program baked into the pool identity
    #[arg(long)]
    hook: Option<String>,
    #[arg(long, default_value = "launch_state.json")]
    out: PathBuf,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();
    let payer = load_keypair(&args.payer_path)?;
    let payer_pubkey = payer.pubkey();
    let config = SdkConfig::new(
        args.rpc_url,
        payer,
        Pubkey::from_str(&args.pool_program)?,
        Pubkey::from_str(&args.allowance_program)?,
        Pubkey::from_str(&args.position_manager)?,
        Pubkey::from_str(&args.partner)?,
    );
    let client = LaunchClient::new(config);

    let recipient = match &args.recipient {
        Some(r) => Pubkey::from_str(r)?,
        None => payer_pubkey,
    };
    let hook = args.hook.as_deref().map(Pubkey::from_str).transpose()?;
    let starting_sqrt_price =
        resolve_starting_sqrt_price(args.starting_price, args.starting_sqrt_price)?;

    let params = LaunchParams {
        supply_a: args.supply_a,
        supply_b: args.supply_b,
        decimals_a: args.decimals_a,
        decimals_b: args.decimals_b,
        fee_bps: args.fee_bps,
        tick_spacing: args.tick_spacing,
        starting_sqrt_price,
        tick_lower: args.tick_lower,
        tick_upper: args.tick_upper,
        deposit_a: args.deposit_a,
        deposit_b: args.deposit_b,
        slippage_bps: args.slippage_bps,
        deadline_offset_secs: args.deadline_offset_secs,
        recipient,
        hook,
    };
    params.validate()?;

    // Preflight checks
    println!("Preflight checks:");
    let mint_rent = client.mint_rent()?;
    let payer_balance = client.payer_balance()?;
    println!("  rent per mint: {}", mint_rent);
    println!("  payer balance: {}", payer_balance);
    // Two mints plus four token accounts; the account rent estimate is
    // coarse, so require headroom.
    if payer_balance < mint_rent * 8 {
        anyhow::bail!("insufficient payer balance for rent");
    }

    println!("Launching pool...");
    let mut launcher = Launcher::new(&client, params);
    let report = launcher.run()?;

    println!("mint A:        {}", report.mint_a);
    println!("mint B:        {}", report.mint_b);
    println!("canonical 0/1: {} / {}", report.mint_0, report.mint_1);
    println!("starting tick: {}", report.starting_tick);
    println!("range:         [{}, {}]", report.tick_lower, report.tick_upper);
    println!("liquidity:     {}", report.liquidity);
    println!("position mint: {}", report.position_mint);
    println!("signature:     {}", report.signature);

    report.save(&args.out)?;
    println!("state written to {}", args.out.display());
    Ok(())
}
