//! End-to-end launch sequence tests against the in-memory ledger.

use launch_factory::{LaunchParams, LaunchPhase, Launcher};
use launch_sdk::testing::MockLedger;
use launch_types::{LaunchError, LaunchStep, Q64};
use solana_sdk::pubkey::Pubkey;

const NOW: i64 = 1_700_000_000;

fn mint_pair() -> (Pubkey, Pubkey) {
    // Fixed byte patterns pin the canonical order: low sorts first.
    (
        Pubkey::new_from_array([1u8; 32]),
        Pubkey::new_from_array([2u8; 32]),
    )
}

fn params() -> LaunchParams {
    LaunchParams {
        supply_a: 10_000_000_000,
        supply_b: 10_000_000_000,
        decimals_a: 9,
        decimals_b: 9,
        fee_bps: 30,
        tick_spacing: 60,
        starting_sqrt_price: Q64,
        tick_lower: None,
        tick_upper: None,
        deposit_a: 1_000_000_000,
        deposit_b: 1_000_000_000,
        slippage_bps: 1_000,
        deadline_offset_secs: 3_600,
        recipient: Pubkey::new_unique(),
        hook: None,
    }
}

#[test]
fn happy_path_mints_funds_and_submits() {
    let (lo, hi) = mint_pair();
    let ledger = MockLedger::new(NOW).with_fixed_mints(vec![lo, hi]);
    let mut launcher = Launcher::new(&ledger, params());

    let report = launcher.run().unwrap();
    assert_eq!(*launcher.phase(), LaunchPhase::Completed);

    // Asset A was issued first, so it received the low mint and became
    // canonical asset 0.
    assert_eq!(report.mint_a, lo.to_string());
    assert_eq!(report.mint_0, lo.to_string());
    assert_eq!(report.mint_1, hi.to_string());
    assert_eq!(report.starting_tick, 0);

    assert_eq!(ledger.issued().len(), 2);
    assert_eq!(ledger.allowances().len(), 2);
    let submissions = ledger.submissions();
    assert_eq!(submissions.len(), 1);

    let (identity, request) = &submissions[0];
    assert_eq!(identity.mint_0, lo);
    assert_eq!(identity.fee_bps, 30);
    assert!(request.liquidity > 0);
    // Maxima carry the 10% slippage margin, floored.
    assert_eq!(request.amount_0_max, 1_100_000_000);
    assert_eq!(request.amount_1_max, 1_100_000_000);
    assert_eq!(request.deadline, NOW + 3_600);
    // Widest on-grid range for spacing 60.
    assert_eq!(request.tick_lower, -request.tick_upper);
    assert_eq!(request.tick_upper % 60, 0);
}

#[test]
fn supply_split_is_recorded_on_the_issued_assets() {
    let ledger = MockLedger::new(NOW);
    let mut p = params();
    p.supply_a = 101;
    p.deposit_a = 50;
    p.deposit_b = 50;
    Launcher::new(&ledger, p).run().unwrap();

    let issued = ledger.issued();
    assert_eq!(issued[0].issuer_amount, 50);
    assert_eq!(issued[0].partner_amount, 51);
    assert_eq!(issued[1].issuer_amount + issued[1].partner_amount, 10_000_000_000);
}

#[test]
fn canonical_order_does_not_depend_on_issuance_order() {
    let (lo, hi) = mint_pair();
    let forward = MockLedger::new(NOW).with_fixed_mints(vec![lo, hi]);
    let reversed = MockLedger::new(NOW).with_fixed_mints(vec![hi, lo]);

    let a = Launcher::new(&forward, params()).run().unwrap();
    let b = Launcher::new(&reversed, params()).run().unwrap();

    assert_eq!(a.mint_0, b.mint_0);
    assert_eq!(a.mint_1, b.mint_1);
}

#[test]
fn second_launch_of_the_same_pair_fails_at_pool_initialization() {
    let (lo, hi) = mint_pair();
    let ledger = MockLedger::new(NOW).with_fixed_mints(vec![lo, hi]);

    Launcher::new(&ledger, params()).run().unwrap();

    let mut second = Launcher::new(&ledger, params());
    let failure = second.run().unwrap_err();
    assert_eq!(failure.step, LaunchStep::InitializePool);
    assert_eq!(failure.cause, LaunchError::AlreadyInitialized);
    assert!(matches!(
        second.phase(),
        LaunchPhase::Failed {
            step: LaunchStep::InitializePool,
            ..
        }
    ));

    // The failed run granted nothing and submitted nothing further.
    assert_eq!(ledger.allowances().len(), 2);
    assert_eq!(ledger.submissions().len(), 1);
}

#[test]
fn a_launcher_never_runs_twice() {
    let ledger = MockLedger::new(NOW);
    let mut launcher = Launcher::new(&ledger, params());
    launcher.run().unwrap();

    let failure = launcher.run().unwrap_err();
    assert_eq!(failure.cause, LaunchError::AlreadyRun);
    assert_eq!(ledger.submissions().len(), 1);
}

#[test]
fn late_submission_expires_and_leaves_no_position() {
    // The transaction lands two hours late against a one hour deadline.
    let ledger = MockLedger::new(NOW).with_submit_latency(7_200);
    let mut launcher = Launcher::new(&ledger, params());

    let failure = launcher.run().unwrap_err();
    assert_eq!(failure.step, LaunchStep::SubmitLiquidity);
    assert_eq!(failure.cause, LaunchError::DeadlineExpired);
    assert!(ledger.submissions().is_empty());
}

#[test]
fn failed_issuance_stops_the_run_immediately() {
    let ledger = MockLedger::new(NOW).with_failing_issuance();
    let mut launcher = Launcher::new(&ledger, params());

    let failure = launcher.run().unwrap_err();
    assert_eq!(failure.step, LaunchStep::IssueAssets);
    assert!(ledger.issued().is_empty());
    assert!(ledger.submissions().is_empty());
}

#[test]
fn failed_allowance_stops_before_submission() {
    let (lo, hi) = mint_pair();
    let ledger = MockLedger::new(NOW)
        .with_fixed_mints(vec![lo, hi])
        .with_failing_allowance(lo);
    let mut launcher = Launcher::new(&ledger, params());

    let failure = launcher.run().unwrap_err();
    assert_eq!(failure.step, LaunchStep::GrantAllowances);
    assert!(matches!(
        failure.cause,
        LaunchError::Allowance { mint, .. } if mint == lo
    ));
    assert!(ledger.submissions().is_empty());
}

#[test]
fn price_drift_beyond_the_margin_trips_slippage() {
    // A 20% sqrt-price drift needs ~20% more of asset 1 than deposited,
    // beyond the 10% margin.
    let ledger = MockLedger::new(NOW).with_price_drift(2_000);
    let failure = Launcher::new(&ledger, params()).run().unwrap_err();
    assert_eq!(failure.step, LaunchStep::SubmitLiquidity);
    assert_eq!(failure.cause, LaunchError::SlippageExceeded);
    assert!(ledger.submissions().is_empty());

    // A 5% drift stays inside the margin.
    let ledger = MockLedger::new(NOW).with_price_drift(500);
    Launcher::new(&ledger, params()).run().unwrap();
    assert_eq!(ledger.submissions().len(), 1);
}

#[test]
fn custom_range_must_sit_on_the_spacing_grid() {
    let ledger = MockLedger::new(NOW);
    let mut p = params();
    p.tick_lower = Some(-90);
    p.tick_upper = Some(120);
    let failure = Launcher::new(&ledger, p).run().unwrap_err();
    assert_eq!(failure.step, LaunchStep::DeriveLiquidity);

    let mut p = params();
    p.tick_lower = Some(-120);
    p.tick_upper = Some(120);
    let report = Launcher::new(&ledger, p).run().unwrap();
    assert_eq!(report.tick_lower, -120);
    assert_eq!(report.tick_upper, 120);
}

#[test]
fn empty_or_inverted_range_is_rejected_before_submission() {
    for (lower, upper) in [(60, 60), (120, -120)] {
        let ledger = MockLedger::new(NOW);
        let mut p = params();
        p.tick_lower = Some(lower);
        p.tick_upper = Some(upper);
        let failure = Launcher::new(&ledger, p).run().unwrap_err();
        assert_eq!(failure.step, LaunchStep::DeriveLiquidity);
        assert!(ledger.submissions().is_empty());
    }
}

#[test]
fn uneven_decimals_still_derive_joint_liquidity() {
    // 100 units at 8 decimals against 10,000,000 units at 6 decimals,
    // priced so both deposits bind roughly together.
    let ledger = MockLedger::new(NOW);
    let mut p = params();
    p.decimals_a = 8;
    p.decimals_b = 6;
    p.supply_a = 100_00000000;
    p.supply_b = 10_000_000_000_000;
    p.deposit_a = 25_00000000;
    p.deposit_b = 2_500_000_000_000;
    // price = amount_1 / amount_0 = 1000 raw; sqrt is ~31.6 in Q64.64.
    p.starting_sqrt_price = 583_337_266_871_351_588_864; // floor(sqrt(1000) * 2^64)
    let report = Launcher::new(&ledger, p).run().unwrap();

    let (_, request) = &ledger.submissions()[0];
    assert!(request.liquidity > 0);
    assert!(report.starting_tick > 0);
}
