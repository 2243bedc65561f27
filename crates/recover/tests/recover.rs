// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use anyhow::Result;
use num_bigint::BigInt;
use proptest::prelude::*;
use sss_polynomial::Polynomial;
use sss_recover::{
    recover_secret, Point, RecoverError, Reconstructor, RecoveryOptions, ShareSet, ShareSetError,
    TracingObserver,
};

fn share_set(raw: &[(i64, i64)], threshold: usize) -> Result<ShareSet> {
    Ok(ShareSet::new(
        raw.iter().map(|&p| Point::from(p)).collect(),
        threshold,
    )?)
}

#[test]
fn test_two_points_on_a_line() -> Result<()> {
    // y = 2x + 1
    let set = share_set(&[(1, 3), (2, 5)], 2)?;
    assert_eq!(recover_secret(&set)?, BigInt::from(1));
    Ok(())
}

#[test]
fn test_single_share_constant_polynomial() -> Result<()> {
    let set = share_set(&[(5, 123456789)], 1)?;
    assert_eq!(recover_secret(&set)?, BigInt::from(123456789));
    Ok(())
}

#[test]
fn test_threshold_equals_share_count_uses_one_combination() -> Result<()> {
    let poly = Polynomial::from_ascending_coefficients(vec![
        BigInt::from(42),
        BigInt::from(-3),
        BigInt::from(8),
        BigInt::from(1),
    ]);
    let set = ShareSet::new(poly.sample((1..=4).map(BigInt::from)), 4)?;
    let report = Reconstructor::default().tally(&set)?;

    assert_eq!(report.attempted_combinations(), 1);
    assert_eq!(report.secret(), Some((&BigInt::from(42), 1)));
    Ok(())
}

#[test]
fn test_four_shares_threshold_three() -> Result<()> {
    // Every combination interpolates to a different integer, so each candidate has a single
    // vote and the first combination in enumeration order wins the tie
    let set = share_set(&[(1, 1994), (2, 6), (3, 1010), (4, 1988)], 3)?;
    let report = Reconstructor::default().tally(&set)?;

    let candidates: Vec<(BigInt, usize)> = report
        .tally()
        .iter()
        .map(|(secret, count)| (secret.clone(), count))
        .collect();
    assert_eq!(
        candidates,
        vec![
            (BigInt::from(6974), 1),
            (BigInt::from(5968), 1),
            (BigInt::from(3956), 1),
            (BigInt::from(-2080), 1),
        ]
    );
    assert_eq!(report.into_secret()?, BigInt::from(6974));
    Ok(())
}

#[test]
fn test_one_corrupted_share_is_outvoted() -> Result<()> {
    let secret: BigInt = "79836264049851".parse()?;
    let poly = Polynomial::from_ascending_coefficients(vec![
        secret.clone(),
        BigInt::from(9_876_543_210u64),
        BigInt::from(-77),
    ]);
    let mut points = poly.sample((1..=6).map(BigInt::from));
    points[3] = Point::new(points[3].x().clone(), points[3].y() + 1);

    let set = ShareSet::new(points, 3)?;
    let reconstructor = Reconstructor::default().with_observer(TracingObserver::new("corrupted"));
    let report = reconstructor.tally(&set)?;

    // C(5, 3) combinations avoid the bad share
    assert_eq!(report.tally().count(&secret), 10);
    assert_eq!(reconstructor.recover(&set)?, secret);
    Ok(())
}

#[test]
fn test_no_integral_combination_is_not_found() -> Result<()> {
    let set = share_set(&[(1, 1), (3, 2), (7, 5)], 2)?;
    assert_eq!(recover_secret(&set), Err(RecoverError::NotFound));
    Ok(())
}

#[test]
fn test_recovery_is_idempotent() -> Result<()> {
    let set = share_set(&[(1, 15), (2, 29), (3, 50), (4, 75), (5, 107)], 3)?;
    let first = recover_secret(&set)?;
    let second = recover_secret(&set)?;
    assert_eq!(first, second);
    assert_eq!(first, BigInt::from(7));
    Ok(())
}

#[test]
fn test_invalid_share_sets_are_rejected() {
    assert_eq!(
        share_set(&[(1, 1), (1, 2)], 2)
            .unwrap_err()
            .downcast::<ShareSetError>()
            .ok(),
        Some(ShareSetError::DuplicateIndex { x: BigInt::from(1) })
    );
    assert!(share_set(&[(1, 1)], 2).is_err());
    assert!(share_set(&[(1, 1)], 0).is_err());
}

fn arb_corrupted_share_set() -> impl Strategy<Value = (BigInt, ShareSet)> {
    (1usize..5)
        .prop_flat_map(|k| {
            let n = k + 2;
            (
                Just(k),
                prop::collection::vec(-10_000i64..10_000, k),
                0usize..n,
                1i64..1000,
            )
        })
        .prop_map(|(k, coeffs, bad, offset)| {
            let poly = Polynomial::from_ascending_coefficients(
                coeffs.into_iter().map(BigInt::from).collect(),
            );
            let mut points = poly.sample((1..=(k as i64 + 2)).map(BigInt::from));
            points[bad] = Point::new(points[bad].x().clone(), points[bad].y() + offset);
            let set = ShareSet::new(points, k).expect("sampled share set is valid");
            (poly.constant_term(), set)
        })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn outvotes_a_single_corrupted_share((secret, set) in arb_corrupted_share_set()) {
        // With n = k + 2 and one bad share, the k + 1 combinations that avoid it all agree.
        // For the abscissas 1..=k + 2 no wrong value is reached by more than two of the
        // combinations that include it.
        let report = Reconstructor::default().tally(&set).unwrap();
        prop_assert!(report.tally().count(&secret) >= set.threshold() + 1);
        prop_assert_eq!(recover_secret(&set), Ok(secret));
    }

    #[test]
    fn parallel_agrees_with_sequential(
        (_, set) in arb_corrupted_share_set(),
        batch_size in 1usize..8,
    ) {
        let sequential = Reconstructor::default().tally(&set).unwrap();
        let parallel = Reconstructor::new(RecoveryOptions { parallel: true, batch_size })
            .tally(&set)
            .unwrap();
        prop_assert_eq!(parallel, sequential);
    }
}
