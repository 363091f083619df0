//! Integration tests for the scaling analyzer.

use memwall_energy::common::EnergyError;
use memwall_energy::model::{ScalingAnalyzer, ScalingRecord, WorkloadEnergyCalculator};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

/// Tests that records come back in input order and match point evaluations.
#[test]
fn test_sweep_preserves_order() {
    let calc = WorkloadEnergyCalculator::default();
    let analyzer = ScalingAnalyzer::new(calc);

    let sizes = [512, 8, 64];
    let records = analyzer.sweep(&sizes).unwrap();

    assert_eq!(records.len(), 3);
    for (record, &n) in records.iter().zip(sizes.iter()) {
        let expected = ScalingRecord::from(calc.evaluate(n).unwrap());
        assert_eq!(*record, expected);
    }
    assert_eq!(
        records.iter().map(|r| r.size).collect::<Vec<_>>(),
        vec![512, 8, 64]
    );
}

/// Tests that duplicate sizes produce duplicate records.
#[test]
fn test_sweep_keeps_duplicates() {
    let records = ScalingAnalyzer::default().sweep(&[4, 4, 2, 4]).unwrap();
    assert_eq!(records.len(), 4);
    assert_eq!(records[0], records[1]);
    assert_eq!(records[0], records[3]);
    assert_ne!(records[0], records[2]);
}

/// Tests that an empty sweep is not an error.
#[test]
fn test_sweep_empty() {
    let records = ScalingAnalyzer::default().sweep(&[]).unwrap();
    assert!(records.is_empty());
}

/// Tests that the first negative size aborts the sweep.
#[test]
fn test_sweep_fails_fast() {
    let err = ScalingAnalyzer::default()
        .sweep(&[1, 2, -3, -4, 5])
        .unwrap_err();
    assert!(matches!(err, EnergyError::InvalidSize(-3)));
}

/// Tests that a sweep may include the degenerate size.
#[test]
fn test_sweep_with_zero() {
    let records = ScalingAnalyzer::default().sweep(&[0, 1]).unwrap();
    assert_eq!(records[0].compute_energy, 0.0);
    assert_eq!(records[0].ratio_no_reuse(), None);
    assert!(records[1].ratio_no_reuse().is_some());
}

/// Tests the trend across sizes 1, 2, 4, 8.
///
/// Compute grows as n³ and memory as n², so compute strictly increases and
/// the memory/compute ratio shrinks as 40/n without reuse.
#[test]
fn test_sweep_trend() {
    let records = ScalingAnalyzer::default().sweep(&[1, 2, 4, 8]).unwrap();
    assert_eq!(records.len(), 4);

    for pair in records.windows(2) {
        assert!(pair[0].compute_energy < pair[1].compute_energy);
        assert!(pair[0].memory_energy_no_reuse < pair[1].memory_energy_no_reuse);
        assert!(pair[0].ratio_no_reuse().unwrap() > pair[1].ratio_no_reuse().unwrap());
    }

    for r in &records {
        assert!(approx_eq(r.ratio_no_reuse().unwrap(), 40.0 / r.size as f64));
    }
}

/// Tests the total energy helper on a record.
#[test]
fn test_record_total() {
    let records = ScalingAnalyzer::default().sweep(&[2]).unwrap();
    let r = records[0];
    assert!(approx_eq(r.total_with_reuse(), 40.0 + 8.0 * 19.0));
}

/// Tests ideal O(n³)/O(n²) projections from the first record.
#[test]
fn test_theoretical_projection() {
    let records = ScalingAnalyzer::default()
        .sweep(&[64, 128, 256])
        .unwrap();
    let projections = ScalingAnalyzer::theoretical_projection(&records);

    assert_eq!(projections.len(), 3);
    for (p, r) in projections.iter().zip(records.iter()) {
        assert_eq!(p.size, r.size);
        assert!(approx_eq(p.compute_energy, r.compute_energy));
        assert!(approx_eq(p.memory_energy_with_reuse, r.memory_energy_with_reuse));
    }
}

/// Tests that projections are empty without a usable base size.
#[test]
fn test_theoretical_projection_empty() {
    assert!(ScalingAnalyzer::theoretical_projection(&[]).is_empty());

    let records = ScalingAnalyzer::default().sweep(&[0, 4]).unwrap();
    assert!(ScalingAnalyzer::theoretical_projection(&records).is_empty());
}
