//! Integration tests for common utilities module.

use memwall_energy::common::*;

/// Tests unit conversion from picojoules.
#[test]
fn test_unit_conversion() {
    assert_eq!(EnergyUnit::Picojoule.from_picojoules(83_886_080.0), 83_886_080.0);
    assert_eq!(EnergyUnit::Nanojoule.from_picojoules(2_000.0), 2.0);
    assert_eq!(EnergyUnit::Microjoule.from_picojoules(13_107_200.0), 13.1072);
    assert_eq!(EnergyUnit::Millijoule.from_picojoules(5e9), 5.0);
    assert_eq!(EnergyUnit::Joule.from_picojoules(1e12), 1.0);
}

/// Tests unit parsing from command-line strings.
#[test]
fn test_unit_from_str() {
    assert_eq!("pJ".parse::<EnergyUnit>(), Ok(EnergyUnit::Picojoule));
    assert_eq!("NJ".parse::<EnergyUnit>(), Ok(EnergyUnit::Nanojoule));
    assert_eq!("uj".parse::<EnergyUnit>(), Ok(EnergyUnit::Microjoule));
    assert_eq!("µJ".parse::<EnergyUnit>(), Ok(EnergyUnit::Microjoule));
    assert_eq!("mJ".parse::<EnergyUnit>(), Ok(EnergyUnit::Millijoule));
    assert_eq!("J".parse::<EnergyUnit>(), Ok(EnergyUnit::Joule));
    assert!("kWh".parse::<EnergyUnit>().is_err());
}

/// Tests unit display symbols.
#[test]
fn test_unit_display() {
    assert_eq!(EnergyUnit::default(), EnergyUnit::Microjoule);
    assert_eq!(format!("{}", EnergyUnit::Microjoule), "µJ");
    assert_eq!(format!("{}", EnergyUnit::Picojoule), "pJ");
}

/// Tests error display formatting.
#[test]
fn test_error_display() {
    let err = EnergyError::InvalidSize(-1);
    let s = format!("{}", err);
    assert!(s.contains("-1"));
    assert!(s.contains("non-negative"));

    let err = EnergyError::InvalidProfile("bad fraction".to_string());
    assert!(err.to_string().contains("bad fraction"));
}
