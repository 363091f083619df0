//! Integration tests for configuration loading.

use memwall_energy::common::{EnergyError, EnergyUnit};
use memwall_energy::config::Config;
use memwall_energy::model::{CacheProfile, EnergyModel};

/// Tests that built-in defaults describe the default model.
#[test]
fn test_default_config() {
    let config = Config::default();
    assert_eq!(config.workload.size, 256);
    assert_eq!(config.workload.sweep_sizes, vec![64, 128, 256, 512, 1024]);
    assert_eq!(config.report.unit, EnergyUnit::Microjoule);
    assert_eq!(config.report.output_dir, "results");
    assert!(config.report.charts);
    assert_eq!(config.architectures.len(), 3);

    assert_eq!(config.energy_model().unwrap(), EnergyModel::default());
}

/// Tests that an empty document falls back to defaults.
#[test]
fn test_empty_toml() {
    let config = Config::from_toml_str("").unwrap();
    assert_eq!(config.energy.dram_access_pj, 100.0);
    assert_eq!(config.profiles.with_reuse_sram_fraction, 0.9);
    assert_eq!(config.architectures.len(), 3);
}

/// Tests partial overrides.
#[test]
fn test_partial_override() {
    let config = Config::from_toml_str(
        r#"
        [energy]
        dram_access_pj = 200.0

        [workload]
        sweep_sizes = [1, 2, 4, 8]

        [report]
        unit = "pJ"
        charts = false
        "#,
    )
    .unwrap();

    assert_eq!(config.energy.dram_access_pj, 200.0);
    assert_eq!(config.energy.sram_access_pj, 10.0);
    assert_eq!(config.workload.size, 256);
    assert_eq!(config.workload.sweep_sizes, vec![1, 2, 4, 8]);
    assert_eq!(config.report.unit, EnergyUnit::Picojoule);
    assert!(!config.report.charts);

    let model = config.energy_model().unwrap();
    assert_eq!(model.costs.dram_access_energy(), 200.0);
    assert_eq!(model.with_reuse, CacheProfile::WITH_REUSE);
}

/// Tests custom architecture lists.
#[test]
fn test_custom_architectures() {
    let config = Config::from_toml_str(
        r#"
        [[architectures]]
        name = "Edge"
        sram_fraction = 0.6
        dram_access_pj = 120.0
        sram_access_pj = 12.0
        "#,
    )
    .unwrap();

    let profiles = config.architecture_profiles().unwrap();
    assert_eq!(profiles.len(), 1);
    assert_eq!(profiles[0].name, "Edge");
    assert_eq!(profiles[0].costs.mac_energy(), 5.0);
}

/// Tests that inconsistent values are rejected when building the model.
#[test]
fn test_invalid_values() {
    let config = Config::from_toml_str("[energy]\nsram_access_pj = 500.0\n").unwrap();
    assert!(matches!(
        config.energy_model().unwrap_err(),
        EnergyError::InvalidCosts(_)
    ));

    let config = Config::from_toml_str("[profiles]\nwith_reuse_sram_fraction = 1.2\n").unwrap();
    assert!(matches!(
        config.energy_model().unwrap_err(),
        EnergyError::InvalidProfile(_)
    ));

    let config = Config::from_toml_str(
        "[[architectures]]\nname = \"X\"\nsram_fraction = 0.5\ndram_access_pj = -1.0\nsram_access_pj = 1.0\n",
    )
    .unwrap();
    assert!(matches!(
        config.architecture_profiles().unwrap_err(),
        EnergyError::InvalidCosts(_)
    ));
}

/// Tests that the no-reuse profile may not hit SRAM more often than the reuse profile.
#[test]
fn test_inverted_profiles() {
    let config = Config::from_toml_str(
        "[profiles]\nwith_reuse_sram_fraction = 0.1\nno_reuse_sram_fraction = 0.95\n",
    )
    .unwrap();
    let err = config.energy_model().unwrap_err();
    assert!(matches!(err, EnergyError::InvalidProfile(_)));
    assert!(err.to_string().contains("no-reuse"));

    let config = Config::from_toml_str(
        "[profiles]\nwith_reuse_sram_fraction = 0.4\nno_reuse_sram_fraction = 0.4\n",
    )
    .unwrap();
    assert!(config.energy_model().is_ok());
}

/// Tests parse and I/O failures.
#[test]
fn test_load_errors() {
    let err = Config::from_toml_str("[energy\n").unwrap_err();
    assert!(matches!(err, EnergyError::ConfigParse(_)));

    let err = Config::from_toml_str("[report]\nunit = \"kWh\"\n").unwrap_err();
    assert!(matches!(err, EnergyError::ConfigParse(_)));

    let err = Config::from_file("/nonexistent/memwall.toml").unwrap_err();
    assert!(matches!(err, EnergyError::ConfigIo { .. }));
    assert!(err.to_string().contains("/nonexistent/memwall.toml"));
}

/// Tests that the shipped configuration file parses to the defaults.
#[test]
fn test_shipped_default_config() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/configs/default.toml");
    let config = Config::from_file(path).unwrap();

    assert_eq!(config.energy_model().unwrap(), EnergyModel::default());
    assert_eq!(config.workload.size, 256);
    assert_eq!(
        config.architecture_profiles().unwrap(),
        Config::default().architecture_profiles().unwrap()
    );
}
