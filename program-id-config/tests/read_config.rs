use assert_matches::assert_matches;
use program_id_config::{
    errors::ConfigError, KeySlice, ProgramIdConfig, ProgramKeypairConfig,
};
use test_tools_core::paths::cargo_workspace_dir;

fn fixture_path(name: &str) -> std::path::PathBuf {
    cargo_workspace_dir()
        .join("program-id-config")
        .join("tests")
        .join("fixtures")
        .join(name)
}

#[test]
fn test_load_deploy_programs_resolves_relative_keypairs() {
    let config_file = fixture_path("03_deploy-programs.toml");
    let config =
        ProgramIdConfig::try_load_from_file(config_file.to_str().unwrap())
            .unwrap();
    let fixtures_dir = config_file.parent().unwrap().to_str().unwrap();

    assert_eq!(config.slice, KeySlice::Tail);
    assert_eq!(
        config.programs,
        vec![
            ProgramKeypairConfig {
                keypair: format!(
                    "{}/../deploy/deposit_pda-keypair.json",
                    fixtures_dir
                ),
                expected_id: Some(
                    "6QBn3UkBbx1VS4hPUkyBftb1NRnPDaKsnfdjuSMyvv2U".to_string()
                ),
            },
            ProgramKeypairConfig {
                keypair: format!(
                    "{}/../deploy/multi_treasury-keypair.json",
                    fixtures_dir
                ),
                expected_id: Some(
                    "4fmeXVrnzWs6hTRM6rYLaYk26FzPxRmBFkHUmp9Vw3cV".to_string()
                ),
            },
        ]
    );
}

#[test]
fn test_load_deploy_dir_resolves_relative_dir() {
    let config_file = fixture_path("04_deploy-dir.toml");
    let config =
        ProgramIdConfig::try_load_from_file(config_file.to_str().unwrap())
            .unwrap();
    assert_eq!(
        config.deploy_dir,
        Some(format!(
            "{}/../deploy",
            config_file.parent().unwrap().to_str().unwrap()
        ))
    );
}

#[test]
fn test_load_absolute_keypair_is_kept() {
    let config_file = fixture_path("06_absolute-keypair.toml");
    let config =
        ProgramIdConfig::try_load_from_file(config_file.to_str().unwrap())
            .unwrap();
    assert_eq!(
        config.programs,
        vec![ProgramKeypairConfig::new(
            "/var/deploy/deposit_pda-keypair.json"
        )]
    );
}

#[test]
fn test_load_without_config_path_keeps_paths() {
    let toml = include_str!("fixtures/03_deploy-programs.toml");
    let config = ProgramIdConfig::try_load_from_toml(toml, None).unwrap();
    assert_eq!(
        config.programs[0].keypair,
        "../deploy/deposit_pda-keypair.json"
    );
}

#[test]
fn test_load_missing_file() {
    let config_file = fixture_path("does-not-exist.toml");
    let res =
        ProgramIdConfig::try_load_from_file(config_file.to_str().unwrap());
    assert_matches!(res, Err(ConfigError::Io(_)));
}

#[test]
fn test_load_unknown_field() {
    let config_file = fixture_path("05_unknown-field.toml");
    let res =
        ProgramIdConfig::try_load_from_file(config_file.to_str().unwrap());
    assert_matches!(res, Err(ConfigError::Toml(_)));
}
