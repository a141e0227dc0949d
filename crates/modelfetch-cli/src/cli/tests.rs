use super::*;
use modelfetch_core::config::SourcesConfig;
use modelfetch_core::manifest::Manifest;
use modelfetch_core::runner::{AssetStatus, ItemOutcome, RunReport};
use modelfetch_core::sources::SourceEntry;
use std::path::Path;

fn parse(args: &[&str]) -> Cli {
    Cli::try_parse_from(args).unwrap()
}

#[test]
fn cli_parse_no_args_defaults_to_fetch() {
    let cli = parse(&["modelfetch"]);
    assert!(cli.command.is_none());
    assert!(cli.config.is_none());
    assert!(!cli.strict);
}

#[test]
fn cli_parse_fetch() {
    let cli = parse(&["modelfetch", "fetch"]);
    assert_eq!(cli.command, Some(CliCommand::Fetch));
}

#[test]
fn cli_parse_list_and_status() {
    assert_eq!(parse(&["modelfetch", "list"]).command, Some(CliCommand::List));
    assert_eq!(
        parse(&["modelfetch", "status"]).command,
        Some(CliCommand::Status)
    );
}

#[test]
fn cli_parse_global_flags_after_subcommand() {
    let cli = parse(&[
        "modelfetch",
        "fetch",
        "--save-dir",
        "out/models",
        "--manifest",
        "out/manifest.json",
        "--timeout",
        "3",
        "--strict",
    ]);
    assert_eq!(cli.save_dir.as_deref(), Some(Path::new("out/models")));
    assert_eq!(cli.manifest.as_deref(), Some(Path::new("out/manifest.json")));
    assert_eq!(cli.timeout, Some(3));
    assert!(cli.strict);
}

#[test]
fn cli_parse_config_without_subcommand() {
    let cli = parse(&["modelfetch", "--config", "/etc/modelfetch.toml"]);
    assert_eq!(cli.config.as_deref(), Some(Path::new("/etc/modelfetch.toml")));
    assert!(cli.command.is_none());
}

#[test]
fn cli_rejects_zero_timeout() {
    assert!(Cli::try_parse_from(["modelfetch", "--timeout", "0"]).is_err());
    assert_eq!(parse(&["modelfetch", "--timeout", "1"]).timeout, Some(1));
}

#[test]
fn cli_rejects_unknown_subcommand() {
    assert!(Cli::try_parse_from(["modelfetch", "add", "https://example.com/x.glb"]).is_err());
}

#[test]
fn overrides_replace_config_values() {
    let cli = parse(&[
        "modelfetch",
        "--save-dir",
        "m",
        "--timeout",
        "30",
        "--strict",
    ]);
    let mut cfg = FetchConfig::default();
    cli.apply_overrides(&mut cfg);
    assert_eq!(cfg.save_dir, PathBuf::from("m"));
    assert_eq!(cfg.manifest_path, PathBuf::from("assets/manifest.json"));
    assert_eq!(cfg.timeout_secs, 30);
    assert!(cfg.strict);
}

#[test]
fn no_overrides_keep_config() {
    let cli = parse(&["modelfetch"]);
    let mut cfg = FetchConfig::default();
    cfg.strict = true;
    cli.apply_overrides(&mut cfg);
    assert_eq!(cfg.save_dir, PathBuf::from("assets/models"));
    assert_eq!(cfg.timeout_secs, 10);
    assert!(cfg.strict, "absent --strict must not clear a config setting");
}

#[test]
fn finished_lines() {
    let e = SourceEntry::new("https://k.example/Models/Fox/glTF-Binary/Fox.glb");
    assert_eq!(
        commands::finished_line(0, &e, &AssetStatus::AlreadyPresent),
        "[1] skipped Fox.glb (already exists)"
    );
    assert_eq!(
        commands::finished_line(4, &e, &AssetStatus::Downloaded { bytes: 1234 }),
        "[5] downloaded Fox.glb (1234 bytes)"
    );
    assert_eq!(
        commands::finished_line(1, &e, &AssetStatus::FailedHttp { status: 404 }),
        "[2] error 404: Fox.glb link unavailable"
    );
    assert_eq!(
        commands::finished_line(
            2,
            &e,
            &AssetStatus::FailedException {
                message: "request timed out".to_string()
            }
        ),
        "[3] failed Fox.glb: request timed out"
    );
}

fn report(statuses: Vec<AssetStatus>) -> RunReport {
    let outcomes = statuses
        .into_iter()
        .enumerate()
        .map(|(index, status)| ItemOutcome {
            index,
            url: format!("https://k.example/{}.glb", index),
            filename: format!("{}.glb", index),
            status,
        })
        .collect();
    RunReport {
        outcomes,
        manifest: Manifest::new(),
        save_dir: PathBuf::from("assets/models"),
        manifest_path: PathBuf::from("assets/manifest.json"),
    }
}

#[test]
fn exit_code_ok_when_everything_resolved() {
    let r = report(vec![
        AssetStatus::AlreadyPresent,
        AssetStatus::Downloaded { bytes: 3 },
    ]);
    assert_eq!(commands::exit_code(&r, false), EXIT_OK);
    assert_eq!(commands::exit_code(&r, true), EXIT_OK);
}

#[test]
fn exit_code_item_failures_depend_on_strict() {
    let r = report(vec![
        AssetStatus::Downloaded { bytes: 3 },
        AssetStatus::FailedHttp { status: 404 },
    ]);
    assert_eq!(commands::exit_code(&r, false), EXIT_OK);
    assert_eq!(commands::exit_code(&r, true), EXIT_ITEM_FAILURES);

    let r = report(vec![AssetStatus::FailedException {
        message: "request timed out".to_string(),
    }]);
    assert_eq!(commands::exit_code(&r, true), EXIT_ITEM_FAILURES);
}

#[test]
fn process_exit_code_passes_through_or_is_fatal() {
    assert_eq!(process_exit_code(&Ok(EXIT_OK)), EXIT_OK);
    assert_eq!(process_exit_code(&Ok(EXIT_ITEM_FAILURES)), EXIT_ITEM_FAILURES);
    assert_eq!(
        process_exit_code(&Err(anyhow::anyhow!("write manifest"))),
        EXIT_FATAL
    );
}

#[test]
fn fetch_with_unusable_save_dir_exits_fatal() {
    let dir = tempfile::tempdir().unwrap();
    let blocked = dir.path().join("models");
    std::fs::write(&blocked, b"not a directory").unwrap();

    let cfg = FetchConfig {
        save_dir: blocked,
        manifest_path: dir.path().join("manifest.json"),
        sources: SourcesConfig {
            explicit_urls: vec!["http://127.0.0.1:9/Fox.glb".to_string()],
            template: String::new(),
            names: Vec::new(),
        },
        ..FetchConfig::default()
    };

    let result = run_fetch(&cfg);
    assert!(result.is_err());
    assert_eq!(process_exit_code(&result), EXIT_FATAL);
    assert!(!dir.path().join("manifest.json").exists());
}

#[test]
fn unavailable_config_falls_back_to_defaults() {
    let cfg = default_config(Err(anyhow::anyhow!("no writable config directory")));
    let defaults = FetchConfig::default();
    assert_eq!(cfg.save_dir, defaults.save_dir);
    assert_eq!(cfg.manifest_path, defaults.manifest_path);
    assert_eq!(cfg.timeout_secs, defaults.timeout_secs);
    assert_eq!(cfg.sources, defaults.sources);
}
