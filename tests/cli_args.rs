// tests/cli_args.rs

use clap::Parser;
use sd_cmd::cli::{CliArgs, Command, LogLevel};

#[test]
fn exec_subcommand_keeps_command_flags_intact() {
    let cli = CliArgs::try_parse_from(["sd-cmd", "exec", "build/lint@1.2.3", "--fix"]).unwrap();

    match cli.command {
        Command::Exec(forwarded) => {
            assert_eq!(forwarded.args, vec!["build/lint@1.2.3", "--fix"]);
        }
        other => panic!("expected exec subcommand, got {other:?}"),
    }
}

#[test]
fn bare_reference_takes_the_default_path() {
    let cli = CliArgs::try_parse_from(["sd-cmd", "build/lint@1.2.3", "--fix", "src/"]).unwrap();

    match cli.command {
        Command::External(argv) => {
            assert_eq!(argv, vec!["build/lint@1.2.3", "--fix", "src/"]);
        }
        other => panic!("expected external subcommand, got {other:?}"),
    }
}

#[test]
fn publish_subcommand_parses_with_forwarded_args() {
    let cli = CliArgs::try_parse_from(["sd-cmd", "publish", "-f", "sd-command.yaml"]).unwrap();

    match cli.command {
        Command::Publish(forwarded) => {
            assert_eq!(forwarded.args, vec!["-f", "sd-command.yaml"]);
        }
        other => panic!("expected publish subcommand, got {other:?}"),
    }
}

#[test]
fn log_level_flag_is_parsed_before_the_subcommand() {
    let cli =
        CliArgs::try_parse_from(["sd-cmd", "--log-level", "debug", "exec", "a/b@1.0.0"]).unwrap();

    assert!(matches!(cli.log_level, Some(LogLevel::Debug)));
}
