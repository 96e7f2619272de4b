// tests/executor_dispatch.rs
//
// Dispatcher behaviour: what gets built, what gets logged, what fails, all
// without running a real child process.

mod common;

use sd_cmd::errors::SdCmdError;
use sd_cmd::exec;
use sd_cmd::registry::CommandFormat;
use sd_cmd_test_utils::builders::{binary_spec, spec_with_format};
use sd_cmd_test_utils::fake_registry::FakeRegistry;
use sd_cmd_test_utils::{init_tracing, with_timeout};
use tempfile::TempDir;

use crate::common::{log_dir, read_logs, test_config};

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[tokio::test]
async fn malformed_reference_touches_neither_log_nor_registry() {
    with_timeout(async {
        init_tracing();

        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        let registry = FakeRegistry::new();
        let lookups = registry.lookups();

        let err = exec::new(&registry, &config, &args(&["not-a-reference"]))
            .await
            .map(|_| ())
            .unwrap_err();

        assert!(matches!(err, SdCmdError::MalformedReference(_)));
        assert!(!tmp.path().join(".sd").exists());
        assert!(lookups.lock().unwrap().is_empty());
    })
    .await
}

#[tokio::test]
async fn resolution_failure_is_recorded_in_the_session_log() {
    with_timeout(async {
        init_tracing();

        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        let registry = FakeRegistry::new();

        let err = exec::new(&registry, &config, &args(&["ns/tool@1.0.0"]))
            .await
            .map(|_| ())
            .unwrap_err();

        assert!(matches!(err, SdCmdError::CommandNotFound { .. }));
        assert_eq!(err.exit_code(), 1);

        let content = read_logs(&log_dir(tmp.path(), "ns", "tool", "1.0.0"));
        assert!(content.starts_with("ERROR: "));
        assert!(content.contains("not found"));
    })
    .await
}

#[tokio::test]
async fn unimplemented_formats_fail_instead_of_silently_succeeding() {
    with_timeout(async {
        init_tracing();

        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());

        for (format, label) in [
            (CommandFormat::Habitat, "habitat"),
            (CommandFormat::Docker, "docker"),
            (CommandFormat::Unknown, "unknown"),
        ] {
            let registry = FakeRegistry::new()
                .with_command(spec_with_format("infra", "pkg", "2.0.0", format));

            let err = exec::new(&registry, &config, &args(&["infra/pkg@2.0.0"]))
                .await
                .map(|_| ())
                .unwrap_err();

            match err {
                SdCmdError::UnsupportedFormat { format } => assert_eq!(format, label),
                other => panic!("expected UnsupportedFormat for {label}, got {other:?}"),
            }
        }
    })
    .await
}

#[tokio::test]
async fn binary_format_dispatches_to_an_executor() {
    with_timeout(async {
        init_tracing();

        let tmp = TempDir::new().unwrap();
        let config = test_config(tmp.path());
        let registry = FakeRegistry::new().with_command(binary_spec(
            "build",
            "lint",
            "1.2.3",
            "/opt/cmds/build/lint/1.2.3/lint",
        ));
        let lookups = registry.lookups();

        let executor = exec::new(&registry, &config, &args(&["build/lint@1.2.3", "--fix"])).await;
        assert!(executor.is_ok());
        assert_eq!(*lookups.lock().unwrap(), vec!["build/lint@1.2.3"]);
    })
    .await
}
