//! Tests for CleanService
//!
//! Uses a mock CommandRunner; no test launches a real git.

use std::io;
use std::os::unix::process::ExitStatusExt;
use std::process::ExitStatus;
use std::sync::{Arc, Mutex};

use gpgvault::application::services::CleanService;
use gpgvault::application::ApplicationError;
use gpgvault::config::Settings;
use gpgvault::infrastructure::traits::CommandRunner;
use gpgvault::infrastructure::InfraError;
use gpgvault::util::testing;

#[ctor::ctor]
fn init() {
    testing::init_test_setup();
}

/// Mock runner that records invocations and returns a fixed exit status.
struct MockCommandRunner {
    calls: Mutex<Vec<(String, Vec<String>)>>,
    exit_code: i32,
}

impl MockCommandRunner {
    fn with_exit_code(exit_code: i32) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            exit_code,
        }
    }

    fn calls(&self) -> Vec<(String, Vec<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

impl CommandRunner for MockCommandRunner {
    fn status(&self, cmd: &str, args: &[&str]) -> io::Result<ExitStatus> {
        self.calls.lock().unwrap().push((
            cmd.to_string(),
            args.iter().map(|s| s.to_string()).collect(),
        ));
        Ok(ExitStatus::from_raw(self.exit_code << 8))
    }
}

#[test]
fn given_clean_when_running_then_invokes_git_clean_forced_recursive_ignored() {
    // Arrange
    let runner = Arc::new(MockCommandRunner::with_exit_code(0));
    let cleaner = CleanService::new(runner.clone(), Arc::new(Settings::default()));

    // Act
    cleaner.clean().unwrap();

    // Assert: exact flags, no path restriction
    let calls = runner.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "git");
    assert_eq!(calls[0].1, vec!["clean", "-f", "-d", "-x"]);
}

#[test]
fn given_git_failure_when_cleaning_then_reports_clean_failed() {
    // Arrange
    let runner = Arc::new(MockCommandRunner::with_exit_code(128));
    let cleaner = CleanService::new(runner.clone(), Arc::new(Settings::default()));

    // Act
    let err = cleaner.clean().unwrap_err();

    // Assert
    assert!(err.to_string().starts_with("Clean failed"));
    match err {
        ApplicationError::OperationFailed { source, .. } => {
            let infra = source.downcast_ref::<InfraError>().expect("infra source");
            match infra {
                InfraError::Git { exit_code, .. } => assert_eq!(*exit_code, Some(128)),
                other => panic!("unexpected infra error: {other}"),
            }
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn given_custom_git_binary_when_cleaning_then_invokes_it() {
    let runner = Arc::new(MockCommandRunner::with_exit_code(0));
    let settings = Settings {
        gpg_bin: "gpg".to_string(),
        git_bin: "/usr/local/bin/git".to_string(),
    };
    let cleaner = CleanService::new(runner.clone(), Arc::new(settings));

    cleaner.clean().unwrap();

    assert_eq!(runner.calls()[0].0, "/usr/local/bin/git");
}
