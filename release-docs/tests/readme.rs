use release_docs::{
    compute_digest, ChecksumError, Config, ReadmeError, ReadmeUpdateRequest, ResolvedDependency,
    Runner, RunnerConfig, RunnerError,
};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn fixture_template() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/README.md.hbs")
}

/// A project root holding only the README template.
fn project() -> (TempDir, Runner) {
    let temp = TempDir::new().unwrap();
    fs::copy(fixture_template(), temp.path().join("README.md.hbs")).unwrap();
    let runner = Runner::new(RunnerConfig::new(
        temp.path().to_path_buf(),
        Config::default(),
    ));
    (temp, runner)
}

fn request(version: &str) -> ReadmeUpdateRequest {
    ReadmeUpdateRequest {
        version: version.to_string(),
        dependencies: vec![
            "org.apache.logging.log4j:log4j-api:2.17.1".parse::<ResolvedDependency>().unwrap(),
            "com.fasterxml.jackson.core:jackson-databind:2.13.0".parse().unwrap(),
        ],
    }
}

#[test]
fn init_then_verify() {
    let (temp, runner) = project();

    let summary = runner.init_readme(&request("3.8.0")).unwrap();

    let readme = fs::read_to_string(temp.path().join("README.md")).unwrap();
    assert!(readme.contains("implementation 'org.javacord:javacord:3.8.0'"));
    assert!(readme.contains("log4j-core:2.17.1"));
    assert!(readme.contains("<version>3.8.0</version>"));
    assert!(!readme.contains("{{"));

    let stored = fs::read_to_string(temp.path().join("README.md.sha256")).unwrap();
    assert_eq!(stored, compute_digest(&readme));
    assert_eq!(summary.digest, stored);
    assert!(summary.regenerated);

    let verified = runner.verify_readme().unwrap();
    assert_eq!(verified.digest, stored);
    assert!(!verified.regenerated);
}

#[test]
fn update_before_init_is_refused() {
    let (temp, runner) = project();

    let result = runner.update_readme(&request("3.8.0"));

    assert!(matches!(
        result,
        Err(RunnerError::Readme(ReadmeError::Checksum(ChecksumError::Io { .. })))
    ));
    assert!(!temp.path().join("README.md").exists());
}

#[test]
fn init_twice_is_refused() {
    let (temp, runner) = project();
    runner.init_readme(&request("3.8.0")).unwrap();
    let readme = fs::read_to_string(temp.path().join("README.md")).unwrap();

    let result = runner.init_readme(&request("3.9.0"));

    assert!(matches!(
        result,
        Err(RunnerError::Readme(ReadmeError::AlreadyInitialized { .. }))
    ));
    assert_eq!(fs::read_to_string(temp.path().join("README.md")).unwrap(), readme);
}

#[test]
fn init_does_not_adopt_hand_written_readme() {
    let (temp, runner) = project();
    fs::write(temp.path().join("README.md"), "# Hand-written\n").unwrap();

    let result = runner.init_readme(&request("3.8.0"));

    assert!(matches!(
        result,
        Err(RunnerError::Readme(ReadmeError::AlreadyInitialized { .. }))
    ));
    assert_eq!(
        fs::read_to_string(temp.path().join("README.md")).unwrap(),
        "# Hand-written\n"
    );
    assert!(!temp.path().join("README.md.sha256").exists());
}

#[test]
fn version_bump_regenerates() {
    let (temp, runner) = project();
    runner.init_readme(&request("3.8.0")).unwrap();

    runner.update_readme(&request("3.8.1")).unwrap();

    let readme = fs::read_to_string(temp.path().join("README.md")).unwrap();
    assert!(readme.contains("javacord:3.8.1"));
    runner.verify_readme().unwrap();
}

#[test]
fn manual_edit_is_detected_and_preserved() {
    let (temp, runner) = project();
    runner.init_readme(&request("3.8.0")).unwrap();
    let readme_path = temp.path().join("README.md");
    let mut edited = fs::read_to_string(&readme_path).unwrap();
    edited.push_str("\nHand-written note\n");
    fs::write(&readme_path, &edited).unwrap();

    let verify = runner.verify_readme().unwrap_err();
    assert!(verify.to_string().contains("edit the template instead"));

    let update = runner.update_readme(&request("3.8.1"));
    assert!(matches!(
        update,
        Err(RunnerError::Readme(ReadmeError::Checksum(
            ChecksumError::DriftDetected { .. }
        )))
    ));
    assert!(!update.unwrap_err().to_string().contains("--force"));
    assert_eq!(fs::read_to_string(&readme_path).unwrap(), edited);
}

#[test]
fn missing_dependency_aborts_before_writing() {
    let (temp, runner) = project();
    let request = ReadmeUpdateRequest {
        version: "3.8.0".to_string(),
        dependencies: Vec::new(),
    };

    let result = runner.init_readme(&request);

    assert!(matches!(
        result,
        Err(RunnerError::Readme(ReadmeError::MissingSubstitution { .. }))
    ));
    assert!(!temp.path().join("README.md").exists());
    assert!(!temp.path().join("README.md.sha256").exists());
}
