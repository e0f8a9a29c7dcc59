//! Integration tests for both binaries.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use httpmock::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

const DISPATCH_PATH: &str = "/repos/alice/browser/actions/workflows/build.yml/dispatches";

fn trigger(server: &MockServer) -> Command {
    let mut cmd = Command::new(cargo_bin("trigger-workflow"));
    cmd.arg("--api-url")
        .arg(server.base_url())
        .arg("--workflow")
        .arg("build.yml")
        .env_remove("APKCTL_PROMPT_OWNER")
        .env_remove("APKCTL_PROMPT_REPO")
        .env_remove("APKCTL_PROMPT_TOKEN")
        .env_remove("APKCTL_GITHUB_API_URL");
    cmd
}

#[test]
fn build_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("build-apk"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--project"));
    Ok(())
}

#[test]
fn trigger_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("trigger-workflow"));
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--owner"))
        .stdout(predicate::str::contains("--workflow"))
        .stdout(predicate::str::contains("--api-url").not());
    Ok(())
}

#[test]
fn trigger_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin("trigger-workflow"));
    cmd.arg("--version");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[test]
fn build_without_sdk_root_fails_with_hint() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    let mut cmd = Command::new(cargo_bin("build-apk"));
    cmd.arg("--project").arg(temp.path()).env_remove("ANDROID_HOME");
    cmd.assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("MyAgenticBrowser Build Script"))
        .stdout(predicate::str::contains(
            "Please install the required prerequisites and try again.",
        ))
        .stderr(predicate::str::contains(
            "ANDROID_HOME environment variable is not set",
        ));
    Ok(())
}

#[cfg(unix)]
mod fake_toolchain {
    use super::*;
    use std::fs;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    fn script(path: &Path, body: &str) {
        fs::write(path, format!("#!/bin/sh\n{}\n", body)).unwrap();
        fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
    }

    /// A project with a wrapper script plus a PATH holding fake java/gradle.
    fn setup(wrapper_body: &str) -> (TempDir, TempDir) {
        let project = TempDir::new().unwrap();
        fs::write(
            project.path().join("gradlew"),
            format!("#!/bin/sh\n{}\n", wrapper_body),
        )
        .unwrap();

        let bin = TempDir::new().unwrap();
        script(
            &bin.path().join("java"),
            "echo 'openjdk version \"17.0.2\" 2022-01-18' >&2",
        );
        script(&bin.path().join("gradle"), "echo 'Gradle 8.5'");
        (project, bin)
    }

    #[test]
    fn build_succeeds_with_fake_toolchain() -> Result<(), Box<dyn std::error::Error>> {
        let (project, bin) = setup("echo BUILD SUCCESSFUL");
        let mut cmd = Command::new(cargo_bin("build-apk"));
        cmd.arg("--project")
            .arg(project.path())
            .env("PATH", bin.path())
            .env("ANDROID_HOME", project.path());
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("Java is installed (17.0.2)"))
            .stdout(predicate::str::contains("Gradle is installed (8.5)"))
            .stdout(predicate::str::contains("Build completed successfully!"))
            .stdout(predicate::str::contains(
                "You can find the APK at: app/build/outputs/apk/debug/app-debug.apk",
            ));

        let mode = fs::metadata(project.path().join("gradlew"))?.permissions().mode();
        assert_eq!(mode & 0o777, 0o755);
        Ok(())
    }

    #[test]
    fn build_failure_shows_streams() -> Result<(), Box<dyn std::error::Error>> {
        let (project, bin) = setup("echo 'Task :app:compileDebugKotlin FAILED'; echo 'Unresolved reference' >&2; exit 3");
        let mut cmd = Command::new(cargo_bin("build-apk"));
        cmd.arg("--project")
            .arg(project.path())
            .env("PATH", bin.path())
            .env("ANDROID_HOME", project.path());
        cmd.assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Build failed with exit code 3"))
            .stderr(predicate::str::contains("Task :app:compileDebugKotlin FAILED"))
            .stderr(predicate::str::contains("Unresolved reference"))
            .stdout(predicate::str::contains("Build completed successfully!").not());
        Ok(())
    }

    #[test]
    fn build_accepts_relative_project() -> Result<(), Box<dyn std::error::Error>> {
        let (_, bin) = setup("");
        let workspace = TempDir::new()?;
        let project = workspace.path().join("proj");
        fs::create_dir(&project)?;
        fs::write(project.join("gradlew"), "#!/bin/sh\necho BUILD SUCCESSFUL\n")?;

        let mut cmd = Command::new(cargo_bin("build-apk"));
        cmd.current_dir(workspace.path())
            .args(["--project", "proj"])
            .env("PATH", bin.path())
            .env("ANDROID_HOME", workspace.path());
        cmd.assert()
            .success()
            .stdout(predicate::str::contains("APK built successfully"))
            .stderr(predicate::str::contains("Could not find Gradle wrapper").not());
        Ok(())
    }

    #[test]
    fn build_without_wrapper_fails() -> Result<(), Box<dyn std::error::Error>> {
        let (project, bin) = setup("");
        fs::remove_file(project.path().join("gradlew"))?;
        let mut cmd = Command::new(cargo_bin("build-apk"));
        cmd.arg("--project")
            .arg(project.path())
            .env("PATH", bin.path())
            .env("ANDROID_HOME", project.path());
        cmd.assert()
            .failure()
            .code(1)
            .stderr(predicate::str::contains("Gradle wrapper not found: ./gradlew"));
        Ok(())
    }
}

#[test]
fn trigger_empty_owner_makes_no_request() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST);
        then.status(204);
    });

    let mut cmd = trigger(&server);
    cmd.write_stdin("");
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Repository owner is required"));

    mock.assert_calls(0);
    Ok(())
}

#[test]
fn trigger_reads_answers_from_stdin() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(DISPATCH_PATH)
            .header("authorization", "token ghp_secret");
        then.status(204);
    });

    let mut cmd = trigger(&server);
    cmd.write_stdin("alice\nbrowser\nghp_secret\n");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Enter GitHub repository owner (username or organization)",
        ))
        .stdout(predicate::str::contains("Workflow triggered successfully!"));

    mock.assert_calls(1);
    Ok(())
}

#[test]
fn trigger_with_flags_prints_follow_up() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST)
            .path(DISPATCH_PATH)
            .header("accept", "application/vnd.github.v3+json")
            .json_body(serde_json::json!({"ref": "main"}));
        then.status(204);
    });

    let mut cmd = trigger(&server);
    cmd.args(["--owner", "alice", "--repo", "browser", "--token", "ghp_secret"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Triggering workflow 'build.yml' for alice/browser...",
        ))
        .stdout(predicate::str::contains(
            "Go to https://github.com/alice/browser/actions to monitor the build progress.",
        ))
        .stdout(predicate::str::contains(
            "Once completed, you can download the APK from the Artifacts section.",
        ));

    mock.assert_calls(1);
    Ok(())
}

#[test]
fn trigger_answers_from_prompt_env() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(DISPATCH_PATH);
        then.status(204);
    });

    let mut cmd = trigger(&server);
    cmd.env("APKCTL_PROMPT_OWNER", "alice")
        .env("APKCTL_PROMPT_REPO", "browser")
        .env("APKCTL_PROMPT_TOKEN", "ghp_secret");
    cmd.assert().success();

    mock.assert_calls(1);
    Ok(())
}

#[test]
fn trigger_rejected_exits_one() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    let mock = server.mock(|when, then| {
        when.method(POST).path(DISPATCH_PATH);
        then.status(404).body("Not Found");
    });

    let mut cmd = trigger(&server);
    cmd.args(["--owner", "alice", "--repo", "browser", "--token", "ghp_secret"]);
    cmd.assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains(
            "Failed to trigger workflow. Status code: 404",
        ))
        .stderr(predicate::str::contains("Response: Not Found"))
        .stdout(predicate::str::contains("monitor the build progress").not());

    mock.assert_calls(1);
    Ok(())
}

#[test]
fn trigger_token_never_reaches_output() -> Result<(), Box<dyn std::error::Error>> {
    let server = MockServer::start();
    server.mock(|when, then| {
        when.method(POST).path(DISPATCH_PATH);
        then.status(204);
    });

    let mut cmd = trigger(&server);
    cmd.args([
        "--owner",
        "alice",
        "--repo",
        "browser",
        "--token",
        "ghp_secret",
        "--debug",
    ]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("ghp_secret").not())
        .stderr(predicate::str::contains("ghp_secret").not());
    Ok(())
}
