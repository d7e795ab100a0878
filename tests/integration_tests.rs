//! Binary-level integration tests for the vidcut CLI.
//!
//! A fake FFmpeg binary (a temp file, or a shell script on Unix) stands in
//! for the real one via VIDCUT_FFMPEG so no test depends on FFmpeg being
//! installed.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn vidcut() -> Command {
    let mut cmd = Command::cargo_bin("vidcut").unwrap();
    // Deterministic logging regardless of the ambient environment
    cmd.env_remove("RUST_LOG");
    cmd.env_remove("VIDCUT_FFMPEG");
    cmd.env_remove("VIDCUT_SUFFIX");
    cmd
}

/// A directory with a fake input file and a fake (inert) ffmpeg binary.
fn scratch() -> (TempDir, String, String) {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("input.mp4");
    fs::write(&input, b"fake video data").unwrap();
    let ffmpeg = dir.path().join("ffmpeg");
    fs::write(&ffmpeg, b"").unwrap();
    (
        dir,
        input.to_string_lossy().into_owned(),
        ffmpeg.to_string_lossy().into_owned(),
    )
}

#[test]
fn help_lists_subcommands() {
    vidcut()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cut"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("doctor"));
}

#[test]
fn malformed_time_flag_fails_the_run() {
    let (_dir, input, ffmpeg) = scratch();
    vidcut()
        .env("VIDCUT_FFMPEG", &ffmpeg)
        .args(["cut", &input, "--from", "not-a-time", "--dry-run"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid time format"));
}

#[test]
fn missing_input_is_skipped_not_failed() {
    let (dir, _input, ffmpeg) = scratch();
    let missing = dir.path().join("nope.mp4");
    vidcut()
        .env("VIDCUT_FFMPEG", &ffmpeg)
        .args(["cut", &missing.to_string_lossy(), "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("skip"));
}

#[test]
fn dry_run_prints_fast_command_tokens() {
    let (_dir, input, ffmpeg) = scratch();
    vidcut()
        .env("VIDCUT_FFMPEG", &ffmpeg)
        .args([
            "cut", &input, "--from", "45.5", "--duration", "10", "--overwrite", "--dry-run",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("-ss 00:00:45.500"))
        .stdout(predicate::str::contains("-t 00:00:10.000"))
        .stdout(predicate::str::contains("-c copy"))
        .stdout(predicate::str::contains("-movflags +faststart"));
}

#[test]
fn dry_run_forced_accurate_prints_reencode_tokens() {
    let (_dir, input, ffmpeg) = scratch();
    vidcut()
        .env("VIDCUT_FFMPEG", &ffmpeg)
        .args(["cut", &input, "--from", "5", "--accurate", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("libx264"))
        .stdout(predicate::str::contains("-preset veryfast"))
        .stdout(predicate::str::contains("-crf 18"));
}

#[test]
fn output_flag_rejected_for_multiple_inputs() {
    let (dir, input, ffmpeg) = scratch();
    let second = dir.path().join("other.mp4");
    fs::write(&second, b"fake video data").unwrap();
    vidcut()
        .env("VIDCUT_FFMPEG", &ffmpeg)
        .args([
            "cut",
            &input,
            &second.to_string_lossy(),
            "-o",
            "out.mp4",
            "--dry-run",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("single input"));
}

#[cfg(unix)]
mod unix {
    use super::*;
    use std::os::unix::fs::PermissionsExt;
    use std::path::Path;

    /// Install an executable fake ffmpeg that appends its argv to a log file
    /// and exits with the given code.
    fn install_fake_ffmpeg(dir: &Path, exit_code: i32) -> (String, String) {
        let log = dir.join("invocations.log");
        let script = dir.join("ffmpeg");
        let body = format!(
            "#!/bin/sh\necho \"$@\" >> {}\nexit {exit_code}\n",
            log.display()
        );
        fs::write(&script, body).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();
        (
            script.to_string_lossy().into_owned(),
            log.to_string_lossy().into_owned(),
        )
    }

    #[test]
    fn successful_fast_copy_runs_ffmpeg_once() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("input.mp4");
        fs::write(&input, b"fake video data").unwrap();
        let (ffmpeg, log) = install_fake_ffmpeg(dir.path(), 0);

        vidcut()
            .env("VIDCUT_FFMPEG", &ffmpeg)
            .args(["cut", &input.to_string_lossy(), "--from", "2", "--overwrite"])
            .assert()
            .success();

        let invocations = fs::read_to_string(&log).unwrap();
        let lines: Vec<&str> = invocations.lines().collect();
        assert_eq!(lines.len(), 1, "expected a single fast invocation");
        assert!(lines[0].contains("-c copy"));
    }

    #[test]
    fn failing_ffmpeg_triggers_accurate_fallback_then_fails() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("input.mp4");
        fs::write(&input, b"fake video data").unwrap();
        let (ffmpeg, log) = install_fake_ffmpeg(dir.path(), 3);

        vidcut()
            .env("VIDCUT_FFMPEG", &ffmpeg)
            .args(["cut", &input.to_string_lossy(), "--from", "2", "--overwrite"])
            .assert()
            .failure();

        let invocations = fs::read_to_string(&log).unwrap();
        let lines: Vec<&str> = invocations.lines().collect();
        assert_eq!(lines.len(), 2, "expected fast then accurate invocations");
        assert!(lines[0].contains("-c copy"));
        assert!(lines[1].contains("libx264"));
    }

    #[test]
    fn tail_trim_probes_then_cuts() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("input.mp4");
        fs::write(&input, b"fake video data").unwrap();

        // Probe happens on stderr; the cut itself succeeds.
        let log = dir.path().join("invocations.log");
        let script = dir.path().join("ffmpeg");
        let body = format!(
            "#!/bin/sh\n\
             echo \"$@\" >> {log}\n\
             case \"$*\" in\n\
             *copy*|*libx264*) exit 0 ;;\n\
             *) echo 'Duration: 00:01:30.00, start: 0.000000' >&2; exit 1 ;;\n\
             esac\n",
            log = log.display()
        );
        fs::write(&script, body).unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        vidcut()
            .env("VIDCUT_FFMPEG", &*script.to_string_lossy())
            .args([
                "cut",
                &input.to_string_lossy(),
                "--trim-end",
                "3s",
                "--overwrite",
            ])
            .assert()
            .success();

        let invocations = fs::read_to_string(&log).unwrap();
        let lines: Vec<&str> = invocations.lines().collect();
        // One probe invocation, then the fast cut carrying the resolved 87s
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("-hide_banner -i"));
        assert!(lines[1].contains("-t 00:01:27.000"));
    }
}
