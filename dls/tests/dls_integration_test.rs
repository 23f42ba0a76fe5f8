use assert_cmd::prelude::*;
use filetime::{set_file_mtime, FileTime};
use predicates::prelude::*;
use std::fs;
use std::io::Read;
use std::os::unix::fs::PermissionsExt;
use std::path::Path;
use std::process::{Command, Stdio};
use tempfile::TempDir;

fn get_dls_cmd() -> Command {
    Command::cargo_bin("dls").unwrap()
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "dls failed: {:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

/// a.txt (42 bytes), B.txt, .hidden and an empty `sub` directory.
fn fixture_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), vec![b'x'; 42]).unwrap();
    fs::write(dir.path().join("B.txt"), b"").unwrap();
    fs::write(dir.path().join(".hidden"), b"").unwrap();
    fs::create_dir(dir.path().join("sub")).unwrap();
    dir
}

fn touch(path: &Path, secs: i64) {
    fs::write(path, b"").unwrap();
    set_file_mtime(path, FileTime::from_unix_time(secs, 0)).unwrap();
}

#[test]
fn test_plain_listing_hides_dotfiles() {
    let dir = fixture_dir();
    let mut cmd = get_dls_cmd();
    cmd.arg(dir.path());

    cmd.assert().success().stdout("a.txt B.txt sub \n");
}

#[test]
fn test_all_shows_dot_entries() {
    let dir = fixture_dir();
    let mut cmd = get_dls_cmd();
    cmd.arg("-a").arg(dir.path());

    cmd.assert()
        .success()
        .stdout(". .. .hidden a.txt B.txt sub \n");
}

#[test]
fn test_size_mode() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), vec![b'x'; 42]).unwrap();
    let mut cmd = get_dls_cmd();
    cmd.arg("-size").arg(dir.path());

    cmd.assert().success().stdout("a.txt 42\n\n");
}

#[test]
fn test_size_mode_overrides_long() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("a.txt"), vec![b'x'; 42]).unwrap();
    let mut cmd = get_dls_cmd();
    cmd.arg("-lh").arg("-size").arg(dir.path());

    cmd.assert().success().stdout("a.txt 42\n\n");
}

#[test]
fn test_long_listing() {
    let dir = fixture_dir();
    let mut cmd = get_dls_cmd();
    cmd.arg("-l").arg(dir.path());

    let stdout = stdout_of(&mut cmd);
    let lines: Vec<&str> = stdout.lines().collect();

    assert!(lines[0].starts_with("total "));
    assert!(lines[1].starts_with("-rw"));
    assert!(lines[1].ends_with(" a.txt"));
    assert!(lines[1].contains("    42 "));
    assert!(lines[3].starts_with("drwx"));
    assert!(lines[3].ends_with(" sub"));
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[4], "");
}

#[test]
fn test_long_listing_human_readable() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("half.bin"), vec![0u8; 1536]).unwrap();
    let mut cmd = get_dls_cmd();
    cmd.arg("-lh").arg(dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("  1.5K ").and(predicate::str::contains(" half.bin\n")));
}

#[test]
fn test_sort_by_time() {
    let dir = tempfile::tempdir().unwrap();
    touch(&dir.path().join("old"), 1_000_000);
    touch(&dir.path().join("newest"), 3_000_000);
    touch(&dir.path().join("middle"), 2_000_000);
    let mut cmd = get_dls_cmd();
    cmd.arg("-t").arg(dir.path());

    cmd.assert().success().stdout("newest middle old \n");
}

#[test]
fn test_recursive_listing() {
    let dir = fixture_dir();
    fs::write(dir.path().join("sub").join("inner.txt"), b"").unwrap();
    fs::create_dir(dir.path().join("sub").join(".private")).unwrap();
    let mut cmd = get_dls_cmd();
    cmd.arg("-R").arg(dir.path());

    let expected = format!(
        ". .. .hidden a.txt B.txt sub \n\n{}:\ninner.txt \n",
        dir.path().join("sub").display()
    );
    cmd.assert().success().stdout(expected);
}

#[test]
fn test_unknown_option() {
    let dir = fixture_dir();
    let mut cmd = get_dls_cmd();
    cmd.arg("-lx").arg(dir.path());

    cmd.assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("Unknown option: x"));
}

#[test]
fn test_debug_is_long_only() {
    let mut cmd = get_dls_cmd();
    cmd.arg("-d");

    cmd.assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown option: d"));
}

#[test]
fn test_debug_output_goes_to_stderr() {
    let dir = fixture_dir();
    let mut cmd = get_dls_cmd();
    cmd.arg("--debug").arg(dir.path());

    cmd.assert()
        .success()
        .stdout("a.txt B.txt sub \n")
        .stderr(predicate::str::contains("DEBUG:"));
}

#[test]
fn test_missing_directory_reports_and_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let mut cmd = get_dls_cmd();
    cmd.arg("-l").arg(dir.path().join("does-not-exist"));

    cmd.assert()
        .success()
        .stdout("")
        .stderr(predicate::str::contains("cannot open directory").and(predicate::str::contains("does-not-exist")));
}

#[test]
fn test_dangling_symlink_is_skipped() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("real"), b"").unwrap();
    std::os::unix::fs::symlink(dir.path().join("gone"), dir.path().join("broken")).unwrap();
    let mut cmd = get_dls_cmd();
    cmd.arg(dir.path());

    cmd.assert()
        .success()
        .stdout("real \n")
        .stderr(predicate::str::contains("stat:").and(predicate::str::contains("broken")));
}

#[test]
fn test_defaults_to_current_directory() {
    let dir = fixture_dir();
    let mut cmd = get_dls_cmd();
    cmd.current_dir(dir.path());

    cmd.assert().success().stdout("a.txt B.txt sub \n");
}

#[test]
fn test_help() {
    let mut cmd = get_dls_cmd();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("dls").and(predicate::str::contains("-size")));
}

#[test]
fn test_unreadable_subdirectory_does_not_stop_recursion() {
    // Permission bits do not restrict root.
    if nix::unistd::geteuid().is_root() {
        return;
    }
    let dir = tempfile::tempdir().unwrap();
    let locked = dir.path().join("a_locked");
    let open = dir.path().join("b_open");
    fs::create_dir(&locked).unwrap();
    fs::create_dir(&open).unwrap();
    fs::write(open.join("visible.txt"), b"").unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();

    let mut cmd = get_dls_cmd();
    cmd.arg("-R").arg(dir.path());
    let output = cmd.output().unwrap();
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o755)).unwrap();

    assert_eq!(output.status.code(), Some(0));
    let stdout = String::from_utf8(output.stdout).unwrap();
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("cannot open directory"));
    assert!(stderr.contains("a_locked"));
    assert!(stdout.contains(&format!("\n{}:\nvisible.txt \n", open.display())));
}

#[test]
fn test_closed_stdout_exits_quietly() {
    let dir = tempfile::tempdir().unwrap();
    for i in 0..2000 {
        fs::write(dir.path().join(format!("file-with-a-long-name-{:05}", i)), b"").unwrap();
    }
    let mut child = get_dls_cmd()
        .arg("-l")
        .arg(dir.path())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();

    // Read a little, then hang up like `| head -1` would.
    let mut first = [0u8; 16];
    child.stdout.take().unwrap().read_exact(&mut first).unwrap();
    let output = child.wait_with_output().unwrap();

    assert_eq!(output.status.code(), Some(0));
    assert!(!String::from_utf8_lossy(&output.stderr).contains("Broken pipe"));
}
