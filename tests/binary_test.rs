//! Process-level behavior of the krun binary: exit codes, version output
//! and side effects as seen by a caller.

use std::process::Command;

/// Path of the compiled binary under test.
const KRUN: &str = env!("CARGO_BIN_EXE_krun");

#[test]
fn version_flag_prints_dev_and_exits_zero() {
    for flag in ["-v", "--version"] {
        let scratch = tempfile::tempdir().unwrap();
        let output = Command::new(KRUN)
            .arg(flag)
            .current_dir(scratch.path())
            .output()
            .expect("failed to spawn krun");

        assert!(output.status.success(), "{flag} should exit 0");
        assert_eq!(String::from_utf8_lossy(&output.stdout), "dev\n");
    }
}

#[test]
fn rejected_combination_exits_one_without_touching_the_tree() {
    let scratch = tempfile::tempdir().unwrap();
    let output = Command::new(KRUN)
        .args(["-a", "x86_64", "-s", "qemu"])
        .current_dir(scratch.path())
        .output()
        .expect("failed to spawn krun");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("not supported yet"),
        "stderr should name the rejected pair, got: {stderr}"
    );
    assert!(
        !scratch.path().join("build").exists(),
        "a rejected combination must not create the build directory"
    );
}

#[test]
fn unported_architecture_exits_one_without_side_effects() {
    let scratch = tempfile::tempdir().unwrap();
    let output = Command::new(KRUN)
        .args(["-a", "arm"])
        .current_dir(scratch.path())
        .output()
        .expect("failed to spawn krun");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(
        stderr.contains("no arm port yet"),
        "stderr should name the missing port, got: {stderr}"
    );
    assert!(
        !scratch.path().join("build").exists(),
        "an unported architecture must not create the build directory"
    );
}
