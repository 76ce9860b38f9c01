// Test intent: verifies the kernel-check binary output and exit codes.
use assert_cmd::Command;

fn kernel_check() -> Command {
    let mut cmd = Command::cargo_bin("kernel-check").unwrap();
    for key in [
        "NUMKERN_LEN",
        "NUMKERN_REFERENCE",
        "NUMKERN_TOLERANCE",
        "NUMKERN_PRECISION",
        "RUST_LOG",
    ] {
        cmd.env_remove(key);
    }
    cmd
}

fn stdout_of(cmd: &mut Command) -> String {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "{:?}", output);
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn series_prints_success() {
    let out = stdout_of(kernel_check().arg("series"));
    assert_eq!(out, "SUM2PI_X - SUCCESSFUL!\n");
}

#[test]
fn dft_prints_scientific_norm() {
    let out = stdout_of(kernel_check().args([
        "dft",
        "--len",
        "8",
        "--reference",
        "15.73524641518037",
        "--strict",
    ]));
    assert_eq!(out, "1.573525e+01\n");
}

#[test]
fn axpy_prints_fixed_value() {
    let out = stdout_of(kernel_check().args(["axpy", "--len", "32"]));
    assert_eq!(out, "1.00000006\n");
}

#[test]
fn failure_is_reported_not_enforced() {
    let out = stdout_of(kernel_check().args(["dft", "--len", "8", "--reference", "15"]));
    assert_eq!(out, "1.573525e+01\n");
}

#[test]
fn strict_exits_nonzero_on_failure() {
    kernel_check()
        .args(["series", "--reference", "1", "--strict"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn zero_length_is_an_error() {
    kernel_check()
        .args(["axpy", "--len", "0"])
        .assert()
        .failure();
}

#[test]
fn env_len_applies_without_flag() {
    let out = stdout_of(
        kernel_check()
            .env("NUMKERN_LEN", "8")
            .args(["dft", "--reference", "15.73524641518037", "--strict"]),
    );
    assert_eq!(out, "1.573525e+01\n");
}

#[test]
fn show_region_goes_to_stderr() {
    let output = kernel_check()
        .args(["series", "--show-region", "--tolerance", "1e-3"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("begin sum2pi_x"));
    assert!(stderr.contains("output sum 1e-3*reference"));
    assert_eq!(
        String::from_utf8(output.stdout).unwrap(),
        "SUM2PI_X - SUCCESSFUL!\n"
    );
}
