use assert_cmd::Command;
use predicates::str::contains;

#[test]
fn help_lists_probe_modes() {
    let mut cmd = Command::cargo_bin("couchmark").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(contains("--ntp"))
        .stdout(contains("--count"))
        .stdout(contains("--tui"));
}

#[test]
fn rejects_dns_flags_with_ntp() {
    let mut cmd = Command::cargo_bin("couchmark").unwrap();
    cmd.args(["--ntp", "--ipv6", "--no-color"])
        .assert()
        .failure()
        .code(2)
        .stdout(contains("only apply to DNS sweeps"));
}

#[test]
fn rejects_tui_with_json() {
    let mut cmd = Command::cargo_bin("couchmark").unwrap();
    cmd.args(["--tui", "--json", "--no-color"])
        .assert()
        .failure()
        .code(2)
        .stdout(contains("--tui cannot be used with JSON output"));
}

#[test]
fn rejects_zero_count() {
    let mut cmd = Command::cargo_bin("couchmark").unwrap();
    cmd.args(["-c", "0"]).assert().failure();
}

#[cfg(feature = "network-tests")]
#[test]
fn dns_sweep_prints_ranked_rows() {
    let mut cmd = Command::cargo_bin("couchmark").unwrap();
    cmd.arg("--no-color")
        .timeout(std::time::Duration::from_secs(120))
        .assert()
        .success()
        .stdout(contains("Cloudflare One"));
}
