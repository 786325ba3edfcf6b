//! CLI 冒烟测试

use assert_cmd::Command;

#[test]
fn help_lists_both_commands() {
    let output = Command::cargo_bin("pagevox")
        .expect("binary should build")
        .arg("--help")
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout).to_string();
    assert!(stdout.contains("translate"));
    assert!(stdout.contains("speak"));
}

#[test]
fn translate_requires_an_input() {
    Command::cargo_bin("pagevox")
        .expect("binary should build")
        .arg("translate")
        .assert()
        .failure();
}
