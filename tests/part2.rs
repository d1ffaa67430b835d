use assert_cmd::Command;
use predicates::prelude::predicate::str;

#[test]
fn part2_output_right_answer() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("inputs.txt");

    cmd.assert().success().stdout("51513\n");
}

#[test]
fn part2_override_feeds_back_first_signal() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("tests/data/override.txt");

    // a = (42 << 1) | 1 = 85, then b = 85 gives a = (85 << 1) | 1.
    cmd.assert().success().stdout("171\n");
}

#[test]
fn part2_override_chosen_wires() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.args(["example.txt", "--wire", "f", "--override-wire", "x"]);

    // f = 123 << 2 = 492, then x = 492 gives f = (492 << 2) & 0xffff.
    cmd.assert().success().stdout("1968\n");
}

#[test]
fn part2_output_all_signals_after_override() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.args(["tests/data/override.txt", "--all"]);

    cmd.assert().success().stdout("a: 171\nb: 85\nc: 170\n");
}

#[test]
fn part2_fail_without_reported_wire() {
    let mut cmd = Command::cargo_bin("part2").unwrap();
    cmd.arg("example.txt");

    cmd.assert()
        .failure()
        .stderr(str::contains("Wire(a) has no input bound"));
}
