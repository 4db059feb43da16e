use assert_cmd::Command;
use predicates::prelude::predicate::str;

const SAMPLE: &str = "\
3
1
Red 0
2
1 Red 5
0
1
Red 0 1
1
Red 0
2
0
0
1
Red 0 1
3
A 0
B 0
AB 2 A B
2
2 A 3 B 4
0
1
AB 0 1
";

#[test]
fn solve_prints_one_line_per_case() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.write_stdin(SAMPLE);
    cmd.assert()
        .success()
        .stdout("Case #1: 0 5\nCase #2: 0 -1\nCase #3: 0 7\n")
        .stderr(str::contains("!log cases 3"));
}

#[test]
fn solve_json_output() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.arg("--json").write_stdin(SAMPLE);
    cmd.assert()
        .success()
        .stdout("[[0,5],[0,null],[0,7]]\n");
}

#[test]
fn solve_with_hash_table_gives_same_answers() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.args(["--max-dense-states", "0"]).write_stdin(SAMPLE);
    cmd.assert()
        .success()
        .stdout("Case #1: 0 5\nCase #2: 0 -1\nCase #3: 0 7\n");
}

#[test]
fn solve_reports_undefined_color() {
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.write_stdin("1\n1\nRed 0\n1\n1 Blue 3\n0\n");
    cmd.assert()
        .failure()
        .stderr(str::contains("Invalid case #1"))
        .stderr(str::contains("Blue"));
}

#[test]
fn generated_cases_can_be_solved() {
    let generated = Command::cargo_bin("generate")
        .unwrap()
        .args(["-t", "3", "-n", "6", "-s", "11"])
        .output()
        .unwrap();
    assert!(generated.status.success());

    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.write_stdin(generated.stdout);
    cmd.assert()
        .success()
        .stdout(str::starts_with("Case #1: 0 "))
        .stdout(str::contains("Case #3: 0 "));
}

#[test]
fn stress_agrees_with_reference() {
    let mut cmd = Command::cargo_bin("stress").unwrap();
    cmd.args(["-i", "50", "-s", "5"]);
    cmd.assert().success().stderr(str::contains("!log status AC"));
}

#[test]
fn solve_keeps_totals_beyond_u64_exact() {
    // Three offers at i64::MAX along a chain: the last galaxy costs 3 * (2^63 - 1).
    let input = "\
1
1
Red 0
4
1 Red 9223372036854775807
1 Red 9223372036854775807
1 Red 9223372036854775807
0
3
Red 0 1
Red 1 2
Red 2 3
";
    let mut cmd = Command::cargo_bin("solve").unwrap();
    cmd.write_stdin(input);
    cmd.assert().success().stdout(
        "Case #1: 0 9223372036854775807 18446744073709551614 27670116110564327421\n",
    );
}
