//! Runs the matrix walkthrough binary end to end.

use assert_cmd::prelude::*;
use predicates::str::contains;
use std::process::Command;

#[test]
fn matrices_prints_every_section_in_order() {
    let output = Command::cargo_bin("matrices")
        .expect("binary exists")
        .output()
        .expect("matrices runs");
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).expect("utf-8 output");
    let sections = [
        "\nTranslation\n",
        "\nRotation\n",
        "\nScale\n",
        "\nComposition\n",
        "\nModel View Projection\n",
    ];
    let positions = sections
        .iter()
        .map(|section| stdout.find(section).expect(section))
        .collect::<Vec<_>>();
    assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));
}

#[test]
fn matrices_reports_translated_position() {
    let mut cmd = Command::cargo_bin("matrices").expect("binary exists");
    cmd.assert()
        .success()
        .stdout(contains("Position: (20.0000, 20.0000, 20.0000, 1.0000)"))
        .stdout(contains("Direction: (10.0000, 10.0000, 10.0000, 0.0000)"))
        .stdout(contains("Position: (200.0000, 200.0000, 0.0000, 1.0000)"));
}
