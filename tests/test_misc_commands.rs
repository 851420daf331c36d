use assert_cmd::Command;
use predicates::prelude::{predicate, PredicateBooleanExt};

#[test]
fn test_problems_command() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("serab")?;
    cmd.arg("problems").arg("--logging-level").arg("off");
    cmd.assert().success().stdout(
        predicate::str::contains("SE-GR")
            .and(predicate::str::contains("EE-UC"))
            .and(predicate::str::contains("DC-ST"))
            .and(predicate::str::contains("DS-ADM")),
    );
    Ok(())
}

#[test]
fn test_authors_command() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("serab")?;
    cmd.arg("authors").arg("--logging-level").arg("off");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("serab"));
    Ok(())
}

#[test]
fn test_unknown_command_fails() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::cargo_bin("serab")?;
    cmd.arg("frobnicate");
    cmd.assert().failure();
    Ok(())
}
