use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn rejects_invalid_package_name() {
    let ctx = TestContext::new();

    ctx.create("Bad_Name", "modern", "library")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot create a project called \"Bad_Name\""))
        .stderr(predicate::str::contains("capital letters"));

    assert!(!ctx.project("Bad_Name").exists());
}

#[test]
fn rejects_unknown_language() {
    let ctx = TestContext::new();

    ctx.create("pkg", "coffeescript", "library")
        .assert()
        .failure()
        .stderr(predicate::str::contains("coffeescript"));
}

#[test]
fn rejects_unknown_target() {
    let ctx = TestContext::new();

    ctx.create("pkg", "modern", "desktop")
        .assert()
        .failure()
        .stderr(predicate::str::contains("desktop"));

    assert!(!ctx.project("pkg").exists());
}

#[test]
fn rejects_blank_scope() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["pkg", "--scope", " ", "-l", "modern", "--library", "--skip-install", "--skip-git"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid scope"));
}

#[test]
fn rejects_scope_that_is_not_a_github_name() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["pkg", "--scope", "$octo", "-l", "modern", "--library", "--skip-install", "--skip-git"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid scope '$octo'"));

    assert!(!ctx.project("pkg").exists());
}

#[test]
fn browser_and_library_flags_conflict() {
    let ctx = TestContext::new();

    ctx.cli()
        .args(["pkg", "-s", "octo", "-l", "modern", "--browser", "--library"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
}
