use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn disallowed_file_blocks_generation() {
    let ctx = TestContext::new();
    ctx.write_work_file("busy/data.csv", "a,b\n");

    ctx.create("busy", "modern", "library")
        .assert()
        .failure()
        .stderr(predicate::str::contains("data.csv"));

    let entries: Vec<_> = std::fs::read_dir(ctx.project("busy")).unwrap().collect();
    assert_eq!(entries.len(), 1);
    assert!(!ctx.project("busy").join("package.json").exists());
}

#[test]
fn directory_named_like_a_log_is_listed_as_conflict() {
    let ctx = TestContext::new();
    ctx.write_work_file("logged/npm-debug.log/output.txt", "npm ERR!\n");

    ctx.create("logged", "modern", "library")
        .assert()
        .failure()
        .stderr(predicate::str::contains("could conflict"))
        .stderr(predicate::str::contains("  npm-debug.log"));

    assert!(ctx.project("logged").join("npm-debug.log/output.txt").is_file());
    assert!(!ctx.project("logged").join("package.json").exists());
}

#[test]
fn license_and_stale_log_are_tolerated() {
    let ctx = TestContext::new();
    ctx.write_work_file("tidy/LICENSE", "MIT License\n");
    ctx.write_work_file("tidy/npm-debug.log", "npm ERR!\n");
    ctx.write_work_file("tidy/.git/HEAD", "ref: refs/heads/main\n");

    ctx.create("tidy", "legacy", "library")
        .assert()
        .success()
        .stdout(predicate::str::contains("Removed 1 stale log file(s)"));

    assert!(!ctx.project("tidy").join("npm-debug.log").exists());
    assert_eq!(ctx.read("tidy", "LICENSE"), "MIT License\n");
    assert!(ctx.project("tidy").join("package.json").is_file());
}

#[test]
fn allowed_docs_directory_survives_generation() {
    use assert_fs::prelude::*;

    let ctx = TestContext::new();
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("docs-first/README.md").write_str("# Hand written\n").unwrap();
    temp.child("docs-first/docs/guide.md").write_str("guide\n").unwrap();

    ctx.cli_in(temp.path())
        .args(["docs-first", "-s", "octo", "-l", "typed", "--library"])
        .args(["--skip-install", "--skip-git"])
        .assert()
        .success();

    temp.child("docs-first/docs/guide.md").assert("guide\n");
    temp.child("docs-first/src/index.ts").assert(predicate::path::exists());
    temp.child("docs-first/webpack.config.js").assert(predicate::str::contains("ts-loader"));
    temp.child("docs-first/index.html").assert(predicate::path::missing());
}
