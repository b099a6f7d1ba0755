use crate::harness::TestContext;
use predicates::prelude::*;

#[test]
fn creates_every_variant_and_target() {
    let ctx = TestContext::new();

    for language in ["legacy", "modern", "typed"] {
        for target in ["browser", "library"] {
            let name = format!("pkg-{}-{}", language, target);
            ctx.create(&name, language, target)
                .assert()
                .success()
                .stdout(predicate::str::contains(format!("Created {}", name)));

            let project = ctx.project(&name);
            assert!(project.join("webpack.config.js").is_file(), "{}", name);
            assert!(project.join("package.json").is_file(), "{}", name);
            assert!(project.join(".eslintrc.json").is_file(), "{}", name);
            assert_eq!(project.join("index.html").is_file(), target == "browser", "{}", name);

            let manifest = ctx.read_json(&name, "package.json");
            assert_eq!(manifest["name"], name.as_str());
            assert_eq!(manifest["scripts"].get("start").is_some(), target == "browser");
        }
    }
}

#[test]
fn typed_browser_project_bundles_typescript() {
    let ctx = TestContext::new();
    ctx.create("my-cool-package", "typescript", "browser").assert().success();

    assert!(ctx.project("my-cool-package").join("src/index.ts").is_file());
    assert!(ctx.project("my-cool-package").join("tsconfig.json").is_file());

    let config = ctx.read("my-cool-package", "webpack.config.js");
    assert!(config.contains("entry: './src/index.ts'"));
    assert!(config.contains("'.tsx'"));
    assert!(config.contains("library: 'myCoolPackage'"));
    assert!(config.contains("new HtmlWebpackPlugin({"));
    assert!(config.contains("title: 'myCoolPackage'"));
}

#[test]
fn modern_library_sets_lint_parser() {
    let ctx = TestContext::new();
    ctx.create("es-next", "es6", "library").assert().success();

    let lint = ctx.read_json("es-next", ".eslintrc.json");
    assert_eq!(lint["parser"], "babel-eslint");

    let config = ctx.read("es-next", "webpack.config.js");
    assert!(config.contains("loader: 'babel-loader'"));
    assert!(config.contains("libraryTarget: 'commonjs2'"));
    assert!(!config.contains("HtmlWebpackPlugin"));
}

#[test]
fn browser_flag_and_custom_directory() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["site", "-s", "octo", "-l", "legacy", "--browser", "-d", "nested/out"])
        .args(["--skip-install", "--skip-git"])
        .assert()
        .success();

    assert!(ctx.project("nested/out").join("index.html").is_file());
    assert!(!ctx.project("site").exists());
    assert_eq!(ctx.read_json("nested/out", "package.json")["name"], "site");
}

#[test]
fn git_step_never_fails_the_run() {
    let ctx = TestContext::new();
    ctx.cli()
        .args(["with-git", "-s", "octo", "-l", "modern", "--library", "--skip-install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created with-git"));

    assert!(ctx.project("with-git").join("package.json").is_file());
}
