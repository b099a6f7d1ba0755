use create_npm_package::{
    AppError, CreateRequest, InstallStatus, LanguageVariant, TargetEnvironment, ToolConfig,
    VcsStatus, create_at,
};
use std::fs;
use tempfile::TempDir;

fn request(name: &str, variant: LanguageVariant, target: TargetEnvironment) -> CreateRequest {
    CreateRequest {
        name: name.to_string(),
        scope: "octo".to_string(),
        variant,
        target,
        directory: None,
        skip_install: true,
        skip_git: true,
    }
}

#[test]
fn public_api_generates_project_contract() {
    let temp = TempDir::new().unwrap();
    let outcome = create_at(
        temp.path(),
        &request("api-pkg", LanguageVariant::Typed, TargetEnvironment::Library),
        &ToolConfig::default(),
    )
    .unwrap();

    assert_eq!(outcome.identifier, "apiPkg");
    assert_eq!(outcome.install, InstallStatus::Skipped);
    assert_eq!(outcome.vcs, VcsStatus::Skipped);
    assert!(outcome.written.iter().any(|p| p == "tsconfig.json"));
    assert!(outcome.installed_packages.iter().any(|p| p == "ts-loader"));

    let manifest = fs::read_to_string(outcome.project_dir.join("package.json")).unwrap();
    assert!(manifest.contains("\"main\": \"dist/api-pkg.js\""));
}

#[test]
fn rerun_into_generated_project_conflicts_contract() {
    let temp = TempDir::new().unwrap();
    let req = request("twice", LanguageVariant::Legacy, TargetEnvironment::Browser);
    create_at(temp.path(), &req, &ToolConfig::default()).unwrap();

    match create_at(temp.path(), &req, &ToolConfig::default()) {
        Err(AppError::DirectoryConflict { entries, .. }) => {
            assert!(entries.contains(&"package.json".to_string()));
            assert!(entries.contains(&"webpack.config.js".to_string()));
        }
        other => panic!("expected a directory conflict, got {:?}", other),
    }
}
