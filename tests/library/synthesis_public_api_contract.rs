use create_npm_package::domain::{ManifestDefaults, PluginKind};
use create_npm_package::{PackageIdentity, Selection, TargetEnvironment, synthesize};

#[test]
fn every_selection_is_self_consistent_contract() {
    let identity = PackageIdentity::new("consistent-pkg", "octo").unwrap();

    for selection in Selection::all() {
        let artifacts = synthesize(selection, &identity, &ManifestDefaults::default());

        assert!(
            artifacts.unprovided_references().is_empty(),
            "{} references uninstalled packages: {:?}",
            selection,
            artifacts.unprovided_references()
        );

        let browser = selection.target == TargetEnvironment::Browser;
        assert_eq!(artifacts.bundler_config().has_plugin(PluginKind::HtmlEmit), browser);
        assert_eq!(artifacts.manifest_scripts().start.is_some(), browser);
        assert_eq!(artifacts.identifier(), "consistentPkg");
    }
}

#[test]
fn synthesis_is_deterministic_contract() {
    let identity = PackageIdentity::new("same-input", "octo").unwrap();

    for selection in Selection::all() {
        let first = synthesize(selection, &identity, &ManifestDefaults::default());
        let second = synthesize(selection, &identity, &ManifestDefaults::default());
        assert_eq!(first, second, "{}", selection);
    }
}
