use std::path::Path;

#[test]
fn demos_load_and_validate() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/turbojet.yaml");
    let project = jc_project::load_yaml(&path)
        .unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e));

    let ids: Vec<&str> = project.engines.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(
        ids,
        vec!["j79-dry", "j79-reheat", "j79-reheat-off", "ideal-static"]
    );
    assert!(project.engines[1].afterburner_enabled());
    assert!(!project.engines[2].afterburner_enabled());
}
