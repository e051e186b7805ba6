use objcmd_ir::SchemaKind;
use objcmd_schema::{Error, parse_file};

const GARAGE: &str = r#"{
  "models": {
    "Car": {
      "type": "object",
      "x-namespace": "Contoso.Garage",
      "description": "A car",
      "required": ["name"],
      "properties": {
        "name": { "type": "string", "description": "Car name" },
        "properties": { "$ref": "CarProperties" },
        "manual": { "type": "string", "format": "binary" }
      }
    },
    "CarProperties": {
      "type": "object",
      "properties": {
        "enabled": { "type": "boolean" }
      }
    }
  }
}"#;

#[test]
fn test_parse_file_builds_graph() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("models.json");
    std::fs::write(&path, GARAGE).unwrap();

    let graph = parse_file(&path).unwrap();
    let names: Vec<&str> = graph.models().map(|(name, _)| name).collect();
    assert_eq!(names, vec!["Car", "CarProperties"]);

    let car = &graph[graph.model("Car").unwrap()];
    assert_eq!(car.full_name(), "Contoso.Garage.Car");
    assert_eq!(car.description.as_deref(), Some("A car"));
    assert_eq!(
        car.properties.keys().collect::<Vec<_>>(),
        vec!["name", "properties", "manual"]
    );
    assert_eq!(graph[car.properties["manual"].schema].kind, SchemaKind::Binary);
}

#[test]
fn test_parse_file_missing() {
    let dir = tempfile::tempdir().unwrap();
    let err = parse_file(dir.path().join("missing.json")).unwrap_err();
    assert!(matches!(*err, Error::Io { .. }));
}
