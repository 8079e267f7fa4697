use crapi_loader::crapi_types::ApiRegistry;
use crapi_loader::{ApiTable, LoadError};
use std::fs;
use tempfile::TempDir;

const API_SPEC: &str = "\
# Chromium API table excerpt
name        Color3f
return      void
param       red     GLfloat
param       green   GLfloat
param       blue    GLfloat
category    1.0
chromium    pack

name        Vertex2f
param       x       GLfloat
param       y       GLfloat
category    1.0
chromium    pack extpack

name        BoundsInfoCR
param       bounds  const CRrecti *
param       payload const GLbyte *
param       len     GLint
param       num_opcodes GLint
category    Chromium
chromium    pack extpack
";

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("fixture should be writable");
    path
}

#[test]
fn load_legacy_spec_and_specials() {
    let dir = TempDir::new().unwrap();
    let spec = write_fixture(&dir, "APIspec.txt", API_SPEC);
    write_fixture(&dir, "unpacker_special", "Vertex2f\nBoundsInfoCR\n# retired\nColor3f\n");

    let mut table = ApiTable::load(&spec).expect("spec should load");
    assert_eq!(table.function_count(), 3);
    assert_eq!(
        table.function_names().collect::<Vec<_>>(),
        vec!["Color3f", "Vertex2f", "BoundsInfoCR"]
    );

    let count = table.load_specials(dir.path(), "unpacker").unwrap();
    assert_eq!(count, 3);

    // Membership comes back sorted, independent of file order
    assert_eq!(
        table.functions_in_category("unpacker"),
        vec!["BoundsInfoCR", "Color3f", "Vertex2f"]
    );
    assert!(table.is_special("unpacker", "Vertex2f"));
    assert!(!table.is_special("packer", "Vertex2f"));

    assert!(table.tags_for("Vertex2f").unwrap().is_extpack());
    assert!(!table.tags_for("Color3f").unwrap().is_extpack());
    assert!(table.tags_for("Nope").is_none());
    assert!(table.require_tags("Nope").is_err());
}

#[test]
fn missing_specials_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let spec = write_fixture(&dir, "APIspec.txt", API_SPEC);

    let mut table = ApiTable::load(&spec).unwrap();
    let err = table.load_specials(dir.path(), "unpacker").unwrap_err();

    match err {
        LoadError::Io { path, source } => {
            assert!(path.ends_with("unpacker_special"));
            assert_eq!(source.kind(), std::io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other}"),
    }
    assert_eq!(table.special_count("unpacker"), 0);
}

#[test]
fn empty_specials_file_is_empty_category() {
    let dir = TempDir::new().unwrap();
    let spec = write_fixture(&dir, "APIspec.txt", API_SPEC);
    write_fixture(&dir, "unpacker_special", "# no specials yet\n");

    let mut table = ApiTable::load(&spec).unwrap();
    let count = table.load_specials(dir.path(), "unpacker").unwrap();

    assert_eq!(count, 0);
    assert!(table.functions_in_category("unpacker").is_empty());
}

#[test]
fn specials_lines_are_whole_names() {
    let dir = TempDir::new().unwrap();
    let spec = write_fixture(&dir, "APIspec.txt", API_SPEC);
    write_fixture(&dir, "unpacker_special", "  Vertex2f  \nColor3f extra\n");

    let mut table = ApiTable::load(&spec).unwrap();
    table.load_specials(dir.path(), "unpacker").unwrap();

    assert!(table.is_special("unpacker", "Vertex2f"));
    assert!(table.is_special("unpacker", "Color3f extra"));
    assert!(!table.is_special("unpacker", "Color3f"));
}

#[test]
fn unknown_category_is_empty() {
    let table = ApiTable::new();
    assert!(table.functions_in_category("unpacker").is_empty());
}

#[test]
fn missing_spec_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let err = ApiTable::load(&dir.path().join("APIspec.txt")).unwrap_err();
    assert!(matches!(err, LoadError::Io { .. }));
}

#[test]
fn syntax_error_reports_file_and_line() {
    let dir = TempDir::new().unwrap();
    let spec = write_fixture(&dir, "APIspec.txt", "name Foo\nvector v 3\n");

    let err = ApiTable::load(&spec).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("APIspec.txt:2"), "got: {message}");
}

#[test]
fn yaml_table_matches_legacy_table() {
    let dir = TempDir::new().unwrap();
    let spec = write_fixture(&dir, "APIspec.txt", API_SPEC);
    write_fixture(&dir, "unpacker_special", "Vertex2f\nBoundsInfoCR\nColor3f\n");

    let mut legacy = ApiTable::load(&spec).unwrap();
    legacy.load_specials(dir.path(), "unpacker").unwrap();

    let yaml = legacy.to_api_file().to_yaml().unwrap();
    let yaml_path = write_fixture(&dir, "api.yaml", &yaml);
    let from_yaml = ApiTable::load(&yaml_path).expect("yaml should load");

    assert_eq!(
        from_yaml.functions_in_category("unpacker"),
        legacy.functions_in_category("unpacker")
    );
    for name in legacy.function_names() {
        assert_eq!(from_yaml.function(name), legacy.function(name));
    }
}

#[test]
fn invalid_yaml_is_yaml_error() {
    let dir = TempDir::new().unwrap();
    let path = write_fixture(&dir, "api.yml", "functions: [name: ");

    let err = ApiTable::load(&path).unwrap_err();
    assert!(matches!(err, LoadError::Yaml { .. }));
}
