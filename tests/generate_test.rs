use std::fs;

use ppgen::error::Error;
use ppgen::generate::{generate, read_template, write_output};
use ppgen::source::FileSystemSource;
use tempfile::TempDir;

fn setup() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("tools")).unwrap();
    fs::create_dir_all(root.join("src")).unwrap();
    fs::write(
        root.join("tools/template.c"),
        "#include \"pp.h\"  \n{{src/ppCommon.c}}\n#ifdef __linux__\n{{src/ppLinux.c}}\n#endif\n",
    )
    .unwrap();
    fs::write(root.join("src/ppCommon.c"), "#include \"pp.h\"\nstatic int common;\n").unwrap();
    temp_dir
}

#[test_log::test]
fn test_generate_writes_merged_output() {
    let temp_dir = setup();
    let root = temp_dir.path();
    let sources = FileSystemSource::new(root);

    let report = generate(root.join("tools/template.c"), root.join("pp.c"), &sources).unwrap();

    let merged = fs::read_to_string(root.join("pp.c")).unwrap();
    assert_eq!(
        merged,
        "#include \"pp.h\"\nstatic int common;\n#ifdef __linux__\n#error Linux is not yet implemented!\n#endif"
    );
    assert_eq!(report.expanded, 1);
    assert_eq!(report.missing, vec!["Linux".to_string()]);
}

#[test]
fn test_generate_overwrites_and_is_idempotent() {
    let temp_dir = setup();
    let root = temp_dir.path();
    let sources = FileSystemSource::new(root);
    let output = root.join("pp.c");
    fs::write(&output, "stale content that is much longer than the merged output\n".repeat(20)).unwrap();

    generate(root.join("tools/template.c"), &output, &sources).unwrap();
    let first = fs::read(&output).unwrap();
    generate(root.join("tools/template.c"), &output, &sources).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
    assert!(!String::from_utf8(first).unwrap().contains("stale"));
}

#[test]
fn test_missing_template_is_fatal() {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    let sources = FileSystemSource::new(root);

    let result = generate(root.join("tools/template.c"), root.join("pp.c"), &sources);

    assert!(matches!(result, Err(Error::TemplateRead { .. })));
    assert!(!root.join("pp.c").exists());
}

#[test]
fn test_unreadable_source_is_fatal() {
    let temp_dir = setup();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("src/ppLinux.c")).unwrap();
    let sources = FileSystemSource::new(root);

    let result = generate(root.join("tools/template.c"), root.join("pp.c"), &sources);

    assert!(matches!(result, Err(Error::SourceRead { .. })));
    assert!(!root.join("pp.c").exists());
}

#[test_log::test]
fn test_source_without_include_is_dropped() {
    let temp_dir = setup();
    let root = temp_dir.path();
    fs::write(root.join("src/ppLinux.c"), "int linux_only;\n").unwrap();
    let sources = FileSystemSource::new(root);

    let report = generate(root.join("tools/template.c"), root.join("pp.c"), &sources).unwrap();

    let merged = fs::read_to_string(root.join("pp.c")).unwrap();
    assert!(!merged.contains("linux_only"));
    assert!(merged.contains("#ifdef __linux__\n#endif"));
    assert_eq!(report.dropped.len(), 1);
}

#[test]
fn test_read_template() {
    let temp_dir = setup();
    let content = read_template(temp_dir.path().join("tools/template.c")).unwrap();
    assert!(content.contains("{{src/ppCommon.c}}"));
}

#[test]
fn test_write_output_creates_parent_dirs() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("build/merged/pp.c");

    write_output(&output, "int x;").unwrap();

    assert_eq!(fs::read_to_string(output).unwrap(), "int x;");
}

#[test]
fn test_file_system_source_resolves_against_root() {
    use ppgen::source::SourceProvider;

    let temp_dir = setup();
    let sources = FileSystemSource::new(temp_dir.path());

    assert!(sources.exists("src/ppCommon.c"));
    assert!(!sources.exists("src/ppLinux.c"));
    assert_eq!(sources.resolve("src/ppMac.c"), temp_dir.path().join("src/ppMac.c"));
    assert!(sources.read("src/ppCommon.c").unwrap().starts_with("#include"));
}
