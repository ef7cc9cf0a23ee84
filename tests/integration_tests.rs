use std::fs;

use course_advisor::{
    AdvisorConfig, AdvisorError, Catalog, CatalogPipeline, LoadEngine, LocalStorage, Result,
};
use tempfile::TempDir;

fn write_catalog(dir: &TempDir, content: &str) -> String {
    let path = dir.path().join("courses.txt");
    fs::write(&path, content).unwrap();
    path.to_str().unwrap().to_string()
}

fn engine_for(catalog_file: &str) -> LoadEngine<CatalogPipeline<LocalStorage, AdvisorConfig>> {
    let config = AdvisorConfig {
        catalog_file: catalog_file.to_string(),
        delimiter: ',',
        uppercase_lookup: true,
    };
    let storage = LocalStorage::new(".".to_string());
    LoadEngine::new(CatalogPipeline::new(storage, config))
}

fn load(catalog_file: &str) -> Result<Catalog> {
    engine_for(catalog_file).run()
}

#[test]
fn test_round_trip_load_find_and_sort() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "CS101,Intro to CS,CS100\nCS100,Pre-CS\n");

    let catalog = load(&path).unwrap();

    let course = catalog.find("CS101").unwrap();
    assert_eq!(course.name, "Intro to CS");
    assert_eq!(course.prerequisites, vec!["CS100".to_string()]);

    let identifiers: Vec<&str> = catalog
        .sorted()
        .iter()
        .map(|c| c.identifier.as_str())
        .collect();
    assert_eq!(identifiers, vec!["CS100", "CS101"]);
}

#[test]
fn test_sorted_listing_is_non_decreasing_and_preserves_identifiers() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        &dir,
        "MATH201,Discrete Mathematics\n\
         CSCI300,Introduction to Algorithms,CSCI200,MATH201\n\
         CSCI350,Operating Systems,CSCI300\n\
         CSCI101,Introduction to Programming in C++,CSCI100\n\
         CSCI100,Introduction to Computer Science\n\
         CSCI200,Data Structures,CSCI101\n",
    );

    let catalog = load(&path).unwrap();
    let sorted = catalog.sorted();

    for pair in sorted.windows(2) {
        assert!(pair[0].identifier <= pair[1].identifier);
    }

    let mut input_identifiers: Vec<String> = catalog
        .courses()
        .iter()
        .map(|c| c.identifier.clone())
        .collect();
    input_identifiers.sort();
    let sorted_identifiers: Vec<String> =
        sorted.iter().map(|c| c.identifier.clone()).collect();
    assert_eq!(sorted_identifiers, input_identifiers);
}

#[test]
fn test_every_prerequisite_names_a_course_after_load() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(
        &dir,
        "CSCI100,Introduction to Computer Science\n\
         CSCI101,Introduction to Programming in C++,CSCI100\n\
         CSCI200,Data Structures,CSCI101\n",
    );

    let catalog = load(&path).unwrap();
    for course in catalog.courses() {
        for prerequisite in &course.prerequisites {
            assert!(catalog.find(prerequisite).is_ok());
        }
    }
}

#[test]
fn test_unknown_prerequisite_fails_naming_the_identifier() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "CS101,Intro,MATH99\n");

    let err = load(&path).unwrap_err();
    assert!(matches!(
        &err,
        AdvisorError::UnknownPrerequisite { identifier } if identifier == "MATH99"
    ));
    assert_eq!(err.to_string(), "MATH99 does not exist in course list");
}

#[test]
fn test_single_field_line_is_malformed() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "CS101\n");

    let err = load(&path).unwrap_err();
    assert!(matches!(err, AdvisorError::MalformedRecord { line: 1 }));
    assert!(err.to_string().contains("missing parameters"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("no-such-file.txt");

    let err = load(path.to_str().unwrap()).unwrap_err();
    assert!(matches!(err, AdvisorError::IoError(_)));
}

#[test]
fn test_failed_reload_keeps_previous_catalog() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "CS100,Pre-CS\nCS101,Intro to CS,CS100\n");
    let engine = engine_for(&path);

    let mut catalog = engine.run().unwrap();
    assert_eq!(catalog.len(), 2);

    // The file goes bad between loads; the session keeps serving the last
    // good catalog.
    fs::write(dir.path().join("courses.txt"), "CS101\n").unwrap();
    match engine.run() {
        Ok(reloaded) => catalog = reloaded,
        Err(e) => assert!(matches!(e, AdvisorError::MalformedRecord { .. })),
    }

    assert_eq!(catalog.len(), 2);
    assert!(catalog.find("CS101").is_ok());
}

#[test]
fn test_no_trailing_newline_is_fine() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "CS100,Pre-CS");

    let catalog = load(&path).unwrap();
    assert_eq!(catalog.len(), 1);
}

#[test]
fn test_crlf_line_endings_load() {
    let dir = TempDir::new().unwrap();
    let path = write_catalog(&dir, "CS100,Pre-CS\r\nCS101,Intro to CS,CS100\r\n");

    let catalog = load(&path).unwrap();
    assert_eq!(catalog.find("CS101").unwrap().prerequisites, vec!["CS100"]);
}
