// tests/discovery.rs

use std::path::Path;

use bootrun::errors::BootrunError;
use bootrun::fs::mock::MockFileSystem;
use bootrun::launch::class_file::{ClassFormatError, ClassInfo};
use bootrun::launch::discovery::find_single_main_class;

mod common;
use common::{ClassFileBuilder, mock_classes};

const BOOT_APP: &str = "org.springframework.boot.autoconfigure.SpringBootApplication";

fn classes_dir() -> &'static Path {
    Path::new("/proj/target/classes")
}

#[test]
fn class_reader_sees_main_and_annotations() {
    let bytes = ClassFileBuilder::new("com.example.App")
        .with_main()
        .with_method(0x0001, "run", "()V")
        .annotated(BOOT_APP)
        .build();
    let info = ClassInfo::parse(&bytes).unwrap();

    assert_eq!(info.name, "com.example.App");
    assert!(info.has_main_method());
    assert_eq!(info.methods.len(), 2);
    assert!(info.is_annotated_with(BOOT_APP));
    assert!(!info.is_annotated_with("com.example.Other"));
}

#[test]
fn class_reader_rejects_garbage() {
    assert_eq!(
        ClassInfo::parse(&[0, 1, 2, 3]),
        Err(ClassFormatError::BadMagic(0x0001_0203))
    );
    assert_eq!(
        ClassInfo::parse(&[0xCA, 0xFE, 0xBA, 0xBE, 0]),
        Err(ClassFormatError::Truncated)
    );
}

#[test]
fn single_candidate_is_found() {
    common::init_tracing();
    let fs = mock_classes(
        Path::new("/proj"),
        &[
            ("com.example.App", ClassFileBuilder::new("com.example.App").with_main().build()),
            ("com.example.Util", ClassFileBuilder::new("com.example.Util").build()),
        ],
    );
    fs.add_file(classes_dir().join("application.properties"), "x=1");

    let found = find_single_main_class(&fs, classes_dir(), None).unwrap();
    assert_eq!(found.as_deref(), Some("com.example.App"));
}

#[test]
fn non_static_main_is_not_a_candidate() {
    let fs = mock_classes(
        Path::new("/proj"),
        &[(
            "com.example.App",
            ClassFileBuilder::new("com.example.App")
                .with_method(0x0001, "main", "([Ljava/lang/String;)V")
                .build(),
        )],
    );
    assert_eq!(find_single_main_class(&fs, classes_dir(), None).unwrap(), None);
}

#[test]
fn missing_directory_finds_nothing() {
    let fs = MockFileSystem::new();
    assert_eq!(find_single_main_class(&fs, classes_dir(), None).unwrap(), None);
}

#[test]
fn annotated_candidate_wins() {
    let fs = mock_classes(
        Path::new("/proj"),
        &[
            ("com.example.Tool", ClassFileBuilder::new("com.example.Tool").with_main().build()),
            (
                "com.example.app.Application",
                ClassFileBuilder::new("com.example.app.Application")
                    .with_main()
                    .annotated(BOOT_APP)
                    .build(),
            ),
        ],
    );
    let found = find_single_main_class(&fs, classes_dir(), Some(BOOT_APP)).unwrap();
    assert_eq!(found.as_deref(), Some("com.example.app.Application"));
}

#[test]
fn several_candidates_are_listed() {
    let fs = mock_classes(
        Path::new("/proj"),
        &[
            ("a.First", ClassFileBuilder::new("a.First").with_main().build()),
            ("b.Second", ClassFileBuilder::new("b.Second").with_main().build()),
        ],
    );
    match find_single_main_class(&fs, classes_dir(), Some(BOOT_APP)) {
        Err(BootrunError::EntryPointNotFound(msg)) => {
            assert!(msg.contains("a.First"));
            assert!(msg.contains("b.Second"));
            assert!(msg.contains("main_class"));
        }
        other => panic!("Expected EntryPointNotFound, got: {:?}", other),
    }
}

#[test]
fn malformed_class_file_names_the_file() {
    let fs = MockFileSystem::new();
    fs.add_file(classes_dir().join("com/example/Broken.class"), vec![0u8; 3]);
    let err = find_single_main_class(&fs, classes_dir(), None).unwrap_err();
    assert!(err.to_string().contains("Broken.class"), "{err}");
}
