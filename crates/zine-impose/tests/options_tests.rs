use std::path::PathBuf;
use zine_impose::*;

fn valid_options() -> BookletOptions {
    BookletOptions {
        input_file: PathBuf::from("dist/zine/terminull-vol1.pdf"),
        output_file: PathBuf::from("dist/zine/terminull-vol1-booklet.pdf"),
        ..Default::default()
    }
}

#[test]
fn test_default_options() {
    let options = BookletOptions::default();

    assert_eq!(options.page_size, None);
    assert_eq!(options.dimension_policy, DimensionPolicy::Strict);
}

#[test]
fn test_validate_ok() {
    assert!(valid_options().validate().is_ok());
}

#[test]
fn test_validate_missing_input() {
    let options = BookletOptions {
        input_file: PathBuf::new(),
        ..valid_options()
    };
    assert!(matches!(options.validate(), Err(ImposeError::Config(_))));
}

#[test]
fn test_validate_missing_output() {
    let options = BookletOptions {
        output_file: PathBuf::new(),
        ..valid_options()
    };
    assert!(matches!(options.validate(), Err(ImposeError::Config(_))));
}

#[test]
fn test_validate_output_overwrites_input() {
    let mut options = valid_options();
    options.output_file = options.input_file.clone();
    assert!(matches!(options.validate(), Err(ImposeError::Config(_))));
}

#[test]
fn test_validate_bad_page_size() {
    for size in [
        PageSize::new(0.0, 612.0),
        PageSize::new(396.0, -1.0),
        PageSize::new(f32::NAN, 612.0),
        PageSize::new(396.0, f32::INFINITY),
    ] {
        let options = BookletOptions {
            page_size: Some(size),
            ..valid_options()
        };
        assert!(options.validate().is_err(), "accepted {:?}", size);
    }
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_round_trip() {
    use tempfile::NamedTempFile;

    let options = BookletOptions {
        page_size: Some(PageSize::new(420.0, 595.0)),
        dimension_policy: DimensionPolicy::UseFirst,
        ..valid_options()
    };

    let temp = NamedTempFile::new().unwrap();
    options.save(temp.path()).await.unwrap();
    let loaded = BookletOptions::load(temp.path()).await.unwrap();

    assert_eq!(loaded, options);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_partial_json_uses_defaults() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), r#"{ "output_file": "out.pdf" }"#).unwrap();

    let loaded = BookletOptions::load(temp.path()).await.unwrap();
    assert_eq!(loaded.output_file, PathBuf::from("out.pdf"));
    assert_eq!(loaded.page_size, None);
    assert_eq!(loaded.dimension_policy, DimensionPolicy::Strict);
}

#[cfg(feature = "serde")]
#[tokio::test]
async fn test_options_bad_json() {
    use tempfile::NamedTempFile;

    let temp = NamedTempFile::new().unwrap();
    std::fs::write(temp.path(), "not json").unwrap();

    let result = BookletOptions::load(temp.path()).await;
    assert!(matches!(result, Err(ImposeError::Config(_))));
}

#[test]
fn test_page_size_display() {
    assert_eq!(
        PageSize::half_letter().to_string(),
        "396×612pt (5.50\"×8.50\")"
    );
}
