use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        PathPulseError::invalid_path("x")
            .to_string()
            .contains("invalid path:")
    );
    assert!(
        PathPulseError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        PathPulseError::timing("x")
            .to_string()
            .contains("timing error:")
    );
    assert!(
        PathPulseError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = PathPulseError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn json_errors_map_to_serde() {
    let err: PathPulseError = serde_json::from_str::<f64>("nope").unwrap_err().into();
    assert!(matches!(err, PathPulseError::Serde(_)));
}
