use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        EaselError::construction("x")
            .to_string()
            .contains("construction error:")
    );
    assert!(
        EaselError::invalid_geometry("x")
            .to_string()
            .contains("invalid geometry:")
    );
    assert!(
        EaselError::invalid_argument("x")
            .to_string()
            .contains("invalid argument:")
    );
    assert_eq!(
        EaselError::unknown_layer("bg").to_string(),
        "unknown layer 'bg'"
    );
    assert_eq!(
        EaselError::unknown_operation("sparkle").to_string(),
        "unknown operation 'sparkle'"
    );
}

#[test]
fn unknown_component_names_layer_and_identifier() {
    let msg = EaselError::unknown_component("text", "title").to_string();
    assert!(msg.contains("'title'"));
    assert!(msg.contains("'text'"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = EaselError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
