use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        IconError::invalid_size("x")
            .to_string()
            .contains("invalid size:")
    );
    assert!(
        IconError::encoding("x")
            .to_string()
            .contains("encoding error:")
    );
    assert!(
        IconError::validation("x")
            .to_string()
            .contains("validation error:")
    );
    assert!(
        IconError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn io_names_the_path_and_keeps_source() {
    let err = IconError::io("out/icon-16.png", std::io::Error::other("disk full"));
    let msg = err.to_string();
    assert!(msg.contains("out/icon-16.png"));
    assert!(msg.contains("disk full"));
    assert!(std::error::Error::source(&err).is_some());
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = IconError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}
