use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        StampError::invalid_input("x")
            .to_string()
            .contains("invalid input:")
    );
    assert!(
        StampError::geometry("x")
            .to_string()
            .contains("geometry error:")
    );
    assert!(StampError::decode("x").to_string().contains("decode error:"));
    assert!(StampError::encode("x").to_string().contains("encode error:"));
    assert!(StampError::render("x").to_string().contains("render error:"));
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = StampError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
}

#[test]
fn codec_errors_are_classified() {
    assert!(StampError::decode("x").is_codec());
    assert!(StampError::encode("x").is_codec());
    assert!(!StampError::geometry("x").is_codec());
}
