use super::*;

#[test]
fn display_prefixes_are_stable() {
    assert!(
        LsysError::config("x")
            .to_string()
            .contains("configuration error:")
    );
    assert!(LsysError::render("x").to_string().contains("render error:"));
    assert!(
        LsysError::serde("x")
            .to_string()
            .contains("serialization error:")
    );
}

#[test]
fn other_preserves_source() {
    let base = std::io::Error::other("boom");
    let err = LsysError::Other(anyhow::Error::new(base));
    assert!(err.to_string().contains("boom"));
    assert!(!err.is_config());
}

#[test]
fn json_errors_map_to_serde() {
    let err: LsysError = serde_json::from_str::<u32>("nope").unwrap_err().into();
    assert!(matches!(err, LsysError::Serde(_)));
}
