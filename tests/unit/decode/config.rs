use super::*;
use crate::foundation::error::ImageError;

#[test]
fn default_order_starts_with_passthrough_and_ends_with_base64() {
    let cfg = DriverConfig::default();
    assert_eq!(cfg.decoders.first(), Some(&DecoderKind::ImageObject));
    assert_eq!(cfg.decoders.last(), Some(&DecoderKind::Base64));
    assert_eq!(cfg.decoders.len(), 9);
    assert!(cfg.decode_animation);
    assert!(cfg.extract_metadata);
}

#[test]
fn json_fills_missing_fields_with_defaults() {
    let cfg = DriverConfig::from_json(
        r#"{ "decoders": ["binary", "file-path"], "decode_animation": false }"#,
    )
    .unwrap();
    assert_eq!(cfg.decoders, vec![DecoderKind::Binary, DecoderKind::FilePath]);
    assert!(!cfg.decode_animation);
    assert!(cfg.extract_metadata);
    assert_eq!(cfg.max_input_bytes, DriverConfig::default().max_input_bytes);
    assert_eq!(cfg.max_canvas_pixels, DriverConfig::default().max_canvas_pixels);

    let capped = DriverConfig::from_json(r#"{ "max_canvas_pixels": 1024 }"#).unwrap();
    assert_eq!(capped.max_canvas_pixels, 1024);
    assert_eq!(capped.decoders, DriverConfig::default().decoders);
}

#[test]
fn json_roundtrip_and_errors() {
    let cfg = DriverConfig::default();
    let back = DriverConfig::from_json(&cfg.to_json().unwrap()).unwrap();
    assert_eq!(back, cfg);

    let err = DriverConfig::from_json(r#"{ "decoders": ["nope"] }"#).unwrap_err();
    assert!(matches!(err, ImageError::Other(_)));
    assert!(!err.is_decoder());
}
