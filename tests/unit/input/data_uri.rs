use super::*;

#[test]
fn gif_base64_uri() {
    let r = parse_data_uri("data:image/gif;base64,AAAA");
    assert!(r.is_valid());
    assert_eq!(r.media_type(), Some("image/gif"));
    assert!(r.has_media_type());
    assert!(r.is_base64_encoded());
    assert_eq!(r.data(), Some("AAAA"));
}

#[test]
fn unknown_parameters_are_ignored() {
    let r = parse_data_uri("data:image/gif;foo=bar;base64,R0lGODdh");
    assert!(r.is_valid());
    assert_eq!(r.media_type(), Some("image/gif"));
    assert!(r.is_base64_encoded());
    assert_eq!(r.data(), Some("R0lGODdh"));
}

#[test]
fn charset_without_base64() {
    let r = parse_data_uri("data:text/plain;charset=utf-8,test");
    assert!(r.is_valid());
    assert_eq!(r.media_type(), Some("text/plain"));
    assert_eq!(r.charset(), Some("utf-8"));
    assert!(!r.is_base64_encoded());
    assert_eq!(r.data(), Some("test"));
}

#[test]
fn bare_charset_and_empty_payload() {
    let r = parse_data_uri("data:;charset=utf-8,");
    assert!(r.is_valid());
    assert_eq!(r.media_type(), None);
    assert!(!r.has_media_type());
    assert!(!r.is_base64_encoded());
    assert_eq!(r.data(), None);
}

#[test]
fn only_first_token_can_be_media_type() {
    let r = parse_data_uri("data:charset=utf-8;image/png,xyz");
    assert!(r.is_valid());
    assert_eq!(r.media_type(), None);
    assert_eq!(r.charset(), Some("utf-8"));
}

#[test]
fn base64_directive_is_case_sensitive() {
    let r = parse_data_uri("data:image/png;BASE64,AAAA");
    assert!(r.is_valid());
    assert!(!r.is_base64_encoded());
}

#[test]
fn missing_prefix_or_comma_is_invalid() {
    for input in ["image/gif;base64,AAAA", "data:image/gif;base64", "DATA:,x", ""] {
        let r = parse_data_uri(input);
        assert!(!r.is_valid(), "{input}");
        assert_eq!(r, ParsedDataUri::default());
    }
}

#[test]
fn payload_decoding() {
    let b64 = parse_data_uri("data:text/plain;base64,SGVsbG8=");
    assert_eq!(decode_payload(&b64).unwrap(), b"Hello");

    let pct = parse_data_uri("data:,a%20b+c");
    assert_eq!(decode_payload(&pct).unwrap(), b"a b+c");
}

#[test]
fn plus_is_literal_in_percent_payloads() {
    let uri = parse_data_uri("data:text/plain,1+1%3D2");
    assert_eq!(decode_payload(&uri).unwrap(), b"1+1=2");

    let encoded_plus = parse_data_uri("data:,%2B");
    assert_eq!(decode_payload(&encoded_plus).unwrap(), b"+");
}

#[test]
fn payload_errors_are_classified() {
    let bad_b64 = parse_data_uri("data:image/png;base64,foo");
    assert!(matches!(decode_payload(&bad_b64), Err(ImageError::Malformed(_))));

    let empty = parse_data_uri("data:image/png;base64,");
    assert!(matches!(decode_payload(&empty), Err(ImageError::Malformed(_))));

    let bad_pct = parse_data_uri("data:,%zz");
    assert!(matches!(decode_payload(&bad_pct), Err(ImageError::Malformed(_))));

    let not_uri = parse_data_uri("nope");
    assert!(decode_payload(&not_uri).unwrap_err().is_decoder());
}
