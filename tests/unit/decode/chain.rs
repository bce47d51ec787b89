use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use super::*;
use crate::{decode::decoders::DecoderKind, foundation::color::Color};

/// Test decoder with a fixed answer that counts its invocations.
struct Scripted {
    name: &'static str,
    answer: fn() -> ImageResult<Decoded>,
    calls: Arc<AtomicUsize>,
}

impl Scripted {
    fn new(name: &'static str, answer: fn() -> ImageResult<Decoded>) -> (Self, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        (
            Self {
                name,
                answer,
                calls: calls.clone(),
            },
            calls,
        )
    }
}

impl Decode for Scripted {
    fn name(&self) -> &str {
        self.name
    }

    fn decode(&self, _input: &Input, _config: &DriverConfig) -> ImageResult<Decoded> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        (self.answer)()
    }
}

fn declines() -> ImageResult<Decoded> {
    Err(ImageError::decoder("nope"))
}

fn red() -> ImageResult<Decoded> {
    Ok(Decoded::Color(Color::rgb(255, 0, 0)))
}

fn blue() -> ImageResult<Decoded> {
    Ok(Decoded::Color(Color::rgb(0, 0, 255)))
}

fn io_failure() -> ImageResult<Decoded> {
    Err(ImageError::io(
        "/nowhere",
        std::io::Error::from(std::io::ErrorKind::PermissionDenied),
    ))
}

fn empty_chain() -> DecoderChain {
    DecoderChain::from_decoders(DriverConfig::default(), Vec::new())
}

#[test]
fn falls_through_to_the_first_success() {
    let (a, a_calls) = Scripted::new("a", declines);
    let (b, b_calls) = Scripted::new("b", red);
    let (c, c_calls) = Scripted::new("c", blue);
    let chain = empty_chain()
        .with(Decoder::custom(a))
        .with(Decoder::custom(b))
        .with(Decoder::custom(c));

    let out = chain.handle(&Input::from("anything")).unwrap();
    assert_eq!(out, Decoded::Color(Color::rgb(255, 0, 0)));
    assert_eq!(a_calls.load(Ordering::SeqCst), 1);
    assert_eq!(b_calls.load(Ordering::SeqCst), 1);
    assert_eq!(c_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn non_decoder_errors_stop_the_chain() {
    let (a, _) = Scripted::new("a", io_failure);
    let (b, b_calls) = Scripted::new("b", red);
    let chain = empty_chain().with(Decoder::custom(a)).with(Decoder::custom(b));

    let err = chain.handle(&Input::from("anything")).unwrap_err();
    assert!(matches!(err, ImageError::Io { .. }));
    assert_eq!(b_calls.load(Ordering::SeqCst), 0);
}

#[test]
fn all_declining_returns_last_decoder_error() {
    let chain = empty_chain()
        .with(Decoder::custom(Scripted::new("a", declines).0))
        .with(Decoder::custom(Scripted::new("b", declines).0));
    let err = chain.handle(&Input::Bytes(vec![1, 2, 3])).unwrap_err();
    assert!(err.is_decoder());
}

#[test]
fn empty_chain_is_a_decoder_error() {
    let chain = empty_chain();
    assert!(chain.is_empty());
    let err = chain.handle(&Input::from("#fff")).unwrap_err();
    assert!(err.is_decoder());
    assert!(err.to_string().contains("empty"));
}

#[test]
fn default_chain_follows_config_order() {
    let chain = DecoderChain::default();
    assert_eq!(chain.len(), DecoderKind::DEFAULT_ORDER.len());
    let names = chain.decoders().iter().map(|d| d.name()).collect::<Vec<_>>();
    assert_eq!(names.first(), Some(&"image-object"));
    assert_eq!(names.last(), Some(&"base64"));
}

#[test]
fn config_order_decides_which_decoder_wins() {
    // "abcd" is both a four-digit hex color and valid base64 text.
    let hex_first = DriverConfig {
        decoders: vec![DecoderKind::HexColor, DecoderKind::Base64],
        ..DriverConfig::default()
    };
    let out = DecoderChain::new(hex_first)
        .handle(&Input::from("abcd"))
        .unwrap();
    assert!(matches!(out, Decoded::Color(_)));

    let base64_first = DriverConfig {
        decoders: vec![DecoderKind::Base64, DecoderKind::HexColor],
        ..DriverConfig::default()
    };
    // The base64 payload is not an image, so that decoder declines and hex still wins.
    let out = DecoderChain::new(base64_first)
        .handle(&Input::from("abcd"))
        .unwrap();
    assert!(matches!(out, Decoded::Color(_)));
}

#[test]
fn default_chain_resolves_each_input_shape() {
    let chain = DecoderChain::default();
    let red = chain.handle(&Input::from("#f00")).unwrap();
    assert_eq!(red.into_color().unwrap(), Color::rgb(255, 0, 0));

    let t = chain.handle(&Input::from("transparent")).unwrap();
    assert_eq!(t.into_color().unwrap(), Color::transparent());

    let png = crate::test_support::png_bytes(2, 2, [0, 0, 0, 255]);
    let img = chain.handle(&Input::Bytes(png)).unwrap().into_image().unwrap();
    assert_eq!(img.width(), 2);

    let err = chain.handle(&Input::from("not an image")).unwrap_err();
    assert!(err.is_decoder());
}
