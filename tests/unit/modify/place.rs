use super::*;
use crate::{
    decode::config::DriverConfig,
    foundation::color::Color,
    raster::{model::Frame, surface::Surface},
    test_support::png_bytes,
};

const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

fn driver() -> Driver {
    Driver::new(DriverConfig::default())
}

fn solid(w: u32, h: u32, c: Color) -> Image {
    Image::from_surface(Surface::filled(w, h, c))
}

#[test]
fn position_matches_pivot_difference() {
    let base = solid(10, 10, Color::rgb(255, 0, 0));
    let wm = solid(4, 2, Color::rgb(0, 0, 255));
    let place = |a| PlaceModifier::new(Color::transparent()).at(a, 0, 0);

    assert_eq!(place(Anchor::TopLeft).position(&base, &wm), Point::new(0, 0));
    assert_eq!(place(Anchor::Center).position(&base, &wm), Point::new(3, 4));
    assert_eq!(place(Anchor::BottomRight).position(&base, &wm), Point::new(6, 8));
    assert_eq!(place(Anchor::Right).position(&base, &wm), Point::new(6, 4));
}

#[test]
fn offsets_are_not_mirrored_on_far_edges() {
    let base = solid(10, 10, Color::rgb(255, 0, 0));
    let wm = solid(2, 2, Color::rgb(0, 0, 255));
    let m = PlaceModifier::new(wm.clone()).at(Anchor::BottomRight, 1, 1);
    assert_eq!(m.position(&base, &wm), Point::new(9, 9));

    let out = m.apply(base, &driver()).unwrap();
    let s = out.first_frame().surface();
    assert_eq!(s.pixel(9, 9), Some(BLUE));
    assert_eq!(s.pixel(8, 8), Some(RED));
}

#[test]
fn overlay_is_drawn_on_every_frame() {
    let frames = (0..3)
        .map(|_| Frame::new(Surface::filled(6, 6, Color::rgb(255, 0, 0))))
        .collect();
    let base = Image::from_frames(frames).unwrap();
    let m = PlaceModifier::new(png_bytes(2, 2, BLUE)).at(Anchor::Center, 0, 0);

    let out = m.apply(base, &driver()).unwrap();
    assert_eq!(out.frame_count(), 3);
    for f in out.frames() {
        assert_eq!(f.surface().pixel(2, 2), Some(BLUE));
        assert_eq!(f.surface().pixel(3, 3), Some(BLUE));
        assert_eq!(f.surface().pixel(1, 1), Some(RED));
        assert!(f.surface().alpha_blending());
    }
}

#[test]
fn only_first_overlay_frame_is_used() {
    let wm = Image::from_frames(vec![
        Frame::new(Surface::filled(1, 1, Color::rgb(0, 0, 255))),
        Frame::new(Surface::filled(1, 1, Color::rgb(0, 255, 0))),
    ])
    .unwrap();
    let out = PlaceModifier::new(wm)
        .apply(solid(2, 2, Color::rgb(255, 0, 0)), &driver())
        .unwrap();
    assert_eq!(out.first_frame().surface().pixel(0, 0), Some(BLUE));
}

#[test]
fn translucent_overlay_blends() {
    let wm = solid(1, 1, Color::rgba(0, 0, 255, 128));
    let out = PlaceModifier::new(wm)
        .apply(solid(1, 1, Color::rgb(255, 0, 0)), &driver())
        .unwrap();
    assert_eq!(out.first_frame().surface().pixel(0, 0), Some([127, 0, 128, 255]));
}

#[test]
fn overlay_must_resolve_to_an_image() {
    let err = PlaceModifier::new("#00f")
        .apply(solid(2, 2, Color::rgb(255, 0, 0)), &driver())
        .unwrap_err();
    assert!(err.is_decoder());
}
