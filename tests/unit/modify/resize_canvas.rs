use super::*;
use crate::{decode::config::DriverConfig, raster::model::Frame};

const RED: [u8; 4] = [255, 0, 0, 255];
const BLUE: [u8; 4] = [0, 0, 255, 255];

fn driver() -> Driver {
    Driver::new(DriverConfig::default())
}

fn red(w: u32, h: u32) -> Surface {
    Surface::filled(w, h, Color::rgb(255, 0, 0))
}

#[test]
fn position_per_anchor() {
    let m = ResizeCanvasModifier::new(4, 4);
    let size = Size::new(2, 2);
    assert_eq!(m.position(size), Point::new(1, 1));
    assert_eq!(m.anchor(Anchor::TopLeft).position(size), Point::new(0, 0));
    assert_eq!(m.anchor(Anchor::BottomRight).position(size), Point::new(2, 2));
    assert_eq!(m.anchor(Anchor::Top).position(size), Point::new(1, 0));
}

#[test]
fn grows_canvas_with_background() {
    let out = ResizeCanvasModifier::new(4, 4)
        .background(Color::rgb(0, 0, 255))
        .apply(Image::from_surface(red(2, 2)), &driver())
        .unwrap();
    let s = out.first_frame().surface();
    assert_eq!(s.size(), Size::new(4, 4));
    assert_eq!(s.pixel(0, 0), Some(BLUE));
    assert_eq!(s.pixel(1, 1), Some(RED));
    assert_eq!(s.pixel(2, 2), Some(RED));
    assert_eq!(s.pixel(3, 3), Some(BLUE));
}

#[test]
fn shrinking_clips_the_frame() {
    let mut src = red(4, 4);
    src.copy_from(
        &Surface::filled(1, 1, Color::rgb(0, 0, 255)),
        Point::new(3, 3),
        Point::ORIGIN,
        1,
        1,
    );
    let out = ResizeCanvasModifier::new(2, 2)
        .anchor(Anchor::BottomRight)
        .apply(Image::from_surface(src), &driver())
        .unwrap();
    let s = out.first_frame().surface();
    assert_eq!(s.pixel(1, 1), Some(BLUE));
    assert_eq!(s.pixel(0, 0), Some(RED));
}

#[test]
fn each_frame_is_positioned_by_its_own_size() {
    let image = Image::from_frames(vec![Frame::new(red(2, 2)), Frame::new(red(4, 4))]).unwrap();
    let out = ResizeCanvasModifier::new(4, 4)
        .apply(image, &driver())
        .unwrap();
    assert_eq!(out.frames()[0].surface().pixel(0, 0), Some([0, 0, 0, 0]));
    assert_eq!(out.frames()[1].surface().pixel(0, 0), Some(RED));
}

#[test]
fn zero_sized_canvas_is_rejected() {
    let err = ResizeCanvasModifier::new(3, 0)
        .apply(Image::from_surface(red(1, 1)), &driver())
        .unwrap_err();
    assert!(matches!(err, ImageError::Validation(_)));
}

#[test]
fn oversized_canvas_is_rejected_before_allocating() {
    let err = ResizeCanvasModifier::new(u32::MAX, 2)
        .apply(Image::from_surface(red(1, 1)), &driver())
        .unwrap_err();
    assert!(matches!(err, ImageError::Validation(_)), "{err}");

    let tight = Driver::new(DriverConfig {
        max_canvas_pixels: 8,
        ..DriverConfig::default()
    });
    let err = ResizeCanvasModifier::new(3, 3)
        .apply(Image::from_surface(red(1, 1)), &tight)
        .unwrap_err();
    assert!(matches!(err, ImageError::Validation(_)));
}
