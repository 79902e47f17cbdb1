use super::*;
use crate::scene::model::{Node, Paint, Transform2D};
use kurbo::Point;

fn dot_scene() -> Scene {
    Scene {
        width: 16,
        height: 16,
        frame: 0,
        nodes: vec![Node::Circle {
            key: "dot".to_owned(),
            center: Point::new(8.0, 8.0),
            r: 4.0,
            fill: Paint::Solid {
                color: Color::rgb(1.0, 0.0, 0.0),
            },
            transform: Transform2D::default(),
        }],
    }
}

fn pixel(f: &FrameRGBA, x: u32, y: u32) -> [u8; 4] {
    let i = ((y * f.width + x) * 4) as usize;
    [f.data[i], f.data[i + 1], f.data[i + 2], f.data[i + 3]]
}

#[test]
fn unpremultiply_restores_straight_alpha() {
    let mut px = vec![64, 32, 0, 128, 10, 10, 10, 0, 1, 2, 3, 255];
    unpremultiply_rgba8_in_place(&mut px);
    assert_eq!(&px[0..4], &[128, 64, 0, 128]);
    assert_eq!(&px[4..8], &[0, 0, 0, 0]);
    assert_eq!(&px[8..12], &[1, 2, 3, 255]);
}

#[test]
fn rasterizes_shapes_at_scene_size() {
    let r = ResvgRasterizer::with_fontdb(Arc::new(usvg::fontdb::Database::new()));
    let f = r.rasterize(&dot_scene()).unwrap();
    assert_eq!((f.width, f.height), (16, 16));
    assert_eq!(f.data.len(), 16 * 16 * 4);
    assert!(f.premultiplied);
    assert_eq!(pixel(&f, 8, 8), [255, 0, 0, 255]);
    assert_eq!(pixel(&f, 0, 0), [0, 0, 0, 0]);
}

#[test]
fn clear_color_fills_the_background() {
    let r = ResvgRasterizer::with_fontdb(Arc::new(usvg::fontdb::Database::new()))
        .with_clear(Color::WHITE);
    let f = r.rasterize(&dot_scene()).unwrap();
    assert_eq!(pixel(&f, 0, 0), [255, 255, 255, 255]);
    assert_eq!(pixel(&f, 8, 8), [255, 0, 0, 255]);
}

#[test]
fn rasterizing_twice_is_identical() {
    let r = ResvgRasterizer::with_fontdb(Arc::new(usvg::fontdb::Database::new()));
    assert_eq!(
        r.rasterize(&dot_scene()).unwrap(),
        r.rasterize(&dot_scene()).unwrap()
    );
}
