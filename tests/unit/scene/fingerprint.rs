use super::*;

fn scene(frame: u64, r: f64) -> Scene {
    Scene {
        width: 64,
        height: 64,
        frame,
        nodes: vec![Node::Circle {
            key: "dot".to_owned(),
            center: Point::new(32.0, 32.0),
            r,
            fill: Paint::Solid {
                color: Color::BLACK,
            },
            transform: Transform2D::default(),
        }],
    }
}

#[test]
fn fingerprint_is_stable_and_ignores_frame_number() {
    let a = fingerprint_scene(&scene(0, 10.0));
    let b = fingerprint_scene(&scene(0, 10.0));
    let c = fingerprint_scene(&scene(99, 10.0));
    assert_eq!(a, b);
    assert_eq!(a, c);
}

#[test]
fn fingerprint_changes_with_geometry() {
    let a = fingerprint_scene(&scene(0, 10.0));
    let b = fingerprint_scene(&scene(0, 10.000001));
    assert_ne!(a, b);
}

#[test]
fn fingerprint_distinguishes_paint_kinds() {
    let mut s = scene(0, 10.0);
    let a = fingerprint_scene(&s);
    if let Node::Circle { fill, .. } = &mut s.nodes[0] {
        *fill = Paint::None;
    }
    assert_ne!(a, fingerprint_scene(&s));
}
