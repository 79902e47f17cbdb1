use super::*;
use crate::scene::ids::SeededIds;
use crate::style::color::Color;

fn atom() -> AtomPrimitive {
    let colors = ColorPair::new(Color::BLACK, Color::WHITE);
    AtomPrimitive::new(
        Point::new(960.0, 540.0),
        ATOM_RADIUS,
        colors,
        &mut SeededIds::new(3),
    )
    .unwrap()
}

#[test]
fn state_is_pure_scale() {
    let s = atom().state(0.4);
    assert_eq!(s.scale, 0.4);
    assert_eq!(s.rotation_deg, 0.0);
    assert_eq!(s.gradient_stops, [Color::BLACK, Color::WHITE]);
}

#[test]
fn node_is_a_horizontally_shaded_circle_scaled_about_its_center() {
    let a = atom();
    let Node::Circle {
        center,
        r,
        fill,
        transform,
        ..
    } = a.node(&a.state(0.5))
    else {
        panic!("expected a circle");
    };
    assert_eq!(center, Point::new(960.0, 540.0));
    assert_eq!(r, 70.0);
    assert_eq!(transform, Transform2D::scale_about(center, 0.5));
    let g = fill.gradient().unwrap();
    assert_eq!(&g.id, a.gradient_id());
    assert_eq!(g.end, Point::new(1.0, 0.0));
}

#[test]
fn bad_radius_is_rejected() {
    let colors = ColorPair::new(Color::BLACK, Color::WHITE);
    for r in [0.0, -1.0, f64::NAN] {
        assert!(AtomPrimitive::new(Point::ZERO, r, colors, &mut SeededIds::new(0)).is_err());
    }
}
