use super::*;

fn close(a: Point, b: Point) -> bool {
    (a - b).hypot() < 1e-9
}

#[test]
fn transform_keeps_origin_fixed() {
    let origin = Point::new(960.0, 540.0);
    let t = Transform2D {
        origin,
        rotation_deg: 33.0,
        scale: 0.4,
    };
    assert!(close(t.apply(origin), origin));
}

#[test]
fn rotation_is_clockwise_in_y_down_space() {
    let t = Transform2D::rotate_about(Point::ZERO, 90.0);
    assert!(close(t.apply(Point::new(1.0, 0.0)), Point::new(0.0, 1.0)));
}

#[test]
fn scale_about_pivot() {
    let t = Transform2D::scale_about(Point::new(10.0, 10.0), 2.0);
    assert!(close(t.apply(Point::new(11.0, 10.0)), Point::new(12.0, 10.0)));
    assert!(!t.is_identity());
    assert!(Transform2D::default().is_identity());
    assert_eq!(Transform2D::default().to_affine(), Affine::IDENTITY);
}

fn gradient(id: &str) -> Paint {
    Paint::LinearGradient(LinearGradient::two_stop(
        ResourceId::new(id),
        Point::ZERO,
        Point::new(0.0, 1.0),
        [Color::BLACK, Color::WHITE],
    ))
}

fn sample_scene() -> Scene {
    Scene {
        width: 100,
        height: 50,
        frame: 3,
        nodes: vec![Node::Group {
            key: "root".to_owned(),
            transform: Transform2D::default(),
            children: vec![
                Node::Ellipse {
                    key: "e".to_owned(),
                    center: Point::new(50.0, 25.0),
                    rx: 10.0,
                    ry: 20.0,
                    fill: Paint::None,
                    stroke: Some(Stroke {
                        paint: gradient("g1"),
                        width: 3.0,
                        dash_array: Some(12.0),
                        dash_offset: 6.0,
                        line_cap: LineCap::Round,
                    }),
                    transform: Transform2D::default(),
                },
                Node::Circle {
                    key: "c".to_owned(),
                    center: Point::new(50.0, 25.0),
                    r: 5.0,
                    fill: gradient("g2"),
                    transform: Transform2D::default(),
                },
            ],
        }],
    }
}

#[test]
fn walk_is_draw_order() {
    let scene = sample_scene();
    let keys: Vec<_> = scene.walk().iter().map(|n| n.key().to_owned()).collect();
    assert_eq!(keys, ["root", "e", "c"]);
    assert!(scene.find("c").is_some());
    assert!(scene.find("missing").is_none());
}

#[test]
fn gradients_are_collected_from_fill_and_stroke() {
    let scene = sample_scene();
    let ids: Vec<_> = scene.gradients().iter().map(|g| g.id.as_str()).collect();
    assert_eq!(ids, ["g1", "g2"]);
}

#[test]
fn json_encoding_is_tagged_and_stable() {
    let scene = sample_scene();
    let a = scene.to_json().unwrap();
    let b = scene.clone().to_json().unwrap();
    assert_eq!(a, b);
    let v: serde_json::Value = serde_json::from_str(&a).unwrap();
    assert_eq!(v["nodes"][0]["kind"], "group");
    assert_eq!(v["nodes"][0]["children"][0]["stroke"]["paint"]["kind"], "linear_gradient");
    let back: Scene = serde_json::from_str(&a).unwrap();
    assert_eq!(back, scene);
}
