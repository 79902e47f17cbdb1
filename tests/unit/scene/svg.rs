use super::*;
use crate::scene::ids::ResourceId;
use kurbo::Point;

#[test]
fn numbers_are_trimmed() {
    assert_eq!(fmt_num(960.0), "960");
    assert_eq!(fmt_num(0.5), "0.5");
    assert_eq!(fmt_num(1.0 / 3.0), "0.3333");
    assert_eq!(fmt_num(-0.00001), "0");
    assert_eq!(fmt_num(f64::NAN), "0");
}

fn arc_scene() -> Scene {
    Scene {
        width: 200,
        height: 100,
        frame: 0,
        nodes: vec![Node::Group {
            key: "logo".to_owned(),
            transform: Transform2D::rotate_about(Point::new(100.0, 50.0), 90.0),
            children: vec![
                Node::Ellipse {
                    key: "arc".to_owned(),
                    center: Point::new(100.0, 50.0),
                    rx: 10.0,
                    ry: 20.0,
                    fill: Paint::None,
                    stroke: Some(Stroke {
                        paint: Paint::LinearGradient(LinearGradient::two_stop(
                            ResourceId::new("arc-1"),
                            Point::ZERO,
                            Point::new(0.0, 1.0),
                            [Color::rgb(1.0, 0.0, 0.0), Color::rgb(0.0, 0.0, 1.0)],
                        )),
                        width: 3.0,
                        dash_array: Some(100.0),
                        dash_offset: 25.0,
                        line_cap: LineCap::Round,
                    }),
                    transform: Transform2D::default(),
                },
                Node::Text {
                    key: "a<b-0".to_owned(),
                    text: "a<b & \"c\"".to_owned(),
                    anchor: Point::new(100.0, 90.0),
                    font: FontSpec {
                        family: "sans-serif".to_owned(),
                        size_px: 10.0,
                        weight: 700,
                    },
                    fill: Paint::Solid {
                        color: Color::BLACK,
                    },
                    transform: Transform2D::default(),
                },
            ],
        }],
    }
}

#[test]
fn document_declares_gradients_and_references_them() {
    let svg = to_svg(&arc_scene());
    assert!(svg.starts_with("<svg "));
    assert!(svg.ends_with("</svg>"));
    assert!(svg.contains(r#"viewBox="0 0 200 100""#));
    assert!(svg.contains(r#"<linearGradient id="arc-1" x1="0%" y1="0%" x2="0%" y2="100%">"#));
    assert!(svg.contains(r##"stroke="url(#arc-1)""##));
    assert!(svg.contains(r#"stroke-dasharray="100" stroke-dashoffset="25""#));
    assert!(svg.contains(r#"stroke-linecap="round""#));
    assert!(svg.contains(r##"stop-color="#ff0000""##));
}

#[test]
fn group_transform_is_a_matrix_and_identity_is_omitted() {
    let svg = to_svg(&arc_scene());
    // 90° about (100, 50): matrix(0 1 -1 0 150 -50).
    assert!(svg.contains(r#"transform="matrix(0 1 -1 0 150 -50)""#), "{svg}");
    assert_eq!(svg.matches("transform=").count(), 1);
}

#[test]
fn text_is_escaped() {
    let svg = to_svg(&arc_scene());
    assert!(svg.contains("a&lt;b &amp; &quot;c&quot;</text>"));
    assert!(svg.contains(r#"data-key="a&lt;b-0""#));
    assert!(svg.contains(r#"font-weight="700""#));
}

#[test]
fn encoding_is_byte_identical() {
    assert_eq!(to_svg(&arc_scene()), to_svg(&arc_scene()));
}

#[test]
fn empty_scene_has_no_defs() {
    let s = Scene {
        width: 1,
        height: 1,
        frame: 0,
        nodes: Vec::new(),
    };
    assert_eq!(
        to_svg(&s),
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="1" height="1" viewBox="0 0 1 1"></svg>"#
    );
}

#[test]
fn non_xml_characters_are_dropped() {
    let mut scene = arc_scene();
    let Node::Group { children, .. } = &mut scene.nodes[0] else {
        panic!("expected group");
    };
    let Node::Text { text, .. } = &mut children[1] else {
        panic!("expected text");
    };
    *text = "Hi\u{1}there\u{FFFE}".to_owned();
    let svg = to_svg(&scene);
    assert!(svg.contains(">Hithere</text>"), "{svg}");
    assert!(!svg.contains('\u{1}'));
}

#[test]
fn ids_stay_unique_when_title_words_shadow_logo_keys() {
    use crate::foundation::core::{FrameIndex, VideoConfig};
    use crate::scene::composition::{Composition, LogoProps};

    let props = LogoProps {
        title_text: "arc atom logo".to_owned(),
        ..LogoProps::default()
    };
    let comp = Composition::new(VideoConfig::default(), props, 3).unwrap();
    let svg = to_svg(&comp.scene(FrameIndex(30)));
    let ids: Vec<&str> = svg
        .split(" id=\"")
        .skip(1)
        .filter_map(|rest| rest.split('"').next())
        .collect();
    assert_eq!(ids.len(), 4);
    let unique: std::collections::HashSet<_> = ids.iter().collect();
    assert_eq!(unique.len(), ids.len());
    assert!(svg.contains(r#"data-key="arc-0""#));
}
