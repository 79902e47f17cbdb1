use super::*;
use crate::foundation::core::Fps;
use crate::foundation::error::LogoError;

fn comp(duration: u64) -> Composition {
    let video = VideoConfig::new(1920, 1080, Fps::new(30, 1).unwrap(), duration).unwrap();
    Composition::new(video, LogoProps::default(), 7).unwrap()
}

#[test]
fn default_props_match_the_template() {
    let p = LogoProps::default();
    assert_eq!(p.logo_color1.to_hex_rgb(), "#91eae4");
    assert_eq!(p.logo_color2.to_hex_rgb(), "#86a8e7");
    assert_eq!(p.title_color, Color::BLACK);
}

#[test]
fn scene_layers_title_over_logo() {
    let s = comp(90).scene(FrameIndex(10));
    assert_eq!(s.frame, 10);
    assert_eq!((s.width, s.height), (1920, 1080));
    let keys: Vec<_> = s.nodes.iter().map(|n| n.key()).collect();
    assert_eq!(keys, ["logo", "title"]);
    assert_eq!(s.nodes[1].children().len(), 3);
}

#[test]
fn same_frame_same_bytes() {
    let a = comp(90);
    let b = comp(90);
    for f in [0, 1, 17, 89, 90, 400] {
        let sa = a.scene(FrameIndex(f)).to_json().unwrap();
        let sb = a.scene(FrameIndex(f)).to_json().unwrap();
        let sc = b.scene(FrameIndex(f)).to_json().unwrap();
        assert_eq!(sa, sb);
        assert_eq!(sa, sc);
    }
}

#[test]
fn seed_changes_ids_but_not_geometry() {
    let video = VideoConfig::default();
    let a = Composition::new(video, LogoProps::default(), 1).unwrap();
    let b = Composition::new(video, LogoProps::default(), 2).unwrap();
    let ids = |c: &Composition| -> Vec<_> {
        let scene = c.scene(FrameIndex(5));
        scene.gradients().iter().map(|g| g.id.clone()).collect()
    };
    let (ga, gb) = (ids(&a), ids(&b));
    assert_ne!(ga, gb);
    assert_eq!(ga.len(), 4);
}

#[test]
fn parses_documents_with_defaults() {
    let c = Composition::from_json(
        r##"{
            "video": {
                "width": 640, "height": 360,
                "fps": {"num": 24, "den": 1}, "durationInFrames": 48
            },
            "props": {"titleText": "A B C", "logoColor1": "#ff0000"},
            "seed": 9
        }"##,
    )
    .unwrap();
    assert_eq!(c.video().width, 640);
    assert_eq!(c.props().title_text, "A B C");
    assert_eq!(c.props().logo_color1, Color::rgb(1.0, 0.0, 0.0));
    assert_eq!(c.props().logo_color2, LogoProps::default().logo_color2);
    assert_eq!(c.title().words().len(), 3);

    let c = Composition::from_json("{}").unwrap();
    assert_eq!(*c.video(), VideoConfig::default());

    let again = Composition::from_reader(c.to_json().unwrap().as_bytes()).unwrap();
    assert_eq!(again.props(), c.props());
    assert_eq!(again.seed(), c.seed());
}

#[test]
fn malformed_documents_fail_at_parse_time() {
    assert!(Composition::from_json(r#"{"props": {"logoColor1": "not-a-color"}}"#).is_err());
    let zero_width = r#"{"video": {"width": 0, "height": 1, "fps": {"num": 30, "den": 1}}}"#;
    assert!(Composition::from_json(zero_width).is_err());
    assert!(Composition::from_json("not json").is_err());
}

#[test]
fn titles_with_non_xml_characters_are_rejected() {
    for text in ["Hi\u{1}there", "tab\u{0}", "end\u{FFFF}"] {
        let props = LogoProps {
            title_text: text.to_owned(),
            ..LogoProps::default()
        };
        let err = Composition::new(VideoConfig::default(), props, 0).unwrap_err();
        assert!(matches!(err, LogoError::Validation(_)), "{text:?}: {err}");
    }

    let props = LogoProps {
        title_text: "tab\tand\nnewline".to_owned(),
        ..LogoProps::default()
    };
    assert!(Composition::new(VideoConfig::default(), props, 0).is_ok());
}
