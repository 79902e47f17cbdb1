use super::*;
use crate::animation::spring::spring;

fn fps30() -> Fps {
    Fps::new(30, 1).unwrap()
}

fn canvas() -> Canvas {
    Canvas {
        width: 1920,
        height: 1080,
    }
}

#[test]
fn split_preserves_order_and_empty_title_has_no_words() {
    assert_eq!(split_words("A B C"), ["A", "B", "C"]);
    assert!(split_words("").is_empty());
    assert_eq!(split_words("a  b"), ["a", "", "b"]);
}

#[test]
fn words_are_staggered_by_five_frames() {
    let t = Title::new("A B C", Color::BLACK, canvas()).unwrap();
    let words = t.words_at(0, fps30());
    assert_eq!(words.len(), 3);
    let delays: Vec<_> = words.iter().map(|w| w.delay_frames).collect();
    assert_eq!(delays, [0, 5, 10]);

    let cfg = SpringConfig::default().with_damping(200.0);
    let at12 = t.words_at(12, fps30());
    for w in &at12 {
        assert_eq!(w.scale, spring(12 - w.delay_frames as i64, fps30(), &cfg));
    }
    assert!(at12[0].scale > at12[1].scale && at12[1].scale > at12[2].scale);
}

#[test]
fn repeated_words_get_distinct_keys() {
    let t = Title::new("go go go", Color::BLACK, canvas()).unwrap();
    let keys: Vec<_> = t.words_at(0, fps30()).into_iter().map(|w| w.key).collect();
    assert_eq!(keys, ["go-0", "go-1", "go-2"]);
}

#[test]
fn empty_title_yields_empty_group() {
    let t = Title::new("", Color::BLACK, canvas()).unwrap();
    assert!(t.words_at(10, fps30()).is_empty());
    assert!(t.node(10, fps30()).children().is_empty());
}

#[test]
fn line_is_centered_on_the_canvas() {
    let t = Title::new("ab ab", Color::BLACK, canvas()).unwrap();
    let centers = t.word_centers();
    assert_eq!(centers.len(), 2);
    let mid = (centers[0] + centers[1]) / 2.0;
    assert!((mid - 960.0).abs() < 1e-9);
    // 2 chars * 0.6em * 100px + 2 * 10px margins
    assert!((centers[1] - centers[0] - 140.0).abs() < 1e-9);
}

#[test]
fn text_nodes_sit_on_the_baseline() {
    let t = Title::new("Hi", Color::WHITE, canvas()).unwrap();
    let node = t.node(100, fps30());
    let Node::Text {
        anchor, fill, font, ..
    } = &node.children()[0]
    else {
        panic!("expected text");
    };
    assert_eq!(anchor.y, 1080.0 - 160.0);
    assert_eq!(font.weight, 700);
    assert_eq!(
        *fill,
        Paint::Solid {
            color: Color::WHITE
        }
    );
}

#[test]
fn unencodable_text_is_rejected_up_front() {
    assert!(Title::new("ok\u{7}", Color::BLACK, canvas()).is_err());
    let mut style = TitleStyle::default();
    style.font.family = "sans\u{0}".to_owned();
    assert!(Title::with_style("ok", Color::BLACK, canvas(), style).is_err());
    assert!(Title::new("caf\u{e9} \u{1F600}", Color::BLACK, canvas()).is_ok());
}
