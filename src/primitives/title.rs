use crate::animation::spring::{Spring, SpringConfig};
use crate::foundation::core::{Canvas, Fps, Point};
use crate::foundation::error::{LogoError, LogoResult};
use crate::scene::model::{FontSpec, Node, Paint, Transform2D};
use crate::scene::svg::is_xml_char;
use crate::style::color::Color;

/// Frames between the start of consecutive word springs.
pub const TITLE_STAGGER_FRAMES: u64 = 5;

/// Typography and placement of the title line.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TitleStyle {
    /// Font selection.
    pub font: FontSpec,
    /// Distance from the canvas bottom to the text baseline.
    pub bottom_px: f64,
    /// Horizontal margin on each side of every word.
    pub word_margin_px: f64,
    /// Estimated glyph advance as a fraction of the font size.
    pub advance_em: f64,
}

impl Default for TitleStyle {
    fn default() -> Self {
        Self {
            font: FontSpec {
                family: "sans-serif".to_owned(),
                size_px: 100.0,
                weight: 700,
            },
            bottom_px: 160.0,
            word_margin_px: 10.0,
            advance_em: 0.6,
        }
    }
}

/// Animated state of one title word at a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct WordState {
    /// `"{text}-{index}"`, unique even for repeated words.
    pub key: String,
    /// Word text.
    pub text: String,
    /// Position in the title.
    pub index: usize,
    /// Frames this word waits before its spring starts.
    pub delay_frames: u64,
    /// Current scale (spring progress).
    pub scale: f64,
    /// Fill color.
    pub color: Color,
}

/// Split a title on single spaces, keeping order. An empty title has no words.
pub fn split_words(text: &str) -> Vec<String> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(' ').map(str::to_owned).collect()
}

/// The title line: words that pop in one after another.
#[derive(Clone, Debug, PartialEq)]
pub struct Title {
    words: Vec<String>,
    color: Color,
    canvas: Canvas,
    style: TitleStyle,
    spring: Spring,
}

impl Title {
    /// Split `text` once and prepare the word spring.
    pub fn new(text: &str, color: Color, canvas: Canvas) -> LogoResult<Self> {
        Self::with_style(text, color, canvas, TitleStyle::default())
    }

    /// Like [`Title::new`] with explicit typography.
    pub fn with_style(
        text: &str,
        color: Color,
        canvas: Canvas,
        style: TitleStyle,
    ) -> LogoResult<Self> {
        let spring = Spring::new(SpringConfig::default().with_damping(200.0));
        spring.validate()?;
        let checked = [
            ("title text", text),
            ("title font family", style.font.family.as_str()),
        ];
        for (what, s) in checked {
            if let Some(bad) = s.chars().find(|c| !is_xml_char(*c)) {
                return Err(LogoError::validation(format!(
                    "{what} contains unencodable character {bad:?}"
                )));
            }
        }
        Ok(Self {
            words: split_words(text),
            color,
            canvas,
            style,
            spring,
        })
    }

    /// Words in order.
    pub fn words(&self) -> &[String] {
        &self.words
    }

    /// Spring that scales each word in.
    pub fn spring_config(&self) -> SpringConfig {
        self.spring.config
    }

    /// Typography in use.
    pub fn style(&self) -> &TitleStyle {
        &self.style
    }

    /// Per-word animation state at `frame`. Word `i` starts `5 * i` frames late.
    pub fn words_at(&self, frame: i64, fps: Fps) -> Vec<WordState> {
        self.words
            .iter()
            .enumerate()
            .map(|(index, text)| {
                let delay_frames = TITLE_STAGGER_FRAMES * index as u64;
                let scale = self.spring.with_delay(delay_frames).progress(frame, fps);
                WordState {
                    key: format!("{text}-{index}"),
                    text: text.clone(),
                    index,
                    delay_frames,
                    scale,
                    color: self.color,
                }
            })
            .collect()
    }

    /// Estimated horizontal center of each word, laid out as one centered line.
    pub fn word_centers(&self) -> Vec<f64> {
        let style = &self.style;
        let widths: Vec<f64> = self
            .words
            .iter()
            .map(|w| w.chars().count() as f64 * style.advance_em * style.font.size_px)
            .collect();
        let total: f64 = widths
            .iter()
            .map(|w| w + 2.0 * style.word_margin_px)
            .sum();

        let mut x = (f64::from(self.canvas.width) - total) / 2.0;
        widths
            .iter()
            .map(|w| {
                let center = x + style.word_margin_px + w / 2.0;
                x += w + 2.0 * style.word_margin_px;
                center
            })
            .collect()
    }

    /// Title group at `frame`: one text node per word, each scaled about its own center.
    pub fn node(&self, frame: i64, fps: Fps) -> Node {
        let style = &self.style;
        let baseline = f64::from(self.canvas.height) - style.bottom_px;
        // Visual middle of the em box, the pivot of a CSS inline-block scale.
        let pivot_y = baseline - 0.35 * style.font.size_px;

        let children = self
            .words_at(frame, fps)
            .into_iter()
            .zip(self.word_centers())
            .map(|(w, cx)| Node::Text {
                key: w.key,
                text: w.text,
                anchor: Point::new(cx, baseline),
                font: style.font.clone(),
                fill: Paint::Solid { color: w.color },
                transform: Transform2D::scale_about(Point::new(cx, pivot_y), w.scale),
            })
            .collect();

        Node::Group {
            key: "title".to_owned(),
            transform: Transform2D::default(),
            children,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/primitives/title.rs"]
mod tests;
