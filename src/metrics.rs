// Text measurement, delegated to the host.
//
// The renderer needs glyph widths to place list tab stops, and hosts ask for
// the laid-out height of a finished buffer. Both go through `TextMetrics`,
// which a host implements on top of its own text-layout facility.
// `EstimatedMetrics` is a deterministic stand-in for headless use and tests;
// its line breaking is a rough approximation, not a layout engine.

use unicode_width::UnicodeWidthChar;

use crate::style::Font;
use crate::styled::StyledText;
use crate::theme::BASE_FONT_SIZE;

/// Host text-layout queries.
pub trait TextMetrics {
    /// Advance width of `text` set in `font`, in points.
    fn text_width(&self, text: &str, font: &Font) -> f64;

    /// Laid-out height of `text` in a container `width` points wide, or
    /// unbounded when `width` is `None`. Must be idempotent.
    fn content_height(&self, text: &StyledText, width: Option<f64>) -> f64;
}

/// Measure the display height of a rendered buffer.
///
/// A width that is not finite or not positive means unbounded.
pub fn measure_height(text: &StyledText, width: Option<f64>, metrics: &dyn TextMetrics) -> f64 {
    let width = width.filter(|w| w.is_finite() && *w > 0.0);
    metrics.content_height(text, width)
}

/// Approximate metrics: every display column advances `0.6 × size`, lines are
/// `1.2 × size` tall, and wrapping is greedy per character.
///
/// Heights are estimates only. A host that displays the text should implement
/// [`TextMetrics`] over its real text-layout facility instead; this type
/// exists for headless callers and tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct EstimatedMetrics;

const ADVANCE_RATIO: f64 = 0.6;
const LINE_HEIGHT_RATIO: f64 = 1.2;

impl EstimatedMetrics {
    fn char_width(c: char, size: f64) -> f64 {
        c.width().unwrap_or(0) as f64 * size * ADVANCE_RATIO
    }
}

/// A line being laid out.
#[derive(Default)]
struct Line {
    x: f64,
    height: f64,
    spacing: f64,
    started: bool,
}

impl Line {
    fn grow(&mut self, size: f64, spacing: f64) {
        self.height = self.height.max(size * LINE_HEIGHT_RATIO);
        self.spacing = self.spacing.max(spacing);
        self.started = true;
    }
}

impl TextMetrics for EstimatedMetrics {
    fn text_width(&self, text: &str, font: &Font) -> f64 {
        text.chars().map(|c| Self::char_width(c, font.size)).sum()
    }

    fn content_height(&self, text: &StyledText, width: Option<f64>) -> f64 {
        let limit = width.unwrap_or(f64::INFINITY);
        let mut finished: Vec<(f64, f64)> = Vec::new();
        let mut line = Line::default();

        for run in text.runs() {
            let size = run.attributes.font.as_ref().map_or(BASE_FONT_SIZE, |f| f.size);
            let style = run.attributes.paragraph_style.as_ref();
            let spacing = style.map_or(0.0, |s| s.line_spacing);
            let head_indent = style.map_or(0.0, |s| s.head_indent);

            for c in run.text.chars() {
                match c {
                    '\n' => {
                        line.grow(size, spacing);
                        finished.push((line.height, line.spacing));
                        line = Line::default();
                    }
                    '\t' => {
                        let next = style.and_then(|s| {
                            s.tab_stops
                                .iter()
                                .find(|t| t.location > line.x)
                                .map(|t| t.location)
                        });
                        line.x = next.unwrap_or(line.x + size * ADVANCE_RATIO * 4.0);
                        line.grow(size, spacing);
                    }
                    c => {
                        let advance = Self::char_width(c, size);
                        if line.x + advance > limit && line.x > head_indent {
                            line.grow(size, spacing);
                            finished.push((line.height, line.spacing));
                            line = Line {
                                x: head_indent,
                                ..Line::default()
                            };
                        }
                        line.x += advance;
                        line.grow(size, spacing);
                    }
                }
            }
        }
        if line.started {
            finished.push((line.height, line.spacing));
        }

        let count = finished.len();
        finished
            .iter()
            .enumerate()
            .map(|(i, (height, spacing))| if i + 1 < count { height + spacing } else { *height })
            .sum()
    }
}
