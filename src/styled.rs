// The styled-text buffer: an ordered list of runs, each a span of text with
// one attribute set.
//
// Buffers are built bottom-up. Leaves produce a single run; containers
// concatenate their children's buffers and overlay attributes on top. Font
// overlays merge traits into each run's existing font; color, link, and
// strikethrough overlays replace what a descendant set.

use std::fmt;
use std::ops::Range;

use crate::style::{
    Attributes, Color, Font, FontTraits, LinkTarget, ParagraphStyle, StrikethroughStyle,
};

/// A contiguous span of text sharing one attribute set.
#[derive(Debug, Clone, PartialEq)]
pub struct Run {
    pub text: String,
    pub attributes: Attributes,
}

/// An attributed text buffer.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StyledText {
    runs: Vec<Run>,
}

impl StyledText {
    pub fn new() -> Self {
        Self::default()
    }

    /// A buffer holding one run. Empty text yields an empty buffer.
    pub fn from_run(text: impl Into<String>, attributes: Attributes) -> Self {
        let mut result = Self::new();
        result.push(text, attributes);
        result
    }

    /// The runs in document order.
    pub fn runs(&self) -> &[Run] {
        &self.runs
    }

    pub fn is_empty(&self) -> bool {
        self.runs.is_empty()
    }

    /// Length of the flattened string in bytes.
    pub fn len(&self) -> usize {
        self.runs.iter().map(|r| r.text.len()).sum()
    }

    /// The flattened string.
    pub fn as_string(&self) -> String {
        let mut out = String::with_capacity(self.len());
        for run in &self.runs {
            out.push_str(&run.text);
        }
        out
    }

    /// Byte ranges of the flattened string paired with their attributes.
    pub fn ranges(&self) -> impl Iterator<Item = (Range<usize>, &Attributes)> + '_ {
        let mut start = 0;
        self.runs.iter().map(move |run| {
            let range = start..start + run.text.len();
            start = range.end;
            (range, &run.attributes)
        })
    }

    /// Attributes of the run covering byte offset `index`.
    pub fn attributes_at(&self, index: usize) -> Option<&Attributes> {
        self.ranges()
            .find(|(range, _)| range.contains(&index))
            .map(|(_, attrs)| attrs)
    }

    /// Append a run, coalescing with the last run when attributes match.
    pub fn push(&mut self, text: impl Into<String>, attributes: Attributes) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        match self.runs.last_mut() {
            Some(last) if last.attributes == attributes => last.text.push_str(&text),
            _ => self.runs.push(Run { text, attributes }),
        }
    }

    /// Append another buffer.
    pub fn append(&mut self, other: StyledText) {
        for run in other.runs {
            self.push(run.text, run.attributes);
        }
    }

    /// Insert another buffer in front of this one.
    pub fn prepend(&mut self, mut prefix: StyledText) {
        let rest = std::mem::take(&mut self.runs);
        prefix.append(StyledText { runs: rest });
        *self = prefix;
    }

    /// Merge font traits into every run's font, optionally setting the size.
    /// Runs without a font are left alone.
    pub fn apply_font_traits(&mut self, traits: FontTraits, size: Option<f64>) {
        self.update(|attrs| {
            if let Some(font) = &attrs.font {
                attrs.font = Some(font.apply(traits, size));
            }
        });
    }

    pub fn set_foreground(&mut self, color: Color) {
        self.update(|attrs| attrs.foreground = Some(color));
    }

    pub fn set_link(&mut self, target: &LinkTarget) {
        self.update(|attrs| attrs.link = Some(target.clone()));
    }

    pub fn set_strikethrough(&mut self, style: StrikethroughStyle) {
        self.update(|attrs| attrs.strikethrough = Some(style));
    }

    /// Apply a container's paragraph style under whatever style runs carry.
    pub fn apply_paragraph_style(&mut self, style: &ParagraphStyle) {
        self.update(|attrs| match &mut attrs.paragraph_style {
            Some(existing) => existing.merge_outer(style),
            None => attrs.paragraph_style = Some(style.clone()),
        });
    }

    /// Set `font` on runs that have none.
    pub fn fill_font(&mut self, font: &Font) {
        self.update(|attrs| {
            if attrs.font.is_none() {
                attrs.font = Some(font.clone());
            }
        });
    }

    /// Tag runs that have no list depth yet.
    pub fn fill_list_depth(&mut self, depth: usize) {
        self.update(|attrs| {
            attrs.list_depth.get_or_insert(depth);
        });
    }

    /// Tag runs that have no quote depth yet.
    pub fn fill_quote_depth(&mut self, depth: usize) {
        self.update(|attrs| {
            attrs.quote_depth.get_or_insert(depth);
        });
    }

    /// Apply `f` to every run's attributes, then re-coalesce neighbours that
    /// became identical.
    fn update(&mut self, mut f: impl FnMut(&mut Attributes)) {
        for run in &mut self.runs {
            f(&mut run.attributes);
        }
        let runs = std::mem::take(&mut self.runs);
        for run in runs {
            self.push(run.text, run.attributes);
        }
    }
}

impl fmt::Display for StyledText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for run in &self.runs {
            f.write_str(&run.text)?;
        }
        Ok(())
    }
}

impl FromIterator<StyledText> for StyledText {
    fn from_iter<I: IntoIterator<Item = StyledText>>(iter: I) -> Self {
        let mut result = StyledText::new();
        for part in iter {
            result.append(part);
        }
        result
    }
}
