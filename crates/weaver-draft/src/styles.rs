use smol_str::SmolStr;

use crate::error::{DraftError, DraftResult};
use crate::types::Block;

const COLOR_PREFIX: &str = "color-";
const FONTSIZE_PREFIX: &str = "fontsize-";

/// The closed set of inline attributes a style range can set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InlineAttribute {
    Bold,
    Italic,
    Underline,
    Color,
    FontSize,
}

impl InlineAttribute {
    /// Attributes rendered as nested inline tags, in application order.
    pub const INLINE_TAGS: [InlineAttribute; 3] = [Self::Bold, Self::Italic, Self::Underline];
    /// Attributes rendered as declarations of a single `style` attribute.
    pub const STYLE_PROPERTIES: [InlineAttribute; 2] = [Self::Color, Self::FontSize];
}

/// A parsed style token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineStyle {
    Bold,
    Italic,
    Underline,
    /// Keeps the full `color-xxx` token.
    Color(SmolStr),
    /// The font size without its `fontsize-` prefix.
    FontSize(SmolStr),
}

impl InlineStyle {
    pub fn parse(token: &str) -> Option<Self> {
        match token {
            "BOLD" => Some(Self::Bold),
            "ITALIC" => Some(Self::Italic),
            "UNDERLINE" => Some(Self::Underline),
            _ if token.starts_with(COLOR_PREFIX) => Some(Self::Color(SmolStr::new(token))),
            _ => token
                .strip_prefix(FONTSIZE_PREFIX)
                .map(|size| Self::FontSize(SmolStr::new(size))),
        }
    }
}

/// Value of one attribute at one offset, borrowed from the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleValue<'a> {
    Absent,
    Set,
    Text(&'a str),
}

impl<'a> StyleValue<'a> {
    fn flag(set: bool) -> Self {
        if set { Self::Set } else { Self::Absent }
    }

    fn text(value: &'a Option<SmolStr>) -> Self {
        match value {
            Some(v) => Self::Text(v.as_str()),
            None => Self::Absent,
        }
    }
}

/// Snapshot of every attribute at a single offset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleValues {
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub color: Option<SmolStr>,
    pub font_size: Option<SmolStr>,
}

impl StyleValues {
    pub fn has(&self, attribute: InlineAttribute) -> bool {
        match attribute {
            InlineAttribute::Bold => self.bold,
            InlineAttribute::Italic => self.italic,
            InlineAttribute::Underline => self.underline,
            InlineAttribute::Color => self.color.is_some(),
            InlineAttribute::FontSize => self.font_size.is_some(),
        }
    }
}

/// Per-character attribute arrays for one block, each `text.len()` long.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InlineStyleIndex {
    bold: Vec<bool>,
    italic: Vec<bool>,
    underline: Vec<bool>,
    color: Vec<Option<SmolStr>>,
    font_size: Vec<Option<SmolStr>>,
}

impl InlineStyleIndex {
    /// Expand the block's style ranges. Later ranges overwrite earlier ones
    /// for the same attribute; unknown style tokens are skipped.
    pub fn from_block(block: &Block) -> DraftResult<Self> {
        let len = block.char_len();
        let mut index = Self {
            bold: vec![false; len],
            italic: vec![false; len],
            underline: vec![false; len],
            color: vec![None; len],
            font_size: vec![None; len],
        };

        for range in &block.inline_style_ranges {
            let end = match range.offset.checked_add(range.length) {
                Some(end) if end <= len => end,
                _ => {
                    return Err(DraftError::StyleRangeOutOfBounds {
                        style: range.style.to_string(),
                        offset: range.offset,
                        length: range.length,
                        len,
                    });
                }
            };

            let Some(style) = InlineStyle::parse(&range.style) else {
                tracing::debug!("Ignoring unknown inline style: {}", range.style);
                continue;
            };

            let span = range.offset..end;
            match style {
                InlineStyle::Bold => index.bold[span].fill(true),
                InlineStyle::Italic => index.italic[span].fill(true),
                InlineStyle::Underline => index.underline[span].fill(true),
                InlineStyle::Color(color) => index.color[span].fill(Some(color)),
                InlineStyle::FontSize(size) => index.font_size[span].fill(Some(size)),
            }
        }

        Ok(index)
    }

    pub fn value(&self, attribute: InlineAttribute, offset: usize) -> StyleValue<'_> {
        match attribute {
            InlineAttribute::Bold => StyleValue::flag(self.bold[offset]),
            InlineAttribute::Italic => StyleValue::flag(self.italic[offset]),
            InlineAttribute::Underline => StyleValue::flag(self.underline[offset]),
            InlineAttribute::Color => StyleValue::text(&self.color[offset]),
            InlineAttribute::FontSize => StyleValue::text(&self.font_size[offset]),
        }
    }
}

pub fn get_styles_at_offset(index: &InlineStyleIndex, offset: usize) -> StyleValues {
    StyleValues {
        bold: index.bold[offset],
        italic: index.italic[offset],
        underline: index.underline[offset],
        color: index.color[offset].clone(),
        font_size: index.font_size[offset].clone(),
    }
}

/// Whether every listed attribute at `offset` matches the preceding offset.
pub fn same_style_as_previous(
    index: &InlineStyleIndex,
    attributes: &[InlineAttribute],
    offset: usize,
) -> bool {
    offset > 0
        && attributes
            .iter()
            .all(|&attr| index.value(attr, offset) == index.value(attr, offset - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tokens() {
        assert_eq!(InlineStyle::parse("BOLD"), Some(InlineStyle::Bold));
        assert_eq!(
            InlineStyle::parse("color-rgb(255,0,0)"),
            Some(InlineStyle::Color("color-rgb(255,0,0)".into()))
        );
        assert_eq!(
            InlineStyle::parse("fontsize-24"),
            Some(InlineStyle::FontSize("24".into()))
        );
        assert_eq!(InlineStyle::parse("STRIKETHROUGH"), None);
        assert_eq!(InlineStyle::parse("bold"), None);
    }

    #[test]
    fn test_index_values() {
        let block = Block::new("unstyled", "hello")
            .with_style(0, 2, "BOLD")
            .with_style(1, 3, "color-red")
            .with_style(4, 1, "fontsize-12");
        let index = InlineStyleIndex::from_block(&block).unwrap();

        assert_eq!(index.value(InlineAttribute::Bold, 1), StyleValue::Set);
        assert_eq!(index.value(InlineAttribute::Bold, 2), StyleValue::Absent);
        assert_eq!(index.value(InlineAttribute::Color, 0), StyleValue::Absent);
        assert_eq!(
            index.value(InlineAttribute::Color, 3),
            StyleValue::Text("color-red")
        );
        assert_eq!(
            index.value(InlineAttribute::FontSize, 4),
            StyleValue::Text("12")
        );
    }

    #[test]
    fn test_last_write_wins() {
        let block = Block::new("unstyled", "abcd")
            .with_style(0, 4, "color-red")
            .with_style(2, 2, "color-blue");
        let index = InlineStyleIndex::from_block(&block).unwrap();

        assert_eq!(get_styles_at_offset(&index, 1).color.as_deref(), Some("color-red"));
        assert_eq!(get_styles_at_offset(&index, 2).color.as_deref(), Some("color-blue"));
    }

    #[test]
    fn test_unknown_style_ignored() {
        let block = Block::new("unstyled", "ab").with_style(0, 2, "CODE");
        let index = InlineStyleIndex::from_block(&block).unwrap();
        assert_eq!(get_styles_at_offset(&index, 0), StyleValues::default());
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let block = Block::new("unstyled", "ab").with_style(1, 2, "BOLD");
        let err = InlineStyleIndex::from_block(&block).unwrap_err();
        assert!(matches!(
            err,
            DraftError::StyleRangeOutOfBounds {
                offset: 1,
                length: 2,
                len: 2,
                ..
            }
        ));
    }

    #[test]
    fn test_overflowing_length_rejected() {
        let block = Block::new("unstyled", "abc").with_style(1, usize::MAX, "BOLD");
        let err = InlineStyleIndex::from_block(&block).unwrap_err();
        assert!(matches!(
            err,
            DraftError::StyleRangeOutOfBounds {
                offset: 1,
                length: usize::MAX,
                len: 3,
                ..
            }
        ));
    }

    #[test]
    fn test_styles_at_offset_snapshot() {
        let block = Block::new("unstyled", "ab")
            .with_style(0, 1, "ITALIC")
            .with_style(0, 1, "UNDERLINE")
            .with_style(0, 2, "fontsize-9");
        let index = InlineStyleIndex::from_block(&block).unwrap();

        let styles = get_styles_at_offset(&index, 0);
        assert!(!styles.bold);
        assert!(styles.italic);
        assert!(styles.underline);
        assert_eq!(styles.font_size.as_deref(), Some("9"));
        assert!(styles.has(InlineAttribute::FontSize));
        assert!(!styles.has(InlineAttribute::Color));
    }

    #[test]
    fn test_same_style_as_previous() {
        let block = Block::new("unstyled", "abc")
            .with_style(0, 2, "BOLD")
            .with_style(1, 2, "color-red");
        let index = InlineStyleIndex::from_block(&block).unwrap();

        let tags = &InlineAttribute::INLINE_TAGS;
        let props = &InlineAttribute::STYLE_PROPERTIES;
        assert!(!same_style_as_previous(&index, tags, 0));
        assert!(same_style_as_previous(&index, tags, 1));
        assert!(!same_style_as_previous(&index, tags, 2));
        assert!(!same_style_as_previous(&index, props, 1));
        assert!(same_style_as_previous(&index, props, 2));
    }
}
