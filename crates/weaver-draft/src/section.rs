use std::ops::Range;

use crate::styles::{
    InlineAttribute, InlineStyleIndex, StyleValues, get_styles_at_offset, same_style_as_previous,
};
use crate::types::{EntityKey, EntityRange};

/// A run of characters sharing the same entity, or none.
///
/// `end` is inclusive. The trailing gap section ends at the block length
/// itself, one past the last character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EntitySection<'a> {
    pub start: usize,
    pub end: usize,
    pub entity_key: Option<&'a EntityKey>,
}

impl<'a> EntitySection<'a> {
    fn gap(start: usize, end: usize) -> Self {
        Self {
            start,
            end,
            entity_key: None,
        }
    }

    /// Half-open character range covered by this section, clamped to the text.
    pub fn char_range(&self, len: usize) -> Range<usize> {
        self.start.min(len)..(self.end + 1).min(len)
    }
}

/// A maximal run of characters sharing the selected attribute values.
///
/// `end` is exclusive. `styles` is the snapshot taken at `start`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleSection {
    pub start: usize,
    pub end: usize,
    pub styles: StyleValues,
    pub text: Vec<char>,
}

/// Cover `[0, block_length)` with entity sections, filling holes between
/// the given ranges with untagged sections.
///
/// Ranges must be disjoint, non-empty and sorted by offset.
pub fn get_entity_sections(ranges: &[EntityRange], block_length: usize) -> Vec<EntitySection<'_>> {
    let mut sections = Vec::with_capacity(ranges.len() * 2 + 1);
    let mut last_offset = 0;

    for range in ranges {
        assert!(
            range.length > 0,
            "zero-length entity range at offset {}",
            range.offset
        );
        let Some(end) = range.end() else {
            panic!("entity range at offset {} overflows", range.offset);
        };
        if range.offset > last_offset {
            sections.push(EntitySection::gap(last_offset, range.offset - 1));
        }
        sections.push(EntitySection {
            start: range.offset,
            end: end - 1,
            entity_key: Some(&range.key),
        });
        last_offset = end;
    }

    if last_offset < block_length {
        sections.push(EntitySection::gap(last_offset, block_length));
    } else if sections.is_empty() {
        sections.push(EntitySection::gap(0, 0));
    }

    tracing::trace!(count = sections.len(), block_length, "entity sections");
    sections
}

/// Split `range` into maximal runs where every attribute in `attributes`
/// keeps the value it had at the previous offset.
pub fn get_style_sections(
    text: &[char],
    index: &InlineStyleIndex,
    attributes: &[InlineAttribute],
    range: Range<usize>,
) -> Vec<StyleSection> {
    let mut sections: Vec<StyleSection> = Vec::new();
    if text.is_empty() {
        return sections;
    }

    let start = range.start;
    for offset in range {
        if offset != start && same_style_as_previous(index, attributes, offset) {
            if let Some(current) = sections.last_mut() {
                current.text.push(text[offset]);
                current.end = offset + 1;
                continue;
            }
        }
        sections.push(StyleSection {
            start: offset,
            end: offset + 1,
            styles: get_styles_at_offset(index, offset),
            text: vec![text[offset]],
        });
    }

    sections
}
