use std::fmt::Write;

use crate::block_tag::get_block_tag;
use crate::error::{DraftError, DraftResult};
use crate::markup::{add_entity_markup, add_style_property_markup, render_inline_section};
use crate::section::{EntitySection, get_entity_sections, get_style_sections};
use crate::styles::{InlineAttribute, InlineStyleIndex};
use crate::types::{Block, Entity, EntityKey, EntityMap};

/// Render one block to a self-contained HTML fragment ending in `\n`.
///
/// A block with no text but at least one entity range is an atomic entity
/// block: only its first entity is rendered, with empty content.
pub fn get_block_markup(block: &Block, entity_map: &EntityMap) -> DraftResult<String> {
    let tag = get_block_tag(&block.block_type);
    let mut html = String::new();
    let _ = write!(html, "<{tag}>");

    if block.text.is_empty() && !block.entity_ranges.is_empty() {
        let entity = lookup_entity(entity_map, &block.entity_ranges[0].key)?;
        html.push_str(&add_entity_markup(entity, ""));
    } else {
        render_block_contents(&mut html, block, entity_map)?;
    }

    let _ = writeln!(html, "</{tag}>");
    Ok(html)
}

fn render_block_contents(
    html: &mut String,
    block: &Block,
    entity_map: &EntityMap,
) -> DraftResult<()> {
    let text: Vec<char> = block.text.chars().collect();
    validate_entity_ranges(block, text.len(), entity_map)?;
    let index = InlineStyleIndex::from_block(block)?;

    for section in get_entity_sections(&block.entity_ranges, text.len()) {
        let contents = render_entity_section(&text, &index, &section);
        match section.entity_key {
            Some(key) => {
                let entity = lookup_entity(entity_map, key)?;
                html.push_str(&add_entity_markup(entity, &contents));
            }
            None => html.push_str(&contents),
        }
    }

    Ok(())
}

/// Group the section by color and font size, then each group by the inline
/// tag attributes, and assemble the markup from the inside out.
fn render_entity_section(
    text: &[char],
    index: &InlineStyleIndex,
    section: &EntitySection<'_>,
) -> String {
    let mut html = String::new();

    let range = section.char_range(text.len());
    for property_section in
        get_style_sections(text, index, &InlineAttribute::STYLE_PROPERTIES, range)
    {
        let inner: String = get_style_sections(
            text,
            index,
            &InlineAttribute::INLINE_TAGS,
            property_section.start..property_section.end,
        )
        .iter()
        .map(render_inline_section)
        .collect();

        html.push_str(&add_style_property_markup(&property_section.styles, &inner));
    }

    html
}

fn lookup_entity<'m>(entity_map: &'m EntityMap, key: &EntityKey) -> DraftResult<&'m Entity> {
    entity_map
        .get(key)
        .ok_or_else(|| DraftError::MissingEntity { key: key.clone() })
}

fn validate_entity_ranges(block: &Block, len: usize, entity_map: &EntityMap) -> DraftResult<()> {
    let mut previous_end = 0;

    for range in &block.entity_ranges {
        if range.length == 0 {
            return Err(DraftError::EmptyEntityRange {
                offset: range.offset,
            });
        }
        if range.offset < previous_end {
            return Err(DraftError::UnorderedEntityRanges {
                offset: range.offset,
                previous_end,
            });
        }
        let end = match range.end() {
            Some(end) if end <= len => end,
            _ => {
                return Err(DraftError::EntityRangeOutOfBounds {
                    offset: range.offset,
                    length: range.length,
                    len,
                });
            }
        };
        lookup_entity(entity_map, &range.key)?;
        previous_end = end;
    }

    Ok(())
}
