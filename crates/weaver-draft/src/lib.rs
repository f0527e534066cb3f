//! Weaver draft renderer
//!
//! Renders rich-text editor content (blocks with inline style and entity
//! ranges, plus a shared entity map) to HTML fragments.
//!
//! Each block is split into sections by entity, each entity section into
//! runs of equal color and font size, and each of those into runs of equal
//! bold, italic and underline. Markup is then assembled from the escaped
//! characters outwards.

mod block_renderer;
mod block_tag;
mod document;
mod error;
mod escape;
mod markup;
mod section;
mod styles;
mod types;

pub use block_renderer::get_block_markup;
pub use block_tag::get_block_tag;
pub use document::{draft_to_html, json_to_html};
pub use error::{DraftError, DraftResult};
pub use escape::render_text;
pub use markup::{
    add_entity_markup, add_inline_style_markup, add_style_property_markup, render_inline_section,
};
pub use section::{EntitySection, StyleSection, get_entity_sections, get_style_sections};
pub use styles::{
    InlineAttribute, InlineStyle, InlineStyleIndex, StyleValue, StyleValues, get_styles_at_offset,
    same_style_as_previous,
};
pub use types::{
    Block, Entity, EntityData, EntityKey, EntityKind, EntityMap, EntityRange, InlineStyleRange,
    RawDraftContent,
};
