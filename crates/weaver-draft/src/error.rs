use miette::Diagnostic;
use thiserror::Error;

use crate::types::EntityKey;

/// Errors raised for content that breaks the block model's contract.
///
/// Rendering never guesses at malformed input: ranges that overlap, run out
/// of order or past the text, and keys missing from the entity map are all
/// reported instead of producing wrong markup.
#[derive(Debug, Error, Diagnostic)]
pub enum DraftError {
    #[error("entity {key} is referenced by an entity range but missing from the entity map")]
    #[diagnostic(
        code(weaver_draft::missing_entity),
        help("every key used in entityRanges needs an entry in entityMap")
    )]
    MissingEntity { key: EntityKey },

    #[error(
        "entity range at offset {offset} starts before the previous range ends at {previous_end}"
    )]
    #[diagnostic(
        code(weaver_draft::unordered_entity_ranges),
        help("entity ranges must be disjoint and sorted by offset")
    )]
    UnorderedEntityRanges { offset: usize, previous_end: usize },

    #[error("entity range at offset {offset} has zero length")]
    #[diagnostic(code(weaver_draft::empty_entity_range))]
    EmptyEntityRange { offset: usize },

    #[error("entity range at offset {offset} with length {length} exceeds block length {len}")]
    #[diagnostic(code(weaver_draft::entity_range_out_of_bounds))]
    EntityRangeOutOfBounds {
        offset: usize,
        length: usize,
        len: usize,
    },

    #[error(
        "style range `{style}` at offset {offset} with length {length} exceeds block length {len}"
    )]
    #[diagnostic(code(weaver_draft::style_range_out_of_bounds))]
    StyleRangeOutOfBounds {
        style: String,
        offset: usize,
        length: usize,
        len: usize,
    },

    #[error("invalid editor content JSON: {0}")]
    #[diagnostic(code(weaver_draft::json))]
    Json(#[from] serde_json::Error),

    #[error("failed to render block {index}")]
    #[diagnostic(code(weaver_draft::block))]
    Block {
        index: usize,
        #[source]
        source: Box<DraftError>,
    },
}

pub type DraftResult<T> = Result<T, DraftError>;
