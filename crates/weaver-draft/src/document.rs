use crate::block_renderer::get_block_markup;
use crate::error::{DraftError, DraftResult};
use crate::types::RawDraftContent;

/// Render every block of `content` in order and concatenate the fragments.
///
/// Stops at the first block that fails, reporting its index.
#[tracing::instrument(skip_all, fields(blocks = content.blocks.len()))]
pub fn draft_to_html(content: &RawDraftContent) -> DraftResult<String> {
    let mut html = String::new();
    for (index, block) in content.blocks.iter().enumerate() {
        let markup =
            get_block_markup(block, &content.entity_map).map_err(|source| DraftError::Block {
                index,
                source: Box::new(source),
            })?;
        html.push_str(&markup);
    }
    Ok(html)
}

/// Parse the editor's JSON export and render it.
pub fn json_to_html(json: &str) -> DraftResult<String> {
    let content = RawDraftContent::from_json(json)?;
    draft_to_html(&content)
}
