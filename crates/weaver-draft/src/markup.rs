use std::fmt::Write;

use crate::escape::render_text;
use crate::section::StyleSection;
use crate::styles::{InlineAttribute, StyleValues};
use crate::types::{Entity, EntityKind};

/// Wrap `content` in the inline tag for `attribute`.
///
/// Only BOLD, ITALIC and UNDERLINE have tags; other attributes return the
/// content unchanged.
pub fn add_inline_style_markup(attribute: InlineAttribute, content: &str) -> String {
    match attribute {
        InlineAttribute::Bold => format!("<strong>{content}</strong>"),
        InlineAttribute::Italic => format!("<em>{content}</em>"),
        InlineAttribute::Underline => format!("<ins>{content}</ins>"),
        InlineAttribute::Color | InlineAttribute::FontSize => content.to_string(),
    }
}

/// Wrap `content` in a `<span style="...">` carrying the color and font
/// size of `styles`. Returns the content unchanged when neither is set.
pub fn add_style_property_markup(styles: &StyleValues, content: &str) -> String {
    if styles.color.is_none() && styles.font_size.is_none() {
        return content.to_string();
    }

    let mut html = String::with_capacity(content.len() + 48);
    html.push_str("<span style=\"");
    if let Some(color) = &styles.color {
        let color = color.strip_prefix("color-").unwrap_or(color.as_str());
        let _ = write!(html, "color: {color};");
    }
    if let Some(size) = &styles.font_size {
        let _ = write!(html, "font-size: {size};");
    }
    html.push_str("\">");
    html.push_str(content);
    html.push_str("</span>");
    html
}

/// Escape a BOLD/ITALIC/UNDERLINE run and wrap it in its inline tags.
///
/// Tags are applied in the fixed order of [`InlineAttribute::INLINE_TAGS`],
/// each one wrapping the previous, so BOLD ends up innermost.
pub fn render_inline_section(section: &StyleSection) -> String {
    InlineAttribute::INLINE_TAGS
        .iter()
        .filter(|attr| section.styles.has(**attr))
        .fold(render_text(&section.text), |text, attr| {
            add_inline_style_markup(*attr, &text)
        })
}

/// Wrap the rendered contents of an entity section.
///
/// Links wrap the content in an anchor. Images replace it with an `<img>`.
/// Any other entity type passes the content through.
pub fn add_entity_markup(entity: &Entity, content: &str) -> String {
    match entity.kind() {
        EntityKind::Link => {
            let url = entity.data.url.as_deref().unwrap_or_else(|| {
                tracing::warn!("LINK entity without url, rendering empty href");
                ""
            });
            format!("<a href=\"{url}\">{content}</a>")
        }
        EntityKind::Image => {
            let src = entity.data.src.as_deref().unwrap_or_else(|| {
                tracing::warn!("IMAGE entity without src, rendering empty src");
                ""
            });
            format!("<img src=\"{src}\" />")
        }
        EntityKind::Other => {
            tracing::debug!("Passing through entity of type {}", entity.entity_type);
            content.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn styles() -> StyleValues {
        StyleValues::default()
    }

    #[test]
    fn test_inline_tags() {
        assert_eq!(
            add_inline_style_markup(InlineAttribute::Bold, "x"),
            "<strong>x</strong>"
        );
        assert_eq!(add_inline_style_markup(InlineAttribute::Italic, "x"), "<em>x</em>");
        assert_eq!(
            add_inline_style_markup(InlineAttribute::Underline, "x"),
            "<ins>x</ins>"
        );
        assert_eq!(add_inline_style_markup(InlineAttribute::Color, "x"), "x");
        assert_eq!(add_inline_style_markup(InlineAttribute::FontSize, "x"), "x");
    }

    #[test]
    fn test_style_property_markup() {
        let color = StyleValues {
            color: Some("color-red".into()),
            ..styles()
        };
        assert_eq!(
            add_style_property_markup(&color, "x"),
            "<span style=\"color: red;\">x</span>"
        );

        let both = StyleValues {
            color: Some("color-rgb(0,0,0)".into()),
            font_size: Some("24".into()),
            ..styles()
        };
        assert_eq!(
            add_style_property_markup(&both, "x"),
            "<span style=\"color: rgb(0,0,0);font-size: 24;\">x</span>"
        );

        let size = StyleValues {
            font_size: Some("8".into()),
            ..styles()
        };
        assert_eq!(
            add_style_property_markup(&size, "x"),
            "<span style=\"font-size: 8;\">x</span>"
        );
    }

    #[test]
    fn test_style_property_markup_ignores_inline_flags() {
        let bold = StyleValues {
            bold: true,
            ..styles()
        };
        assert_eq!(add_style_property_markup(&bold, "x"), "x");
    }

    #[test]
    fn test_inline_section_nesting_order() {
        let section = StyleSection {
            start: 0,
            end: 2,
            styles: StyleValues {
                bold: true,
                italic: true,
                underline: true,
                ..styles()
            },
            text: vec!['a', '&'],
        };
        assert_eq!(
            render_inline_section(&section),
            "<ins><em><strong>a&amp;</strong></em></ins>"
        );
    }

    #[test]
    fn test_entity_markup() {
        assert_eq!(
            add_entity_markup(&Entity::link("https://example.com"), "here"),
            "<a href=\"https://example.com\">here</a>"
        );
        assert_eq!(
            add_entity_markup(&Entity::image("x.png"), "dropped"),
            "<img src=\"x.png\" />"
        );

        let mention = Entity {
            entity_type: "MENTION".into(),
            mutability: None,
            data: Default::default(),
        };
        assert_eq!(add_entity_markup(&mention, "@alice"), "@alice");
    }

    #[test]
    fn test_link_without_url() {
        let mut link = Entity::link("");
        link.data.url = None;
        assert_eq!(add_entity_markup(&link, "x"), "<a href=\"\">x</a>");
    }
}
