/// HTML wrapper tag for a block type. Unknown and empty types fall back to `p`.
pub fn get_block_tag(block_type: &str) -> &'static str {
    match block_type {
        "header-one" => "h1",
        "header-two" => "h2",
        "header-three" => "h3",
        "header-four" => "h4",
        "header-five" => "h5",
        "header-six" => "h6",
        "unordered-list-item" => "ul",
        "ordered-list-item" => "ol",
        "blockquote" => "blockquote",
        _ => "p",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers() {
        let types = [
            "header-one",
            "header-two",
            "header-three",
            "header-four",
            "header-five",
            "header-six",
        ];
        for (level, block_type) in types.iter().enumerate() {
            assert_eq!(get_block_tag(block_type), format!("h{}", level + 1));
        }
    }

    #[test]
    fn test_lists_and_quotes() {
        assert_eq!(get_block_tag("unordered-list-item"), "ul");
        assert_eq!(get_block_tag("ordered-list-item"), "ol");
        assert_eq!(get_block_tag("blockquote"), "blockquote");
    }

    #[test]
    fn test_fallback() {
        assert_eq!(get_block_tag("unstyled"), "p");
        assert_eq!(get_block_tag("atomic"), "p");
        assert_eq!(get_block_tag(""), "p");
    }
}
