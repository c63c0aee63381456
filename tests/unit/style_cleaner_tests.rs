
use declutter::cleaner::style_cleaner::{LIST_STYLE_TAG, STYLE_TAG};
use declutter::cleaner::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_child_style_folds_into_parent() {
        let mut content = concat!(
            r#"<office:automatic-styles><style:style style:name="P1" style:family="paragraph" style:parent-style-name="Standard"/></office:automatic-styles>"#,
            r#"<text:p text:style-name="P1">a</text:p>"#,
        )
        .to_string();

        assert_eq!(remove_empty_styles(&mut content), 1);
        assert_eq!(
            content,
            r#"<office:automatic-styles></office:automatic-styles><text:p text:style-name="Standard">a</text:p>"#
        );
    }

    #[test]
    fn test_empty_text_style_unwraps_spans() {
        let mut content = concat!(
            r#"<style:style style:name="T1" style:family="text"><style:text-properties/></style:style>"#,
            r#"<text:p text:style-name="P1">a<text:span text:style-name="T1">b<text:s/>c</text:span>d</text:p>"#,
        )
        .to_string();

        assert_eq!(remove_empty_styles(&mut content), 1);
        assert_eq!(content, r#"<text:p text:style-name="P1">ab<text:s/>cd</text:p>"#);
    }

    #[test]
    fn test_identical_list_styles_merge() {
        let mut content = concat!(
            r#"<text:list-style style:name="L1"><text:list-level-style-bullet text:level="1"/></text:list-style>"#,
            r#"<text:list-style style:name="L2"><text:list-level-style-bullet text:level="1"/></text:list-style>"#,
            r#"<text:list text:style-name="L1"/><text:list text:style-name="L2"/>"#,
        )
        .to_string();

        assert_eq!(merge_duplicate_styles(&mut content, LIST_STYLE_TAG), 1);
        assert!(!content.contains("L2"));
        assert_eq!(content.matches(r#"text:style-name="L1""#).count(), 2);
    }

    #[test]
    fn test_orphan_parent_goes_once_child_is_gone() {
        let mut content = concat!(
            r#"<style:style style:name="B" style:family="paragraph"><style:paragraph-properties fo:x="2"/></style:style>"#,
            r#"<style:style style:name="A" style:family="paragraph" style:parent-style-name="B"><style:paragraph-properties fo:x="1"/></style:style>"#,
            r#"<text:p>plain</text:p>"#,
        )
        .to_string();

        assert_eq!(remove_orphan_styles(&mut content, STYLE_TAG), 2);
        assert_eq!(content, "<text:p>plain</text:p>");
    }

    #[test]
    fn test_name_prefix_counts_as_use() {
        let mut content = concat!(
            r#"<style:style style:name="P1" style:family="paragraph"><style:paragraph-properties fo:x="1"/></style:style>"#,
            r#"<style:style style:name="P10" style:family="paragraph"><style:paragraph-properties fo:x="2"/></style:style>"#,
            r#"<text:p text:style-name="P10"/>"#,
        )
        .to_string();

        assert_eq!(remove_orphan_styles(&mut content, STYLE_TAG), 0);
    }
}
