//! Unit tests for query suggestions

#[cfg(test)]
mod tests {
    use crate::suggest::{TagVocabulary, suggest, suggest_from};
    use crate::tags::Tag;
    use crate::testing::busy_journal;

    fn vocab() -> TagVocabulary {
        TagVocabulary::from_counts(vec![
            (Tag::new("breakout"), 9),
            (Tag::new("morning"), 7),
            (Tag::new("reversal"), 5),
            (Tag::new("afternoon"), 5),
            (Tag::new("gap_up"), 3),
            (Tag::new("gap_down"), 3),
            (Tag::new("scalp"), 1),
        ])
    }

    #[test]
    fn test_empty_partial_returns_top_tags() {
        assert_eq!(
            suggest_from(&vocab(), "", 5),
            vec!["#breakout", "#morning", "#afternoon", "#reversal", "#gap_down"]
        );
        assert_eq!(suggest_from(&vocab(), "   ", 2), vec!["#breakout", "#morning"]);
    }

    #[test]
    fn test_limit_zero_returns_nothing() {
        assert!(suggest_from(&vocab(), "", 0).is_empty());
        assert!(suggest_from(&vocab(), "gap", 0).is_empty());
    }

    #[test]
    fn test_limit_larger_than_vocabulary() {
        assert_eq!(suggest_from(&vocab(), "", 100).len(), 7);
    }

    #[test]
    fn test_after_operator_appends_top_tags() {
        assert_eq!(
            suggest_from(&vocab(), "#scalp AND ", 2),
            vec!["#scalp AND #breakout", "#scalp AND #morning"]
        );
    }

    #[test]
    fn test_after_operator_without_trailing_space() {
        assert_eq!(
            suggest_from(&vocab(), "#scalp or", 1),
            vec!["#scalp or #breakout"]
        );
        assert_eq!(suggest_from(&vocab(), "NOT", 1), vec!["NOT #breakout"]);
    }

    #[test]
    fn test_after_operator_inside_group() {
        assert_eq!(
            suggest_from(&vocab(), "#a AND (NOT ", 1),
            vec!["#a AND (NOT #breakout"]
        );
    }

    #[test]
    fn test_mid_query_completes_last_operand() {
        assert_eq!(
            suggest_from(&vocab(), "#breakout AND #ga", 5),
            vec!["#breakout AND #gap_down", "#breakout AND #gap_up"]
        );
    }

    #[test]
    fn test_mid_query_uses_last_operator() {
        assert_eq!(
            suggest_from(&vocab(), "#a OR #b AND NOT rev", 5),
            vec!["#a OR #b AND NOT #reversal"]
        );
    }

    #[test]
    fn test_mid_query_keeps_open_parenthesis() {
        assert_eq!(
            suggest_from(&vocab(), "#a AND (MOR", 5),
            vec!["#a AND (#morning"]
        );
        assert_eq!(
            suggest_from(&vocab(), "#a AND (", 1),
            vec!["#a AND (#breakout"]
        );
    }

    #[test]
    fn test_mid_query_keeps_closing_parenthesis() {
        assert_eq!(
            suggest_from(&vocab(), "(#a AND #br)", 5),
            vec!["(#a AND #breakout)"]
        );
        assert_eq!(
            suggest_from(&vocab(), "((#a OR (NOT sca)) ", 5),
            vec!["((#a OR (NOT #scalp)) "]
        );
    }

    #[test]
    fn test_prefix_is_case_insensitive_substring() {
        assert_eq!(
            suggest_from(&vocab(), "NOON", 5),
            vec!["#afternoon"]
        );
        assert_eq!(
            suggest_from(&vocab(), "#R", 5),
            vec!["#breakout", "#morning", "#afternoon", "#reversal"]
        );
    }

    #[test]
    fn test_prefix_without_matches() {
        assert!(suggest_from(&vocab(), "#zzz", 5).is_empty());
    }

    #[test]
    fn test_operator_like_tags_are_not_operators() {
        assert_eq!(suggest_from(&vocab(), "#band", 5), Vec::<String>::new());
        assert_eq!(suggest_from(&vocab(), "scal", 5), vec!["#scalp"]);
    }

    #[test]
    fn test_suggest_counts_records() {
        let recs = busy_journal();
        assert_eq!(
            suggest(&recs, "", 5),
            vec!["#breakout", "#morning", "#afternoon", "#reversal", "#gap_up"]
        );
        assert_eq!(suggest(&recs, "#breakout AND #rev", 5), vec!["#breakout AND #reversal"]);
    }

    #[test]
    fn test_suggest_handles_garbage() {
        let recs = busy_journal();
        for partial in [")(", "AND AND", "\u{0}\u{7f}", "#", "((((", "é AND ü"] {
            let suggestions = suggest(&recs, partial, 3);
            assert!(suggestions.len() <= 3, "{partial:?}: {suggestions:?}");
        }
        // Nothing survives normalization, so every tag contains the prefix.
        assert_eq!(
            suggest(&recs, "é AND ü", 2),
            vec!["é AND #breakout", "é AND #morning"]
        );
        assert_eq!(suggest(&recs, ")(", 1), vec!["#breakout"]);
    }
}
