use super::*;

#[test]
fn truncate_lines_marks_cut_content() {
    let content = (1..=5).map(|n| n.to_string()).collect::<Vec<_>>().join("\n");
    let truncated = truncate_lines(&content, 3);
    assert_eq!(truncated, "1\n2\n3\n... (truncated)");
}

#[test]
fn truncate_lines_leaves_short_content_untouched() {
    let content = "1\n2";
    assert_eq!(truncate_lines(content, 5), "1\n2");
}

#[test]
fn line_snippet_expands_by_context_lines() {
    let content = "a\nb\nc\nd\ne";
    assert_eq!(line_snippet(content, 3, 1), "b\nc\nd");
}

#[test]
fn merge_line_ranges_combines_nearby_hits() {
    let ranges = merge_line_ranges(vec![10, 12, 50], 2, 100);
    assert_eq!(ranges, vec![(8, 14), (48, 52)]);
}

#[test]
fn merge_line_ranges_clamps_to_file_bounds() {
    let ranges = merge_line_ranges(vec![1, 100], 5, 100);
    assert_eq!(ranges, vec![(1, 6), (95, 100)]);
}
