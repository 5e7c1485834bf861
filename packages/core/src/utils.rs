// ABOUTME: Small text and list helpers shared by the record and the engines
// ABOUTME: Length counting, line counting, and multi-select membership checks

/// Length in characters, not bytes
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Count of lines that contain something other than whitespace
pub fn non_empty_lines(value: &str) -> usize {
    value.lines().filter(|line| !line.trim().is_empty()).count()
}

/// Exact membership test for a multi-select answer
pub fn contains_value(values: &[String], needle: &str) -> bool {
    values.iter().any(|v| v == needle)
}

/// Case-insensitive substring test across a multi-select answer
pub fn any_contains_ignore_case(values: &[String], keyword: &str) -> bool {
    let keyword = keyword.to_lowercase();
    values.iter().any(|v| v.to_lowercase().contains(&keyword))
}
