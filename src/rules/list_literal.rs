//! `list name[a, b, c]` inline-list rewrite

/// Rewrite an inline list declaration into a fixed-size C++ string array.
///
/// `list nums[1, 2, 3]` becomes `std::string nums[3] = {1, 2, 3};`. Unlike
/// the other rules this one has no token boundary check; `list ` (with
/// trailing space) is matched anywhere in the line.
///
/// Elements are split on the literal two-byte delimiter `", "` — a comma
/// without a following space does not separate elements. The ENTIRE line is
/// replaced by the array declaration, so any other text on it (a trailing
/// semicolon, an inline comment) is discarded. That destructive replace is
/// part of the contract, not an accident to patch over.
pub fn rewrite_list_literal(line: &str) -> String {
    let pos = match line.find("list ") {
        Some(p) => p,
        None => return line.to_string(),
    };

    let name_start = pos + 5;
    let name_end = match line[name_start..].find('[') {
        Some(offset) => name_start + offset,
        None => return line.to_string(),
    };
    let name = &line[name_start..name_end];

    // First '[' in the whole line; coincides with the one above for
    // well-formed input.
    let open = match line.find('[') {
        Some(p) => p,
        None => return line.to_string(),
    };
    let close = match line[open..].find(']') {
        Some(offset) => open + offset,
        None => return line.to_string(),
    };
    let contents = &line[open + 1..close];

    let items: Vec<&str> = contents.split(", ").collect();

    format!("std::string {}[{}] = {{{}}};", name, items.len(), items.join(", "))
}
