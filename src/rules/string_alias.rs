//! `string` → `std::string` type-alias rewrite

use super::at_token_boundary;

/// Replace the first bare `string` type name with `std::string`.
///
/// Exactly the six matched bytes are replaced, first occurrence only. A
/// `string` embedded in a longer identifier (`mystring`) or already
/// qualified (`std::string`, previous byte `:`) fails the boundary check.
pub fn rewrite_string_alias(line: &str) -> String {
    match line.find("string") {
        Some(pos) if at_token_boundary(line, pos) => {
            format!("{}std::string{}", &line[..pos], &line[pos + 6..])
        }
        _ => line.to_string(),
    }
}
