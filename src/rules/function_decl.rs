//! `fn` → `void ` function-declaration rewrite

use super::at_token_boundary;

/// Rewrite the first `fn` keyword on the line into `void `.
///
/// Only the two-character token is replaced; the rest of the line is kept.
/// The replacement carries its own trailing space, so `fn main()` becomes
/// `void  main()` with a doubled space. C++ does not care and neither do we.
pub fn rewrite_function_decl(line: &str) -> String {
    match line.find("fn") {
        Some(pos) if at_token_boundary(line, pos) => {
            format!("{}void {}", &line[..pos], &line[pos + 2..])
        }
        _ => line.to_string(),
    }
}
