//! `main()` entry-point rewrite

use super::at_token_boundary;

/// Insert `int ` in front of the first `main()` on the line.
///
/// Pure insertion: none of the matched text is consumed, so `main(){`
/// becomes `int main(){`. `main` with parameters is not a Zinc entry point
/// and is left alone.
pub fn rewrite_entry_point(line: &str) -> String {
    match line.find("main()") {
        Some(pos) if at_token_boundary(line, pos) => {
            format!("{}int {}", &line[..pos], &line[pos..])
        }
        _ => line.to_string(),
    }
}
