//! Line rewrite rules for Zinc constructs
//!
//! Each rule is a pure function over a single line of text: it looks for a
//! construct by substring search (plus a token boundary check for most
//! rules) and, when found, rewrites the matched span into C++. Rules share
//! no state and each rule rewrites at most one occurrence per line.
//!
//! Known, intentional limits of this approach:
//! - a token at a valid boundary inside a string literal or comment still
//!   fires the rule
//! - nested or repeated constructs on one line are not supported
//! - nothing spans lines

pub mod counted_loop;
pub mod entry_point;
pub mod function_decl;
pub mod list_literal;
pub mod string_alias;

pub use counted_loop::rewrite_counted_loop;
pub use entry_point::rewrite_entry_point;
pub use function_decl::rewrite_function_decl;
pub use list_literal::rewrite_list_literal;
pub use string_alias::rewrite_string_alias;

/// Check whether a match at byte `pos` sits at a token boundary.
///
/// A construct keyword only counts when it starts the line or directly
/// follows a space, `;`, `}` or `{`. Anything else (letters, digits, `_`,
/// `:`, ...) means the match is part of a larger identifier and the rule
/// must not fire.
pub fn at_token_boundary(line: &str, pos: usize) -> bool {
    if pos == 0 {
        return true;
    }
    matches!(line.as_bytes()[pos - 1], b' ' | b';' | b'}' | b'{')
}

/// Apply every rewrite rule to one line, in the fixed order:
/// function declaration, entry point, string alias, counted loop, list
/// literal. Each rule sees the line as mutated by the previous one and
/// re-searches from scratch, so earlier rewrites shifting byte offsets is
/// harmless.
pub fn apply_rules(line: &str) -> String {
    let line = rewrite_function_decl(line);
    let line = rewrite_entry_point(&line);
    let line = rewrite_string_alias(&line);
    let line = rewrite_counted_loop(&line);
    rewrite_list_literal(&line)
}
