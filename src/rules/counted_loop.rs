//! `loop(bound, var)` counted-loop rewrite

use super::at_token_boundary;

/// Rewrite a `loop(bound, var)` construct into a C++ counting `for` loop.
///
/// `loop(5, i)` becomes `for(int  i = 0;  i < 5;  i++)`: the variable name
/// is taken untrimmed between the comma and the next `)`, so the space after
/// the comma travels with it. The span from `loop` through the closing `)`
/// is replaced; text after the `)` stays.
///
/// Gaps kept on purpose:
/// - no comma between the parentheses → the line is left untouched, the
///   unrewritten `loop(` and all
/// - no closing `)` after the comma → the variable name and the replaced
///   span both run to the end of the line
/// - only the first `loop(` per line is rewritten; nesting is unsupported
pub fn rewrite_counted_loop(line: &str) -> String {
    let pos = match line.find("loop(") {
        Some(p) if at_token_boundary(line, p) => p,
        _ => return line.to_string(),
    };

    // First '(' at or after the match; with this pattern that is always the
    // one inside `loop(`.
    let open = match line[pos..].find('(') {
        Some(offset) => pos + offset,
        None => return line.to_string(),
    };

    let comma = match line[open..].find(',') {
        Some(offset) => open + offset,
        None => return line.to_string(),
    };
    let bound = &line[open + 1..comma];

    let (var, span_end) = match line[comma..].find(')') {
        Some(offset) => (&line[comma + 1..comma + offset], comma + offset + 1),
        None => (&line[comma + 1..], line.len()),
    };

    format!(
        "{}for(int {} = 0; {} < {}; {}++){}",
        &line[..pos],
        var,
        var,
        bound,
        var,
        &line[span_end..]
    )
}
