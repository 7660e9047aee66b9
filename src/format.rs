//! Text helpers for bracketed derivation trees.

/// Re-indent bracket-tree text for display, one constituent per line.
///
/// The input is the single-line bracket notation produced by sampling
/// with tree output; nesting depth becomes indentation. Terminal text
/// stays on the line of its parent constituent.
pub fn pretty(tree: &str) -> String {
    let mut out = String::new();
    let mut depth: usize = 0;

    for c in tree.chars() {
        match c {
            '(' => {
                if depth > 0 {
                    while out.ends_with(' ') {
                        out.pop();
                    }
                    out.push('\n');
                    out.push_str(&"  ".repeat(depth));
                }
                out.push('(');
                depth += 1;
            }
            ')' => {
                while out.ends_with(' ') {
                    out.pop();
                }
                out.push(')');
                depth = depth.saturating_sub(1);
            }
            other => out.push(other),
        }
    }
    out
}

/// The flat yield of a bracket tree: every bracket and the nonterminal
/// label after each opening bracket are dropped, leaving the terminal
/// tokens exactly as the flat sentence would have emitted them.
pub fn leaves(tree: &str) -> String {
    let mut out = String::new();
    let mut chars = tree.chars();

    while let Some(c) = chars.next() {
        match c {
            '(' => {
                // the label runs up to its trailing space
                for c in chars.by_ref() {
                    if c == ' ' {
                        break;
                    }
                }
            }
            ')' => {}
            other => out.push(other),
        }
    }
    out
}
