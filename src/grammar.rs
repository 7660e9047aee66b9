use std::collections::HashMap;
use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use regex::Regex;

use crate::utils::{GrammarError, Result};

/// One weighted right-hand side of a grammar rule.
#[derive(Debug, Clone, PartialEq)]
pub struct Expansion {
    /// The RHS split into whitespace-delimited symbols. May be empty,
    /// in which case the expansion produces nothing.
    pub tokens: Vec<String>,
    /// Relative selection weight. Zero means the entry is never chosen.
    pub weight: f64,
}

impl Expansion {
    /// The RHS joined back into rule-file form.
    pub fn text(&self) -> String {
        self.tokens.join(" ")
    }
}

/// A probabilistic context-free grammar: a mapping from each left-hand-side
/// symbol to its weighted expansions, in rule-file order.
///
/// A symbol is a nonterminal iff it appears as a key here; anything else is
/// a terminal and is emitted verbatim during sampling. The table is built
/// once (from a file, text, or [`Grammar::add_rule`] calls) and read-only
/// afterwards, so any number of samplers can borrow it.
#[derive(Debug, Clone, Default)]
pub struct Grammar {
    rules: HashMap<String, Vec<Expansion>>,
}

impl Grammar {
    /// Create a new empty grammar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a grammar from a rule file.
    ///
    /// Each rule line holds three tab-separated fields: a non-negative
    /// weight, the LHS symbol, and the space-delimited RHS. A line is a
    /// rule line iff it starts with a digit; every other line (blank,
    /// comment, header) is ignored. Within the RHS, a run of two or more
    /// spaces introduces a trailing comment which is discarded.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| GrammarError::FileNotFound {
            path: path.to_path_buf(),
            source,
        })?;
        let reader = io::BufReader::new(file);

        let comment_regex = Regex::new(r" {2}.*").unwrap();
        let mut grammar = Grammar::new();
        for (idx, line) in reader.lines().enumerate() {
            let line = line.map_err(GrammarError::Io)?;
            grammar.parse_line(&line, idx + 1, &comment_regex)?;
        }
        Ok(grammar)
    }

    /// Parse a grammar from in-memory text, with the same line semantics
    /// as [`Grammar::from_file`].
    pub fn from_text(text: &str) -> Result<Self> {
        let comment_regex = Regex::new(r" {2}.*").unwrap();
        let mut grammar = Grammar::new();
        for (idx, line) in text.lines().enumerate() {
            grammar.parse_line(line, idx + 1, &comment_regex)?;
        }
        Ok(grammar)
    }

    /// Add a rule programmatically. `rhs` is a space-delimited symbol
    /// sequence exactly as it would appear in a rule file; an empty `rhs`
    /// is legal and expands to nothing.
    ///
    /// Repeated `(lhs, rhs)` pairs coexist as separate entries, so their
    /// probability mass adds up.
    pub fn add_rule(&mut self, lhs: &str, rhs: &str, weight: f64) {
        let tokens = rhs.split_whitespace().map(str::to_owned).collect();
        self.rules
            .entry(lhs.to_string())
            .or_default()
            .push(Expansion { tokens, weight });
    }

    fn parse_line(&mut self, line: &str, lineno: usize, comment_regex: &Regex) -> Result<()> {
        if !line.chars().next().is_some_and(|c| c.is_ascii_digit()) {
            return Ok(());
        }

        let fields: Vec<&str> = line.split('\t').collect();
        if fields.len() != 3 {
            return Err(GrammarError::MalformedRule {
                line: lineno,
                reason: format!(
                    "expected 3 tab-separated fields (weight, lhs, rhs), found {}",
                    fields.len()
                ),
            });
        }

        let weight: f64 = fields[0]
            .trim()
            .parse()
            .map_err(|_| GrammarError::MalformedRule {
                line: lineno,
                reason: format!("weight `{}` is not a number", fields[0]),
            })?;
        if weight < 0.0 || !weight.is_finite() {
            return Err(GrammarError::MalformedRule {
                line: lineno,
                reason: format!("weight `{}` must be finite and non-negative", fields[0]),
            });
        }

        let rhs = comment_regex.replace(fields[2], "");
        self.add_rule(fields[1], &rhs, weight);
        Ok(())
    }

    /// The expansions for `symbol`, in rule-file order, or `None` if
    /// `symbol` is a terminal.
    pub fn expansions(&self, symbol: &str) -> Option<&[Expansion]> {
        self.rules.get(symbol).map(Vec::as_slice)
    }

    /// True if at least one rule rewrites `symbol`.
    pub fn is_nonterminal(&self, symbol: &str) -> bool {
        self.rules.contains_key(symbol)
    }

    /// Number of distinct left-hand-side symbols.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_lines_start_with_a_digit() {
        let grammar = Grammar::from_text(
            "# comment line\n\
             \n\
             1\tROOT\tNP VP\n\
             ROOT is also mentioned here but this line is ignored\n\
             0.5\tNP\tJohn\n",
        )
        .unwrap();

        assert_eq!(grammar.len(), 2);
        assert!(grammar.is_nonterminal("ROOT"));
        assert!(grammar.is_nonterminal("NP"));
        assert!(!grammar.is_nonterminal("VP"));
    }

    #[test]
    fn rhs_comment_is_stripped() {
        let grammar = Grammar::from_text("1\tS\tNP VP  # a clause\n").unwrap();
        let expansions = grammar.expansions("S").unwrap();

        assert_eq!(expansions.len(), 1);
        assert_eq!(expansions[0].tokens, vec!["NP", "VP"]);
        assert_eq!(expansions[0].weight, 1.0);
    }

    #[test]
    fn rhs_that_is_only_a_comment_is_an_empty_expansion() {
        let grammar = Grammar::from_text("1\tS\t  nothing to see\n").unwrap();
        let expansions = grammar.expansions("S").unwrap();

        assert_eq!(expansions.len(), 1);
        assert!(expansions[0].tokens.is_empty());
    }

    #[test]
    fn duplicate_rules_keep_separate_entries() {
        let grammar = Grammar::from_text("1\tA\tx\n2\tA\tx\n").unwrap();
        let expansions = grammar.expansions("A").unwrap();

        assert_eq!(expansions.len(), 2);
        assert_eq!(expansions[0].weight, 1.0);
        assert_eq!(expansions[1].weight, 2.0);
    }

    #[test]
    fn expansion_order_is_preserved() {
        let grammar = Grammar::from_text("1\tA\tx\n3\tA\ty\n2\tA\tz\n").unwrap();
        let texts: Vec<String> = grammar
            .expansions("A")
            .unwrap()
            .iter()
            .map(Expansion::text)
            .collect();

        assert_eq!(texts, vec!["x", "y", "z"]);
    }

    #[test]
    fn missing_field_is_rejected() {
        let err = Grammar::from_text("1\tROOT\n").unwrap_err();
        match err {
            GrammarError::MalformedRule { line, .. } => assert_eq!(line, 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_numeric_weight_is_rejected() {
        let err = Grammar::from_text("1\tA\tx\n2x\tB\ty\n").unwrap_err();
        match err {
            GrammarError::MalformedRule { line, reason } => {
                assert_eq!(line, 2);
                assert!(reason.contains("not a number"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn non_finite_weight_is_rejected() {
        let err = Grammar::from_text("9e999\tA\tx\n").unwrap_err();
        match err {
            GrammarError::MalformedRule { line, reason } => {
                assert_eq!(line, 1);
                assert!(reason.contains("finite"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn padded_weight_field_still_parses() {
        let grammar = Grammar::from_text("3 \tA\tx\n").unwrap();
        assert_eq!(grammar.expansions("A").unwrap()[0].weight, 3.0);
    }

    #[test]
    fn missing_file_is_reported_with_path() {
        let err = Grammar::from_file("no/such/grammar.gr").unwrap_err();
        match err {
            GrammarError::FileNotFound { path, .. } => {
                assert_eq!(path.to_str(), Some("no/such/grammar.gr"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn add_rule_builds_the_same_table_as_loading() {
        let mut built = Grammar::new();
        built.add_rule("ROOT", "NP VP", 1.0);
        built.add_rule("NP", "John", 1.0);

        let loaded = Grammar::from_text("1\tROOT\tNP VP\n1\tNP\tJohn\n").unwrap();

        assert_eq!(built.expansions("ROOT"), loaded.expansions("ROOT"));
        assert_eq!(built.expansions("NP"), loaded.expansions("NP"));
    }
}
