use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::grammar::Grammar;
use crate::utils::{GrammarError, Result};

/// Placeholder emitted in place of a subtree once the expansion budget
/// is used up.
pub const ELLIPSIS: &str = "... ";

/// Draws random sentences (or bracketed derivation trees) from a
/// [`Grammar`] by weighted-random recursive expansion.
///
/// Each sampler owns its random source, so samplers never interfere with
/// one another; [`Sampler::seeded`] makes the output reproducible. The
/// expansion budget is local to every [`Sampler::sample`] call: sequential
/// calls on the same sampler start from a fresh budget.
pub struct Sampler<'a> {
    grammar: &'a Grammar,
    rng: StdRng,
}

impl<'a> Sampler<'a> {
    /// A sampler seeded from OS entropy.
    pub fn new(grammar: &'a Grammar) -> Self {
        Self {
            grammar,
            rng: StdRng::from_entropy(),
        }
    }

    /// A sampler with a fixed seed, for reproducible output.
    pub fn seeded(grammar: &'a Grammar, seed: u64) -> Self {
        Self {
            grammar,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Expand `start_symbol` into a sentence of space-terminated tokens.
    ///
    /// At most `max_expansions` nonterminals are expanded; past that,
    /// would-be subtrees degrade to the [`ELLIPSIS`] placeholder and the
    /// call is guaranteed to terminate even on cyclic grammars. With
    /// `want_tree` the sentence is wrapped in bracket notation recording
    /// the derivation: one `(symbol ...)` group per expanded nonterminal.
    ///
    /// A symbol with no rules is a terminal and is emitted verbatim; this
    /// includes an unknown `start_symbol`, which comes back unchanged.
    pub fn sample(
        &mut self,
        start_symbol: &str,
        max_expansions: u32,
        want_tree: bool,
    ) -> Result<String> {
        let mut budget = i64::from(max_expansions);
        let mut out = String::new();
        self.expand(start_symbol, want_tree, &mut budget, &mut out)?;
        Ok(out)
    }

    fn expand(
        &mut self,
        symbol: &str,
        want_tree: bool,
        budget: &mut i64,
        out: &mut String,
    ) -> Result<()> {
        // Out of budget: anything that still looks expandable collapses
        // to the placeholder. Uppercase-looking is the nonterminal test
        // here, so an exhausted budget swallows uppercase terminals too.
        if *budget <= 0 && has_uppercase(symbol) {
            out.push_str(ELLIPSIS);
            return Ok(());
        }

        let grammar = self.grammar;
        let Some(expansions) = grammar.expansions(symbol) else {
            // Terminal: emitted verbatim, costs nothing.
            out.push_str(symbol);
            out.push(' ');
            return Ok(());
        };

        // One unit per expanded nonterminal, however long the chosen RHS.
        // Goes negative when a lowercase rule key is expanded at zero.
        *budget -= 1;

        if want_tree {
            out.push('(');
            out.push_str(symbol);
            out.push(' ');
        }

        let chosen = expansions
            .choose_weighted(&mut self.rng, |e| e.weight)
            .map_err(|_| GrammarError::NoViableExpansion(symbol.to_string()))?;

        if chosen.tokens.iter().any(|t| has_uppercase(t)) {
            for token in &chosen.tokens {
                self.expand(token, want_tree, budget, out)?;
            }
        } else if !chosen.tokens.is_empty() {
            // Purely lowercase RHS, possibly multi-word: emitted whole,
            // without looking any of its words up in the rule table.
            out.push_str(&chosen.text());
            out.push(' ');
        }

        if want_tree {
            out.push(')');
        }
        Ok(())
    }
}

fn has_uppercase(symbol: &str) -> bool {
    symbol.chars().any(char::is_uppercase)
}
