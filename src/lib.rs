//! Randsent generates random sentences from a probabilistic context-free
//! grammar.
//!
//! A grammar is a weighted rule file: each rule line holds a weight, a
//! left-hand-side symbol, and a space-delimited right-hand side. Sampling
//! starts from a symbol and repeatedly rewrites nonterminals, choosing
//! among a symbol's rules with probability proportional to their weights,
//! until only terminal text remains or the per-sentence expansion budget
//! runs out. The derivation can also be returned as a bracketed tree.
//!
//! # Example
//!
//! ```rust
//! use randsent::{Grammar, Sampler};
//!
//! let mut grammar = Grammar::new();
//! grammar.add_rule("ROOT", "NP VP", 1.0);
//! grammar.add_rule("NP", "John", 1.0);
//! grammar.add_rule("VP", "sleeps", 1.0);
//!
//! let mut sampler = Sampler::new(&grammar);
//! let sentence = sampler.sample("ROOT", 100, false).unwrap();
//! assert_eq!(sentence, "John sleeps ");
//!
//! let tree = sampler.sample("ROOT", 100, true).unwrap();
//! assert_eq!(tree, "(ROOT (NP John )(VP sleeps ))");
//! ```

pub mod format;
pub mod grammar;
pub mod sampler;
pub mod utils;

pub use grammar::{Expansion, Grammar};
pub use sampler::{ELLIPSIS, Sampler};
pub use utils::{GrammarError, Result};
