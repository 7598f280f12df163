//! L-system grammars: command alphabet, production rules, expansion, and the
//! built-in catalogue.

pub mod catalogue;
pub mod command;
pub mod expand;
pub mod rule;
