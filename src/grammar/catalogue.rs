use std::{collections::BTreeMap, sync::LazyLock};

use crate::{
    foundation::error::{LsysError, LsysResult},
    grammar::{command::is_structural, rule::RuleSet},
};

/// Built-in grammar: encoded rules plus default seed, depth and angle.
#[derive(Clone, Debug, PartialEq)]
pub struct GrammarDescription {
    pub name: &'static str,
    pub rules: &'static [&'static str],
    pub seed: &'static str,
    pub iterations: u32,
    pub turn_angle: f64,
}

impl GrammarDescription {
    /// Parse the rule encodings with the given turn angle (degrees).
    pub fn rule_set(&self, turn_angle: f64) -> LsysResult<RuleSet> {
        RuleSet::parse(self.rules, turn_angle)
    }

    /// Parse the rules and check that every referenced rule is defined,
    /// including the ones named by the seed.
    pub fn verify(&self) -> LsysResult<()> {
        let rules = self.rule_set(self.turn_angle)?;
        rules.validate_references()?;
        if let Some(name) = self
            .seed
            .chars()
            .find(|&c| !is_structural(c) && rules.get(c).is_none())
        {
            return Err(LsysError::config(format!(
                "grammar '{}' seed references undefined rule '{name}'",
                self.name
            )));
        }
        Ok(())
    }
}

static BUILTINS: &[GrammarDescription] = &[
    GrammarDescription {
        name: "hilbert",
        rules: &["f::20", "l:+rf-lfl-fr+:0", "r:-lf+rfr+fl-:0"],
        seed: "l",
        iterations: 5,
        turn_angle: 90.0,
    },
    GrammarDescription {
        name: "tree",
        rules: &["f:g[-f][+f][gf]:10", "g:gg:10"],
        seed: "f",
        iterations: 5,
        turn_angle: 45.0,
    },
    GrammarDescription {
        name: "dragon",
        rules: &["f::10", "x:x+yf+:0", "y:-fx-y:0"],
        seed: "fx",
        iterations: 10,
        turn_angle: 90.0,
    },
    GrammarDescription {
        name: "plant",
        rules: &["x:f+[[x]-x]-f[-fx]+x:0", "f:ff:10"],
        seed: "x",
        iterations: 5,
        turn_angle: 25.0,
    },
    GrammarDescription {
        name: "koch",
        rules: &["f:f+f--f+f:10"],
        seed: "f--f--f",
        iterations: 4,
        turn_angle: 60.0,
    },
    GrammarDescription {
        name: "sierpinski",
        rules: &["a:b-a-b:10", "b:a+b+a:10"],
        seed: "a",
        iterations: 6,
        turn_angle: 60.0,
    },
];

type Registry = BTreeMap<&'static str, &'static GrammarDescription>;

static CATALOGUE: LazyLock<Registry> = LazyLock::new(|| register(BUILTINS));

/// Build the registry, leaving out every description that fails [`GrammarDescription::verify`].
fn register(descriptions: &'static [GrammarDescription]) -> Registry {
    let mut registry = Registry::new();
    for desc in descriptions {
        match desc.verify() {
            Ok(()) => {
                registry.insert(desc.name, desc);
            }
            Err(err) => {
                tracing::error!(grammar = desc.name, error = %err, "built-in grammar rejected");
            }
        }
    }
    registry
}

/// Look up a built-in grammar by name.
pub fn get(name: &str) -> Option<&'static GrammarDescription> {
    CATALOGUE.get(name).copied()
}

/// Like [`get`], but an unknown name is a configuration error.
pub fn require(name: &str) -> LsysResult<&'static GrammarDescription> {
    get(name).ok_or_else(|| {
        LsysError::config(format!(
            "unknown grammar '{name}' (available: {})",
            names().collect::<Vec<_>>().join(", ")
        ))
    })
}

/// Names of all built-in grammars, sorted.
pub fn names() -> impl Iterator<Item = &'static str> {
    CATALOGUE.keys().copied()
}

#[cfg(test)]
#[path = "../../tests/unit/grammar/catalogue.rs"]
mod tests;
