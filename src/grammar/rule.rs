use std::collections::BTreeMap;

use crate::{
    foundation::error::{LsysError, LsysResult},
    grammar::command::{Command, Symbol, is_structural, parse_symbols},
};

/// One named production: `<name>:<body>:<baseDistance>`.
#[derive(Clone, Debug, PartialEq)]
pub struct ProductionRule {
    pub name: Symbol,
    pub body: Vec<Command>,
    pub base_distance: f64,
    /// Set iff `body` is empty; the rule then always contracts to its base move.
    pub always_base: bool,
    base_command: Command,
}

impl ProductionRule {
    pub fn parse(encoding: &str, turn_angle: f64) -> LsysResult<Self> {
        let parts: Vec<&str> = encoding.split(':').collect();
        let [name, body, distance] = parts.as_slice() else {
            return Err(LsysError::config(format!(
                "rule '{encoding}' must have the form <name>:<body>:<baseDistance>"
            )));
        };

        let mut chars = name.chars();
        let (Some(name), None) = (chars.next(), chars.next()) else {
            return Err(LsysError::config(format!(
                "rule name '{name}' must be exactly one character"
            )));
        };
        if is_structural(name) {
            return Err(LsysError::config(format!(
                "rule name '{name}' collides with a structural symbol"
            )));
        }

        let base_distance = distance.parse::<i32>().map_err(|e| {
            LsysError::config(format!(
                "rule '{name}' base distance '{distance}' is not an integer: {e}"
            ))
        })?;

        let body = parse_symbols(body, turn_angle);
        let base_distance = f64::from(base_distance);
        Ok(Self {
            name,
            always_base: body.is_empty(),
            body,
            base_distance,
            base_command: Command::Move(base_distance),
        })
    }

    /// Substitution for this rule at the given remaining depth.
    pub fn resolve(&self, depth: u32) -> &[Command] {
        if depth == 0 || self.always_base {
            std::slice::from_ref(&self.base_command)
        } else {
            &self.body
        }
    }
}

/// Rules of one grammar, keyed by name.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RuleSet {
    rules: BTreeMap<Symbol, ProductionRule>,
}

impl RuleSet {
    pub fn parse<S: AsRef<str>>(encodings: &[S], turn_angle: f64) -> LsysResult<Self> {
        let mut set = Self::default();
        for encoding in encodings {
            set.insert(ProductionRule::parse(encoding.as_ref(), turn_angle)?)?;
        }
        Ok(set)
    }

    pub fn insert(&mut self, rule: ProductionRule) -> LsysResult<()> {
        if self.rules.contains_key(&rule.name) {
            return Err(LsysError::config(format!(
                "rule '{}' is defined more than once",
                rule.name
            )));
        }
        self.rules.insert(rule.name, rule);
        Ok(())
    }

    pub fn get(&self, name: Symbol) -> Option<&ProductionRule> {
        self.rules.get(&name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Check that every rule name referenced by a body is defined.
    pub fn validate_references(&self) -> LsysResult<()> {
        for rule in self.rules.values() {
            for cmd in &rule.body {
                if let Command::Expand(name) = cmd
                    && !self.rules.contains_key(name)
                {
                    return Err(LsysError::config(format!(
                        "rule '{}' references undefined rule '{name}'",
                        rule.name
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/grammar/rule.rs"]
mod tests;
