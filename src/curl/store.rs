use std::collections::HashMap;

/// Key under which arguments without a flag are collected, in order.
pub const POSITIONAL: &str = "_";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlagValue {
    Boolean,
    /// One entry per occurrence on the command line.
    ValueList(Vec<String>),
}

impl FlagValue {
    pub fn values(&self) -> &[String] {
        match self {
            FlagValue::Boolean => &[],
            FlagValue::ValueList(values) => values,
        }
    }
}

/// Flags collected from one command line, keyed by name without dashes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FlagStore {
    flags: HashMap<String, FlagValue>,
}

impl FlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_boolean(&mut self, name: &str) {
        self.flags.insert(name.into(), FlagValue::Boolean);
    }

    /// Appends `value` to the list for `name`, creating the list on first use.
    ///
    /// A flag that was recorded as boolean keeps that value.
    pub fn push_value(&mut self, name: &str, value: String) {
        match self
            .flags
            .entry(name.into())
            .or_insert_with(|| FlagValue::ValueList(Vec::new()))
        {
            FlagValue::ValueList(values) => values.push(value),
            FlagValue::Boolean => {}
        }
    }

    pub fn push_positional(&mut self, value: String) {
        self.push_value(POSITIONAL, value);
    }

    pub fn get(&self, name: &str) -> Option<&FlagValue> {
        self.flags.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.flags.contains_key(name)
    }

    /// Values recorded for `name`; empty when absent or boolean.
    pub fn values(&self, name: &str) -> &[String] {
        self.get(name).map(FlagValue::values).unwrap_or_default()
    }

    pub fn first(&self, name: &str) -> Option<&str> {
        self.values(name).first().map(String::as_str)
    }

    pub fn last(&self, name: &str) -> Option<&str> {
        self.values(name).last().map(String::as_str)
    }

    pub fn positionals(&self) -> &[String] {
        self.values(POSITIONAL)
    }

    pub fn len(&self) -> usize {
        self.flags.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }
}
