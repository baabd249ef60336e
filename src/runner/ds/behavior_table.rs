use crate::runner::plugin::types::Method;
use std::collections::HashMap;

/// Name -> method mapping shared by every instance of a class.
///
/// Entries are only ever added. There is no overwrite or removal API, so a
/// bound name keeps its first definition for the life of the table.
#[derive(Debug, Default)]
pub struct BehaviorTable {
    methods: HashMap<String, Method>,
}

impl BehaviorTable {
    pub fn new() -> Self {
        BehaviorTable {
            methods: HashMap::new(),
        }
    }

    /// Presence is key existence; every entry holds a real method.
    pub fn contains(&self, name: &str) -> bool {
        self.methods.contains_key(name)
    }

    pub fn get(&self, name: &str) -> Option<&Method> {
        self.methods.get(name)
    }

    /// Binds `method` under `name` if the name is free. Returns `false` and
    /// leaves the table untouched otherwise.
    pub fn insert_if_absent(&mut self, name: &str, method: Method) -> bool {
        if self.methods.contains_key(name) {
            return false;
        }
        self.methods.insert(name.to_string(), method);
        true
    }

    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.methods.keys().cloned().collect();
        names.sort();
        names
    }
}
