use std::collections::HashSet;

use crate::MessageSchema;

/// Full names of the message types in one file that have at least one
/// directly constrained field.
///
/// Rebuilt per schema file; decides whether a singular message field
/// delegates to its type's own routine.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ConstrainedTypes(HashSet<String>);

impl ConstrainedTypes {
    /// Index `messages` and, recursively, all of their nested types.
    pub fn build(messages: &[MessageSchema]) -> Self {
        let mut names = HashSet::new();
        collect(messages, &mut names);
        Self(names)
    }

    pub fn contains(&self, full_name: &str) -> bool {
        self.0.contains(full_name)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn collect(messages: &[MessageSchema], names: &mut HashSet<String>) {
    for message in messages {
        if message.has_constrained_field() {
            names.insert(message.full_name.clone());
        }
        collect(&message.nested, names);
    }
}
