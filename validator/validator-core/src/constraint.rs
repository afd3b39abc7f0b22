use std::fmt::{Display, Formatter, Result};

/// Literal that marks a singular message field as required when used as the
/// not-equal bound.
pub const NIL_LITERAL: &str = "nil";

/// The four relational constraints, in the order their guards are emitted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Relation {
    LessThan,
    GreaterThan,
    Equal,
    NotEqual,
}

impl Relation {
    pub const ALL: [Relation; 4] = [
        Relation::LessThan,
        Relation::GreaterThan,
        Relation::Equal,
        Relation::NotEqual,
    ];

    /// Rust operator expressing the required relation.
    pub fn operator(self) -> &'static str {
        match self {
            Relation::LessThan => "<",
            Relation::GreaterThan => ">",
            Relation::Equal => "==",
            Relation::NotEqual => "!=",
        }
    }

    /// Phrase used in violation messages. It describes the offending side of
    /// the bound, so `lt` reads "be greater than".
    pub fn violation_phrase(self) -> &'static str {
        match self {
            Relation::LessThan => "be greater than",
            Relation::GreaterThan => "be less than",
            Relation::Equal => "be not equal",
            Relation::NotEqual => "be equal",
        }
    }

    /// Evaluate `lhs <op> rhs`.
    pub fn holds<T: PartialOrd>(self, lhs: &T, rhs: &T) -> bool {
        match self {
            Relation::LessThan => lhs < rhs,
            Relation::GreaterThan => lhs > rhs,
            Relation::Equal => lhs == rhs,
            Relation::NotEqual => lhs != rhs,
        }
    }
}

impl Display for Relation {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        f.write_str(self.operator())
    }
}

/// Constraint record attached to a field's options.
///
/// Literals are kept verbatim; they are spliced into generated code and only
/// checked by the compiler that builds it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct FieldConstraint {
    pub less_than: Option<String>,
    pub greater_than: Option<String>,
    /// Single literal, or a comma-separated alternative list for scalars.
    pub equal: Option<String>,
    /// Single literal, a comma-separated alternative list for scalars, or
    /// `nil` on singular message fields.
    pub not_equal: Option<String>,
}

impl FieldConstraint {
    pub fn less_than(mut self, literal: impl Into<String>) -> Self {
        self.less_than = Some(literal.into());
        self
    }

    pub fn greater_than(mut self, literal: impl Into<String>) -> Self {
        self.greater_than = Some(literal.into());
        self
    }

    pub fn equal(mut self, literal: impl Into<String>) -> Self {
        self.equal = Some(literal.into());
        self
    }

    pub fn not_equal(mut self, literal: impl Into<String>) -> Self {
        self.not_equal = Some(literal.into());
        self
    }

    pub fn get(&self, relation: Relation) -> Option<&str> {
        match relation {
            Relation::LessThan => self.less_than.as_deref(),
            Relation::GreaterThan => self.greater_than.as_deref(),
            Relation::Equal => self.equal.as_deref(),
            Relation::NotEqual => self.not_equal.as_deref(),
        }
    }

    /// Present bounds in guard order: lt, gt, eq, neq.
    pub fn relations(&self) -> impl Iterator<Item = (Relation, &str)> {
        Relation::ALL
            .into_iter()
            .filter_map(|relation| self.get(relation).map(|literal| (relation, literal)))
    }

    /// Whether the not-equal alternative set is exactly `{nil}`.
    pub fn requires_presence(&self) -> bool {
        self.not_equal
            .as_deref()
            .is_some_and(|literal| parse_alternatives(literal) == [NIL_LITERAL])
    }

    pub fn is_empty(&self) -> bool {
        self.relations().next().is_none()
    }
}

/// Split a comma-separated literal list into its alternatives.
///
/// Whitespace is removed first and empty segments are dropped, so
/// `"1, 2 ,3"` yields `["1", "2", "3"]`.
pub fn parse_alternatives(literal: &str) -> Vec<String> {
    let compact: String = literal.chars().filter(|c| !c.is_whitespace()).collect();
    compact
        .split(',')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}
