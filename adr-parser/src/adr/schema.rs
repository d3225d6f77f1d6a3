//! The allowed values a record is validated against.

/// Statuses accepted when no configuration says otherwise.
pub const DEFAULT_STATUSES: [&str; 4] = [
    "Approved",
    "Partially Implemented",
    "Implemented",
    "Rejected",
];

/// Immutable validation settings, passed explicitly to the validator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schema {
    statuses: Vec<String>,
}

impl Schema {
    pub fn new<I, S>(statuses: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Schema {
            statuses: statuses.into_iter().map(Into::into).collect(),
        }
    }

    /// Allowed statuses, in declaration order.
    pub fn statuses(&self) -> &[String] {
        &self.statuses
    }

    /// Exact, case-sensitive membership.
    pub fn allows_status(&self, status: &str) -> bool {
        self.statuses.iter().any(|s| s == status)
    }
}

impl Default for Schema {
    fn default() -> Self {
        Schema::new(DEFAULT_STATUSES)
    }
}
