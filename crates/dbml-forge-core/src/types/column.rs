use std::fmt;

use serde::{Deserialize, Serialize};

/// A single column definition.
///
/// `default` holds the raw default expression exactly as written after the
/// `default` keyword, quotes included. `constraints` holds modifier text the
/// parser did not recognize, kept verbatim so it can be re-emitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub column_type: String,
    #[serde(default)]
    pub not_null: bool,
    #[serde(default)]
    pub primary_key: bool,
    #[serde(default)]
    pub unique: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<String>,
}

impl Column {
    /// Creates a column with no flags, default, or extra constraints.
    pub fn new(name: impl Into<String>, column_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            column_type: column_type.into(),
            ..Self::default()
        }
    }

    /// Marks the column as the primary key. Primary keys are always NOT NULL.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.not_null = true;
        self
    }

    pub fn not_null(mut self) -> Self {
        self.not_null = true;
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }

    pub fn with_default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    /// Appends raw constraint text, space-separated from any already present.
    pub fn with_constraint(mut self, raw: impl Into<String>) -> Self {
        let raw = raw.into();
        self.constraints = Some(match self.constraints.take() {
            Some(existing) => format!("{existing} {raw}"),
            None => raw,
        });
        self
    }

    /// Returns true if any modifier is set on this column.
    pub fn has_modifiers(&self) -> bool {
        self.not_null
            || self.primary_key
            || self.unique
            || self.default.is_some()
            || self.constraints.is_some()
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.name, self.column_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_column_has_no_modifiers() {
        let col = Column::new("id", "int");
        assert_eq!(col.name, "id");
        assert_eq!(col.column_type, "int");
        assert!(!col.has_modifiers());
    }

    #[test]
    fn primary_key_implies_not_null() {
        let col = Column::new("id", "int").primary_key();
        assert!(col.primary_key);
        assert!(col.not_null);
    }

    #[test]
    fn constraints_accumulate_in_order() {
        let col = Column::new("n", "int")
            .with_constraint("increment")
            .with_constraint("note: 'x'");
        assert_eq!(col.constraints.as_deref(), Some("increment note: 'x'"));
    }

    #[test]
    fn display_is_name_and_type() {
        let col = Column::new("email", "varchar").unique();
        assert_eq!(col.to_string(), "email: varchar");
    }

    #[test]
    fn serde_skips_absent_options() {
        let col = Column::new("id", "int").primary_key();
        let json = serde_json::to_value(&col).unwrap();
        assert_eq!(json["type"], "int");
        assert_eq!(json["primary_key"], true);
        assert!(json.get("default").is_none());
        assert!(json.get("constraints").is_none());
    }

    #[test]
    fn serde_roundtrip() {
        let col = Column::new("status", "varchar").with_default("\"active\"");
        let json = serde_json::to_string(&col).unwrap();
        let back: Column = serde_json::from_str(&json).unwrap();
        assert_eq!(col, back);
    }
}
