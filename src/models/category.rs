//! Category model

use serde::{Deserialize, Serialize};
use std::fmt;

use super::ids::CategoryId;
use super::transaction::TransactionType;

/// Whether a category groups income or expenses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryKind {
    Income,
    Expense,
}

impl CategoryKind {
    /// Whether transactions of the given type may use this category
    pub fn accepts(&self, txn_type: TransactionType) -> bool {
        matches!(
            (self, txn_type),
            (Self::Income, TransactionType::Income) | (Self::Expense, TransactionType::Expense)
        )
    }
}

impl fmt::Display for CategoryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => write!(f, "income"),
            Self::Expense => write!(f, "expense"),
        }
    }
}

/// A transaction category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: CategoryKind,
    /// Display color (e.g. "#ff8800")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Category {
    pub fn new(id: impl Into<CategoryId>, name: impl Into<String>, kind: CategoryKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
            color: None,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.kind)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_accepts_matching_type() {
        assert!(CategoryKind::Income.accepts(TransactionType::Income));
        assert!(CategoryKind::Expense.accepts(TransactionType::Expense));
        assert!(!CategoryKind::Income.accepts(TransactionType::Expense));
    }

    #[test]
    fn test_deserialize() {
        let json = r##"{"id": 4, "name": "Food", "type": "expense", "color": "#ff0000"}"##;
        let category: Category = serde_json::from_str(json).unwrap();
        assert_eq!(category.kind, CategoryKind::Expense);
        assert_eq!(category.color.as_deref(), Some("#ff0000"));
        assert_eq!(category.to_string(), "Food (expense)");
    }
}
