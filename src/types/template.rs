use std::fmt;

use serde::Serialize;

use super::attribute::{AttrType, Attribute};

/// How a template turns (item, value) into a yes/no answer.
///
/// Dispatched by [`evaluate()`](crate::evaluate()); templates carry no code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EvalKind {
    /// The item's flag, verbatim. The supplied value is ignored.
    BooleanField,
    /// Case-insensitive equality against a single label.
    Equals,
    /// Case-insensitive membership in a label set.
    SetContains,
    /// Integer comparison `item > value` (`>=` when inclusive).
    NumericGreaterThan { inclusive: bool },
    /// Integer comparison `item < value` (`<=` when inclusive).
    NumericLessThan { inclusive: bool },
    /// Rank comparison over the template's ordered value list.
    OrderedBucketAtLeast,
    /// Age-label comparison `item <= value`; unknown ages answer no.
    AgeAtMost,
    /// Age-label comparison `item >= value`; unknown ages answer no.
    AgeAtLeast,
    /// Franchise entry is a known, non-first installment.
    SequelRule,
}

impl EvalKind {
    /// Whether the kind needs a supplied value and a list of legal values.
    #[must_use]
    pub fn takes_value(self) -> bool {
        !matches!(self, EvalKind::BooleanField | EvalKind::SequelRule)
    }

    /// The attribute type this kind reads.
    #[must_use]
    pub fn expected_type(self) -> AttrType {
        match self {
            EvalKind::BooleanField => AttrType::Flag,
            EvalKind::SetContains => AttrType::TextSet,
            EvalKind::NumericGreaterThan { .. } | EvalKind::NumericLessThan { .. } => {
                AttrType::Number
            }
            EvalKind::Equals
            | EvalKind::OrderedBucketAtLeast
            | EvalKind::AgeAtMost
            | EvalKind::AgeAtLeast
            | EvalKind::SequelRule => AttrType::Text,
        }
    }
}

impl fmt::Display for EvalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalKind::BooleanField => write!(f, "flag"),
            EvalKind::Equals => write!(f, "=="),
            EvalKind::SetContains => write!(f, "contains"),
            EvalKind::NumericGreaterThan { inclusive: false } => write!(f, ">"),
            EvalKind::NumericGreaterThan { inclusive: true } => write!(f, ">="),
            EvalKind::NumericLessThan { inclusive: false } => write!(f, "<"),
            EvalKind::NumericLessThan { inclusive: true } => write!(f, "<="),
            EvalKind::OrderedBucketAtLeast => write!(f, "rank_at_least"),
            EvalKind::AgeAtMost => write!(f, "age_at_most"),
            EvalKind::AgeAtLeast => write!(f, "age_at_least"),
            EvalKind::SequelRule => write!(f, "sequel"),
        }
    }
}

/// An unresolved template definition, as produced by
/// [`RegistryBuilder`](super::RegistryBuilder) or the template DSL.
///
/// The attribute is still a name and the kind is `None` until set with
/// one of the [`TemplateBuilder`](super::registry::TemplateBuilder) methods.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateDef {
    pub id: String,
    pub category: String,
    pub label: Option<String>,
    pub check: Option<(EvalKind, String)>,
    pub values: Vec<String>,
}

/// A validated question template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuestionTemplate {
    pub id: String,
    pub category: String,
    /// Prompt shown to players; `{value}` is replaced by the chosen value.
    pub label: String,
    pub kind: EvalKind,
    pub attribute: Attribute,
    /// Legal values, in display order. For ordered buckets this order is the rank order.
    pub values: Vec<String>,
}

impl QuestionTemplate {
    #[must_use]
    pub fn new(
        id: &str,
        category: &str,
        label: &str,
        kind: EvalKind,
        attribute: Attribute,
        values: &[&str],
    ) -> Self {
        Self {
            id: id.to_owned(),
            category: category.to_owned(),
            label: label.to_owned(),
            kind,
            attribute,
            values: values.iter().map(|v| (*v).to_owned()).collect(),
        }
    }

    /// The prompt with `{value}` substituted.
    #[must_use]
    pub fn prompt(&self, value: &str) -> String {
        self.label.replace("{value}", value)
    }

    /// The client-facing projection of this template.
    #[must_use]
    pub fn descriptor(&self) -> TemplateDescriptor {
        TemplateDescriptor {
            id: self.id.clone(),
            category: self.category.clone(),
            label: self.label.clone(),
            values: self.values.clone(),
        }
    }
}

impl fmt::Display for QuestionTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            EvalKind::BooleanField => write!(f, "{}: {}", self.id, self.attribute),
            kind if self.values.is_empty() => write!(f, "{}: {} {kind}", self.id, self.attribute),
            kind => write!(
                f,
                "{}: {} {kind} [{}]",
                self.id,
                self.attribute,
                self.values.join(", ")
            ),
        }
    }
}

/// What clients are told about a template: never how it is evaluated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateDescriptor {
    pub id: String,
    pub category: String,
    pub label: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub values: Vec<String>,
}
