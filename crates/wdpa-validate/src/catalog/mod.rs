//! The rule catalog: every named check as a declarative descriptor.

mod rules;
pub mod values;

use serde::{Deserialize, Serialize};
use wdpa_model::{Field, TableKind};

pub use rules::RULES;

/// Which record tables a rule applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Applicability {
    Point,
    Polygon,
    Both,
}

impl Applicability {
    pub fn applies_to(self, kind: TableKind) -> bool {
        match self {
            Applicability::Both => matches!(kind, TableKind::Point | TableKind::Polygon),
            Applicability::Point => kind == TableKind::Point,
            Applicability::Polygon => kind == TableKind::Polygon,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Applicability::Point => "point",
            Applicability::Polygon => "polygon",
            Applicability::Both => "both",
        }
    }
}

/// How a violation of the rule is to be read by a reviewer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// A hard validity violation.
    Fail,
    /// A soft or statistical flag that needs human review.
    Check,
}

impl Verdict {
    pub fn label(self) -> &'static str {
        match self {
            Verdict::Fail => "Fail",
            Verdict::Check => "Check",
        }
    }
}

/// Identifier reported for violating rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IdentifierKind {
    RecordId,
    MetadataId,
}

impl IdentifierKind {
    pub fn field(self) -> Field {
        match self {
            IdentifierKind::RecordId => Field::RecordId,
            IdentifierKind::MetadataId => Field::MetadataId,
        }
    }
}

/// Source of the allowed values of a membership rule.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AllowedValues {
    Fixed(&'static [&'static str]),
    Numbers(&'static [f64]),
    /// The generated `INT_CRIT` combinations.
    InternationalCriteria,
    /// The reference country-code list supplied with the run.
    CountryCodes,
    /// `"0"` and the first status year through the current year.
    StatusYears,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConditionSpec {
    pub field: Field,
    pub values: AllowedValues,
}

/// Rules with their own evaluation logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bespoke {
    DuplicateRecordId,
    MarineByGeometry,
    NoTakeAreaEquality,
    IntCritApplicability,
    IucnApplicability,
    SmallGisArea,
    MarineAreaPositive(Field),
    MissingValues,
}

/// What a rule checks, dispatched by the runner.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CheckKind {
    Membership {
        field: Field,
        allowed: AllowedValues,
        condition: Option<ConditionSpec>,
    },
    GroupConsistency {
        field: Field,
    },
    SizeOrder {
        smaller: Field,
        larger: Field,
    },
    OutlierRatio {
        field_a: Field,
        field_b: Field,
    },
    ForbiddenCharacters {
        field: Field,
    },
    Bespoke(Bespoke),
}

impl CheckKind {
    pub fn label(&self) -> &'static str {
        match self {
            CheckKind::Membership { .. } => "membership",
            CheckKind::GroupConsistency { .. } => "group consistency",
            CheckKind::SizeOrder { .. } => "size order",
            CheckKind::OutlierRatio { .. } => "outlier ratio",
            CheckKind::ForbiddenCharacters { .. } => "forbidden characters",
            CheckKind::Bespoke(_) => "bespoke",
        }
    }
}

/// A named rule of the catalog.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RuleDef {
    pub name: &'static str,
    pub description: &'static str,
    pub applies_to: Applicability,
    pub verdict: Verdict,
    pub identifier: IdentifierKind,
    pub kind: CheckKind,
}

/// Ordered view of the catalog restricted to one table kind.
#[derive(Debug, Clone)]
pub struct RuleCatalog {
    rules: Vec<&'static RuleDef>,
}

impl RuleCatalog {
    /// Every rule, in catalog order.
    pub fn all() -> Self {
        Self {
            rules: RULES.iter().collect(),
        }
    }

    /// Rules applicable to `kind`, in catalog order.
    pub fn for_table(kind: TableKind) -> Self {
        Self {
            rules: RULES
                .iter()
                .filter(|rule| rule.applies_to.applies_to(kind))
                .collect(),
        }
    }

    pub fn from_rules(rules: Vec<&'static RuleDef>) -> Self {
        Self { rules }
    }

    pub fn get(&self, name: &str) -> Option<&'static RuleDef> {
        self.rules.iter().copied().find(|rule| rule.name == name)
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    pub fn rules(&self) -> &[&'static RuleDef] {
        &self.rules
    }

    pub fn iter(&self) -> impl Iterator<Item = &'static RuleDef> + '_ {
        self.rules.iter().copied()
    }
}
