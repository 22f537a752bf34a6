//! `match` expressions

use super::ExpressionNode;
use core_types::Range;
use thiserror::Error;

/// `match (subject) { arms }`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchNode {
    /// Source location
    pub range: Range,
    /// Matched value
    pub subject: Box<ExpressionNode>,
    /// Arms in source order
    pub arms: MatchArmNodes,
}

/// One arm of a match expression.
///
/// An arm without a left side is the default arm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MatchArmNode {
    /// Source location
    pub range: Range,
    /// Comma separated patterns, `None` for `default`
    pub left: Option<Vec<ExpressionNode>>,
    /// Value of the arm
    pub right: Box<ExpressionNode>,
}

impl MatchArmNode {
    /// Whether this is the `default` arm
    pub fn is_default(&self) -> bool {
        self.left.is_none()
    }
}

/// The arms of a match expression, with at most one default arm
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatchArmNodes {
    items: Vec<MatchArmNode>,
}

/// Construction failure of [`MatchArmNodes`]
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidMatchArmNodes {
    /// A second default arm was found
    #[error("A match expression may contain only one default arm")]
    MoreThanOneDefaultMatchArmNode {
        /// The second default arm
        second_default_match_arm_node: MatchArmNode,
    },
}

impl MatchArmNodes {
    /// Validate and wrap `items`
    pub fn new(items: Vec<MatchArmNode>) -> Result<Self, InvalidMatchArmNodes> {
        let mut defaults = items.iter().filter(|arm| arm.is_default());
        if let (Some(_), Some(second)) = (defaults.next(), defaults.next()) {
            return Err(InvalidMatchArmNodes::MoreThanOneDefaultMatchArmNode {
                second_default_match_arm_node: second.clone(),
            });
        }
        Ok(Self { items })
    }

    /// The arms in source order
    pub fn items(&self) -> &[MatchArmNode] {
        &self.items
    }

    /// The default arm, if any
    pub fn default_arm(&self) -> Option<&MatchArmNode> {
        self.items.iter().find(|arm| arm.is_default())
    }

    /// Number of arms
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether there are no arms
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
