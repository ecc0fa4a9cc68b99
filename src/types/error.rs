use thiserror::Error;

use super::attribute::AttrType;
use super::item::ItemId;
use super::session::Status;
use super::template::EvalKind;

/// Errors raised while validating question templates.
#[derive(Debug, Error)]
pub enum CompileError {
    #[error("duplicate template id '{id}'")]
    DuplicateTemplate { id: String },

    #[error("no templates defined; at least one template is required")]
    NoTemplates,

    #[error("template '{template}' has no check; call one of the check methods")]
    MissingCheck { template: String },

    #[error("unknown attribute '{attribute}' in template '{template}'")]
    UnknownAttribute { template: String, attribute: String },

    #[error(
        "template '{template}' reads {attribute} ({found}) but its check needs a {expected} attribute"
    )]
    AttributeTypeMismatch {
        template: String,
        attribute: String,
        expected: AttrType,
        found: AttrType,
    },

    #[error("template '{template}': a {kind} check cannot read {attribute}")]
    UnsupportedAttribute {
        template: String,
        attribute: String,
        kind: EvalKind,
    },

    #[error("template '{template}' needs at least one value")]
    MissingValues { template: String },

    #[error("template '{template}' takes no values")]
    UnexpectedValues { template: String },

    #[error("invalid value '{value}' in template '{template}'")]
    InvalidValue { template: String, value: String },
}

/// Errors raised while building a [`Catalog`](super::Catalog).
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("duplicate item id {id}")]
    DuplicateId { id: ItemId },
}

/// Reasons a session operation left the state untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("unknown template '{id}'")]
    UnknownTemplate { id: String },

    #[error("unknown session '{id}'")]
    UnknownSession { id: String },

    #[error("guess is empty")]
    EmptyGuess,

    #[error("game is already over ({status})")]
    GameOver { status: Status },

    #[error("item {id} is missing from the catalog")]
    MissingItem { id: ItemId },

    #[error("catalog is empty; cannot start a game")]
    EmptyCatalog,

    #[error("guess budget is zero; cannot start a game")]
    ZeroGuessBudget,

    #[error("could not generate a session id: {reason}")]
    IdGeneration { reason: String },
}

impl SessionError {
    /// `true` when the caller sent something invalid, as opposed to a
    /// server-side data problem.
    #[must_use]
    pub fn is_caller_error(&self) -> bool {
        matches!(
            self,
            SessionError::UnknownTemplate { .. }
                | SessionError::UnknownSession { .. }
                | SessionError::EmptyGuess
                | SessionError::GameOver { .. }
        )
    }
}
