mod compile;
mod config;
mod defaults;
mod engine;
mod error;
mod evaluate;
pub mod parse;
mod store;
mod types;

pub use config::{ConfigError, DEFAULT_GUESS_BUDGET, GameConfig};
pub use defaults::default_templates;
pub use engine::{AskOutcome, Game, GuessOutcome};
pub use error::GuessworkError;
pub use evaluate::{AGE_LABELS, age_value, bucket_rank, evaluate};
pub use store::{Session, SessionId, SessionStore};
pub use types::{
    AskedQuestion, AttrType, AttrValue, Attribute, Catalog, CatalogError, CompileError, EvalKind,
    Guess, Item, ItemId, QuestionTemplate, RegistryBuilder, STANDALONE_FRANCHISE, SessionError,
    SessionState, SessionView, Status, TemplateBuilder, TemplateDef, TemplateDescriptor,
    TemplateRegistry, UnknownAttribute, normalize_name,
};
