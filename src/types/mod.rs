mod attribute;
mod catalog;
mod error;
mod item;
mod registry;
mod session;
mod template;

pub use attribute::{AttrType, AttrValue, Attribute, UnknownAttribute};
pub use catalog::{Catalog, normalize_name};
pub use error::{CatalogError, CompileError, SessionError};
pub use item::{Item, ItemId, STANDALONE_FRANCHISE};
pub use registry::{RegistryBuilder, TemplateBuilder, TemplateRegistry};
pub use session::{AskedQuestion, Guess, SessionState, SessionView, Status};
pub use template::{EvalKind, QuestionTemplate, TemplateDef, TemplateDescriptor};
