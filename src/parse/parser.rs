use crate::TemplateDef;

/// The result of parsing template DSL text: definitions not yet validated.
#[derive(Debug)]
pub struct ParsedTemplates {
    pub templates: Vec<TemplateDef>,
}
