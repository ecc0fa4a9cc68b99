use std::collections::HashMap;
use std::fmt;

use super::error::CompileError;
use super::template::{EvalKind, QuestionTemplate, TemplateDef, TemplateDescriptor};

/// Builder for constructing a [`TemplateRegistry`].
///
/// Templates are defined via closures and validated into an immutable,
/// thread-safe registry.
///
/// # Example
///
/// ```
/// use guesswork::RegistryBuilder;
///
/// let registry = RegistryBuilder::new()
///     .template("main_genre", "Main Genre", |t| {
///         t.equals("main_genre", &["Action", "RPG", "Shooter"])
///     })
///     .template("has_coop", "Co-op", |t| t.flag("co_op").label("Has co-op?"))
///     .compile()
///     .unwrap();
///
/// assert_eq!(registry.len(), 2);
/// ```
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    defs: Vec<TemplateDef>,
}

/// Intermediate builder passed to the template definition closure.
#[derive(Debug)]
pub struct TemplateBuilder {
    label: Option<String>,
    check: Option<(EvalKind, String)>,
    values: Vec<String>,
}

impl RegistryBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Define a template. The closure must call one of the check methods
    /// (`flag`, `equals`, `contains`, ...).
    ///
    /// If it does not, compilation fails with [`CompileError::MissingCheck`].
    #[must_use]
    pub fn template(
        mut self,
        id: &str,
        category: &str,
        f: impl FnOnce(TemplateBuilder) -> TemplateBuilder,
    ) -> Self {
        let builder = f(TemplateBuilder {
            label: None,
            check: None,
            values: Vec::new(),
        });
        self.defs.push(TemplateDef {
            id: id.to_owned(),
            category: category.to_owned(),
            label: builder.label,
            check: builder.check,
            values: builder.values,
        });
        self
    }

    /// Validate the definitions into an immutable `TemplateRegistry`.
    ///
    /// # Errors
    ///
    /// Returns [`CompileError`] if validation fails.
    pub fn compile(self) -> Result<TemplateRegistry, CompileError> {
        crate::compile::compile(&self.defs)
    }
}

impl From<Vec<TemplateDef>> for RegistryBuilder {
    fn from(defs: Vec<TemplateDef>) -> Self {
        Self { defs }
    }
}

impl TemplateBuilder {
    /// Prompt text; `{value}` is replaced by the chosen value.
    #[must_use]
    pub fn label(mut self, label: &str) -> Self {
        self.label = Some(label.to_owned());
        self
    }

    /// Answer with a boolean attribute as-is.
    #[must_use]
    pub fn flag(self, attribute: &str) -> Self {
        self.check(EvalKind::BooleanField, attribute, &[])
    }

    #[must_use]
    pub fn equals(self, attribute: &str, values: &[&str]) -> Self {
        self.check(EvalKind::Equals, attribute, values)
    }

    #[must_use]
    pub fn contains(self, attribute: &str, values: &[&str]) -> Self {
        self.check(EvalKind::SetContains, attribute, values)
    }

    #[must_use]
    pub fn greater_than(self, attribute: &str, values: &[&str]) -> Self {
        self.check(EvalKind::NumericGreaterThan { inclusive: false }, attribute, values)
    }

    #[must_use]
    pub fn at_least(self, attribute: &str, values: &[&str]) -> Self {
        self.check(EvalKind::NumericGreaterThan { inclusive: true }, attribute, values)
    }

    #[must_use]
    pub fn less_than(self, attribute: &str, values: &[&str]) -> Self {
        self.check(EvalKind::NumericLessThan { inclusive: false }, attribute, values)
    }

    #[must_use]
    pub fn at_most(self, attribute: &str, values: &[&str]) -> Self {
        self.check(EvalKind::NumericLessThan { inclusive: true }, attribute, values)
    }

    /// Compare ordered labels; `buckets` lists them from lowest to highest rank.
    #[must_use]
    pub fn rank_at_least(self, attribute: &str, buckets: &[&str]) -> Self {
        self.check(EvalKind::OrderedBucketAtLeast, attribute, buckets)
    }

    #[must_use]
    pub fn age_at_least(self, attribute: &str, ages: &[&str]) -> Self {
        self.check(EvalKind::AgeAtLeast, attribute, ages)
    }

    #[must_use]
    pub fn age_at_most(self, attribute: &str, ages: &[&str]) -> Self {
        self.check(EvalKind::AgeAtMost, attribute, ages)
    }

    /// Answer whether the item is a later entry in its franchise.
    #[must_use]
    pub fn sequel(self, attribute: &str) -> Self {
        self.check(EvalKind::SequelRule, attribute, &[])
    }

    fn check(mut self, kind: EvalKind, attribute: &str, values: &[&str]) -> Self {
        self.check = Some((kind, attribute.to_owned()));
        self.values = values.iter().map(|v| (*v).to_owned()).collect();
        self
    }
}

/// A validated, immutable set of question templates. Thread-safe and
/// designed to live behind `Arc`.
#[derive(Debug, Clone)]
pub struct TemplateRegistry {
    pub(crate) templates: Vec<QuestionTemplate>,
    pub(crate) index: HashMap<String, usize>,
}

impl TemplateRegistry {
    pub(crate) fn from_validated(templates: Vec<QuestionTemplate>) -> Self {
        let index = templates
            .iter()
            .enumerate()
            .map(|(i, t)| (t.id.clone(), i))
            .collect();
        Self { templates, index }
    }

    /// All templates, in definition order.
    #[must_use]
    pub fn all(&self) -> &[QuestionTemplate] {
        &self.templates
    }

    /// Look up a template by id.
    #[must_use]
    pub fn find(&self, id: &str) -> Option<&QuestionTemplate> {
        self.index.get(id).map(|&idx| &self.templates[idx])
    }

    /// The client-facing projection of every template, in definition order.
    #[must_use]
    pub fn descriptors(&self) -> Vec<TemplateDescriptor> {
        self.templates.iter().map(QuestionTemplate::descriptor).collect()
    }

    /// Template ids in definition order.
    #[must_use]
    pub fn ids(&self) -> Vec<&str> {
        self.templates.iter().map(|t| t.id.as_str()).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.templates.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Parse template DSL text and validate it into a `TemplateRegistry`.
    ///
    /// # Errors
    ///
    /// Returns [`GuessworkError`](crate::GuessworkError) on parse or
    /// validation failure.
    pub fn from_dsl(input: &str) -> Result<Self, crate::GuessworkError> {
        let parsed = crate::parse::parse(input)?;
        let registry = crate::compile::compile(&parsed.templates)?;
        Ok(registry)
    }

    /// Read a template DSL file and validate it into a `TemplateRegistry`.
    ///
    /// # Errors
    ///
    /// Returns [`GuessworkError`](crate::GuessworkError) on I/O, parse, or
    /// validation failure.
    pub fn from_file(path: impl AsRef<std::path::Path>) -> Result<Self, crate::GuessworkError> {
        let input = std::fs::read_to_string(path)?;
        Self::from_dsl(&input)
    }
}

impl Default for TemplateRegistry {
    /// The built-in video game templates, see [`default_templates()`](crate::default_templates).
    fn default() -> Self {
        Self::from_validated(crate::defaults::default_templates())
    }
}

impl fmt::Display for TemplateRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TemplateRegistry({} templates)", self.templates.len())
    }
}
