use std::collections::HashSet;

use crate::evaluate::age_value;
use crate::{Attribute, CompileError, EvalKind, QuestionTemplate, TemplateDef, TemplateRegistry};

pub(crate) fn compile(defs: &[TemplateDef]) -> Result<TemplateRegistry, CompileError> {
    let templates = defs
        .iter()
        .map(resolve)
        .collect::<Result<Vec<_>, _>>()?;

    validate(&templates)?;

    Ok(TemplateRegistry::from_validated(templates))
}

/// Resolve the attribute name and fill in the default label.
fn resolve(def: &TemplateDef) -> Result<QuestionTemplate, CompileError> {
    let (kind, attribute) = def
        .check
        .as_ref()
        .ok_or_else(|| CompileError::MissingCheck {
            template: def.id.clone(),
        })?;

    let attribute: Attribute = attribute
        .parse()
        .map_err(|_| CompileError::UnknownAttribute {
            template: def.id.clone(),
            attribute: attribute.clone(),
        })?;

    Ok(QuestionTemplate {
        id: def.id.clone(),
        category: def.category.clone(),
        label: def.label.clone().unwrap_or_else(|| def.category.clone()),
        kind: *kind,
        attribute,
        values: def.values.clone(),
    })
}

pub(crate) fn validate(templates: &[QuestionTemplate]) -> Result<(), CompileError> {
    if templates.is_empty() {
        return Err(CompileError::NoTemplates);
    }
    check_duplicates(templates)?;
    for template in templates {
        check_attribute_type(template)?;
        check_values(template)?;
    }
    Ok(())
}

fn check_duplicates(templates: &[QuestionTemplate]) -> Result<(), CompileError> {
    let mut seen = HashSet::new();
    for template in templates {
        if !seen.insert(template.id.as_str()) {
            return Err(CompileError::DuplicateTemplate {
                id: template.id.clone(),
            });
        }
    }
    Ok(())
}

fn check_attribute_type(template: &QuestionTemplate) -> Result<(), CompileError> {
    let expected = template.kind.expected_type();
    let found = template.attribute.attr_type();
    if expected != found {
        return Err(CompileError::AttributeTypeMismatch {
            template: template.id.clone(),
            attribute: template.attribute.to_string(),
            expected,
            found,
        });
    }
    // The sequel rule pairs the entry with the item's franchise.
    if template.kind == EvalKind::SequelRule && template.attribute != Attribute::FranchiseEntry {
        return Err(CompileError::UnsupportedAttribute {
            template: template.id.clone(),
            attribute: template.attribute.to_string(),
            kind: template.kind,
        });
    }
    Ok(())
}

fn check_values(template: &QuestionTemplate) -> Result<(), CompileError> {
    if !template.kind.takes_value() {
        if template.values.is_empty() {
            return Ok(());
        }
        return Err(CompileError::UnexpectedValues {
            template: template.id.clone(),
        });
    }

    if template.values.is_empty() {
        return Err(CompileError::MissingValues {
            template: template.id.clone(),
        });
    }

    let invalid = template.values.iter().find(|value| match template.kind {
        EvalKind::NumericGreaterThan { .. } | EvalKind::NumericLessThan { .. } => {
            value.parse::<i64>().is_err()
        }
        EvalKind::AgeAtLeast | EvalKind::AgeAtMost => age_value(value) == 0,
        _ => value.is_empty(),
    });

    match invalid {
        Some(value) => Err(CompileError::InvalidValue {
            template: template.id.clone(),
            value: value.clone(),
        }),
        None => Ok(()),
    }
}
