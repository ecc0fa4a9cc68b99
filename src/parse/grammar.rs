use winnow::ascii::till_line_ending;
use winnow::combinator::{alt, cut_err, opt, preceded, repeat, separated};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::{EvalKind, TemplateDef};

use super::parser::ParsedTemplates;

// -- Whitespace & comments --------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    let _: () = repeat(
        0..,
        alt((
            take_while(1.., |c: char| c.is_ascii_whitespace()).void(),
            ('#', till_line_ending).void(),
        )),
    )
    .parse_next(input)?;
    Ok(())
}

// -- Identifiers ------------------------------------------------------------

fn ident<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1.., |c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| c.is_ascii_alphanumeric() || c == '_'),
    )
        .take()
        .parse_next(input)
}

// -- Literals ---------------------------------------------------------------

fn string_literal(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    let mut s = String::new();
    loop {
        let ch = any.parse_next(input)?;
        match ch {
            '"' => return Ok(s),
            '\\' => {
                let esc = any.parse_next(input)?;
                match esc {
                    '"' => s.push('"'),
                    '\\' => s.push('\\'),
                    other => {
                        s.push('\\');
                        s.push(other);
                    }
                }
            }
            c => s.push(c),
        }
    }
}

fn integer_literal<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (opt('-'), take_while(1.., |c: char| c.is_ascii_digit()))
        .take()
        .parse_next(input)
}

fn list_value(input: &mut &str) -> ModalResult<String> {
    ws.parse_next(input)?;
    alt((string_literal, integer_literal.map(str::to_owned)))
        .context(StrContext::Expected(StrContextValue::Description("value")))
        .parse_next(input)
}

fn value_list(input: &mut &str) -> ModalResult<Vec<String>> {
    ws.parse_next(input)?;
    '['.parse_next(input)?;
    let values: Vec<String> = separated(0.., list_value, (ws, ',')).parse_next(input)?;
    ws.parse_next(input)?;
    cut_err(']').parse_next(input)?;
    Ok(values)
}

// -- Checks -----------------------------------------------------------------

fn operator(input: &mut &str) -> ModalResult<EvalKind> {
    ws.parse_next(input)?;
    alt((
        ">=".value(EvalKind::NumericGreaterThan { inclusive: true }),
        ">".value(EvalKind::NumericGreaterThan { inclusive: false }),
        "<=".value(EvalKind::NumericLessThan { inclusive: true }),
        "<".value(EvalKind::NumericLessThan { inclusive: false }),
        "==".value(EvalKind::Equals),
        "contains".value(EvalKind::SetContains),
        "rank_at_least".value(EvalKind::OrderedBucketAtLeast),
        "age_at_least".value(EvalKind::AgeAtLeast),
        "age_at_most".value(EvalKind::AgeAtMost),
        "sequel".value(EvalKind::SequelRule),
    ))
    .parse_next(input)
}

/// `<attribute> <operator> [values]`, `<attribute> sequel`, or a bare
/// `<attribute>` for flags.
fn check(input: &mut &str) -> ModalResult<(EvalKind, String, Vec<String>)> {
    ws.parse_next(input)?;
    let attribute = ident
        .context(StrContext::Expected(StrContextValue::Description(
            "attribute",
        )))
        .parse_next(input)?;
    let checkpoint = input.checkpoint();
    if let Ok(kind) = operator.parse_next(input) {
        let values = if kind.takes_value() {
            cut_err(value_list)
                .context(StrContext::Expected(StrContextValue::Description(
                    "value list",
                )))
                .parse_next(input)?
        } else {
            Vec::new()
        };
        Ok((kind, attribute.to_owned(), values))
    } else {
        input.reset(&checkpoint);
        Ok((EvalKind::BooleanField, attribute.to_owned(), Vec::new()))
    }
}

// -- Template definitions ---------------------------------------------------

fn template_def(input: &mut &str) -> ModalResult<TemplateDef> {
    ws.parse_next(input)?;
    "template".parse_next(input)?;
    ws.parse_next(input)?;

    let id = cut_err(ident)
        .context(StrContext::Expected(StrContextValue::Description(
            "template id",
        )))
        .parse_next(input)?;

    ws.parse_next(input)?;
    let category = cut_err(string_literal)
        .context(StrContext::Expected(StrContextValue::Description(
            "category",
        )))
        .parse_next(input)?;

    let label = opt(preceded(ws, string_literal)).parse_next(input)?;

    ws.parse_next(input)?;
    cut_err(':').parse_next(input)?;

    let (kind, attribute, values) = cut_err(check)
        .context(StrContext::Expected(StrContextValue::Description(
            "template check",
        )))
        .parse_next(input)?;

    Ok(TemplateDef {
        id: id.to_owned(),
        category,
        label,
        check: Some((kind, attribute)),
        values,
    })
}

// -- Top-level parser -------------------------------------------------------

pub fn parse_templates(input: &mut &str) -> ModalResult<ParsedTemplates> {
    let templates: Vec<TemplateDef> = repeat(0.., template_def).parse_next(input)?;
    ws.parse_next(input)?;
    Ok(ParsedTemplates { templates })
}

#[cfg(test)]
mod tests {
    use crate::parse::parse;

    use super::*;

    fn single(input: &str) -> TemplateDef {
        let mut parsed = parse(input).unwrap();
        assert_eq!(parsed.templates.len(), 1);
        parsed.templates.remove(0)
    }

    #[test]
    fn parse_flag_template() {
        let def = single("template has_coop \"Co-op\":\n    co_op");
        assert_eq!(def.id, "has_coop");
        assert_eq!(def.category, "Co-op");
        assert_eq!(def.label, None);
        assert_eq!(def.check, Some((EvalKind::BooleanField, "co_op".to_owned())));
        assert!(def.values.is_empty());
    }

    #[test]
    fn parse_label() {
        let def = single("template has_coop \"Co-op\" \"Has co-op?\":\n    co_op");
        assert_eq!(def.label.as_deref(), Some("Has co-op?"));
    }

    #[test]
    fn parse_all_operators() {
        let ops = [
            ("==", EvalKind::Equals),
            ("contains", EvalKind::SetContains),
            (">", EvalKind::NumericGreaterThan { inclusive: false }),
            (">=", EvalKind::NumericGreaterThan { inclusive: true }),
            ("<", EvalKind::NumericLessThan { inclusive: false }),
            ("<=", EvalKind::NumericLessThan { inclusive: true }),
            ("rank_at_least", EvalKind::OrderedBucketAtLeast),
            ("age_at_least", EvalKind::AgeAtLeast),
            ("age_at_most", EvalKind::AgeAtMost),
        ];
        for (sym, expected) in ops {
            let def = single(&format!("template t \"T\":\n    attr {sym} [\"a\"]"));
            assert_eq!(def.check, Some((expected, "attr".to_owned())), "failed for {sym}");
            assert_eq!(def.values, vec!["a"], "failed for {sym}");
        }
    }

    #[test]
    fn parse_sequel_takes_no_list() {
        let def = single("template is_sequel \"Franchise\":\n    franchise_entry sequel");
        assert_eq!(
            def.check,
            Some((EvalKind::SequelRule, "franchise_entry".to_owned()))
        );
        assert!(def.values.is_empty());
    }

    #[test]
    fn parse_integer_values() {
        let def = single("template y \"Year\":\n    year >= [2010, \"2012\", -1]");
        assert_eq!(def.values, vec!["2010", "2012", "-1"]);
    }

    #[test]
    fn parse_empty_list() {
        let def = single("template t \"Tone\":\n    tone contains []");
        assert!(def.values.is_empty());
    }

    #[test]
    fn parse_comments_ignored() {
        let input = concat!(
            "# Header\n",
            "template a \"A\": # trailing\n",
            "    co_op\n",
            "# between\n",
            "template b \"B\":\n",
            "    online_only\n",
        );
        let parsed = parse(input).unwrap();
        assert_eq!(parsed.templates.len(), 2);
        assert_eq!(parsed.templates[1].id, "b");
    }

    #[test]
    fn parse_flag_followed_by_template() {
        let input = concat!(
            "template a \"A\":\n",
            "    co_op\n",
            "template b \"B\":\n",
            "    genres contains [\"RPG\", \"Indie\"]",
        );
        let parsed = parse(input).unwrap();
        assert_eq!(parsed.templates.len(), 2);
        assert_eq!(
            parsed.templates[0].check,
            Some((EvalKind::BooleanField, "co_op".to_owned()))
        );
        assert_eq!(parsed.templates[1].values, vec!["RPG", "Indie"]);
    }

    #[test]
    fn parse_string_with_escapes() {
        let def = single(r#"template t "Say \"hi\"": co_op"#);
        assert_eq!(def.category, "Say \"hi\"");
    }

    #[test]
    fn parse_missing_colon_fails() {
        assert!(parse("template t \"T\"\n    co_op").is_err());
    }

    #[test]
    fn parse_unclosed_list_fails() {
        assert!(parse("template t \"T\":\n    tone contains [\"Dark\"").is_err());
    }

    #[test]
    fn parse_missing_category_fails() {
        assert!(parse("template t:\n    co_op").is_err());
    }

    #[test]
    fn parse_empty_input() {
        assert!(parse("  # nothing here\n").unwrap().templates.is_empty());
    }
}
