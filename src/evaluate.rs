use crate::{AttrValue, EvalKind, Item, QuestionTemplate, STANDALONE_FRANCHISE};

/// Answer `template` about `item` for the supplied `value`.
///
/// Total: anything that cannot be decided (a non-numeric threshold, an
/// unranked bucket, an unknown age, a mismatched attribute) answers `false`.
#[must_use]
pub fn evaluate(item: &Item, template: &QuestionTemplate, value: &str) -> bool {
    let field = item.attribute(template.attribute);
    match (template.kind, field) {
        (EvalKind::BooleanField, AttrValue::Flag(flag)) => flag,
        (EvalKind::Equals, AttrValue::Text(text)) => eq_fold(text, value),
        (EvalKind::SetContains, AttrValue::TextSet(set)) => set.iter().any(|s| eq_fold(s, value)),
        (EvalKind::NumericGreaterThan { inclusive }, AttrValue::Number(n)) => {
            value.parse::<i64>().is_ok_and(|target| {
                if inclusive { n >= target } else { n > target }
            })
        }
        (EvalKind::NumericLessThan { inclusive }, AttrValue::Number(n)) => {
            value.parse::<i64>().is_ok_and(|target| {
                if inclusive { n <= target } else { n < target }
            })
        }
        (EvalKind::OrderedBucketAtLeast, AttrValue::Text(bucket)) => {
            let threshold = bucket_rank(&template.values, value);
            threshold != 0 && bucket_rank(&template.values, bucket) >= threshold
        }
        (EvalKind::AgeAtMost, AttrValue::Text(age)) => match (age_value(age), age_value(value)) {
            (0, _) | (_, 0) => false,
            (item_age, target) => item_age <= target,
        },
        (EvalKind::AgeAtLeast, AttrValue::Text(age)) => match (age_value(age), age_value(value)) {
            (0, _) | (_, 0) => false,
            (item_age, target) => item_age >= target,
        },
        (EvalKind::SequelRule, AttrValue::Text(entry)) => is_sequel(&item.franchise, entry),
        _ => false,
    }
}

/// 1-based rank of `label` within `buckets` (lowest first), or 0 if unlisted.
#[must_use]
pub fn bucket_rank(buckets: &[String], label: &str) -> usize {
    buckets
        .iter()
        .position(|b| eq_fold(b, label))
        .map_or(0, |idx| idx + 1)
}

/// Minimum age for an age label such as `"12+"`, or 0 if unknown.
#[must_use]
pub fn age_value(label: &str) -> u32 {
    match label {
        "3+" => 3,
        "7+" => 7,
        "12+" => 12,
        "16+" => 16,
        "18+" => 18,
        _ => 0,
    }
}

/// The labels [`age_value`] recognizes, youngest first.
pub const AGE_LABELS: [&str; 5] = ["3+", "7+", "12+", "16+", "18+"];

fn is_sequel(franchise: &str, entry: &str) -> bool {
    franchise != STANDALONE_FRANCHISE && !entry.is_empty() && entry != "Unknown" && entry != "1"
}

fn eq_fold(a: &str, b: &str) -> bool {
    a == b || a.to_lowercase() == b.to_lowercase()
}
