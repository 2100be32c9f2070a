//! CSV tables for spreadsheet import. Fields are quoted per RFC 4180.

use estimator_core::EstimateResult;

const PHASE_HEADER: [&str; 6] = ["phase", "title", "days", "cost", "percentage", "display_days"];
const RULE_HEADER: [&str; 7] = [
    "rule_id",
    "question_id",
    "label",
    "selected",
    "days",
    "share",
    "explanation",
];

/// One row per phase in enumeration order, followed by a total row.
pub fn phases_csv(result: &EstimateResult) -> String {
    let mut out = String::new();
    push_row(&mut out, PHASE_HEADER);
    for phase in &result.phases {
        push_row(
            &mut out,
            [
                phase.phase.as_str().to_string(),
                phase.phase.title().to_string(),
                phase.days.to_string(),
                phase.cost.to_string(),
                phase.percentage.to_string(),
                format!("{:.1}", phase.display.days),
            ],
        );
    }
    push_row(
        &mut out,
        [
            "total".to_string(),
            "Total".to_string(),
            result.total_days.to_string(),
            result.total_cost.to_string(),
            "1".to_string(),
            format!("{:.1}", result.display.days),
        ],
    );
    out
}

/// One row per contributing rule, in result order.
pub fn rules_csv(result: &EstimateResult) -> String {
    let mut out = String::new();
    push_row(&mut out, RULE_HEADER);
    for rule in &result.rules {
        push_row(
            &mut out,
            [
                rule.rule_id.to_string(),
                rule.question_id.to_string(),
                rule.label.clone(),
                rule.selected.to_string(),
                rule.days.to_string(),
                rule.share.to_string(),
                rule.explanation.clone(),
            ],
        );
    }
    out
}

/// Phase table and rule table separated by a blank line.
pub fn breakdown_csv(result: &EstimateResult) -> String {
    format!("{}\n{}", phases_csv(result), rules_csv(result))
}

/// Quote a field when it contains a delimiter, quote, or line break.
pub fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

fn push_row<I, S>(out: &mut String, fields: I)
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&escape_field(field.as_ref()));
    }
    out.push_str("\r\n");
}
