//! Plain-text summary report.

use estimator_breakdown::ProjectTimeline;
use estimator_core::EstimateResult;

const TITLE: &str = "DATA QUALITY SERVICES ESTIMATE";

/// Overview, totals, phase table, contributing factors, confidence, risks,
/// timeline and methodology, in that order. The methodology section is left
/// out when the catalog describes no phase.
pub fn text_report(result: &EstimateResult, timeline: &ProjectTimeline) -> String {
    let mut out = String::new();
    let money =
        |amount: f64| format_money(amount, &result.currency_symbol, result.currency_precision);

    heading(&mut out, TITLE, '=');
    line(&mut out, format!("Catalog version : {}", result.catalog_version));
    line(&mut out, format!("Mode            : {}", result.mode));
    line(&mut out, format!("Daily rate      : {}", money(result.daily_rate)));
    out.push('\n');

    heading(&mut out, "TOTALS", '-');
    line(&mut out, format!("Effort : {:.1} days", result.display.days));
    line(&mut out, format!("Cost   : {}", money(result.display.cost)));
    line(&mut out, format!("  Base effort     {:.1} days", result.base_days));
    if result.minimum_top_up_days > 0.0 {
        line(
            &mut out,
            format!("  Minimum top-up  {:.1} days", result.minimum_top_up_days),
        );
    }
    out.push('\n');

    heading(&mut out, "PHASES", '-');
    for phase in &result.phases {
        line(
            &mut out,
            format!(
                "{:<28}{:>8.1} days {:>14} {:>6.1}%",
                phase.phase.title(),
                phase.display.days,
                money(phase.display.cost),
                phase.percentage * 100.0
            ),
        );
    }
    out.push('\n');

    heading(&mut out, "CONTRIBUTING FACTORS", '-');
    if result.rules.is_empty() {
        line(&mut out, "Base effort only.");
    }
    for rule in &result.rules {
        line(&mut out, format!("- {}", rule.explanation));
    }
    out.push('\n');

    heading(&mut out, "CONFIDENCE", '-');
    line(
        &mut out,
        format!(
            "{} ({:.0}% of advanced questions answered)",
            result.confidence,
            result.coverage * 100.0
        ),
    );
    if result.deviations.is_empty() {
        line(&mut out, "All answers match the catalog defaults.");
    } else {
        let ids: Vec<&str> = result.deviations.iter().map(|q| q.as_str()).collect();
        line(&mut out, format!("Differs from defaults: {}", ids.join(", ")));
    }
    out.push('\n');

    heading(&mut out, "RISKS", '-');
    if result.risks.is_empty() {
        line(&mut out, "No significant risks identified.");
    }
    for (i, risk) in result.risks.iter().enumerate() {
        line(&mut out, format!("{}. {}", i + 1, risk.description));
        if let Some(mitigation) = &risk.mitigation {
            line(&mut out, format!("   Mitigation: {mitigation}"));
        }
    }
    out.push('\n');

    heading(&mut out, "TIMELINE", '-');
    line(
        &mut out,
        format!("Sequential : {:.1} weeks", timeline.sequential_weeks),
    );
    if timeline.team_size > 1 {
        line(
            &mut out,
            format!(
                "Parallel   : {:.1} weeks (team of {})",
                timeline.parallel_weeks, timeline.team_size
            ),
        );
    }

    let described: Vec<_> = result
        .phases
        .iter()
        .filter_map(|p| p.description.as_deref().map(|d| (p.phase.title(), d)))
        .collect();
    if !described.is_empty() {
        out.push('\n');
        heading(&mut out, "METHODOLOGY", '-');
        for (title, description) in described {
            line(&mut out, format!("{title}:"));
            for text in description.lines().map(str::trim).filter(|t| !t.is_empty()) {
                line(&mut out, format!("  {text}"));
            }
        }
    }

    out
}

/// `€12,600.00` style amount with thousands separators.
pub fn format_money(amount: f64, symbol: &str, precision: u32) -> String {
    let formatted = format!("{:.*}", precision as usize, amount.abs());
    let (whole, fraction) = match formatted.split_once('.') {
        Some((w, f)) => (w, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if amount < 0.0 { "-" } else { "" };
    match fraction {
        Some(f) => format!("{sign}{symbol}{grouped}.{f}"),
        None => format!("{sign}{symbol}{grouped}"),
    }
}

fn heading(out: &mut String, title: &str, underline: char) {
    line(out, title);
    line(out, underline.to_string().repeat(title.chars().count()));
}

fn line(out: &mut String, text: impl AsRef<str>) {
    out.push_str(text.as_ref());
    out.push('\n');
}
