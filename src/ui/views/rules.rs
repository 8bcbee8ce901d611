use doe_builder::domain::services::rules::{rules_for, RuleScope, Stage};

use crate::ui::blocks::header::CommandHeader;
use crate::ui::primitives::icon::Icon;
use crate::ui::primitives::text::ColoredText;

fn stage_title(stage: Stage) -> &'static str {
    match stage {
        Stage::ManualsAndTech => "Manuals and technical instructions",
        Stage::ReportPlaceholder => "Intervention report",
        Stage::PerMachine => "Per machine",
        Stage::ProbeFile => "Probe file",
        Stage::Certificates => "Certificates",
    }
}

/// The classification table, grouped by stage in execution order
pub fn render_rules(supports_color: bool, supports_unicode: bool) -> String {
    let mut out = CommandHeader::new(Icon::Rules, "DOE Classification Rules")
        .render(supports_color, supports_unicode);
    let arrow = if supports_unicode { "→" } else { "->" };

    for (index, stage) in Stage::ORDER.iter().enumerate() {
        out.push('\n');
        out.push_str(&format!(
            "{}. {}\n",
            index + 1,
            ColoredText::info(stage_title(*stage))
                .bold()
                .render(supports_color)
        ));

        for rule in rules_for(*stage) {
            let scope = match rule.scope {
                RuleScope::PerMachine => "each machine",
                RuleScope::PerRun => "once",
            };
            out.push_str(&format!(
                "  {} {} ({})\n",
                Icon::Pending.colored(supports_color, supports_unicode),
                rule.category,
                ColoredText::dim(scope).render(supports_color)
            ));
            out.push_str(&format!("      {}\n", rule.action.describe()));
            out.push_str(&format!(
                "      {arrow} {}\n",
                rule.destination.describe()
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use doe_builder::domain::services::RULES;

    #[test]
    fn every_rule_is_listed() {
        let rendered = render_rules(false, true);
        for rule in RULES.iter() {
            assert!(
                rendered.contains(rule.category.label()),
                "missing {}",
                rule.category
            );
        }
    }

    #[test]
    fn stages_are_numbered_in_order() {
        let rendered = render_rules(false, false);
        let first = rendered.find("1. Manuals and technical instructions").unwrap();
        let last = rendered.find("5. Certificates").unwrap();
        assert!(first < last);
        assert!(rendered.starts_with("[RULES] DOE Classification Rules\n"));
    }

    #[test]
    fn plan_rule_shows_rename_and_studies_destination() {
        let rendered = render_rules(false, false);
        assert!(rendered.contains("renamed Plan Analyseur <N_x>.pdf"));
        assert!(rendered.contains("      -> 1 - Documents Etudes\n"));
    }
}
