use anyhow::Result;

use doe_builder::domain::services::rules::RuleScope;
use doe_builder::domain::services::RULES;

use crate::ui::context::UiContext;
use crate::ui::views::rules::render_rules;

pub fn cmd_rules(ui: UiContext) -> Result<()> {
    if ui.json {
        let rules: Vec<serde_json::Value> = RULES
            .iter()
            .map(|rule| {
                serde_json::json!({
                    "category": rule.category.label(),
                    "stage": format!("{:?}", rule.stage),
                    "per_machine": rule.scope == RuleScope::PerMachine,
                    "action": rule.action.describe(),
                    "destination": rule.destination.describe(),
                })
            })
            .collect();
        println!(
            "{}",
            serde_json::json!({
                "event": "rules",
                "command": "rules",
                "rules": rules,
            })
        );
        return Ok(());
    }

    print!("{}", render_rules(ui.color, ui.unicode));
    Ok(())
}
