//! Rule registry.

use crate::{ColorThemeRule, LocalizationRule};
use iblint_core::{ConfigurableRule, Context, RuleBox};
use tracing::debug;

/// Identifiers of every built-in rule, in registration order.
#[must_use]
pub fn all_rule_ids() -> Vec<&'static str> {
    vec![ColorThemeRule::IDENTIFIER, LocalizationRule::IDENTIFIER]
}

/// Returns an unconfigured instance of every built-in rule.
///
/// Useful for listing identifiers and descriptions. The instances hold
/// empty lookup tables and report nothing.
#[must_use]
pub fn all_rules() -> Vec<RuleBox> {
    vec![
        Box::new(ColorThemeRule::default()),
        Box::new(LocalizationRule::default()),
    ]
}

/// Builds the rules selected by the context's configuration.
///
/// Each rule reads its auxiliary file once here. A rule whose file cannot
/// be read is still returned, degraded to a no-op, after its diagnostic has
/// been logged.
#[must_use]
pub fn rules_for(context: &Context) -> Vec<RuleBox> {
    let mut rules = Vec::new();
    push_selected::<ColorThemeRule>(context, &mut rules);
    push_selected::<LocalizationRule>(context, &mut rules);
    rules
}

fn push_selected<R>(context: &Context, rules: &mut Vec<RuleBox>)
where
    R: ConfigurableRule + Default + 'static,
{
    let default_enabled = R::default().is_default_enabled();
    if !context
        .config
        .is_rule_selected(R::IDENTIFIER, default_enabled)
    {
        debug!("Rule {} not selected", R::IDENTIFIER);
        return;
    }
    rules.push(R::from_context(context).into_boxed());
}
