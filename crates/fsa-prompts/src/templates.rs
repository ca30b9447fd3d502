//! Prompt templates.

use std::fmt::Write;

use crate::plan::ModulePlan;

/// Prompt for a complete module page.
#[must_use]
pub fn module_prompt(plan: &ModulePlan) -> String {
    let mut topics = String::new();
    for (i, topic) in plan.topics.iter().enumerate() {
        let _ = writeln!(topics, "{}. {topic}", i + 1);
    }

    format!(
        "Create a complete interactive HTML module for Financially Sovereign Academy.

MODULE: {title}
DURATION: {duration}
GOAL: {description}

TOPICS:
{topics}
STRUCTURE:
- Overview, a short entry check, one section per topic
- Scenarios: {scenarios}
- Calculator placeholders: {calculators}
- A scenario-based quiz and three concrete next steps

WRITING: plain language, short paragraphs, concrete examples.

ALTERNATIVE ASSETS ({mention}): {guidance}

OUTPUT: a standalone HTML file saved as {path}",
        title = plan.title,
        duration = plan.duration,
        description = plan.description,
        scenarios = plan.scenarios.join(", "),
        calculators = plan.calculators.join(", "),
        mention = plan.mention.as_str(),
        guidance = plan.mention.guidance(),
        path = plan.page_path(),
    )
}

/// Prompt for one calculator used by `plan`'s module.
#[must_use]
pub fn calculator_prompt(name: &str, plan: &ModulePlan) -> String {
    format!(
        "Create an interactive calculator for Financially Sovereign Academy.

CALCULATOR: {name}
CONTEXT: used in Module {id}: {title}

FUNCTIONALITY:
{features}
- Recalculate as the user types, with sensible defaults and input validation
- Explain how the result is computed and what it means

OUTPUT: a standalone HTML file saved as calculators/{name}.html",
        id = plan.id,
        title = plan.title,
        features = calculator_features(name),
    )
}

fn calculator_features(name: &str) -> &'static str {
    match name {
        "budget-calculator" => {
            "- Monthly income and expense categories\n- Surplus or deficit indicator\n- Comparison with the 50/30/20 split"
        }
        "emergency-fund-calculator" => {
            "- Monthly expenses and current savings\n- 3 to 6 month target\n- Timeline to reach the goal"
        }
        "debt-payoff-calculator" => {
            "- Several debts with balance, APR and minimum payment\n- Avalanche vs snowball comparison\n- Total interest saved"
        }
        "compound-growth-visualizer" => {
            "- Starting amount, monthly contribution, return and horizon\n- Growth chart over time\n- Contributed vs final value"
        }
        "credit-score-simulator" => {
            "- Current score and candidate actions\n- Projected change on a 300-850 meter\n- Actions ranked by impact"
        }
        _ => "- Clear inputs and results\n- A visual representation of the result",
    }
}

/// Prompt for the landing page.
#[must_use]
pub fn landing_page_prompt() -> String {
    "Create the landing page for Financially Sovereign Academy.

SECTIONS:
- Hero with a call to action into the assessment
- Why this academy: interactive, scenario-driven, honest about trade-offs
- A grid of all 10 modules with title, duration and a one-line description
- How it works: assessment, personalized path, modules, mastery
- A preview of the calculators
- Frequently asked questions

DESIGN: green and blue palette, mobile-first, accessible.

OUTPUT: a standalone HTML file saved as index.html"
        .to_string()
}

/// Prompt for the placement assessment that picks a persona.
#[must_use]
pub fn assessment_prompt() -> String {
    "Create the learning-path assessment for Financially Sovereign Academy.

QUESTIONS (one per screen, with a back button):
1. Primary financial goal
2. Current financial situation
3. Financial knowledge level
4. Biggest financial worry
5. Weekly time available

RESULT: one of five personas with a recommended module order:
- debt-burdened: modules 5, 1, 2
- fresh-graduate: modules 1, 6, 2
- mid-career: modules 7, 8, 10
- pre-retiree: modules 10, 7, 8
- entrepreneur: modules 1, 6, 5

Store the persona in localStorage under fsa-persona and mark
fsa-assessment-completed.

OUTPUT: a standalone HTML file saved as assessment.html"
        .to_string()
}
