//! HTML fragments for the modal and each lab type.
//!
//! Ids that end up inside attributes are escaped. Catalog text is trusted
//! authoring content and is inserted verbatim, so entries may carry inline
//! markup such as `<strong>`.

use std::fmt::Write;

use crate::catalog::{
    CalculatorLab, ChecklistLab, Choice, InfoLab, Input, InputKind, LabEntry, LabKind,
    ScenarioLab,
};
use crate::calculation::LabResult;

/// DOM id of the modal root.
pub const MODAL_ID: &str = "popup-modal";
/// DOM id of the region lab content is rendered into.
pub const CONTENT_ID: &str = "popup-content";

/// Static modal container: backdrop, close button and empty content region.
#[must_use]
pub fn render_modal_shell() -> String {
    format!(
        r#"<div id="{MODAL_ID}" class="popup-modal">
    <div class="popup-backdrop" data-action="close"></div>
    <div class="popup-container">
        <button class="popup-close" data-action="close" aria-label="Close">&times;</button>
        <div class="popup-content" id="{CONTENT_ID}"></div>
    </div>
</div>"#
    )
}

/// Full content of the modal for one lab.
#[must_use]
pub fn render_lab(lab_id: &str, entry: &LabEntry) -> String {
    let mut html = format!("<h2>{}</h2>", entry.title);
    if let Some(intro) = &entry.intro {
        let _ = write!(html, "<p>{intro}</p>");
    }

    match &entry.kind {
        LabKind::Calculator(lab) => html.push_str(&render_calculator(lab_id, lab)),
        LabKind::Scenario(lab) => html.push_str(&render_scenario(lab_id, lab)),
        LabKind::Checklist(lab) => html.push_str(&render_checklist(lab)),
        LabKind::Info(lab) => html.push_str(&render_info(lab)),
    }
    html
}

/// DOM id of a lab's control for `input_id`.
#[must_use]
pub fn input_dom_id(lab_id: &str, input_id: &str) -> String {
    format!("{}-{}", escape_attr(lab_id), escape_attr(input_id))
}

#[must_use]
pub fn result_dom_id(lab_id: &str) -> String {
    format!("{}-result", escape_attr(lab_id))
}

#[must_use]
pub fn outcome_dom_id(lab_id: &str) -> String {
    format!("{}-outcome", escape_attr(lab_id))
}

fn render_calculator(lab_id: &str, lab: &CalculatorLab) -> String {
    let mut html = String::from(r#"<div class="popup-section">"#);
    for input in &lab.inputs {
        let _ = write!(
            html,
            r#"<div class="lab-input-group"><label for="{dom_id}">{label}</label>{control}</div>"#,
            dom_id = input_dom_id(lab_id, &input.id),
            label = input.label,
            control = render_control(lab_id, input),
        );
    }
    let _ = write!(
        html,
        r#"<button class="lab-button" data-action="calculate" data-lab="{lab}">{text}</button></div><div class="lab-result" id="{result}"></div>"#,
        lab = escape_attr(lab_id),
        text = lab.button_text(),
        result = result_dom_id(lab_id),
    );
    html
}

fn render_control(lab_id: &str, input: &Input) -> String {
    let dom_id = input_dom_id(lab_id, &input.id);
    let value = escape_attr(&input.initial_value());
    match input.kind {
        InputKind::Range => format!(
            r#"<input type="range" id="{dom_id}" min="{min}" max="{max}" value="{value}" step="{step}"><span class="lab-slider-value" id="{dom_id}-value">{label}</span>"#,
            min = number_attr(input.min, "0"),
            max = number_attr(input.max, "100"),
            step = number_attr(input.step, "1"),
            label = input.display_value(&input.initial_value()),
        ),
        InputKind::Select => {
            let mut html = format!(r#"<select id="{dom_id}">"#);
            let selected = input.initial_value();
            for option in &input.options {
                let marker = if option.value == selected {
                    " selected"
                } else {
                    ""
                };
                let _ = write!(
                    html,
                    r#"<option value="{}"{marker}>{}</option>"#,
                    escape_attr(&option.value),
                    option.label
                );
            }
            html.push_str("</select>");
            html
        }
        InputKind::Number => {
            let max = input
                .max
                .map(|max| format!(r#" max="{max}""#))
                .unwrap_or_default();
            format!(
                r#"<input type="number" id="{dom_id}" value="{value}" min="{min}"{max} step="{step}">"#,
                min = number_attr(input.min, "0"),
                step = number_attr(input.step, "any"),
            )
        }
    }
}

fn render_scenario(lab_id: &str, lab: &ScenarioLab) -> String {
    let mut html = String::from(r#"<div class="popup-section">"#);
    if let Some(scenario) = &lab.scenario {
        let _ = write!(html, "<p>{scenario}</p>");
    }
    if !lab.choices.is_empty() {
        html.push_str(r#"<div class="lab-choice-group">"#);
        for (index, choice) in lab.choices.iter().enumerate() {
            let _ = write!(
                html,
                r#"<div class="lab-choice" data-action="choose" data-lab="{lab}" data-choice="{index}"><div class="lab-choice-title">{title}</div><div class="lab-choice-desc">{description}</div></div>"#,
                lab = escape_attr(lab_id),
                title = choice.title,
                description = choice.description,
            );
        }
        html.push_str("</div>");
    }
    let _ = write!(
        html,
        r#"</div><div class="lab-outcome" id="{}"></div>"#,
        outcome_dom_id(lab_id)
    );
    html
}

fn render_checklist(lab: &ChecklistLab) -> String {
    let mut html = String::from(r#"<div class="popup-section">"#);
    if !lab.items.is_empty() {
        html.push_str(r#"<ul class="lab-checklist">"#);
        for item in &lab.items {
            let _ = write!(html, "<li>{item}</li>");
        }
        html.push_str("</ul>");
    }
    if let Some(tip) = &lab.tip {
        let _ = write!(
            html,
            r#"<p class="lab-tip"><strong>Tip:</strong> {tip}</p>"#
        );
    }
    html.push_str("</div>");
    html
}

fn render_info(lab: &InfoLab) -> String {
    let mut html = String::from(r#"<div class="popup-section">"#);
    for section in &lab.sections {
        let _ = write!(html, "<h3>{}</h3><p>{}</p>", section.title, section.content);
    }
    if let Some(example) = &lab.example {
        let _ = write!(
            html,
            r#"<div class="lab-example"><h4>Example</h4><p>{example}</p></div>"#
        );
    }
    html.push_str("</div>");
    html
}

/// Inner HTML of a calculator's result region.
#[must_use]
pub fn render_result(result: &LabResult) -> String {
    match result {
        LabResult::Text(text) => format!("<p>{text}</p>"),
        LabResult::Report { metrics, message } => {
            let mut html = String::from("<h4>Results</h4>");
            for metric in metrics {
                let class = metric
                    .kind
                    .as_deref()
                    .map(|kind| format!(" {}", escape_attr(kind)))
                    .unwrap_or_default();
                let _ = write!(
                    html,
                    r#"<div class="lab-metric"><span class="lab-metric-label">{label}</span><span class="lab-metric-value{class}">{value}</span></div>"#,
                    label = metric.label,
                    value = metric.value,
                );
            }
            if let Some(message) = message {
                let _ = write!(html, r#"<p class="lab-message">{message}</p>"#);
            }
            html
        }
    }
}

/// Inner HTML of a scenario's outcome region for `choice`.
#[must_use]
pub fn render_outcome(choice: &Choice) -> String {
    let mut html = format!(
        "<h4>{}</h4><p>{}</p>",
        choice.outcome_title.as_deref().unwrap_or("Outcome"),
        choice.outcome
    );
    if let Some(lesson) = &choice.lesson {
        let _ = write!(
            html,
            r#"<p class="lab-lesson"><strong>Lesson:</strong> {lesson}</p>"#
        );
    }
    html
}

/// Escape text for use inside a double-quoted attribute.
#[must_use]
pub fn escape_attr(raw: &str) -> String {
    let mut escaped = String::with_capacity(raw.len());
    for ch in raw.chars() {
        match ch {
            '&' => escaped.push_str("&amp;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            _ => escaped.push(ch),
        }
    }
    escaped
}

fn number_attr(value: Option<f64>, fallback: &str) -> String {
    value.map_or_else(|| fallback.to_string(), |value| value.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::Metric;
    use crate::catalog::{InfoSection, InputValue, SelectOption};
    use pretty_assertions::assert_eq;

    fn range_input() -> Input {
        Input {
            id: "amount".into(),
            label: "Amount".into(),
            kind: InputKind::Range,
            default: Some(InputValue::Number(100.0)),
            min: Some(0.0),
            max: Some(1000.0),
            step: None,
            prefix: Some("$".into()),
            suffix: None,
            options: Vec::new(),
        }
    }

    #[test]
    fn calculator_renders_slider_with_label_and_result_region() {
        let entry = LabEntry {
            title: "Budget Basics".into(),
            intro: Some("Try it.".into()),
            kind: LabKind::Calculator(CalculatorLab {
                inputs: vec![range_input()],
                button_text: None,
                calculation: None,
            }),
        };
        let html = render_lab("budget-basics", &entry);
        assert!(html.starts_with("<h2>Budget Basics</h2><p>Try it.</p>"));
        assert!(html.contains(
            r#"<input type="range" id="budget-basics-amount" min="0" max="1000" value="100" step="1">"#
        ));
        assert!(html.contains(r#"id="budget-basics-amount-value">$100</span>"#));
        assert!(html.contains(">Calculate</button>"));
        assert!(html.contains(r#"<div class="lab-result" id="budget-basics-result"></div>"#));
    }

    #[test]
    fn select_marks_initial_option() {
        let input = Input {
            kind: InputKind::Select,
            default: None,
            options: vec![
                SelectOption {
                    value: "a".into(),
                    label: "A".into(),
                },
                SelectOption {
                    value: "b".into(),
                    label: "B".into(),
                },
            ],
            ..range_input()
        };
        let html = render_control("lab", &input);
        assert!(html.contains(r#"<option value="a" selected>A</option>"#));
        assert!(html.contains(r#"<option value="b">B</option>"#));
    }

    #[test]
    fn number_input_omits_absent_max() {
        let input = Input {
            kind: InputKind::Number,
            max: None,
            min: None,
            ..range_input()
        };
        assert_eq!(
            render_control("lab", &input),
            r#"<input type="number" id="lab-amount" value="100" min="0" step="any">"#
        );
    }

    #[test]
    fn string_result_is_a_paragraph() {
        assert_eq!(
            render_result(&LabResult::Text("Done".into())),
            "<p>Done</p>"
        );
    }

    #[test]
    fn report_renders_metrics_with_classes() {
        let html = render_result(
            &LabResult::report(vec![
                Metric::new("Monthly total", "250"),
                Metric::new("Gap", "$5").danger(),
            ])
            .with_message("Nice"),
        );
        assert!(html.contains(r#"<span class="lab-metric-label">Monthly total</span><span class="lab-metric-value">250</span>"#));
        assert!(html.contains(r#"<span class="lab-metric-value danger">$5</span>"#));
        assert!(html.ends_with(r#"<p class="lab-message">Nice</p>"#));
    }

    #[test]
    fn outcome_defaults_title_and_includes_lesson() {
        let choice = Choice {
            title: "Save".into(),
            description: "Put it away".into(),
            outcome: "You have a cushion.".into(),
            outcome_title: None,
            lesson: Some("Pay yourself first.".into()),
            outcome_type: None,
        };
        let html = render_outcome(&choice);
        assert!(html.starts_with("<h4>Outcome</h4><p>You have a cushion.</p>"));
        assert!(html.contains("Pay yourself first."));
    }

    #[test]
    fn info_and_checklist_render_in_order() {
        let info = render_info(&InfoLab {
            sections: vec![
                InfoSection {
                    title: "One".into(),
                    content: "first".into(),
                },
                InfoSection {
                    title: "Two".into(),
                    content: "second".into(),
                },
            ],
            example: Some("e.g.".into()),
        });
        assert!(info.find("One").unwrap() < info.find("Two").unwrap());
        assert!(info.contains("<h4>Example</h4><p>e.g.</p>"));

        let list = render_checklist(&ChecklistLab {
            items: vec!["a".into(), "b".into()],
            tip: None,
        });
        assert_eq!(
            list,
            r#"<div class="popup-section"><ul class="lab-checklist"><li>a</li><li>b</li></ul></div>"#
        );
    }

    #[test]
    fn ids_are_escaped_in_attributes() {
        assert_eq!(escape_attr(r#"a"b<c>&'"#), "a&quot;b&lt;c&gt;&amp;&#39;");
        assert_eq!(result_dom_id("x\"y"), "x&quot;y-result");
    }

    #[test]
    fn modal_shell_has_content_region() {
        let shell = render_modal_shell();
        assert!(shell.contains(r#"id="popup-modal""#));
        assert!(shell.contains(r#"id="popup-content""#));
    }
}
