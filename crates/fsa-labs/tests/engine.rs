use fsa_labs::{
    CalculationRegistry, FileCatalogSource, InlineCatalogSource, Key, LabResult, Metric,
    ModalState, PopupLabs,
};
use pretty_assertions::assert_eq;

const CATALOG: &str = r#"{
    "popups": {
        "budget-basics": {
            "title": "Budget Basics",
            "type": "calculator",
            "inputs": [
                {"id": "amount", "label": "Amount", "type": "range",
                 "default": 100, "min": 0, "max": 1000, "prefix": "$"}
            ]
        },
        "paycheck": {
            "title": "Payday",
            "type": "scenario",
            "scenario": "What now?",
            "choices": [
                {"title": "Save", "description": "Save it", "outcome": "Good call"},
                {"title": "Spend", "description": "Spend it", "outcome": "Oops",
                 "outcomeTitle": "Hmm", "lesson": "Plan ahead", "outcomeType": "warning"}
            ]
        },
        "checklist": {"title": "Steps", "type": "checklist", "items": ["one", "two"]},
        "broken": {"type": "info"}
    }
}"#;

fn stub_registry() -> CalculationRegistry {
    let mut registry = CalculationRegistry::new();
    registry.register_fn("budget-basics", |inputs| {
        let amount = inputs.number("amount")?;
        Ok(LabResult::report(vec![Metric::new(
            "Monthly total",
            format!("{amount}"),
        )]))
    });
    registry
}

fn labs() -> PopupLabs<InlineCatalogSource> {
    PopupLabs::with_registry(InlineCatalogSource::new(CATALOG), stub_registry())
}

#[tokio::test]
async fn calculator_result_contains_stub_metrics_verbatim() {
    let mut labs = labs();
    assert!(labs.open("budget-basics").await);
    assert!(labs.set_input("amount", "250"));
    assert_eq!(labs.modal().slider_label("amount"), Some("$250"));

    let result = labs.calculate("budget-basics").expect("calculation runs");
    assert_eq!(
        result,
        LabResult::report(vec![Metric::new("Monthly total", "250")])
    );

    let region = labs.modal().result().expect("result region");
    assert!(region.active);
    assert_eq!(region.class, "lab-result active");
    assert!(region.html.contains("Monthly total"));
    assert!(region.html.contains(">250</span>"));
}

#[tokio::test]
async fn calculator_uses_defaults_when_untouched() {
    let mut labs = labs();
    labs.open("budget-basics").await;
    assert_eq!(labs.modal().input("amount"), Some("100"));
    assert_eq!(labs.modal().slider_label("amount"), Some("$100"));
    let result = labs.calculate("budget-basics").unwrap();
    assert_eq!(
        result,
        LabResult::report(vec![Metric::new("Monthly total", "100")])
    );
}

#[tokio::test]
async fn escape_without_open_lab_is_noop() {
    let mut labs = labs();
    assert!(!labs.handle_key(Key::Escape));
    assert_eq!(labs.modal().state(), &ModalState::Closed);
}

#[tokio::test]
async fn escape_closes_open_lab() {
    let mut labs = labs();
    labs.open("checklist").await;
    assert!(labs.modal().scroll_locked());

    assert!(!labs.handle_key(Key::Enter));
    assert!(labs.modal().is_open());

    assert!(labs.handle_key(Key::Escape));
    assert_eq!(labs.modal().state(), &ModalState::Closed);
    assert!(!labs.modal().scroll_locked());
}

#[tokio::test]
async fn unknown_lab_leaves_modal_closed() {
    let mut labs = labs();
    assert!(!labs.open("does-not-exist").await);
    assert_eq!(labs.modal().state(), &ModalState::Closed);
    assert!(!labs.modal().scroll_locked());
}

#[tokio::test]
async fn malformed_entry_is_skipped_not_fatal() {
    let mut labs = labs();
    let catalog = labs.init().await;
    assert_eq!(catalog.len(), 3);
    assert_eq!(catalog.diagnostics().len(), 1);
    assert_eq!(catalog.diagnostics()[0].lab_id, "broken");
    assert!(!labs.open("broken").await);
}

#[tokio::test]
async fn opening_second_lab_replaces_first() {
    let mut labs = labs();
    labs.open("budget-basics").await;
    labs.open("paycheck").await;
    assert_eq!(labs.modal().open_lab(), Some("paycheck"));
    assert!(labs.modal().content().contains("<h2>Payday</h2>"));
    assert!(labs.modal().result().is_none());
    assert!(labs.calculate("budget-basics").is_none());
}

#[tokio::test]
async fn choice_shows_outcome_with_type_class() {
    let mut labs = labs();
    labs.open("paycheck").await;
    assert!(labs.select_choice("paycheck", 1));

    let outcome = labs.modal().outcome().unwrap();
    assert!(outcome.active);
    assert_eq!(outcome.class, "lab-outcome active warning");
    assert!(outcome.html.starts_with("<h4>Hmm</h4><p>Oops</p>"));
    assert!(outcome.html.contains("Plan ahead"));

    assert!(labs.select_choice("paycheck", 0));
    assert_eq!(labs.modal().outcome().unwrap().class, "lab-outcome active");
    assert!(!labs.select_choice("paycheck", 7));
}

#[tokio::test]
async fn missing_computation_is_noop() {
    let mut labs = PopupLabs::with_registry(
        InlineCatalogSource::new(CATALOG),
        CalculationRegistry::new(),
    );
    labs.open("budget-basics").await;
    assert!(labs.calculate("budget-basics").is_none());
    assert!(!labs.modal().result().unwrap().active);
}

#[tokio::test]
async fn non_numeric_input_fails_calculation_quietly() {
    let mut labs = labs();
    labs.open("budget-basics").await;
    labs.set_input("amount", "lots");
    assert!(labs.calculate("budget-basics").is_none());
    assert!(!labs.set_input("nope", "1"));
}

#[tokio::test]
async fn close_is_idempotent() {
    let mut labs = labs();
    labs.close();
    labs.open("checklist").await;
    labs.close();
    labs.close();
    assert_eq!(labs.modal().state(), &ModalState::Closed);
}

#[tokio::test]
async fn load_failure_degrades_to_not_found() {
    let mut labs = PopupLabs::new(FileCatalogSource::new("/no/such/popups.json"));
    assert!(!labs.open("budget-basics").await);
    let catalog = labs.catalog().unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.load_error().unwrap().contains("popups.json"));
}

#[tokio::test]
async fn shipped_catalog_is_fully_valid_and_computable() {
    let path = concat!(env!("CARGO_MANIFEST_DIR"), "/../../data/popups.json");
    let mut labs = PopupLabs::new(FileCatalogSource::new(path));
    let catalog = labs.init().await;
    assert!(catalog.load_error().is_none());
    assert!(catalog.diagnostics().is_empty(), "{:?}", catalog.diagnostics());

    let calculators: Vec<String> = catalog
        .iter()
        .filter(|(_, entry)| entry.kind.type_name() == "calculator")
        .map(|(id, _)| id.to_string())
        .collect();
    assert_eq!(calculators.len(), 5);

    for id in calculators {
        assert!(labs.open(&id).await);
        assert!(labs.calculate(&id).is_some(), "{id} did not calculate");
    }
}
