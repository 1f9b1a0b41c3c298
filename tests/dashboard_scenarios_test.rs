use certify_hub::adapters::render::{render, render_list, OutputFormat};
use certify_hub::app::actions::RowAction;
use certify_hub::app::search_bar::SearchBar;
use certify_hub::app::views::widgets::TableBody;
use certify_hub::app::views::Page;
use certify_hub::domain::model::{RecordKind, StatusSource};
use certify_hub::domain::ports::RowActions;
use certify_hub::{DashboardConfig, DashboardEngine, DashboardError, SampleDataSource, ViewOptions};
use std::sync::{Arc, Mutex};
use std::time::Duration;

async fn sample_engine(extra_toml: &str) -> DashboardEngine {
    let toml = format!("[dashboard]\ntoday = \"2024-06-30\"\n{}", extra_toml);
    let config = DashboardConfig::from_toml_str(&toml).unwrap();
    DashboardEngine::load(&SampleDataSource, &config).await.unwrap()
}

fn row_keys(engine: &DashboardEngine, kind: RecordKind, query: &str) -> Vec<String> {
    engine
        .list_view(kind, query)
        .table
        .rows()
        .iter()
        .map(|row| row.key.clone())
        .collect()
}

#[tokio::test]
async fn test_sophie_matches_one_collaborator() {
    let engine = sample_engine("").await;
    let list = engine.list_view(RecordKind::Collaborator, "sophie");
    let rows = list.table.rows();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].key, "1");
    assert!(rows[0].cells[0]
        .plain_text()
        .unwrap()
        .contains("Sophie Martin"));
}

#[tokio::test]
async fn test_cloud_matches_regardless_of_case() {
    let engine = sample_engine("").await;
    for query in ["cloud", "CLOUD", "Cloud"] {
        assert_eq!(
            row_keys(&engine, RecordKind::Certification, query),
            vec!["1", "2"],
            "query {:?}",
            query
        );
    }
}

#[tokio::test]
async fn test_empty_query_lists_everything() {
    let engine = sample_engine("").await;
    assert_eq!(row_keys(&engine, RecordKind::Certification, "").len(), 5);
    assert_eq!(row_keys(&engine, RecordKind::Collaborator, "").len(), 5);
}

#[tokio::test]
async fn test_no_match_shows_empty_state() {
    let engine = sample_engine("").await;
    let list = engine.list_view(RecordKind::Certification, "kubernetes");
    match &list.table.body {
        TableBody::Empty(empty) => {
            assert_eq!(empty.title, "Aucune certification trouvée");
            assert_eq!(empty.col_span, 7);
        }
        other => panic!("expected empty state, got {:?}", other),
    }

    let text = render_list(&list, OutputFormat::Text).unwrap();
    assert!(text.contains("Aucune certification trouvée"));
}

#[tokio::test]
async fn test_expiring_soon_label_counts_days() {
    // Azure Developer expires on 2024-07-10, ten days after "today"
    let engine = sample_engine("").await;
    let list = engine.list_view(RecordKind::Certification, "azure");
    let label = list.table.rows()[0].cells[5].plain_text().unwrap();
    assert!(label.contains("10"), "label was {:?}", label);
    assert_eq!(label, "Expire dans 10 jours");
}

#[tokio::test]
async fn test_derived_status_source_from_config() {
    let engine = sample_engine("[status]\nsource = \"derived\"\n").await;
    assert_eq!(engine.settings().status_source, StatusSource::Derived);

    // PMP expires on 2025-02-28, so stored and derived agree on 2024-06-30
    let list = engine.list_view(RecordKind::Certification, "pmp");
    assert_eq!(list.table.rows()[0].cells[5].plain_text().unwrap(), "Valide");
}

#[tokio::test]
async fn test_every_route_renders() {
    let engine = sample_engine("").await;
    let options = ViewOptions::default();

    assert!(matches!(engine.render("/", &options).page, Page::Dashboard(_)));
    assert!(matches!(
        engine.render("/collaborators", &options).page,
        Page::Collaborators { .. }
    ));
    assert!(matches!(
        engine.render("/certifications/", &options).page,
        Page::Certifications { .. }
    ));
    assert!(matches!(engine.render("/settings", &options).page, Page::Settings(_)));

    let missing = engine.render("/does-not-exist", &options);
    assert!(missing.layout.is_none());
    let text = render(&missing, OutputFormat::Text).unwrap();
    assert!(text.contains("404"));
}

#[tokio::test]
async fn test_json_output_is_valid() {
    let engine = sample_engine("").await;
    let screen = engine.render("/", &ViewOptions::default());
    let json = render(&screen, OutputFormat::Json).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    assert_eq!(value["page"]["page"], "dashboard");
    assert_eq!(value["path"], "/");
}

#[tokio::test]
async fn test_csv_output_has_header_and_rows() {
    let engine = sample_engine("").await;
    let screen = engine.render(
        "/collaborators",
        &ViewOptions {
            query: "it".to_string(),
            ..ViewOptions::default()
        },
    );
    let csv = render(&screen, OutputFormat::Csv).unwrap();
    let mut lines = csv.lines();
    assert!(lines.next().unwrap().starts_with("Collaborateur"));
    assert!(lines.count() >= 2);
}

#[derive(Default)]
struct RecordingActions {
    calls: Mutex<Vec<String>>,
}

impl RowActions for RecordingActions {
    fn renew(&self, certification_id: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("renew {}", certification_id));
    }

    fn manage_certifications(&self, collaborator_id: &str) {
        self.calls
            .lock()
            .unwrap()
            .push(format!("manage {}", collaborator_id));
    }
}

#[tokio::test]
async fn test_row_actions_reach_the_handler() {
    let engine = sample_engine("").await;
    let handler = RecordingActions::default();

    engine
        .dispatch(RecordKind::Certification, "2", RowAction::Renew, &handler)
        .unwrap();
    engine
        .dispatch(
            RecordKind::Collaborator,
            "4",
            RowAction::ManageCertifications,
            &handler,
        )
        .unwrap();

    assert_eq!(*handler.calls.lock().unwrap(), vec!["renew 2", "manage 4"]);
}

#[tokio::test]
async fn test_row_action_on_unknown_record_fails() {
    let engine = sample_engine("").await;
    let handler = RecordingActions::default();
    let err = engine
        .dispatch(RecordKind::Certification, "42", RowAction::View, &handler)
        .unwrap_err();
    assert!(matches!(err, DashboardError::UnknownRecord { .. }));
    assert!(handler.calls.lock().unwrap().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_search_bar_burst_drives_one_list_refresh() {
    let engine = sample_engine("").await;
    let seen = Arc::new(Mutex::new(Vec::new()));
    let sink = seen.clone();
    let mut bar = SearchBar::new(engine.settings().debounce)
        .with_on_search(move |query| sink.lock().unwrap().push(query));

    for partial in ["c", "cl", "clo", "clou", "cloud"] {
        bar.input(partial);
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
    tokio::time::sleep(Duration::from_millis(400)).await;

    let queries = seen.lock().unwrap().clone();
    assert_eq!(queries, vec!["cloud"]);
    assert_eq!(
        row_keys(&engine, RecordKind::Certification, &queries[0]),
        vec!["1", "2"]
    );
}
