use certify_hub::adapters::render::{self, OutputFormat};
use certify_hub::app::actions::{ActionMenu, NoopActions};
use certify_hub::app::browse::SearchSession;
use certify_hub::app::views::{certifications, collaborators};
use certify_hub::config::cli::Command;
use certify_hub::config::toml_config::DEFAULT_CONFIG_FILE;
use certify_hub::domain::model::RecordKind;
use certify_hub::domain::ports::{ConfigProvider, DataSource};
use certify_hub::utils::error::ErrorSeverity;
use certify_hub::utils::logger::{self, LogFormat};
use certify_hub::utils::validation::Validate;
use certify_hub::{
    CliConfig, DashboardConfig, DashboardEngine, FileDataSource, SampleDataSource, ViewOptions,
};
use clap::Parser;
use tokio::io::{AsyncBufReadExt, BufReader};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    // 載入配置檔 (日誌尚未初始化，錯誤直接輸出)
    let mut config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(1);
        }
    };

    // 初始化日誌
    logger::init_logger(
        LogFormat::from_json_flag(cli.json_logs || config.json_logs()),
        cli.verbose,
        config.log_level(),
    );

    tracing::info!("Starting certify-hub");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    cli.apply_overrides(&mut config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&cli, &config).await {
        tracing::error!(
            "❌ certify-hub failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());

        // 根據錯誤嚴重程度決定退出碼
        let exit_code = match e.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        };
        if exit_code > 0 {
            std::process::exit(exit_code);
        }
    }

    Ok(())
}

fn load_config(cli: &CliConfig) -> certify_hub::Result<DashboardConfig> {
    match &cli.config {
        Some(path) => DashboardConfig::from_file(path),
        None if std::path::Path::new(DEFAULT_CONFIG_FILE).exists() => {
            DashboardConfig::from_file(DEFAULT_CONFIG_FILE)
        }
        None => Ok(DashboardConfig::default()),
    }
}

async fn run(cli: &CliConfig, config: &DashboardConfig) -> certify_hub::Result<()> {
    let source: Box<dyn DataSource> = match config.data_path() {
        Some(path) => Box::new(FileDataSource::new(path)),
        None => Box::new(SampleDataSource),
    };
    let engine = DashboardEngine::load(source.as_ref(), config).await?;

    match &cli.command {
        Command::Show {
            route,
            query,
            tab,
            live_stats,
        } => {
            let options = ViewOptions {
                query: query.clone(),
                tab: *tab,
                live_stats: *live_stats,
            };
            let screen = engine.render(route, &options);
            println!("{}", render::render(&screen, config.output_format())?);
        }
        Command::Browse { list } => {
            browse(&engine, (*list).into(), config.output_format()).await?;
        }
        Command::Action { list, id, action } => {
            let kind: RecordKind = (*list).into();
            engine.dispatch(kind, id, *action, &NoopActions)?;
            let menu = ActionMenu::for_record(kind, id);
            print!("{}", render::render_menu(&menu));
            println!(
                "→ « {} » sélectionné pour {} {} (aucune modification)",
                action.label(kind),
                kind,
                id
            );
        }
    }

    Ok(())
}

/// Each stdin line is the new content of the search box, as if typed.
/// `:clear` presses the clear button.
async fn browse(
    engine: &DashboardEngine,
    kind: RecordKind,
    format: OutputFormat,
) -> certify_hub::Result<()> {
    let placeholder = match kind {
        RecordKind::Certification => certifications::SEARCH_PLACEHOLDER,
        RecordKind::Collaborator => collaborators::SEARCH_PLACEHOLDER,
    };
    let mut session = SearchSession::new(engine.settings().debounce, placeholder);

    tracing::info!(
        "🔍 {} (debounce {:?}, Ctrl-D to quit)",
        session.search_bar().placeholder(),
        engine.settings().debounce
    );
    println!("{}", render::render_list(&engine.list_view(kind, ""), format)?);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        tokio::select! {
            line = lines.next_line() => match line? {
                Some(line) => session.input(line),
                None => break,
            },
            Some(query) = session.next_query() => {
                println!("{}", render::render_list(&engine.list_view(kind, &query), format)?);
            }
        }
    }

    // stdin closed: show what is still queued or waiting on the timer
    for query in session.finish().await {
        println!("{}", render::render_list(&engine.list_view(kind, &query), format)?);
    }

    Ok(())
}
