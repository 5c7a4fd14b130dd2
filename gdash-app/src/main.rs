//! gdash CLI
//!
//! Composition root for the dashboard: loads configuration, translation
//! tables and the game catalog, wires them into a [`Dashboard`] and renders
//! the resulting state as text.

use anyhow::{Context, Result};
use clap::Parser;
use gdash_app::{mechanic_options, render_card, Dashboard, Navigator};
use gdash_catalog::{load_catalog, load_scorm_data, merge_scorm_data, parse_base_url, Game};
use gdash_common::init_logging;
use gdash_config::{ConfigLoader, Settings};
use gdash_i18n::{load_tables, I18nConfig, Language, TranslationStore};
use std::path::PathBuf;
use tracing::info;
use url::Url;

#[derive(Debug, Parser)]
#[command(name = "gdash", version, about = "Bilingual educational-games dashboard")]
struct Cli {
    /// Path to the configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dashboard URL to mount, including any grade/lang query parameters
    #[arg(long, default_value = "https://dashboard.example.org/dashboard")]
    url: String,

    /// Select a grade tab after mounting (pushes a history entry)
    #[arg(long)]
    grade: Option<String>,

    /// Toggle the language after mounting (pushes a history entry)
    #[arg(long)]
    toggle_language: bool,

    /// Step back once through history before rendering
    #[arg(long)]
    back: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = match &cli.config {
        Some(path) => ConfigLoader::load_from_file(path)
            .with_context(|| format!("loading configuration from {}", path.display()))?,
        None => ConfigLoader::load().context("loading configuration")?,
    };

    init_logging(settings.logging.to_logging_config())
        .map_err(|err| anyhow::anyhow!(err))
        .context("initializing logging")?;

    let store = build_store(&settings)?;
    let (games, existing_games) = build_catalog(&settings)?;

    let start_url = Url::parse(&cli.url).with_context(|| format!("parsing URL {}", cli.url))?;
    let navigator = Navigator::new(start_url);

    let mut dashboard = Dashboard::new(store, navigator, games, existing_games, settings);
    dashboard.mount();
    info!(grade = %dashboard.selected_grade(), language = %dashboard.language(), "dashboard mounted");

    if let Some(grade) = &cli.grade {
        dashboard.select_grade(grade);
    }
    if cli.toggle_language {
        dashboard.toggle_language();
    }
    if cli.back && !dashboard.handle_back() {
        info!("no earlier history entry");
    }

    render(&dashboard);
    Ok(())
}

fn build_store(settings: &Settings) -> Result<TranslationStore> {
    let resources = load_tables(&settings.i18n.locales_dir).with_context(|| {
        format!(
            "loading translation tables from {}",
            settings.i18n.locales_dir.display()
        )
    })?;

    Ok(TranslationStore::new(I18nConfig {
        resources,
        fallback_language: Language::English,
        debug: settings.i18n.debug,
    })?)
}

fn build_catalog(settings: &Settings) -> Result<(Vec<Game>, Vec<Game>)> {
    let mut games = load_catalog(&settings.catalog.games_file).with_context(|| {
        format!(
            "loading game catalog from {}",
            settings.catalog.games_file.display()
        )
    })?;

    if let Some(scorm_file) = &settings.catalog.scorm_file {
        let base_url = parse_base_url(&settings.catalog.games_base_url)?;
        let scorm_data = load_scorm_data(scorm_file)
            .with_context(|| format!("loading scorm data from {}", scorm_file.display()))?;
        merge_scorm_data(&mut games, &scorm_data, &base_url);
    }

    let existing_games = match &settings.catalog.existing_games_file {
        Some(path) => load_catalog(path)
            .with_context(|| format!("loading existing games from {}", path.display()))?,
        None => Vec::new(),
    };

    Ok((games, existing_games))
}

fn render(dashboard: &Dashboard) {
    let store = dashboard.store();
    println!("{}", dashboard.current_url());
    println!("Language: {}", dashboard.language().display_name());

    let tabs: Vec<String> = Dashboard::grade_tabs()
        .iter()
        .map(|tab| {
            let label = dashboard.grade_tab_label(tab);
            if *tab == dashboard.selected_grade() {
                format!("[{label}]")
            } else {
                label
            }
        })
        .collect();
    println!("{}", tabs.join("  "));
    println!();

    let hide_details = dashboard.hide_details();
    let flags = &dashboard.settings().features;
    for game in dashboard.visible_games() {
        let card = render_card(game, store, flags, hide_details, false);
        print_card(&card);
    }

    if let Some(existing) = dashboard.existing_games() {
        println!();
        println!("== {} ==", store.t("existingGames"));
        for game in existing {
            let card = render_card(game, store, flags, false, true);
            print_card(&card);
            for option in mechanic_options(game, store) {
                println!("    * {}: {}", option.title, option.description);
            }
        }
    }
}

fn print_card(card: &gdash_app::GameCard) {
    let heading = card.title.as_deref().unwrap_or(&card.id);
    println!("- {heading} ({})", card.action_label);
    if let Some(tx_title) = &card.tx_title {
        println!("    {tx_title}");
    }
    if let Some(description) = &card.description {
        println!("    {description}");
    }
    if card.playable {
        if let Some(launch_url) = &card.launch_url {
            println!("    play: {launch_url}");
        }
    }
    if let Some(scorm_url) = &card.scorm_url {
        println!("    scorm: {scorm_url}");
    }
}
