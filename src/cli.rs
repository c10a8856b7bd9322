use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use serde_json::{json, Value};

use pf_core::catalog::CatalogKind;
use pf_core::config::AppConfig;
use pf_shell::bootstrap::{create_runtime, load_config, AppRuntime};
use pf_shell::commands::dto::CatalogQuery;
use pf_shell::commands::{catalog, i18n, pages, settings};

#[derive(Debug, Parser)]
#[command(
    name = "portfolio",
    about = "Query the portfolio's project and certificate listings",
    version
)]
pub struct Cli {
    /// TOML config file.
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Content root; overrides `[content] root`.
    #[arg(long, global = true)]
    pub content: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Projects listing as JSON.
    Projects(ListingArgs),

    /// Certificates listing as JSON.
    Certificates(ListingArgs),

    /// Category and facet options of a listing.
    Facets {
        #[arg(value_enum)]
        kind: Listing,
        #[arg(long)]
        lang: Option<String>,
    },

    /// Saved preferences.
    #[command(subcommand)]
    Settings(SettingsCommand),

    /// One UI string, e.g. `nav.projects`.
    Translate {
        key: String,
        #[arg(long)]
        lang: Option<String>,
    },

    /// Navigation menu.
    Nav {
        #[arg(long)]
        lang: Option<String>,
    },

    /// Supported languages.
    Languages,

    /// A site page document: `home`, `uses`, `terms` or `privacy`.
    Page {
        name: String,
        #[arg(long)]
        lang: Option<String>,
    },

    /// Site page names and their content folders.
    Pages,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Listing {
    Projects,
    Certificates,
}

impl From<Listing> for CatalogKind {
    fn from(listing: Listing) -> Self {
        match listing {
            Listing::Projects => CatalogKind::Projects,
            Listing::Certificates => CatalogKind::Certificates,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum SettingsCommand {
    Get,
    /// `light`, `dark`, `system` or `toggle`.
    Theme { value: String },
    /// `en` or `id`.
    Language { code: String },
    /// Replace the saved settings with a JSON document, e.g.
    /// `{"general":{"theme":"dark"}}`. Omitted sections take their defaults.
    Update { json: String },
}

#[derive(Debug, Clone, Default, Args)]
pub struct ListingArgs {
    #[arg(long)]
    pub lang: Option<String>,

    #[arg(long)]
    pub search: Option<String>,

    #[arg(long)]
    pub category: Option<String>,

    /// Repeatable; toggled in the given order.
    #[arg(long = "facet")]
    pub facets: Vec<String>,

    /// Number of "load more" clicks.
    #[arg(long = "load-more", default_value_t = 0)]
    pub load_more: u32,

    #[arg(long = "viewport-width")]
    pub viewport_width: Option<u32>,

    #[arg(long = "viewport-height")]
    pub viewport_height: Option<f64>,

    /// Visible card index under the pointer.
    #[arg(long)]
    pub hover: Option<usize>,

    /// Card centers for one scroll event, one per visible card. Cards
    /// above the viewport top have negative centers.
    #[arg(long = "scroll-center", num_args = 1.., allow_negative_numbers = true)]
    pub scroll_centers: Vec<f64>,
}

impl From<ListingArgs> for CatalogQuery {
    fn from(args: ListingArgs) -> Self {
        CatalogQuery {
            lang: args.lang,
            search: args.search,
            category: args.category,
            facets: args.facets,
            load_more: args.load_more,
            viewport_width: args.viewport_width,
            viewport_height: args.viewport_height,
            hover: args.hover,
            scroll_centers: args.scroll_centers,
        }
    }
}

impl Cli {
    /// Config file (or the empty config), with `--content` applied on top.
    pub fn app_config(&self) -> anyhow::Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => load_config(path.clone())?,
            None => AppConfig::empty(),
        };
        if let Some(content) = &self.content {
            config.content_root = content.clone();
        }
        Ok(config)
    }
}

pub async fn run(cli: Cli, config: AppConfig) -> anyhow::Result<Value> {
    let runtime = create_runtime(config)?;
    dispatch(&runtime, cli.command)
        .await
        .map_err(anyhow::Error::msg)
}

async fn dispatch(runtime: &AppRuntime, command: Commands) -> Result<Value, String> {
    match command {
        Commands::Projects(args) => catalog::get_projects(runtime, args.into()).await,
        Commands::Certificates(args) => catalog::get_certificates(runtime, args.into()).await,
        Commands::Facets { kind, lang } => {
            catalog::get_facets(runtime, kind.into(), lang.as_deref()).await
        }
        Commands::Settings(SettingsCommand::Get) => settings::get_settings(runtime).await,
        Commands::Settings(SettingsCommand::Theme { value }) => {
            settings::set_theme(runtime, &value).await
        }
        Commands::Settings(SettingsCommand::Language { code }) => {
            settings::set_language(runtime, &code).await
        }
        Commands::Settings(SettingsCommand::Update { json }) => {
            let document: Value = serde_json::from_str(&json)
                .map_err(|e| format!("Invalid settings JSON: {}", e))?;
            settings::update_settings(runtime, document).await?;
            settings::get_settings(runtime).await
        }
        Commands::Translate { key, lang } => i18n::translate(runtime, &key, lang.as_deref()).await,
        Commands::Nav { lang } => i18n::get_nav(runtime, lang.as_deref()).await,
        Commands::Languages => Ok(i18n::list_languages()),
        Commands::Page { name, lang } => pages::get_page(runtime, &name, lang.as_deref()).await,
        Commands::Pages => Ok(pages::list_pages()),
    }
}

/// Body printed to stderr when the program fails before or during a command.
pub fn error_envelope(err: &anyhow::Error) -> Value {
    json!({ "status": "error", "error": format!("{err:#}") })
}
