//! webwizard CLI entrypoint
//! Parses command-line arguments and drives the wizard flows.
#![deny(unsafe_code)]

use std::path::PathBuf;

// External imports (alphabetized)
use anyhow::Context;
use clap::Parser;
use reqwest::Url;
use tracing::{Level, info};
use tracing_subscriber::EnvFilter;

use webwizard::application::{
    DeployWebsiteRequest, GenerateWebsiteRequest, deploy_website, generate_website,
};
use webwizard::client::{HttpWizardBackend, RequestOrchestrator};
use webwizard::core::Settings;
use webwizard::wizard::StyleTemplate;

#[derive(Parser)]
#[command(name = "webwizard")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the generation server (overrides settings)
    #[arg(long, global = true)]
    base_url: Option<Url>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(clap::Subcommand, Debug)]
pub enum Commands {
    /// Walk the wizard end to end and generate a website
    Generate {
        /// Website type (cv, blog, portfolio, landing-page, ...)
        #[arg(long)]
        website_type: String,
        /// Content text for the website
        #[arg(long, conflicts_with = "content_file")]
        content: Option<String>,
        /// Read the content from a file instead
        #[arg(long)]
        content_file: Option<PathBuf>,
        /// Style template key
        #[arg(long, conflicts_with = "random_style")]
        style: Option<String>,
        /// Pick the style template at random
        #[arg(long)]
        random_style: bool,
        /// Override the auto-filled style description
        #[arg(long)]
        style_description: Option<String>,
        /// OpenRouter API token (falls back to settings / WEBWIZARD_API_TOKEN)
        #[arg(long)]
        api_token: Option<String>,
        /// Accept the terms and conditions
        #[arg(long)]
        accept_terms: bool,
        /// Profile photo for CV websites
        #[arg(long)]
        photo: Option<PathBuf>,
        /// Where to save the generated HTML
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Deploy a generated website to Vercel
    Deploy {
        /// Vercel API token
        #[arg(long)]
        vercel_token: String,
        /// HTML file to upload; omit to deploy the server's copy
        #[arg(long)]
        html_file: Option<PathBuf>,
    },
    /// Fetch the previously generated page from the server
    Preview {
        /// Where to save the page
        #[arg(long, default_value = "generated-website.html")]
        output: PathBuf,
    },
    /// List the style templates and their palettes
    Styles,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging with default level INFO
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive(Level::INFO.into()))
        .init();

    let cli = Cli::parse();

    let mut settings = Settings::load().context("Failed to load settings")?;
    if let Some(base_url) = &cli.base_url {
        settings.base_url = base_url.clone();
    }

    match &cli.command {
        Commands::Generate {
            website_type,
            content,
            content_file,
            style,
            random_style,
            style_description,
            api_token,
            accept_terms,
            photo,
            output,
        } => {
            run_generate(GenerateParams {
                settings: &settings,
                website_type,
                content,
                content_file,
                style,
                random_style: *random_style,
                style_description,
                api_token,
                accept_terms: *accept_terms,
                photo,
                output,
            })
            .await?
        }
        Commands::Deploy {
            vercel_token,
            html_file,
        } => run_deploy(&settings, vercel_token, html_file).await?,
        Commands::Preview { output } => run_preview(&settings, output).await?,
        Commands::Styles => run_styles(),
    }
    Ok(())
}

/// Parameters for the generate command
struct GenerateParams<'a> {
    settings: &'a Settings,
    website_type: &'a str,
    content: &'a Option<String>,
    content_file: &'a Option<PathBuf>,
    style: &'a Option<String>,
    random_style: bool,
    style_description: &'a Option<String>,
    api_token: &'a Option<String>,
    accept_terms: bool,
    photo: &'a Option<PathBuf>,
    output: &'a Option<PathBuf>,
}

/// Runtime handler for the generate command
async fn run_generate(params: GenerateParams<'_>) -> anyhow::Result<()> {
    let content = match (params.content, params.content_file) {
        (Some(text), _) => text.clone(),
        (None, Some(path)) => tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read content file {}", path.display()))?,
        (None, None) => anyhow::bail!("Provide the content via --content or --content-file"),
    };

    // An absent token is passed through empty so the submission check can
    // enumerate it alongside the other missing items.
    let api_token = params
        .api_token
        .clone()
        .or_else(|| params.settings.api_token.clone())
        .unwrap_or_default();

    let request = GenerateWebsiteRequest {
        website_type: params.website_type.to_string(),
        content,
        style: params.style.clone(),
        random_style: params.random_style,
        style_description: params.style_description.clone(),
        api_token,
        accept_terms: params.accept_terms,
        photo_path: params.photo.clone(),
        output_path: params.output.clone(),
    };

    info!(website_type = %request.website_type, "Generating website");
    let report = generate_website(params.settings, request)
        .await
        .context("Failed to generate website")?;

    println!("✅ Website generated ({} bytes)", report.html_bytes);
    println!("   Style: {}", report.style);
    println!("   Detected language: {}", report.language);
    if let Some(path) = &report.output_path {
        println!("   Saved to: {}", path.display());
    }
    Ok(())
}

/// Runtime handler for the deploy command
async fn run_deploy(
    settings: &Settings,
    vercel_token: &str,
    html_file: &Option<PathBuf>,
) -> anyhow::Result<()> {
    info!("Deploying website");
    let report = deploy_website(
        settings,
        DeployWebsiteRequest {
            vercel_token: vercel_token.to_string(),
            html_path: html_file.clone(),
        },
    )
    .await
    .context("Failed to deploy website")?;

    println!("✅ Website deployed!");
    println!("   {}", report.url);
    Ok(())
}

/// Runtime handler for the preview command
async fn run_preview(settings: &Settings, output: &PathBuf) -> anyhow::Result<()> {
    let backend = std::sync::Arc::new(HttpWizardBackend::new(settings.base_url.clone()));
    let orchestrator = RequestOrchestrator::new(backend);
    let html = orchestrator
        .fetch_preview()
        .await
        .context("Failed to fetch preview")?;
    tokio::fs::write(output, &html)
        .await
        .with_context(|| format!("Failed to write {}", output.display()))?;

    println!("✅ Preview saved to {}", output.display());
    Ok(())
}

/// Runtime handler for the styles command
fn run_styles() {
    println!("Available style templates:");
    for style in StyleTemplate::all() {
        let profile = style.profile();
        println!("  • {}", style.key());
        println!("    {}", profile.description);
        println!(
            "    palette: {} / {} / {} (text {}, accent {})",
            profile.palette.primary,
            profile.palette.secondary,
            profile.palette.background,
            profile.palette.text,
            profile.palette.accent,
        );
    }
}
