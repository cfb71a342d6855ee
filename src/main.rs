use clap::{Parser, Subcommand};
use insights_press::articles::ArticleStore;
use insights_press::generate::{self, Content};
use insights_press::{case_study, config, logging, output};
use std::path::PathBuf;

fn version_string() -> &'static str {
    let on_tag = env!("PRESS_ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("PRESS_GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "insights-press")]
#[command(about = "Static site generator for an insights blog and case-study showcase")]
#[command(long_about = "\
Static site generator for an insights blog and case-study showcase

Articles and case studies are compiled into the binary. The content
directory only holds optional site configuration and static assets.

Content structure:

  content/
  ├── config.toml        # Site config (optional, overrides stock defaults)
  └── assets/            # Static assets (favicon, images) → copied to <output>/assets/

Article markup:
  ## Heading            ### Subheading
  - list item           1. numbered item
  *emphasized line*     ---  (separator)
  **bold**              [link text](https://...)

Run 'insights-press gen-config' to generate a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Content directory
    #[arg(long, default_value = "content", global = true)]
    source: PathBuf,

    /// Output directory
    #[arg(long, default_value = "dist", global = true)]
    output: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render every article, case-study layout and showcase page
    Build,
    /// Validate config and datasets without building
    Check,
    /// Print the rendered HTML body of one article
    Article {
        /// Article slug, e.g. how-to-pick-your-first-ai-workflow
        slug: String,
    },
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Build => {
            let site_config = config::load_config(&cli.source)?;
            println!("==> Generating HTML → {}", cli.output.display());
            let report =
                generate::generate(&site_config, Content::bundled(), &cli.source, &cli.output)?;
            output::print_generate_output(&report);
            println!("==> Build complete: {}", cli.output.display());
        }
        Command::Check => {
            println!("==> Checking {}", cli.source.display());
            let site_config = config::load_config(&cli.source)?;
            let records = case_study::bundled();
            if !records.iter().any(|r| r.id == site_config.case_studies.showcase) {
                return Err(
                    generate::GenerateError::CaseStudyNotFound(site_config.case_studies.showcase)
                        .into(),
                );
            }
            output::print_check_output(ArticleStore::bundled(), records, &site_config);
            println!("==> Content is valid");
        }
        Command::Article { slug } => {
            let html = generate::render_article_fragment(ArticleStore::bundled(), &slug)?;
            println!("{}", html);
        }
        Command::GenConfig => {
            print!("{}", config::stock_config_toml());
        }
    }

    Ok(())
}
