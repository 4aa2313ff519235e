use std::{
    fs::File,
    io::{BufWriter, Write},
    path::PathBuf,
};

use anyhow::anyhow;
use async_trait::async_trait;
use clap::{Parser, ValueEnum};
use shaku::HasComponent;
use showcase_core::use_cases::projects::BuildPortfolioInterface;
use showcase_models::{AccountName, PortfolioEntry};
use time::format_description::well_known::Rfc3339;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum OutputFormat {
    Text,
    Json,
}

/// Show the portfolio projects of a GitHub account
#[derive(Parser)]
pub(crate) struct ProjectsCommand {
    /// GitHub username (e.g. `octocat`)
    username: AccountName,
    /// Output format
    #[clap(short, long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
    /// Maximum number of projects, overrides the configured cap
    #[clap(short, long)]
    limit: Option<usize>,
    /// Output file, stdout if not precised
    #[clap(short, long)]
    output_file: Option<PathBuf>,
}

#[async_trait]
impl Command for ProjectsCommand {
    async fn execute(self, mut ctx: CommandContext) -> Result<()> {
        if let Some(limit) = self.limit {
            if limit == 0 {
                return Err(anyhow!("--limit must be at least 1"));
            }
            ctx.config.portfolio.max_entries = limit;
        }

        let build_portfolio: &dyn BuildPortfolioInterface = ctx.core_module.resolve_ref();
        let entries = build_portfolio
            .run(&ctx.as_core_context(), &self.username)
            .await;

        let rendered = match self.format {
            OutputFormat::Json => format!("{}\n", serde_json::to_string_pretty(&entries)?),
            OutputFormat::Text => render_text(&entries)?,
        };

        if let Some(file_path) = self.output_file {
            let mut writer = BufWriter::new(File::create(file_path)?);
            writer.write_all(rendered.as_bytes())?;
            writer.flush()?;
        } else {
            write!(ctx.writer.write().await, "{}", rendered)?;
        }

        Ok(())
    }
}

fn render_text(entries: &[PortfolioEntry]) -> Result<String> {
    use std::fmt::Write;

    let mut output = String::new();
    if entries.is_empty() {
        writeln!(output, "No project found.")?;
        return Ok(output);
    }

    for entry in entries {
        let owner_kind = if entry.is_org { "organization" } else { "user" };

        writeln!(output, "- {} ({} {})", entry.name, owner_kind, entry.owner)?;
        writeln!(output, "  {}", entry.description)?;
        writeln!(output, "  code: {}", entry.url)?;
        if let Some(demo_url) = &entry.demo_url {
            writeln!(output, "  demo: {}", demo_url)?;
        }
        if let Some(language) = &entry.language {
            writeln!(output, "  language: {}", language)?;
        }
        if !entry.topics.is_empty() {
            writeln!(output, "  topics: {}", entry.topics.join(", "))?;
        }
        writeln!(
            output,
            "  stars: {}, forks: {}, updated: {}",
            entry.stars,
            entry.forks,
            entry.updated_at.format(&Rfc3339)?
        )?;
    }

    Ok(output)
}
