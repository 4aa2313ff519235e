use std::io::Write;

use async_trait::async_trait;
use clap::Parser;
use showcase_config::Config;

use crate::{
    commands::{Command, CommandContext},
    Result,
};

const MASKED_VALUE: &str = "<redacted>";

/// Show the effective configuration
#[derive(Parser)]
pub(crate) struct ConfigCommand;

#[async_trait]
impl Command for ConfigCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        writeln!(ctx.writer.write().await, "{:#?}", masked(&ctx.config))?;

        Ok(())
    }
}

fn masked(config: &Config) -> Config {
    let mut config = config.clone();
    if !config.api.github.token.is_empty() {
        config.api.github.token = MASKED_VALUE.into();
    }

    config
}

#[cfg(test)]
mod tests {
    use crate::testutils::{test_command, CommandContextTest};

    #[tokio::test]
    async fn token_is_masked() {
        let mut ctx = CommandContextTest::new();
        ctx.config.api.github.token = "ghp_supersecret".into();

        let output = test_command(ctx, &["config"]).await;
        assert!(output.contains("<redacted>"));
        assert!(!output.contains("ghp_supersecret"));
        assert!(output.contains("max_entries: 10"));
    }
}
