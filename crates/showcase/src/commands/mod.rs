//! Commands.

use std::{io::Write, sync::Arc};

use async_trait::async_trait;
use clap::Subcommand;
use showcase_config::Config;
use showcase_core::{CoreContext, CoreModule};
use showcase_ghapi_interface::ApiService;
use tokio::sync::RwLock;

use self::{config::ConfigCommand, projects::ProjectsCommand};
use crate::Result;

mod config;
mod projects;

pub(crate) struct CommandContext {
    pub config: Config,
    pub api_service: Box<dyn ApiService + Send + Sync>,
    pub core_module: CoreModule,
    pub writer: Arc<RwLock<dyn Write + Send + Sync>>,
}

impl CommandContext {
    pub fn as_core_context(&self) -> CoreContext {
        CoreContext {
            config: &self.config,
            core_module: &self.core_module,
            api_service: self.api_service.as_ref(),
        }
    }
}

#[async_trait]
pub(crate) trait Command {
    async fn execute(self, ctx: CommandContext) -> Result<()>;
}

/// Command
#[derive(Subcommand)]
pub(crate) enum SubCommand {
    Projects(ProjectsCommand),
    Config(ConfigCommand),
}

#[async_trait]
impl Command for SubCommand {
    async fn execute(self, ctx: CommandContext) -> Result<()> {
        match self {
            Self::Projects(sub) => sub.execute(ctx).await,
            Self::Config(sub) => sub.execute(ctx).await,
        }
    }
}
