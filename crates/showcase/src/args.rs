use std::{sync::Arc, time::Duration};

use clap::Parser;
use showcase_config::{ApiDriver, Config};
use showcase_core::CoreModule;
use showcase_ghapi_github::{CachedApiService, GithubApiService};
use showcase_ghapi_interface::ApiService;
use showcase_ghapi_null::NullApiService;
use tokio::sync::RwLock;
use tracing::info;

use crate::{
    commands::{Command, CommandContext, SubCommand},
    Result,
};

#[derive(Parser)]
#[command(about = None, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    cmd: SubCommand,
}

pub struct CommandExecutor;

impl CommandExecutor {
    pub fn parse_args(config: Config, args: Args) -> Result<()> {
        let sync = |config: Config, args: Args| async move {
            let core_module = CoreModule::builder().build();
            let api_service = build_api_service(&config)?;

            let ctx = CommandContext {
                config,
                api_service,
                core_module,
                writer: Arc::new(RwLock::new(std::io::stdout())),
            };

            Self::parse_args_async(args, ctx).await
        };

        tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()?
            .block_on(sync(config, args))
    }

    pub(crate) async fn parse_args_async(args: Args, ctx: CommandContext) -> Result<()> {
        args.cmd.execute(ctx).await
    }
}

fn build_api_service(config: &Config) -> Result<Box<dyn ApiService + Send + Sync + 'static>> {
    if config.api.driver == ApiDriver::Null {
        info!("Using NullApiService API driver");
        return Ok(Box::new(NullApiService::new()));
    }

    let github = GithubApiService::new(config.clone())?;
    let revalidate_seconds = config.api.github.revalidate_seconds;
    if revalidate_seconds == 0 {
        info!("Using GithubApiService API driver");
        Ok(Box::new(github))
    } else {
        info!(
            revalidate_seconds = revalidate_seconds,
            message = "Using GithubApiService API driver with revalidation cache"
        );
        Ok(Box::new(CachedApiService::new(
            github,
            Duration::from_secs(revalidate_seconds),
        )))
    }
}
