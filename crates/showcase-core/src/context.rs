use showcase_config::Config;
use showcase_ghapi_interface::ApiService;

use crate::CoreModule;

pub struct CoreContext<'a> {
    pub config: &'a Config,
    pub core_module: &'a CoreModule,
    pub api_service: &'a (dyn ApiService + 'a),
}

#[cfg(any(test, feature = "testkit"))]
pub(crate) mod tests {
    use showcase_config::{
        ApiConfig, ApiDriver, ApiGitHubConfig, Config, LoggingConfig, PortfolioConfig,
        DEFAULT_EXCLUDED_REPOSITORIES, DEFAULT_FALLBACK_DESCRIPTION,
    };
    use showcase_ghapi_interface::MockApiService;

    use crate::{CoreContext, CoreModule};

    #[allow(dead_code)]
    pub struct CoreContextTest {
        pub config: Config,
        pub core_module: CoreModule,
        pub api_service: MockApiService,
    }

    impl CoreContextTest {
        #[allow(dead_code)]
        pub fn new() -> Self {
            Self {
                config: Config {
                    api: ApiConfig {
                        driver: ApiDriver::Null,
                        github: ApiGitHubConfig {
                            connect_timeout: 5000,
                            root_url: "http://localhost".into(),
                            token: String::new(),
                            revalidate_seconds: 0,
                        },
                    },
                    portfolio: PortfolioConfig {
                        per_page: 20,
                        max_entries: 10,
                        excluded_repositories: DEFAULT_EXCLUDED_REPOSITORIES
                            .iter()
                            .map(|s| s.to_string())
                            .collect(),
                        fallback_description: DEFAULT_FALLBACK_DESCRIPTION.into(),
                    },
                    logging: LoggingConfig { use_bunyan: false },
                    version: "0.0.0".into(),
                },
                core_module: CoreModule::builder().build(),
                api_service: MockApiService::new(),
            }
        }

        #[allow(dead_code)]
        pub fn as_context(&self) -> CoreContext {
            CoreContext {
                config: &self.config,
                core_module: &self.core_module,
                api_service: &self.api_service,
            }
        }
    }
}
