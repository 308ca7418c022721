use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::QaFlowResult;
use crate::server::api_server::ApiServer;
use crate::services::analysis_store::AnalysisStore;
use crate::services::analyzer::MockAnalyzer;
use crate::services::auth::StoreAuthProvider;
use crate::services::gate_evaluator::GateEvaluator;
use crate::services::gate_service::GateService;
use crate::structs::config::config::Config;

pub struct CommandRunner;

impl CommandRunner {
    pub async fn run_command(command: Commands) -> QaFlowResult<()> {
        let start = Instant::now();

        let result = match command {
            Commands::Serve { port, db } => Self::serve_command(port, db).await,
            Commands::Init => Self::init_command(),
            Commands::Token { user, db } => Self::token_command(&user, db),
            Commands::Gate { repository, branch, db } => Self::gate_command(&repository, &branch, db),
        };

        log::info!("⏱️  Command completed in {:.2}s", start.elapsed().as_secs_f64());
        result
    }

    async fn serve_command(port: Option<u16>, db: Option<String>) -> QaFlowResult<()> {
        let config = ConfigManager::load()?;
        let port = port.unwrap_or(config.server.port);
        let store = Self::open_store(&config, db)?;

        let service = Arc::new(GateService::new(
            Arc::clone(&store),
            Arc::new(MockAnalyzer),
            GateEvaluator::new(config.gate),
        ));
        let auth = Arc::new(StoreAuthProvider::new(store));

        let mut server = ApiServer::new(service, auth);
        server.run(port).await
    }

    fn init_command() -> QaFlowResult<()> {
        log::info!("🚀 Initializing qaflow configuration...");

        match ConfigManager::create_sample_config() {
            Ok(()) => {
                log::info!("✅ Configuration file created successfully!");
                log::info!("🔧 Edit the [gate] section to tune the thresholds.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn token_command(user: &str, db: Option<String>) -> QaFlowResult<()> {
        let config = ConfigManager::load()?;
        let store = Self::open_store(&config, db)?;

        let token = store.insert_token(user)?;
        log::info!("🔑 Token minted for user {}", user);
        println!("{}", token);
        Ok(())
    }

    fn gate_command(repository: &str, branch: &str, db: Option<String>) -> QaFlowResult<()> {
        let config = ConfigManager::load()?;
        let store = Self::open_store(&config, db)?;

        let service = GateService::new(
            store,
            Arc::new(MockAnalyzer),
            GateEvaluator::new(config.gate),
        );

        let result = service.quality_gate(repository, branch)?;
        println!("{}", serde_json::to_string_pretty(&result)?);

        // CI contract: non-zero exit on a failed gate
        if !result.passed {
            std::process::exit(1);
        }
        Ok(())
    }

    fn open_store(config: &Config, db: Option<String>) -> QaFlowResult<Arc<AnalysisStore>> {
        let db_path = db.unwrap_or_else(|| config.server.db_path.clone());
        log::info!("🗄️  Opening database: {}", db_path);
        Ok(Arc::new(AnalysisStore::open(Path::new(&db_path))?))
    }
}
