use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;
use crate::config::config_manager::ConfigManager;
use crate::enums::commands::Commands;
use crate::errors::{ValwatchError, ValwatchResult};
use crate::logger::batch_logger::BatchLogger;
use crate::services::api_client::ApiClient;
use crate::services::batch_poller::BatchPoller;
use crate::services::report_exporter::ReportExporter;
use crate::structs::config::config::Config;
use crate::structs::progress::Progress;
use crate::structs::validation_batch::ValidationBatch;
use crate::traits::batch_source::BatchSource;

pub struct CommandRunner {
    start_time: Option<Instant>,
}

impl CommandRunner {
    pub fn new() -> Self {
        Self { start_time: None }
    }

    pub async fn run_command(&mut self, command: Commands) -> ValwatchResult<()> {
        self.start_time = Some(Instant::now());

        let result = match command {
            Commands::Init => self.init_command(),
            Commands::Watch { batch } => self.watch_command(batch).await,
            Commands::Report { batch, output, include_files } => {
                self.report_command(batch, output, include_files).await
            }
            Commands::Summary { batch } => self.summary_command(batch).await,
            Commands::Logs { page, per_page, search } => {
                self.logs_command(page, per_page, search).await
            }
            Commands::Active => self.active_command().await,
            Commands::Validate => self.validate_command(),
        };

        if let Some(start) = self.start_time {
            let duration = start.elapsed();
            log::info!("⏱️  Command completed in {:.2}s", duration.as_secs_f64());
        }

        result
    }

    fn init_command(&self) -> ValwatchResult<()> {
        log::info!("🚀 Initializing valwatch configuration...");

        match ConfigManager::create_sample_config() {
            Ok(()) => {
                log::info!("✅ Configuration file created successfully!");
                log::info!("🔧 Run 'valwatch validate' to check your configuration.");
                Ok(())
            }
            Err(e) => {
                log::error!("❌ Failed to create configuration: {}", e);
                Err(e)
            }
        }
    }

    fn validate_command(&self) -> ValwatchResult<()> {
        log::info!("🔍 Validating valwatch configuration...");

        let config = match ConfigManager::load() {
            Ok(config) => {
                log::info!("✅ Configuration file loaded successfully");
                config
            }
            Err(e) => {
                log::error!("❌ Failed to load configuration: {}", e);
                log::error!("💡 Run 'valwatch init' to create a configuration file.");
                return Err(e);
            }
        };

        ConfigManager::validate_config(&config)?;
        log::info!("✅ Configuration is valid");
        log::info!("🌐 API base URL: {}", config.api.base_url);
        log::info!(
            "⏲️ Polling: {}ms base, {}ms cap, {}ms floor, ±{:.0}% jitter",
            config.polling.base_delay_ms,
            config.polling.max_delay_ms,
            config.polling.min_delay_ms,
            config.polling.jitter_ratio * 100.0
        );

        Ok(())
    }

    async fn watch_command(&self, batch_id: i64) -> ValwatchResult<()> {
        let (config, client) = self.load_client()?;
        let poller = BatchPoller::with_config(Arc::new(client), config.polling.clone());

        log::info!("👀 Watching batch {}...", batch_id);

        let final_batch = poller
            .run(
                Some(batch_id),
                |snapshot, error| match error {
                    Some(error) => BatchLogger::print_poll_error(error, snapshot),
                    None => {
                        if let Some(batch) = snapshot {
                            let progress =
                                Progress::from_counts(batch.completed_prompts, batch.total_prompts);
                            BatchLogger::print_progress(batch, progress.as_ref());
                        }
                        if let Some(hint) = poller.next_delay_hint(batch_id) {
                            log::debug!("⏲️ Next poll in ~{}ms", hint.as_millis());
                        }
                    }
                },
                |batch| {
                    log::info!("🏁 Batch {} reached terminal state: {}", batch.id, batch.status.label());
                },
            )
            .await;

        match final_batch {
            Some(batch) => {
                BatchLogger::print_prompt_results(&batch);
                BatchLogger::print_batch_summary(&batch);
                Ok(())
            }
            None => Err(ValwatchError::batch_error(
                batch_id,
                "watch",
                "polling stopped before a terminal state was observed",
            )),
        }
    }

    async fn report_command(
        &self,
        batch_id: i64,
        output: Option<String>,
        include_files: bool,
    ) -> ValwatchResult<()> {
        let (config, client) = self.load_client()?;

        log::info!("📄 Generating report for batch {}...", batch_id);
        let batch = self.fetch_batch(&client, batch_id).await?;

        let files = if include_files || config.export.include_files {
            let file_ids: Vec<i64> = batch.file_ids.iter().map(|f| f.id).collect();
            log::info!("📁 Fetching content for {} file(s)...", file_ids.len());
            Some(
                client
                    .fetch_file_contents(&file_ids)
                    .await
                    .map_err(ValwatchError::from)?,
            )
        } else {
            None
        };

        let output_path = self.resolve_output_path(&config, &batch, output);
        let saved = ReportExporter::export(&batch, files.as_deref(), output_path.as_deref())?;

        log::info!("💾 Report saved to: {}", saved.display());
        Ok(())
    }

    async fn summary_command(&self, batch_id: i64) -> ValwatchResult<()> {
        let (_, client) = self.load_client()?;

        let batch = self.fetch_batch(&client, batch_id).await?;
        BatchLogger::print_prompt_results(&batch);
        BatchLogger::print_batch_summary(&batch);

        Ok(())
    }

    async fn logs_command(&self, page: u32, per_page: u32, search: Option<String>) -> ValwatchResult<()> {
        let (_, client) = self.load_client()?;

        let log_page = client
            .fetch_logs(page, per_page, search.as_deref())
            .await
            .map_err(ValwatchError::from)?;

        BatchLogger::print_log_page(&log_page);
        Ok(())
    }

    async fn active_command(&self) -> ValwatchResult<()> {
        let (_, client) = self.load_client()?;

        let batches = client
            .fetch_active_batches()
            .await
            .map_err(ValwatchError::from)?;

        BatchLogger::print_active_batches(&batches);
        Ok(())
    }

    fn load_client(&self) -> ValwatchResult<(Config, ApiClient)> {
        let config = ConfigManager::load()?;
        ConfigManager::validate_config(&config)?;
        let client = ApiClient::from_config(&config.api)?;
        Ok((config, client))
    }

    async fn fetch_batch(&self, client: &ApiClient, batch_id: i64) -> ValwatchResult<ValidationBatch> {
        client.fetch_batch(batch_id).await.map_err(|e| {
            ValwatchError::batch_error(batch_id, "fetch", &e.to_string())
        })
    }

    fn resolve_output_path(
        &self,
        config: &Config,
        batch: &ValidationBatch,
        output: Option<String>,
    ) -> Option<PathBuf> {
        match output {
            Some(path) => Some(PathBuf::from(path)),
            None => config
                .export
                .output_dir
                .as_ref()
                .map(|dir| PathBuf::from(dir).join(ReportExporter::default_filename(batch.id))),
        }
    }
}

impl Default for CommandRunner {
    fn default() -> Self {
        Self::new()
    }
}
