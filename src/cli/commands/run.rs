use crate::cli::args::{Cli, OutputFormat};
use crate::core::PipelineSummary;
use crate::engine::SignerEngine;
use crate::services::{
    ConsolePipelineReporter, DefaultPipelineConfig, DigestSettings, StandardDigestProvider,
};
use anyhow::{Context, Result};

/// Build the engine described by the command line flags
pub fn build_engine(
    cli: &Cli,
) -> SignerEngine<StandardDigestProvider, DefaultPipelineConfig, ConsolePipelineReporter> {
    let settings = DigestSettings::from_millis(cli.fast_latency_ms, cli.slow_latency_ms);
    let config = DefaultPipelineConfig::new()
        .with_source_buffer_size(cli.source_buffer)
        .with_handoff_buffer_size(cli.handoff_buffer)
        .with_progress_reporting(!cli.quiet);
    let reporter = if cli.quiet {
        ConsolePipelineReporter::quiet()
    } else {
        ConsolePipelineReporter::new()
    };

    SignerEngine::new(
        StandardDigestProvider::with_settings(settings),
        config,
        reporter,
    )
}

/// Execute the signer pipeline over the values given on the command line
pub async fn execute_run(cli: &Cli) -> Result<PipelineSummary> {
    let engine = build_engine(cli);
    engine
        .run(cli.values.clone())
        .await
        .context("signer pipeline failed")
}

/// Render the final value and elapsed seconds
pub fn render_summary(summary: &PipelineSummary, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(format!("{}\n{} sec", summary.output, summary.elapsed_secs)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(summary).context("failed to serialize summary")
        }
    }
}
