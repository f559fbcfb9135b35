use anyhow::Result;

use crate::config::AppConfig;
use crate::services::CorpusLoader;

pub async fn handle_inspect_command(config: AppConfig) -> Result<()> {
    let loaded = CorpusLoader::new(&config.data_dir).load().await?;
    let report = &loaded.report;

    println!("Data directory: {}", config.data_dir.display());
    println!("  Files seen:     {}", report.files_seen);
    println!("  Files loaded:   {}", report.files_loaded);
    println!("  Files skipped:  {}", report.files_skipped);
    println!("  Rows accepted:  {}", report.rows_accepted);
    println!("  Rows rejected:  {}", report.rows_rejected);
    println!("  Duplicates:     {}", report.duplicates);
    println!("  Unique entries: {}", loaded.corpus.len());

    if loaded.corpus.is_empty() {
        println!();
        println!("No questions loaded. Add CSV files with 'question' and 'answer' columns.");
    }

    Ok(())
}
