use super::{format, utils};
use anyhow::Result;
use sift_core::session::{AnalysisSessionRepository, SessionQuery};
use sift_infrastructure::AsyncDirAnalysisSessionRepository;
use std::path::PathBuf;

pub async fn run(project: Option<PathBuf>, json: bool) -> Result<()> {
    let config = utils::load_config()?;
    let project_root = utils::resolve_project_root(project, &config.analysis)?;
    let repository = AsyncDirAnalysisSessionRepository::new(&config);

    let query = SessionQuery::from_list(repository.list_sessions(&project_root).await);

    if json {
        println!("{}", serde_json::to_string_pretty(&query)?);
        return Ok(());
    }

    match query {
        SessionQuery::Found { data } if data.is_empty() => {
            println!(
                "No analysis sessions in {}",
                repository.analysis_dir(&project_root).display()
            );
        }
        SessionQuery::Found { data } => {
            for summary in &data {
                println!("{}", format::summary_row(summary));
            }
        }
        SessionQuery::NotFound { id } => anyhow::bail!("Not found: {}", id),
        SessionQuery::Failed { message } => anyhow::bail!(message),
    }

    Ok(())
}
