use super::{format, utils};
use anyhow::Result;
use clap::ValueEnum;
use sift_core::render::{outline, render};
use sift_core::session::{
    AnalysisSessionRepository, SessionDetail, SessionQuery, StructuredArtifact,
};
use sift_infrastructure::AsyncDirAnalysisSessionRepository;
use std::path::PathBuf;

/// One artifact of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Section {
    Discussion,
    Conclusions,
    Explorations,
    Perspectives,
}

impl Section {
    const ALL: [Section; 4] = [
        Section::Discussion,
        Section::Conclusions,
        Section::Explorations,
        Section::Perspectives,
    ];

    fn title(self) -> &'static str {
        match self {
            Section::Discussion => "Discussion",
            Section::Conclusions => "Conclusions",
            Section::Explorations => "Explorations",
            Section::Perspectives => "Perspectives",
        }
    }

    fn artifact(self, detail: &SessionDetail) -> Option<&StructuredArtifact> {
        match self {
            Section::Discussion => None,
            Section::Conclusions => detail.conclusions.as_ref(),
            Section::Explorations => detail.explorations.as_ref(),
            Section::Perspectives => detail.perspectives.as_ref(),
        }
    }
}

pub async fn run(
    session_id: &str,
    project: Option<PathBuf>,
    json: bool,
    section: Option<Section>,
) -> Result<()> {
    let config = utils::load_config()?;
    let project_root = utils::resolve_project_root(project, &config.analysis)?;
    let repository = AsyncDirAnalysisSessionRepository::new(&config);

    let query = SessionQuery::from_lookup(
        session_id,
        repository.find_session(&project_root, session_id).await,
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&query)?);
        return Ok(());
    }

    match query {
        SessionQuery::Found { data } => {
            print!("{}", describe(&data, section));
            Ok(())
        }
        SessionQuery::NotFound { id } => anyhow::bail!("Session not found: {}", id),
        SessionQuery::Failed { message } => anyhow::bail!(message),
    }
}

/// Formats a session header followed by the requested artifacts.
fn describe(detail: &SessionDetail, only: Option<Section>) -> String {
    let summary = &detail.summary;
    let mut out = format!(
        "{}\nTopic:   {}\nCreated: {}\nStatus:  {}\n",
        summary.id,
        summary.topic,
        summary.created_at,
        summary.status.label()
    );

    let sections = match only {
        Some(section) => vec![section],
        None => Section::ALL.to_vec(),
    };

    for section in sections {
        let body = match section {
            Section::Discussion => detail
                .discussion
                .as_deref()
                .map(|text| format::outline(&outline(text))),
            _ => section
                .artifact(detail)
                .map(|artifact| format::tree(&render(&serde_json::Value::Object(artifact.clone())))),
        };

        out.push_str(&format!("\n== {} ==\n", section.title()));
        match body {
            Some(body) => out.push_str(&body),
            None => out.push_str("(not available)\n"),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use serde_json::json;
    use sift_core::session::SessionIdentity;

    fn detail() -> SessionDetail {
        let identity = SessionIdentity {
            slug: "auth-flow".to_string(),
            date: NaiveDate::from_ymd_opt(2026, 1, 5).unwrap(),
        };
        let conclusions = match json!({ "topic": "Auth flow", "risk": "low" }) {
            serde_json::Value::Object(map) => map,
            _ => unreachable!(),
        };
        SessionDetail::assemble(
            "ANL-auth-flow-2026-01-05",
            &identity,
            Some("# Notes\n\nbody".to_string()),
            Some(conclusions),
            None,
            None,
        )
    }

    #[test]
    fn test_describe_single_section() {
        let text = describe(&detail(), Some(Section::Conclusions));

        assert_eq!(
            text,
            "ANL-auth-flow-2026-01-05\n\
             Topic:   Auth flow\n\
             Created: 2026-01-05\n\
             Status:  completed\n\
             \n== Conclusions ==\n\
             Topic: Auth flow\n\
             Risk: low\n"
        );
    }

    #[test]
    fn test_describe_marks_absent_artifacts() {
        let text = describe(&detail(), None);

        assert!(text.contains("== Discussion ==\n# Notes\nbody\n"));
        assert!(text.contains("== Explorations ==\n(not available)\n"));
        assert!(text.contains("== Perspectives ==\n(not available)\n"));
    }
}
