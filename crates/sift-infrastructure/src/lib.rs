pub mod artifact_reader;
pub mod async_dir_analysis_session_repository;
pub mod config_service;
pub mod paths;

pub use crate::artifact_reader::ArtifactReader;
pub use crate::async_dir_analysis_session_repository::AsyncDirAnalysisSessionRepository;
pub use crate::config_service::ConfigService;
pub use crate::paths::SiftPaths;
