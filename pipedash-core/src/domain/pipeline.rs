//! Pipeline status domain types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Identifier of the demo pipeline
pub const PIPELINE_NAME: &str = "aws-devops-pipeline";

/// Overall pipeline label for generated documents
pub const PIPELINE_READY: &str = "Ready";

/// Stage label for generated and fallback documents
pub const STAGE_CONFIGURED: &str = "Configured";

/// Number of stages every status document carries
pub const STAGE_COUNT: usize = 3;

/// Pipeline status document
///
/// Built fresh by the server on every request and by the client whenever the
/// live document cannot be fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PipelineStatusDocument {
    pub pipeline: String,
    pub status: String,
    /// Source, Build, Deploy. Consumers read these by position.
    pub stages: [StageRecord; STAGE_COUNT],
    pub last_execution: DateTime<Utc>,
}

/// One stage of the pipeline visualization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageRecord {
    pub name: String,
    pub status: String,

    /// Tool or platform running the stage (e.g. "GitHub").
    ///
    /// Travels as `duration` on the wire.
    #[serde(rename = "duration")]
    pub platform: String,

    pub timestamp: DateTime<Utc>,
}

/// Fixed stages of the demo pipeline, in display order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    Source,
    Build,
    Deploy,
}

impl Stage {
    /// All stages in the order they appear in a status document
    pub const ALL: [Stage; STAGE_COUNT] = [Stage::Source, Stage::Build, Stage::Deploy];

    /// Display label, also used as the record name
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Source => "Source",
            Stage::Build => "Build",
            Stage::Deploy => "Deploy",
        }
    }

    /// Prefix of the display slots rendering this stage
    pub fn slot_id(&self) -> &'static str {
        match self {
            Stage::Source => "source",
            Stage::Build => "build",
            Stage::Deploy => "deploy",
        }
    }

    /// Platform the stage runs on
    pub fn platform(&self) -> &'static str {
        match self {
            Stage::Source => "GitHub",
            Stage::Build => "CodeBuild",
            Stage::Deploy => "ECS Fargate",
        }
    }

    /// Record for this stage in the configured state
    pub fn configured(&self, at: DateTime<Utc>) -> StageRecord {
        StageRecord {
            name: self.label().to_string(),
            status: STAGE_CONFIGURED.to_string(),
            platform: self.platform().to_string(),
            timestamp: at,
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl PipelineStatusDocument {
    /// Document with every stage configured, stamped with `at`
    pub fn configured(at: DateTime<Utc>) -> Self {
        Self {
            pipeline: PIPELINE_NAME.to_string(),
            status: PIPELINE_READY.to_string(),
            stages: Stage::ALL.map(|stage| stage.configured(at)),
            last_execution: at,
        }
    }

    /// Locally built document used when the live one is unavailable
    pub fn fallback() -> Self {
        Self::configured(Utc::now())
    }

    /// Stages paired with their records, in display order
    pub fn stages(&self) -> impl Iterator<Item = (Stage, &StageRecord)> {
        Stage::ALL.into_iter().zip(self.stages.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_configured_document_shape() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let doc = PipelineStatusDocument::configured(at);

        assert_eq!(doc.pipeline, "aws-devops-pipeline");
        assert_eq!(doc.status, "Ready");
        assert_eq!(doc.last_execution, at);

        let names: Vec<_> = doc.stages.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Source", "Build", "Deploy"]);

        let platforms: Vec<_> = doc.stages.iter().map(|s| s.platform.as_str()).collect();
        assert_eq!(platforms, ["GitHub", "CodeBuild", "ECS Fargate"]);

        assert!(doc.stages.iter().all(|s| s.status == "Configured"));
        assert!(doc.stages.iter().all(|s| s.timestamp == at));
    }

    #[test]
    fn test_wire_field_names() {
        let at = Utc.with_ymd_and_hms(2025, 3, 1, 12, 0, 0).unwrap();
        let json = serde_json::to_value(PipelineStatusDocument::configured(at)).unwrap();

        assert!(json.get("lastExecution").is_some());
        assert!(json.get("last_execution").is_none());
        assert_eq!(json["stages"][0]["duration"], "GitHub");
        assert_eq!(json["stages"][2]["duration"], "ECS Fargate");
        assert!(json["stages"][1].get("platform").is_none());
        assert_eq!(json["lastExecution"], "2025-03-01T12:00:00Z");
    }

    #[test]
    fn test_rejects_wrong_stage_count() {
        let json = serde_json::json!({
            "pipeline": "aws-devops-pipeline",
            "status": "Ready",
            "stages": [
                { "name": "Source", "status": "Configured", "duration": "GitHub", "timestamp": "2025-03-01T12:00:00Z" },
                { "name": "Build", "status": "Configured", "duration": "CodeBuild", "timestamp": "2025-03-01T12:00:00Z" }
            ],
            "lastExecution": "2025-03-01T12:00:00Z"
        });

        let result: Result<PipelineStatusDocument, _> = serde_json::from_value(json);
        assert!(result.is_err());
    }

    #[test]
    fn test_accepts_millisecond_timestamps() {
        let json = serde_json::json!({
            "pipeline": "aws-devops-pipeline",
            "status": "Ready",
            "stages": [
                { "name": "Source", "status": "Running", "duration": "GitHub", "timestamp": "2025-03-01T12:00:00.123Z" },
                { "name": "Build", "status": "Configured", "duration": "CodeBuild", "timestamp": "2025-03-01T12:00:00.123Z" },
                { "name": "Deploy", "status": "Configured", "duration": "ECS Fargate", "timestamp": "2025-03-01T12:00:00.123Z" }
            ],
            "lastExecution": "2025-03-01T12:00:00.123Z"
        });

        let doc: PipelineStatusDocument = serde_json::from_value(json).unwrap();
        assert_eq!(doc.stages[0].status, "Running");
    }

    #[test]
    fn test_stages_pair_with_records() {
        let doc = PipelineStatusDocument::fallback();
        let pairs: Vec<_> = doc
            .stages()
            .map(|(stage, record)| (stage.slot_id(), record.name.as_str()))
            .collect();

        assert_eq!(
            pairs,
            [("source", "Source"), ("build", "Build"), ("deploy", "Deploy")]
        );
    }
}
