//! Output View Model
//!
//! The shared output panel: progress, messages and failures of the
//! panel-bound operations, the repository summary, the file explanation,
//! and the scanned file list with its cursor.

use crate::state::{FormField, OutputRegion, SessionState};

pub const PLACEHOLDER: &str = "Output will appear here...";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputBody {
    Placeholder(&'static str),
    Progress(String),
    Message(String),
    Failure(String),
    Summary {
        /// Pretty-printed architecture analysis
        analysis: String,
        explanation: String,
    },
    Explanation {
        path: String,
        text: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRow {
    pub path: String,
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputViewModel {
    pub body: OutputBody,
    pub files_title: String,
    pub files: Vec<FileRow>,
    pub files_focused: bool,
    /// Index of the selected row, for scrolling
    pub cursor: Option<usize>,
}

impl OutputViewModel {
    pub fn from_session(session: &SessionState, focus: FormField) -> Self {
        let files: Vec<FileRow> = session
            .files()
            .iter()
            .enumerate()
            .map(|(index, file)| FileRow {
                path: file.path.clone(),
                selected: index == session.file_cursor,
            })
            .collect();

        let files_title = match &session.listing {
            Some(listing) => format!("Files ({})", listing.file_count()),
            None => "Files".to_string(),
        };

        Self {
            body: Self::body(session),
            files_title,
            cursor: (!files.is_empty()).then_some(session.file_cursor),
            files,
            files_focused: focus == FormField::FileList,
        }
    }

    fn body(session: &SessionState) -> OutputBody {
        match &session.output {
            OutputRegion::Placeholder => OutputBody::Placeholder(PLACEHOLDER),
            OutputRegion::Progress(text) => OutputBody::Progress(text.clone()),
            OutputRegion::Message(text) => OutputBody::Message(text.clone()),
            OutputRegion::Failure(text) => OutputBody::Failure(text.clone()),
            OutputRegion::Summary => match &session.summary {
                Some(summary) => OutputBody::Summary {
                    analysis: serde_json::to_string_pretty(&summary.analysis)
                        .unwrap_or_else(|_| summary.analysis.to_string()),
                    explanation: summary.explanation.clone(),
                },
                None => OutputBody::Placeholder(PLACEHOLDER),
            },
            OutputRegion::Explanation => match &session.explanation {
                Some(explanation) => OutputBody::Explanation {
                    path: explanation.path.clone(),
                    text: explanation.text.clone(),
                },
                None => OutputBody::Placeholder(PLACEHOLDER),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Explanation;
    use pretty_assertions::assert_eq;
    use risk_client::{FileEntry, RepositorySummary, ScanResponse};
    use serde_json::json;

    #[test]
    fn test_placeholder_by_default() {
        let vm = OutputViewModel::from_session(&SessionState::default(), FormField::RepoUrl);
        assert_eq!(vm.body, OutputBody::Placeholder("Output will appear here..."));
        assert_eq!(vm.files_title, "Files");
        assert_eq!(vm.cursor, None);
        assert!(!vm.files_focused);
    }

    #[test]
    fn test_summary_is_pretty_printed() {
        let session = SessionState {
            summary: Some(RepositorySummary {
                analysis: json!({"layers": 3}),
                explanation: "Three layers.".to_string(),
            }),
            output: OutputRegion::Summary,
            ..Default::default()
        };
        let vm = OutputViewModel::from_session(&session, FormField::Folder);
        assert_eq!(
            vm.body,
            OutputBody::Summary {
                analysis: "{\n  \"layers\": 3\n}".to_string(),
                explanation: "Three layers.".to_string(),
            }
        );
    }

    #[test]
    fn test_explanation_and_file_rows() {
        let session = SessionState {
            listing: Some(ScanResponse {
                files: vec![
                    FileEntry {
                        path: "src/a.ts".to_string(),
                    },
                    FileEntry {
                        path: "src/b.ts".to_string(),
                    },
                ],
                total_files: Some(2),
            }),
            file_cursor: 1,
            explanation: Some(Explanation {
                path: "src/b.ts".to_string(),
                text: "Entry point.".to_string(),
            }),
            output: OutputRegion::Explanation,
            ..Default::default()
        };

        let vm = OutputViewModel::from_session(&session, FormField::FileList);
        assert_eq!(
            vm.body,
            OutputBody::Explanation {
                path: "src/b.ts".to_string(),
                text: "Entry point.".to_string(),
            }
        );
        assert_eq!(vm.files_title, "Files (2)");
        assert_eq!(
            vm.files,
            vec![
                FileRow {
                    path: "src/a.ts".to_string(),
                    selected: false,
                },
                FileRow {
                    path: "src/b.ts".to_string(),
                    selected: true,
                },
            ]
        );
        assert_eq!(vm.cursor, Some(1));
        assert!(vm.files_focused);
    }

    #[test]
    fn test_failure_text() {
        let session = SessionState {
            output: OutputRegion::Failure("Failed to scan repository.".to_string()),
            ..Default::default()
        };
        let vm = OutputViewModel::from_session(&session, FormField::RepoUrl);
        assert_eq!(
            vm.body,
            OutputBody::Failure("Failed to scan repository.".to_string())
        );
    }
}
