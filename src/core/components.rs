//! Registry of displayable components the model can choose from, and hydration of a
//! tool call into typed props.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

/// Components the provider may render. The set is closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    LearningMode,
    InterviewMode,
    ProjectMode,
}

impl ComponentKind {
    pub const ALL: [ComponentKind; 3] = [
        ComponentKind::LearningMode,
        ComponentKind::InterviewMode,
        ComponentKind::ProjectMode,
    ];

    /// Name exposed to the model as the tool name.
    pub fn name(self) -> &'static str {
        match self {
            ComponentKind::LearningMode => "LearningMode",
            ComponentKind::InterviewMode => "InterviewMode",
            ComponentKind::ProjectMode => "ProjectMode",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.name() == name)
    }

    /// When the model should pick this component.
    pub fn description(self) -> &'static str {
        match self {
            ComponentKind::LearningMode => {
                "Displays learning topics and progress when the user wants to learn something new or check their progress."
            }
            ComponentKind::InterviewMode => {
                "Displays interview preparation tips and a checklist when the user wants to prepare for an interview or needs career advice."
            }
            ComponentKind::ProjectMode => {
                "Displays project ideas and tech stacks when the user is looking for inspiration or wants to build something."
            }
        }
    }

    /// JSON schema of the props object.
    pub fn props_schema(self) -> Value {
        match self {
            ComponentKind::LearningMode => json!({
                "type": "object",
                "properties": {
                    "topics": { "type": "array", "items": { "type": "string" }, "description": "List of topics to learn" },
                    "progress": { "type": "number", "description": "Progress percentage (0-100)" }
                }
            }),
            ComponentKind::InterviewMode => json!({
                "type": "object",
                "properties": {
                    "tips": { "type": "array", "items": { "type": "string" }, "description": "General interview tips" },
                    "checklist": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "task": { "type": "string" },
                                "completed": { "type": "boolean" }
                            }
                        },
                        "description": "Checklist of preparation tasks"
                    }
                }
            }),
            ComponentKind::ProjectMode => json!({
                "type": "object",
                "properties": {
                    "ideas": {
                        "type": "array",
                        "items": {
                            "type": "object",
                            "properties": {
                                "title": { "type": "string" },
                                "description": { "type": "string" },
                                "techStack": { "type": "array", "items": { "type": "string" } }
                            }
                        },
                        "description": "List of project ideas"
                    }
                }
            }),
        }
    }

    pub fn tool_definition(self) -> Value {
        json!({
            "type": "function",
            "function": {
                "name": self.name(),
                "description": self.description(),
                "parameters": self.props_schema(),
            }
        })
    }
}

/// Function-tool definitions for every registered component.
pub fn tool_definitions() -> Vec<Value> {
    ComponentKind::ALL
        .into_iter()
        .map(ComponentKind::tool_definition)
        .collect()
}

#[derive(Debug, thiserror::Error)]
pub enum ComponentError {
    #[error("unknown component: {0}")]
    Unknown(String),
    #[error("invalid props for {component}: {source}")]
    InvalidProps {
        component: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningProps {
    pub topics: Vec<String>,
    pub progress: f64,
}

impl LearningProps {
    /// Progress clamped to 0..=100.
    pub fn progress_percent(&self) -> f64 {
        self.progress.clamp(0.0, 100.0)
    }

    /// Topic `index` counts as unlocked once progress passes its share of the list.
    pub fn is_topic_unlocked(&self, index: usize) -> bool {
        if self.topics.is_empty() {
            return false;
        }
        self.progress > (index as f64 / self.topics.len() as f64) * 100.0
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChecklistItem {
    pub task: String,
    pub completed: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct InterviewProps {
    pub tips: Vec<String>,
    pub checklist: Vec<ChecklistItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectIdea {
    pub title: String,
    pub description: String,
    #[serde(rename = "techStack")]
    pub tech_stack: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProjectProps {
    pub ideas: Vec<ProjectIdea>,
}

/// A component chosen by the model, with its props filled in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "component", content = "props")]
pub enum RenderedComponent {
    #[serde(rename = "LearningMode")]
    Learning(LearningProps),
    #[serde(rename = "InterviewMode")]
    Interview(InterviewProps),
    #[serde(rename = "ProjectMode")]
    Project(ProjectProps),
}

impl RenderedComponent {
    pub fn kind(&self) -> ComponentKind {
        match self {
            RenderedComponent::Learning(_) => ComponentKind::LearningMode,
            RenderedComponent::Interview(_) => ComponentKind::InterviewMode,
            RenderedComponent::Project(_) => ComponentKind::ProjectMode,
        }
    }

    /// Panel heading.
    pub fn title(&self) -> &'static str {
        match self {
            RenderedComponent::Learning(_) => "Course Syllabus",
            RenderedComponent::Interview(_) => "Interview Roadmap",
            RenderedComponent::Project(_) => "Project Blueprints",
        }
    }

    /// Small badge shown above the heading.
    pub fn badge(&self) -> &'static str {
        match self {
            RenderedComponent::Learning(_) => "Active Learning",
            RenderedComponent::Interview(_) => "Career Prep",
            RenderedComponent::Project(_) => "Inspiration",
        }
    }

    /// Hint shown when the model returned no items.
    pub fn empty_hint(&self) -> Option<&'static str> {
        match self {
            RenderedComponent::Learning(p) if p.topics.is_empty() => {
                Some("No topics suggested yet. Try \"show me what to learn for React\".")
            }
            RenderedComponent::Interview(p) if p.tips.is_empty() && p.checklist.is_empty() => {
                Some("Need help with interviews? Try \"prepare me for a frontend interview\".")
            }
            RenderedComponent::Project(p) if p.ideas.is_empty() => {
                Some("Looking for inspiration? Try \"give me some React project ideas\".")
            }
            _ => None,
        }
    }
}

/// Build a component from a tool call. Empty arguments mean default props.
pub fn hydrate(name: &str, arguments: &str) -> Result<RenderedComponent, ComponentError> {
    let kind = ComponentKind::from_name(name).ok_or_else(|| ComponentError::Unknown(name.to_string()))?;
    let arguments = if arguments.trim().is_empty() {
        "{}"
    } else {
        arguments
    };
    let invalid = |source| ComponentError::InvalidProps {
        component: kind.name(),
        source,
    };
    Ok(match kind {
        ComponentKind::LearningMode => {
            RenderedComponent::Learning(serde_json::from_str(arguments).map_err(invalid)?)
        }
        ComponentKind::InterviewMode => {
            RenderedComponent::Interview(serde_json::from_str(arguments).map_err(invalid)?)
        }
        ComponentKind::ProjectMode => {
            RenderedComponent::Project(serde_json::from_str(arguments).map_err(invalid)?)
        }
    })
}

/// Plain-text rendition, used by the CLI.
impl fmt::Display for RenderedComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[{}] {}", self.badge(), self.title())?;
        if let Some(hint) = self.empty_hint() {
            return writeln!(f, "  {}", hint);
        }
        match self {
            RenderedComponent::Learning(p) => {
                writeln!(f, "  Overall mastery: {}%", p.progress_percent())?;
                for (i, topic) in p.topics.iter().enumerate() {
                    let status = if p.is_topic_unlocked(i) { "done" } else { "locked" };
                    writeln!(f, "  {:02}  {} ({})", i + 1, topic, status)?;
                }
            }
            RenderedComponent::Interview(p) => {
                for tip in &p.tips {
                    writeln!(f, "  * {}", tip)?;
                }
                for (i, item) in p.checklist.iter().enumerate() {
                    let mark = if item.completed { 'x' } else { ' ' };
                    writeln!(f, "  {}. [{}] {}", i + 1, mark, item.task)?;
                }
            }
            RenderedComponent::Project(p) => {
                for idea in &p.ideas {
                    writeln!(f, "  {}", idea.title)?;
                    if !idea.description.is_empty() {
                        writeln!(f, "    {}", idea.description)?;
                    }
                    if !idea.tech_stack.is_empty() {
                        writeln!(f, "    stack: {}", idea.tech_stack.join(", "))?;
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tool_definitions_cover_all_components() {
        let defs = tool_definitions();
        let names: Vec<&str> = defs
            .iter()
            .filter_map(|d| d["function"]["name"].as_str())
            .collect();
        assert_eq!(names, ["LearningMode", "InterviewMode", "ProjectMode"]);
        assert!(defs.iter().all(|d| d["type"] == "function"));
    }

    #[test]
    fn hydrate_learning_mode() {
        let c = hydrate("LearningMode", r#"{"topics":["Syntax","Goroutines"],"progress":40}"#).unwrap();
        match c {
            RenderedComponent::Learning(p) => {
                assert_eq!(p.topics, ["Syntax", "Goroutines"]);
                assert_eq!(p.progress, 40.0);
                assert!(p.is_topic_unlocked(0));
                assert!(!p.is_topic_unlocked(1));
            }
            other => panic!("expected Learning, got {:?}", other),
        }
    }

    #[test]
    fn hydrate_project_mode_reads_tech_stack() {
        let c = hydrate(
            "ProjectMode",
            r#"{"ideas":[{"title":"Todo","description":"CRUD app","techStack":["React","Vite"]}]}"#,
        )
        .unwrap();
        let RenderedComponent::Project(p) = c else {
            panic!("expected Project");
        };
        assert_eq!(p.ideas[0].tech_stack, ["React", "Vite"]);
    }

    #[test]
    fn hydrate_missing_props_default() {
        let c = hydrate("InterviewMode", "").unwrap();
        assert_eq!(c, RenderedComponent::Interview(InterviewProps::default()));
        assert!(c.empty_hint().is_some());
    }

    #[test]
    fn hydrate_unknown_component() {
        let err = hydrate("ChartMode", "{}").unwrap_err();
        assert!(matches!(err, ComponentError::Unknown(ref n) if n == "ChartMode"));
    }

    #[test]
    fn hydrate_invalid_props() {
        let err = hydrate("LearningMode", r#"{"topics": 3}"#).unwrap_err();
        assert!(matches!(
            err,
            ComponentError::InvalidProps {
                component: "LearningMode",
                ..
            }
        ));
    }

    #[test]
    fn progress_is_clamped() {
        let p = LearningProps {
            topics: vec![],
            progress: 140.0,
        };
        assert_eq!(p.progress_percent(), 100.0);
        assert!(!p.is_topic_unlocked(0));
    }

    #[test]
    fn display_lists_checklist() {
        let c = RenderedComponent::Interview(InterviewProps {
            tips: vec!["Be concise".to_string()],
            checklist: vec![ChecklistItem {
                task: "Review CSS".to_string(),
                completed: true,
            }],
        });
        let out = c.to_string();
        assert!(out.starts_with("[Career Prep] Interview Roadmap"));
        assert!(out.contains("* Be concise"));
        assert!(out.contains("1. [x] Review CSS"));
    }

    #[test]
    fn rendered_component_serializes_with_name() {
        let c = RenderedComponent::Project(ProjectProps::default());
        let json = serde_json::to_value(&c).unwrap();
        assert_eq!(json["component"], "ProjectMode");
    }
}
