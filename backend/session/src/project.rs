//! State owned by the project-idea view.

use studyforge_core::{ProjectIdea, ProjectIdeaDraft, Technology};

use crate::slot::Slot;
use crate::validation::ValidationError;

/// Parameters for one project-idea request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectRequest {
    pub technologies: Vec<Technology>,
    pub topic: Option<String>,
}

/// Parameters for the detailed-guide follow-up.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailsRequest {
    pub name: String,
    pub description: String,
    pub suggested_tech: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ProjectPanel {
    /// Multi-select technology toggles, in selection order.
    pub technologies: Vec<Technology>,
    pub topic: String,
    pub idea: Slot<ProjectIdea>,
    pub details: Slot<String>,
    pub suggestions: Slot<Vec<String>>,
}

impl ProjectPanel {
    pub fn new() -> Self {
        Self {
            technologies: Vec::new(),
            topic: String::new(),
            idea: Slot::Idle,
            details: Slot::Idle,
            suggestions: Slot::Idle,
        }
    }

    /// Toggle a technology selection; returns whether it is now selected.
    pub fn toggle_technology(&mut self, technology: Technology) -> bool {
        if let Some(pos) = self.technologies.iter().position(|&t| t == technology) {
            self.technologies.remove(pos);
            false
        } else {
            self.technologies.push(technology);
            true
        }
    }

    pub fn begin_request(&mut self) -> Result<ProjectRequest, ValidationError> {
        if self.technologies.is_empty() {
            return Err(ValidationError::NoTechnologySelected);
        }
        if !self.idea.begin() {
            return Err(ValidationError::RequestInFlight);
        }
        let topic = Some(self.topic.trim())
            .filter(|t| !t.is_empty())
            .map(str::to_string);
        Ok(ProjectRequest {
            technologies: self.technologies.clone(),
            topic,
        })
    }

    /// Store a new idea; follow-up slots reset since they belong to the
    /// previous idea.
    pub fn accept(&mut self, draft: ProjectIdeaDraft) {
        self.idea.resolve(ProjectIdea::from_draft(draft));
        self.details = Slot::Idle;
        self.suggestions = Slot::Idle;
    }

    pub fn fail(&mut self, message: impl Into<String>) {
        self.idea.fail(message);
    }

    pub fn begin_details(&mut self) -> Result<DetailsRequest, ValidationError> {
        let idea = self.idea.value().ok_or(ValidationError::ItemNotFound)?;
        let request = DetailsRequest {
            name: idea.name.clone(),
            description: idea.description.clone(),
            suggested_tech: idea.suggested_tech.clone(),
        };
        if !self.details.begin() {
            return Err(ValidationError::RequestInFlight);
        }
        Ok(request)
    }

    pub fn accept_details(&mut self, details: String) {
        self.details.resolve(details);
    }

    pub fn fail_details(&mut self, message: impl Into<String>) {
        self.details.fail(message);
    }

    /// Begin the extension-suggestions follow-up; returns the project name
    /// to ask about.
    pub fn begin_suggestions(&mut self) -> Result<String, ValidationError> {
        let name = self
            .idea
            .value()
            .ok_or(ValidationError::ItemNotFound)?
            .name
            .clone();
        if !self.suggestions.begin() {
            return Err(ValidationError::RequestInFlight);
        }
        Ok(name)
    }

    pub fn accept_suggestions(&mut self, suggestions: Vec<String>) {
        self.suggestions.resolve(suggestions);
    }

    pub fn fail_suggestions(&mut self, message: impl Into<String>) {
        self.suggestions.fail(message);
    }

    /// Toggle the favorite flag on the current idea.
    pub fn toggle_favorite(&mut self) -> Option<bool> {
        let idea = self.idea.value_mut()?;
        idea.is_favorite = !idea.is_favorite;
        Some(idea.is_favorite)
    }

    /// Flat markdown export of the current idea (the clipboard copy), with
    /// follow-up sections when they have been generated.
    pub fn markdown(&self) -> Option<String> {
        let idea = self.idea.value()?;
        let mut md = format!("## Project idea: {}\n\n", idea.name);
        let topic = self.topic.trim();
        if !topic.is_empty() {
            md.push_str(&format!("**Topic:** {topic}\n"));
        }
        let tech_names = self
            .technologies
            .iter()
            .map(|t| t.label())
            .collect::<Vec<_>>()
            .join(", ");
        md.push_str(&format!("**Main technologies:** {tech_names}\n\n"));
        md.push_str(&format!("### Description\n{}\n\n", idea.description));
        let features = idea
            .features
            .iter()
            .map(|f| format!("- {f}"))
            .collect::<Vec<_>>()
            .join("\n");
        md.push_str(&format!("### Main features\n{features}\n\n"));
        if !idea.suggested_tech.is_empty() {
            md.push_str(&format!(
                "### Additional suggested technologies\n{}\n\n",
                idea.suggested_tech.join(", ")
            ));
        }
        if let Some(details) = self.details.value() {
            md.push_str(&format!("### Detailed guide\n{details}\n\n"));
        }
        if let Some(suggestions) = self.suggestions.value() {
            if !suggestions.is_empty() {
                let lines = suggestions
                    .iter()
                    .map(|s| format!("- {s}"))
                    .collect::<Vec<_>>()
                    .join("\n");
                md.push_str(&format!("### Further suggestions\n{lines}\n\n"));
            }
        }
        Some(md)
    }
}

impl Default for ProjectPanel {
    fn default() -> Self {
        Self::new()
    }
}
