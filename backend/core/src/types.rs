use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Technologies the generator can teach.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Technology {
    JavaScript,
    React,
    Vue,
    Angular,
    TypeScript,
}

impl Technology {
    pub const ALL: [Technology; 5] = [
        Technology::JavaScript,
        Technology::React,
        Technology::Vue,
        Technology::Angular,
        Technology::TypeScript,
    ];

    /// Display name, used in prompts and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Technology::JavaScript => "JavaScript",
            Technology::React => "React",
            Technology::Vue => "Vue",
            Technology::Angular => "Angular",
            Technology::TypeScript => "TypeScript",
        }
    }

    /// Lowercase tag suggested to the model for fenced code examples.
    pub fn code_tag(&self) -> &'static str {
        match self {
            Technology::JavaScript => "javascript",
            Technology::React => "react",
            Technology::Vue => "vue",
            Technology::Angular => "angular",
            Technology::TypeScript => "typescript",
        }
    }
}

impl fmt::Display for Technology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Technology {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "javascript" | "js" => Ok(Technology::JavaScript),
            "react" => Ok(Technology::React),
            "vue" => Ok(Technology::Vue),
            "angular" => Ok(Technology::Angular),
            "typescript" | "ts" => Ok(Technology::TypeScript),
            other => Err(format!(
                "unknown technology '{other}' (expected one of: javascript, react, vue, angular, typescript)"
            )),
        }
    }
}

/// Difficulty levels for generated exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl Difficulty {
    pub const ALL: [Difficulty; 4] = [
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
        Difficulty::Expert,
    ];

    /// Display name, used in prompts and exports.
    pub fn label(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
            Difficulty::Expert => "Expert",
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "beginner" => Ok(Difficulty::Beginner),
            "intermediate" => Ok(Difficulty::Intermediate),
            "advanced" => Ok(Difficulty::Advanced),
            "expert" => Ok(Difficulty::Expert),
            other => Err(format!(
                "unknown difficulty '{other}' (expected one of: beginner, intermediate, advanced, expert)"
            )),
        }
    }
}
