//! Keyword intent classifier.

use std::fmt;

use crate::context::{PROFILE_CONTEXT, PROJECTS_CONTEXT, SKILLS_CONTEXT, VPC_ARCHITECTURE_CONTEXT};

/// Coarse category that decides which context block accompanies a question.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Greeting,
    Architecture,
    Projects,
    Skills,
    Profile,
}

/// How a rule's keywords are matched against the question.
#[derive(Debug, Clone, Copy)]
enum Match {
    /// Keyword must be a whole word ("hi" does not match "architecture").
    Word,
    /// Keyword may appear anywhere ("workflow" matches "flow").
    Substring,
}

/// Ordered rules; the first rule with a matching keyword wins.
const RULES: &[(Intent, Match, &[&str])] = &[
    (Intent::Greeting, Match::Word, &["hi", "hello", "hey"]),
    (
        Intent::Architecture,
        Match::Substring,
        &["architecture", "design", "flow"],
    ),
    (
        Intent::Projects,
        Match::Substring,
        &["project", "vpc", "smartdocx", "nova"],
    ),
    (
        Intent::Skills,
        Match::Substring,
        &["python", "fastapi", "langchain", "langgraph", "aws"],
    ),
];

impl Match {
    fn hits(self, normalized: &str, keywords: &[&str]) -> bool {
        match self {
            Match::Word => normalized
                .split(|c: char| !c.is_alphanumeric())
                .any(|word| keywords.contains(&word)),
            Match::Substring => keywords.iter().any(|k| normalized.contains(k)),
        }
    }
}

impl Intent {
    /// Classifies an already normalized (trimmed, lowercased) question.
    ///
    /// Greeting words must stand alone; every other keyword is a plain
    /// substring test.
    ///
    /// ```
    /// use assistant::Intent;
    /// assert_eq!(Intent::classify("show me the design of your project"), Intent::Architecture);
    /// assert_eq!(Intent::classify("where did you study"), Intent::Profile);
    /// ```
    pub fn classify(normalized: &str) -> Self {
        RULES
            .iter()
            .find(|(_, mode, keywords)| mode.hits(normalized, keywords))
            .map(|(intent, _, _)| *intent)
            .unwrap_or(Intent::Profile)
    }

    /// Context block for the prompt; greeting and profile share the profile block.
    pub fn context(self) -> &'static str {
        match self {
            Intent::Architecture => VPC_ARCHITECTURE_CONTEXT,
            Intent::Projects => PROJECTS_CONTEXT,
            Intent::Skills => SKILLS_CONTEXT,
            Intent::Greeting | Intent::Profile => PROFILE_CONTEXT,
        }
    }

    /// Architecture answers are always regenerated.
    pub fn is_cacheable(self) -> bool {
        self != Intent::Architecture
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Intent::Greeting => "greeting",
            Intent::Architecture => "architecture",
            Intent::Projects => "projects",
            Intent::Skills => "skills",
            Intent::Profile => "profile",
        }
    }
}

impl fmt::Display for Intent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
