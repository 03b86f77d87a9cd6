use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::catalog::CatalogGroup;

/// Document compiled into the binary; used when no `--data` path is given.
const BUILTIN_DOC: &str = include_str!("../assets/portfolio.toml");

#[derive(Debug, Error)]
pub enum DataError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse portfolio document: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("portfolio document is missing required table `{0}`")]
    MissingTable(&'static str),
}

#[derive(Clone, Debug, Deserialize)]
pub struct Profile {
    pub name: String,
    pub title: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub availability: String,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct About {
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub stats: Vec<Stat>,
}

/// One stat card, e.g. `5+ / Years Unity`.
#[derive(Clone, Debug, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

/// One row of the fixed language/proficiency list. Unaffected by catalog
/// filtering.
#[derive(Clone, Debug, Deserialize)]
pub struct Language {
    pub name: String,
    pub level: String,
}

/// Kind of a project, mapped exhaustively to a badge with a defined
/// fallback for unrecognized strings.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum ProjectKind {
    Tool,
    Game,
    Framework,
    #[default]
    Other,
}

impl From<String> for ProjectKind {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "tool" => ProjectKind::Tool,
            "game" => ProjectKind::Game,
            "framework" => ProjectKind::Framework,
            _ => ProjectKind::Other,
        }
    }
}

impl ProjectKind {
    pub fn badge(self) -> &'static str {
        match self {
            ProjectKind::Tool => "tool",
            ProjectKind::Game => "game",
            ProjectKind::Framework => "framework",
            ProjectKind::Other => "project",
        }
    }
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum LinkKind {
    Primary,
    #[default]
    Secondary,
}

impl From<String> for LinkKind {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "primary" => LinkKind::Primary,
            _ => LinkKind::Secondary,
        }
    }
}

#[derive(Clone, Debug, Deserialize)]
pub struct ProjectLink {
    pub label: String,
    pub url: String,
    #[serde(default)]
    pub kind: LinkKind,
}

/// One entry of a project's nested video list.
#[derive(Clone, Debug, Deserialize)]
pub struct Video {
    pub title: String,
    pub url: String,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Project {
    pub title: String,
    #[serde(default)]
    pub kind: ProjectKind,
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub links: Vec<ProjectLink>,
    #[serde(default)]
    pub videos: Vec<Video>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ExperienceEntry {
    pub company: String,
    pub role: String,
    pub period: String,
    pub summary: String,
    #[serde(default)]
    pub achievements: Vec<String>,
    #[serde(default)]
    pub technologies: Vec<String>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct Contact {
    pub headline: String,
    #[serde(default)]
    pub note: String,
    #[serde(default)]
    pub items: Vec<ContactItem>,
}

#[derive(Clone, Debug, Deserialize)]
pub struct ContactItem {
    pub label: String,
    pub value: String,
}

/// Raw deserialization shape: every table optional so that validation can
/// name what is missing instead of surfacing a serde field error.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawDoc {
    profile: Option<Profile>,
    about: Option<About>,
    skills: Vec<CatalogGroup>,
    languages: Vec<Language>,
    projects: Vec<Project>,
    experience: Vec<ExperienceEntry>,
    contact: Option<Contact>,
}

/// The full portfolio data contract. Loaded once, validated, then treated
/// as read-only configuration for the lifetime of the process.
#[derive(Clone, Debug)]
pub struct PortfolioDoc {
    pub profile: Profile,
    pub about: About,
    pub skills: Vec<CatalogGroup>,
    pub languages: Vec<Language>,
    pub projects: Vec<Project>,
    pub experience: Vec<ExperienceEntry>,
    pub contact: Contact,
}

impl PortfolioDoc {
    /// The document compiled into the binary.
    pub fn builtin() -> Result<Self, DataError> {
        Self::from_toml(BUILTIN_DOC)
    }

    pub fn from_toml(text: &str) -> Result<Self, DataError> {
        let raw: RawDoc = toml::from_str(text)?;
        Self::try_from(raw)
    }

    pub fn load(path: &Path) -> Result<Self, DataError> {
        let text = std::fs::read_to_string(path).map_err(|source| DataError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let doc = Self::from_toml(&text)?;
        debug!(path = %path.display(), "loaded portfolio document");
        Ok(doc)
    }
}

impl TryFrom<RawDoc> for PortfolioDoc {
    type Error = DataError;

    fn try_from(raw: RawDoc) -> Result<Self, DataError> {
        let profile = raw.profile.ok_or(DataError::MissingTable("profile"))?;
        let about = raw.about.ok_or(DataError::MissingTable("about"))?;
        let contact = raw.contact.ok_or(DataError::MissingTable("contact"))?;
        if raw.skills.is_empty() {
            return Err(DataError::MissingTable("skills"));
        }
        if raw.projects.is_empty() {
            return Err(DataError::MissingTable("projects"));
        }
        if raw.experience.is_empty() {
            return Err(DataError::MissingTable("experience"));
        }
        Ok(Self {
            profile,
            about,
            skills: raw.skills,
            languages: raw.languages,
            projects: raw.projects,
            experience: raw.experience,
            contact,
        })
    }
}
