use std::{collections::HashSet, fmt, sync::LazyLock, time::Duration};

use chrono::{DateTime, Datelike};
use rust_embed::Embed;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::contact::{DisposalPolicy, FormConfig};
use crate::filter::Categorized;

const PORTFOLIO_FILE: &str = "portfolio.json";

static GLOBAL_REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    Registry::load().expect("embedded portfolio content should be valid")
});

#[derive(Embed)]
#[folder = "content"]
pub struct Assets;

/// The portfolio content, loaded once from the embedded `portfolio.json`.
pub fn registry() -> &'static Registry {
    &GLOBAL_REGISTRY
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("Content file not found: {0}")]
    Missing(&'static str),
    #[error("Couldn't parse portfolio content: {0}")]
    Parse(String),
    #[error("Duplicate project id: {0}")]
    DuplicateProject(u32),
    #[error("Invalid setting {name}: {reason}")]
    InvalidSetting {
        name: &'static str,
        reason: String,
    },
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Registry {
    pub site: SiteMeta,
    pub hero: HeroContent,
    pub about: AboutContent,
    pub projects: Vec<Project>,
    pub contact: ContactContent,
    pub footer: FooterContent,
    #[serde(default)]
    pub settings: Settings,
}

impl Registry {
    pub fn load() -> Result<Self, ContentError> {
        let file = Assets::get(PORTFOLIO_FILE).ok_or(ContentError::Missing(PORTFOLIO_FILE))?;
        let text = std::str::from_utf8(&file.data).map_err(|e| ContentError::Parse(e.to_string()))?;
        Self::from_json(text)
    }

    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let registry: Registry =
            serde_json::from_str(text).map_err(|e| ContentError::Parse(e.to_string()))?;
        registry.validate()?;
        Ok(registry)
    }

    fn validate(&self) -> Result<(), ContentError> {
        let mut seen = HashSet::new();
        for project in &self.projects {
            if !seen.insert(project.id) {
                return Err(ContentError::DuplicateProject(project.id));
            }
        }
        self.settings.validate()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteMeta {
    pub name: String,
    pub role: String,
    pub tagline: String,
    pub title: String,
    pub description: String,
    pub share_description: String,
    pub keywords: Vec<String>,
    pub url: String,
    pub site_name: String,
    pub og_image: String,
    pub twitter_handle: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HeroContent {
    pub technologies: Vec<TechTag>,
}

/// A technology chip; `color` is a background utility class.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TechTag {
    pub name: String,
    pub color: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AboutContent {
    pub journey: Vec<String>,
    pub skills: Vec<SkillGroup>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Full Stack")]
    FullStack,
    Frontend,
    Backend,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::FullStack, Category::Frontend, Category::Backend];

    pub fn label(self) -> &'static str {
        match self {
            Category::FullStack => "Full Stack",
            Category::Frontend => "Frontend",
            Category::Backend => "Backend",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image_ref: String,
    pub technologies: Vec<String>,
    pub category: Category,
    pub code_url: String,
    pub demo_url: String,
}

impl Categorized for Project {
    fn category(&self) -> Category {
        self.category
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Icon {
    Github,
    Linkedin,
    Email,
    Phone,
    Location,
    Filter,
    Download,
    External,
}

impl Icon {
    pub const ALL: [Icon; 8] = [
        Icon::Github,
        Icon::Linkedin,
        Icon::Email,
        Icon::Phone,
        Icon::Location,
        Icon::Filter,
        Icon::Download,
        Icon::External,
    ];

    /// Icon class: brand marks come from the devicon font, the `extra-*`
    /// glyphs are masks defined in `input.css`.
    pub fn class(self) -> &'static str {
        match self {
            Icon::Github => "devicon-github-plain",
            Icon::Linkedin => "devicon-linkedin-plain",
            Icon::Email => "extra-email",
            Icon::Phone => "extra-phone",
            Icon::Location => "extra-location",
            Icon::Filter => "extra-filter",
            Icon::Download => "extra-download",
            Icon::External => "extra-external",
        }
    }
}

/// Stylesheet for the `devicon-*` brand marks.
pub const DEVICON_STYLESHEET: &str =
    "https://cdn.jsdelivr.net/gh/devicons/devicon@v2.16.0/devicon.min.css";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContactChannel {
    pub label: String,
    pub value: String,
    #[serde(default)]
    pub link: Option<String>,
    pub icon: Icon,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
    pub icon: Icon,
}

impl SocialLink {
    /// `mailto:` and `tel:` links open in place, everything else in a new tab.
    pub fn is_external(&self) -> bool {
        !(self.href.starts_with("mailto:") || self.href.starts_with("tel:"))
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactContent {
    pub blurb: String,
    pub channels: Vec<ContactChannel>,
    pub social: Vec<SocialLink>,
    pub resume_url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FooterContent {
    pub blurb: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppearanceMode {
    Light,
    Dark,
    #[default]
    System,
}

impl AppearanceMode {
    /// Toggle order: light, dark, then back to following the system.
    pub fn next(self) -> Self {
        match self {
            AppearanceMode::Light => AppearanceMode::Dark,
            AppearanceMode::Dark => AppearanceMode::System,
            AppearanceMode::System => AppearanceMode::Light,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AppearanceMode::Light => "Light",
            AppearanceMode::Dark => "Dark",
            AppearanceMode::System => "System",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppearanceSettings {
    pub mode: AppearanceMode,
    pub transition_on_mode_change: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Fraction of a section that must be visible before it is revealed.
    pub reveal_threshold: f64,
    pub submit_delay_ms: u64,
    pub toast_duration_ms: u64,
    pub disposal: DisposalPolicy,
    pub appearance: AppearanceSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reveal_threshold: 0.1,
            submit_delay_ms: 1000,
            toast_duration_ms: 4000,
            disposal: DisposalPolicy::default(),
            appearance: AppearanceSettings::default(),
        }
    }
}

impl Settings {
    fn validate(&self) -> Result<(), ContentError> {
        if !(self.reveal_threshold > 0.0 && self.reveal_threshold <= 1.0) {
            return Err(ContentError::InvalidSetting {
                name: "reveal_threshold",
                reason: format!("{} is not in (0, 1]", self.reveal_threshold),
            });
        }
        if self.toast_duration_ms == 0 {
            return Err(ContentError::InvalidSetting {
                name: "toast_duration_ms",
                reason: "toasts must stay visible for some time".to_string(),
            });
        }
        Ok(())
    }

    pub fn form_config(&self) -> FormConfig {
        FormConfig {
            delay: Duration::from_millis(self.submit_delay_ms),
            disposal: self.disposal,
        }
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

/// Year the site was built, stamped by `build.rs`.
pub fn copyright_year() -> Option<i32> {
    DateTime::parse_from_rfc3339(env!("BUILD_TIME"))
        .ok()
        .map(|t| t.year())
}

/// Element ids that navigation links scroll to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    Home,
    About,
    Projects,
    Contact,
}

impl Anchor {
    pub const ALL: [Anchor; 4] = [Anchor::Home, Anchor::About, Anchor::Projects, Anchor::Contact];

    pub fn id(self) -> &'static str {
        match self {
            Anchor::Home => "home",
            Anchor::About => "about",
            Anchor::Projects => "projects",
            Anchor::Contact => "contact",
        }
    }

    pub fn href(self) -> String {
        format!("#{}", self.id())
    }

    pub fn label(self) -> &'static str {
        match self {
            Anchor::Home => "Home",
            Anchor::About => "About",
            Anchor::Projects => "Projects",
            Anchor::Contact => "Contact",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn minimal_json(projects: &str, settings: &str) -> String {
        format!(
            r##"{{
                "site": {{
                    "name": "Ada", "role": "Engineer", "tagline": "t", "title": "Ada",
                    "description": "d", "share_description": "s", "keywords": [],
                    "url": "https://example.com", "site_name": "Ada", "og_image": "/og.jpg",
                    "twitter_handle": "@ada"
                }},
                "hero": {{ "technologies": [] }},
                "about": {{ "journey": [], "skills": [] }},
                "projects": {projects},
                "contact": {{ "blurb": "b", "channels": [], "social": [], "resume_url": "#" }},
                "footer": {{ "blurb": "f", "technologies": [] }}
                {settings}
            }}"##
        )
    }

    fn project_json(id: u32, category: &str) -> String {
        format!(
            r#"{{ "id": {id}, "title": "p{id}", "description": "", "image_ref": "",
                 "technologies": [], "category": "{category}", "code_url": "", "demo_url": "" }}"#
        )
    }

    #[test]
    fn test_embedded_registry_loads() {
        let registry = Registry::load().expect("embedded content should parse");

        assert_eq!(registry.projects.len(), 4);
        assert_eq!(registry.about.skills.len(), 5);
        assert_eq!(registry.contact.channels.len(), 3);
        assert_eq!(registry.settings.submit_delay_ms, 1000);
        assert_eq!(registry.settings.reveal_threshold, 0.1);
        assert_eq!(registry.settings.appearance.mode, AppearanceMode::System);
        assert!(!registry.settings.appearance.transition_on_mode_change);

        // location has no link target
        let location = &registry.contact.channels[2];
        assert_eq!(location.label, "Location");
        assert!(location.link.is_none());
    }

    #[test]
    fn test_category_labels_round_trip_through_json() {
        let registry = Registry::load().expect("embedded content should parse");
        let categories = registry
            .projects
            .iter()
            .map(|p| p.category)
            .collect::<Vec<_>>();
        assert_eq!(
            categories,
            vec![
                Category::FullStack,
                Category::Backend,
                Category::Frontend,
                Category::Frontend
            ]
        );
        assert_eq!(Category::FullStack.to_string(), "Full Stack");
    }

    #[test]
    fn test_settings_default_when_absent() {
        let json = minimal_json("[]", "");
        let registry = Registry::from_json(&json).expect("minimal content should parse");
        assert_eq!(registry.settings, Settings::default());
        assert_eq!(registry.settings.form_config().delay, Duration::from_millis(1000));
        assert_eq!(registry.settings.toast_duration(), Duration::from_millis(4000));
    }

    #[test]
    fn test_partial_settings_fill_defaults() {
        let json = minimal_json(
            "[]",
            r#", "settings": { "submit_delay_ms": 250, "disposal": "let_finish",
                   "appearance": { "mode": "dark" } }"#,
        );
        let registry = Registry::from_json(&json).expect("partial settings should parse");
        assert_eq!(registry.settings.submit_delay_ms, 250);
        assert_eq!(registry.settings.disposal, DisposalPolicy::LetFinish);
        assert_eq!(registry.settings.appearance.mode, AppearanceMode::Dark);
        assert_eq!(registry.settings.reveal_threshold, 0.1);
    }

    #[test]
    fn test_duplicate_project_ids_rejected() {
        let projects = format!(
            "[{}, {}]",
            project_json(7, "Backend"),
            project_json(7, "Frontend")
        );
        let json = minimal_json(&projects, "");
        assert_eq!(
            Registry::from_json(&json).unwrap_err(),
            ContentError::DuplicateProject(7)
        );
    }

    #[test]
    fn test_invalid_threshold_rejected() {
        let json = minimal_json("[]", r#", "settings": { "reveal_threshold": 1.5 }"#);
        let err = Registry::from_json(&json).unwrap_err();
        assert!(matches!(
            err,
            ContentError::InvalidSetting {
                name: "reveal_threshold",
                ..
            }
        ));
    }

    #[test]
    fn test_unknown_category_is_parse_error() {
        let projects = format!("[{}]", project_json(1, "Embedded"));
        let json = minimal_json(&projects, "");
        assert!(matches!(
            Registry::from_json(&json),
            Err(ContentError::Parse(_))
        ));
    }

    #[test]
    fn test_appearance_cycle() {
        let mut mode = AppearanceMode::Light;
        let mut seen = Vec::new();
        for _ in 0..4 {
            seen.push(mode);
            mode = mode.next();
        }
        assert_eq!(
            seen,
            vec![
                AppearanceMode::Light,
                AppearanceMode::Dark,
                AppearanceMode::System,
                AppearanceMode::Light
            ]
        );
    }

    #[test]
    fn test_copyright_year_from_build_time() {
        let year = copyright_year().expect("build.rs stamps an RFC 3339 time");
        assert!(year >= 2024);
    }

    #[test]
    fn test_anchor_hrefs() {
        let hrefs = Anchor::ALL.iter().map(|a| a.href()).collect::<Vec<_>>();
        assert_eq!(hrefs, vec!["#home", "#about", "#projects", "#contact"]);
    }

    #[test]
    fn test_social_link_targets() {
        let registry = Registry::load().expect("embedded content should parse");
        let external = registry
            .contact
            .social
            .iter()
            .map(|s| s.is_external())
            .collect::<Vec<_>>();
        assert_eq!(external, vec![true, true, false]);
    }

    #[test]
    fn test_every_icon_has_a_source() {
        let css = include_str!("../input.css");
        for icon in Icon::ALL {
            let class = icon.class();
            if class.starts_with("devicon-") {
                continue;
            }
            assert!(
                css.contains(&format!(".{class} {{")),
                "{class} has no glyph in input.css"
            );
        }
        assert!(DEVICON_STYLESHEET.starts_with("https://"));
        assert!(DEVICON_STYLESHEET.ends_with(".css"));
    }
}
