//! # Content Model
//!
//! Wire-compatible data model for the site content service.
//!
//! All content types serialize with camelCase field names to match the
//! backend's JSON payloads. `WebsiteContent` exists in two lifecycle copies
//! on the backend: Draft (editor-owned, mutable) and Live (public, written
//! only by publish).

use serde::{Deserialize, Serialize};

/// Horizontal alignment of a hero element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    Left,
    Center,
    Right,
}

impl Alignment {
    /// Reconcile a raw keyword into the canonical enum.
    ///
    /// This is the single string → enum boundary; layout logic never sees
    /// raw strings. Unknown keywords return `None` so callers can substitute
    /// their own fallback.
    pub fn from_keyword(value: &str) -> Option<Self> {
        match value {
            "left" => Some(Alignment::Left),
            "center" => Some(Alignment::Center),
            "right" => Some(Alignment::Right),
            _ => None,
        }
    }

    pub fn as_keyword(&self) -> &'static str {
        match self {
            Alignment::Left => "left",
            Alignment::Center => "center",
            Alignment::Right => "right",
        }
    }
}

/// Vertical alignment of a hero element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlignment {
    Top,
    Middle,
    Bottom,
}

impl VerticalAlignment {
    pub fn from_keyword(value: &str) -> Option<Self> {
        match value {
            "top" => Some(VerticalAlignment::Top),
            "middle" => Some(VerticalAlignment::Middle),
            "bottom" => Some(VerticalAlignment::Bottom),
            _ => None,
        }
    }

    pub fn as_keyword(&self) -> &'static str {
        match self {
            VerticalAlignment::Top => "top",
            VerticalAlignment::Middle => "middle",
            VerticalAlignment::Bottom => "bottom",
        }
    }
}

/// Two-axis placement descriptor for a hero element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub horizontal: Alignment,
    pub vertical: VerticalAlignment,
}

impl Position {
    pub const fn new(horizontal: Alignment, vertical: VerticalAlignment) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Hero section content with per-element placement.
///
/// Position fields are optional on the wire; accessor methods substitute the
/// component-defined fallbacks (title → left/top, body → left/middle,
/// image → right/top).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeroContent {
    pub section_title: String,
    pub section_body: String,
    pub image_src: String,
    #[serde(default)]
    pub title_position: Option<Position>,
    #[serde(default)]
    pub body_position: Option<Position>,
    #[serde(default)]
    pub image_position: Option<Position>,
}

impl HeroContent {
    pub const DEFAULT_TITLE_POSITION: Position =
        Position::new(Alignment::Left, VerticalAlignment::Top);
    pub const DEFAULT_BODY_POSITION: Position =
        Position::new(Alignment::Left, VerticalAlignment::Middle);
    pub const DEFAULT_IMAGE_POSITION: Position =
        Position::new(Alignment::Right, VerticalAlignment::Top);

    pub fn title_position_or_default(&self) -> Position {
        self.title_position.unwrap_or(Self::DEFAULT_TITLE_POSITION)
    }

    pub fn body_position_or_default(&self) -> Position {
        self.body_position.unwrap_or(Self::DEFAULT_BODY_POSITION)
    }

    pub fn image_position_or_default(&self) -> Position {
        self.image_position.unwrap_or(Self::DEFAULT_IMAGE_POSITION)
    }
}

/// Plain titled text section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub section_title: String,
    pub section_body: String,
}

/// Full site content. Replaced wholesale on save and publish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WebsiteContent {
    pub site_title: String,
    pub hero_section: HeroContent,
    pub main_section: Section,
    pub footer_text: String,
}

impl Default for WebsiteContent {
    /// Seed content: a populated placeholder page so a fresh backend and
    /// `pagecraft init` both start from something renderable.
    fn default() -> Self {
        Self {
            site_title: "Pagecraft".to_string(),
            hero_section: HeroContent {
                section_title: "Build your site, publish when ready".to_string(),
                section_body: "Edit a private draft, preview every change, and push it \
                               live in one click."
                    .to_string(),
                image_src: "/assets/generated/hero-illustration.dim_1600x900.png".to_string(),
                title_position: Some(HeroContent::DEFAULT_TITLE_POSITION),
                body_position: Some(HeroContent::DEFAULT_BODY_POSITION),
                image_position: Some(HeroContent::DEFAULT_IMAGE_POSITION),
            },
            main_section: Section {
                section_title: "Why Pagecraft".to_string(),
                section_body: "Draft and live copies are kept separate, so visitors never \
                               see work in progress."
                    .to_string(),
            },
            footer_text: "© Pagecraft. All rights reserved.".to_string(),
        }
    }
}

/// Per-identity display profile, created on first authenticated visit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
}

/// Caller role, assigned server-side. Consulted but never mutated here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
    Guest,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_round_trips_camel_case() {
        let content = WebsiteContent::default();
        let json = serde_json::to_string(&content).unwrap();

        assert!(json.contains("\"siteTitle\""));
        assert!(json.contains("\"heroSection\""));
        assert!(json.contains("\"footerText\""));
        assert!(json.contains("\"imageSrc\""));

        let back: WebsiteContent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, content);
    }

    #[test]
    fn test_missing_positions_deserialize_as_none() {
        let json = r#"{
            "sectionTitle": "Hello",
            "sectionBody": "World",
            "imageSrc": "/hero.png"
        }"#;

        let hero: HeroContent = serde_json::from_str(json).unwrap();
        assert!(hero.title_position.is_none());
        assert_eq!(
            hero.title_position_or_default(),
            Position::new(Alignment::Left, VerticalAlignment::Top)
        );
        assert_eq!(
            hero.body_position_or_default(),
            Position::new(Alignment::Left, VerticalAlignment::Middle)
        );
        assert_eq!(
            hero.image_position_or_default(),
            Position::new(Alignment::Right, VerticalAlignment::Top)
        );
    }

    #[test]
    fn test_alignment_keyword_boundary() {
        assert_eq!(Alignment::from_keyword("center"), Some(Alignment::Center));
        assert_eq!(Alignment::from_keyword("justify"), None);
        assert_eq!(
            VerticalAlignment::from_keyword("bottom"),
            Some(VerticalAlignment::Bottom)
        );
        assert_eq!(VerticalAlignment::from_keyword(""), None);
        assert_eq!(Alignment::Right.as_keyword(), "right");
    }

    #[test]
    fn test_enums_serialize_lowercase() {
        let pos = Position::new(Alignment::Right, VerticalAlignment::Bottom);
        let json = serde_json::to_string(&pos).unwrap();
        assert_eq!(json, r#"{"horizontal":"right","vertical":"bottom"}"#);

        let role = serde_json::to_string(&UserRole::Admin).unwrap();
        assert_eq!(role, r#""admin""#);
    }
}
