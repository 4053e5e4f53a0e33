//! # Content Form
//!
//! Flat in-memory form model backing the editor dialog.
//!
//! Mirrors the editable fields of `WebsiteContent` one to one, with the hero
//! image split into a gallery selection and an optional custom URL that
//! overrides it. The form is populated once from the fetched Draft snapshot
//! and assembled back into a full replacement document on submit.

use crate::EditorError;
use pagecraft_content::{Alignment, HeroContent, Position, Section, VerticalAlignment, WebsiteContent};

/// Bundled hero images offered by the editor's gallery picker.
pub const GALLERY_IMAGES: [&str; 4] = [
    "/assets/generated/hero-illustration.dim_1600x900.png",
    "/assets/generated/hero-illustration-alt-1.dim_1600x900.png",
    "/assets/generated/hero-illustration-alt-2.dim_1600x900.png",
    "/assets/generated/hero-illustration-alt-3.dim_1600x900.png",
];

#[derive(Debug, Clone, PartialEq)]
pub struct ContentForm {
    pub site_title: String,
    pub hero_title: String,
    pub hero_body: String,
    pub hero_image_src: String,
    /// Trimmed non-empty value overrides the gallery selection on submit.
    pub hero_image_custom_url: String,
    pub title_horizontal: Alignment,
    pub title_vertical: VerticalAlignment,
    pub body_horizontal: Alignment,
    pub body_vertical: VerticalAlignment,
    pub image_horizontal: Alignment,
    pub image_vertical: VerticalAlignment,
    pub main_title: String,
    pub main_body: String,
    pub footer_text: String,
}

impl Default for ContentForm {
    fn default() -> Self {
        Self {
            site_title: String::new(),
            hero_title: String::new(),
            hero_body: String::new(),
            hero_image_src: String::new(),
            hero_image_custom_url: String::new(),
            title_horizontal: HeroContent::DEFAULT_TITLE_POSITION.horizontal,
            title_vertical: HeroContent::DEFAULT_TITLE_POSITION.vertical,
            body_horizontal: HeroContent::DEFAULT_BODY_POSITION.horizontal,
            body_vertical: HeroContent::DEFAULT_BODY_POSITION.vertical,
            image_horizontal: HeroContent::DEFAULT_IMAGE_POSITION.horizontal,
            image_vertical: HeroContent::DEFAULT_IMAGE_POSITION.vertical,
            main_title: String::new(),
            main_body: String::new(),
            footer_text: String::new(),
        }
    }
}

impl ContentForm {
    /// One-time population from a fetched Draft snapshot.
    pub fn from_content(content: &WebsiteContent) -> Self {
        let hero = &content.hero_section;
        let title_pos = hero.title_position_or_default();
        let body_pos = hero.body_position_or_default();
        let image_pos = hero.image_position_or_default();

        Self {
            site_title: content.site_title.clone(),
            hero_title: hero.section_title.clone(),
            hero_body: hero.section_body.clone(),
            hero_image_src: hero.image_src.clone(),
            hero_image_custom_url: String::new(),
            title_horizontal: title_pos.horizontal,
            title_vertical: title_pos.vertical,
            body_horizontal: body_pos.horizontal,
            body_vertical: body_pos.vertical,
            image_horizontal: image_pos.horizontal,
            image_vertical: image_pos.vertical,
            main_title: content.main_section.section_title.clone(),
            main_body: content.main_section.section_body.clone(),
            footer_text: content.footer_text.clone(),
        }
    }

    /// The image that submit and preview will actually use.
    pub fn effective_image_src(&self) -> &str {
        let custom = self.hero_image_custom_url.trim();
        if custom.is_empty() {
            &self.hero_image_src
        } else {
            custom
        }
    }

    /// Assemble the full replacement document.
    ///
    /// Validation is required-field presence only; the first blank required
    /// field is reported.
    pub fn to_content(&self) -> Result<WebsiteContent, EditorError> {
        require(&self.site_title, "siteTitle")?;
        require(&self.hero_title, "heroTitle")?;
        require(&self.hero_body, "heroBody")?;
        require(&self.main_title, "mainTitle")?;
        require(&self.main_body, "mainBody")?;
        require(&self.footer_text, "footerText")?;

        Ok(WebsiteContent {
            site_title: self.site_title.clone(),
            hero_section: HeroContent {
                section_title: self.hero_title.clone(),
                section_body: self.hero_body.clone(),
                image_src: self.effective_image_src().to_string(),
                title_position: Some(Position::new(self.title_horizontal, self.title_vertical)),
                body_position: Some(Position::new(self.body_horizontal, self.body_vertical)),
                image_position: Some(Position::new(self.image_horizontal, self.image_vertical)),
            },
            main_section: Section {
                section_title: self.main_title.clone(),
                section_body: self.main_body.clone(),
            },
            footer_text: self.footer_text.clone(),
        })
    }
}

fn require(value: &str, field: &'static str) -> Result<(), EditorError> {
    if value.trim().is_empty() {
        Err(EditorError::MissingField(field))
    } else {
        Ok(())
    }
}
