//! # Hero Layout Resolver
//!
//! Maps two-axis placement descriptors to rendering directives.
//!
//! Every function here is pure and total: missing or unmapped input degrades
//! to a documented default rather than erroring. The CSS utility class names
//! are the contract with the page compiler.

use crate::model::{Alignment, Position, VerticalAlignment};

/// Horizontal text alignment directive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    Start,
    Center,
    End,
}

impl TextAlign {
    pub fn css_class(&self) -> &'static str {
        match self {
            TextAlign::Start => "text-left",
            TextAlign::Center => "text-center",
            TextAlign::End => "text-right",
        }
    }
}

/// Cross-axis (vertical) alignment directive for flex containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CrossAxis {
    Near,
    Middle,
    Far,
}

impl CrossAxis {
    pub fn css_class(&self) -> &'static str {
        match self {
            CrossAxis::Near => "items-start",
            CrossAxis::Middle => "items-center",
            CrossAxis::Far => "items-end",
        }
    }
}

/// Image focal point on the 3×3 placement grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocalPoint {
    pub horizontal: Alignment,
    pub vertical: VerticalAlignment,
}

impl FocalPoint {
    pub const CENTER: FocalPoint = FocalPoint {
        horizontal: Alignment::Center,
        vertical: VerticalAlignment::Middle,
    };

    pub fn css_class(&self) -> &'static str {
        match (self.horizontal, self.vertical) {
            (Alignment::Center, VerticalAlignment::Middle) => "object-center",
            (Alignment::Center, VerticalAlignment::Top) => "object-top",
            (Alignment::Center, VerticalAlignment::Bottom) => "object-bottom",
            (Alignment::Left, VerticalAlignment::Top) => "object-left-top",
            (Alignment::Left, VerticalAlignment::Middle) => "object-left",
            (Alignment::Left, VerticalAlignment::Bottom) => "object-left-bottom",
            (Alignment::Right, VerticalAlignment::Top) => "object-right-top",
            (Alignment::Right, VerticalAlignment::Middle) => "object-right",
            (Alignment::Right, VerticalAlignment::Bottom) => "object-right-bottom",
        }
    }
}

/// Resolve horizontal alignment to a text directive. Missing input → `Start`.
pub fn resolve_text_align(horizontal: Option<Alignment>) -> TextAlign {
    match horizontal {
        Some(Alignment::Center) => TextAlign::Center,
        Some(Alignment::Right) => TextAlign::End,
        Some(Alignment::Left) | None => TextAlign::Start,
    }
}

/// Resolve vertical alignment to a cross-axis directive. Missing input → `Near`.
pub fn resolve_cross_axis(vertical: Option<VerticalAlignment>) -> CrossAxis {
    match vertical {
        Some(VerticalAlignment::Middle) => CrossAxis::Middle,
        Some(VerticalAlignment::Bottom) => CrossAxis::Far,
        Some(VerticalAlignment::Top) | None => CrossAxis::Near,
    }
}

/// Resolve a placement descriptor to an image focal point.
///
/// Total over the 3×3 grid; a missing position yields the center/middle
/// default.
pub fn resolve_image_focal_point(position: Option<&Position>) -> FocalPoint {
    match position {
        Some(pos) => FocalPoint {
            horizontal: pos.horizontal,
            vertical: pos.vertical,
        },
        None => FocalPoint::CENTER,
    }
}
