//! Core type definitions for structural extraction
//!
//! This module contains the small vocabulary shared by every stage of
//! umlify: declaration kinds, member visibility and modifiers, extraction
//! modes and the image formats understood by the rendering server.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::error::UmlError;

/// Kind of a declared type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeKind {
    /// `class Name { ... }`
    Class,
    /// `interface Name { ... }`
    Interface,
}

impl TypeKind {
    /// Map the declaration keyword to a kind
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "class" => Some(TypeKind::Class),
            "interface" => Some(TypeKind::Interface),
            _ => None,
        }
    }

    /// The keyword used both in source and in PlantUML block headers
    pub fn keyword(self) -> &'static str {
        match self {
            TypeKind::Class => "class",
            TypeKind::Interface => "interface",
        }
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Access qualifier of a member
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Visibility {
    Public,
    Protected,
    Private,
    /// No keyword was written in the source
    #[default]
    Unspecified,
}

impl Visibility {
    /// Map an optional captured keyword to a visibility
    pub fn from_keyword(keyword: Option<&str>) -> Self {
        match keyword {
            Some("public") => Visibility::Public,
            Some("protected") => Visibility::Protected,
            Some("private") => Visibility::Private,
            _ => Visibility::Unspecified,
        }
    }

    /// PlantUML visibility symbol
    ///
    /// Public and unspecified members share `+`.
    pub fn symbol(self) -> char {
        match self {
            Visibility::Private => '-',
            Visibility::Protected => '#',
            Visibility::Public | Visibility::Unspecified => '+',
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Visibility::Public => write!(f, "public"),
            Visibility::Protected => write!(f, "protected"),
            Visibility::Private => write!(f, "private"),
            Visibility::Unspecified => write!(f, "unspecified"),
        }
    }
}

/// Storage/behavior qualifier of a member (at most one is retained)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modifier {
    #[default]
    None,
    Static,
    Final,
    Abstract,
}

impl Modifier {
    /// Take the first modifier keyword out of a captured run such as
    /// `"static final "`. Later keywords in the run are ignored.
    pub fn from_run(run: Option<&str>) -> Self {
        match run.and_then(|r| r.split_whitespace().next()) {
            Some("static") => Modifier::Static,
            Some("final") => Modifier::Final,
            Some("abstract") => Modifier::Abstract,
            _ => Modifier::None,
        }
    }

    /// Marker prefix for attribute lines
    pub fn attribute_marker(self) -> &'static str {
        match self {
            Modifier::Static => "{static} ",
            _ => "",
        }
    }

    /// Marker prefix for method lines; `final` has none
    pub fn method_marker(self) -> &'static str {
        match self {
            Modifier::Static => "{static} ",
            Modifier::Abstract => "{abstract} ",
            Modifier::None | Modifier::Final => "",
        }
    }
}

impl fmt::Display for Modifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Modifier::None => write!(f, "none"),
            Modifier::Static => write!(f, "static"),
            Modifier::Final => write!(f, "final"),
            Modifier::Abstract => write!(f, "abstract"),
        }
    }
}

/// Scanner configuration used for one extraction call
///
/// Both modes run the same line scanner; they differ only in which
/// signature terminators are accepted and whether method bodies are skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExtractionMode {
    /// Brace-terminated signatures only; lines inside method bodies are
    /// suppressed.
    #[default]
    Class,
    /// Brace- or semicolon-terminated signatures; every line is evaluated
    /// on its own.
    Interface,
}

impl ExtractionMode {
    /// All modes, in display order
    pub fn all() -> &'static [ExtractionMode] {
        &[ExtractionMode::Class, ExtractionMode::Interface]
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ExtractionMode::Class => "class",
            ExtractionMode::Interface => "interface",
        }
    }

    /// One-line summary shown by the CLI
    pub fn description(self) -> &'static str {
        match self {
            ExtractionMode::Class => {
                "Concrete classes; method bodies are skipped, signatures need a body"
            }
            ExtractionMode::Interface => {
                "Interfaces and abstract types; bodiless signatures accepted, no body skipping"
            }
        }
    }

    /// Whether a method signature may end in `;` instead of `{`
    pub fn accepts_bodiless_signatures(self) -> bool {
        matches!(self, ExtractionMode::Interface)
    }

    /// Whether lines inside a method body are hidden from member matching
    pub fn skips_method_bodies(self) -> bool {
        matches!(self, ExtractionMode::Class)
    }
}

impl fmt::Display for ExtractionMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExtractionMode {
    type Err = UmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "class" => Ok(ExtractionMode::Class),
            "interface" => Ok(ExtractionMode::Interface),
            _ => Err(UmlError::UnknownMode {
                value: s.to_string(),
            }),
        }
    }
}

/// Output format path segment understood by a PlantUML server
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageFormat {
    /// `/img/`, the server's default raster endpoint
    #[default]
    Img,
    Png,
    Svg,
    /// ASCII-art rendering
    Txt,
}

impl ImageFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ImageFormat::Img => "img",
            ImageFormat::Png => "png",
            ImageFormat::Svg => "svg",
            ImageFormat::Txt => "txt",
        }
    }
}

impl fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ImageFormat {
    type Err = UmlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "img" => Ok(ImageFormat::Img),
            "png" => Ok(ImageFormat::Png),
            "svg" => Ok(ImageFormat::Svg),
            "txt" => Ok(ImageFormat::Txt),
            _ => Err(UmlError::UnknownImageFormat {
                value: s.to_string(),
            }),
        }
    }
}
