//! Static site content.
//!
//! Every piece of copy lives exactly once in a locale-keyed table: records
//! hold [`Text`] pairs and callers resolve them with a [`Locale`]. Image URLs
//! are shared between locales. Nothing here is mutable at runtime.

mod catalog;
mod phrases;

pub use catalog::*;
pub use phrases::Phrase;

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Display language of the showcase.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Ru,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Ru];

    pub fn code(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Ru => "ru",
        }
    }

    /// The other locale, used by the language toggle in the navbar.
    pub fn toggled(self) -> Self {
        match self {
            Locale::En => Locale::Ru,
            Locale::Ru => Locale::En,
        }
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Error returned when parsing an unknown locale code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown locale '{0}' (expected 'en' or 'ru')")]
pub struct UnknownLocale(pub String);

impl FromStr for Locale {
    type Err = UnknownLocale;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "en" | "english" => Ok(Locale::En),
            "ru" | "russian" => Ok(Locale::Ru),
            other => Err(UnknownLocale(other.to_string())),
        }
    }
}

/// One string in both supported languages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Text {
    pub en: &'static str,
    pub ru: &'static str,
}

impl Text {
    pub const fn new(en: &'static str, ru: &'static str) -> Self {
        Self { en, ru }
    }

    #[inline]
    pub fn get(&self, locale: Locale) -> &'static str {
        match locale {
            Locale::En => self.en,
            Locale::Ru => self.ru,
        }
    }
}

/// Icons used by services, stats and contact cards.
///
/// The desktop renderer draws them as glyphs; the core only cares about identity.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum Icon {
    Camera,
    User,
    Mountain,
    Heart,
    Building,
    Award,
    Users,
    Mail,
    Phone,
    MapPin,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Camera => "📷",
            Icon::User => "👤",
            Icon::Mountain => "⛰",
            Icon::Heart => "♥",
            Icon::Building => "🏢",
            Icon::Award => "🏆",
            Icon::Users => "👥",
            Icon::Mail => "✉",
            Icon::Phone => "☎",
            Icon::MapPin => "📍",
        }
    }
}

// ============================================================================
// Content records
// ============================================================================

/// A hero carousel slide.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Slide {
    pub id: u32,
    pub image: &'static str,
    pub title: Text,
    pub subtitle: Text,
}

/// Portfolio categories. Labels are localized, identity is not.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Portraits,
    Landscapes,
    Weddings,
    Commercial,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Portraits,
        Category::Landscapes,
        Category::Weddings,
        Category::Commercial,
    ];

    pub fn label(self) -> Text {
        match self {
            Category::Portraits => Text::new("Portraits", "Портреты"),
            Category::Landscapes => Text::new("Landscapes", "Пейзажи"),
            Category::Weddings => Text::new("Weddings", "Свадьбы"),
            Category::Commercial => Text::new("Commercial", "Коммерческие"),
        }
    }
}

/// A gallery entry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PortfolioItem {
    pub id: u32,
    pub category: Category,
    pub image: &'static str,
    pub title: Text,
    pub description: Text,
}

impl PortfolioItem {
    /// URL of the larger rendition shown in the lightbox.
    pub fn lightbox_image(&self) -> String {
        self.image.replace("w=600&h=600", "w=1200&h=900")
    }
}

/// A client quote shown in the testimonials carousel.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: Text,
    pub role: Text,
    pub image: &'static str,
    pub quote: Text,
    /// Star rating, 0..=5
    pub rating: u8,
}

impl Testimonial {
    pub const MAX_RATING: u8 = 5;

    /// Filled/empty state of the five rating stars.
    pub fn stars(&self) -> [bool; 5] {
        let filled = self.rating.min(Self::MAX_RATING) as usize;
        std::array::from_fn(|i| i < filled)
    }
}

/// One of the offered photography services.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ServiceOffering {
    pub icon: Icon,
    pub title: Text,
    pub description: Text,
    pub features: &'static [Text],
}

/// A headline number in the about section.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct Stat {
    pub icon: Icon,
    pub value: &'static str,
    pub label: Text,
}

/// Kind of a contact card; decides the link scheme.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum ContactKind {
    Email,
    Phone,
    Location,
}

/// A contact card in the contact section.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct ContactInfo {
    pub kind: ContactKind,
    pub title: Text,
    pub value: &'static str,
    pub link: &'static str,
}

impl ContactInfo {
    pub fn icon(&self) -> Icon {
        match self.kind {
            ContactKind::Email => Icon::Mail,
            ContactKind::Phone => Icon::Phone,
            ContactKind::Location => Icon::MapPin,
        }
    }
}

/// Social networks linked from the contact section and footer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum SocialNetwork {
    Instagram,
    Facebook,
    Twitter,
    Linkedin,
}

impl SocialNetwork {
    pub const ALL: [SocialNetwork; 4] = [
        SocialNetwork::Instagram,
        SocialNetwork::Facebook,
        SocialNetwork::Twitter,
        SocialNetwork::Linkedin,
    ];

    pub fn name(self) -> &'static str {
        match self {
            SocialNetwork::Instagram => "instagram",
            SocialNetwork::Facebook => "facebook",
            SocialNetwork::Twitter => "twitter",
            SocialNetwork::Linkedin => "linkedin",
        }
    }

    pub fn url(self) -> String {
        format!("https://{}.com", self.name())
    }
}
