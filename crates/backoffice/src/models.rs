//! Domain entities for the admin panel.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::types::Json;
use time::OffsetDateTime;
use utoipa::ToSchema;
use uuid::Uuid;

/// Display locales supported by translated fields.
///
/// The set is closed: every translated value must carry all of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Locale {
    #[default]
    En,
    Es,
}

impl Locale {
    pub const ALL: [Locale; 2] = [Locale::En, Locale::Es];

    pub fn as_str(self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Es => "es",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A text value with one variant per supported locale.
///
/// Stored as a JSONB object keyed by locale code. Construction requires
/// every variant, so locale switching is total and needs no fallback.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct TranslatedText {
    pub en: String,
    pub es: String,
}

impl TranslatedText {
    pub fn new(en: impl Into<String>, es: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            es: es.into(),
        }
    }

    /// Returns the variant for the given display locale.
    pub fn variant(&self, locale: Locale) -> &str {
        match locale {
            Locale::En => &self.en,
            Locale::Es => &self.es,
        }
    }
}

/// Panel user (administrator account).
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct User {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub created_at: OffsetDateTime,
}

impl User {
    pub fn new(name: String, email: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            email,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

/// Shop customer.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Customer {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Postal address owned by a customer.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Address {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub street: String,
    pub city: String,
    pub zip: String,
    pub country: String,
}

/// Blog category.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Category {
    pub id: Uuid,
    pub name: String,
    pub slug: String,
    pub description: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Blog author.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Author {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub bio: Option<String>,
    pub created_at: OffsetDateTime,
}

/// Blog post with a translated title.
#[derive(Debug, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Post {
    pub id: Uuid,
    pub author_id: Uuid,
    pub category_id: Uuid,
    #[schema(value_type = TranslatedText)]
    pub title: Json<TranslatedText>,
    pub slug: String,
    pub content: String,
    pub published_at: Option<OffsetDateTime>,
    pub created_at: OffsetDateTime,
}

impl Post {
    pub fn new(
        author_id: Uuid,
        category_id: Uuid,
        title: TranslatedText,
        slug: String,
        content: String,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            author_id,
            category_id,
            title: Json(title),
            slug,
            content,
            published_at: None,
            created_at: OffsetDateTime::now_utc(),
        }
    }
}

/// Turns free text into a URL-safe slug.
pub fn slugify(text: &str) -> String {
    let mut slug = String::with_capacity(text.len());
    let mut last_dash = true;
    for c in text.chars() {
        if c.is_alphanumeric() {
            slug.extend(c.to_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("  Fancy Title!  "), "fancy-title");
        assert_eq!(slugify("a--b"), "a-b");
    }

    #[test]
    fn test_variant_selection() {
        let title = TranslatedText::new("Hello", "Hola");
        assert_eq!(title.variant(Locale::En), "Hello");
        assert_eq!(title.variant(Locale::Es), "Hola");
    }

    #[test]
    fn test_locale_codes_round_trip() {
        for locale in Locale::ALL {
            let json = serde_json::to_string(&locale).unwrap();
            assert_eq!(json, format!("\"{}\"", locale.as_str()));
            let back: Locale = serde_json::from_str(&json).unwrap();
            assert_eq!(back, locale);
        }
    }

    #[test]
    fn test_translated_text_jsonb_shape() {
        let title = TranslatedText::new("Hello", "Hola");
        let value = serde_json::to_value(&title).unwrap();
        assert_eq!(value, serde_json::json!({"en": "Hello", "es": "Hola"}));
    }
}
