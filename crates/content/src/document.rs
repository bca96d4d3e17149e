use serde::{Deserialize, Deserializer, Serialize};

/// The full structured record describing every section of the site.
///
/// Deserialization is total over the shape: any field missing from the input,
/// or given as `null`, takes its zero value, so decoding a document is always
/// a full replacement and never a merge with earlier state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentDocument {
    #[serde(deserialize_with = "null_as_default")]
    pub hero: HeroSection,
    #[serde(deserialize_with = "null_as_default")]
    pub about: AboutSection,
    #[serde(deserialize_with = "null_as_default")]
    pub program: ProgramSection,
    #[serde(deserialize_with = "null_as_default")]
    pub gallery: GallerySection,
    #[serde(deserialize_with = "null_as_default")]
    pub testimonials: TestimonialsSection,
    #[serde(deserialize_with = "null_as_default")]
    pub contact: ContactSection,
    #[serde(deserialize_with = "null_as_default")]
    pub footer: FooterSection,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct HeroSection {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub subtitle: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub whatsapp_number: String,
    #[serde(deserialize_with = "null_as_default")]
    pub whatsapp_message: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AboutSection {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description1: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description2: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description3: String,
}

/// The program section, with one entry per school level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramSection {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Elementary school program.
    #[serde(deserialize_with = "null_as_default")]
    pub sd: ProgramItem,
    /// Junior high school program.
    #[serde(deserialize_with = "null_as_default")]
    pub smp: ProgramItem,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ProgramItem {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub features: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GallerySection {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<GalleryItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GalleryItem {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    /// Public path of the image, e.g. `/uploads/class.jpg`.
    #[serde(deserialize_with = "null_as_default")]
    pub image: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialsSection {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub items: Vec<TestimonialItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialItem {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
    #[serde(deserialize_with = "null_as_default")]
    pub author: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ContactSection {
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub service_area: String,
    #[serde(deserialize_with = "null_as_default")]
    pub button_text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FooterSection {
    #[serde(deserialize_with = "null_as_default")]
    pub text: String,
}

/// Reads a JSON `null` as the field's zero value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_zero_values() {
        let doc: ContentDocument =
            serde_json::from_str(r#"{"hero":{"title":"Only a title"}}"#).unwrap();

        assert_eq!(doc.hero.title, "Only a title");
        assert_eq!(doc.hero.subtitle, "");
        assert!(doc.gallery.items.is_empty());
        assert_eq!(doc.footer, FooterSection::default());
    }

    #[test]
    fn empty_object_is_the_zero_document() {
        let doc: ContentDocument = serde_json::from_str("{}").unwrap();
        assert_eq!(doc, ContentDocument::default());
    }

    #[test]
    fn null_sequences_read_as_empty() {
        let doc: ContentDocument = serde_json::from_str(
            r#"{"gallery":{"title":"G","items":null},"program":{"sd":{"features":null}}}"#,
        )
        .unwrap();

        assert_eq!(doc.gallery.title, "G");
        assert!(doc.gallery.items.is_empty());
        assert!(doc.program.sd.features.is_empty());
    }

    #[test]
    fn null_strings_and_sections_read_as_empty() {
        let doc: ContentDocument = serde_json::from_str(
            r#"{"hero":{"title":null,"subtitle":"kept"},"contact":null,"program":{"sd":null}}"#,
        )
        .unwrap();

        assert_eq!(doc.hero.title, "");
        assert_eq!(doc.hero.subtitle, "kept");
        assert_eq!(doc.contact, ContactSection::default());
        assert_eq!(doc.program.sd, ProgramItem::default());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let doc: ContentDocument =
            serde_json::from_str(r#"{"footer":{"text":"f","year":2025},"extra":true}"#).unwrap();
        assert_eq!(doc.footer.text, "f");
    }

    #[test]
    fn wrong_types_are_rejected() {
        let result = serde_json::from_str::<ContentDocument>(r#"{"hero":{"title":42}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn serializes_with_camel_case_names_in_declaration_order() {
        let json = serde_json::to_string(&ContentDocument::default()).unwrap();

        let positions: Vec<usize> = [
            "\"hero\"",
            "\"about\"",
            "\"program\"",
            "\"gallery\"",
            "\"testimonials\"",
            "\"contact\"",
            "\"footer\"",
        ]
        .iter()
        .map(|key| json.find(key).unwrap())
        .collect();
        assert!(positions.windows(2).all(|pair| pair[0] < pair[1]));

        for key in ["whatsappNumber", "whatsappMessage", "serviceArea", "buttonText"] {
            assert!(json.contains(&format!("\"{key}\"")), "missing {key}");
        }
    }
}
