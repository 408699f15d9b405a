//! The component catalogue every registry starts from unless disabled.

use crate::declaration::ComponentDeclaration;
use crate::schema::{SchemaError, TypedSchema};
use tessera_domain::components::{
    FooterSettings, GallerySettings, HeaderSettings, HeroSettings, RichTextSettings,
};
use tessera_domain::constants::{
    FOOTER, GALLERY, HEADER, HERO, LAZY_LOAD, MEDIA, NAVIGATION, RESPONSIVE, RICH_TEXT, STICKY,
    TEXT,
};

pub const MAX_GALLERY_COLUMNS: u8 = 6;

#[must_use]
pub fn builtin_declarations() -> Vec<ComponentDeclaration> {
    vec![
        ComponentDeclaration::new(HEADER, "components/header", TypedSchema::<HeaderSettings>::new())
            .with_capabilities([NAVIGATION, RESPONSIVE, STICKY]),
        ComponentDeclaration::new(HERO, "components/hero", TypedSchema::<HeroSettings>::new())
            .with_capabilities([MEDIA, RESPONSIVE]),
        ComponentDeclaration::new(
            RICH_TEXT,
            "components/rich-text",
            TypedSchema::<RichTextSettings>::with_check(check_rich_text),
        )
        .with_capabilities([TEXT]),
        ComponentDeclaration::new(
            GALLERY,
            "components/gallery",
            TypedSchema::<GallerySettings>::with_check(check_gallery),
        )
        .with_capabilities([MEDIA, RESPONSIVE, LAZY_LOAD]),
        ComponentDeclaration::new(FOOTER, "components/footer", TypedSchema::<FooterSettings>::new())
            .with_capabilities([NAVIGATION]),
    ]
}

fn check_rich_text(settings: &RichTextSettings) -> Result<(), SchemaError> {
    if settings.content.trim().is_empty() {
        return Err(SchemaError::constraint("`content` must not be empty"));
    }
    Ok(())
}

fn check_gallery(settings: &GallerySettings) -> Result<(), SchemaError> {
    if !(1..=MAX_GALLERY_COLUMNS).contains(&settings.columns) {
        return Err(SchemaError::constraint(format!(
            "`columns` must be between 1 and {MAX_GALLERY_COLUMNS}, got {}",
            settings.columns
        )));
    }
    if let Some(index) = settings.images.iter().position(|image| image.src.is_empty()) {
        return Err(SchemaError::constraint(format!("`images[{index}].src` must not be empty")));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};
    use tessera_domain::components::ComponentSettings;

    fn validate(key: &str, settings: Value) -> Result<ComponentSettings, SchemaError> {
        let Value::Object(map) = settings else { panic!("settings must be an object") };
        let declarations = builtin_declarations();
        let declaration = declarations.iter().find(|d| d.key == key).unwrap();
        declaration.validate(&map)
    }

    #[test]
    fn catalogue_has_unique_keys() {
        let mut keys: Vec<_> = builtin_declarations().into_iter().map(|d| d.key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys, ["footer", "gallery", "header", "hero", "rich-text"]);
    }

    #[test]
    fn every_builtin_accepts_its_defaults_except_rich_text() {
        for key in [HEADER, HERO, GALLERY, FOOTER] {
            assert!(validate(key, json!({})).is_ok(), "{key} should accept empty settings");
        }
        assert!(validate(RICH_TEXT, json!({})).is_err());
    }

    #[test]
    fn gallery_columns_are_bounded() {
        assert!(validate(GALLERY, json!({ "columns": 6 })).is_ok());
        let err = validate(GALLERY, json!({ "columns": 7 })).unwrap_err();
        assert!(err.to_string().contains("between 1 and 6"));
        assert!(validate(GALLERY, json!({ "columns": 0 })).is_err());
    }

    #[test]
    fn rich_text_rejects_blank_content() {
        assert!(validate(RICH_TEXT, json!({ "content": "   " })).is_err());
        assert!(matches!(
            validate(RICH_TEXT, json!({ "content": "# Hi", "format": "markdown" })),
            Ok(ComponentSettings::RichText(_))
        ));
    }

    #[test]
    fn typed_settings_reject_unknown_fields() {
        let err = validate(HERO, json!({ "heading": "Hi", "colour": "red" })).unwrap_err();
        assert!(matches!(err, SchemaError::Deserialize { .. }));
    }
}
