//! Turns a theme's settings document into a validated, ordered render plan.
//!
//! Resolution happens in two stages:
//! 1. [`build_pages`] validates every page and component entry against one registry
//!    snapshot and yields [`PageDefinition`]s (hidden instances included).
//! 2. [`plan_page`] drops hidden instances and orders the rest.
//!
//! Only a missing theme or an unusable document aborts; every other problem is recorded
//! as a [`ResolutionIssue`] and the offending unit is skipped.

use crate::composition::ThemeComposition;
use crate::error::ThemeError;
use crate::issues::ResolutionIssue;
use crate::provider::ThemeFileProvider;
use fxhash::FxHashSet;
use serde_json::{Map, Value};
use std::sync::Arc;
use tessera_components::{ComponentRegistry, RegistrySnapshot};
use tessera_domain::components::ComponentInstance;
use tessera_domain::pages::{PageDefinition, ResolvedPage};
use tracing::{debug, info, instrument, warn};

/// Resolves themes read through a [`ThemeFileProvider`] against a [`ComponentRegistry`].
///
/// Cheap to clone; both collaborators are shared handles.
#[derive(Debug, Clone)]
pub struct PageResolver {
    provider: Arc<dyn ThemeFileProvider>,
    registry: ComponentRegistry,
}

impl PageResolver {
    pub fn new(provider: impl ThemeFileProvider + 'static, registry: ComponentRegistry) -> Self {
        Self::from_shared(Arc::new(provider), registry)
    }

    #[must_use]
    pub fn from_shared(provider: Arc<dyn ThemeFileProvider>, registry: ComponentRegistry) -> Self {
        Self { provider, registry }
    }

    #[must_use]
    pub fn provider(&self) -> &dyn ThemeFileProvider {
        self.provider.as_ref()
    }

    #[must_use]
    pub const fn registry(&self) -> &ComponentRegistry {
        &self.registry
    }

    /// Resolves every page of `theme_id`.
    ///
    /// The registry snapshot is taken once the settings document has been read, so one
    /// resolution never mixes two registry versions.
    ///
    /// # Errors
    /// [`ThemeError::ThemeNotFound`] when the theme does not exist (or its existence cannot
    /// be checked), [`ThemeError::InvalidThemeSettings`] when its document cannot be read
    /// or is not an object with a `pages` array.
    #[instrument(skip(self))]
    pub async fn resolve_theme(&self, theme_id: &str) -> Result<ThemeComposition, ThemeError> {
        match self.provider.theme_exists(theme_id).await {
            Ok(true) => {},
            Ok(false) => {
                return Err(ThemeError::ThemeNotFound { theme_id: theme_id.to_owned(), detail: None });
            },
            Err(err) => {
                return Err(ThemeError::ThemeNotFound {
                    theme_id: theme_id.to_owned(),
                    detail: Some(err.to_string().into()),
                });
            },
        }

        let document = self.provider.theme_settings(theme_id).await.map_err(|err| {
            ThemeError::InvalidThemeSettings { theme_id: theme_id.to_owned(), detail: err.to_string().into() }
        })?;

        let snapshot = self.registry.snapshot();
        let composition = resolve_document(theme_id, &document, &snapshot)?;

        for issue in &composition.issues {
            warn!(kind = issue.kind(), %issue, "Skipped while resolving theme");
        }
        info!(
            pages = composition.pages.len(),
            issues = composition.issues.len(),
            registry_generation = snapshot.generation(),
            "Theme resolved"
        );

        Ok(composition)
    }
}

/// Resolves an already loaded settings document.
///
/// # Errors
/// [`ThemeError::InvalidThemeSettings`] when `document` is not an object with a `pages`
/// array.
pub fn resolve_document(
    theme_id: &str,
    document: &Value,
    registry: &RegistrySnapshot,
) -> Result<ThemeComposition, ThemeError> {
    let raw_pages = pages_of(document).map_err(|detail| ThemeError::InvalidThemeSettings {
        theme_id: theme_id.to_owned(),
        detail: detail.into(),
    })?;

    let mut issues = Vec::new();
    let pages = build_pages(raw_pages, registry, &mut issues).into_iter().map(plan_page).collect();

    Ok(ThemeComposition { theme_id: theme_id.to_owned(), pages, issues })
}

fn pages_of(document: &Value) -> Result<&[Value], &'static str> {
    let Some(object) = document.as_object() else {
        return Err("settings document must be a JSON object");
    };
    match object.get("pages") {
        Some(Value::Array(pages)) => Ok(pages),
        Some(_) => Err("`pages` must be an array"),
        None => Err("settings document has no `pages` array"),
    }
}

/// Validates raw page entries, pushing one issue per skipped page or component.
///
/// Pages keep their declared order and every valid instance, hidden ones included.
pub fn build_pages(
    raw_pages: &[Value],
    registry: &RegistrySnapshot,
    issues: &mut Vec<ResolutionIssue>,
) -> Vec<PageDefinition> {
    let mut seen = FxHashSet::default();
    let mut pages = Vec::with_capacity(raw_pages.len());

    for (page_index, raw) in raw_pages.iter().enumerate() {
        let invalid = |field: &str| ResolutionIssue::InvalidPageDefinition {
            page_index,
            field: field.to_owned(),
        };

        let Some(object) = raw.as_object() else {
            issues.push(invalid("."));
            continue;
        };
        let Some(id) = non_empty_str(object.get("id")) else {
            issues.push(invalid("id"));
            continue;
        };
        // Same rule as component ids: the first page naming an id owns it, valid or not.
        if !seen.insert(id) {
            issues.push(ResolutionIssue::DuplicatePageId { page_index, page_id: id.to_owned() });
            continue;
        }

        let page = match PageFields::parse(id, object) {
            Ok(page) => page,
            Err(field) => {
                issues.push(invalid(field));
                continue;
            },
        };

        let components = build_components(page.id, page.components, registry, issues);
        debug!(page_id = page.id, components = components.len(), "Page validated");
        pages.push(PageDefinition {
            id: page.id.to_owned(),
            name: page.name.to_owned(),
            path: page.path.to_owned(),
            components,
        });
    }

    pages
}

/// Drops hidden instances and stable-sorts the rest by `order`.
#[must_use]
pub fn plan_page(page: PageDefinition) -> ResolvedPage {
    let mut components: Vec<_> = page.components.into_iter().filter(|c| c.is_visible).collect();
    components.sort_by_key(|c| c.order);

    ResolvedPage { id: page.id, name: page.name, path: page.path, components }
}

fn build_components(
    page_id: &str,
    raw_components: &[Value],
    registry: &RegistrySnapshot,
    issues: &mut Vec<ResolutionIssue>,
) -> Vec<ComponentInstance> {
    let mut seen = FxHashSet::default();
    let mut components = Vec::with_capacity(raw_components.len());

    for (component_index, raw) in raw_components.iter().enumerate() {
        let invalid = |field: &str| ResolutionIssue::InvalidComponentDefinition {
            page_id: page_id.to_owned(),
            component_index,
            field: field.to_owned(),
        };

        let Some(object) = raw.as_object() else {
            issues.push(invalid("."));
            continue;
        };
        let Some(id) = non_empty_str(object.get("id")) else {
            issues.push(invalid("id"));
            continue;
        };
        // Claimed before anything else is checked: a later entry reusing the id is a
        // duplicate even if the first one turns out to be invalid.
        if !seen.insert(id) {
            issues.push(ResolutionIssue::DuplicateComponentId {
                page_id: page_id.to_owned(),
                component_id: id.to_owned(),
            });
            continue;
        }

        let fields = match ComponentFields::parse(object) {
            Ok(fields) => fields,
            Err(field) => {
                issues.push(invalid(field));
                continue;
            },
        };

        let Some(declaration) = registry.resolve(fields.key) else {
            issues.push(ResolutionIssue::UnknownComponent {
                page_id: page_id.to_owned(),
                component_id: id.to_owned(),
                key: fields.key.to_owned(),
            });
            continue;
        };

        let empty = Map::new();
        let settings = match declaration.validate(fields.settings.unwrap_or(&empty)) {
            Ok(settings) => settings,
            Err(err) => {
                issues.push(ResolutionIssue::InvalidComponentSettings {
                    page_id: page_id.to_owned(),
                    component_id: id.to_owned(),
                    key: fields.key.to_owned(),
                    detail: err.to_string(),
                });
                continue;
            },
        };

        components.push(ComponentInstance {
            id: id.to_owned(),
            component_key: fields.key.to_owned(),
            title: fields.title.to_owned(),
            settings,
            order: fields.order,
            is_visible: fields.is_visible,
        });
    }

    components
}

struct PageFields<'a> {
    id: &'a str,
    name: &'a str,
    path: &'a str,
    components: &'a [Value],
}

impl<'a> PageFields<'a> {
    /// Borrows the remaining page fields, or names the first offending one.
    fn parse(id: &'a str, object: &'a Map<String, Value>) -> Result<Self, &'static str> {
        let name = object.get("name").and_then(Value::as_str).ok_or("name")?;
        let path = object.get("path").and_then(Value::as_str).ok_or("path")?;
        let components = match object.get("components") {
            None | Some(Value::Null) => &[][..],
            Some(Value::Array(components)) => components.as_slice(),
            Some(_) => return Err("components"),
        };

        Ok(Self { id, name, path, components })
    }
}

/// Optional component fields with their defaults applied. `null` counts as absent.
struct ComponentFields<'a> {
    key: &'a str,
    title: &'a str,
    settings: Option<&'a Map<String, Value>>,
    order: i64,
    is_visible: bool,
}

impl<'a> ComponentFields<'a> {
    fn parse(object: &'a Map<String, Value>) -> Result<Self, &'static str> {
        let key = non_empty_str(object.get("componentKey")).ok_or("componentKey")?;

        let title = match present(object, "title") {
            None => "",
            Some(value) => value.as_str().ok_or("title")?,
        };
        let settings = match present(object, "settings") {
            None => None,
            Some(value) => Some(value.as_object().ok_or("settings")?),
        };
        let order = match present(object, "order") {
            None => 0,
            Some(value) => value.as_i64().ok_or("order")?,
        };
        let is_visible = match present(object, "isVisible") {
            None => true,
            Some(value) => value.as_bool().ok_or("isVisible")?,
        };

        Ok(Self { key, title, settings, order, is_visible })
    }
}

fn present<'a>(object: &'a Map<String, Value>, field: &str) -> Option<&'a Value> {
    object.get(field).filter(|value| !value.is_null())
}

fn non_empty_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str).filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tessera_components::ComponentRegistry;

    fn resolve(document: &Value) -> ThemeComposition {
        let registry = ComponentRegistry::with_builtins();
        resolve_document("test", document, &registry.snapshot()).unwrap()
    }

    #[test]
    fn document_shape_is_checked() {
        let snapshot = ComponentRegistry::with_builtins().snapshot();
        for bad in [json!([]), json!({}), json!({ "pages": {} }), json!("pages")] {
            let err = resolve_document("t", &bad, &snapshot).unwrap_err();
            assert!(matches!(err, ThemeError::InvalidThemeSettings { .. }), "{bad}");
        }
    }

    #[test]
    fn defaults_apply_to_optional_fields() {
        let composition = resolve(&json!({
            "pages": [{ "id": "home", "name": "Home", "path": "/",
                        "components": [{ "id": "f", "componentKey": "footer" }] }]
        }));

        let instance = &composition.pages[0].components[0];
        assert_eq!(instance.title, "");
        assert_eq!(instance.order, 0);
        assert!(instance.is_visible);
        assert!(composition.is_clean());
    }

    #[test]
    fn page_without_components_is_kept_empty() {
        let composition =
            resolve(&json!({ "pages": [{ "id": "about", "name": "About", "path": "/about" }] }));
        assert_eq!(composition.page_ids().collect::<Vec<_>>(), ["about"]);
        assert!(composition.pages[0].components.is_empty());
    }

    #[test]
    fn malformed_page_fields_are_named() {
        let composition = resolve(&json!({
            "pages": [
                "not-a-page",
                { "id": "", "name": "Empty", "path": "/" },
                { "id": "a", "path": "/" },
                { "id": "b", "name": "B", "path": 3 },
                { "id": "c", "name": "C", "path": "/c", "components": {} },
                { "id": "ok", "name": "Ok", "path": "/ok" }
            ]
        }));

        let fields: Vec<_> = composition
            .issues
            .iter()
            .map(|issue| match issue {
                ResolutionIssue::InvalidPageDefinition { page_index, field } => (*page_index, field.as_str()),
                other => panic!("unexpected issue {other}"),
            })
            .collect();
        assert_eq!(fields, [(0, "."), (1, "id"), (2, "name"), (3, "path"), (4, "components")]);
        assert_eq!(composition.page_ids().collect::<Vec<_>>(), ["ok"]);
    }

    #[test]
    fn malformed_component_fields_are_named() {
        let composition = resolve(&json!({
            "pages": [{ "id": "home", "name": "Home", "path": "/", "components": [
                7,
                { "componentKey": "hero" },
                { "id": "k" },
                { "id": "o", "componentKey": "hero", "order": 1.5 },
                { "id": "v", "componentKey": "hero", "isVisible": "yes" },
                { "id": "s", "componentKey": "hero", "settings": [] },
                { "id": "t", "componentKey": "hero", "title": 1 },
                { "id": "n", "componentKey": "hero", "title": null, "order": null }
            ]}]
        }));

        let fields: Vec<_> = composition
            .issues
            .iter()
            .filter_map(|issue| match issue {
                ResolutionIssue::InvalidComponentDefinition { component_index, field, .. } => {
                    Some((*component_index, field.as_str()))
                },
                _ => None,
            })
            .collect();
        assert_eq!(
            fields,
            [(0, "."), (1, "id"), (2, "componentKey"), (3, "order"), (4, "isVisible"), (5, "settings"), (6, "title")]
        );
        assert_eq!(composition.pages[0].component_ids().collect::<Vec<_>>(), ["n"]);
    }

    #[test]
    fn duplicate_id_is_reserved_even_by_an_invalid_first_entry() {
        let composition = resolve(&json!({
            "pages": [{ "id": "home", "name": "Home", "path": "/", "components": [
                { "id": "c1", "componentKey": "ghost" },
                { "id": "c1", "componentKey": "hero" }
            ]}]
        }));

        assert!(composition.pages[0].components.is_empty());
        assert_eq!(composition.issues.len(), 2);
        assert!(matches!(composition.issues[0], ResolutionIssue::UnknownComponent { .. }));
        assert!(matches!(composition.issues[1], ResolutionIssue::DuplicateComponentId { .. }));
    }

    #[test]
    fn page_id_is_reserved_even_by_an_invalid_first_page() {
        let composition = resolve(&json!({
            "pages": [
                { "id": "home", "path": "/" },
                { "id": "home", "name": "Home", "path": "/" }
            ]
        }));

        assert!(composition.pages.is_empty());
        assert_eq!(
            composition.issues,
            [
                ResolutionIssue::InvalidPageDefinition { page_index: 0, field: "name".into() },
                ResolutionIssue::DuplicatePageId { page_index: 1, page_id: "home".into() },
            ]
        );
    }

    #[test]
    fn hidden_instances_are_still_validated() {
        let composition = resolve(&json!({
            "pages": [{ "id": "home", "name": "Home", "path": "/", "components": [
                { "id": "g", "componentKey": "gallery", "isVisible": false, "settings": { "columns": 9 } }
            ]}]
        }));

        assert!(matches!(
            composition.issues.as_slice(),
            [ResolutionIssue::InvalidComponentSettings { component_id, .. }] if component_id == "g"
        ));
    }
}
