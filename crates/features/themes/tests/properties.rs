//! Ordering, visibility and uniqueness hold for arbitrary well-formed themes.

use proptest::prelude::*;
use serde_json::{Value, json};
use std::collections::HashSet;
use tessera_components::ComponentRegistry;
use tessera_themes::ResolutionIssue;
use tessera_themes::resolver::resolve_document;

#[derive(Debug, Clone)]
struct RawComponent {
    id: String,
    key: &'static str,
    order: i64,
    visible: bool,
}

fn component() -> impl Strategy<Value = RawComponent> {
    (
        "c[0-9]",
        prop::sample::select(vec!["header", "hero", "footer", "gallery", "ghost"]),
        -3i64..3,
        any::<bool>(),
    )
        .prop_map(|(id, key, order, visible)| RawComponent { id, key, order, visible })
}

fn document(pages: &[Vec<RawComponent>]) -> Value {
    let pages: Vec<Value> = pages
        .iter()
        .enumerate()
        .map(|(index, components)| {
            let components: Vec<Value> = components
                .iter()
                .map(|c| json!({ "id": c.id, "componentKey": c.key, "order": c.order, "isVisible": c.visible }))
                .collect();
            json!({ "id": format!("p{index}"), "name": "Page", "path": format!("/{index}"), "components": components })
        })
        .collect();
    json!({ "pages": pages })
}

proptest! {
    #[test]
    fn resolved_pages_respect_every_invariant(
        pages in prop::collection::vec(prop::collection::vec(component(), 0..12), 1..4)
    ) {
        let registry = ComponentRegistry::with_builtins();
        let snapshot = registry.snapshot();
        let composition = resolve_document("prop", &document(&pages), &snapshot).unwrap();

        prop_assert_eq!(composition.pages.len(), pages.len());

        for (raw, page) in pages.iter().zip(&composition.pages) {
            // First occurrence index of each id, and which ids repeat.
            let mut first_index = Vec::new();
            let mut seen = HashSet::new();
            for (index, c) in raw.iter().enumerate() {
                if seen.insert(c.id.clone()) {
                    first_index.push((c.id.clone(), index));
                }
            }
            let position = |id: &str| first_index.iter().find(|(i, _)| i == id).map(|(_, p)| *p);

            let mut ids = HashSet::new();
            for pair in page.components.windows(2) {
                prop_assert!(pair[0].order <= pair[1].order);
                if pair[0].order == pair[1].order {
                    prop_assert!(position(&pair[0].id) < position(&pair[1].id));
                }
            }
            for instance in &page.components {
                prop_assert!(instance.is_visible);
                prop_assert!(snapshot.contains(&instance.component_key));
                prop_assert!(ids.insert(instance.id.clone()), "duplicate id {}", instance.id);
            }

            let expected = first_index
                .iter()
                .filter(|(_, index)| raw[*index].visible && raw[*index].key != "ghost")
                .count();
            prop_assert_eq!(page.components.len(), expected);

            let duplicates = raw.len() - first_index.len();
            let reported = composition
                .issues_for_page(&page.id)
                .filter(|issue| matches!(issue, ResolutionIssue::DuplicateComponentId { .. }))
                .count();
            prop_assert_eq!(reported, duplicates);
        }
    }
}
