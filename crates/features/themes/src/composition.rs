use crate::issues::ResolutionIssue;
use serde::Serialize;
use tessera_domain::pages::ResolvedPage;

/// The render plan of one theme: its pages in declared order plus everything that had to
/// be left out along the way.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeComposition {
    pub theme_id: String,
    pub pages: Vec<ResolvedPage>,
    pub issues: Vec<ResolutionIssue>,
}

impl ThemeComposition {
    /// No page or component was skipped.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.issues.is_empty()
    }

    #[must_use]
    pub fn page(&self, page_id: &str) -> Option<&ResolvedPage> {
        self.pages.iter().find(|page| page.id == page_id)
    }

    pub fn page_ids(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|page| page.id.as_str())
    }

    /// Issues attributed to `page_id`.
    pub fn issues_for_page<'a>(&'a self, page_id: &'a str) -> impl Iterator<Item = &'a ResolutionIssue> {
        self.issues.iter().filter(move |issue| issue.page_id() == Some(page_id))
    }
}
