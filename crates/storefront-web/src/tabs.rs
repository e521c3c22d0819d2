/// Tab links of a product page. Each link may point at a pane by id.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabSet {
    panes: Vec<Option<String>>,
}

impl TabSet {
    pub fn new(panes: Vec<Option<String>>) -> Self {
        Self { panes }
    }

    /// Tabs only exist on pages that render panes. Elsewhere the same
    /// `.nav-link` class marks ordinary navigation that must keep working.
    pub fn on_page(panes: Vec<Option<String>>, rendered_panes: usize) -> Option<Self> {
        (rendered_panes > 0 && !panes.is_empty()).then(|| Self::new(panes))
    }

    /// Pane to show once link `index` is active. A link without a pane id
    /// leaves the panes alone.
    pub fn activate(&self, index: usize) -> Option<&str> {
        self.panes.get(index)?.as_deref().filter(|id| !id.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn activate_returns_pane_id() {
        let tabs = TabSet::new(vec![Some("description".into()), Some("specs".into())]);
        assert_eq!(tabs.activate(1), Some("specs"));
        assert_eq!(tabs.activate(0), Some("description"));
    }

    #[test]
    fn link_without_pane_leaves_panes_alone() {
        let tabs = TabSet::new(vec![Some("description".into()), None, Some(String::new())]);
        assert_eq!(tabs.activate(1), None);
        assert_eq!(tabs.activate(2), None);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let tabs = TabSet::new(vec![None]);
        assert_eq!(tabs.activate(3), None);
    }

    #[test]
    fn nav_links_without_panes_are_not_tabs() {
        assert_eq!(TabSet::on_page(vec![None, Some("cart".into())], 0), None);
        assert_eq!(TabSet::on_page(Vec::new(), 2), None);

        let tabs = TabSet::on_page(vec![None, Some("reviews".into())], 2);
        assert_eq!(tabs.and_then(|t| t.activate(1).map(str::to_string)), Some("reviews".into()));
    }
}
