use leptos::prelude::*;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    #[default]
    Analyze,
    Search,
    Batch,
}

impl Tab {
    pub const ALL: [Tab; 3] = [Tab::Analyze, Tab::Search, Tab::Batch];

    /// Identifier carried by the tab button (`data-tab`).
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Analyze => "analyze",
            Tab::Search => "search",
            Tab::Batch => "batch",
        }
    }

    /// Identifier of the content panel: the tab id followed by `Tab`.
    pub fn panel_id(&self) -> String {
        format!("{}Tab", self.id())
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Analyze => "Analyze Text",
            Tab::Search => "Search News",
            Tab::Batch => "Batch Check",
        }
    }
}

/// Exactly one tab is active because there is exactly one slot to hold it.
#[derive(Clone, Copy)]
pub struct TabState {
    pub active: RwSignal<Tab>,
}

impl TabState {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(Tab::default()),
        }
    }

    pub fn activate(&self, tab: Tab) {
        self.active.set(tab);
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active.get() == tab
    }
}

impl Default for TabState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_id_is_derived_from_tab_id() {
        assert_eq!(Tab::Analyze.panel_id(), "analyzeTab");
        assert_eq!(Tab::Search.panel_id(), "searchTab");
        assert_eq!(Tab::Batch.panel_id(), "batchTab");
    }

    #[test]
    fn test_exactly_one_tab_active() {
        Owner::new().with(|| {
            let tabs = TabState::new();
            for target in Tab::ALL {
                tabs.activate(target);
                let active: Vec<Tab> = Tab::ALL
                    .into_iter()
                    .filter(|tab| tabs.active.get_untracked() == *tab)
                    .collect();
                assert_eq!(active, vec![target]);
            }
        });
    }
}
