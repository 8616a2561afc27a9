#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabPanel {
    pub id: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabLink {
    pub target: String,
    pub active: bool,
}

/// Panels and their links. At most one panel is visible at any time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabSet {
    panels: Vec<TabPanel>,
    links: Vec<TabLink>,
}

impl TabSet {
    /// One panel and one link per id; the first panel starts shown.
    pub fn new(ids: &[&str]) -> Self {
        let panels = ids
            .iter()
            .enumerate()
            .map(|(i, id)| TabPanel {
                id: id.to_string(),
                visible: i == 0,
            })
            .collect();
        let links = ids
            .iter()
            .enumerate()
            .map(|(i, id)| TabLink {
                target: id.to_string(),
                active: i == 0,
            })
            .collect();
        Self { panels, links }
    }

    /// Hides every panel and clears every link, then shows `tab_id` and marks
    /// the link at `origin_link`. An unknown id leaves nothing shown or active.
    pub fn activate(&mut self, origin_link: usize, tab_id: &str) {
        for panel in &mut self.panels {
            panel.visible = false;
        }
        for link in &mut self.links {
            link.active = false;
        }

        let Some(panel) = self.panels.iter_mut().find(|panel| panel.id == tab_id) else {
            log::warn!("No tab panel with id '{}'", tab_id);
            return;
        };
        panel.visible = true;

        match self.links.get_mut(origin_link) {
            Some(link) => link.active = true,
            None => log::warn!("No tab link at index {}", origin_link),
        }
    }

    /// Index of the link that targets `tab_id`.
    pub fn link_for(&self, tab_id: &str) -> Option<usize> {
        self.links.iter().position(|link| link.target == tab_id)
    }

    /// Activates `tab_id` as if its own link had been clicked.
    pub fn open(&mut self, tab_id: &str) {
        let origin_link = self.link_for(tab_id).unwrap_or(self.links.len());
        self.activate(origin_link, tab_id);
    }

    pub fn visible_panel(&self) -> Option<&str> {
        self.panels
            .iter()
            .find(|panel| panel.visible)
            .map(|panel| panel.id.as_str())
    }

    pub fn panels(&self) -> &[TabPanel] {
        &self.panels
    }

    pub fn links(&self) -> &[TabLink] {
        &self.links
    }
}
