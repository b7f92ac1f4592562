// Show-more toggles for feature lists and the tab selection of a week module.
use std::rc::Rc;
use yew::Reducible;

/// Wording of the toggle while the list is collapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ToggleWording {
    /// "Show all N features →"
    #[default]
    ShowAll,
    /// "Show more (hidden) →"
    ShowMore,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FeatureList {
    pub total: usize,
    pub collapsed_limit: usize,
    pub expanded: bool,
    pub wording: ToggleWording,
}

impl FeatureList {
    pub const COMPARISON_LIMIT: usize = 4;
    pub const PRICING_LIMIT: usize = 3;

    pub fn new(total: usize, collapsed_limit: usize, wording: ToggleWording) -> Self {
        Self {
            total,
            collapsed_limit,
            expanded: false,
            wording,
        }
    }

    pub fn comparison(total: usize) -> Self {
        Self::new(total, Self::COMPARISON_LIMIT, ToggleWording::ShowAll)
    }

    pub fn pricing(total: usize) -> Self {
        Self::new(total, Self::PRICING_LIMIT, ToggleWording::ShowMore)
    }

    pub fn has_toggle(&self) -> bool {
        self.total > self.collapsed_limit
    }

    pub fn visible_count(&self) -> usize {
        if self.expanded {
            self.total
        } else {
            self.total.min(self.collapsed_limit)
        }
    }

    pub fn hidden_count(&self) -> usize {
        self.total - self.visible_count()
    }

    /// None when every item already fits.
    pub fn toggle_label(&self) -> Option<String> {
        if !self.has_toggle() {
            return None;
        }
        let label = match (self.expanded, self.wording) {
            (true, _) => "Collapse ↑".to_string(),
            (false, ToggleWording::ShowAll) => format!("Show all {} features →", self.total),
            (false, ToggleWording::ShowMore) => format!("Show more ({}) →", self.hidden_count()),
        };
        Some(label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FeatureListAction {
    Toggle,
    /// The item count changed; the expanded flag survives.
    Resize(usize),
}

impl Reducible for FeatureList {
    type Action = FeatureListAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut new = (*self).clone();
        match action {
            FeatureListAction::Toggle => {
                if !new.has_toggle() {
                    return self;
                }
                new.expanded = !new.expanded;
            }
            FeatureListAction::Resize(total) => new.total = total,
        }
        if new == *self { self } else { Rc::new(new) }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum WeekTab {
    #[default]
    Objectives,
    KeyPoints,
    Practice,
}

impl WeekTab {
    pub const ALL: [WeekTab; 3] = [WeekTab::Objectives, WeekTab::KeyPoints, WeekTab::Practice];

    pub fn label(self) -> &'static str {
        match self {
            WeekTab::Objectives => "Objectives",
            WeekTab::KeyPoints => "Key points",
            WeekTab::Practice => "Practice",
        }
    }

    pub fn id(self) -> &'static str {
        match self {
            WeekTab::Objectives => "objectives",
            WeekTab::KeyPoints => "keyPoints",
            WeekTab::Practice => "practice",
        }
    }
}
