use phf::phf_map;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Category {
    Desktop,
    Server,
    Advanced,
    Beginner,
    Gaming,
}

/// Selection made with the category buttons. `All` is the wildcard.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

static CATEGORY_LABELS: phf::Map<&'static str, Category> = phf_map! {
    "Desktop" => Category::Desktop,
    "Server" => Category::Server,
    "Advanced" => Category::Advanced,
    "Beginner" => Category::Beginner,
    "Gaming" => Category::Gaming,
};

const ALL_LABEL: &str = "All";
const FALLBACK_ICON: &str = "view-grid-symbolic";

impl Category {
    pub(crate) fn label(self) -> &'static str {
        match self {
            Category::Desktop => "Desktop",
            Category::Server => "Server",
            Category::Advanced => "Advanced",
            Category::Beginner => "Beginner",
            Category::Gaming => "Gaming",
        }
    }

    pub(crate) fn from_label(label: &str) -> Option<Self> {
        CATEGORY_LABELS.get(label).copied()
    }
}

impl CategoryFilter {
    pub(crate) fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_LABEL,
            CategoryFilter::Only(category) => category.label(),
        }
    }

    pub(crate) fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(selected) => selected == category,
        }
    }
}

/// Button order shown above the card grid.
pub(crate) fn all_category_filters() -> &'static [CategoryFilter] {
    &[
        CategoryFilter::All,
        CategoryFilter::Only(Category::Desktop),
        CategoryFilter::Only(Category::Server),
        CategoryFilter::Only(Category::Advanced),
        CategoryFilter::Only(Category::Beginner),
        CategoryFilter::Only(Category::Gaming),
    ]
}

pub(crate) fn icon_name_for_filter(filter: CategoryFilter) -> &'static str {
    match filter {
        CategoryFilter::All => FALLBACK_ICON,
        CategoryFilter::Only(category) => icon_name_for_category(category),
    }
}

pub(crate) fn icon_name_for_category(category: Category) -> &'static str {
    match category {
        Category::Desktop => "computer-symbolic",
        Category::Server => "network-server-symbolic",
        Category::Advanced => "utilities-terminal-symbolic",
        Category::Beginner => "starred-symbolic",
        Category::Gaming => "input-gaming-symbolic",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_labels_round_trip() {
        for filter in all_category_filters() {
            match filter {
                CategoryFilter::All => assert_eq!(filter.label(), "All"),
                CategoryFilter::Only(category) => {
                    assert_eq!(Category::from_label(category.label()), Some(*category));
                    assert_eq!(filter.label(), category.label());
                }
            }
        }
        assert_eq!(Category::from_label("All"), None);
        assert_eq!(Category::from_label("Embedded"), None);
        assert_eq!(Category::from_label("desktop"), None);
    }

    #[test]
    fn all_filter_matches_every_category() {
        let categories = [
            Category::Desktop,
            Category::Server,
            Category::Advanced,
            Category::Beginner,
            Category::Gaming,
        ];
        for category in categories {
            assert!(CategoryFilter::All.matches(category));
            assert!(CategoryFilter::Only(category).matches(category));
        }
        assert!(!CategoryFilter::Only(Category::Server).matches(Category::Desktop));
    }
}
