use serde::Deserialize;

/// Kind of a catalog entry, used to pick its badge in the UI. Unrecognized
/// strings in the data document fall back to [`EntryKind::Other`] rather
/// than failing the load.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "String")]
pub enum EntryKind {
    Core,
    Framework,
    Tool,
    Craft,
    #[default]
    Other,
}

impl From<String> for EntryKind {
    fn from(raw: String) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "core" => EntryKind::Core,
            "framework" => EntryKind::Framework,
            "tool" => EntryKind::Tool,
            "craft" => EntryKind::Craft,
            _ => EntryKind::Other,
        }
    }
}

impl EntryKind {
    pub fn badge(self) -> &'static str {
        match self {
            EntryKind::Core => "core",
            EntryKind::Framework => "fwk",
            EntryKind::Tool => "tool",
            EntryKind::Craft => "craft",
            EntryKind::Other => "misc",
        }
    }
}

/// One filterable row of the skills listing. Immutable after load.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CatalogEntry {
    pub name: String,
    #[serde(default)]
    pub kind: EntryKind,
    /// Proficiency 1..=5; values outside the scale are clamped at render.
    #[serde(default)]
    pub level: u8,
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A named group of catalog entries in declared order.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct CatalogGroup {
    pub name: String,
    pub entries: Vec<CatalogEntry>,
}

/// Active category of the catalog filter: everything, or one named group.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Group(String),
}

/// The combination of active category and search text controlling catalog
/// visibility. The visible entry set is recomputed from this value on every
/// change; nothing about visibility is stored anywhere else.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FilterState {
    pub category: CategoryFilter,
    pub query: String,
}

impl FilterState {
    pub fn set_category(&mut self, category: CategoryFilter) {
        self.category = category;
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn push_query_char(&mut self, ch: char) {
        self.query.push(ch);
    }

    pub fn pop_query_char(&mut self) {
        self.query.pop();
    }

    pub fn clear_query(&mut self) {
        self.query.clear();
    }

    /// Whether an entry of `group` survives the filter: the category must
    /// match (or be `All`) and the query, when non-empty, must be a
    /// case-insensitive substring of the entry name or one of its tags.
    pub fn matches(&self, group: &str, entry: &CatalogEntry) -> bool {
        let category_ok = match &self.category {
            CategoryFilter::All => true,
            CategoryFilter::Group(name) => name == group,
        };
        if !category_ok {
            return false;
        }
        if self.query.is_empty() {
            return true;
        }
        let needle = self.query.to_lowercase();
        contains_ignore_case(&entry.name, &needle)
            || entry.tags.iter().any(|tag| contains_ignore_case(tag, &needle))
    }

    /// The visible subset: surviving entries grouped by their declared
    /// group, groups and entries in declared order, empty groups dropped.
    pub fn visible<'a>(
        &self,
        groups: &'a [CatalogGroup],
    ) -> Vec<(&'a CatalogGroup, Vec<&'a CatalogEntry>)> {
        groups
            .iter()
            .filter_map(|group| {
                let surviving: Vec<&CatalogEntry> = group
                    .entries
                    .iter()
                    .filter(|entry| self.matches(&group.name, entry))
                    .collect();
                if surviving.is_empty() {
                    None
                } else {
                    Some((group, surviving))
                }
            })
            .collect()
    }

    /// Replace the category with its neighbor in the chip row
    /// (`All`, then each declared group), wrapping at both ends.
    pub fn cycle_category(&mut self, groups: &[CatalogGroup], step: isize) {
        let count = groups.len() as isize + 1;
        if count <= 1 {
            return;
        }
        let current = match &self.category {
            CategoryFilter::All => 0,
            CategoryFilter::Group(name) => groups
                .iter()
                .position(|group| group.name == *name)
                .map_or(0, |idx| idx as isize + 1),
        };
        let next = (current + step).rem_euclid(count);
        self.category = if next == 0 {
            CategoryFilter::All
        } else {
            CategoryFilter::Group(groups[(next - 1) as usize].name.clone())
        };
    }
}

fn contains_ignore_case(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::{CatalogEntry, CatalogGroup, CategoryFilter, EntryKind, FilterState};

    fn entry(name: &str, tags: &[&str]) -> CatalogEntry {
        CatalogEntry {
            name: name.to_string(),
            kind: EntryKind::Other,
            level: 3,
            tags: tags.iter().map(ToString::to_string).collect(),
        }
    }

    fn sample() -> Vec<CatalogGroup> {
        vec![
            CatalogGroup {
                name: "Engine".to_string(),
                entries: vec![entry("C# & Unity Core", &["ecs"]), entry("UI Toolkit", &[])],
            },
            CatalogGroup {
                name: "Graphics".to_string(),
                entries: vec![entry("HLSL", &["shaders"]), entry("Blender", &["3d"])],
            },
        ]
    }

    fn visible_names(filter: &FilterState, groups: &[CatalogGroup]) -> Vec<Vec<String>> {
        filter
            .visible(groups)
            .into_iter()
            .map(|(_, entries)| entries.iter().map(|e| e.name.clone()).collect())
            .collect()
    }

    #[test]
    fn default_filter_reproduces_full_catalog_in_declared_order() {
        let groups = sample();
        let filter = FilterState::default();
        assert_eq!(
            visible_names(&filter, &groups),
            vec![
                vec!["C# & Unity Core".to_string(), "UI Toolkit".to_string()],
                vec!["HLSL".to_string(), "Blender".to_string()],
            ]
        );
    }

    #[test]
    fn category_restricts_to_one_group() {
        let groups = sample();
        let mut filter = FilterState::default();
        filter.set_category(CategoryFilter::Group("Graphics".to_string()));
        assert_eq!(
            visible_names(&filter, &groups),
            vec![vec!["HLSL".to_string(), "Blender".to_string()]]
        );
    }

    #[test]
    fn query_matches_names_and_tags_case_insensitively() {
        let groups = sample();
        let mut filter = FilterState::default();

        filter.set_query("unity");
        assert_eq!(
            visible_names(&filter, &groups),
            vec![vec!["C# & Unity Core".to_string()]]
        );

        filter.set_query("SHADERS");
        assert_eq!(
            visible_names(&filter, &groups),
            vec![vec!["HLSL".to_string()]]
        );
    }

    #[test]
    fn category_and_query_compose() {
        let groups = sample();
        let mut filter = FilterState::default();
        filter.set_category(CategoryFilter::Group("Engine".to_string()));
        filter.set_query("shaders");
        assert!(filter.visible(&groups).is_empty());
    }

    #[test]
    fn no_match_query_yields_empty_set() {
        let groups = sample();
        let mut filter = FilterState::default();
        filter.set_query("zzz-no-match");
        assert!(filter.visible(&groups).is_empty());
    }

    #[test]
    fn recomputation_is_idempotent() {
        let groups = sample();
        let mut filter = FilterState::default();
        filter.set_query("l");
        assert_eq!(visible_names(&filter, &groups), visible_names(&filter, &groups));
    }

    #[test]
    fn cycle_category_wraps_both_ways() {
        let groups = sample();
        let mut filter = FilterState::default();

        filter.cycle_category(&groups, 1);
        assert_eq!(filter.category, CategoryFilter::Group("Engine".to_string()));
        filter.cycle_category(&groups, 1);
        assert_eq!(filter.category, CategoryFilter::Group("Graphics".to_string()));
        filter.cycle_category(&groups, 1);
        assert_eq!(filter.category, CategoryFilter::All);

        filter.cycle_category(&groups, -1);
        assert_eq!(filter.category, CategoryFilter::Group("Graphics".to_string()));
    }

    #[test]
    fn unknown_kind_strings_fall_back_to_other() {
        assert_eq!(EntryKind::from("pipeline".to_string()), EntryKind::Other);
        assert_eq!(EntryKind::from("Tool".to_string()), EntryKind::Tool);
    }
}
