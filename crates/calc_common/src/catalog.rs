//! Tool catalog - the static list behind the landing page
//!
//! The catalog is a compile-time constant. Filtering never reorders it: the
//! result of `filter_tools` is always a subsequence of `catalog()`.

use crate::error::CatalogError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Message shown when a search matches nothing
pub const NO_TOOLS_FOUND: &str = "No tools found. Try a different search! 🔍";

/// Category selector entries, in display order
pub const CATEGORY_CHOICES: [&str; 5] = ["All", "Personal", "Education", "Business", "Finance"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    Personal,
    Education,
    Business,
    Finance,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::Personal,
        Category::Education,
        Category::Business,
        Category::Finance,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Personal => "Personal",
            Category::Education => "Education",
            Category::Business => "Business",
            Category::Finance => "Finance",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category selection: everything, or a single category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => *wanted == category,
        }
    }
}

impl FromStr for CategoryFilter {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        if wanted.eq_ignore_ascii_case("all") {
            return Ok(CategoryFilter::All);
        }
        Category::ALL
            .iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(wanted))
            .map(|c| CategoryFilter::Only(*c))
            .ok_or_else(|| CatalogError::UnknownCategory(s.to_string()))
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All"),
            CategoryFilter::Only(c) => c.fmt(f),
        }
    }
}

/// One calculator as listed on the landing page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub category: Category,
    pub path: &'static str,
    pub keywords: &'static [&'static str],
    pub icon: &'static str,
}

impl ToolDescriptor {
    /// Case-insensitive substring match on name, description or any keyword
    pub fn matches_search(&self, search: &str) -> bool {
        let needle = search.to_lowercase();
        self.name.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
            || self
                .keywords
                .iter()
                .any(|k| k.to_lowercase().contains(&needle))
    }
}

static TOOLS: [ToolDescriptor; 4] = [
    ToolDescriptor {
        id: "age",
        name: "Age Calculator",
        description: "Calculate exact age in years, months and days",
        category: Category::Personal,
        path: "/tools/age",
        keywords: &[
            "age calculator",
            "birthday",
            "date of birth",
            "age in years",
            "age calculator online",
            "calculate age",
            "age calculator india",
        ],
        icon: "📅",
    },
    ToolDescriptor {
        id: "cgpa",
        name: "CGPA to Percentage",
        description: "Convert CGPA to percentage for Indian universities",
        category: Category::Education,
        path: "/tools/cgpa",
        keywords: &[
            "cgpa calculator",
            "gpa to percentage",
            "university cgpa",
            "college cgpa",
            "academic calculator",
            "convertcgpa",
            "vtu cgpa",
            "anna university",
        ],
        icon: "🎓",
    },
    ToolDescriptor {
        id: "gst",
        name: "GST Calculator India",
        description: "Calculate GST and total price instantly",
        category: Category::Business,
        path: "/tools/gst",
        keywords: &[
            "gst calculator",
            "gst calculator india",
            "goods and services tax",
            "tax calculator",
            "business tax",
            "gst rate",
            "indian tax",
        ],
        icon: "💰",
    },
    ToolDescriptor {
        id: "emi",
        name: "EMI Calculator",
        description: "Calculate loan EMI, interest and total amount payable",
        category: Category::Finance,
        path: "/tools/emi",
        keywords: &[
            "emi calculator",
            "loan calculator",
            "emi calculator india",
            "home loan calculator",
            "monthly installment",
            "personal loan",
            "car loan",
        ],
        icon: "🏦",
    },
];

/// The full catalog in declared order
pub fn catalog() -> &'static [ToolDescriptor] {
    &TOOLS
}

/// Tools matching both the search text and the category selection
pub fn filter_tools(search: &str, filter: CategoryFilter) -> Vec<&'static ToolDescriptor> {
    TOOLS
        .iter()
        .filter(|tool| tool.matches_search(search) && filter.matches(tool.category))
        .collect()
}

pub fn find_by_id(id: &str) -> Option<&'static ToolDescriptor> {
    TOOLS.iter().find(|tool| tool.id.eq_ignore_ascii_case(id))
}

/// Trailing slashes are ignored (`/tools/gst/` resolves like `/tools/gst`)
pub fn find_by_path(path: &str) -> Option<&'static ToolDescriptor> {
    let path = path.trim();
    let trimmed = path.trim_end_matches('/');
    TOOLS.iter().find(|tool| tool.path == trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(tools: &[&ToolDescriptor]) -> Vec<&'static str> {
        tools.iter().map(|t| t.name).collect()
    }

    #[test]
    fn test_search_gst_all() {
        let found = filter_tools("gst", CategoryFilter::All);
        assert_eq!(names(&found), vec!["GST Calculator India"]);
    }

    #[test]
    fn test_category_education() {
        let found = filter_tools("", CategoryFilter::Only(Category::Education));
        assert_eq!(names(&found), vec!["CGPA to Percentage"]);
    }

    #[test]
    fn test_empty_search_all_is_full_catalog_in_order() {
        let found = filter_tools("", CategoryFilter::All);
        assert_eq!(
            names(&found),
            vec![
                "Age Calculator",
                "CGPA to Percentage",
                "GST Calculator India",
                "EMI Calculator"
            ]
        );
    }

    #[test]
    fn test_search_is_case_insensitive() {
        assert_eq!(names(&filter_tools("EMI", CategoryFilter::All)), vec!["EMI Calculator"]);
        assert_eq!(names(&filter_tools("BirthDay", CategoryFilter::All)), vec!["Age Calculator"]);
    }

    #[test]
    fn test_search_hits_keywords_and_description() {
        // keyword only
        assert_eq!(names(&filter_tools("car loan", CategoryFilter::All)), vec!["EMI Calculator"]);
        // description only
        assert_eq!(
            names(&filter_tools("total price", CategoryFilter::All)),
            vec!["GST Calculator India"]
        );
    }

    #[test]
    fn test_search_and_category_combine() {
        // "calculator" appears everywhere, category narrows it
        let found = filter_tools("calculator", CategoryFilter::Only(Category::Finance));
        assert_eq!(names(&found), vec!["EMI Calculator"]);

        let none = filter_tools("gst", CategoryFilter::Only(Category::Finance));
        assert!(none.is_empty());
    }

    #[test]
    fn test_no_match() {
        assert!(filter_tools("mortgage-xyz", CategoryFilter::All).is_empty());
    }

    #[test]
    fn test_filter_is_exact_predicate() {
        let searches = ["", "a", "tax", "india", "LOAN", "zzz", "age", "percentage"];
        let mut filters = vec![CategoryFilter::All];
        filters.extend(Category::ALL.iter().map(|c| CategoryFilter::Only(*c)));

        for search in searches {
            for filter in &filters {
                let found = filter_tools(search, *filter);
                let expected: Vec<&ToolDescriptor> = catalog()
                    .iter()
                    .filter(|t| {
                        let s = search.to_lowercase();
                        let text_hit = t.name.to_lowercase().contains(&s)
                            || t.description.to_lowercase().contains(&s)
                            || t.keywords.iter().any(|k| k.to_lowercase().contains(&s));
                        let cat_hit = match filter {
                            CategoryFilter::All => true,
                            CategoryFilter::Only(c) => t.category == *c,
                        };
                        text_hit && cat_hit
                    })
                    .collect();
                assert_eq!(found, expected, "search={:?} filter={}", search, filter);
            }
        }
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("All".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "education".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Education)
        );
        assert!("Sports".parse::<CategoryFilter>().is_err());
    }

    #[test]
    fn test_category_choices_match_enum() {
        for (choice, category) in CATEGORY_CHOICES[1..].iter().zip(Category::ALL.iter()) {
            assert_eq!(*choice, category.as_str());
        }
    }

    #[test]
    fn test_find_by_path_and_id() {
        assert_eq!(find_by_path("/tools/emi").map(|t| t.id), Some("emi"));
        assert_eq!(find_by_path("/tools/gst/").map(|t| t.id), Some("gst"));
        assert!(find_by_path("/tools/unknown").is_none());
        assert_eq!(find_by_id("CGPA").map(|t| t.path), Some("/tools/cgpa"));
    }
}
