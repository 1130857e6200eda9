use crate::categories::CategoryFilter;
use crate::types::Distribution;

/// `query_lower` must already be lowercased. The empty query matches everything.
pub(crate) fn distribution_matches(
    distribution: &Distribution,
    query_lower: &str,
    filter: CategoryFilter,
) -> bool {
    let matches_search = distribution.name_lower.contains(query_lower)
        || distribution.description_lower.contains(query_lower);

    matches_search && filter.matches(distribution.category)
}

pub(crate) fn filter_distributions<'a>(
    distributions: &'a [Distribution],
    query: &str,
    filter: CategoryFilter,
) -> Vec<&'a Distribution> {
    let query_lower = query.to_lowercase();
    distributions
        .iter()
        .filter(|distribution| distribution_matches(distribution, &query_lower, filter))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::categories::Category;

    fn records() -> Vec<Distribution> {
        vec![
            Distribution::sample(
                "1",
                "Ubuntu",
                "The most popular Linux distribution for desktop and server use.",
                Category::Desktop,
            ),
            Distribution::sample(
                "2",
                "Debian",
                "The universal operating system, stable and reliable.",
                Category::Server,
            ),
            Distribution::sample(
                "3",
                "Kubuntu",
                "Ubuntu flavour with the KDE Plasma desktop.",
                Category::Desktop,
            ),
            Distribution::sample(
                "4",
                "Arch Linux",
                "A lightweight and flexible Linux distribution for advanced users.",
                Category::Advanced,
            ),
        ]
    }

    fn names(result: &[&Distribution]) -> Vec<String> {
        result.iter().map(|d| d.name.clone()).collect()
    }

    #[test]
    fn empty_query_with_all_returns_everything_in_order() {
        let records = records();
        let result = filter_distributions(&records, "", CategoryFilter::All);
        assert_eq!(names(&result), ["Ubuntu", "Debian", "Kubuntu", "Arch Linux"]);
    }

    #[test]
    fn query_is_case_insensitive_over_name() {
        let records = vec![
            Distribution::sample("1", "Ubuntu", "Friendly desktop.", Category::Desktop),
            Distribution::sample("2", "Debian", "Universal OS.", Category::Server),
        ];
        let result = filter_distributions(&records, "ubuntu", CategoryFilter::All);
        assert_eq!(names(&result), ["Ubuntu"]);

        let result = filter_distributions(&records, "UBUNTU", CategoryFilter::All);
        assert_eq!(names(&result), ["Ubuntu"]);
    }

    #[test]
    fn query_matches_description_too() {
        let records = records();
        let result = filter_distributions(&records, "plasma", CategoryFilter::All);
        assert_eq!(names(&result), ["Kubuntu"]);

        let result = filter_distributions(&records, "LINUX DISTRIBUTION", CategoryFilter::All);
        assert_eq!(names(&result), ["Ubuntu", "Arch Linux"]);
    }

    #[test]
    fn category_and_query_combine() {
        let records = records();
        let result = filter_distributions(
            &records,
            "ubuntu",
            CategoryFilter::Only(Category::Desktop),
        );
        assert_eq!(names(&result), ["Ubuntu", "Kubuntu"]);

        let result =
            filter_distributions(&records, "ubuntu", CategoryFilter::Only(Category::Server));
        assert!(result.is_empty());
    }

    #[test]
    fn category_without_members_yields_no_results() {
        let records = records();
        let result = filter_distributions(&records, "", CategoryFilter::Only(Category::Gaming));
        assert!(result.is_empty());
    }

    #[test]
    fn query_is_not_trimmed() {
        let records = records();
        let result = filter_distributions(&records, " ubuntu ", CategoryFilter::All);
        assert!(result.is_empty());
    }

    #[test]
    fn result_partitions_the_record_set() {
        let records = records();
        let queries = ["", "u", "linux", "os", "zzz", "Desktop"];
        let filters = [
            CategoryFilter::All,
            CategoryFilter::Only(Category::Desktop),
            CategoryFilter::Only(Category::Server),
            CategoryFilter::Only(Category::Gaming),
        ];

        for query in queries {
            for filter in filters {
                let result = filter_distributions(&records, query, filter);
                let needle = query.to_lowercase();
                for record in &records {
                    let expected = filter.matches(record.category)
                        && (record.name.to_lowercase().contains(&needle)
                            || record.description.to_lowercase().contains(&needle));
                    let included = result.iter().any(|d| d.id == record.id);
                    assert_eq!(included, expected, "query {query:?} filter {filter:?}");
                }
            }
        }
    }
}
