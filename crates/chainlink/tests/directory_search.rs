use chainlink::directory::{
    filter, Directory, DirectoryEntry, DirectoryFilter, EntryId, FilterCriteria,
};

fn names<'a>(entries: &[&'a DirectoryEntry]) -> Vec<&'a str> {
    entries.iter().map(|entry| entry.name.as_str()).collect()
}

#[test]
fn empty_criteria_return_every_entry_in_catalog_order() {
    let directory = Directory::seeded();
    let results = directory.search(&FilterCriteria::default());

    assert_eq!(results.len(), directory.entries().len());
    for (found, listed) in results.iter().zip(directory.entries()) {
        assert_eq!(found.id, listed.id, "filtering must not reorder entries");
    }
}

#[test]
fn sentinel_values_behave_like_empty_filters() {
    let directory = Directory::seeded();
    let criteria = FilterCriteria {
        search: String::new(),
        location: "All Locations".to_string(),
        category: "All Categories".to_string(),
        size: "All Sizes".to_string(),
    };

    assert!(criteria.is_empty());
    assert_eq!(directory.search(&criteria).len(), directory.entries().len());
}

#[test]
fn any_case_substring_of_a_name_finds_the_entry() {
    let directory = Directory::seeded();
    for entry in directory.entries() {
        let lower = entry.name.to_lowercase();
        let fragment = &lower[..lower.len().min(5)];
        let mut state = DirectoryFilter::new();
        state.set_search(fragment.to_uppercase());

        let results = state.results(directory.entries());
        assert!(
            results.iter().any(|found| found.id == entry.id),
            "{} should match search '{}'",
            entry.name,
            fragment.to_uppercase()
        );
    }
}

#[test]
fn unknown_category_yields_nothing() {
    let directory = Directory::seeded();
    let criteria = FilterCriteria {
        category: "Aerospace".to_string(),
        ..FilterCriteria::default()
    };
    assert!(directory.search(&criteria).is_empty());
}

#[test]
fn search_and_category_narrow_to_tech_components() {
    let directory = Directory::seeded();
    let criteria = FilterCriteria {
        search: "tech".to_string(),
        category: "Electronics".to_string(),
        ..FilterCriteria::default()
    };

    let results = filter(directory.entries(), &criteria);
    assert_eq!(names(&results), vec!["TechComponents Ltd"]);
}

#[test]
fn search_matches_specialties_and_combines_with_location() {
    let directory = Directory::seeded();
    let mut state = DirectoryFilter::new();
    state.set_search("sustainable");

    let by_specialty = state.results(directory.entries());
    assert_eq!(
        names(&by_specialty),
        vec!["GreenPack Solutions", "TextilePro Manufacturing"]
    );

    state.set_location("Turkey");
    assert_eq!(
        names(&state.results(directory.entries())),
        vec!["TextilePro Manufacturing"]
    );

    state.clear();
    assert!(!state.is_active());
    assert_eq!(state.results(directory.entries()).len(), directory.entries().len());
}

#[test]
fn connection_requests_name_the_manufacturer() {
    let directory = Directory::seeded();
    let request = directory
        .request_connection(EntryId(3))
        .expect("seeded manufacturer");
    assert_eq!(request.message, "Connection request sent to MediSupply Corp!");

    assert!(directory.request_connection(EntryId(99)).is_err());
}
