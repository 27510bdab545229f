use super::*;

#[test]
fn strips_make_prefix_and_drops_empty_names() {
    let models = normalize_model_names("Corolla", ["Corolla Corolla LE", "Corolla"]);
    assert_eq!(models, vec!["LE".to_owned()]);
}

#[test]
fn keeps_make_embedded_in_a_longer_word() {
    let models = normalize_model_names("Ram", ["Ram 1500", "Rampage"]);
    assert_eq!(models, vec!["1500", "Rampage"]);

    let models = normalize_model_names("Mazda", ["Mazda3", "Mazda Mazda6", "CX-5"]);
    assert_eq!(models, vec!["CX-5", "Mazda3", "Mazda6"]);
}

#[test]
fn make_words_match_regardless_of_case() {
    let models = normalize_model_names("Tesla", ["TESLA Model 3", "tesla Model Y"]);
    assert_eq!(models, vec!["Model 3", "Model Y"]);
}

#[test]
fn sorts_lexicographically() {
    let models = normalize_model_names("Toyota", ["RAV4", "Camry", "Corolla", "4Runner"]);
    assert_eq!(models, vec!["4Runner", "Camry", "Corolla", "RAV4"]);
}

#[test]
fn removes_duplicates_after_cleanup() {
    let models = normalize_model_names("Honda", ["Honda Civic", "Civic", "  Civic  "]);
    assert_eq!(models, vec!["Civic"]);
}

#[test]
fn blank_make_leaves_names_untouched() {
    let models = normalize_model_names("", [" Mustang", "", "Explorer"]);
    assert_eq!(models, vec!["Explorer", "Mustang"]);
}

#[test]
fn empty_input_yields_empty_list() {
    let models = normalize_model_names("Ford", Vec::<String>::new());
    assert!(models.is_empty());
}

#[test]
fn year_options_are_thirty_descending_ending_now() {
    let years = year_options(2026);
    assert_eq!(years.len(), YEAR_OPTIONS);
    assert_eq!(years.first(), Some(&2026));
    assert_eq!(years.last(), Some(&1997));
    assert!(years.windows(2).all(|w| w[0] - w[1] == 1));
}

#[test]
fn year_options_follow_the_supplied_year() {
    for current in [1999, 2024, 2031] {
        let years = year_options(current);
        assert_eq!(years.len(), 30);
        assert_eq!(years[0], current);
        assert!(years.windows(2).all(|w| w[0] > w[1]));
    }
}
