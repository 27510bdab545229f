//! Make/model catalog helpers shared by the form and the catalog client.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod tests;

/// Number of model years offered once a model is selected.
pub const YEAR_OPTIONS: usize = 30;

/// Clean up model names returned by the third-party catalog.
///
/// Some catalog entries repeat the make as a word of the model name
/// (`"Corolla Corolla LE"` under make `"Corolla"`). Whitespace-separated
/// words equal to the make (ignoring ASCII case) are dropped; a make embedded
/// in a longer word (`"Mazda3"`, `"Rampage"`) is kept. Empties are dropped and
/// the list is sorted and deduplicated.
#[must_use]
pub fn normalize_model_names<I, S>(make: &str, names: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let make = make.trim();
    let mut models: Vec<String> = names
        .into_iter()
        .map(|name| strip_make(make, name.as_ref()))
        .filter(|name| !name.is_empty())
        .collect();
    models.sort();
    models.dedup();
    models
}

fn strip_make(make: &str, name: &str) -> String {
    if make.is_empty() {
        return name.trim().to_owned();
    }
    name.split_whitespace()
        .filter(|word| !word.eq_ignore_ascii_case(make))
        .collect::<Vec<_>>()
        .join(" ")
}

/// The [`YEAR_OPTIONS`] most recent model years, newest first.
#[must_use]
pub fn year_options(current_year: i32) -> Vec<i32> {
    (i32::MIN..=current_year).rev().take(YEAR_OPTIONS).collect()
}
