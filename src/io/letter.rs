use std::{
    collections::HashSet,
    fs,
    path::{Path, PathBuf},
};

use crate::{
    common::error::{AppError, Result},
    domain::donor::Donor,
};

/// Renders the thank-you letter for the donor's most recent donation.
///
/// # Errors
///
/// `AppError::NoDonations` if the donor has nothing to be thanked for.
///
/// # Examples
///
/// ```
/// use mailroom::{domain::donor::Donor, io::letter::render_letter};
///
/// let donor = Donor::with_donations("Alice", vec!["10".parse().unwrap(), "25.5".parse().unwrap()]).unwrap();
/// let letter = render_letter(&donor).unwrap();
/// assert!(letter.contains("Thank you for your donation of $25.50."));
/// ```
pub fn render_letter(donor: &Donor) -> Result<String> {
    let last = donor.last_donation().ok_or_else(|| AppError::NoDonations {
        name: donor.name().to_string(),
    })?;
    Ok(format!(
        "\nDear {},\n\nThank you for your donation of ${}.\n",
        donor.name(),
        last.to_string_2dp()
    ))
}

/// File name used for a donor's letter: spaces become underscores and path
/// separators are dropped.
pub fn letter_file_name(name: &str) -> String {
    format!("{}.txt", letter_stem(name))
}

fn letter_stem(name: &str) -> String {
    name.trim()
        .chars()
        .filter(|c| !matches!(c, '/' | '\\'))
        .map(|c| if c.is_whitespace() { '_' } else { c })
        .collect()
}

/// Picks a file name not yet in `used`, appending `_2`, `_3`, ... to the stem
/// when two donor names map to the same file.
fn unique_file_name(name: &str, used: &mut HashSet<String>) -> String {
    let stem = letter_stem(name);
    let mut file_name = format!("{stem}.txt");
    let mut n = 2;
    while used.contains(&file_name) {
        file_name = format!("{stem}_{n}.txt");
        n += 1;
    }
    used.insert(file_name.clone());
    file_name
}

/// Writes one letter per donor with at least one donation into `dir`,
/// creating it if needed. Returns the paths written, in donor order.
///
/// Donors whose names map to the same file name get numbered suffixes, so no
/// letter in the batch overwrites another.
pub fn write_letters<'a, I>(dir: &Path, donors: I) -> Result<Vec<PathBuf>>
where
    I: IntoIterator<Item = &'a Donor>,
{
    fs::create_dir_all(dir)?;

    let mut written = Vec::new();
    let mut used = HashSet::new();
    for donor in donors {
        let letter = match render_letter(donor) {
            Ok(letter) => letter,
            Err(AppError::NoDonations { name }) => {
                tracing::warn!(donor = %name, "skipping letter for donor without donations");
                continue;
            }
            Err(e) => return Err(e),
        };
        let file_name = unique_file_name(donor.name(), &mut used);
        if file_name != letter_file_name(donor.name()) {
            tracing::warn!(
                donor = %donor.name(),
                file = %file_name,
                "letter file name taken, using suffix"
            );
        }
        let path = dir.join(file_name);
        fs::write(&path, letter)?;
        tracing::debug!(path = %path.display(), "letter written");
        written.push(path);
    }
    Ok(written)
}
