mod flag;

pub use flag::{flag_for, regional_indicators};

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Country table embedded at compile time.
static COUNTRIES_JSON: &str = include_str!("../../assets/countries.json");

// Sorted by continent, then by name, which is the order the selector shows.
static COUNTRIES: Lazy<Vec<Country>> = Lazy::new(|| {
    let mut countries: Vec<Country> =
        serde_json::from_str(COUNTRIES_JSON).expect("countries.json is invalid");
    countries.sort_by(|a, b| {
        a.continent
            .cmp(&b.continent)
            .then_with(|| a.name.cmp(&b.name))
    });
    countries
});

static CALLING_CODE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[1-9][0-9]{0,2}$").unwrap());

/// Grouping label used by the country selector. Declared in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    #[serde(rename = "Middle East")]
    MiddleEast,
    #[serde(rename = "North America")]
    NorthAmerica,
    Oceania,
    Other,
    #[serde(rename = "South America")]
    SouthAmerica,
}

impl Continent {
    pub fn label(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::MiddleEast => "Middle East",
            Continent::NorthAmerica => "North America",
            Continent::Oceania => "Oceania",
            Continent::Other => "Other",
            Continent::SouthAmerica => "South America",
        }
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One selectable calling code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub code: String,
    pub name: String,
    pub continent: Continent,
    /// ISO 3166-1 alpha-2 code used for the flag, if any.
    #[serde(default)]
    pub region: Option<String>,
}

impl Country {
    pub fn flag(&self) -> String {
        flag_for(&self.code)
    }

    /// `"<flag> +<code> <name>"`, as shown on the closed selector.
    pub fn label(&self) -> String {
        format!("{} +{} {}", self.flag(), self.code, self.name)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ContinentGroup {
    pub continent: Continent,
    pub countries: Vec<&'static Country>,
}

/// Whether `code` has the shape of a calling code (1 to 3 digits, no leading 0).
pub fn is_calling_code(code: &str) -> bool {
    CALLING_CODE.is_match(code)
}

pub fn all() -> &'static [Country] {
    &COUNTRIES
}

pub fn find(code: &str) -> Option<&'static Country> {
    if !is_calling_code(code) {
        return None;
    }
    COUNTRIES.iter().find(|country| country.code == code)
}

/// Countries whose name, calling code or flag contains `query`.
///
/// Name matching ignores case and a leading `+` is ignored for codes. A blank
/// query matches everything.
pub fn search(query: &str) -> Vec<&'static Country> {
    let query = query.trim().to_lowercase();
    if query.is_empty() {
        return COUNTRIES.iter().collect();
    }
    let code_query = query.trim_start_matches('+');

    COUNTRIES
        .iter()
        .filter(|country| {
            country.name.to_lowercase().contains(&query)
                || (!code_query.is_empty() && country.code.contains(code_query))
                || country.flag().contains(&query)
        })
        .collect()
}

/// Buckets countries under their continent, continents and names sorted.
pub fn group_by_continent(countries: &[&'static Country]) -> Vec<ContinentGroup> {
    let mut sorted = countries.to_vec();
    sorted.sort_by(|a, b| {
        a.continent
            .cmp(&b.continent)
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut groups: Vec<ContinentGroup> = Vec::new();
    for country in sorted {
        match groups.last_mut() {
            Some(group) if group.continent == country.continent => group.countries.push(country),
            _ => groups.push(ContinentGroup {
                continent: country.continent,
                countries: vec![country],
            }),
        }
    }
    groups
}

/// Selector label for a calling code, `None` if the code is not listed.
pub fn display_label(code: &str) -> Option<String> {
    find(code).map(Country::label)
}
