use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::util::canonical::normalize;

/// Curated slug → canonical display name pairs for names that generic
/// title-casing cannot reproduce. Built once, read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct ExceptionMap {
    entries: HashMap<&'static str, &'static str>,
}

impl ExceptionMap {
    pub fn from_entries(entries: &'static [(&'static str, &'static str)]) -> Self {
        Self {
            entries: entries.iter().copied().collect(),
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn get(&self, slug: &str) -> Option<&'static str> {
        self.entries.get(slug).copied()
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.entries.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &'static str)> + '_ {
        self.entries.iter().map(|(slug, name)| (*slug, *name))
    }

    /// Entries whose key is not the normalized form of their name. Such an
    /// entry can never be reached from a generated link.
    pub fn audit(&self) -> Vec<(&'static str, &'static str)> {
        let mut mismatched: Vec<_> = self
            .iter()
            .filter(|(slug, name)| normalize(name) != *slug)
            .collect();
        mismatched.sort_unstable();
        mismatched
    }
}

const COUNTRY_ENTRIES: &[(&str, &str)] = &[
    ("aland-islands", "Åland Islands"),
    ("antigua-and-barbuda", "Antigua and Barbuda"),
    ("bosnia-and-herzegovina", "Bosnia and Herzegovina"),
    ("cote-divoire", "Côte d'Ivoire"),
    ("curacao", "Curaçao"),
    ("democratic-republic-of-the-congo", "Democratic Republic of the Congo"),
    ("guinea-bissau", "Guinea-Bissau"),
    ("heard-island-and-mcdonald-islands", "Heard Island and McDonald Islands"),
    ("isle-of-man", "Isle of Man"),
    ("republic-of-the-congo", "Republic of the Congo"),
    ("reunion", "Réunion"),
    ("saint-barthelemy", "Saint Barthélemy"),
    ("saint-kitts-and-nevis", "Saint Kitts and Nevis"),
    ("saint-pierre-and-miquelon", "Saint Pierre and Miquelon"),
    ("saint-vincent-and-the-grenadines", "Saint Vincent and the Grenadines"),
    ("sao-tome-and-principe", "São Tomé and Príncipe"),
    ("timor-leste", "Timor-Leste"),
    ("trinidad-and-tobago", "Trinidad and Tobago"),
    ("turkiye", "Türkiye"),
    ("turks-and-caicos-islands", "Turks and Caicos Islands"),
    ("wallis-and-futuna", "Wallis and Futuna"),
];

const CITY_ENTRIES: &[(&str, &str)] = &[
    ("a-coruna", "A Coruña"),
    ("aix-en-provence", "Aix-en-Provence"),
    ("asuncion", "Asunción"),
    ("bogota", "Bogotá"),
    ("brasilia", "Brasília"),
    ("ciudad-de-mexico", "Ciudad de México"),
    ("cordoba", "Córdoba"),
    ("dusseldorf", "Düsseldorf"),
    ("frankfurt-am-main", "Frankfurt am Main"),
    ("geneve", "Genève"),
    ("gottingen", "Göttingen"),
    ("krakow", "Kraków"),
    ("malmo", "Malmö"),
    ("medellin", "Medellín"),
    ("montreal", "Montréal"),
    ("munster", "Münster"),
    ("port-au-prince", "Port-au-Prince"),
    ("poznan", "Poznań"),
    ("quebec-city", "Québec City"),
    ("reykjavik", "Reykjavík"),
    ("rio-de-janeiro", "Rio de Janeiro"),
    ("san-jose", "San José"),
    ("sao-carlos", "São Carlos"),
    ("sao-paulo", "São Paulo"),
    ("st-johns", "St. John's"),
    ("tel-aviv-yafo", "Tel Aviv-Yafo"),
    ("umea", "Umeå"),
    ("washington-dc", "Washington, D.C."),
    ("xian", "Xi'an"),
    ("zurich", "Zürich"),
];

pub static COUNTRY_EXCEPTIONS: Lazy<ExceptionMap> =
    Lazy::new(|| ExceptionMap::from_entries(COUNTRY_ENTRIES));

pub static CITY_EXCEPTIONS: Lazy<ExceptionMap> =
    Lazy::new(|| ExceptionMap::from_entries(CITY_ENTRIES));
