/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Geographic facet values from subject headings.
//!
//! Places come from two sources: geographic headings, taken as they are, and
//! chains of geographic subdivisions such as `Texas#Austin`, where each later
//! name is qualified by the one before it: `Austin (Tex.)`.

use std::collections::{HashMap, HashSet};
use std::sync::LazyLock;

use indexmap::IndexSet;
use regex::{Captures, Regex};

use crate::options::FieldSpecs;
use crate::record::RecordFields;

/// Separator between the names of one subdivision chain.
pub const CHAIN_SEPARATOR: char = '#';

const STATE_ABBREVIATIONS: &[(&str, &str)] = &[
    ("Alabama", "Ala."),
    ("Alaska", "Alaska"),
    ("Arizona", "Ariz."),
    ("Arkansas", "Ark."),
    ("California", "Calif."),
    ("Colorado", "Colo."),
    ("Connecticut", "Conn."),
    ("Delaware", "Del."),
    ("Florida", "Fla."),
    ("Georgia", "Ga."),
    ("Hawaii", "Hawaii"),
    ("Idaho", "Idaho"),
    ("Illinois", "Ill."),
    ("Indiana", "Ind."),
    ("Iowa", "Iowa"),
    ("Kansas", "Kan."),
    ("Kentucky", "Ky."),
    ("Louisiana", "La."),
    ("Maine", "Maine"),
    ("Maryland", "Md."),
    ("Massachusetts", "Mass."),
    ("Michigan", "Mich."),
    ("Minnesota", "Minn."),
    ("Mississippi", "Miss."),
    ("Missouri", "Mo."),
    ("Montana", "Mont."),
    ("Nebraska", "Neb."),
    ("Nevada", "Nev."),
    ("New Hampshire", "N.H."),
    ("New Jersey", "N.J."),
    ("New Mexico", "N.M."),
    ("New York", "N.Y."),
    ("North Carolina", "N.C."),
    ("North Dakota", "N.D."),
    ("Ohio", "Ohio"),
    ("Oklahoma", "Okla."),
    ("Oregon", "Or."),
    ("Pennsylvania", "Pa."),
    ("Rhode Island", "R.I."),
    ("South Carolina", "S.C."),
    ("South Dakota", "S.D."),
    ("Tennessee", "Tenn."),
    ("Texas", "Tex."),
    ("Utah", "Utah"),
    ("Vermont", "Vt."),
    ("Virginia", "Va."),
    ("Washington", "Wash."),
    ("West Virginia", "W. Va."),
    ("Wisconsin", "Wis."),
    ("Wyoming", "Wyo."),
    ("New York (State)", "N.Y."),
    ("District of Columbia", "D.C."),
    ("Puerto Rico", "P.R."),
    ("Virgin Islands", "V.I."),
    ("Alberta", "Alta."),
    ("British Columbia", "B.C."),
    ("Manitoba", "Man."),
    ("Newfoundland and Labrador", "N.L."),
    ("New Brunswick", "N.B."),
    ("Northwest Territories", "N.W.T."),
    ("Nova Scotia", "N.S."),
    ("Nunavut", "Nunavut"),
    ("Ontario", "Ont."),
    ("Prince Edward Island", "P.E.I."),
    ("Quebec", "Québec"),
    ("Saskatchewan", "Sask."),
    ("Yukon", "Yukon"),
    ("Australian Capital Territory", "A.C.T."),
    ("New South Wales", "N.S.W."),
    ("Northern Territory", "N.T."),
    ("Queensland", "Qld."),
    ("South Australia", "S. Aust."),
    ("Tasmania", "Tas."),
    ("Victoria", "Vic."),
    ("Western Australia", "W.A."),
];

const LOCATION_TYPE_WORDS: &[&str] = &[
    "State",
    "Republic",
    "Principality",
    "Province",
    "Township",
    "County",
    "Town",
    "Judicial district",
    "Prefecture",
    "Region",
    "District",
    "Dept.",
    "Kingdom",
    "Canton",
    "City",
    "Division",
    "Duchy",
    "Emirate",
    "Government",
    "Country",
    // India
    "Princely State",
    "Presidency",
    "Tahsil",
    "Taluka",
    "Tehsil",
    "Thana",
    // China
    "Sheng",
    // Denmark
    "Amt",
    "Herred",
    // Thailand
    "Amphoe",
    // France
    "Comté",
    // South and Central America
    "Corregimiento",
    "Distrito Federal",
    "Intendancy",
    "Partido",
    // ecclesiastical
    "Diocese",
    "diocese",
    "Archdiocese",
    "Archdeaconry",
    "Ecclesiastical principality",
    // Poland
    "Voivodeship",
    "Powiat",
    // Germany
    "Landkreis",
    "Kreis",
    "Bezirk",
    "Electorate",
    "Grafschaft",
    // Czech Republic
    "Okres",
    // Russia
    "Oblast'",
    "Oblast",
    "Kray",
    // Hungary
    "Comitat",
    // Romania
    "Judet",
    // Indonesia
    "Kabupaten",
    // former places
    "Ancient city",
    "Ancient sanctuary",
    "Ancient site",
    "Extinct city",
    "Concentration camp",
    "Colony",
    "Site",
    // descriptive
    "Peninsula",
    "Coast",
    "Cape",
    "Harbor",
    "Island",
    "Lake",
    "Oasis",
    "Tribal area",
];

/// Names too broad to qualify anything below the first subdivision.
const SKIPPED_SUBDIVISIONS: &[&str] = &["South America", "Central America", "United States"];

static STATES: LazyLock<HashMap<&'static str, &'static str>> =
    LazyLock::new(|| STATE_ABBREVIATIONS.iter().copied().collect());

static LOCATION_TYPES: LazyLock<HashSet<&'static str>> =
    LazyLock::new(|| LOCATION_TYPE_WORDS.iter().copied().collect());

/// A run of letters (with their combining marks), periods, hyphens and spaces.
const NAME: &str = r"(?:\p{L}\p{M}*|\.|[- ])+";
const NAME_END: &str = r"(?:\p{L}\p{M}*|\.)";

/// `Siberia (Russia ...` -> name and first qualifier.
static NAME_AND_QUALIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?P<name>{NAME}{NAME_END})[ ]?\((?P<qualifier>{NAME}).*"
    ))
    .expect("qualifier regex must compile")
});

/// `Rivas (Dept.)`
static SINGLE_QUALIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^.*[ ]?\({NAME}\)$")).expect("single qualifier regex must compile")
});

/// `Satricum (Lazio : Extinct city)`
static TYPED_QUALIFIER_SHAPE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"^{NAME}[ ]?\({NAME} : {NAME}\)$"))
        .expect("typed qualifier regex must compile")
});

static TYPED_QUALIFIER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?P<name>{NAME}{NAME_END})[ ]?\((?P<place>{NAME}) : (?P<kind>{NAME})\)"
    ))
    .expect("typed qualifier regex must compile")
});

/// The postal-style abbreviation of a US state, Canadian province or
/// Australian state or territory.
pub fn state_abbreviation(name: &str) -> Option<&'static str> {
    STATES.get(name).copied()
}

/// Words such as `County` or `Extinct city` that name a kind of place.
pub fn is_location_type_word(word: &str) -> bool {
    LOCATION_TYPES.contains(word)
}

/// Whether `qualifier` already names `place`, alone or in a list.
pub fn is_equals_or_contains(qualifier: &str, place: &str) -> bool {
    qualifier == place
        || qualifier.contains(&format!(" and {place}"))
        || qualifier.contains(&format!("{place} and "))
        || qualifier.contains(&format!(", {place}"))
        || state_abbreviation(place) == Some(qualifier)
}

/// Strip the punctuation a heading carries at the end of a field: trailing
/// `,` `/` `;` `:`, a final period after a word, and enclosing brackets.
///
/// ```
/// use callnum_conflate::region::clean_heading;
/// assert_eq!(clean_heading("Texas. "), "Texas");
/// assert_eq!(clean_heading("U.S."), "U.S.");
/// assert_eq!(clean_heading("[Rome] :"), "Rome");
/// ```
pub fn clean_heading(raw: &str) -> String {
    let mut current = raw.to_string();
    loop {
        let mut cleaned = current.trim();
        if let Some(body) = cleaned.strip_suffix(|c: char| matches!(c, ',' | '/' | ';' | ':')) {
            cleaned = body.trim_end_matches(' ');
        }
        let cleaned = strip_outer_brackets(strip_final_period(cleaned)).to_string();
        if cleaned.is_empty() || cleaned == current {
            return cleaned;
        }
        current = cleaned;
    }
}

fn strip_final_period(s: &str) -> &str {
    let Some(body) = s.strip_suffix('.') else {
        return s;
    };
    let is_word = |c: char| c.is_alphanumeric() || c == '_';
    let mut last = body.chars().rev();
    match (last.next(), last.next()) {
        (Some(a), Some(b)) if is_word(a) && is_word(b) => body,
        (Some(a), _) if a.is_ascii_punctuation() => body,
        _ => s,
    }
}

fn strip_outer_brackets(s: &str) -> &str {
    if let Some(inner) = s.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        return inner;
    }
    if !s.contains(']') {
        if let Some(rest) = s.strip_prefix('[') {
            return rest;
        }
    }
    if !s.contains('[') {
        if let Some(rest) = s.strip_suffix(']') {
            return rest;
        }
    }
    s
}

/// Region facet values: cleaned geographic headings, then the qualified
/// names of every subdivision chain, in order and without duplicates.
pub fn region_facet<R>(record: &R, fields: &FieldSpecs) -> Option<Vec<String>>
where
    R: RecordFields + ?Sized,
{
    let mut regions: IndexSet<String> = record
        .list_field_values(&fields.region_places)
        .iter()
        .map(|place| clean_heading(place))
        .filter(|place| !place.is_empty())
        .collect();
    for chain in record.list_field_values(&fields.region_subdivisions) {
        regions.extend(qualify_chain(&chain));
    }
    (!regions.is_empty()).then(|| regions.into_iter().collect())
}

/// Qualify each name of a `#`-separated chain by the name before it.
///
/// ```
/// use callnum_conflate::region::qualify_chain;
/// assert_eq!(qualify_chain("Germany#Berlin#Tiergarten"), [
///     "Germany",
///     "Berlin (Germany)",
///     "Tiergarten (Berlin, Germany)",
/// ]);
/// ```
pub fn qualify_chain(chain: &str) -> Vec<String> {
    let mut names = chain.split(CHAIN_SEPARATOR).map(clean_heading);
    let Some(mut parent) = names.next() else {
        return Vec::new();
    };
    let mut qualified = vec![parent.clone()];
    let children = names.filter(|name| !SKIPPED_SUBDIVISIONS.contains(&name.as_str()));
    for (i, name) in children.enumerate() {
        if i == 1 {
            // below the second level, qualify by "child, parent" instead
            parent = NAME_AND_QUALIFIER
                .replace_all(&qualified[1], "${name}, ${qualifier}")
                .trim()
                .to_string();
        }
        qualified.push(qualify(name, &parent));
    }
    qualified
}

fn qualify(name: String, parent: &str) -> String {
    if let Some(abbreviation) = state_abbreviation(parent) {
        return format!("{name} ({abbreviation})");
    }
    let Some(open) = name.strip_suffix(')') else {
        return format!("{name} ({parent})");
    };
    if !name.contains('(') {
        return format!("{open} ({parent})");
    }

    if SINGLE_QUALIFIER.is_match(&name) {
        if let Some((place, qualifier)) = name.split_once('(') {
            let place = place.strip_suffix(' ').unwrap_or(place);
            let qualifier = qualifier.strip_suffix(')').unwrap_or(qualifier);
            if qualifier != parent && is_location_type_word(qualifier) {
                return format!("{place} ({parent} : {qualifier})");
            }
            if !is_equals_or_contains(qualifier, parent) {
                return format!("{open}, {parent})");
            }
        }
        return name;
    }

    if TYPED_QUALIFIER_SHAPE.is_match(&name) {
        return TYPED_QUALIFIER
            .replacen(&name, 1, |caps: &Captures| {
                format!("{} ({}, {parent} : {})", &caps["name"], &caps["place"], &caps["kind"])
            })
            .into_owned();
    }
    name
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::MemoryRecord;

    #[test]
    fn test_tables() {
        assert_eq!(state_abbreviation("Texas"), Some("Tex."));
        assert_eq!(state_abbreviation("New York (State)"), Some("N.Y."));
        assert_eq!(state_abbreviation("Saskatchewan"), Some("Sask."));
        assert_eq!(state_abbreviation("Bavaria"), None);
        assert!(is_location_type_word("Extinct city"));
        assert!(is_location_type_word("Dept."));
        assert!(!is_location_type_word("city"));
    }

    #[test]
    fn test_clean_heading() {
        assert_eq!(clean_heading("Paris (France) :"), "Paris (France)");
        assert_eq!(clean_heading("Mexico ,"), "Mexico");
        assert_eq!(clean_heading("[Rome]."), "Rome");
        assert_eq!(clean_heading("Washington (D.C.)"), "Washington (D.C.)");
        assert_eq!(clean_heading(" . "), ".");
    }

    #[test]
    fn test_equals_or_contains() {
        assert!(is_equals_or_contains("Wales", "Wales"));
        assert!(is_equals_or_contains("England and Wales", "Wales"));
        assert!(is_equals_or_contains("Wales and England", "Wales"));
        assert!(is_equals_or_contains("Cardiff, Wales", "Wales"));
        assert!(is_equals_or_contains("Tex.", "Texas"));
        assert!(!is_equals_or_contains("England", "Wales"));
    }

    #[test]
    fn test_state_qualifier() {
        assert_eq!(qualify_chain("Texas#Austin"), ["Texas", "Austin (Tex.)"]);
    }

    #[test]
    fn test_location_type_qualifier() {
        assert_eq!(
            qualify_chain("Italy#Satricum (Extinct city)"),
            ["Italy", "Satricum (Italy : Extinct city)"]
        );
        assert_eq!(
            qualify_chain("Nicaragua#Rivas (Dept.)"),
            ["Nicaragua", "Rivas (Nicaragua : Dept.)"]
        );
        assert_eq!(
            qualify_chain("Italy#Sicily#Camarina (Extinct city)"),
            ["Italy", "Sicily (Italy)", "Camarina (Sicily, Italy : Extinct city)"]
        );
    }

    #[test]
    fn test_existing_qualifier() {
        assert_eq!(
            qualify_chain("England#Newport (Wales)"),
            ["England", "Newport (Wales, England)"]
        );
        assert_eq!(qualify_chain("Wales#Newport (Wales)"), ["Wales", "Newport (Wales)"]);
        assert_eq!(
            qualify_chain("Italy#Satricum (Lazio : Extinct city)"),
            ["Italy", "Satricum (Lazio, Italy : Extinct city)"]
        );
    }

    #[test]
    fn test_broad_names_skipped() {
        assert_eq!(
            qualify_chain("Colombia#Zipaquirá#South America"),
            ["Colombia", "Zipaquirá (Colombia)"]
        );
    }

    #[test]
    fn test_region_facet() {
        let record = MemoryRecord::new("r1")
            .with_field("651a", ["Texas.", "Mexico"])
            .with_field("650z'#'", ["Texas#Austin", "Mexico"]);
        assert_eq!(
            region_facet(&record, &FieldSpecs::default()).unwrap(),
            ["Texas", "Mexico", "Austin (Tex.)"]
        );
        assert_eq!(region_facet(&MemoryRecord::default(), &FieldSpecs::default()), None);
    }
}
