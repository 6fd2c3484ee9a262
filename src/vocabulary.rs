use include_dir::{include_dir, Dir};
use itertools::Itertools;
use serde::Deserialize;
use serde_json::from_str;
use std::error::Error;

static UNIT_DIR: Dir = include_dir!("src/units");

/// A single vocabulary entry: the English term and its Uzbek translation.
/// Ids are unique within a unit, not across units.
#[derive(Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct VocabularyWord {
    pub id: u32,
    pub english: String,
    pub uzbek: String,
}

/// One lesson's worth of words, looked up by id.
#[derive(Deserialize, Clone, Debug)]
pub struct Unit {
    pub id: u32,
    pub title: String,
    pub words: Vec<VocabularyWord>,
}

/// All embedded units, ordered by unit id.
pub fn units() -> Vec<Unit> {
    UNIT_DIR
        .files()
        .filter(|f| f.path().extension().is_some_and(|e| e == "json"))
        .map(|f| {
            read_unit_from_str(f.contents_utf8().expect("Unit file is not valid UTF-8"))
                .expect("Unable to deserialize unit json")
        })
        .sorted_by_key(|u| u.id)
        .collect()
}

pub fn get_unit_by_id(id: u32) -> Option<Unit> {
    units().into_iter().find(|u| u.id == id)
}

fn read_unit_from_str(contents: &str) -> Result<Unit, Box<dyn Error>> {
    let unit = from_str(contents)?;
    Ok(unit)
}
