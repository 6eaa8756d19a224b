use serde::{Deserialize, Serialize};

use crate::geom::Center;

/// One finalized district, as consumed by the map and filter UIs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictRecord {
    /// Canonical slug, e.g. `colombo`.
    pub id: String,
    /// English display name.
    pub name: String,
    /// Sinhala display name.
    pub name_si: String,
    /// Tamil display name.
    pub name_ta: String,
    pub province: String,
    pub population: u64,
    /// Square kilometres.
    pub area: f64,
    pub path_data: String,
    pub center: Center,
    pub is_featured: bool,
    /// Service categories offered in this district, in rule order.
    pub tags: Vec<String>,
}

/// Sorted district list with the lookups the UI needs.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Districts(Vec<DistrictRecord>);

impl Districts {
    pub fn new(records: Vec<DistrictRecord>) -> Self { Self(records) }

    /// Exact-match lookup by canonical id.
    pub fn get_by_id(&self, id: &str) -> Option<&DistrictRecord> {
        self.0.iter().find(|district| district.id == id)
    }

    /// All districts of one province, in list order.
    pub fn by_province<'a>(&'a self, province: &'a str) -> impl Iterator<Item = &'a DistrictRecord> + 'a {
        self.0.iter().filter(move |district| district.province == province)
    }

    /// Districts flagged for prominent placement.
    pub fn featured(&self) -> impl Iterator<Item = &DistrictRecord> {
        self.0.iter().filter(|district| district.is_featured)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, DistrictRecord> { self.0.iter() }

    pub fn len(&self) -> usize { self.0.len() }

    pub fn is_empty(&self) -> bool { self.0.is_empty() }

    pub fn into_inner(self) -> Vec<DistrictRecord> { self.0 }
}

impl<'a> IntoIterator for &'a Districts {
    type Item = &'a DistrictRecord;
    type IntoIter = std::slice::Iter<'a, DistrictRecord>;

    fn into_iter(self) -> Self::IntoIter { self.0.iter() }
}

impl From<Vec<DistrictRecord>> for Districts {
    fn from(records: Vec<DistrictRecord>) -> Self { Self(records) }
}
