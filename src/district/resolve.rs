use std::collections::{BTreeMap, BTreeSet};

use anyhow::{Result, bail};
use log::warn;
use serde::Deserialize;

use super::DistrictRecord;

/// Canonical identity of a source-dataset region.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
pub struct DistrictNames {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub name_si: String,
    #[serde(default)]
    pub name_ta: String,
}

#[derive(Copy, Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Demographics {
    pub population: u64,
    /// Square kilometres.
    pub area: f64,
}

/// Which districts a tag rule applies to.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Membership {
    /// Listed district ids only.
    Districts(BTreeSet<String>),
    /// Every district; used for the trailing baseline rule.
    #[default]
    Any,
}

impl Membership {
    pub fn contains(&self, id: &str) -> bool {
        match self {
            Membership::Districts(ids) => ids.contains(id),
            Membership::Any => true,
        }
    }
}

/// One tier of the tag cascade: districts matching `districts` receive `tags`.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct TagRule {
    pub tier: String,
    #[serde(default)]
    pub districts: Membership,
    pub tags: Vec<String>,
}

impl TagRule {
    pub fn new(tier: impl Into<String>, districts: Membership, tags: &[&str]) -> Self {
        Self { tier: tier.into(), districts, tags: tags.iter().map(|tag| tag.to_string()).collect() }
    }
}

/// Static reference tables the resolver consults, keyed by canonical id
/// except `names`, which is keyed by the source dataset's spelling.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Tables {
    pub names: BTreeMap<String, DistrictNames>,
    pub provinces: BTreeMap<String, String>,
    pub demographics: BTreeMap<String, Demographics>,
    pub featured: BTreeSet<String>,
    /// Evaluated top-down; the first rule containing the district wins.
    pub tiers: Vec<TagRule>,
}

impl Tables {
    /// Resolve a source name to a record skeleton (no path data yet).
    /// Exact match only; an unmapped name yields None.
    pub fn resolve(&self, source_name: &str) -> Option<DistrictRecord> {
        let names = self.names.get(source_name)?;
        let id = names.id.as_str();

        let province = match self.provinces.get(id) {
            Some(province) => province.clone(),
            None => {
                warn!("[resolve] no province for {id}");
                String::new()
            }
        };
        let Demographics { population, area } = self.demographics.get(id).copied().unwrap_or_default();

        Some(DistrictRecord {
            id: names.id.clone(),
            name: names.name.clone(),
            name_si: names.name_si.clone(),
            name_ta: names.name_ta.clone(),
            province,
            population,
            area,
            is_featured: self.featured.contains(id),
            tags: self.tags_for(id).to_vec(),
            ..DistrictRecord::default()
        })
    }

    /// Tags from the first tier rule that contains `id`; empty when none does.
    pub fn tags_for(&self, id: &str) -> &[String] {
        self.tiers.iter()
            .find(|rule| rule.districts.contains(id))
            .map(|rule| rule.tags.as_slice())
            .unwrap_or_default()
    }

    /// Reject tables that cannot produce a consistent record set.
    pub fn validate(&self) -> Result<()> {
        let mut ids = BTreeSet::new();
        for (source, names) in &self.names {
            if names.id.is_empty() { bail!("[tables] empty id for source name {source:?}") }
            if !ids.insert(names.id.as_str()) {
                bail!("[tables] canonical id {:?} is mapped from more than one source name", names.id);
            }
        }

        for rule in &self.tiers {
            if let Membership::Districts(members) = &rule.districts {
                if let Some(unknown) = members.iter().find(|id| !ids.contains(id.as_str())) {
                    bail!("[tables] tier {:?} lists unknown district {unknown:?}", rule.tier);
                }
            }
        }

        if let Some(unknown) = self.featured.iter().find(|id| !ids.contains(id.as_str())) {
            bail!("[tables] featured list names unknown district {unknown:?}");
        }

        for id in self.provinces.keys().chain(self.demographics.keys()) {
            if !ids.contains(id.as_str()) { warn!("[tables] reference data for unmapped district {id}") }
        }

        Ok(())
    }
}
