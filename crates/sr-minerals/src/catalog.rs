use crate::error::{MineralError, MineralResult};
use crate::species::MineralSpecies;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MineralCatalogEntry {
    pub species: MineralSpecies,
    pub display_name: &'static str,
    pub aliases: &'static [&'static str],
}

impl MineralCatalogEntry {
    pub fn canonical_id(&self) -> &'static str {
        self.species.key()
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.canonical_id().contains(&query)
            || self.display_name.to_ascii_lowercase().contains(&query)
            || self.species.formula().to_ascii_lowercase() == query
            || self
                .aliases
                .iter()
                .any(|alias| alias.to_ascii_lowercase().contains(&query))
    }

    fn matches_exactly(&self, name: &str) -> bool {
        let name = name.trim().to_ascii_lowercase();
        self.canonical_id() == name
            || self.display_name.to_ascii_lowercase() == name
            || self.species.formula().to_ascii_lowercase() == name
            || self.aliases.iter().any(|alias| *alias == name)
    }
}

const MINERAL_CATALOG: [MineralCatalogEntry; 5] = [
    MineralCatalogEntry {
        species: MineralSpecies::Periclase,
        display_name: "Periclase",
        aliases: &["mgo", "ferropericlase"],
    },
    MineralCatalogEntry {
        species: MineralSpecies::Wuestite,
        display_name: "Wüstite",
        aliases: &["wustite", "feo"],
    },
    MineralCatalogEntry {
        species: MineralSpecies::MgPerovskite,
        display_name: "Mg-Perovskite",
        aliases: &["bridgmanite", "mgsio3", "mg_pv"],
    },
    MineralCatalogEntry {
        species: MineralSpecies::FePerovskite,
        display_name: "Fe-Perovskite",
        aliases: &["fesio3", "fe_pv"],
    },
    MineralCatalogEntry {
        species: MineralSpecies::CaPerovskite,
        display_name: "Ca-Perovskite",
        aliases: &["davemaoite", "casio3", "ca_pv"],
    },
];

pub fn mineral_catalog() -> &'static [MineralCatalogEntry] {
    &MINERAL_CATALOG
}

pub fn filter_catalog(query: &str) -> Vec<MineralCatalogEntry> {
    MINERAL_CATALOG
        .iter()
        .copied()
        .filter(|entry| entry.matches_query(query))
        .collect()
}

/// Resolve a mineral by canonical id, display name, formula, or alias.
pub fn lookup_mineral(name: &str) -> MineralResult<MineralSpecies> {
    MINERAL_CATALOG
        .iter()
        .find(|entry| entry.matches_exactly(name))
        .map(|entry| entry.species)
        .ok_or_else(|| MineralError::NotFound {
            query: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_covers_every_species() {
        for species in MineralSpecies::ALL {
            assert!(mineral_catalog().iter().any(|e| e.species == species));
        }
    }

    #[test]
    fn lookup_by_alias_and_formula() {
        assert_eq!(
            lookup_mineral("bridgmanite").unwrap(),
            MineralSpecies::MgPerovskite
        );
        assert_eq!(lookup_mineral("MgO").unwrap(), MineralSpecies::Periclase);
        assert_eq!(
            lookup_mineral(" ca_perovskite ").unwrap(),
            MineralSpecies::CaPerovskite
        );
    }

    #[test]
    fn lookup_unknown_fails() {
        assert!(matches!(
            lookup_mineral("olivine"),
            Err(MineralError::NotFound { .. })
        ));
    }

    #[test]
    fn filter_by_partial_query() {
        let hits = filter_catalog("perov");
        assert_eq!(hits.len(), 3);
        assert_eq!(filter_catalog("").len(), mineral_catalog().len());
    }
}
