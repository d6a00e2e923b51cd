use crate::table::CsvTable;
use rand::Rng;

/// Error while building or sampling the track catalog.
#[derive(Debug, PartialEq, Eq)]
pub enum CatalogError {
    MissingColumn { name: String },
    Empty,
}

impl std::fmt::Display for CatalogError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CatalogError::MissingColumn { name } => {
                write!(f, "reference table has no column named {name}")
            }
            CatalogError::Empty => write!(f, "track catalog is empty"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// Immutable, non-empty set of track identifiers used as a sampling domain.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackCatalog {
    ids: Vec<String>,
}

impl TrackCatalog {
    /// Builds a catalog from the named column of a decoded table.
    ///
    /// Values are taken in row order; empty cells are dropped.
    pub fn from_table(table: &CsvTable, column: &str) -> Result<Self, CatalogError> {
        let values = table
            .column(column)
            .ok_or_else(|| CatalogError::MissingColumn {
                name: column.to_string(),
            })?;
        let ids = values
            .into_iter()
            .filter(|value| !value.is_empty())
            .collect();
        Self::from_ids(ids)
    }

    /// Builds a catalog from an explicit identifier list.
    pub fn from_ids(ids: Vec<String>) -> Result<Self, CatalogError> {
        if ids.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { ids })
    }

    /// Returns one identifier chosen uniformly at random.
    pub fn sample(&self, rng: &mut impl Rng) -> Result<&str, CatalogError> {
        if self.ids.is_empty() {
            return Err(CatalogError::Empty);
        }
        let index = rng.gen_range(0..self.ids.len());
        Ok(&self.ids[index])
    }

    /// Number of identifiers in the catalog.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Identifier sequence in build order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn table(text: &str) -> CsvTable {
        CsvTable::parse(text).expect("table")
    }

    #[test]
    fn builds_from_column_in_row_order() {
        let catalog =
            TrackCatalog::from_table(&table("track_id\nt-003\nt-001\nt-002\n"), "track_id")
                .expect("catalog");
        assert_eq!(catalog.ids(), ["t-003", "t-001", "t-002"]);
    }

    #[test]
    fn identical_input_builds_identical_catalogs() {
        let text = "track_id\nt-001\nt-002\n";
        let first = TrackCatalog::from_table(&table(text), "track_id").expect("catalog");
        let second = TrackCatalog::from_table(&table(text), "track_id").expect("catalog");
        assert_eq!(first, second);
    }

    #[test]
    fn missing_column_is_fatal() {
        let result = TrackCatalog::from_table(&table("track_id\nt-001\n"), "artist_id");
        assert_eq!(
            result,
            Err(CatalogError::MissingColumn {
                name: "artist_id".to_string()
            })
        );
    }

    #[test]
    fn zero_matching_values_is_fatal() {
        let result = TrackCatalog::from_table(&table("track_id,title\n"), "track_id");
        assert_eq!(result, Err(CatalogError::Empty));
        assert_eq!(TrackCatalog::from_ids(Vec::new()), Err(CatalogError::Empty));
    }

    #[test]
    fn sample_stays_within_the_catalog() {
        let catalog = TrackCatalog::from_ids(vec![
            "t-001".to_string(),
            "t-002".to_string(),
            "t-003".to_string(),
        ])
        .expect("catalog");
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..200 {
            let id = catalog.sample(&mut rng).expect("sample");
            assert!(catalog.ids().iter().any(|candidate| candidate == id));
        }
    }

    #[test]
    fn single_entry_catalog_always_returns_it() {
        let catalog = TrackCatalog::from_ids(vec!["only".to_string()]).expect("catalog");
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(catalog.sample(&mut rng).expect("sample"), "only");
    }
}
