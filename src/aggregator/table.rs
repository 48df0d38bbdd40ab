//! The aggregated trips table and the routine that builds it.
//!
//! Both aggregation strategies (column-wise over all rows, and grouped by
//! the `mode` category) go through [`accumulate`], so their totals agree
//! wherever rows only carry trips under their own mode's fields.
//!
//! Example: summing two `air` rows with `air_0_10mi` of 5 and 3 yields
//! `air_0_10mi = 8`.

use crate::parser::dataset::{Dataset, TripRecord};
use crate::parser::schema::{DistanceBand, Mode};
use crate::utils::config::ReportConfig;
use crate::utils::error::DatasetError;
use log::{debug, warn};
use std::collections::BTreeMap;

/// Summed trip count per `"{mode}{distance}"` field
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AggregatedTrips {
    totals: BTreeMap<String, f64>,
}

impl AggregatedTrips {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add `value` to a field, creating it at zero first
    pub fn add(&mut self, field: impl Into<String>, value: f64) {
        *self.totals.entry(field.into()).or_insert(0.0) += value;
    }

    /// Total for a field name; absent fields read as zero
    pub fn get_field(&self, field: &str) -> f64 {
        self.totals.get(field).copied().unwrap_or(0.0)
    }

    pub fn get(&self, mode: &Mode, band: &DistanceBand) -> f64 {
        self.get_field(&band.field_name(mode))
    }

    pub fn contains_field(&self, field: &str) -> bool {
        self.totals.contains_key(field)
    }

    /// One value per band, in the order given
    pub fn mode_values(&self, mode: &Mode, bands: &[DistanceBand]) -> Vec<f64> {
        bands.iter().map(|band| self.get(mode, band)).collect()
    }

    pub fn mode_total(&self, mode: &Mode, bands: &[DistanceBand]) -> f64 {
        bands.iter().map(|band| self.get(mode, band)).sum()
    }

    pub fn band_total(&self, band: &DistanceBand, modes: &[Mode]) -> f64 {
        modes.iter().map(|mode| self.get(mode, band)).sum()
    }

    /// Sum of every cell in the table
    pub fn grand_total(&self) -> f64 {
        self.totals.values().sum()
    }

    /// Fold another table into this one, field by field
    pub fn merge(&mut self, other: &AggregatedTrips) {
        for (field, value) in &other.totals {
            self.add(field.as_str(), *value);
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, f64)> + '_ {
        self.totals.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.totals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}

impl FromIterator<(String, f64)> for AggregatedTrips {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        let mut table = AggregatedTrips::new();
        for (field, value) in iter {
            table.add(field, value);
        }
        table
    }
}

/// Sum the selected columns over `records`
///
/// The single summation routine behind every strategy. Field positions
/// must come from the [`Dataset`] the records belong to.
///
/// # Arguments
/// * `records` - Rows to sum
/// * `fields` - `(position in counts, field name)` pairs
///
/// # Returns
/// A table holding every requested field, zero when no row contributes
pub(crate) fn accumulate<'a>(
    records: impl IntoIterator<Item = &'a TripRecord>,
    fields: &[(usize, String)],
) -> AggregatedTrips {
    let mut sums = vec![0.0_f64; fields.len()];

    for record in records {
        for (sum, (idx, _)) in sums.iter_mut().zip(fields) {
            *sum += record.counts[*idx];
        }
    }

    fields
        .iter()
        .zip(sums)
        .map(|((_, name), sum)| (name.clone(), sum))
        .collect()
}

/// Column-wise sum of every configured mode-distance field
///
/// **Public** - main entry point for aggregation
///
/// # Errors
/// * `DatasetError::MissingColumns` - the dataset lacks a configured field
pub fn aggregate_trips(
    dataset: &Dataset,
    config: &ReportConfig,
) -> Result<AggregatedTrips, DatasetError> {
    let fields = resolve_fields(dataset, config)?;

    debug!(
        "Aggregating {} fields over {} records",
        fields.len(),
        dataset.len()
    );

    Ok(accumulate(dataset.records(), &fields))
}

/// Group rows by their `mode` category, then sum that category's own
/// distance fields per group
///
/// **Public** - grouped view of the same totals
///
/// The table for category `c` holds the `{c}{band}` fields only; a
/// category that is not a configured mode gets an empty table. Counts a
/// row carries under another mode's fields are left out here, reported
/// with `warn!`, and returned by [`off_mode_trips`]. Merging every group
/// table with the off-mode table gives exactly what [`aggregate_trips`]
/// returns for integral counts.
///
/// # Errors
/// * `DatasetError::MissingColumns` - the dataset lacks a configured field
pub fn aggregate_by_mode_category(
    dataset: &Dataset,
    config: &ReportConfig,
) -> Result<BTreeMap<String, AggregatedTrips>, DatasetError> {
    let groups = grouped_sums(dataset, config)?;

    debug!(
        "Grouped {} records into {} mode categories",
        dataset.len(),
        groups.len()
    );

    let mut tables = BTreeMap::new();
    for group in groups {
        let off_mode = group.off_mode.grand_total();
        if off_mode != 0.0 {
            warn!(
                "Category '{}': {} trips recorded under other modes' fields",
                group.category, off_mode
            );
        }
        tables.insert(group.category, group.own);
    }

    Ok(tables)
}

/// Counts recorded outside the row's own mode, per field
///
/// **Public** - the remainder left out of [`aggregate_by_mode_category`]
///
/// # Errors
/// * `DatasetError::MissingColumns` - the dataset lacks a configured field
pub fn off_mode_trips(
    dataset: &Dataset,
    config: &ReportConfig,
) -> Result<AggregatedTrips, DatasetError> {
    let mut table = AggregatedTrips::new();
    for group in grouped_sums(dataset, config)? {
        table.merge(&group.off_mode);
    }
    Ok(table)
}

/// Per-category sums, split into the category's own fields and the rest
struct CategorySums {
    category: String,
    own: AggregatedTrips,
    off_mode: AggregatedTrips,
}

fn grouped_sums(dataset: &Dataset, config: &ReportConfig) -> Result<Vec<CategorySums>, DatasetError> {
    let fields = resolve_fields(dataset, config)?;

    let mut groups: BTreeMap<&str, Vec<&TripRecord>> = BTreeMap::new();
    for record in dataset.records() {
        groups.entry(record.mode.as_str()).or_default().push(record);
    }

    Ok(groups
        .into_iter()
        .map(|(category, rows)| {
            let own_names: Vec<String> = match config.mode(category) {
                Some(mode) => config
                    .distance_bands
                    .iter()
                    .map(|band| band.field_name(mode))
                    .collect(),
                None => Vec::new(),
            };
            let (own, off_mode): (Vec<_>, Vec<_>) = fields
                .iter()
                .cloned()
                .partition(|(_, name)| own_names.contains(name));

            CategorySums {
                category: category.to_string(),
                own: accumulate(rows.iter().copied(), &own),
                off_mode: accumulate(rows.iter().copied(), &off_mode),
            }
        })
        .collect())
}

/// Pair each configured field with its position in the records
fn resolve_fields(
    dataset: &Dataset,
    config: &ReportConfig,
) -> Result<Vec<(usize, String)>, DatasetError> {
    let names = config.field_names();
    let indices = dataset.column_indices(&names)?;
    Ok(indices.into_iter().zip(names).collect())
}
