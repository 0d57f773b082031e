//! Static laptop dataset
//!
//! The CSV backing `/options` and the chart endpoints. Loaded once at
//! startup and read-only afterwards. The upstream file is latin-1 encoded,
//! so rows are decoded lossily from byte records instead of assuming UTF-8.

use std::collections::BTreeSet;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::models::laptop::OptionsResponse;

/// Errors from loading the dataset CSV.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset {path}")]
    Csv {
        path: String,
        #[source]
        source: csv::Error,
    },
    #[error("dataset {path} is missing required column {column:?}")]
    MissingColumn { path: String, column: String },
    #[error("dataset {path} contains no usable rows")]
    Empty { path: String },
}

/// One dataset record. `ram` and `weight` keep the raw CSV spelling
/// ("8GB", "1.37kg"); cleaning happens where the numbers are needed.
#[derive(Debug, Clone)]
pub struct LaptopRow {
    pub company: String,
    pub product: String,
    pub type_name: String,
    pub inches: f64,
    pub screen_resolution: String,
    pub cpu: String,
    pub ram: String,
    pub memory: String,
    pub gpu: String,
    pub op_sys: String,
    pub weight: String,
    pub price_euros: f64,
}

/// The loaded dataset.
#[derive(Debug, Clone)]
pub struct Dataset {
    rows: Vec<LaptopRow>,
}

const REQUIRED_COLUMNS: &[&str] = &[
    "Company",
    "Product",
    "TypeName",
    "Inches",
    "ScreenResolution",
    "Cpu",
    "Ram",
    "Memory",
    "Gpu",
    "OpSys",
    "Weight",
    "Price_euros",
];

impl Dataset {
    /// Load the dataset from a CSV file.
    ///
    /// Rows whose numeric columns do not parse are skipped with a warning
    /// rather than failing the whole load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DatasetError> {
        let path = path.as_ref();
        let display = path.display().to_string();

        let mut reader = csv::Reader::from_path(path).map_err(|source| DatasetError::Csv {
            path: display.clone(),
            source,
        })?;

        let headers = reader
            .byte_headers()
            .map_err(|source| DatasetError::Csv {
                path: display.clone(),
                source,
            })?
            .clone();

        let column = |name: &str| -> Result<usize, DatasetError> {
            headers
                .iter()
                .position(|h| String::from_utf8_lossy(h) == name)
                .ok_or_else(|| DatasetError::MissingColumn {
                    path: display.clone(),
                    column: name.to_string(),
                })
        };

        let mut indices = [0usize; 12];
        for (slot, name) in indices.iter_mut().zip(REQUIRED_COLUMNS.iter().copied()) {
            *slot = column(name)?;
        }
        let [company, product, type_name, inches, screen_resolution, cpu, ram, memory, gpu, op_sys, weight, price_euros] =
            indices;

        let mut rows = Vec::new();
        for (line, record) in reader.byte_records().enumerate() {
            let record = record.map_err(|source| DatasetError::Csv {
                path: display.clone(),
                source,
            })?;

            let field = |idx: usize| -> String {
                String::from_utf8_lossy(record.get(idx).unwrap_or_default())
                    .trim()
                    .to_string()
            };

            let inches_value = field(inches).parse::<f64>();
            let price_value = field(price_euros).parse::<f64>();
            let (Ok(inches_value), Ok(price_value)) = (inches_value, price_value) else {
                warn!(line = line + 2, "skipping dataset row with unparseable numeric column");
                continue;
            };

            rows.push(LaptopRow {
                company: field(company),
                product: field(product),
                type_name: field(type_name),
                inches: inches_value,
                screen_resolution: field(screen_resolution),
                cpu: field(cpu),
                ram: field(ram),
                memory: field(memory),
                gpu: field(gpu),
                op_sys: field(op_sys),
                weight: field(weight),
                price_euros: price_value,
            });
        }

        if rows.is_empty() {
            return Err(DatasetError::Empty { path: display });
        }

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[LaptopRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sorted unique dropdown values for every field.
    pub fn options(&self) -> OptionsResponse {
        let rams_gb: Vec<u32> = self
            .rows
            .iter()
            .filter_map(|r| clean_ram(&r.ram))
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();

        let mut inches: Vec<f64> = self.rows.iter().map(|r| r.inches).collect();
        inches.sort_by(f64::total_cmp);
        inches.dedup();

        let mut weights: Vec<f64> = self
            .rows
            .iter()
            .map(|r| r.weight.as_str())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .filter_map(clean_weight)
            .collect();
        weights.sort_by(f64::total_cmp);
        weights.dedup();

        OptionsResponse {
            companies: unique_strings(&self.rows, |r| &r.company),
            products: unique_strings(&self.rows, |r| &r.product),
            typenames: unique_strings(&self.rows, |r| &r.type_name),
            screen_resolutions: unique_strings(&self.rows, |r| &r.screen_resolution),
            cpus: unique_strings(&self.rows, |r| &r.cpu),
            rams_gb,
            memories: unique_strings(&self.rows, |r| &r.memory),
            gpus: unique_strings(&self.rows, |r| &r.gpu),
            opsys: unique_strings(&self.rows, |r| &r.op_sys),
            inches,
            weights,
        }
    }
}

/// Sorted unique non-empty values of one string column.
fn unique_strings<'a>(rows: &'a [LaptopRow], pick: impl Fn(&'a LaptopRow) -> &'a str) -> Vec<String> {
    rows.iter()
        .map(pick)
        .filter(|s| !s.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// "8GB" -> 8. Unparseable values are dropped from the catalog.
pub fn clean_ram(raw: &str) -> Option<u32> {
    raw.to_uppercase().replace("GB", "").trim().parse().ok()
}

/// "1.37kg" -> 1.37, "2,5kg" -> 2.5.
///
/// "kg" is stripped before "kgs", matching the cleaning the model was
/// trained with: a trailing "kgs" therefore leaves an "s" behind and the
/// value is dropped.
pub fn clean_weight(raw: &str) -> Option<f64> {
    raw.replace("kg", "")
        .replace("kgs", "")
        .replace(',', ".")
        .trim()
        .parse()
        .ok()
}
