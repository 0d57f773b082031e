//! Dataset aggregations for the visualization endpoints
//!
//! Each function computes one chart's data series from the loaded dataset.
//! Rendering is the frontend's job; these endpoints only serve numbers.

use serde::Serialize;
use std::collections::BTreeMap;

use crate::dataset::{clean_ram, clean_weight, Dataset, LaptopRow};
use crate::features::assemble;
use crate::model::{ModelError, PricePredictor};
use crate::models::laptop::LaptopSpec;

/// One bin of a value histogram. `count` covers `start <= value < end`
/// (the final bin is right-inclusive).
#[derive(Debug, Clone, Serialize)]
pub struct HistogramBin {
    pub start: f64,
    pub end: f64,
    pub count: u64,
}

/// A label paired with an aggregated value (mean price, sample count).
#[derive(Debug, Clone, Serialize)]
pub struct LabeledValue {
    pub label: String,
    pub value: f64,
}

/// A label paired with an occurrence count.
#[derive(Debug, Clone, Serialize)]
pub struct LabeledCount {
    pub label: String,
    pub count: u64,
}

/// One scatter point.
#[derive(Debug, Clone, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
}

/// Screen-size chart payload: size distribution plus mean price per size.
#[derive(Debug, Clone, Serialize)]
pub struct ScreenSizeAnalysis {
    pub distribution: Vec<HistogramBin>,
    pub average_price_by_size: Vec<ScatterPoint>,
}

/// One (actual, predicted) pair from replaying dataset rows through the
/// feature pipeline and the loaded model.
#[derive(Debug, Clone, Serialize)]
pub struct PredictionPair {
    pub actual: f64,
    pub predicted: f64,
}

/// Equal-width histogram over `values`.
///
/// Empty input yields no bins; a degenerate range (all values equal) yields
/// a single bin holding everything.
pub fn histogram(values: &[f64], bins: usize) -> Vec<HistogramBin> {
    if values.is_empty() || bins == 0 {
        return Vec::new();
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    if min == max {
        return vec![HistogramBin {
            start: min,
            end: max,
            count: values.len() as u64,
        }];
    }

    let width = (max - min) / bins as f64;
    let mut counts = vec![0u64; bins];
    for &value in values {
        let mut idx = ((value - min) / width) as usize;
        // The maximum lands exactly on the upper edge; fold it into the
        // last bin.
        if idx >= bins {
            idx = bins - 1;
        }
        counts[idx] += 1;
    }

    counts
        .into_iter()
        .enumerate()
        .map(|(i, count)| HistogramBin {
            start: min + width * i as f64,
            end: min + width * (i + 1) as f64,
            count,
        })
        .collect()
}

/// 50-bin histogram of `Price_euros`.
pub fn price_distribution(dataset: &Dataset) -> Vec<HistogramBin> {
    let prices: Vec<f64> = dataset.rows().iter().map(|r| r.price_euros).collect();
    histogram(&prices, 50)
}

/// Mean `Price_euros` grouped by the key the extractor returns, one
/// `LabeledValue` per distinct key (no sample-count filter, unsorted).
fn mean_price_by<F>(dataset: &Dataset, key: F) -> Vec<LabeledValue>
where
    F: for<'a> Fn(&'a LaptopRow) -> &'a str,
{
    let mut groups: BTreeMap<&str, (f64, u64)> = BTreeMap::new();
    for row in dataset.rows() {
        let entry = groups.entry(key(row)).or_insert((0.0, 0));
        entry.0 += row.price_euros;
        entry.1 += 1;
    }

    groups
        .into_iter()
        .map(|(label, (sum, count))| LabeledValue {
            label: label.to_string(),
            value: sum / count as f64,
        })
        .collect()
}

/// Top 10 companies by mean price, descending.
pub fn brand_analysis(dataset: &Dataset) -> Vec<LabeledValue> {
    let mut means = mean_price_by(dataset, |r| &r.company);
    means.sort_by(|a, b| b.value.total_cmp(&a.value));
    means.truncate(10);
    means
}

/// Laptop count per `TypeName`, descending.
pub fn type_distribution(dataset: &Dataset) -> Vec<LabeledCount> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for row in dataset.rows() {
        *counts.entry(&row.type_name).or_default() += 1;
    }

    let mut out: Vec<LabeledCount> = counts
        .into_iter()
        .map(|(label, count)| LabeledCount {
            label: label.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count));
    out
}

/// (ram_gb, price) scatter points. Rows whose Ram does not clean to a
/// number are dropped.
pub fn ram_vs_price(dataset: &Dataset) -> Vec<ScatterPoint> {
    dataset
        .rows()
        .iter()
        .filter_map(|r| {
            clean_ram(&r.ram).map(|ram| ScatterPoint {
                x: f64::from(ram),
                y: r.price_euros,
            })
        })
        .collect()
}

/// 20-bin screen-size histogram plus mean price per distinct size,
/// ascending by size.
pub fn screen_size_analysis(dataset: &Dataset) -> ScreenSizeAnalysis {
    let sizes: Vec<f64> = dataset.rows().iter().map(|r| r.inches).collect();

    // Group on the tenth-of-an-inch grid the dataset uses; f64 keys are not
    // directly orderable in a map.
    let mut groups: BTreeMap<i64, (f64, u64)> = BTreeMap::new();
    for row in dataset.rows() {
        let key = (row.inches * 10.0).round() as i64;
        let entry = groups.entry(key).or_insert((0.0, 0));
        entry.0 += row.price_euros;
        entry.1 += 1;
    }

    ScreenSizeAnalysis {
        distribution: histogram(&sizes, 20),
        average_price_by_size: groups
            .into_iter()
            .map(|(key, (sum, count))| ScatterPoint {
                x: key as f64 / 10.0,
                y: sum / count as f64,
            })
            .collect(),
    }
}

/// Mean price per operating system, descending, restricted to systems with
/// at least 10 samples.
pub fn os_comparison(dataset: &Dataset) -> Vec<LabeledValue> {
    let mut groups: BTreeMap<&str, (f64, u64)> = BTreeMap::new();
    for row in dataset.rows() {
        let entry = groups.entry(&row.op_sys).or_insert((0.0, 0));
        entry.0 += row.price_euros;
        entry.1 += 1;
    }

    let mut out: Vec<LabeledValue> = groups
        .into_iter()
        .filter(|(_, (_, count))| *count >= 10)
        .map(|(label, (sum, count))| LabeledValue {
            label: label.to_string(),
            value: sum / count as f64,
        })
        .collect();
    out.sort_by(|a, b| b.value.total_cmp(&a.value));
    out
}

/// Market segmentation with fixed boundaries at 600, 1200 and 2000 EUR.
pub fn price_segments(dataset: &Dataset) -> Vec<LabeledCount> {
    let mut low = 0;
    let mut mid = 0;
    let mut high = 0;
    let mut ultra = 0;

    for row in dataset.rows() {
        let p = row.price_euros;
        if p <= 0.0 {
            continue;
        } else if p <= 600.0 {
            low += 1;
        } else if p <= 1200.0 {
            mid += 1;
        } else if p <= 2000.0 {
            high += 1;
        } else {
            ultra += 1;
        }
    }

    vec![
        LabeledCount {
            label: "Low (€0-600)".to_string(),
            count: low,
        },
        LabeledCount {
            label: "Mid (€600-1200)".to_string(),
            count: mid,
        },
        LabeledCount {
            label: "High (€1200-2000)".to_string(),
            count: high,
        },
        LabeledCount {
            label: "Ultra (€2000+)".to_string(),
            count: ultra,
        },
    ]
}

/// Replay up to `limit` dataset rows through assemble + predict.
///
/// Rows whose Ram or Weight do not clean to numbers are skipped; a model
/// schema mismatch propagates.
pub fn actual_vs_predicted(
    dataset: &Dataset,
    predictor: &PricePredictor,
    limit: usize,
) -> Result<Vec<PredictionPair>, ModelError> {
    let mut pairs = Vec::new();

    for row in dataset.rows() {
        if pairs.len() >= limit {
            break;
        }
        let Some(spec) = row_to_spec(row) else {
            continue;
        };
        let predicted = predictor.predict(&assemble(&spec))?;
        pairs.push(PredictionPair {
            actual: row.price_euros,
            predicted,
        });
    }

    Ok(pairs)
}

fn row_to_spec(row: &LaptopRow) -> Option<LaptopSpec> {
    Some(LaptopSpec {
        company: row.company.clone(),
        product: row.product.clone(),
        type_name: row.type_name.clone(),
        inches: row.inches,
        screen_resolution: row.screen_resolution.clone(),
        cpu: row.cpu.clone(),
        ram: clean_ram(&row.ram)?,
        memory: row.memory.clone(),
        gpu: row.gpu.clone(),
        op_sys: row.op_sys.clone(),
        weight: clean_weight(&row.weight)?,
    })
}
