//! Feature engineering pipeline
//!
//! Converts a raw [`LaptopSpec`] into the structured [`FeatureRecord`] the
//! trained pipeline consumes. The three parsers and the assembler are pure
//! functions: no I/O, no shared state, and malformed text degrades to
//! zero/absent/false values instead of failing the request. The derivation
//! must stay in lockstep with the feature engineering the model was trained
//! on.

pub mod cpu;
pub mod display;
pub mod storage;

pub use cpu::{parse_cpu, CpuFeatures};
pub use display::{parse_display, DisplayFeatures};
pub use storage::{parse_storage, StorageBreakdown};

use crate::models::laptop::LaptopSpec;
use serde::Serialize;

/// Fully engineered feature record: the raw specification plus every
/// derived column, with named, typed fields.
///
/// Invariant: `total_storage == ssd + hdd + hybrid + flash_storage`.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FeatureRecord {
    // Pass-through fields
    pub company: String,
    pub product: String,
    pub type_name: String,
    pub inches: f64,
    pub screen_resolution: String,
    pub cpu: String,
    pub ram: u32,
    pub memory: String,
    pub gpu: String,
    pub op_sys: String,
    pub weight: f64,

    // Derived from Memory
    pub ssd: u32,
    pub hdd: u32,
    pub hybrid: u32,
    pub flash_storage: u32,
    pub total_storage: u32,

    // Derived from Cpu
    pub cpu_brand: String,
    pub cpu_model: String,
    pub cpu_speed: Option<f64>,

    // Derived from ScreenResolution
    pub resolution_x: Option<u32>,
    pub resolution_y: Option<u32>,
    pub is_ips: bool,
    pub is_retina: bool,
}

/// Build the full feature record for one specification.
///
/// Pure single-pass transformation: invokes the storage, CPU and display
/// parsers and merges their outputs onto a copy of the input. Pass-through
/// fields are not validated here.
pub fn assemble(spec: &LaptopSpec) -> FeatureRecord {
    let storage = parse_storage(Some(&spec.memory));
    let cpu = parse_cpu(Some(&spec.cpu));
    let display = parse_display(Some(&spec.screen_resolution));

    FeatureRecord {
        company: spec.company.clone(),
        product: spec.product.clone(),
        type_name: spec.type_name.clone(),
        inches: spec.inches,
        screen_resolution: spec.screen_resolution.clone(),
        cpu: spec.cpu.clone(),
        ram: spec.ram,
        memory: spec.memory.clone(),
        gpu: spec.gpu.clone(),
        op_sys: spec.op_sys.clone(),
        weight: spec.weight,

        ssd: storage.ssd,
        hdd: storage.hdd,
        hybrid: storage.hybrid,
        flash_storage: storage.flash,
        total_storage: storage.total(),

        cpu_brand: cpu.brand,
        cpu_model: cpu.model,
        cpu_speed: cpu.speed_ghz,

        resolution_x: display.resolution_x,
        resolution_y: display.resolution_y,
        is_ips: display.is_ips,
        is_retina: display.is_retina,
    }
}
