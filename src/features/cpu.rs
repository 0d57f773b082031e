//! CPU description parsing
//!
//! Splits strings like "Intel Core i5 2.3GHz" into brand, model, and clock
//! speed features.

/// CPU features extracted from a free-text processor description.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuFeatures {
    pub brand: String,
    pub model: String,
    pub speed_ghz: Option<f64>,
}

/// Parse a free-text CPU description.
///
/// The brand is the first whitespace token. The model is tokens two and
/// three joined with a space (or token two alone when only two tokens
/// exist). The trained model's feature distribution was built on this exact
/// truncation, so it must not be widened for CPUs with longer names.
///
/// The speed comes from the first token containing `GHz` (case-sensitive):
/// the suffix is stripped, decimal commas become periods, and a failed float
/// parse leaves the speed absent. Scanning stops at that first token either
/// way.
pub fn parse_cpu(text: Option<&str>) -> CpuFeatures {
    let Some(text) = text else {
        return CpuFeatures::default();
    };

    let tokens: Vec<&str> = text.split_whitespace().collect();
    if tokens.is_empty() {
        return CpuFeatures::default();
    }

    let brand = tokens[0].to_string();

    let model = if tokens.len() > 2 {
        tokens[1..3].join(" ")
    } else if tokens.len() > 1 {
        tokens[1].to_string()
    } else {
        String::new()
    };

    let mut speed_ghz = None;
    for token in &tokens {
        if token.contains("GHz") {
            let value = token.replace("GHz", "").replace(',', ".");
            speed_ghz = value.parse::<f64>().ok();
            break;
        }
    }

    CpuFeatures {
        brand,
        model,
        speed_ghz,
    }
}
