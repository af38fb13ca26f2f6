use graphwalk_core::format::OutputFormat;
use graphwalk_core::{Algorithm, Preset};

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

/// Parse traversal algorithm from string
pub fn parse_algorithm(s: &str) -> std::result::Result<Algorithm, String> {
    s.parse::<Algorithm>().map_err(|e| e.to_string())
}

/// Parse preset graph name from string
pub fn parse_preset(s: &str) -> std::result::Result<Preset, String> {
    s.parse::<Preset>().map_err(|e| e.to_string())
}
