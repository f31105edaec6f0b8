#[cfg(feature = "cli")]
pub mod cli;

use crate::core::ToolProvider;

/// The stock GDAL executable names, resolved through `PATH`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GdalTools {
    pub probe: String,
    pub translate: String,
    pub overviews: String,
}

impl Default for GdalTools {
    fn default() -> Self {
        Self {
            probe: "gdalinfo".to_string(),
            translate: "gdal_translate".to_string(),
            overviews: "gdaladdo".to_string(),
        }
    }
}

impl ToolProvider for GdalTools {
    fn probe_tool(&self) -> &str {
        &self.probe
    }

    fn translate_tool(&self) -> &str {
        &self.translate
    }

    fn overview_tool(&self) -> &str {
        &self.overviews
    }
}
