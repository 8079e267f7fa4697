use crapi_types::FunctionDef;
use indexmap::IndexMap;
use serde_derive::{Deserialize, Serialize};
use std::path::Path;

/* True when the path names the YAML form of the table (`.yaml` / `.yml`) */
pub fn is_yaml_path(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|ext| ext.to_str()),
        Some("yaml") | Some("yml")
    )
}

/* YAML form of the API table: function records plus category membership lists */
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "kebab-case")]
pub struct ApiFile {
    /* Function records, in definition order */
    #[serde(default)]
    pub functions: Vec<FunctionDef>,

    /* Category name (e.g. "unpacker") to the functions registered under it */
    #[serde(default)]
    pub specials: IndexMap<String, Vec<String>>,
}

impl ApiFile {
    pub fn from_yaml(source: &str) -> Result<Self, serde_yml::Error> {
        serde_yml::from_str(source)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yml::Error> {
        serde_yml::to_string(self)
    }

    /* Get the function names registered under a category */
    pub fn specials(&self, category: &str) -> &[String] {
        self.specials
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
