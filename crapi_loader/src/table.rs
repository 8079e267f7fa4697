use crate::error::LoadError;
use crate::file::{is_yaml_path, ApiFile};
use crate::spec_file::parse_api_spec;
use crate::specials::{parse_specials, specials_file_name};
use crapi_types::{ApiRegistry, ChromiumProps, FunctionDef};
use indexmap::IndexMap;
use std::collections::BTreeSet;
use std::path::{Path, PathBuf};
use tracing::debug;

/* In-memory API table: function records plus per-category membership */
#[derive(Debug, Clone, Default)]
pub struct ApiTable {
    /* Function records keyed by name, in definition order */
    functions: IndexMap<String, FunctionDef>,

    /* Category name to its members, kept sorted */
    specials: IndexMap<String, BTreeSet<String>>,
}

impl ApiTable {
    pub fn new() -> Self {
        Self::default()
    }

    /* Load a table, choosing the format from the file extension */
    pub fn load(path: &Path) -> Result<Self, LoadError> {
        if is_yaml_path(path) {
            Self::load_yaml(path)
        } else {
            Self::load_spec(path)
        }
    }

    /* Load a legacy `APIspec.txt` table; categories are loaded separately */
    pub fn load_spec(path: &Path) -> Result<Self, LoadError> {
        let source = read_file(path)?;
        let functions = parse_api_spec(&source, path)?;
        debug!("Loaded {} functions from {}", functions.len(), path.display());

        Ok(Self {
            functions,
            specials: IndexMap::new(),
        })
    }

    /* Load the YAML form of the table, categories included */
    pub fn load_yaml(path: &Path) -> Result<Self, LoadError> {
        let source = read_file(path)?;
        let file = ApiFile::from_yaml(&source).map_err(|source| LoadError::Yaml {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(
            "Loaded {} functions and {} categories from {}",
            file.functions.len(),
            file.specials.len(),
            path.display()
        );

        Ok(Self::from_api_file(file))
    }

    pub fn from_api_file(file: ApiFile) -> Self {
        let mut table = Self::new();
        for function in file.functions {
            table.add_function(function);
        }
        for (category, names) in file.specials {
            table.set_specials(&category, names);
        }
        table
    }

    /* Read `<dir>/<category>_special` into the table. Returns the member count.
     *
     * The list file must exist; an unreadable file is an error, never an empty category. */
    pub fn load_specials(&mut self, dir: &Path, category: &str) -> Result<usize, LoadError> {
        let path = dir.join(specials_file_name(category));
        let names = parse_specials(&read_file(&path)?);

        debug!("Category '{}' has {} members", category, names.len());
        let count = names.len();
        self.specials.insert(category.to_string(), names);
        Ok(count)
    }

    pub fn add_function(&mut self, function: FunctionDef) {
        self.functions.insert(function.name.clone(), function);
    }

    /* Replace the members of a category */
    pub fn set_specials<I, S>(&mut self, category: &str, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let names = names.into_iter().map(Into::into).collect::<BTreeSet<String>>();
        self.specials.insert(category.to_string(), names);
    }

    pub fn function(&self, name: &str) -> Option<&FunctionDef> {
        self.functions.get(name)
    }

    /* All function names in definition order */
    pub fn function_names(&self) -> impl Iterator<Item = &str> {
        self.functions.keys().map(String::as_str)
    }

    pub fn function_count(&self) -> usize {
        self.functions.len()
    }

    pub fn is_special(&self, category: &str, name: &str) -> bool {
        self.specials
            .get(category)
            .is_some_and(|names| names.contains(name))
    }

    pub fn special_count(&self, category: &str) -> usize {
        self.specials.get(category).map_or(0, BTreeSet::len)
    }

    /* Convert back to the YAML form */
    pub fn to_api_file(&self) -> ApiFile {
        ApiFile {
            functions: self.functions.values().cloned().collect(),
            specials: self
                .specials
                .iter()
                .map(|(category, names)| (category.clone(), names.iter().cloned().collect()))
                .collect(),
        }
    }
}

impl ApiRegistry for ApiTable {
    fn functions_in_category(&self, category: &str) -> Vec<String> {
        self.specials
            .get(category)
            .map(|names| names.iter().cloned().collect())
            .unwrap_or_default()
    }

    fn tags_for(&self, name: &str) -> Option<&ChromiumProps> {
        self.functions.get(name).map(|function| &function.chromium)
    }
}

fn read_file(path: &Path) -> Result<String, LoadError> {
    std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: PathBuf::from(path),
        source,
    })
}
