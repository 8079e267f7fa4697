use serde_derive::{Deserialize, Serialize};

/* Property tag that selects the `crUnpackExtend` declaration form */
pub const EXTPACK_PROP: &str = "extpack";

/* Return type assumed when a record omits `return` */
pub const DEFAULT_RETURN_TYPE: &str = "void";

#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct FunctionParam {
    pub name: String,
    #[serde(rename = "type")]
    pub param_type: String,
    /// Element count when the parameter is a pointer to a fixed-size vector
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub vector_size: Option<u32>,
}

impl FunctionParam {
    pub fn new(name: impl Into<String>, param_type: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            param_type: param_type.into(),
            vector_size: None,
        }
    }
}

/// Chromium-specific property tags attached to a function (`pack`,
/// `extpack`, `nop`, ...). Order is kept as written in the table.
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone, Default)]
#[serde(transparent)]
pub struct ChromiumProps(Vec<String>);

impl ChromiumProps {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    pub fn contains(&self, prop: &str) -> bool {
        self.0.iter().any(|p| p == prop)
    }

    /* Add a tag unless it is already present */
    pub fn insert(&mut self, prop: impl Into<String>) {
        let prop = prop.into();
        if !self.contains(&prop) {
            self.0.push(prop);
        }
    }

    pub fn is_extpack(&self) -> bool {
        self.contains(EXTPACK_PROP)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for ChromiumProps {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut props = ChromiumProps::new();
        for prop in iter {
            props.insert(prop);
        }
        props
    }
}

fn default_return_type() -> String {
    DEFAULT_RETURN_TYPE.to_string()
}

/* One record of the API table */
#[derive(Serialize, Deserialize, Debug, PartialEq, Eq, Clone)]
#[serde(rename_all = "kebab-case")]
pub struct FunctionDef {
    pub name: String,

    #[serde(rename = "return", default = "default_return_type")]
    pub return_type: String,

    #[serde(default)]
    pub params: Vec<FunctionParam>,

    /* GL version or extension the entry point belongs to (e.g. "1.0", "GL_ARB_multitexture") */
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default)]
    pub chromium: ChromiumProps,

    /* Generic GL properties (e.g. "setclient", "get") */
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub props: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alias: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chrelopcode: Option<i64>,
}

impl FunctionDef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            return_type: default_return_type(),
            params: Vec::new(),
            category: None,
            chromium: ChromiumProps::new(),
            props: Vec::new(),
            alias: None,
            chrelopcode: None,
        }
    }

    pub fn with_chromium<I, S>(mut self, props: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.chromium = props.into_iter().collect();
        self
    }
}
