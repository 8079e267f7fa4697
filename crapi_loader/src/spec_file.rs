/* Parser for the legacy keyword-per-line API table (`APIspec.txt`) */

use crate::error::LoadError;
use crapi_types::{FunctionDef, FunctionParam};
use indexmap::IndexMap;
use std::path::Path;
use tracing::{debug, warn};

/* Parse a legacy API table into function records keyed by name, in definition order.
 *
 * Each record starts at a `name` line and collects every following keyword line
 * until the next `name`. A record that reuses an earlier name replaces it in place. */
pub fn parse_api_spec(
    source: &str,
    path: &Path,
) -> Result<IndexMap<String, FunctionDef>, LoadError> {
    let mut functions: IndexMap<String, FunctionDef> = IndexMap::new();
    let mut current: Option<FunctionDef> = None;

    for (index, line) in source.lines().enumerate() {
        let line_no = index + 1;
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let Some((&keyword, operands)) = tokens.split_first() else {
            continue;
        };
        if keyword.starts_with('#') {
            continue;
        }

        let syntax = |message: String| LoadError::Syntax {
            path: path.to_path_buf(),
            line: line_no,
            message,
        };

        if keyword == "name" {
            let name = operands
                .first()
                .ok_or_else(|| syntax("`name` requires a function name".to_string()))?;
            if let Some(done) = current.take() {
                finish_record(&mut functions, done);
            }
            current = Some(FunctionDef::new(*name));
            continue;
        }

        let record = current
            .as_mut()
            .ok_or_else(|| syntax(format!("`{}` appears before any `name` line", keyword)))?;

        match keyword {
            "return" => {
                if operands.is_empty() {
                    return Err(syntax("`return` requires a type".to_string()));
                }
                record.return_type = operands.join(" ");
            }
            "param" => {
                if operands.len() < 2 {
                    return Err(syntax("`param` requires a name and a type".to_string()));
                }
                record
                    .params
                    .push(FunctionParam::new(operands[0], operands[1..].join(" ")));
            }
            "vector" => {
                let [param_name, size] = operands else {
                    return Err(syntax("`vector` requires a parameter name and a size".to_string()));
                };
                let size: u32 = size
                    .parse()
                    .map_err(|_| syntax(format!("invalid vector size '{}'", size)))?;
                let function_name = record.name.clone();
                let param = record
                    .params
                    .iter_mut()
                    .find(|p| p.name == *param_name)
                    .ok_or_else(|| {
                        syntax(format!(
                            "`vector` names unknown parameter '{}' of {}",
                            param_name, function_name
                        ))
                    })?;
                param.vector_size = Some(size);
            }
            "category" => {
                let category = operands
                    .first()
                    .ok_or_else(|| syntax("`category` requires a label".to_string()))?;
                record.category = Some(category.to_string());
            }
            "chromium" => {
                record.chromium = operands.iter().copied().collect();
            }
            "props" => {
                record.props = operands.iter().map(|p| p.to_string()).collect();
            }
            "alias" => {
                let alias = operands
                    .first()
                    .ok_or_else(|| syntax("`alias` requires a function name".to_string()))?;
                record.alias = Some(alias.to_string());
            }
            "chrelopcode" => {
                let opcode = operands
                    .first()
                    .ok_or_else(|| syntax("`chrelopcode` requires a value".to_string()))?;
                let opcode: i64 = opcode
                    .parse()
                    .map_err(|_| syntax(format!("invalid chrelopcode '{}'", opcode)))?;
                record.chrelopcode = Some(opcode);
            }
            "paramprop" | "paramlist" | "paramvec" | "paramset" | "paramaction"
            | "vectoralias" => {
                debug!("{}:{}: skipping '{}' in {}", path.display(), line_no, keyword, record.name);
            }
            other => {
                warn!(
                    "{}:{}: ignoring unknown keyword '{}' in {}",
                    path.display(),
                    line_no,
                    other,
                    record.name
                );
            }
        }
    }

    if let Some(done) = current.take() {
        finish_record(&mut functions, done);
    }

    Ok(functions)
}

fn finish_record(functions: &mut IndexMap<String, FunctionDef>, record: FunctionDef) {
    if functions.contains_key(&record.name) {
        warn!("function '{}' is defined more than once, keeping the last definition", record.name);
    }
    functions.insert(record.name.clone(), record);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(source: &str) -> Result<IndexMap<String, FunctionDef>, LoadError> {
        parse_api_spec(source, Path::new("APIspec.txt"))
    }

    #[test]
    fn parses_full_record() {
        let source = "\
# GL 1.0
name        Color3fv
return      void
param       v       const GLfloat *
vector      v       3
category    1.0
chromium    pack
props       setclient

name        Vertex2f
param       x       GLfloat
param       y       GLfloat
category    1.0
chromium    pack extpack
alias       Vertex2fARB
chrelopcode 12
";
        let functions = parse(source).expect("spec should parse");
        assert_eq!(
            functions.keys().collect::<Vec<_>>(),
            vec!["Color3fv", "Vertex2f"]
        );

        let color = &functions["Color3fv"];
        assert_eq!(color.return_type, "void");
        assert_eq!(color.params[0].param_type, "const GLfloat *");
        assert_eq!(color.params[0].vector_size, Some(3));
        assert_eq!(color.category.as_deref(), Some("1.0"));
        assert!(!color.chromium.is_extpack());
        assert_eq!(color.props, vec!["setclient".to_string()]);

        let vertex = &functions["Vertex2f"];
        assert!(vertex.chromium.is_extpack());
        assert_eq!(vertex.alias.as_deref(), Some("Vertex2fARB"));
        assert_eq!(vertex.chrelopcode, Some(12));
    }

    #[test]
    fn rejects_keyword_before_name() {
        let err = parse("\nchromium pack\nname Foo\n").unwrap_err();
        match err {
            LoadError::Syntax { line, message, .. } => {
                assert_eq!(line, 2);
                assert!(message.contains("chromium"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn rejects_vector_on_unknown_param() {
        let err = parse("name Foo\nparam x GLint\nvector y 2\n").unwrap_err();
        assert!(matches!(err, LoadError::Syntax { line: 3, .. }));
    }

    #[test]
    fn rejects_name_without_operand() {
        let err = parse("name\n").unwrap_err();
        assert!(matches!(err, LoadError::Syntax { line: 1, .. }));
    }

    #[test]
    fn unknown_keywords_are_skipped() {
        let functions = parse("name Foo\nfrobnicate yes\nchromium extpack\n").unwrap();
        assert!(functions["Foo"].chromium.is_extpack());
    }

    #[test]
    fn parameter_metadata_keywords_are_accepted() {
        let source = "\
name        TexParameteri
param       target  GLenum
param       pname   GLenum
param       param   GLint
paramprop   target  GL_TEXTURE_1D GL_TEXTURE_2D
paramlist   pname   GL_TEXTURE_MIN_FILTER
paramvec    pname   GL_TEXTURE_BORDER_COLOR 4
paramset    [pname param] [GL_TEXTURE_WRAP_S GL_CLAMP]
paramaction pname   GL_TEXTURE_MIN_FILTER
vectoralias TexParameteriv
chromium    pack
";
        let functions = parse(source).expect("spec should parse");
        let func = &functions["TexParameteri"];
        assert_eq!(func.params.len(), 3);
        assert_eq!(func.chromium.iter().collect::<Vec<_>>(), vec!["pack"]);
    }

    #[test]
    fn redefinition_replaces_in_place() {
        let functions = parse("name A\nname B\nname A\nchromium extpack\n").unwrap();
        assert_eq!(functions.keys().collect::<Vec<_>>(), vec!["A", "B"]);
        assert!(functions["A"].chromium.is_extpack());
    }
}
