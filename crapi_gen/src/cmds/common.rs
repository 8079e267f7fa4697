/* Common utilities shared by generator commands */

use anyhow::Context;
use crapi_loader::{is_yaml_path, ApiTable};
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::{debug, info};

/* Load the API table and, for the legacy format, the members of `category` */
pub fn load_api_table(api: &Path, specials_dir: &Path, category: &str) -> anyhow::Result<ApiTable> {
  let mut table = ApiTable::load(api)
    .with_context(|| format!("Failed to load API table from {}", api.display()))?;

  /* The YAML form carries its categories inline */
  if !is_yaml_path(api) {
    table
      .load_specials(specials_dir, category)
      .with_context(|| format!("Failed to load '{}' specials", category))?;
  }

  info!(
    "Loaded {} functions, {} in category '{}'",
    table.function_count(),
    table.special_count(category),
    category
  );

  Ok(table)
}

/* Write generated text to `output`, or to stdout when no path is given.
 *
 * File output goes through a temporary file in the destination directory that is
 * renamed over the target; on failure an existing target is left untouched. */
pub fn write_output(contents: &str, output: Option<&Path>) -> anyhow::Result<()> {
  match output {
    Some(output) => write_atomically(contents, output),
    None => write_to(std::io::stdout().lock(), contents),
  }
}

/* Write the whole buffer to a stream and flush it */
pub fn write_to<W: Write>(mut writer: W, contents: &str) -> anyhow::Result<()> {
  writer.write_all(contents.as_bytes())?;
  writer.flush()?;
  Ok(())
}

fn write_atomically(contents: &str, output: &Path) -> anyhow::Result<()> {
  let dir = match output.parent() {
    Some(parent) if !parent.as_os_str().is_empty() => parent,
    _ => Path::new("."),
  };

  let mut temp = NamedTempFile::new_in(dir)
    .with_context(|| format!("Failed to create temporary file in {}", dir.display()))?;
  temp.write_all(contents.as_bytes())?;
  temp.flush()?;
  temp
    .persist(output)
    .map_err(|err| err.error)
    .with_context(|| format!("Failed to write {}", output.display()))?;

  debug!("Wrote {} bytes to {}", contents.len(), output.display());
  Ok(())
}
