/* Codegen command - generate unpack_extend.h from the API table */

use super::common::{load_api_table, write_output};
use crate::codegen::banner::CopyrightBanner;
use crate::codegen::c::{UnpackExtendGenerator, UnpackExtendGeneratorOptions};
use crate::codegen::UNPACKER_CATEGORY;
use std::path::PathBuf;
use tracing::info;

/* Execute the codegen command */
pub fn run(
  api: PathBuf,
  specials_dir: PathBuf,
  banner: Option<PathBuf>,
  output: Option<PathBuf>,
) -> anyhow::Result<()> {
  let table = load_api_table(&api, &specials_dir, UNPACKER_CATEGORY)?;

  let banner = match &banner {
    Some(path) => CopyrightBanner::from_file(path)?,
    None => CopyrightBanner::stanford(),
  };

  let options = UnpackExtendGeneratorOptions {
    banner,
    ..Default::default()
  };
  let generator = UnpackExtendGenerator::new(&table, options);
  let header = generator.emit_code()?;

  write_output(&header, output.as_deref())?;

  match &output {
    Some(path) => info!("[✓] Generated {}", path.display()),
    None => info!("[✓] Generated unpack_extend.h on stdout"),
  }

  Ok(())
}
