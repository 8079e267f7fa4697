use crate::codegen::banner::CopyrightBanner;
use crate::codegen::c_gen::{
    declaration_for, emit_autogen_warning, emit_include_guard_close, emit_include_guard_open,
};
use crate::codegen::{GENERATOR_NAME, UNPACK_EXTEND_GUARD, UNPACKER_CATEGORY};
use crate::errors::{GenError, GenResult};
use crapi_types::{ApiRegistry, RegistryError};
use tracing::{debug, trace};

pub struct UnpackExtendGenerator<'a, R: ApiRegistry + ?Sized> {
    registry: &'a R,
    options: UnpackExtendGeneratorOptions,
}

pub struct UnpackExtendGeneratorOptions {
    pub category: String,
    pub include_guard: String,
    pub banner: CopyrightBanner,
}

impl Default for UnpackExtendGeneratorOptions {
    fn default() -> Self {
        Self {
            category: UNPACKER_CATEGORY.to_string(),
            include_guard: UNPACK_EXTEND_GUARD.to_string(),
            banner: CopyrightBanner::default(),
        }
    }
}

impl<'a, R: ApiRegistry + ?Sized> UnpackExtendGenerator<'a, R> {
    pub fn new(registry: &'a R, options: UnpackExtendGeneratorOptions) -> Self {
        Self { registry, options }
    }

    /// Render the complete header.
    ///
    /// Declarations follow the registry's order for the category. Nothing is
    /// returned if any listed function is missing from the registry.
    pub fn emit_code(&self) -> GenResult<String> {
        let category = &self.options.category;
        let names = self.registry.functions_in_category(category);
        debug!("Emitting {} declarations for category '{}'", names.len(), category);

        // Resolve every declaration before assembling the header
        let mut declarations = String::new();
        for name in &names {
            let tags = self
                .registry
                .require_tags(name)
                .map_err(|RegistryError::UnknownFunction { name }| {
                    GenError::UnresolvedFunction {
                        name,
                        category: category.clone(),
                    }
                })?;
            let declaration = declaration_for(name, tags);
            trace!("{}", declaration);
            declarations.push_str(&declaration);
            declarations.push('\n');
        }

        let mut output = String::new();
        output.push_str(&self.options.banner.render());
        output.push_str(&emit_autogen_warning(GENERATOR_NAME));
        output.push_str(&emit_include_guard_open(&self.options.include_guard));
        output.push_str(&declarations);
        output.push_str(&emit_include_guard_close());

        Ok(output)
    }
}
