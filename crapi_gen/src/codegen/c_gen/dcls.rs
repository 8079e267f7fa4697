use crapi_types::ChromiumProps;

/* Forward declaration of the unpack handler for one special function.
 * `extpack` functions travel in the extended opcode stream and get the
 * `crUnpackExtend` prefix. */
pub fn declaration_for(name: &str, tags: &ChromiumProps) -> String {
    if tags.is_extpack() {
        format!("extern void crUnpackExtend{}(void);", name)
    } else {
        format!("extern void crUnpack{}(void);", name)
    }
}

pub fn emit_autogen_warning(generator: &str) -> String {
    format!(
        "/* DO NOT EDIT!  THIS CODE IS AUTOGENERATED BY {} */\n\n",
        generator
    )
}

pub fn emit_include_guard_open(guard: &str) -> String {
    format!("#ifndef {guard}\n#define {guard} 1\n\n")
}

pub fn emit_include_guard_close() -> String {
    "\n#endif\n\n".to_string()
}
