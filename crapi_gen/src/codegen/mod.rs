pub mod banner;
pub mod c;
pub mod c_gen;

/* Category whose members get `unpack_extend.h` declarations */
pub const UNPACKER_CATEGORY: &str = "unpacker";

/* Include guard of `unpack_extend.h` */
pub const UNPACK_EXTEND_GUARD: &str = "UNPACK_EXTEND_H";

/* Generator name stamped into the DO NOT EDIT warning */
pub const GENERATOR_NAME: &str = "unpack_extend.py";
