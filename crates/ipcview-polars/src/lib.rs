pub use polars_core::*;

/// Arrow arrays, schemas and the IPC stream codec.
pub use polars_arrow as arrow;

#[cfg(feature = "io")]
pub use polars_io as io;

pub mod prelude {
    pub use polars_core::prelude::*;
    #[cfg(feature = "io")]
    pub use polars_io::prelude::*;
}
