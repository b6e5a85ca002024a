pub mod csv_source;
pub mod error;
pub mod format;
pub mod header;
pub mod package;
pub mod source;
pub mod workbook;

pub use error::{Result, SheetError};
pub use format::SheetFormat;
pub use package::{write_package, write_package_file, PackageWriter};
pub use source::{RowIter, SheetFile};
