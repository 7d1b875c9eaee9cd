//! Output generation for the spreadsheet and the image directory.
//!
//! # Submodules
//!
//! - [`sheet`]: writes the collected records to `news.xlsx` once per run
//! - [`images`]: downloads article thumbnails, named after their titles
//!
//! # Output Structure
//!
//! ```text
//! output_dir/
//! ├── news.xlsx
//! └── images/
//!     ├── ai-comes-for-wall-street.jpg
//!     └── ...
//! ```

pub mod images;
pub mod sheet;
