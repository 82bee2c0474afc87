//! Configuration section definitions.
//!
//! Each module corresponds to a section in `redirects.toml`:
//!
//! | Module     | TOML Section   | Purpose                               |
//! |------------|----------------|---------------------------------------|
//! | `site`     | `[site]`       | Site url and live paths               |
//! | `merge`    | `[merge]`      | Ranked input tables, rewrites, output |
//! | `validate` | `[validate]`   | Finding levels, cycle detection       |
//! | `emit`     | `[emit]`       | Platform files                        |

mod emit;
mod merge;
mod site;
mod validate;

pub use emit::{EmitConfig, Platform};
pub use merge::{MergeConfig, SourceConfig, SourceKind};
pub use site::SiteSectionConfig;
pub use validate::{ValidateConfig, ValidateLevel};
