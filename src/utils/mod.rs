//! Shared helpers.
//!
//! | Module   | Purpose                                         |
//! |----------|-------------------------------------------------|
//! | `date`   | UTC dates for generated file headers            |
//! | `fs`     | Atomic whole-file writes                        |
//! | `plural` | Count formatting for log output                 |
//! | `route`  | External link, extension and query detection    |

pub mod date;
pub mod fs;
mod plural;
pub mod route;

pub use plural::{plural_count, plural_s};
