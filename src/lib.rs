//! Dotted numeric version identifiers such as `1.2.42.1982-rc2`.
//!
//! A [`Version`] holds up to four numeric fields (major, minor, maintenance,
//! build) and a free-form suffix. Equality takes the suffix into account,
//! release precedence does not:
//!
//! ```
//! use std::cmp::Ordering;
//! use dotted_version::Version;
//!
//! let plain: Version = "3.1.4.1".parse().unwrap();
//! let beta: Version = "3.1.4.1b5".parse().unwrap();
//!
//! assert_eq!(plain.cmp_precedence(&beta), Ordering::Equal);
//! assert_ne!(plain, beta);
//! assert_eq!(beta.to_string(), "3.1.4.1b5");
//! ```

mod dotted;
mod error;

pub use dotted::version::Version;
pub use dotted::{MAX_COMPONENTS, MAX_COMPONENT_VALUE};
pub use error::{Error, Result};
