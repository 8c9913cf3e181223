/*!
 * Process Module
 * Process records, their lifecycle origin, and submission validation
 */

pub mod types;
pub mod validation;

pub use types::{Metrics, Origin, ProcessRecord};
pub use validation::SubmitRequest;
