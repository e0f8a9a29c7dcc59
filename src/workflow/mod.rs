//! Remote CI build trigger.
//!
//! - [`request`] - The dispatch request: endpoint, headers and body
//! - [`client`] - Sending it and classifying the answer

pub mod client;
pub mod request;

pub use client::{DispatchClient, DispatchResponse};
pub use request::{WorkflowDispatch, DEFAULT_API_BASE, DEFAULT_REF, DEFAULT_WORKFLOW, WEB_BASE};
