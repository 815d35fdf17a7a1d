//! Contact form model: field values, validation, the delivery call and the
//! transient "sent" acknowledgement.

pub mod acknowledgement;
pub mod delivery;
pub mod form;

pub use acknowledgement::Acknowledgement;
pub use delivery::deliver;
pub use form::{ContactFormState, Field, SERVICE_PLACEHOLDER};
