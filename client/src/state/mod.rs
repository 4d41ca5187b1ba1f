//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `products`, `upload`, ...) so each
//! page depends only on the small model it drives. None of these types touch
//! the DOM, which keeps them testable off the browser.

pub mod forms;
pub mod products;
pub mod session;
pub mod toast;
pub mod upload;
