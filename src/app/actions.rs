//! Actions representing side effects to be executed by the plugin runtime.
//!
//! The event handler never touches the host. It returns a `Vec<Action>` and
//! the plugin shim in `main.rs` executes each one against the Zellij API.
//!
//! # Example
//!
//! ```
//! use countryscope::app::Action;
//! use countryscope::repository::{CountryRequest, DEFAULT_API_URL};
//!
//! let actions = vec![Action::FetchCountries(CountryRequest::new(DEFAULT_API_URL))];
//! assert_eq!(actions.len(), 1);
//! ```

use crate::repository::CountryRequest;

/// Commands representing side effects to be executed by the plugin runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Hides the plugin pane.
    ///
    /// Sent when the user presses `q` with no detail overlay open.
    CloseFocus,

    /// Asks the host to perform the country list request.
    ///
    /// The answer comes back as a web request result event carrying the
    /// request's context.
    FetchCountries(CountryRequest),
}
