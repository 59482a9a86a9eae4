// Upload/analysis page: file selection, submission checks, page state and result views.
// All calls to the matching service go through match_client.

pub mod handlers;
pub mod page;
pub mod selection;
pub mod validation;
pub mod view;
