//! Application services for account registration.

mod registration;

pub use registration::{
    AccountService, AccountServiceError, AccountServiceResult, RegisterAdminRequest,
    SignUpRequest,
};
