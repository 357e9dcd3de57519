//! Stand-ins for the external services the portfolio backend talks to.

pub mod resend;
pub mod silent;
