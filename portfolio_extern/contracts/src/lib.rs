pub mod relay;
pub mod resend;
