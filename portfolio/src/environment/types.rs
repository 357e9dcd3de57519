use portfolio_core_contact_impl::ContactFeatureServiceImpl;
use portfolio_email_impl::EmailServiceImpl;
use portfolio_extern_impl::{relay::RelayApiServiceImpl, resend::ResendApiServiceImpl};
use portfolio_templates_impl::TemplateServiceImpl;

// API
pub type RestServer = portfolio_api_rest::RestServer<ContactFeature>;

// Core
pub type ContactFeature = ContactFeatureServiceImpl<EmailApi, Template>;

// Email
pub type EmailApi = EmailServiceImpl<ResendApi>;

// Extern
pub type ResendApi = ResendApiServiceImpl;
pub type RelayApi = RelayApiServiceImpl;

// Templates
pub type Template = TemplateServiceImpl;
