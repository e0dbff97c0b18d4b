mod generation_form;
mod send_email_form;

pub use generation_form::GenerationForm;
pub use send_email_form::SendEmailForm;
