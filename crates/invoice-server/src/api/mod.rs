mod health;
mod invoice;

pub use health::health_check;
pub use invoice::{generate_pdf, invoice_filename, view_pdf, Disposition};
