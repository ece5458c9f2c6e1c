mod payment_processor;

pub use payment_processor::{PaymentProcessor, ProcessorError};
