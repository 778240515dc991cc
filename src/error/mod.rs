mod form;

pub use form::FormError;
