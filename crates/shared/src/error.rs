use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PhoneNumberError {
    #[error("phone number contains no digits")]
    NoDigits,
    #[error("phone number must not start with 0")]
    LeadingZero,
    #[error("phone number has {digits} digits; at least {min} required")]
    TooShort { digits: usize, min: usize },
    #[error("phone number has {digits} digits; at most {max} allowed")]
    TooLong { digits: usize, max: usize },
}
