//! String predicates
//!
//! Total, side-effect-free `&str -> bool` checks that the catalog rules
//! delegate to after coercing the value to a string.
//!
//! # Categories
//!
//! - **String**: character classes, case, width, length, encodings, lists
//! - **Numeric**: integer, float, decimal, divisibility, currency
//! - **Network**: FQDN, e-mail, URL, IP, MAC address
//! - **Identifier**: credit card, ISBN, ISIN, ISSN, UUID, MD5, ObjectId
//! - **Date**: parsing, ordering, ISO 8601
//! - **Phone**: locale-specific mobile numbers
//!
//! # Examples
//!
//! ```
//! use rulekit_validator::predicates::{is_email, is_length, EmailOptions, LengthOptions};
//!
//! assert!(is_email("user@example.com", EmailOptions::default()));
//! assert!(is_length("ab", LengthOptions { min: Some(2), max: None }));
//! ```

pub mod date;
pub mod identifier;
pub mod network;
pub mod numeric;
pub mod phone;
pub mod string;

pub use date::{format_timestamp, is_after, is_before, is_date, is_iso8601, parse_date};
pub use identifier::{
    IssnOptions, is_credit_card, is_isbn, is_isin, is_issn, is_md5, is_mongo_id, is_uuid, luhn,
};
pub use network::{
    EmailOptions, FqdnOptions, UrlOptions, is_email, is_fqdn, is_ip, is_mac_address, is_url,
};
pub use numeric::{
    CurrencyOptions, IntOptions, NumberBounds, is_currency, is_decimal, is_divisible_by, is_float,
    is_int, is_numeric,
};
pub use phone::{ANY_LOCALE, is_mobile_phone, is_supported_locale, supported_locales};
pub use string::{
    LengthOptions, is_alpha, is_alpha_dash, is_alphanumeric, is_alphanumeric_dash, is_ascii,
    is_base64, is_byte_length, is_data_uri, is_field_list, is_full_width, is_half_width,
    is_hex_color, is_hexadecimal, is_image_name, is_in, is_length, is_lowercase, is_multibyte,
    is_order_clause, is_uppercase, is_variable_width,
};
