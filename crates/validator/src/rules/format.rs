//! Format rules: the value is coerced to a string and handed to a predicate.

use serde_json::Value;

use crate::foundation::value::expect_number;
use crate::foundation::{OptionShape, RuleContext, RuleDescriptor, RuleError, coerce};
use crate::predicates::{
    self, CurrencyOptions, EmailOptions, FqdnOptions, IntOptions, IssnOptions, LengthOptions,
    NumberBounds, UrlOptions,
};
use crate::registry::RuleRegistry;
use crate::string_rule;

fn resolve_locale(option: &Value, ctx: &RuleContext<'_>) -> Result<Value, RuleError> {
    match option {
        Value::Bool(true) => Ok(Value::String(ctx.settings().default_mobile_locale.clone())),
        Value::String(_) => Ok(option.clone()),
        _ => Err(RuleError::invalid_shape("mobile", OptionShape::LocaleOrTrue)),
    }
}

fn mobile() -> RuleDescriptor {
    RuleDescriptor::new(|value, locale| {
        let locale = locale
            .as_str()
            .ok_or_else(|| RuleError::invalid_shape("mobile", OptionShape::LocaleOrTrue))?;
        predicates::is_mobile_phone(&coerce(value), locale)
            .ok_or_else(|| RuleError::invalid_shape("mobile", OptionShape::LocaleOrTrue))
    })
    .with_pretreat(resolve_locale)
}

fn divisible_by() -> RuleDescriptor {
    RuleDescriptor::new(|value, divisor| {
        let divisor = expect_number("divisibleBy", divisor)?;
        Ok(predicates::is_divisible_by(&coerce(value), divisor))
    })
}

pub(super) fn install(registry: &mut RuleRegistry) {
    // Character classes
    registry.register("alpha", string_rule!(v => predicates::is_alpha(v)));
    registry.register("alphaDash", string_rule!(v => predicates::is_alpha_dash(v)));
    registry.register("alphaNumeric", string_rule!(v => predicates::is_alphanumeric(v)));
    registry.register("alphaNumericDash", string_rule!(v => predicates::is_alphanumeric_dash(v)));
    registry.register("ascii", string_rule!(v => predicates::is_ascii(v)));
    registry.register("lowercase", string_rule!(v => predicates::is_lowercase(v)));
    registry.register("uppercase", string_rule!(v => predicates::is_uppercase(v)));
    registry.register("fullWidth", string_rule!(v => predicates::is_full_width(v)));
    registry.register("halfWidth", string_rule!(v => predicates::is_half_width(v)));
    registry.register("variableWidth", string_rule!(v => predicates::is_variable_width(v)));
    registry.register("multibyte", string_rule!(v => predicates::is_multibyte(v)));

    // Length
    registry.register(
        "length",
        string_rule!(v, opts: LengthOptions = object("length") => predicates::is_length(v, opts)),
    );
    registry.register(
        "byteLength",
        string_rule!(v, opts: LengthOptions = object("byteLength") => predicates::is_byte_length(v, opts)),
    );

    // Encodings
    registry.register("base64", string_rule!(v => predicates::is_base64(v)));
    registry.register("hex", string_rule!(v => predicates::is_hexadecimal(v)));
    registry.register("hexColor", string_rule!(v => predicates::is_hex_color(v)));
    registry.register("dataURI", string_rule!(v => predicates::is_data_uri(v)));

    // Numbers
    registry.register(
        "int",
        string_rule!(v, opts: IntOptions = object_or_true("int") => predicates::is_int(v, opts)),
    );
    registry.register(
        "float",
        string_rule!(v, opts: NumberBounds = object_or_true("float") => predicates::is_float(v, opts)),
    );
    registry.register("decimal", string_rule!(v => predicates::is_decimal(v)));
    registry.register("numeric", string_rule!(v => predicates::is_numeric(v)));
    registry.register("divisibleBy", divisible_by());
    registry.register(
        "currency",
        string_rule!(v, opts: CurrencyOptions = object_or_true("currency") => predicates::is_currency(v, &opts)),
    );

    // Network
    registry.register(
        "email",
        string_rule!(v, opts: EmailOptions = object_or_true("email") => predicates::is_email(v, opts)),
    );
    registry.register(
        "fqdn",
        string_rule!(v, opts: FqdnOptions = object_or_true("fqdn") => predicates::is_fqdn(v, opts)),
    );
    registry.register(
        "url",
        string_rule!(v, opts: UrlOptions = object_or_true("url") => predicates::is_url(v, &opts)),
    );
    registry.register("ip", string_rule!(v => predicates::is_ip(v, None)));
    registry.register("ip4", string_rule!(v => predicates::is_ip(v, Some(4))));
    registry.register("ip6", string_rule!(v => predicates::is_ip(v, Some(6))));
    registry.register("macAddress", string_rule!(v => predicates::is_mac_address(v)));

    // Identifiers
    registry.register("creditCard", string_rule!(v => predicates::is_credit_card(v)));
    registry.register("isbn", string_rule!(v => predicates::is_isbn(v)));
    registry.register("isin", string_rule!(v => predicates::is_isin(v)));
    registry.register(
        "issn",
        string_rule!(v, opts: IssnOptions = object_or_true("issn") => predicates::is_issn(v, opts)),
    );
    registry.register("uuid", string_rule!(v => predicates::is_uuid(v)));
    registry.register("md5", string_rule!(v => predicates::is_md5(v)));
    registry.register("mongoId", string_rule!(v => predicates::is_mongo_id(v)));

    // Dates
    registry.register("date", string_rule!(v => predicates::is_date(v)));
    registry.register("iso8601", string_rule!(v => predicates::is_iso8601(v)));

    // Phone
    registry.register("mobile", mobile());
}
