use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::{
    JalaliDate, Locale, NameStyle, ParseError, TOKEN_DAY, TOKEN_MONTH, TOKEN_MONTH_NAME, TOKEN_YEAR,
};

// Longer tokens first: "MMMM" must win over "MM".
#[allow(clippy::expect_used)] // built from constant tokens
static TOKEN_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&[TOKEN_YEAR, TOKEN_MONTH_NAME, TOKEN_MONTH, TOKEN_DAY].join("|"))
        .expect("format token pattern is a valid regex")
});

/// Substitutes the date tokens in `template`. The date is assumed valid.
pub(crate) fn render(date: &JalaliDate, template: &str, locale: &Locale) -> String {
    TOKEN_PATTERN
        .replace_all(template, |caps: &Captures<'_>| match &caps[0] {
            TOKEN_YEAR => format!("{:04}", date.year()),
            TOKEN_MONTH_NAME => locale
                .month_name(date.month(), NameStyle::Long)
                .unwrap_or_default()
                .to_owned(),
            TOKEN_MONTH => format!("{:02}", date.month()),
            _ => format!("{:02}", date.day()),
        })
        .into_owned()
}

fn field_pattern(token: &str, locale: &Locale) -> String {
    match token {
        TOKEN_YEAR => r"(?P<year>-?\d{1,4})".to_owned(),
        TOKEN_MONTH_NAME => {
            let names: Vec<String> = locale.long_months.iter().map(|name| regex::escape(name)).collect();
            format!("(?P<month_name>{})", names.join("|"))
        }
        TOKEN_MONTH => r"(?P<month>\d{1,2})".to_owned(),
        _ => r"(?P<day>\d{1,2})".to_owned(),
    }
}

/// Parses `text` by turning `template` into an anchored regex, one named group
/// per token. The result is not checked against the calendar.
pub(crate) fn parse(text: &str, template: &str, locale: &Locale) -> Result<JalaliDate, ParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParseError::EmptyInput);
    }

    let mut pattern = String::from("^");
    let mut last = 0;
    for token in TOKEN_PATTERN.find_iter(template) {
        pattern.push_str(&regex::escape(&template[last..token.start()]));
        pattern.push_str(&field_pattern(token.as_str(), locale));
        last = token.end();
    }
    pattern.push_str(&regex::escape(&template[last..]));
    pattern.push('$');

    // Repeated tokens give duplicate group names and fail here.
    let re = Regex::new(&pattern).map_err(|_| ParseError::InvalidTemplate(template.to_owned()))?;
    let caps = re
        .captures(trimmed)
        .ok_or_else(|| ParseError::InvalidFormat(format!("{trimmed:?} does not match {template:?}")))?;

    let number = |name: &str| -> Result<Option<i32>, ParseError> {
        caps.name(name)
            .map(|m| {
                m.as_str()
                    .parse::<i32>()
                    .map_err(|_| ParseError::InvalidField(m.as_str().to_owned()))
            })
            .transpose()
    };

    let missing = || ParseError::InvalidTemplate(template.to_owned());
    let year = number("year")?.ok_or_else(missing)?;
    let month = match number("month")? {
        Some(month) => month,
        None => {
            let name = caps.name("month_name").ok_or_else(missing)?.as_str();
            locale
                .month_from_name(name)
                .ok_or_else(|| ParseError::InvalidField(name.to_owned()))?
        }
    };
    let day = number("day")?.ok_or_else(missing)?;

    log::trace!("parsed {trimmed:?} with {template:?} as {year}/{month}/{day}");
    Ok(JalaliDate::new(year, month, day))
}
