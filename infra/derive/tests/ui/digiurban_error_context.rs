use digiurban_derive::digiurban_error;
use std::borrow::Cow;

#[digiurban_error]
pub enum LookupError {
    #[error("Parse error{}: {source}", format_context(.context))]
    Parse { source: std::num::ParseIntError, context: Option<Cow<'static, str>> },

    #[error("Missing record{}: {message}", format_context(.context))]
    Missing { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn parse(raw: &str) -> Result<u32, LookupError> {
    let value = raw.parse::<u32>().context("Parsing record id")?;
    if value == 0 {
        return Err::<u32, _>(LookupError::Missing { message: "id 0".into(), context: None })
            .context("Resolving record");
    }
    Ok(value)
}

fn main() {
    assert_eq!(parse("7").ok(), Some(7));

    let err = parse("x").unwrap_err();
    assert!(err.to_string().starts_with("Parse error (Parsing record id)"));

    let err = parse("0").unwrap_err();
    assert_eq!(err.to_string(), "Missing record (Resolving record): id 0");

    let internal: LookupError = "boom".into();
    assert_eq!(internal.to_string(), "Internal error: boom");
}
