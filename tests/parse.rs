use anyhow::Result;
use anyliteral::parse::{parse, parse_with, ParseError};
use anyliteral::pos::Pos;
use anyliteral::settings::GO_SETTINGS;
use anyliteral::value::{LiteralCategory::*, LiteralCategory, Value};

fn err(text: &str, category: LiteralCategory) -> ParseError {
    match parse(text, category) {
        Ok(v) => panic!("{:?} as {} parsed to {:?}", text, category, v),
        Err(e) => e.err,
    }
}

#[test]
fn base_equivalence() -> Result<()> {
    for (text, cat) in [("123", IntegerDecimal),
                        ("0b1111011", IntegerBinary),
                        ("0o173", IntegerOctal),
                        ("0x7B", IntegerHex),
                        ("0x7b", IntegerHex),
                        ("0X7B", IntegerHex),
                        ("7B", IntegerHex),
                        ("1111011", IntegerBinary),
                        ("173", IntegerOctal)] {
        let v = parse(text, cat)?;
        assert_eq!(v.as_integer(), Some(123), "{}", text);
        assert_eq!(v.category(), cat);
    }
    Ok(())
}

#[test]
fn integer_errors() {
    assert_eq!(err("FFFFFFFFFFFFFFFF", IntegerHex), ParseError::Overflow);
    assert_eq!(err("9223372036854775808", IntegerDecimal), ParseError::Overflow);
    assert_eq!(err("0b102", IntegerBinary), ParseError::InvalidDigit('2', 2));
    assert_eq!(err("0o8", IntegerOctal), ParseError::InvalidDigit('8', 8));
    assert_eq!(err("0x1G", IntegerHex), ParseError::InvalidDigit('G', 16));
    assert_eq!(err("12a", IntegerDecimal), ParseError::InvalidDigit('a', 10));
    assert_eq!(err("0x", IntegerHex), ParseError::MissingDigits);
    assert_eq!(err("", IntegerDecimal), ParseError::MissingDigits);
    assert_eq!(err("-1", IntegerDecimal), ParseError::InvalidDigit('-', 10));
    // no separators in the canonical format
    assert_eq!(err("1_000", IntegerDecimal), ParseError::InvalidDigit('_', 10));
}

#[test]
fn integer_limits() -> Result<()> {
    assert_eq!(parse("7FFFFFFFFFFFFFFF", IntegerHex)?.as_integer(), Some(i64::MAX));
    assert_eq!(parse("9223372036854775807", IntegerDecimal)?.as_integer(), Some(i64::MAX));
    assert_eq!(parse("0", IntegerDecimal)?.as_integer(), Some(0));
    Ok(())
}

#[test]
fn error_positions() {
    let e = parse("0x12z4", IntegerHex).unwrap_err();
    assert_eq!(e.err, ParseError::InvalidDigit('z', 16));
    assert_eq!(e.pos, Pos { line: 0, col: 4 });
    assert_eq!(e.to_string(), "invalid digit 'z' for base 16 @1.4");

    let e = parse("ok\nthen \\q", TextInterpreted).unwrap_err();
    assert_eq!(e.err, ParseError::UnknownEscape('q'));
    assert_eq!(e.pos, Pos { line: 1, col: 6 });
}

#[test]
fn go_settings() -> Result<()> {
    assert_eq!(parse_with("1_000_000", IntegerDecimal, &GO_SETTINGS)?.as_integer(),
               Some(1_000_000));
    assert_eq!(parse_with("0x_FF", IntegerHex, &GO_SETTINGS)?.as_integer(), Some(255));
    assert_eq!(parse_with("0b1011", IntegerBinary, &GO_SETTINGS)?.as_integer(), Some(11));
    assert_eq!(parse_with("1_0.2_5", FloatDecimal, &GO_SETTINGS)?.as_float(), Some(10.25));

    let e = parse_with("7F", IntegerHex, &GO_SETTINGS).unwrap_err();
    assert_eq!(e.err, ParseError::MissingPrefix("0x"));
    let e = parse_with("1__0", IntegerDecimal, &GO_SETTINGS).unwrap_err();
    assert_eq!(e.err, ParseError::InvalidDigit('_', 10));
    let e = parse_with("10_", IntegerDecimal, &GO_SETTINGS).unwrap_err();
    assert_eq!(e.err, ParseError::InvalidDigit('_', 10));
    let e = parse_with("_10", IntegerDecimal, &GO_SETTINGS).unwrap_err();
    assert_eq!(e.err, ParseError::InvalidDigit('_', 10));
    let e = parse_with("1_.5", FloatDecimal, &GO_SETTINGS).unwrap_err();
    assert_eq!(e.err, ParseError::InvalidDigit('_', 10));
    let e = parse_with("61", CodePointHexEscape, &GO_SETTINGS).unwrap_err();
    assert_eq!(e.err, ParseError::MissingPrefix("\\x"));
    let e = parse_with("a`b", TextRaw, &GO_SETTINGS).unwrap_err();
    assert_eq!(e.err, ParseError::DisallowedInRaw('`'));
    assert_eq!(e.pos, Pos { line: 0, col: 1 });
    assert_eq!(parse_with("a\r\nb", TextRaw, &GO_SETTINGS)?.as_text(), Some("a\nb"));
    Ok(())
}

#[test]
fn float_equivalence() -> Result<()> {
    assert_eq!(parse("2.5e2", FloatScientific)?.as_float(), Some(250.0));
    assert_eq!(parse("2.5E+2", FloatScientific)?.as_float(), Some(250.0));
    assert_eq!(parse("25000e-2", FloatScientific)?.as_float(), Some(250.0));
    assert_eq!(parse("0x1.0p3", FloatHex)?.as_float(), Some(8.0));
    assert_eq!(parse("1p3", FloatHex)?.as_float(), Some(8.0));
    assert_eq!(parse("0x.8P1", FloatHex)?.as_float(), Some(1.0));
    assert_eq!(parse("0xAp-2", FloatHex)?.as_float(), Some(2.5));
    assert_eq!(parse("3.14", FloatDecimal)?.as_float(), Some(3.14));
    assert_eq!(parse(".5", FloatDecimal)?.as_float(), Some(0.5));
    assert_eq!(parse("5.", FloatDecimal)?.as_float(), Some(5.0));
    Ok(())
}

#[test]
fn hex_float_precision() -> Result<()> {
    assert_eq!(parse("0x1.fffffffffffffp1023", FloatHex)?.as_float(), Some(f64::MAX));
    assert_eq!(parse("0x1p-1074", FloatHex)?.as_float(), Some(f64::from_bits(1)));
    assert_eq!(parse("0x1p-1022", FloatHex)?.as_float(), Some(f64::MIN_POSITIVE));
    // More digits than fit 64 bits, the excess being zero
    assert_eq!(parse("0x100000000000000000000p-80", FloatHex)?.as_float(), Some(1.0));
    // Exactly between 1 and the next float, plus a little: rounds up
    assert_eq!(parse("0x1.00000000000008000000001p0", FloatHex)?.as_float(),
               Some(1.0 + f64::EPSILON));
    // Exactly between: round to even
    assert_eq!(parse("0x1.00000000000008p0", FloatHex)?.as_float(), Some(1.0));
    // Subnormal results are rounded once, at their own precision
    assert_eq!(parse("0x1.00000000000008p-1075", FloatHex)?.as_float(),
               Some(f64::from_bits(1)));
    assert_eq!(parse("0x1p-1075", FloatHex)?.as_float(), Some(0.0));
    assert_eq!(parse("0x1.8p-1075", FloatHex)?.as_float(), Some(f64::from_bits(1)));
    assert_eq!(parse("0x1.8p-1074", FloatHex)?.as_float(), Some(f64::from_bits(2)));
    assert_eq!(parse("0x0.fffffffffffff8p-1022", FloatHex)?.as_float(),
               Some(f64::MIN_POSITIVE));
    assert_eq!(parse("0x0.fffffffffffffp-1022", FloatHex)?.as_float(),
               Some(f64::from_bits((1 << 52) - 1)));
    Ok(())
}

#[test]
fn float_errors() {
    assert_eq!(err("3", FloatDecimal), ParseError::MalformedFloat("missing '.'"));
    assert_eq!(err(".", FloatDecimal), ParseError::MalformedFloat("missing mantissa"));
    assert_eq!(err("1.2.3", FloatDecimal), ParseError::InvalidDigit('.', 10));
    assert_eq!(err("2.5", FloatScientific), ParseError::MalformedFloat("missing exponent"));
    assert_eq!(err("e5", FloatScientific), ParseError::MalformedFloat("missing mantissa"));
    assert_eq!(err("2.5e", FloatScientific),
               ParseError::MalformedFloat("missing exponent digits"));
    assert_eq!(err("2.5e+", FloatScientific),
               ParseError::MalformedFloat("missing exponent digits"));
    assert_eq!(err("2.5e1.5", FloatScientific), ParseError::InvalidDigit('.', 10));
    assert_eq!(err("0x1.0", FloatHex), ParseError::MalformedFloat("missing exponent"));
    assert_eq!(err("0xp3", FloatHex), ParseError::MalformedFloat("missing mantissa"));
    assert_eq!(err("0x1g.0p3", FloatHex), ParseError::InvalidDigit('g', 16));
    assert_eq!(err("1e400", FloatScientific), ParseError::Overflow);
    assert_eq!(err("0x1p5000", FloatHex), ParseError::Overflow);
}

#[test]
fn float_underflow_is_zero() -> Result<()> {
    assert_eq!(parse("1e-400", FloatScientific)?.as_float(), Some(0.0));
    assert_eq!(parse("0x1p-5000", FloatHex)?.as_float(), Some(0.0));
    Ok(())
}

#[test]
fn huge_hex_exponents() -> Result<()> {
    assert_eq!(parse("0x0p99999999999999999999", FloatHex)?.as_float(), Some(0.0));
    assert_eq!(parse("0x0.000p-99999999999999999999", FloatHex)?.as_float(), Some(0.0));
    assert_eq!(parse("0x1p-99999999999999999999", FloatHex)?.as_float(), Some(0.0));
    assert_eq!(err("0x1p99999999999999999999", FloatHex), ParseError::Overflow);
    Ok(())
}

#[test]
fn long_digit_runs() -> Result<()> {
    let zeros = "0".repeat(100_000);
    assert_eq!(parse(&format!("{}42", zeros), IntegerDecimal)?.as_integer(), Some(42));
    assert_eq!(parse(&format!("0x{}1p0", zeros), FloatHex)?.as_float(), Some(1.0));
    let text = "\\x41".repeat(50_000);
    assert_eq!(parse(&text, TextInterpreted)?.as_text().map(|s| s.len()), Some(50_000));
    Ok(())
}

#[test]
fn code_point_equivalence() -> Result<()> {
    for (text, cat) in [("a", CodePointChar),
                        ("141", CodePointOctalEscape),
                        ("\\141", CodePointOctalEscape),
                        ("61", CodePointHexEscape),
                        ("\\x61", CodePointHexEscape),
                        ("0061", CodePointUnicode16),
                        ("\\u0061", CodePointUnicode16),
                        ("00000061", CodePointUnicode32),
                        ("\\U00000061", CodePointUnicode32)] {
        let v = parse(text, cat)?;
        assert_eq!(v.as_code_point(), Some('a'), "{}", text);
        assert_eq!(*v.value(), Value::CodePoint('a'));
    }
    Ok(())
}

#[test]
fn code_point_forms() -> Result<()> {
    assert_eq!(parse("\\n", CodePointChar)?.as_code_point(), Some('\n'));
    assert_eq!(parse("\\'", CodePointChar)?.as_code_point(), Some('\''));
    assert_eq!(parse("\\", CodePointChar)?.as_code_point(), Some('\\'));
    assert_eq!(parse("λ", CodePointChar)?.as_code_point(), Some('λ'));
    assert_eq!(parse("0", CodePointOctalEscape)?.as_code_point(), Some('\0'));
    assert_eq!(parse("377", CodePointOctalEscape)?.as_code_point(), Some('\u{FF}'));
    assert_eq!(parse("FF", CodePointHexEscape)?.as_code_point(), Some('\u{FF}'));
    assert_eq!(parse("03BB", CodePointUnicode16)?.as_code_point(), Some('λ'));
    assert_eq!(parse("0010FFFF", CodePointUnicode32)?.as_code_point(), Some('\u{10FFFF}'));
    Ok(())
}

#[test]
fn code_point_errors() {
    assert_eq!(err("D800", CodePointUnicode16), ParseError::InvalidCodePoint(0xD800));
    assert_eq!(err("0000DFFF", CodePointUnicode32), ParseError::InvalidCodePoint(0xDFFF));
    assert_eq!(err("00110000", CodePointUnicode32), ParseError::InvalidCodePoint(0x110000));
    assert_eq!(err("400", CodePointOctalEscape), ParseError::Overflow);
    assert_eq!(err("1411", CodePointOctalEscape), ParseError::TooManyDigits);
    assert_eq!(err("148", CodePointOctalEscape), ParseError::InvalidDigit('8', 8));
    assert_eq!(err("6", CodePointHexEscape),
               ParseError::WrongDigitCount { expected: 2, got: 1 });
    assert_eq!(err("61", CodePointUnicode16),
               ParseError::WrongDigitCount { expected: 4, got: 2 });
    assert_eq!(err("0061", CodePointUnicode32),
               ParseError::WrongDigitCount { expected: 8, got: 4 });
    assert_eq!(err("6g", CodePointHexEscape), ParseError::InvalidDigit('g', 16));
    assert_eq!(err("ab", CodePointChar), ParseError::NotSingleCodePoint(2));
    assert_eq!(err("", CodePointChar), ParseError::NotSingleCodePoint(0));
    assert_eq!(err("\\q", CodePointChar), ParseError::UnknownEscape('q'));
}

#[test]
fn escape_fidelity() -> Result<()> {
    let interpreted = parse("Hello,\\n\\\"World!\\\"", TextInterpreted)?;
    assert_eq!(interpreted.as_text(), Some("Hello,\n\"World!\""));
    let raw = parse("Hello,\nWorld!", TextRaw)?;
    assert_eq!(raw.as_text(), Some("Hello,\nWorld!"));
    assert_eq!(parse("C:\\dir\\n", TextRaw)?.as_text(), Some("C:\\dir\\n"));
    assert_eq!(parse("", TextRaw)?.as_text(), Some(""));
    Ok(())
}

#[test]
fn interpreted_escapes() -> Result<()> {
    assert_eq!(parse("\\a\\b\\f\\n\\r\\t\\v\\\\\\'\\\"", TextInterpreted)?.as_text(),
               Some("\x07\x08\x0C\n\r\t\x0B\\'\""));
    assert_eq!(parse("\\101\\x42\\u0043\\U00000044", TextInterpreted)?.as_text(),
               Some("ABCD"));
    assert_eq!(parse("\\u00e9t\\u00E9", TextInterpreted)?.as_text(), Some("été"));
    assert_eq!(parse("\\0000", TextInterpreted)?.as_text(), Some("\u{0}0"));
    Ok(())
}

#[test]
fn interpreted_errors() {
    assert_eq!(err("\\q", TextInterpreted), ParseError::UnknownEscape('q'));
    assert_eq!(err("abc\\", TextInterpreted), ParseError::UnexpectedEnd);
    assert_eq!(err("\\x4", TextInterpreted),
               ParseError::WrongDigitCount { expected: 2, got: 1 });
    assert_eq!(err("\\12", TextInterpreted),
               ParseError::WrongDigitCount { expected: 3, got: 2 });
    assert_eq!(err("\\400", TextInterpreted), ParseError::Overflow);
    assert_eq!(err("\\uD800", TextInterpreted), ParseError::InvalidCodePoint(0xD800));
    assert_eq!(err("\\u12G4", TextInterpreted), ParseError::InvalidDigit('G', 16));
}
