// tests/sanitize.rs
use wage_finder::core::sanitize::*;

#[test]
fn hourly_rates_become_annual() {
    assert_eq!(parse_wage("45.00"), 93_600);
    assert_eq!(parse_wage("55.00"), 114_400);
    assert_eq!(parse_wage("65.00"), 135_200);
    assert_eq!(parse_wage("$75.00"), 156_000);
    // just under the cutoff is still hourly
    assert_eq!(parse_wage("499.99"), 1_039_979);
}

#[test]
fn annual_values_pass_through() {
    assert_eq!(parse_wage("500"), 500);
    assert_eq!(parse_wage("$120,000"), 120_000);
    assert_eq!(parse_wage(" 98765.4 "), 98_765);
}

#[test]
fn junk_wages_are_zero() {
    assert_eq!(parse_wage(""), 0);
    assert_eq!(parse_wage("N/A"), 0);
    assert_eq!(parse_wage("-12"), 0);
    assert_eq!(parse_wage("$"), 0);
}

#[test]
fn number_prefix_is_lenient() {
    assert_eq!(parse_number_prefix("12.5abc"), Some(12.5));
    assert_eq!(parse_number_prefix(".5"), Some(0.5));
    assert_eq!(parse_number_prefix("-3"), Some(-3.0));
    assert_eq!(parse_number_prefix("-"), None);
    assert_eq!(parse_number_prefix("abc"), None);
    assert_eq!(strip_currency(" $1,234 "), "1234");
}

#[test]
fn exponent_notation_is_read() {
    assert_eq!(parse_number_prefix("1.2e5"), Some(120_000.0));
    assert_eq!(parse_number_prefix("2E+3x"), Some(2_000.0));
    assert_eq!(parse_number_prefix("5e-1"), Some(0.5));
    // a bare `e` is not an exponent
    assert_eq!(parse_number_prefix("7e"), Some(7.0));
    assert_eq!(parse_number_prefix("7e+"), Some(7.0));
    assert_eq!(parse_wage("1.2e5"), 120_000);
}

#[test]
fn year_labels_from_archive_names() {
    assert_eq!(year_label("OFLC_Wages_2025-26.zip").as_deref(), Some("2025-26"));
    assert_eq!(year_label("OFLC_Wages_FY2024-25_Updated.zip").as_deref(), Some("2024-25"));
    assert_eq!(year_label("2023-24"), Some("2023-24".to_string()));
    assert_eq!(year_label("OFLC_Wages.zip"), None);
    assert_eq!(year_label("OFLC_2025-2.zip"), None);
}

#[test]
fn onet_base_strips_two_digit_suffix_only() {
    assert_eq!(onet_base("15-1243.01"), "15-1243");
    assert_eq!(onet_base("15-1243.00"), "15-1243");
    assert_eq!(onet_base("15-1243"), "15-1243");
    assert_eq!(onet_base("15-1243.1"), "15-1243.1");
}

#[test]
fn salary_input_is_regrouped() {
    assert_eq!(format_salary_input("120000"), "120,000");
    assert_eq!(format_salary_input("$1,2a34567"), "1,234,567");
    assert_eq!(format_salary_input("123"), "123");
    assert_eq!(format_salary_input("abc"), "");
    assert_eq!(format_salary_input(""), "");
}

#[test]
fn currency_is_whole_dollars() {
    assert_eq!(format_currency(93_600.0), "$93,600");
    assert_eq!(format_currency(0.0), "$0");
    assert_eq!(format_currency(1_234.5), "$1,235");
    assert_eq!(format_currency(999.0), "$999");
}

#[test]
fn collate_is_case_insensitive_then_exact() {
    let mut v = vec!["banana", "apple", "Apple", "Cherry"];
    v.sort_by(|a, b| collate(a, b));
    assert_eq!(v, vec!["Apple", "apple", "banana", "Cherry"]);
}
