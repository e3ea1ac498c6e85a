use cardsmith_core::{
    CardRecord, Country, Network, OutcomeRecord, OutcomeStatus, export_lines, format_record,
    import_lines, parse_record,
};

#[test]
fn parses_well_formed_line() {
    let record = parse_record("4111111111111111|12|2030|123").expect("record parses");
    assert_eq!(record.number, "4111111111111111");
    assert_eq!(record.expiry_month, "12");
    assert_eq!(record.expiry_year, "2030");
    assert_eq!(record.security_code, "123");
    assert_eq!(record.network, Network::Visa);
}

#[test]
fn short_lines_are_rejected() {
    assert!(parse_record("only|two").is_none());
    assert!(parse_record("a|b|c").is_none());
    assert!(parse_record("").is_none());
    assert!(parse_record("4111111111111111").is_none());
}

#[test]
fn fields_are_trimmed_and_extras_ignored() {
    let record =
        parse_record("  6011000000000004 | 01 |2029 | 4321 | extra | more").expect("record parses");
    assert_eq!(record.number, "6011000000000004");
    assert_eq!(record.expiry_month, "01");
    assert_eq!(record.expiry_year, "2029");
    assert_eq!(record.security_code, "4321");
    assert_eq!(record.network, Network::Discover);
}

#[test]
fn empty_fields_still_parse() {
    let record = parse_record("|||").expect("four empty fields");
    assert_eq!(record.number, "");
    assert_eq!(record.network, Network::Unknown);
}

#[test]
fn format_then_parse_keeps_scalar_fields() {
    let records = [
        CardRecord::new("4532015112830366", "07", "2031", "999"),
        CardRecord::new("378282246310005", "11", "2027", "1234"),
        CardRecord::new("0000", "00", "0000", ""),
    ];
    for record in records {
        let line = format_record(&record);
        let parsed = parse_record(&line).expect("formatted line parses");
        assert_eq!(parsed, record, "line {line}");
    }
}

#[test]
fn export_joins_lines_and_import_skips_blanks() {
    let records = vec![
        CardRecord::new("4111111111111111", "12", "2030", "123"),
        CardRecord::new("6011000000000004", "01", "2029", "456"),
    ];
    let blob = export_lines(&records);
    assert_eq!(
        blob,
        "4111111111111111|12|2030|123\n6011000000000004|01|2029|456"
    );

    let text = format!("\n{blob}\n   \n\r\n");
    let lines = import_lines(&text);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[1], "6011000000000004|01|2029|456");
}

#[test]
fn outcome_serializes_flat() {
    let outcome = OutcomeRecord {
        card: CardRecord::new("4111111111111111", "12", "2030", "123"),
        status: OutcomeStatus::Incomplete,
        message: "Insufficient Funds".to_string(),
        issuer_label: Some("Global Bank 4111".to_string()),
        region_label: None,
    };
    let value = serde_json::to_value(&outcome).expect("serialize outcome");
    assert_eq!(value["number"], "4111111111111111");
    assert_eq!(value["network"], "VISA");
    assert_eq!(value["status"], "INCOMPLETE");
    assert!(value.get("region_label").is_none());
}

#[test]
fn labels_parse_back() {
    for network in Network::ALL {
        assert_eq!(network.label().parse::<Network>(), Ok(network));
    }
    for country in Country::ALL {
        assert_eq!(country.code().parse::<Country>(), Ok(country));
    }
    assert!("jp".parse::<Country>().is_err());
    assert!(" JP ".parse::<Country>().is_err());
    assert!("ZZ".parse::<Country>().is_err());
    assert_eq!(Country::normalize("ZZ"), Country::US);
    assert_eq!(Country::normalize(""), Country::US);
    assert_eq!(Country::normalize("jp"), Country::US);
    assert_eq!(Country::normalize("JP"), Country::JP);
}
