use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use cardsmith_core::{Network, classify, is_valid_checksum};
use cardsmith_generate::{
    CardBatchRequest, DEFAULT_PATTERN, GenerationError, MonthSelector, SecurityCodeSelector,
    YearSelector, expand_pattern, generate_batch,
};

#[test]
fn expanded_numbers_always_pass_checksum() {
    let mut rng = ChaCha8Rng::seed_from_u64(7);
    let patterns = [
        DEFAULT_PATTERN,
        "",
        "4",
        "xxxx",
        "37xx xxxx xxxx xxx",
        "6011-XXXX-XXXX-XXXX",
        "abc!?",
        "5555555555554444999",
    ];
    for pattern in patterns {
        for length in [2, 13, 15, 16, 19] {
            let number = expand_pattern(pattern, length, &mut rng);
            assert!(is_valid_checksum(&number), "{pattern} -> {number}");
            assert!(number.len() >= length, "{pattern} len {length} -> {number}");
            assert!(number.bytes().all(|byte| byte.is_ascii_digit()));
        }
    }
}

#[test]
fn fixed_prefix_is_preserved() {
    let mut rng = ChaCha8Rng::seed_from_u64(11);
    for _ in 0..50 {
        let number = expand_pattern("450875xxxxxxxxxx", 16, &mut rng);
        // Sixteen mask characters already fill the payload, so the check
        // digit makes seventeen.
        assert_eq!(number.len(), 17);
        assert!(number.starts_with("450875"));
        assert_eq!(classify(&number), Network::Electron);
    }
}

#[test]
fn long_patterns_are_not_truncated() {
    let mut rng = ChaCha8Rng::seed_from_u64(5);
    let number = expand_pattern("1234567890123456789", 16, &mut rng);
    assert_eq!(number.len(), 20);
    assert!(number.starts_with("1234567890123456789"));
}

#[test]
fn check_digit_is_appended_after_the_payload() {
    let mut rng = ChaCha8Rng::seed_from_u64(13);
    for _ in 0..20 {
        let short = expand_pattern("6011xxxxxxxxxxx", 16, &mut rng);
        assert_eq!(short.len(), 16);
        assert_eq!(classify(&short), Network::Discover);

        let full = expand_pattern("6011xxxxxxxxxxxx", 16, &mut rng);
        assert_eq!(full.len(), 17);
        assert_eq!(classify(&full), Network::Unknown);
        assert!(is_valid_checksum(&full));

        let padded = expand_pattern("4111", 16, &mut rng);
        assert_eq!(padded.len(), 16);
    }
}

#[test]
fn seeded_batches_reproduce() {
    let request = CardBatchRequest {
        quantity: 25,
        ..CardBatchRequest::default()
    };
    let batch_a = generate_batch(&request, 2026, &mut ChaCha8Rng::seed_from_u64(42));
    let batch_b = generate_batch(&request, 2026, &mut ChaCha8Rng::seed_from_u64(42));
    let batch_c = generate_batch(&request, 2026, &mut ChaCha8Rng::seed_from_u64(43));
    assert_eq!(batch_a, batch_b);
    assert_ne!(batch_a, batch_c);
}

#[test]
fn random_selectors_stay_in_range() {
    let request = CardBatchRequest {
        quantity: 200,
        ..CardBatchRequest::default()
    };
    let mut rng = ChaCha8Rng::seed_from_u64(99);
    let cards = generate_batch(&request, 2026, &mut rng);
    assert_eq!(cards.len(), 200);
    for card in &cards {
        let month: u32 = card.expiry_month.parse().expect("numeric month");
        assert_eq!(card.expiry_month.len(), 2);
        assert!((1..=12).contains(&month));
        let year: u32 = card.expiry_year.parse().expect("numeric year");
        assert!((2026..=2031).contains(&year));
        let code: u32 = card.security_code.parse().expect("numeric code");
        assert!((100..=999).contains(&code));
        assert!(is_valid_checksum(&card.number));
        assert_eq!(card.network, classify(&card.number));
    }
}

#[test]
fn fixed_selectors_are_copied() {
    let request = CardBatchRequest {
        pattern: "6011xxxxxxxxxxx".to_string(),
        month: MonthSelector::Fixed("04".to_string()),
        year: YearSelector::Fixed("2030".to_string()),
        security_code: SecurityCodeSelector::Fixed("0042".to_string()),
        quantity: 3,
        ..CardBatchRequest::default()
    };
    request.validate().expect("valid request");
    let cards = generate_batch(&request, 2026, &mut ChaCha8Rng::seed_from_u64(1));
    for card in cards {
        assert_eq!(card.expiry_month, "04");
        assert_eq!(card.expiry_year, "2030");
        assert_eq!(card.security_code, "0042");
        assert_eq!(card.network, Network::Discover);
    }
}

#[test]
fn validation_rejects_bad_requests() {
    let cases = [
        CardBatchRequest {
            quantity: 0,
            ..CardBatchRequest::default()
        },
        CardBatchRequest {
            quantity: 501,
            ..CardBatchRequest::default()
        },
        CardBatchRequest {
            length: 1,
            ..CardBatchRequest::default()
        },
        CardBatchRequest {
            month: MonthSelector::Fixed("13".to_string()),
            ..CardBatchRequest::default()
        },
        CardBatchRequest {
            year: YearSelector::Fixed("30".to_string()),
            ..CardBatchRequest::default()
        },
        CardBatchRequest {
            security_code: SecurityCodeSelector::Fixed("12a".to_string()),
            ..CardBatchRequest::default()
        },
    ];
    for request in cases {
        assert!(
            matches!(request.validate(), Err(GenerationError::InvalidRequest(_))),
            "{request:?}"
        );
    }
    assert!(CardBatchRequest::default().validate().is_ok());
}

#[test]
fn card_batches_export_as_csv() {
    let request = CardBatchRequest {
        pattern: "4111xxxxxxxxxxx".to_string(),
        quantity: 3,
        ..CardBatchRequest::default()
    };
    let cards = generate_batch(&request, 2026, &mut ChaCha8Rng::seed_from_u64(11));

    let mut buffer = Vec::new();
    let bytes = cardsmith_generate::output::csv::write_cards_csv(&mut buffer, &cards)
        .expect("write csv");
    assert_eq!(bytes as usize, buffer.len());

    let text = String::from_utf8(buffer).expect("utf8 csv");
    let mut lines = text.lines();
    assert_eq!(
        lines.next(),
        Some("number,expiry_month,expiry_year,security_code,network")
    );
    let rows: Vec<&str> = lines.collect();
    assert_eq!(rows.len(), 3);
    for (row, card) in rows.iter().zip(&cards) {
        assert_eq!(card.number.len(), 16);
        assert!(row.starts_with(&card.number));
        assert!(row.ends_with(",VISA"));
    }
}
